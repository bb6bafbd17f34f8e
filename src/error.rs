//! Error types for building components.

use thiserror::Error;

/// Result alias used by fallible constructors in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring a component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A code input needs at least one cell.
    #[error("invalid code length {length}: a code input needs at least one cell")]
    InvalidLength {
        /// The rejected length.
        length: usize,
    },
}
