//! Configuration for the code input component.
//!
//! A [`Config`] can be filled in directly, or built from options passed to
//! [`new`](super::new), which mirrors the functional options used by the
//! other components:
//!
//! ```rust
//! use bubbletea_codeinput::codeinput::{new, with_auto_focus, with_charset, with_length, Charset};
//!
//! let input = new(&[
//!     with_length(4),
//!     with_charset(Charset::Numeric),
//!     with_auto_focus(true),
//! ])
//! .unwrap();
//! assert_eq!(input.length(), 4);
//! assert_eq!(input.position(), Some(0));
//! ```

use super::charset::Charset;
use super::keymap::KeyMap;
use super::view::Styles;
use std::time::Duration;

/// Number of cells when no length is configured.
pub const DEFAULT_LENGTH: usize = 6;

/// How long error feedback shows before the code clears.
pub const DEFAULT_ERROR_DURATION: Duration = Duration::from_millis(500);

/// How long success feedback shows before the `Success` event and the clear.
pub const DEFAULT_SUCCESS_DURATION: Duration = Duration::from_millis(1000);

/// Settings a code input is created from.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of cells. Must be at least one.
    pub length: usize,
    /// Initial code, seeded like an external value update.
    pub value: String,
    /// Reject all input and focus moves.
    pub disabled: bool,
    /// Focus the first cell on creation.
    pub auto_focus: bool,
    /// Hint drawn in empty cells (first grapheme only).
    pub placeholder: String,
    /// Static error styling, independent of the error animation.
    pub error: bool,
    /// Characters a cell accepts.
    pub charset: Charset,
    /// Duration of the error feedback.
    pub error_duration: Duration,
    /// Duration of the success feedback.
    pub success_duration: Duration,
    /// Key bindings.
    pub key_map: KeyMap,
    /// Cell styles.
    pub styles: Styles,
    /// Draw this character instead of the entered ones.
    pub mask: Option<char>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            value: String::new(),
            disabled: false,
            auto_focus: false,
            placeholder: String::new(),
            error: false,
            charset: Charset::default(),
            error_duration: DEFAULT_ERROR_DURATION,
            success_duration: DEFAULT_SUCCESS_DURATION,
            key_map: KeyMap::default(),
            styles: Styles::default(),
            mask: None,
        }
    }
}

/// A single configuration option, applied to a [`Config`] by [`new`](super::new).
#[derive(Debug, Clone)]
pub enum CodeInputOption {
    /// Sets the number of cells.
    WithLength(usize),
    /// Sets the initial code.
    WithValue(String),
    /// Starts disabled.
    WithDisabled(bool),
    /// Focuses the first cell on creation.
    WithAutoFocus(bool),
    /// Sets the empty-cell hint.
    WithPlaceholder(String),
    /// Sets static error styling.
    WithError(bool),
    /// Sets the accepted characters.
    WithCharset(Charset),
    /// Sets the error feedback duration.
    WithErrorDuration(Duration),
    /// Sets the success feedback duration.
    WithSuccessDuration(Duration),
    /// Replaces the key bindings.
    WithKeyMap(Box<KeyMap>),
    /// Replaces the cell styles.
    WithStyles(Box<Styles>),
    /// Masks entered characters on screen.
    WithMask(char),
}

impl CodeInputOption {
    pub(super) fn apply(&self, c: &mut Config) {
        match self {
            CodeInputOption::WithLength(n) => c.length = *n,
            CodeInputOption::WithValue(v) => c.value = v.clone(),
            CodeInputOption::WithDisabled(b) => c.disabled = *b,
            CodeInputOption::WithAutoFocus(b) => c.auto_focus = *b,
            CodeInputOption::WithPlaceholder(p) => c.placeholder = p.clone(),
            CodeInputOption::WithError(b) => c.error = *b,
            CodeInputOption::WithCharset(cs) => c.charset = cs.clone(),
            CodeInputOption::WithErrorDuration(d) => c.error_duration = *d,
            CodeInputOption::WithSuccessDuration(d) => c.success_duration = *d,
            CodeInputOption::WithKeyMap(k) => c.key_map = k.as_ref().clone(),
            CodeInputOption::WithStyles(s) => c.styles = s.as_ref().clone(),
            CodeInputOption::WithMask(m) => c.mask = Some(*m),
        }
    }
}

/// Sets the number of cells (default 6).
pub fn with_length(length: usize) -> CodeInputOption {
    CodeInputOption::WithLength(length)
}

/// Sets the initial code (default empty).
pub fn with_value(value: &str) -> CodeInputOption {
    CodeInputOption::WithValue(value.to_string())
}

/// Starts the input disabled (default false).
pub fn with_disabled(disabled: bool) -> CodeInputOption {
    CodeInputOption::WithDisabled(disabled)
}

/// Focuses the first cell on creation (default false).
pub fn with_auto_focus(auto_focus: bool) -> CodeInputOption {
    CodeInputOption::WithAutoFocus(auto_focus)
}

/// Sets the hint drawn in empty cells (default none).
pub fn with_placeholder(placeholder: &str) -> CodeInputOption {
    CodeInputOption::WithPlaceholder(placeholder.to_string())
}

/// Sets static error styling (default false).
pub fn with_error(error: bool) -> CodeInputOption {
    CodeInputOption::WithError(error)
}

/// Sets the accepted characters (default [`Charset::Visible`]).
pub fn with_charset(charset: Charset) -> CodeInputOption {
    CodeInputOption::WithCharset(charset)
}

/// Sets how long error feedback shows.
pub fn with_error_duration(duration: Duration) -> CodeInputOption {
    CodeInputOption::WithErrorDuration(duration)
}

/// Sets how long success feedback shows.
pub fn with_success_duration(duration: Duration) -> CodeInputOption {
    CodeInputOption::WithSuccessDuration(duration)
}

/// Replaces the key bindings.
pub fn with_key_map(key_map: KeyMap) -> CodeInputOption {
    CodeInputOption::WithKeyMap(Box::new(key_map))
}

/// Replaces the cell styles.
pub fn with_styles(styles: Styles) -> CodeInputOption {
    CodeInputOption::WithStyles(Box::new(styles))
}

/// Draws `mask` instead of the entered characters.
pub fn with_mask(mask: char) -> CodeInputOption {
    CodeInputOption::WithMask(mask)
}
