#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-codeinput/")]

//! # bubbletea-codeinput
//!
//! A verification code input for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications: a row of single-character cells for one-time passwords,
//! PINs and pairing codes.
//!
//! ## Overview
//!
//! The component follows the Elm Architecture like the rest of the
//! bubbletea-widgets family: messages go in through `update()`, the row is
//! drawn by `view()`, and timed behavior is expressed as commands.
//!
//! ## Features
//!
//! - **Auto-advance**: typing fills the active cell and moves right
//! - **Backspace-through**: backspace on an empty cell clears the previous one
//! - **Paste distribution**: pasted text is filtered and spread across the cells
//! - **Completion detection**: one `Complete` event per fill
//! - **Feedback animations**: timed error/success states that clear the code,
//!   where the most recent request always wins
//! - **Configurable charset**: visible, numeric, alphanumeric or a custom predicate
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_codeinput::prelude::*;
//!
//! let mut code = codeinput_new(&[with_length(6), with_charset(Charset::Numeric)]).unwrap();
//! code.focus();
//! code.set_value("123456");
//!
//! assert_eq!(code.take_events(), vec![Event::Complete("123456".to_string())]);
//! let _clear_later = code.show_success();
//! ```
//!
//! ## Key Bindings
//!
//! Bindings live in [`codeinput::KeyMap`] and can be replaced per instance:
//!
//! ```rust
//! use bubbletea_codeinput::codeinput::{default_key_map, new, with_key_map};
//! use bubbletea_codeinput::key::{new_binding, with_help, with_keys_str};
//!
//! let mut keys = default_key_map();
//! keys.paste = new_binding(vec![with_keys_str(&["ctrl+y"]), with_help("ctrl+y", "paste")]);
//! let code = new(&[with_key_map(keys)]).unwrap();
//! assert_eq!(code.key_map.paste.help().key, "ctrl+y");
//! ```

pub mod codeinput;
pub mod error;
pub mod key;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// - **Focused**: the component receives keyboard input and shows its active state
/// - **Blurred**: the component ignores keyboard input
///
/// ```rust
/// use bubbletea_codeinput::prelude::*;
///
/// fn toggle<T: Component>(c: &mut T) {
///     if c.focused() {
///         c.blur();
///     } else {
///         let _ = c.focus();
///     }
/// }
///
/// let mut code = CodeInput::default();
/// toggle(&mut code);
/// assert!(Component::focused(&code));
/// ```
pub trait Component {
    /// Sets the component to focused state.
    ///
    /// May return a command for focus-related work.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use codeinput::{
    default_key_map as codeinput_default_key_map, new as codeinput_new, paste, AnimationKind,
    AnimationMsg, Charset, Event, KeyMap as CodeInputKeyMap, Model as CodeInput, PasteErrMsg,
    PasteMsg, State,
};
pub use error::{Error, Result};
pub use key::{
    matches, matches_binding, new_binding, with_disabled, with_help, with_keys, with_keys_str,
    Binding, Help as KeyHelp, KeyMap, KeyPress,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_codeinput::prelude::*;
/// ```
pub mod prelude {
    pub use crate::codeinput::{
        default_key_map as codeinput_default_key_map, new as codeinput_new, with_auto_focus,
        with_charset, with_disabled as with_code_disabled, with_error, with_error_duration,
        with_length, with_mask, with_placeholder, with_success_duration, with_value, Charset,
        Event, KeyMap as CodeInputKeyMap, Model as CodeInput, State,
    };
    pub use crate::key::{matches_binding, Binding, KeyMap, KeyPress};
    pub use crate::Component;
}
