//! Verification code input component for Bubble Tea applications.
//!
//! A row of N single-character cells that together hold one code (an OTP,
//! a PIN, a pairing code). Typing fills the active cell and moves right,
//! backspace clears and moves left, pasted text is spread across the cells,
//! and a [`Event::Complete`] is queued when every cell is filled. The host
//! can then show timed error or success feedback, after which the code
//! clears itself.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_codeinput::codeinput::{new, with_auto_focus, with_charset, with_length, Charset};
//!
//! let mut input = new(&[
//!     with_length(6),
//!     with_charset(Charset::Numeric),
//!     with_auto_focus(true),
//! ])
//! .unwrap();
//! assert_eq!(input.position(), Some(0));
//! assert_eq!(input.value(), "");
//! ```
//!
//! # bubbletea-rs Integration
//!
//! ```rust
//! use bubbletea_codeinput::codeinput::{new, with_length, Event, Model as CodeInput};
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//!
//! struct App {
//!     code: CodeInput,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut code = new(&[with_length(4)]).unwrap();
//!         code.focus();
//!         (Self { code }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         let cmd = self.code.update(msg);
//!         for event in self.code.take_events() {
//!             if let Event::Complete(code) = event {
//!                 // Verify `code`, then give feedback.
//!                 return if code == "1234" {
//!                     self.code.show_success()
//!                 } else {
//!                     self.code.show_error()
//!                 };
//!             }
//!         }
//!         cmd
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("Enter the code we sent you:\n\n{}", self.code.view())
//!     }
//! }
//! ```
//!
//! # Feedback Animations
//!
//! [`Model::show_error`] and [`Model::show_success`] return a timer command.
//! When its [`AnimationMsg`] comes back through `update`, the cells clear
//! and the first cell is focused; the success path queues [`Event::Success`]
//! first. Only the most recent call is honored: a new call, [`Model::clear`]
//! or an edit cancels whatever was pending.

pub mod animation;
pub mod buffer;
pub mod charset;
pub mod config;
pub mod focus;
pub mod keymap;
pub mod methods;
pub mod model;
pub mod types;
pub mod view;


pub use buffer::Buffer;
pub use charset::{AllowFunc, Charset};
pub use config::{
    with_auto_focus, with_charset, with_disabled, with_error, with_error_duration, with_key_map,
    with_length, with_mask, with_placeholder, with_styles, with_success_duration, with_value,
    CodeInputOption, Config, DEFAULT_ERROR_DURATION, DEFAULT_LENGTH, DEFAULT_SUCCESS_DURATION,
};
pub use focus::FocusRouter;
pub use keymap::{default_key_map, KeyMap};
pub use model::{new, paste, Model};
pub use types::{AnimationKind, AnimationMsg, Event, PasteErrMsg, PasteMsg, State};
pub use view::{default_styles, Styles};
