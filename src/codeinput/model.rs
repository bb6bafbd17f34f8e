//! Core model implementation for the code input component.

use super::animation::Animator;
use super::buffer::Buffer;
use super::config::{CodeInputOption, Config};
use super::focus::FocusRouter;
use super::keymap::KeyMap;
use super::types::{Event, PasteErrMsg, PasteMsg, State};
use super::view::Styles;
use crate::error::{Error, Result};
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

// Animation messages are only accepted by the instance that scheduled them.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

/// A row of single-character cells that together hold one verification code.
///
/// The model owns the cells, the active cell, the interaction [`State`] and
/// at most one pending feedback animation. Input arrives through
/// [`update`](Model::update); notifications for the host are queued as
/// [`Event`]s and drained with [`take_events`](Model::take_events).
///
/// # Examples
///
/// ```rust
/// use bubbletea_codeinput::codeinput::{new, with_length, with_charset, Charset, Event};
/// use bubbletea_rs::KeyMsg;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let mut input = new(&[with_length(4), with_charset(Charset::Numeric)]).unwrap();
/// input.focus();
///
/// for c in "1234".chars() {
///     input.update(Box::new(KeyMsg { key: KeyCode::Char(c), modifiers: KeyModifiers::NONE }));
/// }
///
/// assert_eq!(input.value(), "1234");
/// assert_eq!(input.take_events().last(), Some(&Event::Complete("1234".to_string())));
/// ```
#[derive(Debug)]
pub struct Model {
    /// Err is the last clipboard error, if any.
    pub err: Option<String>,

    /// Placeholder is drawn in empty cells (first grapheme only).
    pub placeholder: String,

    /// Mask, when set, is drawn instead of entered characters.
    pub mask: Option<char>,

    /// Styles for the cells.
    pub styles: Styles,

    /// KeyMap encodes the keybindings.
    pub key_map: KeyMap,

    pub(super) buffer: Buffer,
    pub(super) focus: FocusRouter,
    pub(super) state: State,
    pub(super) disabled: bool,
    pub(super) error: bool,
    pub(super) animation: Animator,
    pub(super) events: Vec<Event>,
    pub(super) id: usize,
}

/// Creates a code input from options.
///
/// # Errors
///
/// Returns [`Error::InvalidLength`] when the configured length is zero.
///
/// # Examples
///
/// ```rust
/// use bubbletea_codeinput::codeinput::{new, with_length, with_value};
///
/// let input = new(&[with_length(4), with_value("12")]).unwrap();
/// assert_eq!(input.value(), "12");
///
/// assert!(new(&[with_length(0)]).is_err());
/// ```
pub fn new(opts: &[CodeInputOption]) -> Result<Model> {
    let mut config = Config::default();
    for opt in opts {
        opt.apply(&mut config);
    }
    Model::from_config(config)
}

impl Model {
    /// Creates a code input from a [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] when `config.length` is zero.
    pub fn from_config(config: Config) -> Result<Self> {
        if config.length == 0 {
            return Err(Error::InvalidLength {
                length: config.length,
            });
        }
        Ok(Self::build(config))
    }

    fn build(config: Config) -> Self {
        let mut buffer = Buffer::new(config.length, config.charset);
        buffer.seed_from(&config.value);

        let mut focus = FocusRouter::new(config.length);
        focus.set_disabled(config.disabled);
        if config.auto_focus {
            focus.focus_first();
        }

        let state = if buffer.is_full() {
            State::Complete
        } else {
            State::Idle
        };

        let id = next_id();
        tracing::debug!(
            message = "codeinput.new",
            id,
            length = config.length,
            %state,
            disabled = config.disabled
        );

        Self {
            err: None,
            placeholder: config.placeholder,
            mask: config.mask,
            styles: config.styles,
            key_map: config.key_map,
            buffer,
            focus,
            state,
            disabled: config.disabled,
            error: config.error,
            animation: Animator::new(config.error_duration, config.success_duration),
            events: Vec::new(),
            id,
        }
    }

    /// Unique identifier of this instance, carried by its animation messages.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Number of cells.
    pub fn length(&self) -> usize {
        self.buffer.len()
    }

    /// The canonical value: filled cells concatenated in order.
    pub fn value(&self) -> String {
        self.buffer.joined()
    }

    /// The character in cell `index`, if filled.
    pub fn slot(&self, index: usize) -> Option<char> {
        self.buffer.get(index)
    }

    /// The active cell, `None` when blurred.
    pub fn position(&self) -> Option<usize> {
        self.focus.current()
    }

    /// The interaction state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Whether every cell holds a character.
    pub fn is_complete(&self) -> bool {
        self.buffer.is_full()
    }

    /// Whether input and focus moves are rejected.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Enables or disables the input.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.focus.set_disabled(disabled);
    }

    /// Whether static error styling is on.
    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Turns static error styling on or off. Independent of [`show_error`](Model::show_error).
    pub fn set_error(&mut self, error: bool) {
        self.error = error;
    }

    /// Sets the placeholder drawn in empty cells.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Duration of the error feedback.
    pub fn error_duration(&self) -> Duration {
        self.animation.error_duration
    }

    /// Duration of the success feedback.
    pub fn success_duration(&self) -> Duration {
        self.animation.success_duration
    }

    /// Drains the queued notifications, oldest first.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::build(Config::default())
    }
}

/// Creates a command that reads the system clipboard.
///
/// Produces a [`PasteMsg`](super::PasteMsg) with the clipboard text, or a
/// [`PasteErrMsg`] when the clipboard is unavailable.
pub fn paste() -> Cmd {
    bubbletea_rs::tick(Duration::from_nanos(1), |_| match read_clipboard() {
        Ok(text) => Box::new(PasteMsg(text)) as Msg,
        Err(reason) => {
            tracing::debug!(message = "codeinput.clipboard.unavailable", reason = %reason);
            Box::new(PasteErrMsg(reason)) as Msg
        }
    })
}

#[cfg(feature = "clipboard-support")]
fn read_clipboard() -> std::result::Result<String, String> {
    use clipboard::{ClipboardContext, ClipboardProvider};
    let mut ctx: ClipboardContext =
        ClipboardProvider::new().map_err(|e| format!("clipboard unavailable: {e}"))?;
    ctx.get_contents()
        .map_err(|e| format!("could not read the clipboard: {e}"))
}

#[cfg(not(feature = "clipboard-support"))]
fn read_clipboard() -> std::result::Result<String, String> {
    Err("built without clipboard support".to_string())
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Self::default();
        let cmd = model.focus();
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

#[cfg(all(test, not(feature = "clipboard-support")))]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_reports_missing_support() {
        assert_eq!(
            read_clipboard(),
            Err("built without clipboard support".to_string())
        );
    }
}
