//! Core types for the code input component.

use bubbletea_rs::Msg;

/// Clipboard paste message carrying raw text.
///
/// Sent by the [`paste`](super::paste) command, or by the host when it
/// receives pasted text from the terminal (bracketed paste).
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard paste error message.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

/// Which feedback animation a timer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    /// Shake-style error feedback, followed by a clear.
    Error,
    /// Success feedback, followed by a `Success` event and a clear.
    Success,
}

/// Message delivered when a feedback animation's delay has elapsed.
///
/// Only the instance that scheduled it, and only its most recent schedule,
/// acts on it. Anything else is stale and ignored.
#[derive(Debug, Clone)]
pub struct AnimationMsg {
    /// Identifier of the code input that scheduled the animation.
    pub id: usize,
    /// The animation that finished.
    pub kind: AnimationKind,
    pub(super) tag: usize,
}

/// Interaction state of a code input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// Nothing entered yet; also the resting state after a clear.
    #[default]
    Idle,
    /// Some, but not all, cells hold a character.
    Filling,
    /// Every cell holds a character.
    Complete,
    /// Error feedback is showing; the code clears when it ends.
    ErrorAnimating,
    /// Success feedback is showing; the code clears when it ends.
    SuccessAnimating,
}

impl State {
    /// Whether a feedback animation is in progress.
    pub fn is_animating(self) -> bool {
        matches!(self, State::ErrorAnimating | State::SuccessAnimating)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                State::Idle => "idle",
                State::Filling => "filling",
                State::Complete => "complete",
                State::ErrorAnimating => "error",
                State::SuccessAnimating => "success",
            }
        )
    }
}

/// Notification produced by the code input for its host.
///
/// Events are queued in the order they happen and drained with
/// [`Model::take_events`](super::Model::take_events).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The bound value changed; the host should store it.
    UpdateValue(String),
    /// The code changed through user input or a clear.
    Change(String),
    /// Every cell was filled. Carries the full code.
    Complete(String),
    /// The success animation finished.
    Success,
}

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<AnimationMsg> for Msg {
    fn from(msg: AnimationMsg) -> Self {
        Box::new(msg) as Msg
    }
}
