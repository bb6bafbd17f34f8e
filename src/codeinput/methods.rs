//! Input handling and the imperative API of the code input.

use super::model::{paste, Model};
use super::types::{AnimationKind, AnimationMsg, Event, PasteErrMsg, PasteMsg, State};
use crate::key::matches_binding;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

impl Model {
    /// Handles a message: keys and pastes while focused and enabled, and
    /// animation timers at any time.
    ///
    /// Within one message the order is fixed: the cells change, then
    /// `UpdateValue` and `Change` are queued, then completion is checked.
    ///
    /// # Returns
    ///
    /// A clipboard read command when the paste binding was pressed, `None`
    /// otherwise.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(anim) = msg.downcast_ref::<AnimationMsg>() {
            self.handle_animation(anim);
            return None;
        }

        if self.focus.current().is_none() || self.disabled {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }

        if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            self.handle_paste(&paste_msg.0);
            return None;
        }

        if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
            self.err = Some(paste_err.0.clone());
        }

        None
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if matches_binding(key_msg, &self.key_map.paste) {
            return Some(paste());
        }

        if matches_binding(key_msg, &self.key_map.delete_character_backward) {
            self.delete_backward();
        } else if matches_binding(key_msg, &self.key_map.delete_character_forward) {
            self.delete_forward();
        } else if matches_binding(key_msg, &self.key_map.slot_backward) {
            self.focus.retreat();
        } else if matches_binding(key_msg, &self.key_map.slot_forward) {
            self.focus.advance();
        } else if matches_binding(key_msg, &self.key_map.first_slot) {
            self.focus.focus_first();
        } else if matches_binding(key_msg, &self.key_map.last_slot) {
            self.focus.focus_last();
        } else {
            self.handle_character_input(key_msg);
        }
        None
    }

    fn handle_character_input(&mut self, key_msg: &KeyMsg) {
        let KeyCode::Char(ch) = key_msg.key else {
            return;
        };
        // Shift is encoded in the char itself.
        if key_msg.modifiers.contains(KeyModifiers::CONTROL)
            || key_msg.modifiers.contains(KeyModifiers::ALT)
        {
            return;
        }
        let Some(index) = self.focus.current() else {
            return;
        };
        if !self.buffer.charset().allows(ch) {
            tracing::trace!(message = "codeinput.rejected", id = self.id, ch = ?ch);
            return;
        }

        self.buffer.set_slot(index, Some(ch));
        self.focus.advance();
        self.commit();
    }

    fn delete_backward(&mut self) {
        let Some(index) = self.focus.current() else {
            return;
        };
        if self.buffer.get(index).is_some() {
            self.buffer.set_slot(index, None);
            self.commit();
        } else if index > 0 {
            let had_char = self.buffer.get(index - 1).is_some();
            self.buffer.set_slot(index - 1, None);
            self.focus.retreat();
            if had_char {
                self.commit();
            }
        }
    }

    fn delete_forward(&mut self) {
        let Some(index) = self.focus.current() else {
            return;
        };
        if self.buffer.get(index).is_some() {
            self.buffer.set_slot(index, None);
            self.commit();
        }
    }

    fn handle_paste(&mut self, payload: &str) {
        let Some(start) = self.focus.current() else {
            return;
        };
        let chars = self.buffer.charset().filter_paste(payload);
        if chars.is_empty() {
            tracing::debug!(message = "codeinput.paste.rejected", id = self.id, len = payload.len());
            return;
        }

        let written = self.buffer.fill_from(start, chars);
        tracing::debug!(message = "codeinput.paste", id = self.id, start, written);
        self.focus.focus_first_empty(&self.buffer);
        self.commit();
    }

    /// Runs after every accepted mutation.
    fn commit(&mut self) {
        self.animation.cancel();
        let value = self.buffer.joined();
        self.events.push(Event::UpdateValue(value.clone()));
        self.events.push(Event::Change(value));
        self.detect_completion();
    }

    /// Derives the state from the cells and queues `Complete` on the
    /// transition into a full buffer. Leaving an animation through a
    /// mutation counts as a fresh fill.
    fn detect_completion(&mut self) {
        let next = if self.buffer.is_full() {
            State::Complete
        } else if self.buffer.is_empty() {
            State::Idle
        } else {
            State::Filling
        };

        if next == State::Complete && self.state != State::Complete {
            self.events.push(Event::Complete(self.buffer.joined()));
        }
        self.transition(next);
    }

    fn transition(&mut self, next: State) {
        if self.state != next {
            tracing::debug!(
                message = "codeinput.transition",
                id = self.id,
                from = %self.state,
                to = %next
            );
            self.state = next;
        }
    }

    fn handle_animation(&mut self, msg: &AnimationMsg) {
        let Some(kind) = self.animation.accept(self.id, msg) else {
            return;
        };
        if kind == AnimationKind::Success {
            self.events.push(Event::Success);
        }
        self.reset();
    }

    /// Empties the cells, returns to `Idle` and focuses the first cell.
    fn reset(&mut self) {
        let had_value = !self.buffer.is_empty();
        self.buffer.seed_from("");
        self.transition(State::Idle);
        self.focus.focus_first();
        if had_value {
            self.events.push(Event::UpdateValue(String::new()));
            self.events.push(Event::Change(String::new()));
        }
    }

    /// Reconciles the cells with a value set by the host.
    ///
    /// The value is seeded left to right: the leading run of accepted
    /// characters, truncated to the length. When the value had to be
    /// normalized, `UpdateValue` carries the value actually held so the host
    /// binding converges on it. `Change` is never queued here; it is reserved
    /// for user edits and clears.
    ///
    /// A pending animation is cancelled and completion re-checked (which may
    /// queue `Complete`) only when the held value actually changed.
    pub fn set_value(&mut self, value: &str) {
        let before = self.buffer.joined();
        if value == before {
            return;
        }
        self.buffer.seed_from(value);

        let held = self.buffer.joined();
        if held != value {
            self.events.push(Event::UpdateValue(held.clone()));
        }
        if held != before {
            self.animation.cancel();
            self.detect_completion();
        }
    }

    /// Focuses the first empty cell, or the last cell when the code is full.
    ///
    /// Refused while disabled. Focusing needs no follow-up work, so the
    /// returned command is always `None`.
    pub fn focus(&mut self) -> Option<Cmd> {
        self.focus.focus_first_empty(&self.buffer);
        None
    }

    /// Blurs the input. Keys and pastes are ignored until it is focused again.
    pub fn blur(&mut self) {
        self.focus.blur();
    }

    /// Whether a cell is active.
    pub fn focused(&self) -> bool {
        self.focus.current().is_some()
    }

    /// Empties every cell, cancels any pending animation, returns to `Idle`
    /// and focuses the first cell.
    ///
    /// Queues `UpdateValue("")` and `Change("")` when there was something to clear.
    pub fn clear(&mut self) {
        self.animation.cancel();
        self.reset();
    }

    /// Shows error feedback, then clears the code once the error duration
    /// has elapsed.
    ///
    /// The code stays in place while the feedback shows. A later call to
    /// `show_error`, `show_success` or `clear`, or any edit, supersedes it.
    /// Allowed while disabled.
    ///
    /// # Returns
    ///
    /// The timer command; hand it to the runtime so the clear happens.
    pub fn show_error(&mut self) -> Option<Cmd> {
        self.transition(State::ErrorAnimating);
        Some(self.animation.schedule(self.id, AnimationKind::Error))
    }

    /// Shows success feedback, then queues `Success` and clears the code
    /// once the success duration has elapsed.
    ///
    /// Superseded the same way as [`show_error`](Model::show_error).
    pub fn show_success(&mut self) -> Option<Cmd> {
        self.transition(State::SuccessAnimating);
        Some(self.animation.schedule(self.id, AnimationKind::Success))
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        Model::focus(self)
    }

    fn blur(&mut self) {
        self.blur()
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}
