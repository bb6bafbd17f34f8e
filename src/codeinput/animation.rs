//! Timed error/success feedback for the code input.
//!
//! At most one animation is pending per instance. Scheduling bumps a tag
//! that is captured in the delayed [`AnimationMsg`]; only a message carrying
//! the instance's id and the current tag, while an animation is pending, is
//! acted on. Cancelling or rescheduling therefore turns any in-flight
//! message into a no-op without touching the runtime.

use super::types::{AnimationKind, AnimationMsg};
use bubbletea_rs::{tick, Cmd, Msg};
use std::time::Duration;

/// Single-slot animation timer.
#[derive(Debug, Clone)]
pub struct Animator {
    /// Duration of the error feedback.
    pub error_duration: Duration,
    /// Duration of the success feedback.
    pub success_duration: Duration,
    pub(super) tag: usize,
    pending: Option<AnimationKind>,
}

impl Animator {
    /// Creates an idle animator.
    pub fn new(error_duration: Duration, success_duration: Duration) -> Self {
        Self {
            error_duration,
            success_duration,
            tag: 0,
            pending: None,
        }
    }

    /// The animation waiting for its timer, if any.
    pub fn pending(&self) -> Option<AnimationKind> {
        self.pending
    }

    fn duration(&self, kind: AnimationKind) -> Duration {
        match kind {
            AnimationKind::Error => self.error_duration,
            AnimationKind::Success => self.success_duration,
        }
    }

    /// Schedules `kind` for instance `id`, superseding whatever was pending.
    pub fn schedule(&mut self, id: usize, kind: AnimationKind) -> Cmd {
        if let Some(previous) = self.pending {
            tracing::debug!(message = "codeinput.animation.superseded", id, ?previous, next = ?kind);
        }
        self.tag += 1;
        self.pending = Some(kind);
        let tag = self.tag;
        tick(self.duration(kind), move |_| {
            Box::new(AnimationMsg { id, kind, tag }) as Msg
        })
    }

    /// Drops the pending animation. Returns what was pending.
    pub fn cancel(&mut self) -> Option<AnimationKind> {
        self.pending.take()
    }

    /// Consumes the pending animation if `msg` is the one it is waiting for.
    pub fn accept(&mut self, id: usize, msg: &AnimationMsg) -> Option<AnimationKind> {
        if msg.id != id || msg.tag != self.tag || self.pending != Some(msg.kind) {
            tracing::trace!(
                message = "codeinput.animation.stale",
                id,
                msg_id = msg.id,
                msg_tag = msg.tag,
                tag = self.tag
            );
            return None;
        }
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(id: usize, kind: AnimationKind, tag: usize) -> AnimationMsg {
        AnimationMsg { id, kind, tag }
    }

    #[test]
    fn test_schedule_bumps_tag_and_sets_pending() {
        let mut a = Animator::new(Duration::from_millis(10), Duration::from_millis(20));
        let _cmd = a.schedule(7, AnimationKind::Error);
        assert_eq!(a.tag, 1);
        assert_eq!(a.pending(), Some(AnimationKind::Error));
    }

    #[test]
    fn test_accept_matching_message_once() {
        let mut a = Animator::new(Duration::ZERO, Duration::ZERO);
        let _cmd = a.schedule(3, AnimationKind::Success);
        let m = msg(3, AnimationKind::Success, a.tag);

        assert_eq!(a.accept(3, &m), Some(AnimationKind::Success));
        assert_eq!(a.accept(3, &m), None);
        assert_eq!(a.pending(), None);
    }

    #[test]
    fn test_superseded_message_is_stale() {
        let mut a = Animator::new(Duration::ZERO, Duration::ZERO);
        let _first = a.schedule(1, AnimationKind::Success);
        let stale = msg(1, AnimationKind::Success, a.tag);
        let _second = a.schedule(1, AnimationKind::Error);

        assert_eq!(a.accept(1, &stale), None);
        assert_eq!(a.pending(), Some(AnimationKind::Error));
        let current = msg(1, AnimationKind::Error, a.tag);
        assert_eq!(a.accept(1, &current), Some(AnimationKind::Error));
    }

    #[test]
    fn test_cancelled_or_foreign_message_is_ignored() {
        let mut a = Animator::new(Duration::ZERO, Duration::ZERO);
        let _cmd = a.schedule(1, AnimationKind::Error);
        let m = msg(1, AnimationKind::Error, a.tag);

        assert_eq!(a.accept(1, &msg(2, AnimationKind::Error, a.tag)), None);
        assert_eq!(a.cancel(), Some(AnimationKind::Error));
        assert_eq!(a.accept(1, &m), None);
    }
}
