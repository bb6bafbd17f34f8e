//! Active-cell tracking for the code input.

use super::buffer::Buffer;

/// Tracks which cell is active.
///
/// The index is the widget's intent: the cell that receives the next key and
/// that the view highlights. `None` means the widget is blurred. Moves are
/// refused while disabled, and the index never leaves `0..length`.
#[derive(Debug, Clone)]
pub struct FocusRouter {
    length: usize,
    current: Option<usize>,
    disabled: bool,
}

impl FocusRouter {
    /// Creates a blurred router over `length` cells.
    pub(crate) fn new(length: usize) -> Self {
        Self {
            length,
            current: None,
            disabled: false,
        }
    }

    /// The active cell, if any.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Whether focus moves are refused.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Refuses (or allows again) focus moves.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Makes cell `index` active. Returns whether the move happened.
    pub fn focus_slot(&mut self, index: usize) -> bool {
        if self.disabled || index >= self.length {
            return false;
        }
        self.current = Some(index);
        true
    }

    /// Moves one cell right, stopping at the last cell.
    pub fn advance(&mut self) -> bool {
        match self.current {
            Some(i) => self.focus_slot((i + 1).min(self.last())),
            None => false,
        }
    }

    /// Moves one cell left, stopping at the first cell.
    pub fn retreat(&mut self) -> bool {
        match self.current {
            Some(i) => self.focus_slot(i.saturating_sub(1)),
            None => false,
        }
    }

    /// Makes the first cell active.
    pub fn focus_first(&mut self) -> bool {
        self.focus_slot(0)
    }

    /// Makes the last cell active.
    pub fn focus_last(&mut self) -> bool {
        self.focus_slot(self.last())
    }

    /// Makes the first empty cell active, or the last cell when every cell
    /// is filled so the code can still be corrected.
    pub fn focus_first_empty(&mut self, buffer: &Buffer) -> bool {
        let index = buffer.first_empty().unwrap_or(self.last());
        self.focus_slot(index)
    }

    // Out of range for an empty router, so `focus_slot` refuses it.
    fn last(&self) -> usize {
        self.length.saturating_sub(1)
    }

    /// Drops focus intent.
    pub fn blur(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codeinput::Charset;

    #[test]
    fn test_starts_blurred_and_cannot_move() {
        let mut f = FocusRouter::new(4);
        assert_eq!(f.current(), None);
        assert!(!f.advance());
        assert!(!f.retreat());
        assert_eq!(f.current(), None);
    }

    #[test]
    fn test_advance_and_retreat_clamp() {
        let mut f = FocusRouter::new(3);
        f.focus_first();
        f.retreat();
        assert_eq!(f.current(), Some(0));
        f.advance();
        f.advance();
        f.advance();
        assert_eq!(f.current(), Some(2));
    }

    #[test]
    fn test_focus_slot_rejects_out_of_range() {
        let mut f = FocusRouter::new(3);
        assert!(f.focus_slot(1));
        assert!(!f.focus_slot(3));
        assert_eq!(f.current(), Some(1));
    }

    #[test]
    fn test_disabled_refuses_moves_and_keeps_index() {
        let mut f = FocusRouter::new(4);
        f.focus_slot(2);
        f.set_disabled(true);
        assert!(!f.focus_first());
        assert!(!f.advance());
        assert_eq!(f.current(), Some(2));
    }

    #[test]
    fn test_zero_length_router_refuses_every_move() {
        let b = Buffer::new(0, Charset::Numeric);
        let mut f = FocusRouter::new(0);
        assert!(!f.focus_first_empty(&b));
        assert!(!f.focus_first());
        assert!(!f.focus_last());
        assert!(!f.advance());
        assert_eq!(f.current(), None);
    }

    #[test]
    fn test_focus_first_empty() {
        let mut b = Buffer::new(3, Charset::Numeric);
        let mut f = FocusRouter::new(3);

        f.focus_first_empty(&b);
        assert_eq!(f.current(), Some(0));

        b.seed_from("12");
        f.focus_first_empty(&b);
        assert_eq!(f.current(), Some(2));

        b.seed_from("123");
        f.focus_first();
        f.focus_first_empty(&b);
        assert_eq!(f.current(), Some(2));
    }
}
