//! Per-cell storage for a code input.

use super::charset::Charset;

/// The ordered cells of a code, each empty or holding one accepted character.
///
/// The number of cells is fixed at construction. Every write goes through
/// the charset, so a cell never holds a character the charset rejects.
#[derive(Debug, Clone)]
pub struct Buffer {
    slots: Vec<Option<char>>,
    charset: Charset,
}

impl Buffer {
    /// Creates an empty buffer of `length` cells.
    pub(crate) fn new(length: usize, charset: Charset) -> Self {
        Self {
            slots: vec![None; length],
            charset,
        }
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no cell holds a character.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// True when every cell holds a character.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The charset cells are validated against.
    pub fn charset(&self) -> &Charset {
        &self.charset
    }

    /// Character in cell `index`, `None` when empty or out of range.
    pub fn get(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    /// Iterates over the cells in order.
    pub fn iter(&self) -> impl Iterator<Item = Option<char>> + '_ {
        self.slots.iter().copied()
    }

    /// Index of the first empty cell.
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// The canonical value: filled cells concatenated in order.
    pub fn joined(&self) -> String {
        self.slots.iter().flatten().collect()
    }

    /// Replaces cell `index` with `ch` (or empties it) and returns the new
    /// canonical value.
    ///
    /// An out-of-range index or a character the charset rejects leaves the
    /// buffer untouched.
    pub fn set_slot(&mut self, index: usize, ch: Option<char>) -> String {
        let accepted = ch.map_or(true, |c| self.charset.allows(c));
        if accepted {
            if let Some(slot) = self.slots.get_mut(index) {
                *slot = ch;
            }
        }
        self.joined()
    }

    /// Re-seeds the cells from a canonical value.
    ///
    /// The leading run of accepted characters fills cells left to right,
    /// truncated to the buffer length; everything after the first rejected
    /// character is ignored and the remaining cells are emptied. Seeding with
    /// the buffer's own canonical value changes nothing, even when the cells
    /// have gaps.
    pub fn seed_from(&mut self, value: &str) {
        if value == self.joined() {
            return;
        }
        let charset = &self.charset;
        let mut accepted = value.chars().take_while(|c| charset.allows(*c));
        for slot in self.slots.iter_mut() {
            *slot = accepted.next();
        }
    }

    /// Writes accepted characters left to right starting at cell `start`,
    /// overwriting what is there. Characters beyond the last cell are
    /// dropped. Returns the number of cells written.
    pub fn fill_from<I>(&mut self, start: usize, chars: I) -> usize
    where
        I: IntoIterator<Item = char>,
    {
        let Some(tail) = self.slots.get_mut(start..) else {
            return 0;
        };
        let charset = &self.charset;
        let mut written = 0;
        for (slot, c) in tail
            .iter_mut()
            .zip(chars.into_iter().filter(|c| charset.allows(*c)))
        {
            *slot = Some(c);
            written += 1;
        }
        written
    }
}
