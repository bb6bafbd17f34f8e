//! Rendering for the code input component.

use super::model::Model;
use super::types::State;
use lipgloss_extras::prelude::*;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Glyph drawn in an empty cell when no placeholder is set.
const EMPTY_CELL: &str = "_";

/// Styles for the cells of a code input.
///
/// The static error flag and the error animation both use `error`; success
/// styling takes precedence over either while the success animation runs.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Cell holding a character.
    pub filled: Style,
    /// Empty cell.
    pub empty: Style,
    /// Placeholder glyph in an empty cell.
    pub placeholder: Style,
    /// Cells while the error flag is set or error feedback is showing.
    pub error: Style,
    /// Cells while success feedback is showing.
    pub success: Style,
    /// Cells of a disabled input.
    pub disabled: Style,
    /// Separator between cells.
    pub gap: String,
}

/// The default cell styles.
pub fn default_styles() -> Styles {
    Styles {
        filled: Style::new().bold(true),
        empty: Style::new().foreground(Color::from("240")),
        placeholder: Style::new().foreground(Color::from("240")),
        error: Style::new().foreground(Color::from("196")),
        success: Style::new().foreground(Color::from("42")),
        disabled: Style::new().foreground(Color::from("238")),
        gap: " ".to_string(),
    }
}

impl Default for Styles {
    fn default() -> Self {
        default_styles()
    }
}

impl Model {
    /// Renders the cells in a single row.
    ///
    /// Each cell is three columns wide (two for wide characters plus one
    /// space). The active cell is drawn reversed while the input is
    /// editable.
    pub fn view(&self) -> String {
        (0..self.buffer.len())
            .map(|i| self.render_cell(i))
            .collect::<Vec<_>>()
            .join(&self.styles.gap)
    }

    fn render_cell(&self, index: usize) -> String {
        let filled = self.buffer.get(index);
        let glyph = match filled {
            Some(c) => self.mask.unwrap_or(c).to_string(),
            None => self
                .placeholder
                .graphemes(true)
                .next()
                .unwrap_or(EMPTY_CELL)
                .to_string(),
        };
        let text = if glyph.width() >= 2 {
            format!("{glyph} ")
        } else {
            format!(" {glyph} ")
        };

        let mut style = match self.state {
            State::SuccessAnimating => self.styles.success.clone(),
            State::ErrorAnimating => self.styles.error.clone(),
            _ if self.error => self.styles.error.clone(),
            _ if self.disabled => self.styles.disabled.clone(),
            _ if filled.is_some() => self.styles.filled.clone(),
            _ if self.placeholder.is_empty() => self.styles.empty.clone(),
            _ => self.styles.placeholder.clone(),
        };

        let active = self.focus.current() == Some(index);
        if active && !self.disabled && !self.state.is_animating() {
            style = style.reverse(true);
        }

        style.inline(true).render(&text)
    }
}
