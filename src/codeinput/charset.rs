//! Allowed-character predicates for code cells.

use std::fmt;
use std::sync::Arc;

/// A predicate deciding whether a character may occupy a cell.
///
/// `Send + Sync` so the owning model satisfies bubbletea-rs' `Send` bound and
/// stays cheap to clone.
pub type AllowFunc = Arc<dyn Fn(char) -> bool + Send + Sync>;

/// The set of characters a code input accepts.
#[derive(Clone, Default)]
pub enum Charset {
    /// Any single visible character: no control characters, no whitespace.
    #[default]
    Visible,
    /// ASCII digits `0-9`, the usual OTP configuration.
    Numeric,
    /// ASCII letters and digits.
    Alphanumeric,
    /// A caller-supplied predicate.
    Custom(AllowFunc),
}

impl Charset {
    /// Builds a [`Charset::Custom`] from a closure.
    ///
    /// ```rust
    /// use bubbletea_codeinput::codeinput::Charset;
    ///
    /// let hex = Charset::custom(|c| c.is_ascii_hexdigit());
    /// assert!(hex.allows('f'));
    /// assert!(!hex.allows('g'));
    /// ```
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(char) -> bool + Send + Sync + 'static,
    {
        Charset::Custom(Arc::new(f))
    }

    /// Reports whether `c` may occupy a cell.
    pub fn allows(&self, c: char) -> bool {
        match self {
            Charset::Visible => !c.is_control() && !c.is_whitespace(),
            Charset::Numeric => c.is_ascii_digit(),
            Charset::Alphanumeric => c.is_ascii_alphanumeric(),
            Charset::Custom(f) => f(c),
        }
    }

    /// Strips terminal escape sequences from pasted text and keeps only the
    /// characters this charset accepts, in order.
    pub fn filter_paste(&self, payload: &str) -> Vec<char> {
        strip_ansi_escapes::strip_str(payload)
            .chars()
            .filter(|c| self.allows(*c))
            .collect()
    }
}

impl fmt::Debug for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Charset::Visible => write!(f, "Visible"),
            Charset::Numeric => write!(f, "Numeric"),
            Charset::Alphanumeric => write!(f, "Alphanumeric"),
            Charset::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_rejects_whitespace_and_controls() {
        let cs = Charset::Visible;
        assert!(cs.allows('a'));
        assert!(cs.allows('7'));
        assert!(cs.allows('é'));
        assert!(!cs.allows(' '));
        assert!(!cs.allows('\t'));
        assert!(!cs.allows('\u{1b}'));
    }

    #[test]
    fn test_numeric_and_alphanumeric() {
        assert!(Charset::Numeric.allows('0'));
        assert!(!Charset::Numeric.allows('a'));
        assert!(!Charset::Numeric.allows('٣'));
        assert!(Charset::Alphanumeric.allows('Z'));
        assert!(!Charset::Alphanumeric.allows('-'));
    }

    #[test]
    fn test_filter_paste_strips_escapes_and_invalid_chars() {
        let got = Charset::Numeric.filter_paste("\u{1b}[31m12-34\u{1b}[0m 56\n");
        assert_eq!(got, vec!['1', '2', '3', '4', '5', '6']);
    }

    #[test]
    fn test_custom_debug_is_opaque() {
        let cs = Charset::custom(|c| c == 'x');
        assert_eq!(format!("{cs:?}"), "Custom(..)");
        assert!(cs.allows('x'));
    }
}
