//! Type-safe key bindings for terminal components.
//!
//! A [`Binding`] groups one or more [`KeyPress`]es under a single action and
//! carries the help text shown to users. Components expose their bindings
//! through a struct implementing [`KeyMap`], so help views can list them.
//!
//! ```rust
//! use bubbletea_codeinput::key::{new_binding, with_help, with_keys_str, matches_binding};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let clear = new_binding(vec![
//!     with_keys_str(&["ctrl+u", "esc"]),
//!     with_help("ctrl+u", "clear code"),
//! ]);
//!
//! let msg = KeyMsg { key: KeyCode::Esc, modifiers: KeyModifiers::NONE };
//! assert!(matches_binding(&msg, &clear));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key combination: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifiers held while pressing it.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

impl KeyPress {
    /// Parses a key description such as `"left"`, `"ctrl+v"` or `"alt+backspace"`.
    ///
    /// Returns `None` for names that do not map to a key.
    pub fn parse(s: &str) -> Option<Self> {
        let mut mods = KeyModifiers::NONE;
        let mut parts: Vec<&str> = s.split('+').collect();
        let name = parts.pop()?;

        for m in parts {
            match m {
                "ctrl" => mods |= KeyModifiers::CONTROL,
                "alt" => mods |= KeyModifiers::ALT,
                "shift" => mods |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match name {
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "space" => KeyCode::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };

        Some(Self { code, mods })
    }

    /// Reports whether this key press matches an incoming key message.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.code == msg.key && self.mods == msg.modifiers
    }
}

/// Help text for a binding: the short key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Key label, e.g. `"←/→"`.
    pub key: String,
    /// Action description, e.g. `"move"`.
    pub desc: String,
}

/// A set of keys bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from key presses, with empty help text.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text, builder style.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// The keys of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Replaces the keys of this binding.
    pub fn set_keys(&mut self, keys: Vec<KeyPress>) {
        self.keys = keys;
    }

    /// The help text of this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// A binding is enabled when it is not disabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Reports whether the key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut b = Binding::default();
    for opt in opts {
        opt(&mut b);
    }
    b
}

/// Option setting the keys of a binding from key descriptions.
///
/// Descriptions that cannot be parsed are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let keys: Vec<KeyPress> = keys.iter().filter_map(|k| KeyPress::parse(k)).collect();
    Box::new(move |b: &mut Binding| b.keys = keys)
}

/// Option setting the keys of a binding.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    Box::new(move |b: &mut Binding| b.keys = keys)
}

/// Option setting the help text of a binding.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b: &mut Binding| b.help = help)
}

/// Option that starts the binding disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b: &mut Binding| b.disabled = true)
}

/// Reports whether the key message triggers the binding.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Reports whether the key message triggers any of the bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Implemented by components' key maps so help views can list bindings.
pub trait KeyMap {
    /// Bindings shown in the compact, single-line help.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped into columns for the expanded help.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_parse_named_and_modified_keys() {
        assert_eq!(
            KeyPress::parse("ctrl+v"),
            Some(KeyPress::from((KeyCode::Char('v'), KeyModifiers::CONTROL)))
        );
        assert_eq!(KeyPress::parse("left"), Some(KeyPress::from(KeyCode::Left)));
        assert_eq!(KeyPress::parse("x"), Some(KeyPress::from(KeyCode::Char('x'))));
        assert_eq!(KeyPress::parse("hyper+x"), None);
        assert_eq!(KeyPress::parse("nonsense"), None);
    }

    #[test]
    fn test_binding_matches_exact_modifiers() {
        let b = new_binding(vec![with_keys_str(&["ctrl+h", "backspace"])]);
        assert!(b.matches(&key(KeyCode::Backspace, KeyModifiers::NONE)));
        assert!(b.matches(&key(KeyCode::Char('h'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&key(KeyCode::Char('h'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Left]).with_help("←", "left");
        assert!(matches_binding(&key(KeyCode::Left, KeyModifiers::NONE), &b));

        b.set_enabled(false);
        assert!(!matches_binding(&key(KeyCode::Left, KeyModifiers::NONE), &b));

        let off = new_binding(vec![with_keys_str(&["right"]), with_disabled()]);
        assert!(!off.enabled());
    }

    #[test]
    fn test_matches_any() {
        let left = Binding::new(vec![KeyCode::Left]);
        let right = Binding::new(vec![KeyCode::Right]);
        let msg = key(KeyCode::Right, KeyModifiers::NONE);
        assert!(matches(&msg, &[&left, &right]));
        assert!(!matches(&msg, &[&left]));
    }
}
