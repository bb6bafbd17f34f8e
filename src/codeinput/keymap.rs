//! Key bindings for the code input component.

use crate::key::{new_binding, with_help, with_keys_str, Binding};

/// KeyMap is the set of key bindings for moving between and editing cells.
///
/// Character keys are not bound: any unmodified character the charset
/// accepts is typed into the active cell.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move to the previous cell.
    pub slot_backward: Binding,
    /// Move to the next cell.
    pub slot_forward: Binding,
    /// Move to the first cell.
    pub first_slot: Binding,
    /// Move to the last cell.
    pub last_slot: Binding,
    /// Clear the active cell, or the previous one when the active cell is empty.
    pub delete_character_backward: Binding,
    /// Clear the active cell without moving.
    pub delete_character_forward: Binding,
    /// Paste from the clipboard.
    pub paste: Binding,
}

/// The default key bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        slot_backward: new_binding(vec![
            with_keys_str(&["left", "ctrl+b"]),
            with_help("←", "previous"),
        ]),
        slot_forward: new_binding(vec![
            with_keys_str(&["right", "ctrl+f"]),
            with_help("→", "next"),
        ]),
        first_slot: new_binding(vec![
            with_keys_str(&["home", "ctrl+a"]),
            with_help("home", "first"),
        ]),
        last_slot: new_binding(vec![
            with_keys_str(&["end", "ctrl+e"]),
            with_help("end", "last"),
        ]),
        delete_character_backward: new_binding(vec![
            with_keys_str(&["backspace", "ctrl+h"]),
            with_help("backspace", "delete"),
        ]),
        delete_character_forward: new_binding(vec![
            with_keys_str(&["delete", "ctrl+d"]),
            with_help("del", "clear cell"),
        ]),
        paste: new_binding(vec![
            with_keys_str(&["ctrl+v"]),
            with_help("ctrl+v", "paste"),
        ]),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl crate::key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![
            &self.slot_backward,
            &self.slot_forward,
            &self.delete_character_backward,
            &self.paste,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![
                &self.slot_backward,
                &self.slot_forward,
                &self.first_slot,
                &self.last_slot,
            ],
            vec![
                &self.delete_character_backward,
                &self.delete_character_forward,
                &self.paste,
            ],
        ]
    }
}
