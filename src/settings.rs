//! User Settings
//!
//! Small JSON document in `localStorage`. Missing or unreadable values fall
//! back to defaults.

use serde::Deserialize;

const SETTINGS_STORAGE_KEY: &str = "pomodoro-board.settings";

/// Key that keeps an editor open after Enter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    #[default]
    Ctrl,
    Meta,
    Alt,
    Shift,
}

impl Modifier {
    pub fn is_held(&self, ev: &web_sys::KeyboardEvent) -> bool {
        match self {
            Modifier::Ctrl => ev.ctrl_key(),
            Modifier::Meta => ev.meta_key(),
            Modifier::Alt => ev.alt_key(),
            Modifier::Shift => ev.shift_key(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Counter value a creation form opens with
    pub new_card_pomodoros: u32,
    pub keep_open_modifier: Modifier,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            new_card_pomodoros: 1,
            keep_open_modifier: Modifier::Ctrl,
        }
    }
}

impl BoardSettings {
    pub fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "unreadable settings, using defaults");
            Self::default()
        })
    }

    /// Read from browser storage
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(SETTINGS_STORAGE_KEY).ok().flatten());

        match stored {
            Some(raw) => Self::from_json(&raw),
            None => Self::default(),
        }
    }
}

/// Settings from context, or defaults outside the app root
pub fn use_settings() -> BoardSettings {
    leptos::prelude::use_context::<BoardSettings>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_document() {
        let settings = BoardSettings::from_json(r#"{"new_card_pomodoros":2,"keep_open_modifier":"meta"}"#);
        assert_eq!(settings.new_card_pomodoros, 2);
        assert_eq!(settings.keep_open_modifier, Modifier::Meta);
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let settings = BoardSettings::from_json(r#"{"keep_open_modifier":"shift"}"#);
        assert_eq!(settings.new_card_pomodoros, 1);
        assert_eq!(settings.keep_open_modifier, Modifier::Shift);
    }

    #[test]
    fn test_garbage_falls_back() {
        assert_eq!(BoardSettings::from_json("not json"), BoardSettings::default());
        assert_eq!(
            BoardSettings::from_json(r#"{"new_card_pomodoros":-3}"#),
            BoardSettings::default()
        );
    }
}
