//! Light/dark theme state and its persistence.
//!
//! The theme lives in a [`ThemeState`] owned by whoever provides it to the
//! view tree; there is no global. Every change is mirrored to a
//! [`ThemeStore`] so the in-memory and persisted values never diverge once a
//! write succeeds.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::StoreError;
use crate::log::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The opposite theme. Applying it twice yields the original value.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class applied to the document root, if any.
    pub fn root_class(&self) -> Option<&'static str> {
        match self {
            Theme::Dark => Some("dark"),
            Theme::Light => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Key-value storage for the persisted theme.
pub trait ThemeStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Store backed by a map, for tests and hosts without local storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    theme: Theme,
    key: String,
}

impl ThemeState {
    /// Reads the persisted theme once, falling back to `default` when the
    /// key is missing or holds an unknown value.
    pub fn load(store: &impl ThemeStore, key: impl Into<String>, default: Theme) -> Self {
        let key = key.into();
        let theme = match store.load(&key).map(|raw| raw.parse::<Theme>()) {
            Some(Ok(theme)) => theme,
            Some(Err(err)) => {
                warn!("Ignoring persisted theme under {}: {}", key, err);
                default
            }
            None => default,
        };
        debug!("Theme loaded: {}", theme);
        Self { theme, key }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Sets the theme and mirrors it to the store. A failed write keeps the
    /// new in-memory value; the error is returned for the caller to log.
    pub fn set(&mut self, theme: Theme, store: &impl ThemeStore) -> Result<(), StoreError> {
        self.theme = theme;
        debug!("Theme set to {}", theme);
        store.save(&self.key, theme.as_str())
    }

    pub fn toggle(&mut self, store: &impl ThemeStore) -> Result<Theme, StoreError> {
        let next = self.theme.toggled();
        self.set(next, store)?;
        Ok(next)
    }
}

pub const SHOWN_ICON: &str = "rotate-0 scale-100";
pub const HIDDEN_SUN: &str = "-rotate-90 scale-0";
pub const HIDDEN_MOON: &str = "rotate-90 scale-0";

/// Rotate/scale classes for the sun and moon indicators of one toggle.
///
/// Exactly one icon is shown: the sun under the dark theme, the moon under
/// the light theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconState {
    pub sun: &'static str,
    pub moon: &'static str,
}

impl IconState {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                sun: SHOWN_ICON,
                moon: HIDDEN_MOON,
            },
            Theme::Light => Self {
                sun: HIDDEN_SUN,
                moon: SHOWN_ICON,
            },
        }
    }

    pub fn sun_visible(&self) -> bool {
        self.sun == SHOWN_ICON
    }

    pub fn moon_visible(&self) -> bool {
        self.moon == SHOWN_ICON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "vite-ui-theme";

    struct FailingStore;

    impl ThemeStore for FailingStore {
        fn load(&self, _key: &str) -> Option<String> {
            None
        }

        fn save(&self, key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            })
        }
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);

        let store = MemoryStore::new();
        let state = ThemeState::load(&store, KEY, Theme::default());
        assert_eq!(state.theme(), Theme::Dark);
        assert_eq!(store.load(KEY), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" light\n".parse::<Theme>(), Ok(Theme::Light));
        assert!("system".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.to_string(), "light");
    }

    #[test]
    fn test_toggle_is_involution() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.toggled().toggled(), theme);
            assert_ne!(theme.toggled(), theme);
        }
    }

    #[test]
    fn test_toggle_persists_value() {
        let store = MemoryStore::new();
        let mut state = ThemeState::load(&store, KEY, Theme::Dark);

        assert_eq!(state.toggle(&store).unwrap(), Theme::Light);
        assert_eq!(store.load(KEY).as_deref(), Some("light"));

        state.toggle(&store).unwrap();
        assert_eq!(state.theme(), Theme::Dark);
        assert_eq!(store.load(KEY).as_deref(), Some(state.theme().as_str()));
    }

    #[test]
    fn test_load_reads_persisted_value() {
        let store = MemoryStore::with_value(KEY, "light");
        let state = ThemeState::load(&store, KEY, Theme::Dark);
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_load_ignores_garbage() {
        let store = MemoryStore::with_value(KEY, "\"dark\"");
        let state = ThemeState::load(&store, KEY, Theme::Dark);
        assert_eq!(state.theme(), Theme::Dark);

        let store = MemoryStore::with_value(KEY, "sepia");
        let state = ThemeState::load(&store, KEY, Theme::Light);
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_failed_write_keeps_memory_value() {
        let mut state = ThemeState::load(&FailingStore, KEY, Theme::Dark);
        assert!(state.toggle(&FailingStore).is_err());
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_icon_state() {
        let dark = IconState::for_theme(Theme::Dark);
        assert!(dark.sun_visible());
        assert!(!dark.moon_visible());
        assert_eq!(dark.moon, "rotate-90 scale-0");

        let light = IconState::for_theme(Theme::Light);
        assert!(light.moon_visible());
        assert!(!light.sun_visible());
        assert_eq!(light.sun, "-rotate-90 scale-0");
    }

    #[test]
    fn test_root_class() {
        assert_eq!(Theme::Dark.root_class(), Some("dark"));
        assert_eq!(Theme::Light.root_class(), None);
    }
}
