//! Persisted visitor preferences: colour theme and cookie consent.
//!
//! A [`PreferenceStore`] plays the role of the browser's local storage. The
//! session reads it once at construction; afterwards the values live as
//! explicit fields of `SessionState`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::AppError;

pub const THEME_KEY: &str = "theme";
pub const COOKIE_CONSENT_KEY: &str = "cookieConsent";

/// How long the page waits before showing the cookie banner.
pub const COOKIE_BANNER_DELAY: Duration = Duration::from_millis(3000);

/// String key-value storage.
pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Volatile store, lost with the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object on disk, rewritten on every `set`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store, starting empty when the file is missing or unreadable.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(values) => values,
                Err(e) => {
                    warn!("Ignoring corrupt preference file {:?}: {}", path, e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.values)?)?;
        debug!("Saved preference {}={} to {:?}", key, value, self.path);
        Ok(())
    }
}

/// Colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// The saved theme, else the system preference.
pub fn resolve_theme(store: &dyn PreferenceStore, system_prefers_dark: bool) -> Theme {
    store
        .get(THEME_KEY)
        .and_then(|v| Theme::parse(&v))
        .unwrap_or_else(|| Theme::from_system(system_prefers_dark))
}

/// Flips the theme and saves the explicit choice.
pub fn toggle_theme(store: &mut dyn PreferenceStore, current: Theme) -> Result<Theme, AppError> {
    let next = current.toggled();
    store.set(THEME_KEY, next.as_str())?;
    Ok(next)
}

/// New theme after the OS preference changed; `None` when a saved choice pins it.
pub fn follow_system_theme(store: &dyn PreferenceStore, prefers_dark: bool) -> Option<Theme> {
    match store.get(THEME_KEY) {
        Some(_) => None,
        None => Some(Theme::from_system(prefers_dark)),
    }
}

/// Visitor's answer to the cookie banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CookieConsent {
    Accepted,
    Declined,
}

impl CookieConsent {
    pub fn as_str(&self) -> &'static str {
        match self {
            CookieConsent::Accepted => "accepted",
            CookieConsent::Declined => "declined",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "accepted" => Some(CookieConsent::Accepted),
            "declined" => Some(CookieConsent::Declined),
            _ => None,
        }
    }
}

pub fn cookie_consent(store: &dyn PreferenceStore) -> Option<CookieConsent> {
    store.get(COOKIE_CONSENT_KEY).and_then(|v| CookieConsent::parse(&v))
}

pub fn record_cookie_consent(store: &mut dyn PreferenceStore, choice: CookieConsent) -> Result<(), AppError> {
    store.set(COOKIE_CONSENT_KEY, choice.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_theme_follows_system_until_saved() {
        let mut store = MemoryStore::new();
        assert_eq!(resolve_theme(&store, true), Theme::Dark);
        assert_eq!(resolve_theme(&store, false), Theme::Light);
        assert_eq!(follow_system_theme(&store, true), Some(Theme::Dark));

        let next = toggle_theme(&mut store, Theme::Dark).unwrap();
        assert_eq!(next, Theme::Light);
        assert_eq!(resolve_theme(&store, true), Theme::Light);
        assert_eq!(follow_system_theme(&store, true), None);
    }

    #[test]
    fn test_unknown_saved_theme_falls_back_to_system() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(resolve_theme(&store, true), Theme::Dark);
    }

    #[test]
    fn test_cookie_consent_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(cookie_consent(&store), None);
        record_cookie_consent(&mut store, CookieConsent::Declined).unwrap();
        assert_eq!(cookie_consent(&store), Some(CookieConsent::Declined));
    }

    #[test]
    fn test_json_file_store_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs").join("preferences.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get(THEME_KEY), None);
        store.set(THEME_KEY, "dark").unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get(THEME_KEY), Some("dark".to_string()));
    }

    #[test]
    fn test_json_file_store_ignores_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get(THEME_KEY), None);
    }
}
