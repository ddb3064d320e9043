//! Theme store: one persisted light/dark flag with explicit subscribers.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ThemeCfg;
use crate::error::StorageError;
use crate::ids::{IdAllocator, SubscriptionId};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Persisted representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Read a persisted value. Only `"dark"` is dark.
    pub fn from_stored(stored: &str) -> Self {
        Theme::from_dark(stored == Theme::Dark.as_str())
    }

    /// Accessible label for the toggle button.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark mode",
            Theme::Dark => "Switch to light mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value persistence for the theme flag (browser `localStorage` in production).
pub trait ThemeStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage, used natively and as the fallback when the browser denies
/// access to `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut s = Self::default();
        s.entries.insert(key.to_string(), value.to_string());
        s
    }
}

impl ThemeStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

type Listener = Box<dyn FnMut(Theme)>;

/// Single owner of the theme flag. Views receive the current [`Theme`] explicitly
/// or subscribe for changes.
pub struct ThemeStore {
    storage: Box<dyn ThemeStorage>,
    key: String,
    theme: Theme,
    ids: IdAllocator,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("key", &self.key)
            .field("theme", &self.theme)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ThemeStore {
    /// Starts light until [`ThemeStore::load`] runs.
    pub fn new(cfg: &ThemeCfg, storage: Box<dyn ThemeStorage>) -> Self {
        Self {
            storage,
            key: cfg.storage_key.clone(),
            theme: Theme::Light,
            ids: IdAllocator::new(),
            listeners: Vec::new(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// A stored value decides: `"dark"` is dark and anything else is light. Only a
    /// missing, empty or unreadable value falls back to the system preference.
    /// Nothing is persisted here.
    pub fn load(&mut self, system_prefers_dark: bool) -> Theme {
        let stored = match self.storage.get(&self.key) {
            Ok(v) => v.filter(|v| !v.is_empty()),
            Err(e) => {
                log::warn!("theme storage read failed ({e}); using system preference");
                None
            }
        };
        self.theme = match &stored {
            Some(v) => Theme::from_stored(v),
            None => Theme::from_dark(system_prefers_dark),
        };
        log::info!(
            "theme loaded: {} (source: {})",
            self.theme,
            if stored.is_some() { "storage" } else { "system" }
        );
        self.notify();
        self.theme
    }

    /// Flip, persist and notify. A failed write is logged; the visible theme still flips.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = self.storage.set(&self.key, self.theme.as_str()) {
            log::warn!("theme not persisted: {e}");
        }
        log::info!("theme toggled to {}", self.theme);
        self.notify();
        self.theme
    }

    pub fn subscribe(&mut self, listener: impl FnMut(Theme) + 'static) -> SubscriptionId {
        let id = self.ids.alloc_subscription();
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false when the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        let theme = self.theme;
        for (_, listener) in self.listeners.iter_mut() {
            listener(theme);
        }
    }
}
