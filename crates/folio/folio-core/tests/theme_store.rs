use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use folio_core::{
    config::ThemeCfg, Config, MemoryStorage, Site, SiteEvent, StorageError, Theme, ThemeStorage,
    ThemeStore,
};

/// Storage shared with the test so persisted values can be inspected.
#[derive(Clone, Default)]
struct SharedStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl ThemeStorage for SharedStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage that refuses every access, like a locked-down private window.
struct DeniedStorage;

impl ThemeStorage for DeniedStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            key: key.to_string(),
            reason: "quota".into(),
        })
    }
}

fn store_with(storage: impl ThemeStorage + 'static) -> ThemeStore {
    ThemeStore::new(&ThemeCfg::default(), Box::new(storage))
}

#[test]
fn stored_value_wins_over_system_preference() {
    let mut store = store_with(MemoryStorage::with_entry("theme", "light"));
    assert_eq!(store.load(true), Theme::Light);

    let mut store = store_with(MemoryStorage::with_entry("theme", "dark"));
    assert_eq!(store.load(false), Theme::Dark);
}

#[test]
fn missing_or_empty_value_falls_back_to_system() {
    let mut store = store_with(MemoryStorage::new());
    assert_eq!(store.load(true), Theme::Dark);
    let mut store = store_with(MemoryStorage::new());
    assert_eq!(store.load(false), Theme::Light);

    let mut store = store_with(MemoryStorage::with_entry("theme", ""));
    assert_eq!(store.load(true), Theme::Dark);
}

#[test]
fn unrecognized_stored_value_is_light() {
    let mut store = store_with(MemoryStorage::with_entry("theme", "sepia"));
    assert_eq!(store.load(true), Theme::Light);
    let mut store = store_with(MemoryStorage::with_entry("theme", "DARK"));
    assert_eq!(store.load(true), Theme::Light);
}

#[test]
fn double_toggle_restores_and_persists() {
    let storage = SharedStorage::default();
    let mut store = store_with(storage.clone());
    let original = store.load(false);
    assert!(storage.entries.borrow().is_empty(), "load never writes");

    assert_eq!(store.toggle(), Theme::Dark);
    assert_eq!(
        storage.entries.borrow().get("theme").map(String::as_str),
        Some("dark")
    );
    assert_eq!(store.toggle(), original);
    assert_eq!(
        storage.entries.borrow().get("theme").map(String::as_str),
        Some("light")
    );
}

#[test]
fn subscribers_see_every_change_until_unsubscribed() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut store = store_with(MemoryStorage::new());
    let sink = seen.clone();
    let id = store.subscribe(move |t| sink.borrow_mut().push(t));
    assert_eq!(store.subscriber_count(), 1);

    store.load(true);
    store.toggle();
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.toggle();

    assert_eq!(*seen.borrow(), vec![Theme::Dark, Theme::Light]);
}

#[test]
fn denied_storage_degrades_without_error() {
    let mut store = store_with(DeniedStorage);
    assert_eq!(store.load(true), Theme::Dark);
    assert_eq!(store.toggle(), Theme::Light);
    assert!(!store.is_dark());
}

#[test]
fn site_reports_theme_changes() {
    let mut site = Site::new(Config::default(), Box::new(MemoryStorage::new()));
    site.load_theme(false);
    site.toggle_theme();
    assert_eq!(
        site.drain_events(),
        vec![
            SiteEvent::ThemeChanged {
                theme: Theme::Light
            },
            SiteEvent::ThemeChanged { theme: Theme::Dark },
        ]
    );
    assert_eq!(site.theme().toggle_label(), "Switch to light mode");
}
