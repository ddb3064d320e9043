//! Browser-backed theme persistence and the system color-scheme query.

use folio_core::{StorageError, ThemeStorage};
use web_sys::Window;

/// `window.localStorage`. Private browsing and sandboxed frames may deny access;
/// every call then reports [`StorageError::Unavailable`].
pub struct LocalStorage {
    inner: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn new(window: &Window) -> Self {
        let inner = match window.local_storage() {
            Ok(Some(s)) => Some(s),
            Ok(None) => None,
            Err(e) => {
                log::warn!("localStorage unavailable: {e:?}");
                None
            }
        };
        Self { inner }
    }
}

impl ThemeStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = self.inner.as_ref().ok_or(StorageError::Unavailable)?;
        storage.get_item(key).map_err(|_| StorageError::Unavailable)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.inner.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }
}

/// `matchMedia("(prefers-color-scheme: dark)").matches`, false when unsupported.
pub fn system_prefers_dark(window: &Window) -> bool {
    match window.match_media("(prefers-color-scheme: dark)") {
        Ok(Some(query)) => query.matches(),
        _ => false,
    }
}
