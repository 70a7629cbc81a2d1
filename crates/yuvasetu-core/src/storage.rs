//! Key-value storage abstraction for persisted UI state.
//!
//! The shell persists a handful of string values (theme, contrast, language,
//! signed-in user). Each platform provides its own [`PreferenceStore`]:
//!
//! - **Web (WASM)**: `window.localStorage` (in the app crate)
//! - **Desktop**: a JSON file in the platform data directory (in the app crate)
//! - **Tests**: [`InMemoryPreferenceStore`]
//!
//! Operations are synchronous. `localStorage` is synchronous and the shell
//! only touches storage at startup and in click handlers.

use crate::error::StoreError;
use std::collections::HashMap;
use std::cell::RefCell;
use std::rc::Rc;

/// String key-value store used for preferences and session data.
pub trait PreferenceStore {
    /// Returns the stored value, or `Ok(None)` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes `key`. Returns `Ok(())` even if the key didn't exist.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Reads `key`, folding any storage failure into "no value".
pub fn read_or_none<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "Preference read failed, treating as unset");
            None
        }
    }
}

/// In-memory store. Nothing survives the process; used in tests and as the
/// fallback when no platform storage is available.
///
/// Single-threaded: the UI shares it through `Rc`.
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    values: RefCell<HashMap<String, String>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            values: RefCell::new(values),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Store whose every operation fails, for exercising the "failure is
    /// absence" paths.
    pub struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable("storage disabled".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("storage disabled".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("storage disabled".to_string()))
        }
    }
}
