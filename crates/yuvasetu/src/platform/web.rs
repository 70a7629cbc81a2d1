//! Browser implementations backed by `web-sys`.

use dioxus::logger::tracing::warn;
use wasm_bindgen::JsValue;
use web_sys::{Element, Storage};
use yuvasetu_core::config::PREFERS_DARK_QUERY;
use yuvasetu_core::presentation::DocumentRoot;
use yuvasetu_core::{PreferenceStore, StoreError};

fn js_err(e: JsValue) -> StoreError {
    StoreError::Io(format!("{:?}", e))
}

/// `window.localStorage`. Looked up on every call so a store created before
/// the page finished loading still works.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<Storage, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("No window".to_string()))?;
        window
            .local_storage()
            .map_err(js_err)?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?.get_item(key).map_err(js_err)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?.set_item(key, value).map_err(js_err)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Self::storage()?.remove_item(key).map_err(js_err)
    }
}

pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn current_location() -> Option<String> {
    web_sys::window().and_then(|w| w.location().pathname().ok())
}

/// The page's `<html>` element.
pub struct DomRoot {
    element: Option<Element>,
}

impl DomRoot {
    pub fn current() -> Self {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        Self { element }
    }
}

impl DocumentRoot for DomRoot {
    fn set_marker(&mut self, marker: &str, present: bool) {
        let Some(element) = &self.element else {
            return;
        };
        let classes = element.class_list();
        let result = if present {
            classes.add_1(marker)
        } else {
            classes.remove_1(marker)
        };
        if let Err(e) = result {
            warn!("Failed to update root class {}: {:?}", marker, e);
        }
    }

    fn has_marker(&self, marker: &str) -> bool {
        self.element
            .as_ref()
            .is_some_and(|element| element.class_list().contains(marker))
    }
}
