//! Platform-specific storage and document access.
//!
//! - **Web (WASM)**: `localStorage`, the `prefers-color-scheme` media query and
//!   the `<html>` element's class list via `web-sys`
//! - **Desktop**: a JSON file in the platform data directory; root markers are
//!   applied by evaluating a small script in the webview
//! - **Other native builds** (tests, docs): in-memory storage
//!
//! The rest of the app only sees [`PreferenceStore`] and [`DocumentRoot`].

use std::rc::Rc;
use yuvasetu_core::presentation::DocumentRoot;
use yuvasetu_core::PreferenceStore;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(all(not(target_arch = "wasm32"), feature = "desktop"))]
mod desktop;

#[cfg(not(target_arch = "wasm32"))]
mod script_root;

// ============================================================================
// Preference store
// ============================================================================

/// Opens the preference store for the current platform.
#[cfg(target_arch = "wasm32")]
pub fn create_platform_store() -> Rc<dyn PreferenceStore> {
    Rc::new(web::LocalStorage)
}

#[cfg(all(not(target_arch = "wasm32"), feature = "desktop"))]
pub fn create_platform_store() -> Rc<dyn PreferenceStore> {
    use dioxus::logger::tracing::warn;
    use yuvasetu_core::InMemoryPreferenceStore;

    match desktop::FilePreferenceStore::open_default() {
        Ok(store) => Rc::new(store),
        Err(e) => {
            warn!("Preference file unavailable, settings won't persist: {}", e);
            Rc::new(InMemoryPreferenceStore::new())
        }
    }
}

// Fallback for test/doc builds without a platform feature
#[cfg(all(not(target_arch = "wasm32"), not(feature = "desktop")))]
pub fn create_platform_store() -> Rc<dyn PreferenceStore> {
    Rc::new(yuvasetu_core::InMemoryPreferenceStore::new())
}

// ============================================================================
// System signal and document root
// ============================================================================

/// Whether the OS/browser asks for a dark colour scheme.
#[cfg(target_arch = "wasm32")]
pub fn system_prefers_dark() -> bool {
    web::system_prefers_dark()
}

/// Desktop webviews don't expose the media query synchronously; default to light.
#[cfg(not(target_arch = "wasm32"))]
pub fn system_prefers_dark() -> bool {
    false
}

/// Raw path of the address bar (`location.pathname`), untouched by route
/// parsing.
#[cfg(target_arch = "wasm32")]
pub fn current_location() -> Option<String> {
    web::current_location()
}

/// Native renderers have no address bar; the router's own path is the
/// location.
#[cfg(not(target_arch = "wasm32"))]
pub fn current_location() -> Option<String> {
    None
}

/// Handle to the document root element of the running page.
#[cfg(target_arch = "wasm32")]
pub fn document_root() -> impl DocumentRoot {
    web::DomRoot::current()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn document_root() -> impl DocumentRoot {
    script_root::ScriptRoot::new()
}
