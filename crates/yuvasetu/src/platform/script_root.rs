//! Document root for native renderers, driven through `document::eval`.

use dioxus::prelude::*;
use yuvasetu_core::presentation::{DocumentRoot, InMemoryRoot};

/// Applies markers by running a class-list toggle in the webview.
///
/// The webview can't be queried synchronously, so `has_marker` reports the
/// markers applied through this handle.
#[derive(Default)]
pub struct ScriptRoot {
    applied: InMemoryRoot,
}

impl ScriptRoot {
    pub fn new() -> Self {
        Self::default()
    }
}

fn toggle_script(marker: &str, present: bool) -> String {
    format!("document.documentElement.classList.toggle({marker:?}, {present});")
}

impl DocumentRoot for ScriptRoot {
    fn set_marker(&mut self, marker: &str, present: bool) {
        self.applied.set_marker(marker, present);
        let _ = document::eval(&toggle_script(marker, present));
    }

    fn has_marker(&self, marker: &str) -> bool {
        self.applied.has_marker(marker)
    }
}
