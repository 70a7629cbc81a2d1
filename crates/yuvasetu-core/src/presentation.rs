//! Document-root presentation markers.
//!
//! Dark mode and high-contrast mode are expressed to the stylesheet as the
//! presence of a class on the document root (`<html class="dark hc">`).
//! [`DocumentRoot`] abstracts the element so the marker logic can be tested
//! without a browser.

use crate::config::{DARK_MARKER, HIGH_CONTRAST_MARKER};
use crate::preferences::UiPreferences;
use std::collections::BTreeSet;

/// Something that carries a set of named markers (classes).
pub trait DocumentRoot {
    /// Adds `marker` when `present` is true, removes it otherwise.
    fn set_marker(&mut self, marker: &str, present: bool);

    fn has_marker(&self, marker: &str) -> bool;
}

/// Reflects both preference flags onto `root`. The two markers are independent.
pub fn apply_markers<R: DocumentRoot + ?Sized>(root: &mut R, prefs: UiPreferences) {
    root.set_marker(DARK_MARKER, prefs.dark);
    root.set_marker(HIGH_CONTRAST_MARKER, prefs.high_contrast);
}

/// Marker set held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryRoot {
    markers: BTreeSet<String>,
}

impl InMemoryRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markers in sorted order.
    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(String::as_str)
    }
}

impl DocumentRoot for InMemoryRoot {
    fn set_marker(&mut self, marker: &str, present: bool) {
        if present {
            self.markers.insert(marker.to_string());
        } else {
            self.markers.remove(marker);
        }
    }

    fn has_marker(&self, marker: &str) -> bool {
        self.markers.contains(marker)
    }
}
