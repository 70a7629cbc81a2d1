//! Persisted UI preference flags (dark mode, high contrast).
//!
//! # Resolution
//!
//! At startup each flag is derived with the policy "explicit persisted value
//! wins":
//!
//! | Flag            | Persisted value present       | Absent                 |
//! |-----------------|-------------------------------|------------------------|
//! | `dark`          | `value == "dark"`             | system dark-mode signal |
//! | `high_contrast` | `value == "high"`             | `false`                |
//!
//! An empty string counts as absent. A storage failure counts as absent.
//!
//! # Toggling
//!
//! Each toggle flips its flag and writes the new value back to the store. The
//! caller is responsible for reflecting the flags onto the document root (see
//! [`crate::presentation::apply_markers`]).

use crate::config::{
    CONTRAST_HIGH, CONTRAST_KEY, CONTRAST_NORMAL, THEME_DARK, THEME_KEY, THEME_LIGHT,
};
use crate::error::ParseError;
use crate::storage::{read_or_none, PreferenceStore};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument, warn};

/// Colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => THEME_LIGHT,
            Theme::Dark => THEME_DARK,
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl FromStr for Theme {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            THEME_DARK => Ok(Theme::Dark),
            THEME_LIGHT => Ok(Theme::Light),
            other => Err(ParseError::UnknownTheme(other.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contrast level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contrast {
    Normal,
    High,
}

impl Contrast {
    pub fn as_str(self) -> &'static str {
        match self {
            Contrast::Normal => CONTRAST_NORMAL,
            Contrast::High => CONTRAST_HIGH,
        }
    }

    pub fn from_high(high: bool) -> Self {
        if high {
            Contrast::High
        } else {
            Contrast::Normal
        }
    }
}

impl FromStr for Contrast {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CONTRAST_HIGH => Ok(Contrast::High),
            CONTRAST_NORMAL => Ok(Contrast::Normal),
            other => Err(ParseError::UnknownContrast(other.to_string())),
        }
    }
}

impl fmt::Display for Contrast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two process-wide UI preference flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiPreferences {
    pub dark: bool,
    pub high_contrast: bool,
}

impl UiPreferences {
    /// Derives the startup flags from persisted values and the system signal.
    pub fn resolve<S: PreferenceStore + ?Sized>(store: &S, system_prefers_dark: bool) -> Self {
        let saved_theme = read_or_none(store, THEME_KEY).filter(|v| !v.is_empty());
        let saved_contrast = read_or_none(store, CONTRAST_KEY).filter(|v| !v.is_empty());

        let dark = match saved_theme.as_deref() {
            Some(value) => value == THEME_DARK,
            None => system_prefers_dark,
        };
        let high_contrast = saved_contrast.as_deref() == Some(CONTRAST_HIGH);

        debug!(
            ?saved_theme,
            ?saved_contrast,
            system_prefers_dark,
            dark,
            high_contrast,
            "Resolved UI preferences"
        );

        Self {
            dark,
            high_contrast,
        }
    }

    pub fn theme(self) -> Theme {
        Theme::from_dark(self.dark)
    }

    pub fn contrast(self) -> Contrast {
        Contrast::from_high(self.high_contrast)
    }

    /// Flips dark mode and persists the new theme.
    #[instrument(skip(self, store))]
    pub fn toggle_theme<S: PreferenceStore + ?Sized>(&mut self, store: &S) -> Theme {
        self.dark = !self.dark;
        let theme = self.theme();
        if let Err(e) = store.set(THEME_KEY, theme.as_str()) {
            warn!("Failed to persist theme preference: {}", e);
        }
        theme
    }

    /// Flips high-contrast mode and persists the new contrast level.
    #[instrument(skip(self, store))]
    pub fn toggle_contrast<S: PreferenceStore + ?Sized>(&mut self, store: &S) -> Contrast {
        self.high_contrast = !self.high_contrast;
        let contrast = self.contrast();
        if let Err(e) = store.set(CONTRAST_KEY, contrast.as_str()) {
            warn!("Failed to persist contrast preference: {}", e);
        }
        contrast
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_support::FailingStore;
    use crate::storage::InMemoryPreferenceStore;

    #[test]
    fn test_theme_round_trips_through_str() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(ParseError::UnknownTheme("sepia".to_string()))
        );
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn test_contrast_parse() {
        assert_eq!("high".parse::<Contrast>(), Ok(Contrast::High));
        assert_eq!("normal".parse::<Contrast>(), Ok(Contrast::Normal));
        assert!("low".parse::<Contrast>().is_err());
    }

    #[test]
    fn test_empty_store_uses_system_signal() {
        let store = InMemoryPreferenceStore::new();

        let prefs = UiPreferences::resolve(&store, true);
        assert!(prefs.dark);
        assert!(!prefs.high_contrast);

        let prefs = UiPreferences::resolve(&store, false);
        assert!(!prefs.dark);
    }

    #[test]
    fn test_persisted_light_overrides_dark_system() {
        let store = InMemoryPreferenceStore::with_entries([(THEME_KEY, "light")]);
        assert!(!UiPreferences::resolve(&store, true).dark);
    }

    #[test]
    fn test_empty_persisted_value_counts_as_absent() {
        let store = InMemoryPreferenceStore::with_entries([(THEME_KEY, ""), (CONTRAST_KEY, "")]);
        let prefs = UiPreferences::resolve(&store, true);
        assert!(prefs.dark);
        assert!(!prefs.high_contrast);
    }

    #[test]
    fn test_unrecognized_theme_value_is_light() {
        // Any present value other than "dark" means light
        let store = InMemoryPreferenceStore::with_entries([(THEME_KEY, "solarized")]);
        assert!(!UiPreferences::resolve(&store, true).dark);
    }

    #[test]
    fn test_storage_failure_is_treated_as_absent() {
        let prefs = UiPreferences::resolve(&FailingStore, true);
        assert_eq!(
            prefs,
            UiPreferences {
                dark: true,
                high_contrast: false
            }
        );
    }

    #[test]
    fn test_toggle_persists_new_values() {
        let store = InMemoryPreferenceStore::new();
        let mut prefs = UiPreferences::default();

        assert_eq!(prefs.toggle_theme(&store), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));

        assert_eq!(prefs.toggle_contrast(&store), Contrast::High);
        assert_eq!(store.get(CONTRAST_KEY).unwrap().as_deref(), Some("high"));

        assert_eq!(prefs.toggle_contrast(&store), Contrast::Normal);
        assert_eq!(store.get(CONTRAST_KEY).unwrap().as_deref(), Some("normal"));
    }

    #[test]
    fn test_toggle_still_flips_when_persist_fails() {
        let mut prefs = UiPreferences::default();
        prefs.toggle_theme(&FailingStore);
        assert!(prefs.dark);
    }
}
