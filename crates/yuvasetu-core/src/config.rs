//! Application configuration constants.
//!
//! Storage keys, document-root marker classes and route paths shared by the
//! core logic and the Dioxus front-end. Keeping them in one place means the
//! persisted format and the URL layout cannot drift between crates.

// =============================================================================
// Branding
// =============================================================================

/// Display name shown in the header and footer.
pub const APP_NAME: &str = "YuvaSetu.AI";

/// Short mark rendered inside the logo badge.
pub const APP_MARK: &str = "YS";

// =============================================================================
// Persisted preference keys
// =============================================================================

/// Theme preference key. Values: [`THEME_DARK`] or [`THEME_LIGHT`].
pub const THEME_KEY: &str = "ys_theme";

/// Contrast preference key. Values: [`CONTRAST_HIGH`] or [`CONTRAST_NORMAL`].
pub const CONTRAST_KEY: &str = "ys_contrast";

/// Selected interface language (one of the supported language codes).
pub const LANGUAGE_KEY: &str = "ys_lang";

/// JSON-encoded record of the signed-in user.
pub const USER_KEY: &str = "ys_user";

pub const THEME_DARK: &str = "dark";
pub const THEME_LIGHT: &str = "light";
pub const CONTRAST_HIGH: &str = "high";
pub const CONTRAST_NORMAL: &str = "normal";

// =============================================================================
// Document root markers
// =============================================================================

/// Class toggled on the document root while dark mode is on.
pub const DARK_MARKER: &str = "dark";

/// Class toggled on the document root while high-contrast mode is on.
pub const HIGH_CONTRAST_MARKER: &str = "hc";

/// Media query used as the system dark-mode signal.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// =============================================================================
// Route paths
// =============================================================================

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";
pub const SAVED_PATH: &str = "/saved";
pub const LEARN_PATH: &str = "/learn";

/// Prefix of the parametric details route (`/details/{id}`).
pub const DETAILS_PREFIX: &str = "/details/";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_and_marker_names_are_distinct() {
        assert_ne!(THEME_KEY, CONTRAST_KEY);
        assert_ne!(DARK_MARKER, HIGH_CONTRAST_MARKER);
    }

    #[test]
    fn test_details_prefix_is_absolute() {
        assert!(DETAILS_PREFIX.starts_with('/'));
        assert!(DETAILS_PREFIX.ends_with('/'));
    }
}
