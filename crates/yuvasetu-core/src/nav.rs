//! Navigation destinations and the active-link rule.

use crate::config::{HOME_PATH, LEARN_PATH, SAVED_PATH};

/// A top-level navigation destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Target route path.
    pub path: &'static str,
    /// Translation key for the link label.
    pub label_key: &'static str,
}

/// Primary destinations, in display order. Shared by the header nav and the
/// mobile bottom bar.
pub const PRIMARY_NAV: [NavItem; 3] = [
    NavItem {
        path: HOME_PATH,
        label_key: "nav.home",
    },
    NavItem {
        path: SAVED_PATH,
        label_key: "nav.saved",
    },
    NavItem {
        path: LEARN_PATH,
        label_key: "nav.learn",
    },
];

/// Whether a link to `target` is the current page.
///
/// Exact string match only: `/details/7` activates nothing and `/saved/x`
/// does not activate `/saved`.
pub fn is_active(current_path: &str, target: &str) -> bool {
    current_path == target
}

/// Path portion of a location string: everything before `?` or `#`.
///
/// Trailing slashes are kept, so `/saved/` stays distinct from `/saved`.
pub fn location_path(location: &str) -> &str {
    location
        .find(['?', '#'])
        .map_or(location, |end| &location[..end])
}

/// Index into [`PRIMARY_NAV`] of the active item, if any.
pub fn active_index(current_path: &str) -> Option<usize> {
    PRIMARY_NAV
        .iter()
        .position(|item| is_active(current_path, item.path))
}
