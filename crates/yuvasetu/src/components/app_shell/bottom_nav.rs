use crate::components::AppContext;
use crate::platform;
use crate::routes::Route;
use dioxus::prelude::*;
use yuvasetu_core::nav::{is_active, location_path, NavItem, PRIMARY_NAV};

/// Fixed three-column navigation for narrow viewports.
///
/// A link is active only when the address-bar path equals its target exactly.
#[component]
pub fn BottomNav(ctx: AppContext) -> Element {
    // Subscribes to navigation; the parsed route is only the fallback path.
    let route = use_route::<Route>();
    let current = current_path(platform::current_location(), &route);
    let nav_label = ctx.translate("nav.primary");

    rsx! {
        nav { class: "ys-bottom-nav", "aria-label": nav_label,
            ul { class: "ys-bottom-nav-list",
                {PRIMARY_NAV.into_iter().map(|item| bottom_link(ctx, item, is_active(&current, item.path)))}
            }
        }
    }
}

/// Path compared against the nav targets. The raw location wins over the
/// parsed route, which normalises away trailing slashes.
fn current_path(location: Option<String>, route: &Route) -> String {
    match location {
        Some(location) => location_path(&location).to_string(),
        None => route.to_string(),
    }
}

fn bottom_link(ctx: AppContext, item: NavItem, active: bool) -> Element {
    let label = ctx.translate(item.label_key);
    let glyph = icon(item.path);
    let path = item.path;

    rsx! {
        li { key: "{path}",
            if active {
                Link {
                    to: Route::from_path(path),
                    class: "ys-bottom-link ys-bottom-link--active",
                    aria_current: "page",
                    span { class: "ys-bottom-icon", "{glyph}" }
                    span { class: "ys-bottom-label", "{label}" }
                }
            } else {
                Link {
                    to: Route::from_path(path),
                    class: "ys-bottom-link",
                    span { class: "ys-bottom-icon", "{glyph}" }
                    span { class: "ys-bottom-label", "{label}" }
                }
            }
        }
    }
}

fn icon(path: &str) -> &'static str {
    match path {
        "/" => "\u{2302}",      // house
        "/saved" => "\u{2605}", // star
        _ => "\u{270E}",        // pencil
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yuvasetu_core::nav::active_index;

    #[test]
    fn test_trailing_slash_location_activates_nothing() {
        // The router parses both of these into a static route
        for raw in ["/saved/", "/learn/"] {
            let route = Route::from_path(raw);
            assert!(!matches!(route, Route::NotFound { .. }), "{raw}");

            let path = current_path(Some(raw.to_string()), &route);
            assert_eq!(path, raw);
            assert_eq!(active_index(&path), None, "{raw}");
        }
    }

    #[test]
    fn test_location_query_and_hash_are_ignored() {
        let path = current_path(Some("/saved?sort=new#top".to_string()), &Route::Saved {});
        assert_eq!(active_index(&path), Some(1));
    }

    #[test]
    fn test_route_is_used_without_location() {
        assert_eq!(active_index(&current_path(None, &Route::Home {})), Some(0));
        assert_eq!(active_index(&current_path(None, &Route::Learn {})), Some(2));
        let details = Route::InternshipDetails {
            id: "7".to_string(),
        };
        assert_eq!(active_index(&current_path(None, &details)), None);
    }
}
