//! App shell components: Header, Footer, BottomNav
//!
//! These components form the persistent frame around the routed page.

mod bottom_nav;
mod footer;
mod header;

pub use bottom_nav::BottomNav;
pub use footer::Footer;
pub use header::Header;

use crate::components::use_app_context;
use crate::routes::Route;
use dioxus::prelude::*;

/// Layout shared by every route.
#[component]
pub fn Shell() -> Element {
    let ctx = use_app_context();
    let route = use_route::<Route>();

    // Pick up sign-ins/outs made elsewhere (another tab) on each navigation
    use_effect(use_reactive((&route,), move |(_route,)| ctx.sync_session()));

    rsx! {
        div { class: "ys-app",
            Header {
                ctx,
                on_toggle_theme: move |_| ctx.toggle_theme(),
                on_toggle_contrast: move |_| ctx.toggle_contrast(),
            }

            main { class: "ys-main",
                Outlet::<Route> {}
            }

            Footer { ctx }
            BottomNav { ctx }
        }
    }
}
