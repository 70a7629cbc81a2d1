use crate::components::use_app_context;
use crate::routes::Route;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

/// Fallback for any path that matches no route.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let ctx = use_app_context();
    let title = ctx.translate("page.not_found.title");
    let body = ctx.translate("page.not_found.body");
    let back = ctx.translate("page.not_found.back");

    debug!("No route for /{}", segments.join("/"));

    rsx! {
        section { class: "ys-page ys-page--not-found",
            h2 { class: "ys-page-title", "{title}" }
            p { class: "ys-page-body", "{body}" }
            Link { to: Route::Home {}, class: "ys-btn ys-btn--primary", "{back}" }
        }
    }
}
