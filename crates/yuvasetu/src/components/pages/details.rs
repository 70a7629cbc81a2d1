use crate::components::use_app_context;
use crate::routes::Route;
use dioxus::prelude::*;

/// Details page for one internship. The identifier is the only state carried
/// in from the URL.
#[component]
pub fn InternshipDetails(id: String) -> Element {
    let ctx = use_app_context();
    let title = ctx.translate("page.details.title");
    let back = ctx.translate("page.not_found.back");

    rsx! {
        section { class: "ys-page",
            h2 { class: "ys-page-title", "{title}" }
            p { class: "ys-page-body ys-mono", "#{id}" }
            Link { to: Route::Home {}, class: "ys-link", "{back}" }
        }
    }
}
