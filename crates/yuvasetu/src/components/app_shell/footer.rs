use crate::components::AppContext;
use dioxus::prelude::*;
use yuvasetu_core::config::APP_NAME;

#[component]
pub fn Footer(ctx: AppContext) -> Element {
    let tagline = ctx.translate("footer.tagline");

    rsx! {
        footer { class: "ys-footer",
            span { class: "ys-footer-brand", "{APP_NAME}" }
            span { class: "ys-footer-text", "{tagline}" }
        }
    }
}
