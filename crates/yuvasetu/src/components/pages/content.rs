use crate::components::use_app_context;
use dioxus::prelude::*;

#[component]
fn PageSection(title: &'static str, body: &'static str) -> Element {
    rsx! {
        section { class: "ys-page",
            h2 { class: "ys-page-title", "{title}" }
            p { class: "ys-page-body", "{body}" }
        }
    }
}

#[component]
pub fn Home() -> Element {
    let ctx = use_app_context();
    rsx! {
        PageSection {
            title: ctx.translate("page.home.title"),
            body: ctx.translate("page.home.body"),
        }
    }
}

#[component]
pub fn Saved() -> Element {
    let ctx = use_app_context();
    rsx! {
        PageSection {
            title: ctx.translate("page.saved.title"),
            body: ctx.translate("page.saved.empty"),
        }
    }
}

#[component]
pub fn Learn() -> Element {
    let ctx = use_app_context();
    rsx! {
        PageSection {
            title: ctx.translate("page.learn.title"),
            body: ctx.translate("page.learn.body"),
        }
    }
}
