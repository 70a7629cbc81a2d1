//! Login and signup pages.
//!
//! Both establish a client-side session from the entered name (and optional
//! email) and return to the home page. Credential checks belong to the
//! external auth backend.

use crate::components::use_app_context;
use crate::routes::Route;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use yuvasetu_core::User;

#[component]
pub fn Login() -> Element {
    rsx! {
        AuthForm { title_key: "page.login.title", alternate: Route::Signup {}, alternate_key: "nav.signup" }
    }
}

#[component]
pub fn Signup() -> Element {
    rsx! {
        AuthForm { title_key: "page.signup.title", alternate: Route::Login {}, alternate_key: "nav.login" }
    }
}

#[component]
fn AuthForm(title_key: &'static str, alternate: Route, alternate_key: &'static str) -> Element {
    let ctx = use_app_context();
    let navigator = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);

    let title = ctx.translate(title_key);
    let name_label = ctx.translate("form.name");
    let email_label = ctx.translate("form.email");
    let submit_label = ctx.translate("form.submit");
    let alternate_label = ctx.translate(alternate_key);

    let can_submit = !name.read().trim().is_empty();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let entered = name.read().trim().to_string();
        if entered.is_empty() {
            return;
        }
        let mut user = User::new(entered);
        let entered_email = email.read().trim().to_string();
        if !entered_email.is_empty() {
            user = user.with_email(entered_email);
        }

        match ctx.log_in(user) {
            Ok(()) => {
                navigator.push(Route::Home {});
            }
            Err(e) => warn!("Failed to start session: {}", e),
        }
    };

    rsx! {
        section { class: "ys-page ys-auth",
            h2 { class: "ys-page-title", "{title}" }
            form { class: "ys-form", onsubmit: handle_submit,
                label { class: "ys-field",
                    span { class: "ys-field-label", "{name_label}" }
                    input {
                        r#type: "text",
                        name: "name",
                        autocomplete: "name",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }
                }
                label { class: "ys-field",
                    span { class: "ys-field-label", "{email_label}" }
                    input {
                        r#type: "email",
                        name: "email",
                        autocomplete: "email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }
                button {
                    class: "ys-btn ys-btn--primary",
                    r#type: "submit",
                    disabled: !can_submit,
                    "{submit_label}"
                }
            }
            Link { to: alternate, class: "ys-link", "{alternate_label}" }
        }
    }
}
