use crate::components::AppContext;
use crate::routes::Route;
use dioxus::prelude::*;
use yuvasetu_core::config::{APP_MARK, APP_NAME};
use yuvasetu_core::menus::{HeaderMenus, SessionView};
use yuvasetu_core::nav::PRIMARY_NAV;
use yuvasetu_core::Language;

/// Top bar with brand, primary navigation and the preference/session controls.
///
/// Theme and contrast toggles are delegated to the shell; the language and
/// user dropdowns are local state.
#[component]
pub fn Header(
    ctx: AppContext,
    on_toggle_theme: EventHandler<()>,
    on_toggle_contrast: EventHandler<()>,
) -> Element {
    let mut menus = use_signal(HeaderMenus::default);
    let navigator = use_navigator();

    let prefs = *ctx.prefs.read();
    let language = ctx.language();

    let theme_label = if prefs.dark {
        ctx.translate("a11y.theme_to_light")
    } else {
        ctx.translate("a11y.theme_to_dark")
    };
    let theme_glyph = if prefs.dark { "\u{2600}" } else { "\u{263E}" };

    let contrast_label = if prefs.high_contrast {
        ctx.translate("a11y.contrast_off")
    } else {
        ctx.translate("a11y.contrast_on")
    };
    let contrast_class = if prefs.high_contrast {
        "ys-icon-btn ys-icon-btn--pressed"
    } else {
        "ys-icon-btn"
    };

    let contrast_pressed = prefs.high_contrast;
    let language_badge = language.badge();
    let language_label = ctx.translate("nav.language");

    // Language dropdown
    let language_menu = if menus.read().language_open {
        rsx! {
            div { class: "ys-dropdown", "role": "menu",
                {Language::ALL.into_iter().map(|lang| {
                    let code = lang.code();
                    let label = lang.native_label();
                    let class = if lang == language {
                        "ys-dropdown-item ys-dropdown-item--current"
                    } else {
                        "ys-dropdown-item"
                    };
                    rsx! {
                        button {
                            key: "{code}",
                            class: "{class}",
                            "role": "menuitem",
                            lang: code,
                            onclick: move |_| ctx.select_language(&mut menus.write(), lang),
                            "{label}"
                        }
                    }
                })}
            }
        }
    } else {
        rsx! { Fragment {} }
    };

    // Session area: login link or user menu
    let session_view = SessionView::for_user(ctx.user.read().as_ref(), *menus.read());
    let session_area = match session_view {
        SessionView::LoginLink { href } => {
            let login_label = ctx.translate("nav.login");
            rsx! {
                Link { to: Route::from_path(href), class: "ys-btn ys-btn--primary", "{login_label}" }
            }
        }
        SessionView::UserMenu { name, open } => {
            let saved_label = ctx.translate("nav.saved");
            let logout_label = ctx.translate("nav.logout");
            rsx! {
                div { class: "ys-menu",
                    button {
                        class: "ys-user-btn",
                        "aria-haspopup": "menu",
                        "aria-expanded": "{open}",
                        onclick: move |_| menus.write().toggle_user(),
                        span { class: "ys-avatar", "\u{1F464}" }
                        span { class: "ys-user-name", "{name}" }
                        span { class: "ys-chevron", "\u{25BE}" }
                    }
                    if open {
                        div { class: "ys-dropdown", "role": "menu",
                            Link {
                                to: Route::Saved {},
                                class: "ys-dropdown-item",
                                role: "menuitem",
                                onclick: move |_| menus.write().close_user(),
                                "{saved_label}"
                            }
                            button {
                                class: "ys-dropdown-item",
                                "role": "menuitem",
                                onclick: move |_| {
                                    let destination = ctx.log_out(&mut menus.write());
                                    navigator.push(destination);
                                },
                                "{logout_label}"
                            }
                        }
                    }
                }
            }
        }
    };

    let language_open = menus.read().language_open;

    rsx! {
        header { class: "ys-header",
            div { class: "ys-header-inner",
                Link { to: Route::Home {}, class: "ys-brand",
                    span { class: "ys-brand-mark", "{APP_MARK}" }
                    h1 { class: "ys-brand-name", "{APP_NAME}" }
                }

                nav { class: "ys-header-nav",
                    {PRIMARY_NAV.into_iter().map(|item| {
                        let label = ctx.translate(item.label_key);
                        let path = item.path;
                        rsx! {
                            Link { key: "{path}", to: Route::from_path(path), class: "ys-nav-link", "{label}" }
                        }
                    })}
                }

                div { class: "ys-header-actions",
                    button {
                        class: "ys-icon-btn",
                        "aria-label": theme_label,
                        onclick: move |_| on_toggle_theme.call(()),
                        "{theme_glyph}"
                    }
                    button {
                        class: contrast_class,
                        "aria-label": contrast_label,
                        "aria-pressed": "{contrast_pressed}",
                        onclick: move |_| on_toggle_contrast.call(()),
                        "\u{25D0}"
                    }
                    div { class: "ys-menu",
                        button {
                            class: "ys-lang-btn",
                            "aria-label": language_label,
                            "aria-haspopup": "menu",
                            "aria-expanded": "{language_open}",
                            onclick: move |_| menus.write().toggle_language(),
                            span { class: "ys-lang-glyph", "\u{1F310}" }
                            span { class: "ys-lang-code", "{language_badge}" }
                            span { class: "ys-chevron", "\u{25BE}" }
                        }
                        {language_menu}
                    }
                    {session_area}
                }
            }
        }
    }
}
