//! UI components for the YuvaSetu shell.
//!
//! - `app_shell`: Shell layout, Header, BottomNav, Footer
//! - `pages`: one component per route
//!
//! # Application context
//!
//! The root [`App`] owns the preference store, the two UI preference flags,
//! the localization state and the signed-in user, and bundles them into one
//! [`AppContext`]. The shell layout reads it once and hands it to the header,
//! footer and bottom nav as a prop; pages read the same object with
//! [`use_app_context`].
//!
//! ```ignore
//! let ctx = use_app_context();
//! let title = ctx.translate("page.saved.title");
//! ```

mod app_shell;
pub mod pages;

pub use app_shell::{BottomNav, Footer, Header, Shell};

use crate::platform;
use crate::routes::Route;
use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;
use std::rc::Rc;
use yuvasetu_core::i18n::save_language;
use yuvasetu_core::menus::HeaderMenus;
use yuvasetu_core::presentation::apply_markers;
use yuvasetu_core::{
    Language, LocalSession, Localization, PreferenceStore, SessionStore, StoreError,
    UiPreferences, User,
};

/// Session, localization and preference state shared across the tree.
///
/// All fields are copyable handles, so the context is `Copy` and can be moved
/// into as many event handlers as needed.
#[derive(Clone, Copy, PartialEq)]
pub struct AppContext {
    store: CopyValue<Rc<dyn PreferenceStore>>,
    pub prefs: Signal<UiPreferences>,
    pub l10n: Signal<Localization>,
    pub user: Signal<Option<User>>,
}

impl AppContext {
    /// Resolves the persisted state from `store` and wraps it in signals owned
    /// by the current scope.
    pub fn new(store: Rc<dyn PreferenceStore>, system_prefers_dark: bool) -> Self {
        let prefs = UiPreferences::resolve(&*store, system_prefers_dark);
        let l10n = Localization::restore(&*store);
        let user = LocalSession::new(Rc::clone(&store)).current_user();
        Self {
            store: CopyValue::new(store),
            prefs: Signal::new(prefs),
            l10n: Signal::new(l10n),
            user: Signal::new(user),
        }
    }

    pub fn store(&self) -> Rc<dyn PreferenceStore> {
        self.store.cloned()
    }

    pub fn session(&self) -> LocalSession<Rc<dyn PreferenceStore>> {
        LocalSession::new(self.store())
    }

    /// Translates `key` in the current language.
    pub fn translate(&self, key: &'static str) -> &'static str {
        self.l10n.read().translate(key)
    }

    pub fn language(&self) -> Language {
        self.l10n.read().current_language()
    }

    /// Flips dark mode and persists it. The root marker follows via the
    /// effect installed by [`App`].
    pub fn toggle_theme(&self) {
        let store = self.store();
        let mut prefs = self.prefs;
        let theme = prefs.write().toggle_theme(&*store);
        debug!("Theme set to {}", theme);
    }

    /// Flips high-contrast mode and persists it.
    pub fn toggle_contrast(&self) {
        let store = self.store();
        let mut prefs = self.prefs;
        let contrast = prefs.write().toggle_contrast(&*store);
        debug!("Contrast set to {}", contrast);
    }

    /// Applies a language chosen from the header menu and persists it.
    pub fn select_language(&self, menus: &mut HeaderMenus, language: Language) {
        let mut l10n = self.l10n;
        menus.select_language(&mut l10n.write(), language);
        save_language(&*self.store(), language);
    }

    pub fn log_in(&self, user: User) -> Result<(), StoreError> {
        self.session().login(&user)?;
        let mut current = self.user;
        current.set(Some(user));
        Ok(())
    }

    /// Re-reads the persisted session, updating `user` only when it changed.
    pub fn sync_session(&self) {
        let persisted = self.session().current_user();
        let mut current = self.user;
        if *current.peek() != persisted {
            debug!(signed_in = persisted.is_some(), "Session changed outside the shell");
            current.set(persisted);
        }
    }

    /// Signs out and closes the user menu. Returns the route to show next.
    pub fn log_out(&self, menus: &mut HeaderMenus) -> Route {
        let destination = menus.log_out(&self.session());
        let mut current = self.user;
        current.set(None);
        Route::from_path(destination)
    }
}

/// Access the application context provided by [`App`].
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}

#[component]
pub fn App() -> Element {
    let ctx = use_hook(|| {
        AppContext::new(
            platform::create_platform_store(),
            platform::system_prefers_dark(),
        )
    });
    use_context_provider(|| ctx);
    let AppContext { prefs, l10n, user, .. } = ctx;

    use_hook(|| {
        info!(
            language = %l10n.peek().current_language(),
            signed_in = user.peek().is_some(),
            "Shell initialized"
        );
    });

    // Mirror both flags onto <html> whenever either changes
    use_effect(move || {
        let current = *prefs.read();
        apply_markers(&mut platform::document_root(), current);
    });

    rsx! {
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;
    use std::cell::RefCell;
    use yuvasetu_core::config::{CONTRAST_KEY, LANGUAGE_KEY, THEME_KEY, USER_KEY};
    use yuvasetu_core::InMemoryPreferenceStore;

    type Task = Box<dyn FnOnce() -> Box<dyn Any>>;

    thread_local! {
        static TASK: RefCell<Option<Task>> = const { RefCell::new(None) };
        static OUTPUT: RefCell<Option<Box<dyn Any>>> = const { RefCell::new(None) };
    }

    #[component]
    fn Harness() -> Element {
        use_hook(|| {
            if let Some(task) = TASK.with(|t| t.borrow_mut().take()) {
                let output = task();
                OUTPUT.with(|o| *o.borrow_mut() = Some(output));
            }
        });
        rsx! {}
    }

    /// Runs `f` inside a component scope so signals can be created and
    /// written, and returns its result.
    fn in_scope<R: 'static>(f: impl FnOnce() -> R + 'static) -> R {
        TASK.with(|t| *t.borrow_mut() = Some(Box::new(move || Box::new(f()) as Box<dyn Any>)));
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();
        let output = OUTPUT
            .with(|o| o.borrow_mut().take())
            .expect("harness did not run");
        *output.downcast::<R>().expect("unexpected harness output type")
    }

    fn shared(store: &Rc<InMemoryPreferenceStore>) -> Rc<dyn PreferenceStore> {
        store.clone()
    }

    #[test]
    fn test_new_resolves_persisted_state() {
        let store = Rc::new(InMemoryPreferenceStore::with_entries([
            (THEME_KEY, "dark"),
            (CONTRAST_KEY, "high"),
            (LANGUAGE_KEY, "hi"),
            (USER_KEY, r#"{"name":"Asha"}"#),
        ]));
        let handle = shared(&store);

        let (prefs, language, user) = in_scope(move || {
            let ctx = AppContext::new(handle, false);
            let prefs = *ctx.prefs.read();
            let user = ctx.user.read().clone();
            (prefs, ctx.language(), user)
        });

        assert!(prefs.dark);
        assert!(prefs.high_contrast);
        assert_eq!(language, Language::Hi);
        assert_eq!(user, Some(User::new("Asha")));
    }

    #[test]
    fn test_toggles_persist_through_shared_store() {
        let store = Rc::new(InMemoryPreferenceStore::new());
        let handle = shared(&store);

        let prefs = in_scope(move || {
            let ctx = AppContext::new(handle, false);
            ctx.toggle_theme();
            ctx.toggle_contrast();
            let prefs = *ctx.prefs.read();
            prefs
        });

        assert!(prefs.dark);
        assert!(prefs.high_contrast);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(store.get(CONTRAST_KEY).unwrap().as_deref(), Some("high"));
    }

    #[test]
    fn test_theme_toggle_leaves_contrast_alone() {
        let store = Rc::new(InMemoryPreferenceStore::new());
        let handle = shared(&store);

        let prefs = in_scope(move || {
            let ctx = AppContext::new(handle, true);
            ctx.toggle_theme();
            let prefs = *ctx.prefs.read();
            prefs
        });

        assert!(!prefs.dark);
        assert!(!prefs.high_contrast);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(store.get(CONTRAST_KEY).unwrap(), None);
    }

    #[test]
    fn test_select_language_persists_and_closes_menu() {
        let store = Rc::new(InMemoryPreferenceStore::new());
        let handle = shared(&store);

        let (language, menus) = in_scope(move || {
            let ctx = AppContext::new(handle, false);
            let mut menus = HeaderMenus::default();
            menus.toggle_language();
            ctx.select_language(&mut menus, Language::Ta);
            (ctx.language(), menus)
        });

        assert_eq!(language, Language::Ta);
        assert!(!menus.language_open);
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("ta"));
    }

    #[test]
    fn test_log_out_clears_user_and_routes_home() {
        let store = Rc::new(InMemoryPreferenceStore::with_entries([(
            USER_KEY,
            r#"{"name":"Ravi"}"#,
        )]));
        let handle = shared(&store);

        let (before, after, destination, menus) = in_scope(move || {
            let ctx = AppContext::new(handle, false);
            let before = ctx.user.read().clone();
            let mut menus = HeaderMenus::default();
            menus.toggle_user();
            let destination = ctx.log_out(&mut menus);
            let after = ctx.user.read().clone();
            (before, after, destination, menus)
        });

        assert_eq!(before, Some(User::new("Ravi")));
        assert_eq!(after, None);
        assert_eq!(destination, Route::Home {});
        assert!(!menus.user_open);
        assert_eq!(store.get(USER_KEY).unwrap(), None);
    }

    #[test]
    fn test_log_in_sets_user_and_persists() {
        let store = Rc::new(InMemoryPreferenceStore::new());
        let handle = shared(&store);

        let user = in_scope(move || {
            let ctx = AppContext::new(handle, false);
            ctx.log_in(User::new("Meera").with_email("meera@example.com"))
                .unwrap();
            let user = ctx.user.read().clone();
            user
        });

        assert_eq!(user.map(|u| u.name), Some("Meera".to_string()));
        assert!(store.get(USER_KEY).unwrap().is_some());
    }

    #[test]
    fn test_sync_session_picks_up_external_changes() {
        let store = Rc::new(InMemoryPreferenceStore::new());
        let handle = shared(&store);
        let external = shared(&store);

        let (signed_in, signed_out) = in_scope(move || {
            let ctx = AppContext::new(handle, false);
            LocalSession::new(Rc::clone(&external))
                .login(&User::new("Kiran"))
                .unwrap();
            ctx.sync_session();
            let signed_in = ctx.user.read().clone();

            LocalSession::new(external).logout();
            ctx.sync_session();
            let signed_out = ctx.user.read().clone();
            (signed_in, signed_out)
        });

        assert_eq!(signed_in, Some(User::new("Kiran")));
        assert_eq!(signed_out, None);
    }
}
