//! Header dropdown state.
//!
//! The header owns two dropdowns, the language menu and the user menu. Each is
//! an independent open/closed flag: toggling one never touches the other, and
//! every navigation-triggering action inside a menu closes that menu.

use crate::config::{HOME_PATH, LOGIN_PATH};
use crate::i18n::{Language, Localization};
use crate::session::{SessionStore, User};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderMenus {
    pub language_open: bool,
    pub user_open: bool,
}

impl HeaderMenus {
    pub fn toggle_language(&mut self) {
        self.language_open = !self.language_open;
    }

    pub fn toggle_user(&mut self) {
        self.user_open = !self.user_open;
    }

    pub fn close_user(&mut self) {
        self.user_open = false;
    }

    /// Switches the active language and closes the language menu.
    pub fn select_language(&mut self, l10n: &mut Localization, language: Language) {
        l10n.set_language(language);
        self.language_open = false;
    }

    /// Signs out, closes the user menu and returns the route to navigate to.
    pub fn log_out<S: SessionStore + ?Sized>(&mut self, session: &S) -> &'static str {
        session.logout();
        self.user_open = false;
        HOME_PATH
    }
}

/// What the session area of the header shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionView {
    /// Signed out: a single link to the login page.
    LoginLink { href: &'static str },
    /// Signed in: the user's name on a button, with the menu open or closed.
    UserMenu { name: String, open: bool },
}

impl SessionView {
    pub fn for_user(user: Option<&User>, menus: HeaderMenus) -> Self {
        match user {
            None => SessionView::LoginLink { href: LOGIN_PATH },
            Some(user) => SessionView::UserMenu {
                name: user.name.clone(),
                open: menus.user_open,
            },
        }
    }
}
