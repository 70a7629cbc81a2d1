//! # YuvaSetu Core
//!
//! Platform-independent logic behind the YuvaSetu web shell.
//!
//! This crate holds everything the UI decides without touching the DOM, so it
//! can be tested natively and reused by any front-end.
//!
//! ## Modules
//!
//! - [`preferences`] - Dark-mode / high-contrast flags: resolution and toggles
//! - [`presentation`] - Reflecting the flags as document-root markers
//! - [`storage`] - Key-value store trait and in-memory implementation
//! - [`nav`] - Primary destinations and the active-link rule
//! - [`menus`] - Header dropdown state and session-area view
//! - [`i18n`] - Supported languages and the translation catalog
//! - [`session`] - Signed-in user record
//! - [`config`] - Storage keys, marker names and route paths
//! - [`error`] - Error types

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod i18n;
pub mod menus;
pub mod nav;
pub mod preferences;
pub mod presentation;
pub mod session;
pub mod storage;

pub use error::{ParseError, StoreError};
pub use i18n::{Language, Localization};
pub use preferences::UiPreferences;
pub use session::{LocalSession, SessionStore, User};
pub use storage::{InMemoryPreferenceStore, PreferenceStore};
