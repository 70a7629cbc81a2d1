//! YuvaSetu - web shell for an internship and learning discovery site.
//!
//! This crate is the Dioxus front-end: the application shell, the route
//! table, the header and mobile bottom navigation, and the platform glue for
//! persisted preferences. The logic behind them (preference resolution,
//! active-link rule, menu state, translations, session record) lives in
//! `yuvasetu-core`.
//!
//! # Platform Support
//!
//! - **Web (WASM)**: `localStorage` and the `<html>` class list via `web-sys`
//! - **Desktop**: preferences in a JSON file under the platform data directory

#![forbid(unsafe_code)]

pub mod components;
pub mod platform;
pub mod routes;
