//! One component per route. Page bodies are intentionally thin: the listing
//! data source and the auth backend live outside this application.

mod auth;
mod content;
mod details;
mod not_found;

pub use auth::{Login, Signup};
pub use content::{Home, Learn, Saved};
pub use details::InternshipDetails;
pub use not_found::NotFound;
