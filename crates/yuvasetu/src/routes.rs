//! Route table.
//!
//! Every page renders inside the [`Shell`] layout (header, footer, bottom
//! nav). Anything that matches no route lands on [`NotFound`].

use crate::components::pages::{
    Home, InternshipDetails, Learn, Login, NotFound, Saved, Signup,
};
use crate::components::Shell;
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[route("/saved")]
        Saved {},
        #[route("/learn")]
        Learn {},
        #[route("/details/:id")]
        InternshipDetails { id: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Route for one of the static paths in `yuvasetu_core::config`.
    ///
    /// Unknown paths resolve to [`Route::NotFound`] via the catch-all.
    pub fn from_path(path: &str) -> Route {
        path.parse().unwrap_or_else(|_| Route::NotFound {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}
