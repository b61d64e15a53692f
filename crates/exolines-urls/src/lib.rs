//! URL routing for the catalog's page and AJAX endpoints.
//!
//! Routes are path patterns with `{param}` segments dispatching to a
//! [`Handler`]; named routes can be reversed back into URLs, which is how
//! the table value getters build hyperlinks without hard-coding paths.

mod reverse;
mod route;
mod router;

pub use reverse::UrlReverser;
pub use route::{Route, path};
pub use router::Router;
