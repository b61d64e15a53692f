//! Runtime pieces of the catalog: the hyper-backed HTTP server and the
//! environment-driven settings it boots with.

mod http;
mod settings;

pub use http::{BoundServer, HttpServer, serve};
pub use settings::Settings;
