//! Page and AJAX table views of the catalog.
//!
//! Two layers: generic building blocks ([`ListView`], [`DetailView`],
//! [`ServerSideDataTableView`]) and the concrete wiring in [`app`], which
//! owns the named URL patterns, the display value getters, and the route
//! table over a shared [`Catalog`](exolines_models::Catalog).

pub mod app;
mod base;
mod generic;
mod tables;

pub use base::{View, ViewHandler, as_handler, render};
pub use generic::{DetailView, ListView};
pub use tables::ServerSideDataTableView;
