//! # exolines
//!
//! A molecular spectroscopy catalog: validated domain records, an
//! in-memory queryable collection layer, and a server-side query engine
//! speaking the flat key-value protocol used by DataTables-style
//! AJAX tables, wrapped in pages and endpoints served over hyper.
//!
//! ## Feature Flags
//!
//! ### Presets
//!
//! - `minimal` - the query engine and the collection interface only
//! - `standard` - engine plus the web surface (views, routing, models)
//! - `full` (default) - everything, including the hyper server runtime
//!
//! ### Fine-grained Control
//!
//! Each member crate has its own flag: `core`, `http`, `orm`,
//! `datatables`, `models`, `urls`, `views`, `server`.
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use exolines::prelude::*;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(sample_catalog());
//! let router = routes(catalog);
//! serve("127.0.0.1:8000".parse()?, Arc::new(router)).await?;
//! ```

#[cfg(feature = "core")]
pub use exolines_core as core;
#[cfg(feature = "datatables")]
pub use exolines_datatables as datatables;
#[cfg(feature = "http")]
pub use exolines_http as http;
#[cfg(feature = "models")]
pub use exolines_models as models;
#[cfg(feature = "orm")]
pub use exolines_orm as orm;
#[cfg(feature = "server")]
pub use exolines_server as server;
#[cfg(feature = "urls")]
pub use exolines_urls as urls;
#[cfg(feature = "views")]
pub use exolines_views as views;

/// Commonly used items, one import away
pub mod prelude {
	#[cfg(feature = "core")]
	pub use exolines_core::{Error, Result};
	#[cfg(feature = "datatables")]
	pub use exolines_datatables::{DataTableServer, QueryDescriptor, ValueGetters};
	#[cfg(feature = "http")]
	pub use exolines_http::{Handler, Request, Response};
	#[cfg(feature = "models")]
	pub use exolines_models::{
		Catalog, Formula, Isotopologue, Molecule, State, Transition, sample_catalog,
	};
	#[cfg(feature = "orm")]
	pub use exolines_orm::{FieldAccess, Model, OrderBy, Q, QuerySet, SortDirection};
	#[cfg(feature = "server")]
	pub use exolines_server::{HttpServer, Settings, serve};
	#[cfg(feature = "urls")]
	pub use exolines_urls::{Route, Router, UrlReverser, path};
	#[cfg(feature = "views")]
	pub use exolines_views::{
		DetailView, ListView, ServerSideDataTableView, View, app::routes, as_handler,
	};
}
