//! Server-side query engine for DataTables-style AJAX table requests.
//!
//! One request flows through four stages:
//!
//! 1. [`QueryDescriptor::parse`] decodes the flat key-value wire encoding
//!    (`draw`, `start`, `length`, `search[...]`, `order[i][...]`,
//!    `columns[i][...]`) into a typed descriptor, rejecting unsupported
//!    regex searches and incomplete index groups.
//! 2. [`apply`](builder::apply) turns the descriptor into filter, sort, and
//!    slice operations on a [`QuerySet`](exolines_orm::QuerySet) and takes
//!    the total/filtered counts.
//! 3. [`project`](projector::project) maps each record to an ordered row of
//!    display values, going through registered [`ValueGetters`] or falling
//!    back to generic field access.
//! 4. [`DataTableServer::serve`] packages the draw echo, counts, and rows
//!    into the fixed reply shape, or an `{"error": ...}` payload if any
//!    stage failed. Errors never escape the envelope.
//!
//! Nothing here persists across requests; a descriptor is built, used
//! read-only, and dropped with the response.

mod builder;
mod descriptor;
mod projector;
mod server;

pub use builder::{AppliedQuery, apply};
pub use descriptor::{ColumnSpec, OrderClause, QueryDescriptor, SearchSpec};
pub use projector::{ValueGetters, project};
pub use server::DataTableServer;
