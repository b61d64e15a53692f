//! Queryable collection interface for the exolines catalog.
//!
//! The data-table engine only asks five things of a backing store: count,
//! filter, order_by, slice, and iterate. [`QuerySet`] provides those five
//! operations over an in-memory collection of records; filters are
//! [`Q`] expression trees (substring containment combined with AND/OR), and
//! ordering is a multi-key sort over [`FieldAccess`] values.

mod model;
mod ordering;
mod q;
mod queryset;

pub use model::{FieldAccess, Model};
pub use ordering::{OrderBy, SortDirection};
pub use q::Q;
pub use queryset::QuerySet;
