//! Core types shared across the exolines workspace.
//!
//! The only module here is [`exception`], which defines the error taxonomy
//! used by the data-table query engine and the surrounding web plumbing.

pub mod exception;

pub use exception::{Error, Result};
