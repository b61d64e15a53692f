//! HTTP request/response representations for the exolines catalog.
//!
//! Thin wrappers over hyper's types. [`Request`] keeps the raw query pairs
//! in wire order (the data-table protocol encodes nested structures in flat
//! keys, so the parser wants to see the pairs exactly as received) and
//! exposes the XHR transport check used by the AJAX table endpoints.

mod request;
mod response;

pub use request::Request;
pub use response::Response;

use async_trait::async_trait;
use exolines_core::Result;

/// Asynchronous request handler
#[async_trait]
pub trait Handler: Send + Sync {
	async fn handle(&self, request: Request) -> Result<Response>;
}
