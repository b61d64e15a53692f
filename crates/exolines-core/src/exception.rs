//! Error taxonomy for the catalog.
//!
//! The four query-engine variants (`UnexpectedRequestType`,
//! `MissingParameter`, `InvalidParameter`, `UnsupportedFeature`,
//! `InvalidColumnReference`) are terminal for the current request and are
//! reported to the caller inside an otherwise well-formed reply envelope;
//! the HTTP status stays 200 for those. The remaining variants cover the
//! ambient web surface.

use thiserror::Error;

/// Result alias used throughout the workspace
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the exolines workspace
#[derive(Debug, Error)]
pub enum Error {
	/// The request did not satisfy the transport precondition
	/// (table endpoints only accept XHR-tagged requests)
	#[error("ERROR: Unknown request type, expected AJAX request!")]
	UnexpectedRequestType,

	/// A required request parameter was absent
	#[error("ERROR: Missing request parameter '{0}'!")]
	MissingParameter(String),

	/// A request parameter was present but could not be decoded
	#[error("ERROR: Invalid value '{value}' for request parameter '{name}'!")]
	InvalidParameter { name: String, value: String },

	/// The client asked for a feature the engine does not implement
	#[error("ERROR: {0} is not supported!")]
	UnsupportedFeature(String),

	/// An ordering entry referenced a column index with no matching column
	#[error("ERROR: Ordering references unknown column index {0}!")]
	InvalidColumnReference(i64),

	/// Generic HTTP-level failure
	#[error("HTTP error: {0}")]
	Http(String),

	/// Template rendering failure
	#[error("Template error: {0}")]
	Template(String),

	/// A requested object does not exist
	#[error("Not found: {0}")]
	NotFound(String),
}

impl Error {
	/// Returns true for errors that belong in the data-table error envelope
	/// rather than an HTTP error status.
	pub fn is_payload_error(&self) -> bool {
		matches!(
			self,
			Error::UnexpectedRequestType
				| Error::MissingParameter(_)
				| Error::InvalidParameter { .. }
				| Error::UnsupportedFeature(_)
				| Error::InvalidColumnReference(_)
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_payload_errors_are_classified() {
		assert!(Error::UnexpectedRequestType.is_payload_error());
		assert!(Error::MissingParameter("length".into()).is_payload_error());
		assert!(Error::UnsupportedFeature("Regex search".into()).is_payload_error());
		assert!(Error::InvalidColumnReference(7).is_payload_error());
		assert!(!Error::Http("boom".into()).is_payload_error());
		assert!(!Error::NotFound("molecule 'XYZ'".into()).is_payload_error());
	}

	#[test]
	fn test_messages_are_stable() {
		assert_eq!(
			Error::UnexpectedRequestType.to_string(),
			"ERROR: Unknown request type, expected AJAX request!"
		);
		assert_eq!(
			Error::UnsupportedFeature("Regex search".into()).to_string(),
			"ERROR: Regex search is not supported!"
		);
		assert_eq!(
			Error::MissingParameter("length".into()).to_string(),
			"ERROR: Missing request parameter 'length'!"
		);
	}
}
