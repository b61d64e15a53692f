use crate::ModelError;
use exolines_orm::Model;
use serde::{Deserialize, Serialize};

/// A chemical formula of a stateless species, without regard to isotopologues
///
/// `formula_str` is expected to arrive canonicalized from the ingestion
/// pipeline; this constructor only rejects obviously broken input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formula {
	pub formula_str: String,
	pub name: String,
	/// Pre-rendered HTML form (subscripts, charge superscripts)
	pub html: String,
	pub charge: i16,
	pub natoms: i16,
}

impl Formula {
	pub fn new(
		formula_str: impl Into<String>,
		name: impl Into<String>,
		html: impl Into<String>,
		charge: i16,
		natoms: i16,
	) -> Result<Self, ModelError> {
		let formula_str = formula_str.into();
		if formula_str.is_empty() {
			return Err(ModelError::EmptyField {
				field: "formula_str",
			});
		}
		if natoms < 1 {
			return Err(ModelError::InvalidValue {
				field: "natoms",
				value: natoms.to_string(),
			});
		}
		Ok(Self {
			formula_str,
			name: name.into(),
			html: html.into(),
			charge,
			natoms,
		})
	}
}

impl Model for Formula {
	fn table_name() -> &'static str {
		"formula"
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_rejects_empty_formula() {
		let err = Formula::new("", "nothing", "", 0, 1).unwrap_err();
		assert!(matches!(err, ModelError::EmptyField { field: "formula_str" }));
	}

	#[test]
	fn test_new_rejects_atomless_formula() {
		let err = Formula::new("H2O", "Water", "H<sub>2</sub>O", 0, 0).unwrap_err();
		assert!(matches!(err, ModelError::InvalidValue { field: "natoms", .. }));
	}
}
