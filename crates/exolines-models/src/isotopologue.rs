use crate::ModelError;
use exolines_orm::Model;
use serde::{Deserialize, Serialize};

/// A particular isotopologue of a [`Formula`](crate::Formula)
///
/// One isotopologue per formula is expected (the most naturally abundant
/// one), carrying the recommended line-list dataset it was compiled from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Isotopologue {
	/// Formula this isotopologue belongs to
	pub formula_str: String,
	pub iso_formula_str: String,
	pub iso_slug: String,
	pub inchi_key: String,
	pub dataset_name: String,
	pub version: u32,
	pub html: String,
	pub mass: f64,
}

impl Isotopologue {
	#[allow(clippy::too_many_arguments)]
	pub fn new(
		formula_str: impl Into<String>,
		iso_formula_str: impl Into<String>,
		iso_slug: impl Into<String>,
		inchi_key: impl Into<String>,
		dataset_name: impl Into<String>,
		version: u32,
		html: impl Into<String>,
		mass: f64,
	) -> Result<Self, ModelError> {
		let iso_formula_str = iso_formula_str.into();
		if iso_formula_str.is_empty() {
			return Err(ModelError::EmptyField {
				field: "iso_formula_str",
			});
		}
		if mass <= 0.0 {
			return Err(ModelError::InvalidValue {
				field: "mass",
				value: mass.to_string(),
			});
		}
		Ok(Self {
			formula_str: formula_str.into(),
			iso_formula_str,
			iso_slug: iso_slug.into(),
			inchi_key: inchi_key.into(),
			dataset_name: dataset_name.into(),
			version,
			html: html.into(),
			mass,
		})
	}
}

impl Model for Isotopologue {
	fn table_name() -> &'static str {
		"isotopologue"
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_rejects_nonpositive_mass() {
		let err = Isotopologue::new("H2O", "(1H)2(16O)", "1H2-16O", "XLYOFNOQVPJJNP", "POKAZATEL", 20180501, "", 0.0)
			.unwrap_err();
		assert!(matches!(err, ModelError::InvalidValue { field: "mass", .. }));
	}
}
