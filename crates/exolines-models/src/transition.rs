use crate::ModelError;
use exolines_orm::Model;
use serde::{Deserialize, Serialize};

/// One radiative transition between two states of a molecule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transition {
	pub pk: i64,
	pub molecule_slug: String,
	/// Primary key of the depopulated (upper) state
	pub state_from_pk: i64,
	/// Primary key of the populated (lower) state
	pub state_to_pk: i64,
	pub state_from_html: String,
	pub state_to_html: String,
	/// Partial lifetime of the upper state through this channel, in seconds
	pub partial_lifetime: f64,
	pub branching_ratio: f64,
	/// Vacuum wavelength in nm
	pub wavelength: f64,
}

impl Transition {
	#[allow(clippy::too_many_arguments)]
	pub fn new(
		pk: i64,
		molecule_slug: impl Into<String>,
		state_from_pk: i64,
		state_to_pk: i64,
		state_from_html: impl Into<String>,
		state_to_html: impl Into<String>,
		partial_lifetime: f64,
		branching_ratio: f64,
		wavelength: f64,
	) -> Result<Self, ModelError> {
		if !(0.0..=1.0).contains(&branching_ratio) {
			return Err(ModelError::InvalidValue {
				field: "branching_ratio",
				value: branching_ratio.to_string(),
			});
		}
		if partial_lifetime <= 0.0 {
			return Err(ModelError::InvalidValue {
				field: "partial_lifetime",
				value: partial_lifetime.to_string(),
			});
		}
		Ok(Self {
			pk,
			molecule_slug: molecule_slug.into(),
			state_from_pk,
			state_to_pk,
			state_from_html: state_from_html.into(),
			state_to_html: state_to_html.into(),
			partial_lifetime,
			branching_ratio,
			wavelength,
		})
	}
}

impl Model for Transition {
	fn table_name() -> &'static str {
		"transition"
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_branching_ratio_outside_unit_interval_is_rejected() {
		let err = Transition::new(1, "AlH", 2, 1, "", "", 1e-8, 1.5, 425.0).unwrap_err();
		assert!(matches!(
			err,
			ModelError::InvalidValue { field: "branching_ratio", .. }
		));
	}
}
