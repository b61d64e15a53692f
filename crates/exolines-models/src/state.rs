use crate::ModelError;
use exolines_orm::Model;
use serde::{Deserialize, Serialize};

/// One quantum state of a molecule's isotopologue
///
/// `lifetime` is the derived radiative lifetime in seconds; `None` marks a
/// state with no depopulating transitions (displayed as infinite).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
	pub pk: i64,
	pub molecule_slug: String,
	pub state_str: String,
	pub html: String,
	/// Term energy in eV
	pub energy: f64,
	pub lifetime: Option<f64>,
	pub number_transitions_from: u32,
	pub number_transitions_to: u32,
}

impl State {
	#[allow(clippy::too_many_arguments)]
	pub fn new(
		pk: i64,
		molecule_slug: impl Into<String>,
		state_str: impl Into<String>,
		html: impl Into<String>,
		energy: f64,
		lifetime: Option<f64>,
		number_transitions_from: u32,
		number_transitions_to: u32,
	) -> Result<Self, ModelError> {
		let state_str = state_str.into();
		if state_str.is_empty() {
			return Err(ModelError::EmptyField { field: "state_str" });
		}
		if let Some(lifetime) = lifetime
			&& lifetime <= 0.0
		{
			return Err(ModelError::InvalidValue {
				field: "lifetime",
				value: lifetime.to_string(),
			});
		}
		Ok(Self {
			pk,
			molecule_slug: molecule_slug.into(),
			state_str,
			html: html.into(),
			energy,
			lifetime,
			number_transitions_from,
			number_transitions_to,
		})
	}
}

impl Model for State {
	fn table_name() -> &'static str {
		"state"
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use exolines_orm::FieldAccess;

	#[test]
	fn test_new_rejects_nonpositive_lifetime() {
		let err = State::new(1, "AlH", "X(1SIGMA+);v=0", "", 0.0, Some(-1.0), 0, 0).unwrap_err();
		assert!(matches!(err, ModelError::InvalidValue { field: "lifetime", .. }));
	}

	#[test]
	fn test_infinite_lifetime_renders_as_empty_text() {
		// Null field text is the hook the ∞ value getter builds on
		let state = State::new(1, "AlH", "X(1SIGMA+);v=0", "", 0.0, None, 0, 4).unwrap();
		assert_eq!(state.field_text("lifetime"), "");
	}
}
