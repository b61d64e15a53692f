use crate::ModelError;
use exolines_orm::Model;
use serde::{Deserialize, Serialize};

/// List-page aggregate of one molecule
///
/// Counts are derived when the catalog is loaded; a record never changes
/// during a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Molecule {
	/// URL-safe identifier
	pub slug: String,
	pub formula_str: String,
	pub name: String,
	pub html: String,
	pub mass: f64,
	pub number_states: u32,
	pub number_transitions: u32,
}

impl Molecule {
	pub fn new(
		slug: impl Into<String>,
		formula_str: impl Into<String>,
		name: impl Into<String>,
		html: impl Into<String>,
		mass: f64,
	) -> Result<Self, ModelError> {
		let slug = slug.into();
		if slug.is_empty() {
			return Err(ModelError::EmptyField { field: "slug" });
		}
		if !slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
			return Err(ModelError::InvalidValue {
				field: "slug",
				value: slug,
			});
		}
		Ok(Self {
			slug,
			formula_str: formula_str.into(),
			name: name.into(),
			html: html.into(),
			mass,
			number_states: 0,
			number_transitions: 0,
		})
	}

	pub fn with_counts(mut self, number_states: u32, number_transitions: u32) -> Self {
		self.number_states = number_states;
		self.number_transitions = number_transitions;
		self
	}
}

impl Model for Molecule {
	fn table_name() -> &'static str {
		"molecule"
	}
}
