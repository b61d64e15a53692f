//! Domain records of the catalog.
//!
//! Plain serde structs implementing the ORM's [`Model`] and [`FieldAccess`]
//! traits. Chemistry itself (formula canonicalization, state-string
//! parsing) lives outside this crate; the constructors here only validate
//! that the caller handed over canonical-looking input, and the derived
//! display fields (`html`, formatted lifetimes) are computed at
//! construction so records stay immutable for the request lifetime.

mod fixtures;
mod formula;
mod isotopologue;
mod molecule;
mod state;
mod transition;

pub use fixtures::sample_catalog;
pub use formula::Formula;
pub use isotopologue::Isotopologue;
pub use molecule::Molecule;
pub use state::State;
pub use transition::Transition;

use exolines_orm::FieldAccess;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Validation failures raised by record constructors
#[derive(Debug, Error)]
pub enum ModelError {
	#[error("field '{field}' must not be empty")]
	EmptyField { field: &'static str },

	#[error("'{value}' is not a valid {field}")]
	InvalidValue { field: &'static str, value: String },
}

/// Field access through the record's serde representation
///
/// All catalog records are flat structs, so one serialization covers every
/// field the table engine can ask for.
fn serialized_field<T: Serialize>(record: &T, name: &str) -> Option<Value> {
	serde_json::to_value(record).ok()?.get(name).cloned()
}

/// Shared bundle of all seeded collections, handed to the views
pub struct Catalog {
	pub formulas: Vec<Formula>,
	pub isotopologues: Vec<Isotopologue>,
	pub molecules: Vec<Molecule>,
	pub states: Vec<State>,
	pub transitions: Vec<Transition>,
}

impl Catalog {
	/// The formula record behind one molecule's `formula_str`
	pub fn formula_of(&self, formula_str: &str) -> Option<&Formula> {
		self.formulas.iter().find(|f| f.formula_str == formula_str)
	}

	/// The isotopologue compiled for one formula (one per formula, the
	/// most abundant)
	pub fn isotopologue_of(&self, formula_str: &str) -> Option<&Isotopologue> {
		self.isotopologues
			.iter()
			.find(|i| i.formula_str == formula_str)
	}

	/// States belonging to one molecule, in stored order
	pub fn states_of(&self, mol_slug: &str) -> Vec<State> {
		self.states
			.iter()
			.filter(|s| s.molecule_slug == mol_slug)
			.cloned()
			.collect()
	}

	/// Transitions belonging to one molecule, in stored order
	pub fn transitions_of(&self, mol_slug: &str) -> Vec<Transition> {
		self.transitions
			.iter()
			.filter(|t| t.molecule_slug == mol_slug)
			.cloned()
			.collect()
	}
}

macro_rules! impl_field_access {
	($ty:ty) => {
		impl FieldAccess for $ty {
			fn field_value(&self, name: &str) -> Option<Value> {
				crate::serialized_field(self, name)
			}
		}
	};
}

impl_field_access!(Formula);
impl_field_access!(Isotopologue);
impl_field_access!(Molecule);
impl_field_access!(State);
impl_field_access!(Transition);
