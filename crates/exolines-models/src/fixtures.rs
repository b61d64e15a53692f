use crate::{Catalog, Formula, Isotopologue, Molecule, State, Transition};

/// A small seeded catalog used by the demo server and the view tests
///
/// Two diatomics with a handful of electronic-vibrational levels each.
/// Lifetimes and branching ratios are round demo numbers, not line-list
/// physics.
pub fn sample_catalog() -> Catalog {
	let formulas = vec![
		Formula {
			formula_str: "AlH".into(),
			name: "Aluminium monohydride".into(),
			html: "AlH".into(),
			charge: 0,
			natoms: 2,
		},
		Formula {
			formula_str: "MgH".into(),
			name: "Magnesium monohydride".into(),
			html: "MgH".into(),
			charge: 0,
			natoms: 2,
		},
	];

	let isotopologues = vec![
		Isotopologue {
			formula_str: "AlH".into(),
			iso_formula_str: "(27Al)(1H)".into(),
			iso_slug: "27Al-1H".into(),
			inchi_key: "AZDRQVAHHNSJOQ-UHFFFAOYSA-N".into(),
			dataset_name: "AlHambra".into(),
			version: 20180801,
			html: "<sup>27</sup>Al<sup>1</sup>H".into(),
			mass: 27.989_48,
		},
		Isotopologue {
			formula_str: "MgH".into(),
			iso_formula_str: "(24Mg)(1H)".into(),
			iso_slug: "24Mg-1H".into(),
			inchi_key: "QZLJNVMRJXHARQ-UHFFFAOYSA-N".into(),
			dataset_name: "XAB".into(),
			version: 20220302,
			html: "<sup>24</sup>Mg<sup>1</sup>H".into(),
			mass: 24.992_87,
		},
	];

	let molecules = vec![
		Molecule {
			slug: "AlH".into(),
			formula_str: "AlH".into(),
			name: "Aluminium monohydride".into(),
			html: "AlH".into(),
			mass: 27.989_48,
			number_states: 3,
			number_transitions: 2,
		},
		Molecule {
			slug: "MgH".into(),
			formula_str: "MgH".into(),
			name: "Magnesium monohydride".into(),
			html: "MgH".into(),
			mass: 24.992_87,
			number_states: 2,
			number_transitions: 1,
		},
	];

	let states = vec![
		State {
			pk: 1,
			molecule_slug: "AlH".into(),
			state_str: "X(1SIGMA+);v=0".into(),
			html: "X<sup>1</sup>Σ<sup>+</sup>; v=0".into(),
			energy: 0.0,
			lifetime: None,
			number_transitions_from: 0,
			number_transitions_to: 2,
		},
		State {
			pk: 2,
			molecule_slug: "AlH".into(),
			state_str: "X(1SIGMA+);v=1".into(),
			html: "X<sup>1</sup>Σ<sup>+</sup>; v=1".into(),
			energy: 0.205,
			lifetime: Some(2.8e-3),
			number_transitions_from: 1,
			number_transitions_to: 1,
		},
		State {
			pk: 3,
			molecule_slug: "AlH".into(),
			state_str: "A(1PI);v=0".into(),
			html: "A<sup>1</sup>Π; v=0".into(),
			energy: 2.919,
			lifetime: Some(6.6e-8),
			number_transitions_from: 2,
			number_transitions_to: 0,
		},
		State {
			pk: 4,
			molecule_slug: "MgH".into(),
			state_str: "X(2SIGMA+);v=0".into(),
			html: "X<sup>2</sup>Σ<sup>+</sup>; v=0".into(),
			energy: 0.0,
			lifetime: None,
			number_transitions_from: 0,
			number_transitions_to: 1,
		},
		State {
			pk: 5,
			molecule_slug: "MgH".into(),
			state_str: "A(2PI);v=0".into(),
			html: "A<sup>2</sup>Π; v=0".into(),
			energy: 2.397,
			lifetime: Some(4.6e-8),
			number_transitions_from: 1,
			number_transitions_to: 0,
		},
	];

	let transitions = vec![
		Transition {
			pk: 1,
			molecule_slug: "AlH".into(),
			state_from_pk: 3,
			state_to_pk: 1,
			state_from_html: "A<sup>1</sup>Π; v=0".into(),
			state_to_html: "X<sup>1</sup>Σ<sup>+</sup>; v=0".into(),
			partial_lifetime: 7.4e-8,
			branching_ratio: 0.89,
			wavelength: 424.7,
		},
		Transition {
			pk: 2,
			molecule_slug: "AlH".into(),
			state_from_pk: 3,
			state_to_pk: 2,
			state_from_html: "A<sup>1</sup>Π; v=0".into(),
			state_to_html: "X<sup>1</sup>Σ<sup>+</sup>; v=1".into(),
			partial_lifetime: 6.0e-7,
			branching_ratio: 0.11,
			wavelength: 456.8,
		},
		Transition {
			pk: 3,
			molecule_slug: "MgH".into(),
			state_from_pk: 5,
			state_to_pk: 4,
			state_from_html: "A<sup>2</sup>Π; v=0".into(),
			state_to_html: "X<sup>2</sup>Σ<sup>+</sup>; v=0".into(),
			partial_lifetime: 4.6e-8,
			branching_ratio: 1.0,
			wavelength: 517.3,
		},
	];

	Catalog {
		formulas,
		isotopologues,
		molecules,
		states,
		transitions,
	}
}
