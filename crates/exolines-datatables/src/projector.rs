use crate::ColumnSpec;
use exolines_orm::FieldAccess;
use serde_json::Value;
use std::collections::HashMap;

/// Per-field display-value extraction functions
///
/// A getter registered under a field name replaces direct field access for
/// that column: the table endpoints use this to format energies, render
/// lifetimes in scientific notation, and wrap counts in hyperlinks. Fields
/// without a getter fall back to [`FieldAccess::field_value`].
pub struct ValueGetters<M> {
	getters: HashMap<String, Box<dyn Fn(&M) -> Value + Send + Sync>>,
}

impl<M> ValueGetters<M> {
	pub fn new() -> Self {
		Self {
			getters: HashMap::new(),
		}
	}

	/// Register a getter for one field name
	///
	/// # Examples
	///
	/// ```
	/// use exolines_datatables::ValueGetters;
	/// use serde_json::json;
	///
	/// struct State { energy: f64 }
	///
	/// let getters = ValueGetters::new()
	///     .with("energy", |state: &State| json!(format!("{:.3}", state.energy)));
	/// assert!(getters.get("energy").is_some());
	/// ```
	pub fn with(
		mut self,
		field: impl Into<String>,
		getter: impl Fn(&M) -> Value + Send + Sync + 'static,
	) -> Self {
		self.getters.insert(field.into(), Box::new(getter));
		self
	}

	pub fn get(&self, field: &str) -> Option<&(dyn Fn(&M) -> Value + Send + Sync)> {
		self.getters.get(field).map(|b| b.as_ref())
	}
}

impl<M> Default for ValueGetters<M> {
	fn default() -> Self {
		Self::new()
	}
}

/// Map records to display rows, one cell per column in descriptor order
pub fn project<M>(records: &[M], columns: &[ColumnSpec], getters: &ValueGetters<M>) -> Vec<Vec<Value>>
where
	M: FieldAccess,
{
	records
		.iter()
		.map(|record| {
			columns
				.iter()
				.map(|column| match getters.get(&column.name) {
					Some(getter) => getter(record),
					None => record.field_value(&column.name).unwrap_or(Value::Null),
				})
				.collect()
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::SearchSpec;
	use serde_json::json;

	#[derive(Clone)]
	struct State {
		state_str: String,
		energy: f64,
	}

	impl FieldAccess for State {
		fn field_value(&self, name: &str) -> Option<Value> {
			match name {
				"state_str" => Some(json!(self.state_str)),
				"energy" => Some(json!(self.energy)),
				_ => None,
			}
		}
	}

	fn columns(names: &[&str]) -> Vec<ColumnSpec> {
		names
			.iter()
			.enumerate()
			.map(|(i, name)| ColumnSpec {
				data_index: i as i64,
				name: name.to_string(),
				searchable: true,
				orderable: true,
				search: SearchSpec::default(),
			})
			.collect()
	}

	#[test]
	fn test_projection_follows_column_order() {
		// Arrange
		let records = vec![State {
			state_str: "v=0".into(),
			energy: 1.5,
		}];

		// Act
		let rows = project(&records, &columns(&["energy", "state_str"]), &ValueGetters::new());

		// Assert
		assert_eq!(rows, vec![vec![json!(1.5), json!("v=0")]]);
	}

	#[test]
	fn test_getter_overrides_field_access() {
		let records = vec![State {
			state_str: "v=1".into(),
			energy: 2.0,
		}];
		let getters =
			ValueGetters::new().with("energy", |s: &State| json!(format!("{:.3}", s.energy)));

		let rows = project(&records, &columns(&["energy"]), &getters);
		assert_eq!(rows, vec![vec![json!("2.000")]]);
	}

	#[test]
	fn test_unknown_field_projects_null() {
		let records = vec![State {
			state_str: "v=2".into(),
			energy: 3.0,
		}];
		let rows = project(&records, &columns(&["lifetime"]), &ValueGetters::new());
		assert_eq!(rows, vec![vec![Value::Null]]);
	}

	#[test]
	fn test_row_order_preserves_record_order() {
		let records = vec![
			State {
				state_str: "a".into(),
				energy: 1.0,
			},
			State {
				state_str: "b".into(),
				energy: 2.0,
			},
		];
		let rows = project(&records, &columns(&["state_str"]), &ValueGetters::new());
		assert_eq!(rows, vec![vec![json!("a")], vec![json!("b")]]);
	}
}
