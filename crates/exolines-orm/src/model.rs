use serde_json::Value;

/// Trait for records stored in the catalog
pub trait Model: Clone + Send + Sync {
	/// Name of the backing table/collection
	fn table_name() -> &'static str;
}

/// Generic field access by name
///
/// The query engine filters, sorts, and projects through field names taken
/// off the wire, so records expose their fields dynamically as JSON values.
/// `None` means the record has no field with that name; a present-but-empty
/// field is `Value::Null`.
pub trait FieldAccess {
	fn field_value(&self, name: &str) -> Option<Value>;

	/// Render a field for substring matching and display fallback
	///
	/// Strings render as-is (no quotes), `Null` as the empty string, other
	/// values through their JSON form.
	fn field_text(&self, name: &str) -> String {
		match self.field_value(name) {
			Some(Value::String(s)) => s,
			Some(Value::Null) | None => String::new(),
			Some(other) => other.to_string(),
		}
	}
}
