use crate::FieldAccess;

/// Filter expression tree
///
/// Leaves are case-preserving substring-containment tests on a named field;
/// branches combine sub-expressions with AND/OR. This mirrors the query
/// shape the data-table engine builds: one OR group for the global search,
/// one AND group for the per-column searches.
#[derive(Debug, Clone, PartialEq)]
pub enum Q {
	/// Substring containment on a field's text rendering
	Contains { field: String, value: String },
	/// All sub-expressions must match
	And(Vec<Q>),
	/// At least one sub-expression must match
	Or(Vec<Q>),
}

impl Q {
	/// Containment leaf
	///
	/// # Examples
	///
	/// ```
	/// use exolines_orm::Q;
	///
	/// let q = Q::contains("formula_str", "H2");
	/// assert_eq!(q, Q::Contains { field: "formula_str".into(), value: "H2".into() });
	/// ```
	pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
		Q::Contains {
			field: field.into(),
			value: value.into(),
		}
	}

	/// OR-combine a non-empty list of expressions
	pub fn any(mut exprs: Vec<Q>) -> Self {
		if exprs.len() == 1 {
			exprs.remove(0)
		} else {
			Q::Or(exprs)
		}
	}

	/// AND-combine a non-empty list of expressions
	pub fn all(mut exprs: Vec<Q>) -> Self {
		if exprs.len() == 1 {
			exprs.remove(0)
		} else {
			Q::And(exprs)
		}
	}

	/// Evaluate the expression against one record
	pub fn matches(&self, record: &dyn FieldAccess) -> bool {
		match self {
			Q::Contains { field, value } => record.field_text(field).contains(value.as_str()),
			Q::And(exprs) => exprs.iter().all(|q| q.matches(record)),
			Q::Or(exprs) => exprs.iter().any(|q| q.matches(record)),
		}
	}
}
