//! Concrete catalog endpoints and their route table.
//!
//! Pages are plain template renders; every table body is fetched through
//! a matching `/ajax/` endpoint. Value getters mirror what the pages
//! display: energies to three decimals, lifetimes in scientific notation
//! (infinite for states with no depopulating channel), and transition
//! counts wrapped in hyperlinks to the per-state transition pages.

use crate::base::as_handler;
use crate::generic::{DetailView, ListView};
use crate::tables::ServerSideDataTableView;
use exolines_datatables::ValueGetters;
use exolines_models::{Catalog, Molecule, State, Transition};
use exolines_orm::QuerySet;
use exolines_urls::{Router, UrlReverser, path};
use serde_json::json;
use std::sync::Arc;
use tera::Context;

/// CSS class carried by every generated hyperlink cell
const LINK_CLASS: &str = "exolines-link";

/// Named URL patterns, shared by the route table and the reverser
pub mod urls {
	pub const MOLECULE_LIST: (&str, &str) = ("molecule-list", "/molecule/");
	pub const MOLECULE_DETAIL: (&str, &str) = ("molecule-detail", "/molecule/{slug}/");
	pub const STATE_LIST: (&str, &str) = ("state-list", "/molecule/{slug}/states/");
	pub const TRANSITION_LIST: (&str, &str) = ("transition-list", "/molecule/{slug}/transitions/");
	pub const TRANSITION_LIST_FROM_STATE: (&str, &str) =
		("transition-list-from-state", "/state/{pk}/transitions-from/");
	pub const TRANSITION_LIST_TO_STATE: (&str, &str) =
		("transition-list-to-state", "/state/{pk}/transitions-to/");

	pub const MOLECULE_LIST_AJAX: (&str, &str) = ("molecule-list-ajax", "/ajax/molecule/");
	pub const STATE_LIST_AJAX: (&str, &str) = ("state-list-ajax", "/ajax/molecule/{slug}/states/");
	pub const TRANSITION_LIST_AJAX: (&str, &str) =
		("transition-list-ajax", "/ajax/molecule/{slug}/transitions/");
	pub const TRANSITION_LIST_FROM_STATE_AJAX: (&str, &str) =
		("transition-list-from-state-ajax", "/ajax/state/{pk}/transitions-from/");
	pub const TRANSITION_LIST_TO_STATE_AJAX: (&str, &str) =
		("transition-list-to-state-ajax", "/ajax/state/{pk}/transitions-to/");

	pub const ALL: &[(&str, &str)] = &[
		MOLECULE_LIST,
		MOLECULE_DETAIL,
		STATE_LIST,
		TRANSITION_LIST,
		TRANSITION_LIST_FROM_STATE,
		TRANSITION_LIST_TO_STATE,
		MOLECULE_LIST_AJAX,
		STATE_LIST_AJAX,
		TRANSITION_LIST_AJAX,
		TRANSITION_LIST_FROM_STATE_AJAX,
		TRANSITION_LIST_TO_STATE_AJAX,
	];
}

/// Reverser over every named catalog URL
pub fn url_reverser() -> UrlReverser {
	let mut reverser = UrlReverser::new();
	for (name, pattern) in urls::ALL {
		reverser.register(*name, *pattern);
	}
	reverser
}

/// Count cell rendered as a hyperlink, or empty for zero
fn linked_count(reverser: &UrlReverser, route: &str, pk: i64, count: u32) -> String {
	if count == 0 {
		return String::new();
	}
	let pk = pk.to_string();
	match reverser.reverse_with(route, &[("pk", pk.as_str())]) {
		Ok(href) => format!(r#"<a href="{href}" class="{LINK_CLASS}">{count}</a>"#),
		Err(error) => {
			tracing::warn!(%error, route, "hyperlink reversal failed, rendering bare count");
			count.to_string()
		}
	}
}

fn molecule_value_getters(reverser: Arc<UrlReverser>) -> ValueGetters<Molecule> {
	let detail = reverser;
	ValueGetters::new()
		.with("html", move |m: &Molecule| {
			match detail.reverse_with(urls::MOLECULE_DETAIL.0, &[("slug", m.slug.as_str())]) {
				Ok(href) => json!(format!(
					r#"<a href="{href}" class="{LINK_CLASS}">{}</a>"#,
					m.html
				)),
				Err(_) => json!(m.html),
			}
		})
		.with("mass", |m: &Molecule| json!(format!("{:.6}", m.mass)))
}

fn state_value_getters(reverser: Arc<UrlReverser>) -> ValueGetters<State> {
	let from = Arc::clone(&reverser);
	let to = reverser;
	ValueGetters::new()
		.with("energy", |s: &State| json!(format!("{:.3}", s.energy)))
		.with("lifetime", |s: &State| match s.lifetime {
			Some(lifetime) => json!(format!("{lifetime:.2e}")),
			None => json!("∞"),
		})
		.with("number_transitions_from", move |s: &State| {
			json!(linked_count(
				&from,
				urls::TRANSITION_LIST_FROM_STATE.0,
				s.pk,
				s.number_transitions_from
			))
		})
		.with("number_transitions_to", move |s: &State| {
			json!(linked_count(
				&to,
				urls::TRANSITION_LIST_TO_STATE.0,
				s.pk,
				s.number_transitions_to
			))
		})
}

fn transition_value_getters() -> ValueGetters<Transition> {
	ValueGetters::new()
		.with("partial_lifetime", |t: &Transition| {
			json!(format!("{:.2e}", t.partial_lifetime))
		})
		.with("branching_ratio", |t: &Transition| {
			json!(format!("{:.3}", t.branching_ratio))
		})
		.with("wavelength", |t: &Transition| json!(format!("{:.2}", t.wavelength)))
}

fn parse_pk(raw: &str) -> Option<i64> {
	raw.parse().ok()
}

/// Build the full route table over a shared catalog
pub fn routes(catalog: Arc<Catalog>) -> Router {
	let reverser = Arc::new(url_reverser());
	let mut router = Router::new();

	// pages
	{
		let ajax_url = reverser
			.reverse_with::<&str>(urls::MOLECULE_LIST_AJAX.0, &[])
			.unwrap_or_else(|_| urls::MOLECULE_LIST_AJAX.1.to_string());
		let view = ListView::new("molecule_list.html", catalog.molecules.clone())
			.extra("title", "Molecules")
			.extra("table_heading", "Molecules")
			.extra("datatable_class", "molecule-table")
			.extra("ajax_url", ajax_url);
		router.add_route(
			path(urls::MOLECULE_LIST.1, as_handler(view)).with_name(urls::MOLECULE_LIST.0),
		);
	}
	{
		let molecules = catalog.molecules.clone();
		let lookup = Arc::clone(&catalog);
		let extra_reverser = Arc::clone(&reverser);
		let view = DetailView::new("molecule_detail.html", "slug", move |slug| {
			molecules.iter().find(|m| m.slug == slug).cloned()
		})
		.with_context_object_name("molecule")
		.with_extra_context(move |m: &Molecule| {
			let mut context = Context::new();
			context.insert("title", &m.name);
			if let Some(formula) = lookup.formula_of(&m.formula_str) {
				context.insert("formula", formula);
			}
			if let Some(isotopologue) = lookup.isotopologue_of(&m.formula_str) {
				context.insert("isotopologue", isotopologue);
			}
			let params = [("slug", m.slug.as_str())];
			if let Ok(url) = extra_reverser.reverse_with(urls::STATE_LIST.0, &params) {
				context.insert("states_url", &url);
			}
			if let Ok(url) = extra_reverser.reverse_with(urls::TRANSITION_LIST.0, &params) {
				context.insert("transitions_url", &url);
			}
			context
		});
		router.add_route(
			path(urls::MOLECULE_DETAIL.1, as_handler(view)).with_name(urls::MOLECULE_DETAIL.0),
		);
	}
	{
		let molecules = catalog.molecules.clone();
		let extra_reverser = Arc::clone(&reverser);
		let view = DetailView::new("state_list.html", "slug", move |slug| {
			molecules.iter().find(|m| m.slug == slug).cloned()
		})
		.with_context_object_name("molecule")
		.with_extra_context(move |m: &Molecule| {
			scoped_table_context(
				&extra_reverser,
				format!("States of {}", m.name),
				"state-table",
				urls::STATE_LIST_AJAX.0,
				&m.slug,
			)
		});
		router.add_route(path(urls::STATE_LIST.1, as_handler(view)).with_name(urls::STATE_LIST.0));
	}
	{
		let molecules = catalog.molecules.clone();
		let extra_reverser = Arc::clone(&reverser);
		let view = DetailView::new("transition_list.html", "slug", move |slug| {
			molecules.iter().find(|m| m.slug == slug).cloned()
		})
		.with_context_object_name("molecule")
		.with_extra_context(move |m: &Molecule| {
			scoped_table_context(
				&extra_reverser,
				format!("Transitions of {}", m.name),
				"transition-table",
				urls::TRANSITION_LIST_AJAX.0,
				&m.slug,
			)
		});
		router.add_route(
			path(urls::TRANSITION_LIST.1, as_handler(view)).with_name(urls::TRANSITION_LIST.0),
		);
	}
	{
		let states = catalog.states.clone();
		let extra_reverser = Arc::clone(&reverser);
		let view = DetailView::new("transition_list.html", "pk", move |raw| {
			let pk = parse_pk(raw)?;
			states.iter().find(|s| s.pk == pk).cloned()
		})
		.with_context_object_name("state")
		.with_extra_context(move |s: &State| {
			state_table_context(
				&extra_reverser,
				format!("Transitions from {}", s.state_str),
				urls::TRANSITION_LIST_FROM_STATE_AJAX.0,
				s.pk,
			)
		});
		router.add_route(
			path(urls::TRANSITION_LIST_FROM_STATE.1, as_handler(view))
				.with_name(urls::TRANSITION_LIST_FROM_STATE.0),
		);
	}
	{
		let states = catalog.states.clone();
		let extra_reverser = Arc::clone(&reverser);
		let view = DetailView::new("transition_list.html", "pk", move |raw| {
			let pk = parse_pk(raw)?;
			states.iter().find(|s| s.pk == pk).cloned()
		})
		.with_context_object_name("state")
		.with_extra_context(move |s: &State| {
			state_table_context(
				&extra_reverser,
				format!("Transitions to {}", s.state_str),
				urls::TRANSITION_LIST_TO_STATE_AJAX.0,
				s.pk,
			)
		});
		router.add_route(
			path(urls::TRANSITION_LIST_TO_STATE.1, as_handler(view))
				.with_name(urls::TRANSITION_LIST_TO_STATE.0),
		);
	}

	// AJAX tables
	{
		let molecules = catalog.molecules.clone();
		let view = ServerSideDataTableView::new(
			molecule_value_getters(Arc::clone(&reverser)),
			move |_request| QuerySet::from_records(molecules.clone()),
		);
		router.add_route(
			path(urls::MOLECULE_LIST_AJAX.1, as_handler(view))
				.with_name(urls::MOLECULE_LIST_AJAX.0),
		);
	}
	{
		let scoped = Arc::clone(&catalog);
		let view = ServerSideDataTableView::new(
			state_value_getters(Arc::clone(&reverser)),
			move |request| {
				let slug = request.path_param("slug").unwrap_or("");
				QuerySet::from_records(scoped.states_of(slug))
			},
		);
		router.add_route(
			path(urls::STATE_LIST_AJAX.1, as_handler(view)).with_name(urls::STATE_LIST_AJAX.0),
		);
	}
	{
		let scoped = Arc::clone(&catalog);
		let view = ServerSideDataTableView::new(transition_value_getters(), move |request| {
			let slug = request.path_param("slug").unwrap_or("");
			QuerySet::from_records(scoped.transitions_of(slug))
		});
		router.add_route(
			path(urls::TRANSITION_LIST_AJAX.1, as_handler(view))
				.with_name(urls::TRANSITION_LIST_AJAX.0),
		);
	}
	{
		let scoped = Arc::clone(&catalog);
		let view = ServerSideDataTableView::new(transition_value_getters(), move |request| {
			let pk = request.path_param("pk").and_then(parse_pk);
			let records = scoped
				.transitions
				.iter()
				.filter(|t| Some(t.state_from_pk) == pk)
				.cloned()
				.collect();
			QuerySet::from_records(records)
		});
		router.add_route(
			path(urls::TRANSITION_LIST_FROM_STATE_AJAX.1, as_handler(view))
				.with_name(urls::TRANSITION_LIST_FROM_STATE_AJAX.0),
		);
	}
	{
		let scoped = Arc::clone(&catalog);
		let view = ServerSideDataTableView::new(transition_value_getters(), move |request| {
			let pk = request.path_param("pk").and_then(parse_pk);
			let records = scoped
				.transitions
				.iter()
				.filter(|t| Some(t.state_to_pk) == pk)
				.cloned()
				.collect();
			QuerySet::from_records(records)
		});
		router.add_route(
			path(urls::TRANSITION_LIST_TO_STATE_AJAX.1, as_handler(view))
				.with_name(urls::TRANSITION_LIST_TO_STATE_AJAX.0),
		);
	}

	router
}

fn scoped_table_context(
	reverser: &UrlReverser,
	title: String,
	datatable_class: &str,
	ajax_route: &str,
	slug: &str,
) -> Context {
	let mut context = Context::new();
	context.insert("table_heading", &title);
	context.insert("title", &title);
	context.insert("datatable_class", datatable_class);
	if let Ok(url) = reverser.reverse_with(ajax_route, &[("slug", slug)]) {
		context.insert("ajax_url", &url);
	}
	context
}

fn state_table_context(
	reverser: &UrlReverser,
	title: String,
	ajax_route: &str,
	pk: i64,
) -> Context {
	let mut context = Context::new();
	context.insert("table_heading", &title);
	context.insert("title", &title);
	context.insert("datatable_class", "transition-table");
	let pk = pk.to_string();
	if let Ok(url) = reverser.reverse_with(ajax_route, &[("pk", pk.as_str())]) {
		context.insert("ajax_url", &url);
	}
	context
}

#[cfg(test)]
mod tests {
	use super::*;
	use exolines_models::sample_catalog;
	use serde_json::json;

	#[test]
	fn test_every_named_url_reverses() {
		let reverser = url_reverser();
		let params = [("slug", "AlH"), ("pk", "1")];
		for (name, _) in urls::ALL {
			assert!(reverser.reverse_with(name, &params).is_ok(), "route '{name}'");
		}
	}

	#[test]
	fn test_state_lifetime_getter_formats() {
		// Arrange
		let reverser = Arc::new(url_reverser());
		let getters = state_value_getters(reverser);
		let catalog = sample_catalog();

		// Act: pk 1 has no lifetime, pk 3 has 6.6e-8 s
		let infinite = getters.get("lifetime").unwrap()(&catalog.states[0]);
		let finite = getters.get("lifetime").unwrap()(&catalog.states[2]);

		// Assert
		assert_eq!(infinite, json!("∞"));
		assert_eq!(finite, json!("6.60e-8"));
	}

	#[test]
	fn test_zero_transition_count_renders_empty_cell() {
		let reverser = Arc::new(url_reverser());
		let getters = state_value_getters(reverser);
		let catalog = sample_catalog();

		// pk 1 depopulates nothing but is populated by two transitions
		let from = getters.get("number_transitions_from").unwrap()(&catalog.states[0]);
		let to = getters.get("number_transitions_to").unwrap()(&catalog.states[0]);

		assert_eq!(from, json!(""));
		assert_eq!(
			to,
			json!(r#"<a href="/state/1/transitions-to/" class="exolines-link">2</a>"#)
		);
	}

	#[test]
	fn test_energy_getter_rounds_to_three_decimals() {
		let reverser = Arc::new(url_reverser());
		let getters = state_value_getters(reverser);
		let catalog = sample_catalog();
		let energy = getters.get("energy").unwrap()(&catalog.states[2]);
		assert_eq!(energy, json!("2.919"));
	}
}
