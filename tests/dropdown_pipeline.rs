//! End-to-end behavior of the dropdown pipeline: shape normalization,
//! rendering order, alignment and failure propagation.

use bootstrap_view::{
	Attributes, CanonicalEntry, DropdownOptions, DropdownRenderer, HelperError, HtmlHelper,
	MenuAlign, MenuEntry, Url, UrlResolver, default_templates, normalize,
};
use proptest::prelude::*;

fn urls() -> UrlResolver {
	let mut urls = UrlResolver::new();
	urls.register("articles:view", "/articles/{id}");
	urls
}

#[test]
fn divider_string_always_yields_divider() {
	let entries = normalize(&["divider".into(), "divider".into()], &urls()).unwrap();
	assert!(entries.iter().all(|entry| matches!(
		entry,
		CanonicalEntry::Divider { attrs } if attrs.is_empty()
	)));
}

#[test]
fn title_url_pair_yields_enabled_item() {
	let entries = normalize(
		&[MenuEntry::Seq(
			vec!["Title".into(), "/url".into()],
			Attributes::new(),
		)],
		&urls(),
	)
	.unwrap();
	assert_eq!(
		entries,
		vec![CanonicalEntry::Item {
			title: "Title".into(),
			url: "/url".into(),
			attrs: Attributes::new(),
			disabled: false,
		}]
	);
}

#[test]
fn bare_string_yields_disabled_placeholder() {
	let entries = normalize(&["Coming soon".into()], &urls()).unwrap();
	match &entries[0] {
		CanonicalEntry::Item {
			title,
			url,
			disabled,
			..
		} => {
			assert_eq!(title, "Coming soon");
			assert_eq!(url, "#");
			assert!(disabled);
		}
		other => panic!("expected item, got {:?}", other),
	}
}

#[test]
fn anchor_string_yields_enabled_item_with_extracted_target() {
	let entries = normalize(&[r#"<a href="/x">Click</a>"#.into()], &urls()).unwrap();
	match &entries[0] {
		CanonicalEntry::Item {
			title,
			url,
			disabled,
			..
		} => {
			assert_eq!(title, "Click");
			assert_eq!(url, "/x");
			assert!(!disabled);
		}
		other => panic!("expected item, got {:?}", other),
	}
}

#[test]
fn empty_menu_renders_empty_container() {
	let html = HtmlHelper::new(urls());
	assert_eq!(
		html.dropdown(&[]).unwrap(),
		r#"<div class="dropdown-menu dropdown-menu-left"></div>"#
	);
}

#[test]
fn fragments_render_in_input_order() {
	let html = HtmlHelper::new(urls());
	let out = html
		.dropdown(&[
			MenuEntry::divider(),
			MenuEntry::header("H"),
			MenuEntry::link("L", "/x"),
		])
		.unwrap();
	let divider = out.find(r#"<div role="separator" class="dropdown-divider"></div>"#);
	let header = out.find(r#"<h6 class="dropdown-header">H</h6>"#);
	let item = out.find(r#"<a href="/x" class="dropdown-item">L</a>"#);
	assert!(divider.is_some() && header.is_some() && item.is_some());
	assert!(divider < header && header < item);
}

#[test]
fn align_option_reflected_on_container() {
	let html = HtmlHelper::new(urls());
	let right = html
		.dropdown_with(
			&[],
			&DropdownOptions {
				align: MenuAlign::Right,
				attrs: Attributes::new(),
			},
		)
		.unwrap();
	assert!(right.contains("dropdown-menu-right"));

	let default = html.dropdown(&[]).unwrap();
	assert!(default.contains("dropdown-menu-left"));
}

#[test]
fn keyed_item_form_normalizes_identically_to_itself() {
	let resolver = urls();
	let entry = MenuEntry::Item {
		title: "L".into(),
		url: Some("/x".into()),
		attrs: Attributes::from([("id", "row")]),
	};
	let once = normalize(&[entry], &resolver).unwrap();
	// Feeding the canonical row back through the keyed form changes nothing.
	let again = normalize(
		&[match &once[0] {
			CanonicalEntry::Item {
				title, url, attrs, ..
			} => MenuEntry::Item {
				title: title.clone(),
				url: Some(Url::raw(url.clone())),
				attrs: attrs.clone(),
			},
			other => panic!("expected item, got {:?}", other),
		}],
		&resolver,
	)
	.unwrap();
	assert_eq!(once, again);
}

#[test]
fn url_resolver_failure_surfaces_through_dropdown() {
	let html = HtmlHelper::new(urls());
	let err = html
		.dropdown(&[MenuEntry::link(
			"Read",
			Url::named("articles:view", &[] as &[(&str, &str)]),
		)])
		.unwrap_err();
	assert!(matches!(err, HelperError::RouteParam(_)));
}

#[test]
fn named_routes_resolve_inside_menus() {
	let html = HtmlHelper::new(urls());
	let out = html
		.dropdown(&[MenuEntry::link(
			"Read",
			Url::named("articles:view", &[("id", "42")]),
		)])
		.unwrap();
	assert!(out.contains(r#"href="/articles/42""#));
}

#[test]
fn renderer_over_custom_templates() {
	let mut templates = default_templates();
	templates.set(
		"dropdownMenuItem",
		r#"<li><a href="{{url}}"{{attrs}}>{{content}}</a></li>"#,
	);
	let resolver = urls();
	let renderer = DropdownRenderer::new(&templates, &resolver);
	let out = renderer
		.render(&[MenuEntry::link("L", "/x")], &DropdownOptions::default())
		.unwrap();
	assert!(out.contains(r#"<li><a href="/x">L</a></li>"#));
}

fn entry_strategy() -> impl Strategy<Value = MenuEntry> {
	prop_oneof![
		Just(MenuEntry::divider()),
		"[A-Za-z ]{1,12}".prop_map(MenuEntry::header),
		("[A-Za-z ]{1,12}", "/[a-z]{1,8}").prop_map(|(title, url)| MenuEntry::link(title, url)),
		"[A-Za-z ]{1,12}".prop_map(MenuEntry::Text),
	]
}

fn expected_tag(entry: &MenuEntry) -> &'static str {
	match entry {
		MenuEntry::Text(text) if text == "divider" => "divider",
		MenuEntry::Text(_) => "item",
		MenuEntry::Divider(_) => "divider",
		MenuEntry::Header { .. } => "header",
		MenuEntry::Item { .. } => "item",
		MenuEntry::Seq(..) => unreachable!("not generated"),
	}
}

fn canonical_tag(entry: &CanonicalEntry) -> &'static str {
	match entry {
		CanonicalEntry::Divider { .. } => "divider",
		CanonicalEntry::Header { .. } => "header",
		CanonicalEntry::Item { .. } => "item",
	}
}

proptest! {
	/// Every raw entry maps to exactly one canonical entry, in input order.
	#[test]
	fn normalization_is_order_and_arity_preserving(
		menu in prop::collection::vec(entry_strategy(), 0..12)
	) {
		let entries = normalize(&menu, &UrlResolver::new()).unwrap();
		prop_assert_eq!(entries.len(), menu.len());
		for (raw, canonical) in menu.iter().zip(&entries) {
			prop_assert_eq!(expected_tag(raw), canonical_tag(canonical));
		}
	}

	/// Items only come out disabled when they have no target at all.
	#[test]
	fn disabled_iff_no_target(
		menu in prop::collection::vec(entry_strategy(), 0..12)
	) {
		let entries = normalize(&menu, &UrlResolver::new()).unwrap();
		for (raw, canonical) in menu.iter().zip(&entries) {
			if let CanonicalEntry::Item { url, disabled, .. } = canonical {
				let has_target = matches!(raw, MenuEntry::Item { url: Some(_), .. });
				prop_assert_eq!(*disabled, !has_target);
				if *disabled {
					prop_assert_eq!(url.as_str(), "#");
				}
			}
		}
	}
}
