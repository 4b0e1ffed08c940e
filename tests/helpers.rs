//! Cross-helper integration: shared URL resolution, configuration merging
//! and composed markup (forms embedding dropdown menus, breadcrumb trails).

use bootstrap_view::{
	Attributes, Breadcrumbs, ControlOptions, Crumb, FormHelper, FormHelperConfig, FormOptions,
	HelperError, HtmlHelper, HtmlHelperConfig, IconFont, LabelMode, MenuEntry, TemplateSet, Url,
	UrlResolver,
};

fn resolver() -> UrlResolver {
	let mut urls = UrlResolver::new();
	urls.register("home", "/");
	urls.register("users:detail", "/users/{id}/");
	urls
}

#[test]
fn link_resolves_named_routes_and_expands_icons() {
	let html = HtmlHelper::with_config(
		HtmlHelperConfig::default().icon_font(IconFont::Glyphicon),
		resolver(),
	);
	let out = html
		.link(
			"i:dashboard Dashboard",
			Url::named("users:detail", &[("id", "3")]),
		)
		.unwrap();
	assert_eq!(
		out,
		concat!(
			r#"<a href="/users/3/">"#,
			r#"<i aria-hidden="true" class="glyphicon glyphicon-dashboard"></i>"#,
			" Dashboard</a>",
		)
	);
}

#[test]
fn breadcrumbs_share_the_resolver() {
	let mut crumbs = Breadcrumbs::new(resolver());
	crumbs
		.add(Crumb::link("Home", Url::named("home", &[] as &[(&str, &str)])))
		.add(Crumb::new("Profile"));
	let out = crumbs.render().unwrap();
	assert_eq!(
		out,
		concat!(
			r#"<ol class="breadcrumb">"#,
			r#"<li><a href="/">Home</a></li>"#,
			r#"<li class="active">Profile</li>"#,
			"</ol>",
		)
	);
}

#[test]
fn form_embeds_dropdown_menu_in_input_group() {
	let form = FormHelper::new(HtmlHelper::new(resolver()));
	let dropdown = form
		.dropdown_button(
			"Action",
			&[
				MenuEntry::link("Profile", Url::named("users:detail", &[("id", "1")])),
				"divider".into(),
				"Soon".into(),
			],
		)
		.unwrap();
	let out = form
		.control(
			"query",
			&ControlOptions {
				label: LabelMode::None,
				append: Some(dropdown),
				..Default::default()
			},
		)
		.unwrap();

	// The addon slot picks the button wrapper for button-group markup.
	assert!(out.contains(r#"<span class="input-group-btn"><div class="btn-group">"#));
	assert!(out.contains(r#"href="/users/1/""#));
	assert!(out.contains(r#"class="dropdown-item disabled""#));
	assert!(out.contains("dropdown-divider"));
}

#[test]
fn horizontal_layout_is_config_driven() {
	let mut form = FormHelper::new(HtmlHelper::new(resolver()));
	form.create(&FormOptions {
		horizontal: true,
		..Default::default()
	})
	.unwrap();
	let out = form.control("title", &ControlOptions::default()).unwrap();
	assert!(out.contains(r#"<label class="control-label col-md-2" for="title">Title</label>"#));
	assert!(out.contains(r#"<div class="col-md-10">"#));
}

#[test]
fn template_overrides_apply_per_helper() {
	let mut overrides = TemplateSet::new();
	overrides.set(
		"alert",
		r#"<aside class="alert alert-{{type}}{{attrs.class}}"{{attrs}}>{{close}}{{content}}</aside>"#,
	);
	let html = HtmlHelper::with_config(
		HtmlHelperConfig::default().templates(&overrides),
		resolver(),
	);
	let out = html.alert("Heads up").unwrap();
	assert!(out.starts_with(r#"<aside class="alert alert-warning alert-dismissible">"#));
	assert!(out.ends_with("</aside>"));

	// Other helpers keep the stock templates.
	let plain = HtmlHelper::new(resolver());
	assert!(plain.alert("Heads up").unwrap().starts_with("<div"));
}

#[test]
fn route_errors_surface_from_every_helper() {
	let missing = Url::named("missing", &[] as &[(&str, &str)]);

	let html = HtmlHelper::new(resolver());
	assert!(matches!(
		html.link("x", missing.clone()).unwrap_err(),
		HelperError::RouteNotFound(_)
	));

	let mut form = FormHelper::new(HtmlHelper::new(resolver()));
	assert!(matches!(
		form.create(&FormOptions {
			url: Some(missing.clone()),
			..Default::default()
		})
		.unwrap_err(),
		HelperError::RouteNotFound(_)
	));

	let mut crumbs = Breadcrumbs::new(resolver());
	crumbs.add(Crumb::link("x", missing));
	assert!(matches!(
		crumbs.render().unwrap_err(),
		HelperError::RouteNotFound(_)
	));
}

#[test]
fn form_config_overrides_button_type() {
	let config = FormHelperConfig {
		button_type: "primary".to_string(),
		..Default::default()
	};
	let form = FormHelper::with_config(config, HtmlHelper::new(resolver()));
	let out = form.button("Go").unwrap();
	assert!(out.contains("btn btn-primary"));
}

#[test]
fn attributes_flow_through_to_markup() {
	let html = HtmlHelper::new(resolver());
	let out = html
		.link_with(
			"Docs",
			"/docs",
			&Attributes::from([("class", "nav-link"), ("data-section", "help")]),
		)
		.unwrap();
	assert_eq!(
		out,
		r#"<a href="/docs" class="nav-link" data-section="help">Docs</a>"#
	);
}
