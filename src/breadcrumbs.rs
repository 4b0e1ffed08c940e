//! Breadcrumb trail helper
//!
//! Collects crumbs and renders them as a Bootstrap breadcrumb list. Crumbs
//! with a URL render as links; crumbs without one render as the active
//! (current) entry.

use crate::attributes::Attributes;
use crate::error::Result;
use crate::template::{TemplateSet, TemplateVars};
use crate::url::{Url, UrlResolver};

const BASE_TEMPLATES: &[(&str, &str)] = &[
	(
		"wrapper",
		r#"<ol class="breadcrumb{{attrs.class}}"{{attrs}}>{{content}}</ol>"#,
	),
	(
		"item",
		r#"<li{{attrs}}><a href="{{url}}"{{innerAttrs}}>{{title}}</a></li>"#,
	),
	(
		"itemWithoutLink",
		r#"<li class="active{{attrs.class}}"{{attrs}}>{{title}}</li>"#,
	),
	("separator", ""),
];

/// One crumb of the trail
#[derive(Debug, Clone)]
pub struct Crumb {
	/// Crumb text
	pub title: String,
	/// Link target; `None` renders the active, link-less entry
	pub url: Option<Url>,
	/// Attributes for the list element
	pub attrs: Attributes,
	/// Attributes for the inner anchor (linked crumbs only)
	pub inner_attrs: Attributes,
}

impl Crumb {
	/// A link-less crumb
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			url: None,
			attrs: Attributes::new(),
			inner_attrs: Attributes::new(),
		}
	}

	/// A linked crumb
	pub fn link(title: impl Into<String>, url: impl Into<Url>) -> Self {
		Self {
			url: Some(url.into()),
			..Self::new(title)
		}
	}

	/// Set list element attributes
	pub fn attrs(mut self, attrs: Attributes) -> Self {
		self.attrs = attrs;
		self
	}

	/// Set inner anchor attributes
	pub fn inner_attrs(mut self, attrs: Attributes) -> Self {
		self.inner_attrs = attrs;
		self
	}
}

/// Breadcrumb trail builder and renderer.
///
/// # Examples
///
/// ```
/// use bootstrap_view::{Breadcrumbs, Crumb, UrlResolver};
///
/// let mut crumbs = Breadcrumbs::new(UrlResolver::new());
/// crumbs.add(Crumb::link("Home", "/"));
/// crumbs.add(Crumb::new("Articles"));
///
/// let out = crumbs.render().unwrap();
/// assert!(out.starts_with(r#"<ol class="breadcrumb">"#));
/// assert!(out.contains(r#"<li class="active">Articles</li>"#));
/// ```
#[derive(Debug, Clone)]
pub struct Breadcrumbs {
	templates: TemplateSet,
	urls: UrlResolver,
	crumbs: Vec<Crumb>,
}

impl Breadcrumbs {
	/// Create an empty trail with the default templates
	pub fn new(urls: UrlResolver) -> Self {
		Self::with_templates(urls, &TemplateSet::new())
	}

	/// Create an empty trail, merging template overrides over the defaults
	pub fn with_templates(urls: UrlResolver, overrides: &TemplateSet) -> Self {
		let mut templates = TemplateSet::from_pairs(BASE_TEMPLATES);
		templates.merge(overrides);
		Self {
			templates,
			urls,
			crumbs: Vec::new(),
		}
	}

	/// Append a crumb
	pub fn add(&mut self, crumb: Crumb) -> &mut Self {
		self.crumbs.push(crumb);
		self
	}

	/// Insert a crumb at the front of the trail
	pub fn prepend(&mut self, crumb: Crumb) -> &mut Self {
		self.crumbs.insert(0, crumb);
		self
	}

	/// Number of crumbs collected so far
	pub fn len(&self) -> usize {
		self.crumbs.len()
	}

	/// Whether the trail is empty
	pub fn is_empty(&self) -> bool {
		self.crumbs.is_empty()
	}

	/// Drop all collected crumbs
	pub fn reset(&mut self) -> &mut Self {
		self.crumbs.clear();
		self
	}

	/// Render the trail without wrapper attributes
	pub fn render(&self) -> Result<String> {
		self.render_with(&Attributes::new())
	}

	/// Render the trail
	pub fn render_with(&self, attrs: &Attributes) -> Result<String> {
		let separator = self.templates.format("separator", &TemplateVars::new())?;
		let mut items = Vec::with_capacity(self.crumbs.len());
		for crumb in &self.crumbs {
			items.push(self.render_crumb(crumb)?);
		}
		self.templates.format(
			"wrapper",
			&TemplateVars::new()
				.set("content", items.join(separator.as_str()))
				.attrs(attrs, &[]),
		)
	}

	fn render_crumb(&self, crumb: &Crumb) -> Result<String> {
		match &crumb.url {
			Some(url) => self.templates.format(
				"item",
				&TemplateVars::new()
					.set("title", crumb.title.as_str())
					.set("url", self.urls.build(url)?)
					.set("innerAttrs", crumb.inner_attrs.to_html())
					.attrs(&crumb.attrs, &[]),
			),
			None => self.templates.format(
				"itemWithoutLink",
				&TemplateVars::new()
					.set("title", crumb.title.as_str())
					.attrs(&crumb.attrs, &[]),
			),
		}
	}
}
