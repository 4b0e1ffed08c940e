//! Bootstrap HTML helper: icons, badges, alerts, tooltips, progress bars,
//! links and dropdown menus
//!
//! [`HtmlHelper`] owns its configuration: a template set (base defaults
//! merged with caller overrides at construction) plus per-widget defaults.
//! All output goes through the template set; all link targets go through
//! the URL resolver.

use crate::attributes::Attributes;
use crate::dropdown::{DropdownOptions, DropdownRenderer, MenuEntry};
use crate::error::Result;
use crate::icon::{self, IconFont};
use crate::template::{TemplateSet, TemplateVars};
use crate::url::{Url, UrlResolver};

const BASE_TEMPLATES: &[(&str, &str)] = &[
	("link", r#"<a href="{{url}}"{{attrs}}>{{content}}</a>"#),
	(
		"icon",
		r#"<{{tag}} aria-hidden="true" class="{{font}}{{type}}{{attrs.class}}"{{attrs}}></{{tag}}>"#,
	),
	(
		"badge",
		r#"<span class="badge badge-{{type}}{{attrs.class}}"{{attrs}}>{{content}}</span>"#,
	),
	(
		"alert",
		r#"<div class="alert alert-{{type}}{{attrs.class}}" role="alert"{{attrs}}>{{close}}{{content}}</div>"#,
	),
	(
		"alertCloseButton",
		r#"<button type="button" class="close{{attrs.class}}" data-dismiss="alert" aria-label="{{label}}"{{attrs}}>{{content}}</button>"#,
	),
	("alertCloseContent", r#"<span aria-hidden="true">&times;</span>"#),
	(
		"tooltip",
		r#"<{{tag}} data-toggle="{{toggle}}" data-placement="{{placement}}" title="{{tooltip}}"{{attrs}}>{{content}}</{{tag}}>"#,
	),
	(
		"progressBar",
		r#"<div class="progress-bar bg-{{type}}{{attrs.class}}" role="progressbar" aria-valuenow="{{width}}" aria-valuemin="{{min}}" aria-valuemax="{{max}}" style="width: {{width}}%;"{{attrs}}>{{inner}}</div>"#,
	),
	("progressBarInner", r#"<span class="sr-only">{{width}}%</span>"#),
	(
		"progressBarContainer",
		r#"<div class="progress{{attrs.class}}"{{attrs}}>{{content}}</div>"#,
	),
	(
		"dropdownMenu",
		r#"<div class="dropdown-menu{{attrs.class}}"{{attrs}}>{{content}}</div>"#,
	),
	(
		"dropdownMenuItem",
		r#"<a href="{{url}}" class="dropdown-item{{attrs.class}}"{{attrs}}>{{content}}</a>"#,
	),
	(
		"dropdownMenuHeader",
		r#"<h6 class="dropdown-header{{attrs.class}}"{{attrs}}>{{content}}</h6>"#,
	),
	(
		"dropdownMenuDivider",
		r#"<div role="separator" class="dropdown-divider{{attrs.class}}"{{attrs}}></div>"#,
	),
];

/// The helper's base template set
pub fn default_templates() -> TemplateSet {
	TemplateSet::from_pairs(BASE_TEMPLATES)
}

/// Configuration for [`HtmlHelper`].
///
/// Start from [`Default`] and override what you need; the template set is
/// merged as base defaults → caller overrides.
#[derive(Debug, Clone)]
pub struct HtmlHelperConfig {
	/// Active template set
	pub templates: TemplateSet,
	/// Icon font family
	pub icon_font: IconFont,
	/// Tag used for icon elements
	pub icon_tag: String,
	/// Default badge type
	pub badge_type: String,
	/// Default alert type
	pub alert_type: String,
	/// Whether alerts are dismissible by default
	pub alert_close: bool,
	/// Default progress bar type
	pub progress_type: String,
	/// Tag used for tooltip wrappers
	pub tooltip_tag: String,
	/// Default tooltip placement
	pub tooltip_placement: String,
	/// `data-toggle` value for tooltips
	pub tooltip_toggle: String,
	/// Whether `i:` shorthand expansion is enabled
	pub easy_icon: bool,
}

impl Default for HtmlHelperConfig {
	fn default() -> Self {
		Self {
			templates: default_templates(),
			icon_font: IconFont::default(),
			icon_tag: "i".to_string(),
			badge_type: "default".to_string(),
			alert_type: "warning".to_string(),
			alert_close: true,
			progress_type: "primary".to_string(),
			tooltip_tag: "span".to_string(),
			tooltip_placement: "right".to_string(),
			tooltip_toggle: "tooltip".to_string(),
			easy_icon: true,
		}
	}
}

impl HtmlHelperConfig {
	/// Merge template overrides into the base set (overrides win)
	pub fn templates(mut self, overrides: &TemplateSet) -> Self {
		self.templates.merge(overrides);
		self
	}

	/// Set the icon font family
	pub fn icon_font(mut self, font: IconFont) -> Self {
		self.icon_font = font;
		self
	}

	/// Enable or disable `i:` shorthand expansion
	pub fn easy_icon(mut self, enabled: bool) -> Self {
		self.easy_icon = enabled;
		self
	}
}

/// Options for [`HtmlHelper::alert_with`]
#[derive(Debug, Clone, Default)]
pub struct AlertOptions {
	/// Alert type; falls back to the configured default
	pub kind: Option<String>,
	/// Dismissible override; falls back to the configured default
	pub close: Option<bool>,
	/// Extra attributes for the alert element
	pub attrs: Attributes,
}

/// Options for [`HtmlHelper::tooltip_with`]
#[derive(Debug, Clone, Default)]
pub struct TooltipOptions {
	/// Wrapper tag override
	pub tag: Option<String>,
	/// Placement override
	pub placement: Option<String>,
	/// `data-toggle` override
	pub toggle: Option<String>,
	/// Extra attributes for the wrapper element
	pub attrs: Attributes,
}

/// One bar of a progress display
#[derive(Debug, Clone)]
pub struct ProgressBar {
	/// Bar width in percent
	pub width: u32,
	/// Bar type; falls back to the configured default
	pub kind: Option<String>,
	/// `aria-valuemin`
	pub min: u32,
	/// `aria-valuemax`
	pub max: u32,
	/// Striped styling
	pub striped: bool,
	/// Animated striped styling
	pub active: bool,
	/// Extra attributes for the bar element
	pub attrs: Attributes,
}

impl ProgressBar {
	/// A bar of the given width with default bounds (0–100)
	pub fn new(width: u32) -> Self {
		Self {
			width,
			kind: None,
			min: 0,
			max: 100,
			striped: false,
			active: false,
			attrs: Attributes::new(),
		}
	}

	/// Set the bar type
	pub fn kind(mut self, kind: impl Into<String>) -> Self {
		self.kind = Some(kind.into());
		self
	}

	/// Enable striped styling
	pub fn striped(mut self) -> Self {
		self.striped = true;
		self
	}

	/// Enable animated striped styling
	pub fn active(mut self) -> Self {
		self.active = true;
		self
	}
}

/// Bootstrap markup helper.
///
/// # Examples
///
/// ```
/// use bootstrap_view::{HtmlHelper, UrlResolver};
///
/// let html = HtmlHelper::new(UrlResolver::new());
/// let badge = html.badge("4").unwrap();
/// assert_eq!(badge, r#"<span class="badge badge-default">4</span>"#);
/// ```
#[derive(Debug, Clone)]
pub struct HtmlHelper {
	config: HtmlHelperConfig,
	urls: UrlResolver,
}

impl HtmlHelper {
	/// Create a helper with default configuration
	pub fn new(urls: UrlResolver) -> Self {
		Self::with_config(HtmlHelperConfig::default(), urls)
	}

	/// Create a helper with explicit configuration
	pub fn with_config(config: HtmlHelperConfig, urls: UrlResolver) -> Self {
		Self { config, urls }
	}

	/// The active configuration
	pub fn config(&self) -> &HtmlHelperConfig {
		&self.config
	}

	/// The active template set
	pub fn templates(&self) -> &TemplateSet {
		&self.config.templates
	}

	/// The URL resolver links are built through
	pub fn urls(&self) -> &UrlResolver {
		&self.urls
	}

	/// Render an icon element
	pub fn icon(&self, name: &str) -> Result<String> {
		self.icon_with(name, &Attributes::new())
	}

	/// Render an icon element with extra attributes
	pub fn icon_with(&self, name: &str, attrs: &Attributes) -> Result<String> {
		self.config.templates.format(
			"icon",
			&TemplateVars::new()
				.set("tag", self.config.icon_tag.as_str())
				.set("font", self.config.icon_font.prefix())
				.set("type", name)
				.attrs(attrs, &[]),
		)
	}

	/// Render a badge with the configured default type
	pub fn badge(&self, text: &str) -> Result<String> {
		self.badge_with(text, None, &Attributes::new())
	}

	/// Render a badge
	pub fn badge_with(&self, text: &str, kind: Option<&str>, attrs: &Attributes) -> Result<String> {
		self.config.templates.format(
			"badge",
			&TemplateVars::new()
				.set("type", kind.unwrap_or(&self.config.badge_type))
				.set("content", text)
				.attrs(attrs, &[]),
		)
	}

	/// Render an alert with the configured defaults
	pub fn alert(&self, text: &str) -> Result<String> {
		self.alert_with(text, &AlertOptions::default())
	}

	/// Render an alert block
	pub fn alert_with(&self, text: &str, options: &AlertOptions) -> Result<String> {
		let kind = options
			.kind
			.as_deref()
			.unwrap_or(&self.config.alert_type);
		let mut attrs = options.attrs.clone();

		let close = if options.close.unwrap_or(self.config.alert_close) {
			let content = self.config.templates.format("alertCloseContent", &TemplateVars::new())?;
			attrs.add_class("alert-dismissible");
			self.config.templates.format(
				"alertCloseButton",
				&TemplateVars::new()
					.set("label", "Close")
					.set("content", content)
					.attrs(&Attributes::new(), &[]),
			)?
		} else {
			String::new()
		};

		self.config.templates.format(
			"alert",
			&TemplateVars::new()
				.set("type", kind)
				.set("close", close)
				.set("content", text)
				.attrs(&attrs, &[]),
		)
	}

	/// Wrap `text` in a tooltip carrier with the configured defaults
	pub fn tooltip(&self, text: &str, tooltip: &str) -> Result<String> {
		self.tooltip_with(text, tooltip, &TooltipOptions::default())
	}

	/// Wrap `text` in a tooltip carrier
	pub fn tooltip_with(&self, text: &str, tooltip: &str, options: &TooltipOptions) -> Result<String> {
		self.config.templates.format(
			"tooltip",
			&TemplateVars::new()
				.set("tag", options.tag.as_deref().unwrap_or(&self.config.tooltip_tag))
				.set(
					"toggle",
					options.toggle.as_deref().unwrap_or(&self.config.tooltip_toggle),
				)
				.set(
					"placement",
					options
						.placement
						.as_deref()
						.unwrap_or(&self.config.tooltip_placement),
				)
				.set("tooltip", tooltip)
				.set("content", text)
				.attrs(&options.attrs, &[]),
		)
	}

	/// Render a single progress bar of the given width
	pub fn progress(&self, width: u32) -> Result<String> {
		self.progress_with(&[ProgressBar::new(width)])
	}

	/// Render a stacked progress display, one bar per entry
	pub fn progress_with(&self, bars: &[ProgressBar]) -> Result<String> {
		let mut content = String::new();
		for bar in bars {
			let mut attrs = bar.attrs.clone();
			if bar.striped {
				attrs.add_class("progress-bar-striped");
			}
			if bar.active {
				attrs.add_class("progress-bar-striped progress-bar-animated");
			}
			let inner = self.config.templates.format(
				"progressBarInner",
				&TemplateVars::new().set("width", bar.width.to_string()),
			)?;
			content.push_str(&self.config.templates.format(
				"progressBar",
				&TemplateVars::new()
					.set("inner", inner)
					.set("type", bar.kind.as_deref().unwrap_or(&self.config.progress_type))
					.set("min", bar.min.to_string())
					.set("max", bar.max.to_string())
					.set("width", bar.width.to_string())
					.attrs(&attrs, &[]),
			)?);
		}

		self.config.templates.format(
			"progressBarContainer",
			&TemplateVars::new()
				.set("content", content)
				.attrs(&Attributes::new(), &[]),
		)
	}

	/// Render a link with no extra attributes
	pub fn link(&self, title: &str, url: impl Into<Url>) -> Result<String> {
		self.link_with(title, url, &Attributes::new())
	}

	/// Render a link.
	///
	/// The title goes through `i:` shorthand expansion (when enabled) and
	/// the target through the URL resolver.
	pub fn link_with(&self, title: &str, url: impl Into<Url>, attrs: &Attributes) -> Result<String> {
		let (title, _converted) = self.make_icon(title)?;
		let resolved = self.urls.build(&url.into())?;
		self.config.templates.format(
			"link",
			&TemplateVars::new()
				.set("url", resolved)
				.set("content", title)
				.attrs(attrs, &[]),
		)
	}

	/// Render a dropdown menu with default container options
	pub fn dropdown(&self, menu: &[MenuEntry]) -> Result<String> {
		self.dropdown_with(menu, &DropdownOptions::default())
	}

	/// Render a dropdown menu
	pub fn dropdown_with(&self, menu: &[MenuEntry], options: &DropdownOptions) -> Result<String> {
		DropdownRenderer::new(&self.config.templates, &self.urls).render(menu, options)
	}

	/// Expand `i:` shorthand tokens in `text`, reporting whether any
	/// conversion happened. Honors the `easy_icon` configuration switch.
	pub fn make_icon(&self, text: &str) -> Result<(String, bool)> {
		if !self.config.easy_icon {
			return Ok((text.to_string(), false));
		}
		let mut failure = None;
		let (expanded, converted) = icon::expand_easy_icons(text, |name| {
			self.icon(name).unwrap_or_else(|err| {
				failure = Some(err);
				String::new()
			})
		});
		match failure {
			Some(err) => Err(err),
			None => Ok((expanded, converted)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn helper() -> HtmlHelper {
		HtmlHelper::new(UrlResolver::new())
	}

	#[test]
	fn test_icon() {
		let out = helper().icon("plus").unwrap();
		assert_eq!(out, r#"<i aria-hidden="true" class="fa fa-plus"></i>"#);
	}

	#[test]
	fn test_icon_font_override() {
		let html = HtmlHelper::with_config(
			HtmlHelperConfig::default().icon_font(IconFont::Glyphicon),
			UrlResolver::new(),
		);
		let out = html.icon("plus").unwrap();
		assert_eq!(
			out,
			r#"<i aria-hidden="true" class="glyphicon glyphicon-plus"></i>"#
		);
	}

	#[test]
	fn test_icon_extra_class_merged() {
		let out = helper()
			.icon_with("plus", &Attributes::from([("class", "big"), ("id", "x")]))
			.unwrap();
		assert_eq!(
			out,
			r#"<i aria-hidden="true" class="fa fa-plus big" id="x"></i>"#
		);
	}

	#[test]
	fn test_badge_types() {
		let html = helper();
		assert_eq!(
			html.badge("2").unwrap(),
			r#"<span class="badge badge-default">2</span>"#
		);
		assert_eq!(
			html.badge_with("2", Some("danger"), &Attributes::new()).unwrap(),
			r#"<span class="badge badge-danger">2</span>"#
		);
	}

	#[test]
	fn test_alert_dismissible_by_default() {
		let out = helper().alert("Watch out").unwrap();
		assert!(out.contains("alert alert-warning alert-dismissible"));
		assert!(out.contains(r#"data-dismiss="alert""#));
		assert!(out.contains("&times;"));
		assert!(out.contains("Watch out"));
	}

	#[test]
	fn test_alert_without_close() {
		let out = helper()
			.alert_with(
				"Saved",
				&AlertOptions {
					kind: Some("success".into()),
					close: Some(false),
					attrs: Attributes::new(),
				},
			)
			.unwrap();
		assert_eq!(
			out,
			r#"<div class="alert alert-success" role="alert">Saved</div>"#
		);
	}

	#[test]
	fn test_tooltip_defaults() {
		let out = helper().tooltip("hover me", "the tip").unwrap();
		assert_eq!(
			out,
			r#"<span data-toggle="tooltip" data-placement="right" title="the tip">hover me</span>"#
		);
	}

	#[test]
	fn test_progress_single() {
		let out = helper().progress(20).unwrap();
		assert!(out.starts_with(r#"<div class="progress">"#));
		assert!(out.contains(r#"aria-valuenow="20""#));
		assert!(out.contains("width: 20%"));
		assert!(out.contains(r#"<span class="sr-only">20%</span>"#));
		assert!(out.contains("bg-primary"));
	}

	#[test]
	fn test_progress_modifiers() {
		let out = helper()
			.progress_with(&[
				ProgressBar::new(10).kind("success").striped(),
				ProgressBar::new(30).active(),
			])
			.unwrap();
		assert!(out.contains("bg-success"));
		assert!(out.contains("progress-bar-striped progress-bar-animated"));
		// Striped token from the first bar appears exactly once in it
		let first = out.find("progress-bar-striped").unwrap();
		let second = out[first + 1..].find("progress-bar-striped").unwrap();
		assert!(second > 0);
	}

	#[test]
	fn test_link_with_easy_icon() {
		let out = helper().link("i:dashboard Dashboard", "/dashboard").unwrap();
		assert_eq!(
			out,
			r#"<a href="/dashboard"><i aria-hidden="true" class="fa fa-dashboard"></i> Dashboard</a>"#
		);
	}

	#[test]
	fn test_link_easy_icon_disabled() {
		let html = HtmlHelper::with_config(
			HtmlHelperConfig::default().easy_icon(false),
			UrlResolver::new(),
		);
		let out = html.link("i:dashboard Dashboard", "/dashboard").unwrap();
		assert_eq!(out, r#"<a href="/dashboard">i:dashboard Dashboard</a>"#);
	}

	#[test]
	fn test_template_override_at_construction() {
		let mut overrides = TemplateSet::new();
		overrides.set("badge", r#"<b class="badge-{{type}}">{{content}}</b>"#);
		let html = HtmlHelper::with_config(
			HtmlHelperConfig::default().templates(&overrides),
			UrlResolver::new(),
		);
		assert_eq!(
			html.badge("1").unwrap(),
			r#"<b class="badge-default">1</b>"#
		);
	}
}
