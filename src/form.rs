//! Bootstrap form layout helper
//!
//! Covers the markup side of forms: the form element itself, buttons,
//! labeled controls with input groups (prepend/append addons, including
//! dropdown buttons) and the column layout of horizontal forms. Field
//! validation, schemas and request security belong to the host application.

use indexmap::IndexMap;

use crate::attributes::Attributes;
use crate::dropdown::{DropdownOptions, MenuEntry};
use crate::error::Result;
use crate::html::HtmlHelper;
use crate::template::{TemplateSet, TemplateVars};
use crate::url::Url;

const BASE_TEMPLATES: &[(&str, &str)] = &[
	("formStart", "<form{{attrs}}>"),
	("formEnd", "</form>"),
	("button", "<button{{attrs}}>{{content}}</button>"),
	("label", "<label{{attrs}}>{{content}}</label>"),
	("input", r#"<input type="{{type}}"{{attrs}}/>"#),
	(
		"inputContainer",
		r#"<div class="form-group {{type}}{{required}}">{{content}}</div>"#,
	),
	(
		"inputContainerError",
		r#"<div class="form-group has-error {{type}}{{required}}">{{content}}{{error}}</div>"#,
	),
	(
		"inputGroup",
		r#"<div class="input-group">{{prepend}}{{content}}{{append}}</div>"#,
	),
	(
		"inputGroupAddon",
		r#"<span class="input-group-addon">{{content}}</span>"#,
	),
	(
		"inputGroupButton",
		r#"<span class="input-group-btn">{{content}}</span>"#,
	),
	(
		"error",
		r#"<span class="help-block error-message{{attrs.class}}"{{attrs}}>{{content}}</span>"#,
	),
	("columnWrapper", r#"<div class="{{class}}">{{content}}</div>"#),
	("submitContainer", r#"<div class="form-group">{{content}}</div>"#),
	("submitButton", r#"<input type="submit"{{attrs}}/>"#),
	(
		"buttonGroup",
		r#"<div class="btn-group{{attrs.class}}"{{attrs}}>{{content}}</div>"#,
	),
	("caret", r#"<span class="caret"></span>"#),
];

/// Column widths for one screen size of a horizontal form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSizes {
	/// Label column width
	pub label: u32,
	/// Input column width
	pub input: u32,
	/// Error column width; `0` lets errors span the input columns
	pub error: u32,
}

/// Which column class set to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
	/// Label column
	Label,
	/// Input column
	Input,
	/// Error column (offset under the input when no width is configured)
	Error,
}

/// Configuration for [`FormHelper`]
#[derive(Debug, Clone)]
pub struct FormHelperConfig {
	/// Active template set
	pub templates: TemplateSet,
	/// Horizontal column widths per screen size, in emission order
	pub columns: IndexMap<String, ColumnSizes>,
	/// Default button type
	pub button_type: String,
}

impl Default for FormHelperConfig {
	fn default() -> Self {
		let mut columns = IndexMap::new();
		columns.insert(
			"md".to_string(),
			ColumnSizes {
				label: 2,
				input: 10,
				error: 0,
			},
		);
		Self {
			templates: TemplateSet::from_pairs(BASE_TEMPLATES),
			columns,
			button_type: "default".to_string(),
		}
	}
}

impl FormHelperConfig {
	/// Merge template overrides into the base set (overrides win)
	pub fn templates(mut self, overrides: &TemplateSet) -> Self {
		self.templates.merge(overrides);
		self
	}

	/// Replace the horizontal column configuration
	pub fn columns(mut self, columns: &[(&str, ColumnSizes)]) -> Self {
		self.columns = columns
			.iter()
			.map(|(screen, sizes)| (screen.to_string(), *sizes))
			.collect();
		self
	}
}

/// Options for [`FormHelper::create`]
#[derive(Debug, Clone)]
pub struct FormOptions {
	/// Form action target; defaults to `"/"`
	pub url: Option<Url>,
	/// Form method
	pub method: String,
	/// Lay the form out horizontally until the next `create`
	pub horizontal: bool,
	/// Render as an inline form
	pub inline: bool,
	/// Extra attributes for the form element
	pub attrs: Attributes,
}

impl Default for FormOptions {
	fn default() -> Self {
		Self {
			url: None,
			method: "post".to_string(),
			horizontal: false,
			inline: false,
			attrs: Attributes::new(),
		}
	}
}

/// Label behavior for [`FormHelper::control`]
#[derive(Debug, Clone, Default)]
pub enum LabelMode {
	/// Derive the label text from the field name
	#[default]
	Auto,
	/// No label element
	None,
	/// Explicit label text
	Text(String),
}

/// Options for [`FormHelper::control`]
#[derive(Debug, Clone)]
pub struct ControlOptions {
	/// Input `type` attribute
	pub input_type: String,
	/// Label behavior
	pub label: LabelMode,
	/// Addon rendered before the input (text, `i:` shorthand or markup)
	pub prepend: Option<String>,
	/// Addon rendered after the input
	pub append: Option<String>,
	/// Validation message to display
	pub error: Option<String>,
	/// Mark the control group as required
	pub required: bool,
	/// Extra attributes for the input element
	pub attrs: Attributes,
}

impl Default for ControlOptions {
	fn default() -> Self {
		Self {
			input_type: "text".to_string(),
			label: LabelMode::Auto,
			prepend: None,
			append: None,
			error: None,
			required: false,
			attrs: Attributes::new(),
		}
	}
}

/// Options for [`FormHelper::dropdown_button_with`]
#[derive(Debug, Clone, Default)]
pub struct DropdownButtonOptions {
	/// Open the menu upwards
	pub dropup: bool,
	/// Button type; falls back to the configured default
	pub kind: Option<String>,
	/// Container options for the attached menu
	pub menu: DropdownOptions,
}

/// Bootstrap form markup helper.
///
/// The horizontal/inline layout chosen by [`create`](Self::create) is
/// sticky for the form's lifetime and reset by the next `create` call.
///
/// # Examples
///
/// ```
/// use bootstrap_view::{FormHelper, FormOptions, HtmlHelper, UrlResolver};
///
/// let mut form = FormHelper::new(HtmlHelper::new(UrlResolver::new()));
/// let open = form.create(&FormOptions::default()).unwrap();
/// assert!(open.contains(r#"role="form""#));
/// assert_eq!(form.end().unwrap(), "</form>");
/// ```
#[derive(Debug, Clone)]
pub struct FormHelper {
	config: FormHelperConfig,
	html: HtmlHelper,
	horizontal: bool,
	inline: bool,
}

impl FormHelper {
	/// Create a form helper with default configuration
	pub fn new(html: HtmlHelper) -> Self {
		Self::with_config(FormHelperConfig::default(), html)
	}

	/// Create a form helper with explicit configuration
	pub fn with_config(config: FormHelperConfig, html: HtmlHelper) -> Self {
		Self {
			config,
			html,
			horizontal: false,
			inline: false,
		}
	}

	/// Whether the current form is horizontal
	pub fn horizontal(&self) -> bool {
		self.horizontal
	}

	/// Whether the current form is inline
	pub fn inline(&self) -> bool {
		self.inline
	}

	/// The HTML helper used for icons, links and dropdown menus
	pub fn html(&self) -> &HtmlHelper {
		&self.html
	}

	/// Open a form element and remember its layout flags
	pub fn create(&mut self, options: &FormOptions) -> Result<String> {
		self.horizontal = options.horizontal;
		self.inline = options.inline;

		let action = match &options.url {
			Some(url) => self.html.urls().build(url)?,
			None => "/".to_string(),
		};
		let mut attrs = Attributes::new();
		attrs.insert("method", options.method.as_str());
		attrs.insert("accept-charset", "utf-8");
		attrs.insert("role", "form");
		attrs.insert("action", action);
		for (name, value) in options.attrs.iter() {
			attrs.insert(name, value);
		}
		if options.inline {
			attrs.add_class("form-inline");
		}
		if options.horizontal {
			attrs.add_class("form-horizontal");
		}

		self.config
			.templates
			.format("formStart", &TemplateVars::new().attrs(&attrs, &[]))
	}

	/// Close the form element
	pub fn end(&self) -> Result<String> {
		self.config.templates.format("formEnd", &TemplateVars::new())
	}

	/// Render a submit-type button with the configured default type
	pub fn button(&self, title: &str) -> Result<String> {
		self.button_with(title, None, &Attributes::new())
	}

	/// Render a submit-type button
	pub fn button_with(&self, title: &str, kind: Option<&str>, attrs: &Attributes) -> Result<String> {
		let (content, _converted) = self.html.make_icon(title)?;
		let mut attrs = attrs.clone();
		attrs.add_class(&format!(
			"btn btn-{}",
			kind.unwrap_or(&self.config.button_type)
		));
		if !attrs.contains("type") {
			attrs.insert("type", "submit");
		}
		self.config.templates.format(
			"button",
			&TemplateVars::new().set("content", content).attrs(&attrs, &[]),
		)
	}

	/// Render a wrapped submit input
	pub fn submit(&self, caption: &str) -> Result<String> {
		self.submit_with(caption, &Attributes::new())
	}

	/// Render a wrapped submit input with extra attributes
	pub fn submit_with(&self, caption: &str, attrs: &Attributes) -> Result<String> {
		let mut attrs = attrs.clone();
		attrs.add_class("btn btn-primary");
		attrs.insert("value", caption);
		let input = self.config.templates.format(
			"submitButton",
			&TemplateVars::new().attrs(&attrs, &[]),
		)?;
		self.config.templates.format(
			"submitContainer",
			&TemplateVars::new().set("content", input),
		)
	}

	/// Column classes for a horizontal form, in configured screen order.
	///
	/// Error columns with no configured width land under the input columns
	/// (offset by the label width); configured widths sit next to the input
	/// with no offset.
	pub fn column_classes(&self, role: ColumnRole) -> String {
		let mut parts = Vec::new();
		for (screen, sizes) in &self.config.columns {
			match role {
				ColumnRole::Label => parts.push(format!("col-{}-{}", screen, sizes.label)),
				ColumnRole::Input => parts.push(format!("col-{}-{}", screen, sizes.input)),
				ColumnRole::Error => {
					if sizes.error > 0 {
						parts.push(format!(
							"col-{}-offset-0 col-{}-{}",
							screen, screen, sizes.error
						));
					} else {
						parts.push(format!(
							"col-{}-offset-{} col-{}-{}",
							screen, sizes.label, screen, sizes.input
						));
					}
				}
			}
		}
		parts.join(" ")
	}

	/// Render a labeled form control.
	///
	/// `name` may be dotted (`"Article.title"`); it yields the input's
	/// `name`/`id` attributes and, for [`LabelMode::Auto`], the label text.
	pub fn control(&self, name: &str, options: &ControlOptions) -> Result<String> {
		let id = field_id(name);

		let mut input_attrs = Attributes::new();
		input_attrs.add_class("form-control");
		if options.error.is_some() {
			input_attrs.add_class("has-error");
		}
		for (attr, value) in options.attrs.iter() {
			input_attrs.insert(attr, value);
		}
		input_attrs.insert("name", field_name(name));
		input_attrs.insert("id", id.as_str());
		if options.error.is_some() {
			input_attrs.insert("aria-invalid", "true");
		}
		let input = self.config.templates.format(
			"input",
			&TemplateVars::new()
				.set("type", options.input_type.as_str())
				.attrs(&input_attrs, &[]),
		)?;

		let mut body = match (&options.prepend, &options.append) {
			(None, None) => input,
			(prepend, append) => {
				let prepend = match prepend {
					Some(content) => self.addon(content)?,
					None => String::new(),
				};
				let append = match append {
					Some(content) => self.addon(content)?,
					None => String::new(),
				};
				self.config.templates.format(
					"inputGroup",
					&TemplateVars::new()
						.set("prepend", prepend)
						.set("content", input)
						.set("append", append),
				)?
			}
		};
		if self.horizontal {
			body = self.config.templates.format(
				"columnWrapper",
				&TemplateVars::new()
					.set("class", self.column_classes(ColumnRole::Input))
					.set("content", body),
			)?;
		}

		let label_text = match &options.label {
			LabelMode::None => None,
			LabelMode::Auto => Some(humanize(name)),
			LabelMode::Text(text) => Some(text.clone()),
		};
		let label = match label_text {
			Some(text) => {
				let mut label_attrs = Attributes::new();
				if self.horizontal {
					label_attrs.add_class(&format!(
						"control-label {}",
						self.column_classes(ColumnRole::Label)
					));
				}
				label_attrs.insert("for", id.as_str());
				self.config.templates.format(
					"label",
					&TemplateVars::new().set("content", text).attrs(&label_attrs, &[]),
				)?
			}
			None => String::new(),
		};

		let required = if options.required { " required" } else { "" };
		match &options.error {
			Some(message) => {
				let mut error_attrs = Attributes::new();
				if self.horizontal {
					error_attrs.add_class(&self.column_classes(ColumnRole::Error));
				}
				let error = self.config.templates.format(
					"error",
					&TemplateVars::new()
						.set("content", message.as_str())
						.attrs(&error_attrs, &[]),
				)?;
				self.config.templates.format(
					"inputContainerError",
					&TemplateVars::new()
						.set("type", options.input_type.as_str())
						.set("required", required)
						.set("content", format!("{}{}", label, body))
						.set("error", error),
				)
			}
			None => self.config.templates.format(
				"inputContainer",
				&TemplateVars::new()
					.set("type", options.input_type.as_str())
					.set("required", required)
					.set("content", format!("{}{}", label, body)),
			),
		}
	}

	/// Render a dropdown toggle button with its attached menu
	pub fn dropdown_button(&self, title: &str, menu: &[MenuEntry]) -> Result<String> {
		self.dropdown_button_with(title, menu, &DropdownButtonOptions::default())
	}

	/// Render a dropdown toggle button with its attached menu.
	///
	/// The result is addon-ready: passing it as `prepend`/`append` to
	/// [`control`](Self::control) wraps it in the input group's button slot.
	pub fn dropdown_button_with(
		&self,
		title: &str,
		menu: &[MenuEntry],
		options: &DropdownButtonOptions,
	) -> Result<String> {
		let (title, _converted) = self.html.make_icon(title)?;
		let caret = self.config.templates.format("caret", &TemplateVars::new())?;

		let mut button_attrs = Attributes::new();
		button_attrs.insert("data-toggle", "dropdown");
		button_attrs.add_class(&format!(
			"dropdown-toggle btn btn-{}",
			options.kind.as_deref().unwrap_or(&self.config.button_type)
		));
		let button = self.config.templates.format(
			"button",
			&TemplateVars::new()
				.set("content", format!("{}{}", title, caret))
				.attrs(&button_attrs, &[]),
		)?;

		let menu = self.html.dropdown_with(menu, &options.menu)?;

		let mut group_attrs = Attributes::new();
		if options.dropup {
			group_attrs.add_class("dropup");
		}
		self.config.templates.format(
			"buttonGroup",
			&TemplateVars::new()
				.set("content", format!("{}{}", button, menu))
				.attrs(&group_attrs, &[]),
		)
	}

	/// Wrap addon content for an input group, picking the button slot for
	/// button and button-group markup
	fn addon(&self, content: &str) -> Result<String> {
		let (content, _converted) = self.html.make_icon(content)?;
		let trimmed = content.trim_start();
		let template = if trimmed.starts_with("<button") || trimmed.starts_with("<div class=\"btn-group") {
			"inputGroupButton"
		} else {
			"inputGroupAddon"
		};
		self.config
			.templates
			.format(template, &TemplateVars::new().set("content", content))
	}
}

/// `"Article.title"` → `"article-title"`
fn field_id(name: &str) -> String {
	name.to_lowercase().replace(['.', '_', ' '], "-")
}

/// `"Article.title"` → `"Article[title]"`
fn field_name(name: &str) -> String {
	let mut segments = name.split('.');
	let Some(first) = segments.next() else {
		return String::new();
	};
	let mut out = first.to_string();
	for segment in segments {
		out.push('[');
		out.push_str(segment);
		out.push(']');
	}
	out
}

/// Label text from the last field name segment: `"author_id"` → `"Author Id"`
fn humanize(name: &str) -> String {
	let segment = name.rsplit('.').next().unwrap_or(name);
	segment
		.replace(['_', '-'], " ")
		.split_whitespace()
		.map(|word| {
			let mut chars = word.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
				None => String::new(),
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}
