//! Named string templates with `{{placeholder}}` substitution
//!
//! Each helper owns a [`TemplateSet`] built from its base defaults merged
//! with caller overrides at construction time (overrides win, no shared
//! mutable state afterwards). Formatting is a single pass over the template;
//! placeholders with no bound value render as the empty string.
//!
//! Attribute handling mirrors the markup conventions used throughout the
//! crate: when a template references `{{attrs.class}}` the `class` attribute
//! is split out of the bound attribute set and rendered (with a leading
//! space) into that slot, while `{{attrs}}` receives the remaining
//! serialized attributes.

use indexmap::IndexMap;
use tracing::trace;

use crate::attributes::Attributes;
use crate::error::{HelperError, Result};

/// A named collection of markup templates.
///
/// # Examples
///
/// ```
/// use bootstrap_view::{TemplateSet, TemplateVars};
///
/// let mut templates = TemplateSet::new();
/// templates.set("greeting", "<p>Hello {{name}}!</p>");
///
/// let out = templates
///     .format("greeting", &TemplateVars::new().set("name", "World"))
///     .unwrap();
/// assert_eq!(out, "<p>Hello World!</p>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
	templates: IndexMap<String, String>,
}

impl TemplateSet {
	/// Create an empty template set
	pub fn new() -> Self {
		Self {
			templates: IndexMap::new(),
		}
	}

	/// Build a template set from `(name, template)` pairs
	pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
		let mut set = Self::new();
		for (name, template) in pairs {
			set.set(*name, *template);
		}
		set
	}

	/// Register or replace a single template
	pub fn set(&mut self, name: impl Into<String>, template: impl Into<String>) -> &mut Self {
		self.templates.insert(name.into(), template.into());
		self
	}

	/// Merge `overrides` into this set; overriding templates win
	pub fn merge(&mut self, overrides: &TemplateSet) -> &mut Self {
		for (name, template) in &overrides.templates {
			trace!(template = %name, "overriding template");
			self.templates.insert(name.clone(), template.clone());
		}
		self
	}

	/// Look up a template string by name
	pub fn get(&self, name: &str) -> Option<&str> {
		self.templates.get(name).map(String::as_str)
	}

	/// Fill the named template with the given variables.
	///
	/// Returns [`HelperError::TemplateNotFound`] for an unknown name; a
	/// placeholder with no bound value renders as the empty string.
	pub fn format(&self, name: &str, vars: &TemplateVars) -> Result<String> {
		let template = self
			.get(name)
			.ok_or_else(|| HelperError::TemplateNotFound(name.to_string()))?;
		Ok(vars.fill(template))
	}
}

/// Placeholder values for one [`TemplateSet::format`] call
#[derive(Debug, Clone, Default)]
pub struct TemplateVars {
	values: IndexMap<String, String>,
	attrs: Option<(Attributes, Vec<String>)>,
}

impl TemplateVars {
	/// Create an empty variable set
	pub fn new() -> Self {
		Self::default()
	}

	/// Bind a placeholder value
	pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.values.insert(name.into(), value.into());
		self
	}

	/// Bind the element's attribute set to `{{attrs}}` (and any
	/// `{{attrs.<name>}}` slots the template declares), skipping `exclude`
	/// keys entirely.
	pub fn attrs(mut self, attrs: &Attributes, exclude: &[&str]) -> Self {
		self.attrs = Some((
			attrs.clone(),
			exclude.iter().map(|e| e.to_string()).collect(),
		));
		self
	}

	fn fill(&self, template: &str) -> String {
		match &self.attrs {
			None => fill_placeholders(template, &self.values),
			Some((attrs, exclude)) => {
				let mut values = self.values.clone();
				let mut consumed: Vec<String> = exclude.clone();
				// Attributes referenced as `{{attrs.<name>}}` move into their
				// own slot (leading space) instead of the serialized tail.
				for slot in attr_slots(template) {
					let rendered = attrs
						.get(&slot)
						.map(|value| format!(" {}", value))
						.unwrap_or_default();
					consumed.push(slot.clone());
					values.insert(format!("attrs.{}", slot), rendered);
				}
				let tail: Vec<&str> = consumed.iter().map(String::as_str).collect();
				values.insert("attrs".to_string(), attrs.to_html_except(&tail));
				fill_placeholders(template, &values)
			}
		}
	}
}

/// Collect the attribute names referenced as `{{attrs.<name>}}`
fn attr_slots(template: &str) -> Vec<String> {
	let mut slots = Vec::new();
	let mut rest = template;
	while let Some(start) = rest.find("{{attrs.") {
		let after = &rest[start + "{{attrs.".len()..];
		match after.find("}}") {
			Some(end) => {
				let name = &after[..end];
				if !name.is_empty() && !slots.iter().any(|s| s == name) {
					slots.push(name.to_string());
				}
				rest = &after[end + 2..];
			}
			None => break,
		}
	}
	slots
}

/// Single-pass `{{name}}` substitution; unknown names render empty
fn fill_placeholders(template: &str, values: &IndexMap<String, String>) -> String {
	let mut out = String::with_capacity(template.len());
	let mut rest = template;
	while let Some(start) = rest.find("{{") {
		out.push_str(&rest[..start]);
		let after = &rest[start + 2..];
		match after.find("}}") {
			Some(end) => {
				if let Some(value) = values.get(&after[..end]) {
					out.push_str(value);
				}
				rest = &after[end + 2..];
			}
			None => {
				// Unterminated placeholder, emit verbatim
				out.push_str(&rest[start..]);
				rest = "";
			}
		}
	}
	out.push_str(rest);
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_unknown_template_errors() {
		let templates = TemplateSet::new();
		let err = templates.format("missing", &TemplateVars::new()).unwrap_err();
		assert!(matches!(err, HelperError::TemplateNotFound(name) if name == "missing"));
	}

	#[test]
	fn test_unbound_placeholder_renders_empty() {
		let mut templates = TemplateSet::new();
		templates.set("t", "<a{{attrs}}>{{content}}</a>");
		let out = templates.format("t", &TemplateVars::new()).unwrap();
		assert_eq!(out, "<a></a>");
	}

	#[test]
	fn test_merge_overrides_win() {
		let mut base = TemplateSet::from_pairs(&[("a", "base-a"), ("b", "base-b")]);
		base.merge(&TemplateSet::from_pairs(&[("b", "override-b")]));
		assert_eq!(base.get("a"), Some("base-a"));
		assert_eq!(base.get("b"), Some("override-b"));
	}

	#[test]
	fn test_class_split_into_attr_slot() {
		let mut templates = TemplateSet::new();
		templates.set("t", r#"<div class="menu{{attrs.class}}"{{attrs}}></div>"#);
		let attrs = Attributes::from([("class", "open"), ("id", "m")]);
		let out = templates
			.format("t", &TemplateVars::new().attrs(&attrs, &[]))
			.unwrap();
		assert_eq!(out, r#"<div class="menu open" id="m"></div>"#);
	}

	#[test]
	fn test_class_stays_in_attrs_without_slot() {
		let mut templates = TemplateSet::new();
		templates.set("t", "<a{{attrs}}>x</a>");
		let attrs = Attributes::from([("class", "nav-link")]);
		let out = templates
			.format("t", &TemplateVars::new().attrs(&attrs, &[]))
			.unwrap();
		assert_eq!(out, r#"<a class="nav-link">x</a>"#);
	}

	#[test]
	fn test_excluded_keys_not_emitted() {
		let mut templates = TemplateSet::new();
		templates.set("t", "<li{{attrs}}>{{title}}</li>");
		let attrs = Attributes::from([("title", "Home"), ("id", "c")]);
		let out = templates
			.format(
				"t",
				&TemplateVars::new()
					.set("title", "Home")
					.attrs(&attrs, &["title"]),
			)
			.unwrap();
		assert_eq!(out, r#"<li id="c">Home</li>"#);
	}

	#[test]
	fn test_unterminated_placeholder_verbatim() {
		let mut templates = TemplateSet::new();
		templates.set("t", "before {{oops");
		let out = templates.format("t", &TemplateVars::new()).unwrap();
		assert_eq!(out, "before {{oops");
	}
}
