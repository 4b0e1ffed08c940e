//! HTML attribute sets with deterministic ordering
//!
//! Every helper collects candidate attributes into an [`Attributes`] map and
//! serializes it once per emitted element. Insertion order is preserved so
//! rendered markup is stable across calls.

use indexmap::IndexMap;

/// An ordered set of HTML attribute candidates.
///
/// # Examples
///
/// ```
/// use bootstrap_view::Attributes;
///
/// let mut attrs = Attributes::new();
/// attrs.insert("id", "menu");
/// attrs.add_class("dropdown-menu");
/// attrs.add_class("dropdown-menu");
///
/// assert_eq!(attrs.class(), Some("dropdown-menu"));
/// assert_eq!(attrs.to_html(), r#" id="menu" class="dropdown-menu""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
	values: IndexMap<String, String>,
}

impl Attributes {
	/// Create an empty attribute set
	pub fn new() -> Self {
		Self {
			values: IndexMap::new(),
		}
	}

	/// Number of attributes in the set
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Whether the set holds no attributes
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Set an attribute, replacing any previous value
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
		self.values.insert(name.into(), value.into());
		self
	}

	/// Consuming variant of [`insert`](Self::insert) for call-site chaining
	pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(name, value);
		self
	}

	/// Get an attribute value
	pub fn get(&self, name: &str) -> Option<&str> {
		self.values.get(name).map(String::as_str)
	}

	/// Remove an attribute, returning its value
	pub fn remove(&mut self, name: &str) -> Option<String> {
		self.values.shift_remove(name)
	}

	/// Whether an attribute is present
	pub fn contains(&self, name: &str) -> bool {
		self.values.contains_key(name)
	}

	/// The current `class` attribute value, if any
	pub fn class(&self) -> Option<&str> {
		self.get("class")
	}

	/// Append class tokens to the `class` attribute.
	///
	/// Tokens are whitespace-separated; a token already present is never
	/// added twice, so repeated calls are idempotent.
	///
	/// # Examples
	///
	/// ```
	/// use bootstrap_view::Attributes;
	///
	/// let mut attrs = Attributes::new();
	/// attrs.add_class("dropdown-item disabled");
	/// attrs.add_class("disabled");
	/// assert_eq!(attrs.class(), Some("dropdown-item disabled"));
	/// ```
	pub fn add_class(&mut self, classes: &str) -> &mut Self {
		let mut current: Vec<String> = self
			.class()
			.map(|c| c.split_whitespace().map(str::to_string).collect())
			.unwrap_or_default();
		for token in classes.split_whitespace() {
			if !current.iter().any(|t| t == token) {
				current.push(token.to_string());
			}
		}
		if !current.is_empty() {
			self.values.insert("class".to_string(), current.join(" "));
		}
		self
	}

	/// Fill in attributes from `defaults` without overriding existing keys
	pub fn merge_defaults(&mut self, defaults: &Attributes) -> &mut Self {
		for (name, value) in &defaults.values {
			if !self.values.contains_key(name) {
				self.values.insert(name.clone(), value.clone());
			}
		}
		self
	}

	/// Iterate over `(name, value)` pairs in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Serialize the whole set as ` name="value"` pairs
	pub fn to_html(&self) -> String {
		self.to_html_except(&[])
	}

	/// Serialize the set, skipping the given attribute names.
	///
	/// Keys consumed by a dedicated template slot (`title`, `url`, ...) are
	/// excluded here so they are not emitted twice.
	pub fn to_html_except(&self, exclude: &[&str]) -> String {
		let mut out = String::new();
		for (name, value) in &self.values {
			if exclude.iter().any(|e| e == name) {
				continue;
			}
			out.push(' ');
			out.push_str(name);
			out.push_str("=\"");
			out.push_str(&html_escape::encode_double_quoted_attribute(value));
			out.push('"');
		}
		out
	}
}

impl<const N: usize> From<[(&str, &str); N]> for Attributes {
	fn from(pairs: [(&str, &str); N]) -> Self {
		let mut attrs = Attributes::new();
		for (name, value) in pairs {
			attrs.insert(name, value);
		}
		attrs
	}
}

impl FromIterator<(String, String)> for Attributes {
	fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
		Self {
			values: iter.into_iter().collect(),
		}
	}
}
