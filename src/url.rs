//! URL descriptors and named-route resolution
//!
//! Helpers never build URLs themselves: every link goes through a
//! [`UrlResolver`]. A [`Url`] is either a raw string (passed through
//! untouched) or a named route reference whose `{param}` placeholders are
//! substituted from the supplied parameters. Resolution failures propagate
//! unchanged through every helper.

use std::collections::HashMap;

use crate::error::{HelperError, Result};

/// An abstract URL: raw string or named route reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Url {
	/// A literal URL, used as-is
	Raw(String),
	/// A registered route name plus its parameters
	Named {
		/// Route name as registered with the resolver
		name: String,
		/// `(param, value)` pairs for pattern substitution
		params: Vec<(String, String)>,
	},
}

impl Url {
	/// A raw URL used verbatim
	pub fn raw(url: impl Into<String>) -> Self {
		Url::Raw(url.into())
	}

	/// A named route reference
	///
	/// # Examples
	///
	/// ```
	/// use bootstrap_view::{Url, UrlResolver};
	///
	/// let mut urls = UrlResolver::new();
	/// urls.register("articles:view", "/articles/{id}");
	///
	/// let url = Url::named("articles:view", &[("id", "12")]);
	/// assert_eq!(urls.build(&url).unwrap(), "/articles/12");
	/// ```
	pub fn named<S: AsRef<str>>(name: impl Into<String>, params: &[(S, S)]) -> Self {
		Url::Named {
			name: name.into(),
			params: params
				.iter()
				.map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
				.collect(),
		}
	}
}

impl From<&str> for Url {
	fn from(url: &str) -> Self {
		Url::Raw(url.to_string())
	}
}

impl From<String> for Url {
	fn from(url: String) -> Self {
		Url::Raw(url)
	}
}

/// Registry of named route patterns.
///
/// Patterns use `{param}` placeholders. The resolver is request-scoped,
/// read-only configuration: build it once, hand it to the helpers.
#[derive(Debug, Clone, Default)]
pub struct UrlResolver {
	routes: HashMap<String, String>,
}

impl UrlResolver {
	/// Create an empty resolver
	pub fn new() -> Self {
		Self {
			routes: HashMap::new(),
		}
	}

	/// Register a route pattern under a name
	pub fn register(&mut self, name: impl Into<String>, pattern: impl Into<String>) -> &mut Self {
		self.routes.insert(name.into(), pattern.into());
		self
	}

	/// Whether a route name is registered
	pub fn has_route(&self, name: &str) -> bool {
		self.routes.contains_key(name)
	}

	/// Resolve a [`Url`] to a concrete URL string.
	///
	/// Raw URLs pass through untouched. Named references look up the
	/// registered pattern and substitute every `{param}`; an unknown route
	/// name or a missing parameter is an error.
	pub fn build(&self, url: &Url) -> Result<String> {
		match url {
			Url::Raw(raw) => Ok(raw.clone()),
			Url::Named { name, params } => {
				let pattern = self
					.routes
					.get(name)
					.ok_or_else(|| HelperError::RouteNotFound(name.clone()))?;
				substitute(pattern, name, params)
			}
		}
	}
}

/// Single-pass `{param}` substitution over a route pattern
fn substitute(pattern: &str, route: &str, params: &[(String, String)]) -> Result<String> {
	let mut out = String::with_capacity(pattern.len());
	let mut rest = pattern;
	while let Some(start) = rest.find('{') {
		out.push_str(&rest[..start]);
		let after = &rest[start + 1..];
		let end = after.find('}').ok_or_else(|| {
			HelperError::RouteParam(format!("unterminated parameter in route '{}'", route))
		})?;
		let param = &after[..end];
		let value = params
			.iter()
			.find(|(name, _)| name == param)
			.map(|(_, value)| value.as_str())
			.ok_or_else(|| {
				HelperError::RouteParam(format!("missing '{}' for route '{}'", param, route))
			})?;
		out.push_str(value);
		rest = &after[end + 1..];
	}
	out.push_str(rest);
	Ok(out)
}
