//! Whole-string tag matching
//!
//! Used by the dropdown pipeline to detect menu item titles that already
//! carry their own anchor markup, so the link target and attributes can be
//! lifted out of the title.

use once_cell::sync::Lazy;
use regex::Regex;

static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r#"([A-Za-z][A-Za-z0-9:._-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
		.expect("Invalid attribute regex pattern")
});

/// A successful [`match_tag`] result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
	/// Content between the opening and closing tag
	pub inner: String,
	/// Attributes of the opening tag, in source order
	pub attributes: Vec<(String, String)>,
}

/// Match `text` against `<tag ...>inner</tag>` as a whole string.
///
/// Surrounding whitespace is tolerated; anything else around the element
/// makes the match fail. Returns the inner content and the opening tag's
/// attributes.
///
/// # Examples
///
/// ```
/// use bootstrap_view::match_tag;
///
/// let m = match_tag("a", r#"<a href="/home" class="nav">Home</a>"#).unwrap();
/// assert_eq!(m.inner, "Home");
/// assert_eq!(m.attributes[0], ("href".to_string(), "/home".to_string()));
///
/// assert!(match_tag("a", "plain text").is_none());
/// ```
pub fn match_tag(tag: &str, text: &str) -> Option<TagMatch> {
	let pattern = format!(
		r"(?s)^\s*<{tag}((?:\s[^>]*)?)>(.*)</{tag}>\s*$",
		tag = regex::escape(tag)
	);
	let re = Regex::new(&pattern).ok()?;
	let caps = re.captures(text)?;

	let raw_attrs = caps.get(1).map_or("", |m| m.as_str());
	let attributes = ATTRIBUTE
		.captures_iter(raw_attrs)
		.map(|attr| {
			let name = attr[1].to_string();
			let value = attr
				.get(2)
				.or_else(|| attr.get(3))
				.map_or(String::new(), |m| m.as_str().to_string());
			(name, value)
		})
		.collect();

	Some(TagMatch {
		inner: caps.get(2).map_or("", |m| m.as_str()).to_string(),
		attributes,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_anchor_with_attributes() {
		let m = match_tag("a", r#"<a href="/x" data-kind='nav'>Click</a>"#).unwrap();
		assert_eq!(m.inner, "Click");
		assert_eq!(
			m.attributes,
			vec![
				("href".to_string(), "/x".to_string()),
				("data-kind".to_string(), "nav".to_string()),
			]
		);
	}

	#[test]
	fn test_bare_tag_without_attributes() {
		let m = match_tag("a", "<a>Click</a>").unwrap();
		assert_eq!(m.inner, "Click");
		assert!(m.attributes.is_empty());
	}

	#[test]
	fn test_surrounding_whitespace_tolerated() {
		let m = match_tag("a", "  <a href=\"/x\">Click</a>\n").unwrap();
		assert_eq!(m.inner, "Click");
	}

	#[test]
	fn test_partial_match_rejected() {
		assert!(match_tag("a", r#"See <a href="/x">this</a> link"#).is_none());
		assert!(match_tag("a", "no markup at all").is_none());
	}

	#[test]
	fn test_other_tags() {
		let m = match_tag("span", r#"<span class="caret"></span>"#).unwrap();
		assert_eq!(m.inner, "");
		assert_eq!(m.attributes[0].0, "class");
	}
}
