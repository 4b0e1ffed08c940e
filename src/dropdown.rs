//! Dropdown menu normalization and rendering
//!
//! A dropdown menu is described by a loose list of [`MenuEntry`] values in
//! several equivalent shapes (bare strings, positional sequences, keyed
//! forms). [`normalize`] reduces every shape to one [`CanonicalEntry`];
//! [`DropdownRenderer`] maps each canonical entry to its markup template and
//! wraps the concatenated result in the menu container.
//!
//! Malformed input never fails: unknown leading discriminators are read as
//! titles, items without a link target render as disabled placeholders. The
//! only errors that surface are URL resolution failures, which propagate to
//! the caller unchanged.

use tracing::{debug, trace};

use crate::attributes::Attributes;
use crate::error::Result;
use crate::matching;
use crate::template::{TemplateSet, TemplateVars};
use crate::url::{Url, UrlResolver};

/// One positional element of a [`MenuEntry::Seq`]
#[derive(Debug, Clone)]
pub enum MenuValue {
	/// Plain text: a discriminator, a title, or a raw URL
	Text(String),
	/// A structured URL target
	Target(Url),
}

impl MenuValue {
	fn as_text(&self) -> String {
		match self {
			MenuValue::Text(text) => text.clone(),
			MenuValue::Target(Url::Raw(url)) => url.clone(),
			MenuValue::Target(Url::Named { name, .. }) => name.clone(),
		}
	}

	fn into_url(self) -> Url {
		match self {
			MenuValue::Text(text) => Url::Raw(text),
			MenuValue::Target(url) => url,
		}
	}
}

impl From<&str> for MenuValue {
	fn from(text: &str) -> Self {
		MenuValue::Text(text.to_string())
	}
}

impl From<String> for MenuValue {
	fn from(text: String) -> Self {
		MenuValue::Text(text)
	}
}

impl From<Url> for MenuValue {
	fn from(url: Url) -> Self {
		MenuValue::Target(url)
	}
}

/// A raw menu entry: every input shape [`normalize`] accepts.
///
/// Equivalent descriptions of the same row normalize identically:
///
/// ```
/// use bootstrap_view::{MenuEntry, UrlResolver, normalize};
///
/// let urls = UrlResolver::new();
/// let shapes = [
///     MenuEntry::Text("divider".into()),
///     MenuEntry::Seq(vec!["divider".into()], Default::default()),
///     MenuEntry::divider(),
/// ];
/// let entries = normalize(&shapes, &urls).unwrap();
/// assert!(entries.iter().all(|e| e == &entries[0]));
/// ```
#[derive(Debug, Clone)]
pub enum MenuEntry {
	/// The literal `"divider"`, or a plain item title (which may itself be
	/// an `<a>` element)
	Text(String),
	/// Positional form: `["header", title]`, `["divider"]`,
	/// `["link", title, url]` or `[title, url]`, with trailing keyed
	/// options in the attribute set
	Seq(Vec<MenuValue>, Attributes),
	/// Keyed divider form
	Divider(Attributes),
	/// Keyed header form
	Header {
		/// Header text
		title: String,
		/// Extra attributes for the header element
		attrs: Attributes,
	},
	/// Keyed item form; URL handling still applies
	Item {
		/// Item title (may be an embedded `<a>` element when `url` is unset)
		title: String,
		/// Explicit link target
		url: Option<Url>,
		/// Extra attributes for the item element
		attrs: Attributes,
	},
}

impl MenuEntry {
	/// A divider row without attributes
	pub fn divider() -> Self {
		MenuEntry::Divider(Attributes::new())
	}

	/// A header row
	pub fn header(title: impl Into<String>) -> Self {
		MenuEntry::Header {
			title: title.into(),
			attrs: Attributes::new(),
		}
	}

	/// An item without an explicit target (disabled unless the title is an
	/// anchor element)
	pub fn item(title: impl Into<String>) -> Self {
		MenuEntry::Item {
			title: title.into(),
			url: None,
			attrs: Attributes::new(),
		}
	}

	/// A linked item
	pub fn link(title: impl Into<String>, url: impl Into<Url>) -> Self {
		MenuEntry::Item {
			title: title.into(),
			url: Some(url.into()),
			attrs: Attributes::new(),
		}
	}
}

impl From<&str> for MenuEntry {
	fn from(text: &str) -> Self {
		MenuEntry::Text(text.to_string())
	}
}

impl From<String> for MenuEntry {
	fn from(text: String) -> Self {
		MenuEntry::Text(text)
	}
}

/// A normalized menu row
#[derive(Debug, Clone, PartialEq)]
pub enum CanonicalEntry {
	/// Separator row
	Divider {
		/// Attributes for the divider element
		attrs: Attributes,
	},
	/// Section header row
	Header {
		/// Header text
		title: String,
		/// Attributes for the header element
		attrs: Attributes,
	},
	/// Link row
	Item {
		/// Item text
		title: String,
		/// Resolved link target (`"#"` for disabled placeholders)
		url: String,
		/// Attributes for the anchor element
		attrs: Attributes,
		/// Whether the item renders as a disabled placeholder
		disabled: bool,
	},
}

/// Reduce raw menu entries to canonical rows, in input order.
///
/// Explicit URLs are resolved through `urls` (failures propagate). An item
/// without an explicit URL has its title inspected for an embedded `<a>`
/// element: the inner text becomes the title, `href` becomes the target and
/// the remaining tag attributes are merged in (already-present keys win).
/// With neither, the item becomes a disabled `"#"` placeholder.
pub fn normalize(menu: &[MenuEntry], urls: &UrlResolver) -> Result<Vec<CanonicalEntry>> {
	menu.iter().map(|entry| parse_entry(entry, urls)).collect()
}

fn parse_entry(entry: &MenuEntry, urls: &UrlResolver) -> Result<CanonicalEntry> {
	match entry {
		MenuEntry::Text(text) if text == "divider" => Ok(CanonicalEntry::Divider {
			attrs: Attributes::new(),
		}),
		MenuEntry::Text(text) => finish_item(text.clone(), None, Attributes::new(), urls),
		MenuEntry::Seq(values, attrs) => parse_seq(values, attrs, urls),
		MenuEntry::Divider(attrs) => Ok(CanonicalEntry::Divider {
			attrs: attrs.clone(),
		}),
		MenuEntry::Header { title, attrs } => Ok(CanonicalEntry::Header {
			title: title.clone(),
			attrs: attrs.clone(),
		}),
		MenuEntry::Item { title, url, attrs } => {
			finish_item(title.clone(), url.clone(), attrs.clone(), urls)
		}
	}
}

/// Positional-sequence shapes: the first element selects the
/// interpretation; anything unrecognized is read as `[title, url, ...]`.
fn parse_seq(
	values: &[MenuValue],
	attrs: &Attributes,
	urls: &UrlResolver,
) -> Result<CanonicalEntry> {
	let mut values = values.iter();
	let Some(first) = values.next() else {
		debug!("empty positional menu entry, rendering as disabled item");
		return finish_item(String::new(), None, attrs.clone(), urls);
	};

	if let MenuValue::Text(word) = first {
		match word.as_str() {
			"header" => {
				// Trailing values and keyed options are dropped here
				let title = values.next().map(MenuValue::as_text).unwrap_or_default();
				return Ok(CanonicalEntry::Header {
					title,
					attrs: Attributes::new(),
				});
			}
			"divider" => {
				return Ok(CanonicalEntry::Divider {
					attrs: Attributes::new(),
				});
			}
			"link" => {
				let title = values.next().map(MenuValue::as_text).unwrap_or_default();
				let url = values.next().cloned().map(MenuValue::into_url);
				return finish_item(title, url, attrs.clone(), urls);
			}
			_ => {}
		}
	}

	// Default interpretation: [title, url, ...]. A typo'd discriminator
	// lands here and becomes the title.
	trace!(title = %first.as_text(), "reading positional entry as [title, url]");
	let title = first.as_text();
	let url = values.next().cloned().map(MenuValue::into_url);
	finish_item(title, url, attrs.clone(), urls)
}

fn finish_item(
	title: String,
	url: Option<Url>,
	mut attrs: Attributes,
	urls: &UrlResolver,
) -> Result<CanonicalEntry> {
	if let Some(url) = url {
		let resolved = urls.build(&url)?;
		return Ok(CanonicalEntry::Item {
			title,
			url: resolved,
			attrs,
			disabled: false,
		});
	}

	if let Some(anchor) = matching::match_tag("a", &title) {
		let mut href = String::from("#");
		for (name, value) in anchor.attributes {
			if name == "href" {
				href = value;
			} else if !attrs.contains(&name) {
				attrs.insert(name, value);
			}
		}
		return Ok(CanonicalEntry::Item {
			title: anchor.inner,
			url: href,
			attrs,
			disabled: false,
		});
	}

	debug!(title = %title, "menu item without target, rendering disabled");
	attrs.add_class("disabled");
	Ok(CanonicalEntry::Item {
		title,
		url: String::from("#"),
		attrs,
		disabled: true,
	})
}

/// Horizontal alignment of the menu container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuAlign {
	/// Left-aligned (default)
	#[default]
	Left,
	/// Right-aligned
	Right,
}

impl MenuAlign {
	/// Convert alignment to its class suffix
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Left => "left",
			Self::Right => "right",
		}
	}
}

/// Options for the menu container
#[derive(Debug, Clone, Default)]
pub struct DropdownOptions {
	/// Container alignment, folded in as `dropdown-menu-<align>`
	pub align: MenuAlign,
	/// Extra attributes for the container element
	pub attrs: Attributes,
}

/// Renders canonical menu rows through a template set.
///
/// Holds only borrowed, read-only configuration; one renderer serves a
/// single rendering call and can be rebuilt cheaply.
pub struct DropdownRenderer<'a> {
	templates: &'a TemplateSet,
	urls: &'a UrlResolver,
}

impl<'a> DropdownRenderer<'a> {
	/// Create a renderer over a template set and URL resolver
	pub fn new(templates: &'a TemplateSet, urls: &'a UrlResolver) -> Self {
		Self { templates, urls }
	}

	/// Normalize `menu` and render the complete container markup
	pub fn render(&self, menu: &[MenuEntry], options: &DropdownOptions) -> Result<String> {
		let entries = normalize(menu, self.urls)?;
		let content = self.render_entries(&entries)?;
		self.render_container(&content, options)
	}

	/// Render canonical rows to concatenated fragments, in strict order
	pub fn render_entries(&self, entries: &[CanonicalEntry]) -> Result<String> {
		let mut content = String::new();
		for entry in entries {
			match entry {
				CanonicalEntry::Divider { attrs } => {
					content.push_str(&self.templates.format(
						"dropdownMenuDivider",
						&TemplateVars::new().attrs(attrs, &[]),
					)?);
				}
				CanonicalEntry::Header { title, attrs } => {
					content.push_str(&self.templates.format(
						"dropdownMenuHeader",
						&TemplateVars::new()
							.set("content", title.as_str())
							.attrs(attrs, &[]),
					)?);
				}
				CanonicalEntry::Item {
					title,
					url,
					attrs,
					disabled,
				} => {
					let mut attrs = attrs.clone();
					if *disabled {
						attrs.add_class("disabled");
					}
					content.push_str(&self.templates.format(
						"dropdownMenuItem",
						&TemplateVars::new()
							.set("content", title.as_str())
							.set("url", url.as_str())
							.attrs(&attrs, &[]),
					)?);
				}
			}
		}
		Ok(content)
	}

	/// Wrap rendered rows in the aligned menu container
	pub fn render_container(&self, content: &str, options: &DropdownOptions) -> Result<String> {
		let mut attrs = options.attrs.clone();
		attrs.add_class(&format!("dropdown-menu-{}", options.align.as_str()));
		self.templates.format(
			"dropdownMenu",
			&TemplateVars::new().set("content", content).attrs(&attrs, &[]),
		)
	}
}
