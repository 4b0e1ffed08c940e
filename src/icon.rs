//! Icon fonts and the `i:` shorthand
//!
//! Titles and labels accepted by the helpers may carry `i:<name>` tokens
//! (`"i:plus Add"`) that expand to a rendered icon element. Expansion
//! reports whether a conversion happened so callers can adjust their
//! escaping behavior only for converted strings.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static EASY_ICON: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"(^|\s+)i:([A-Za-z0-9_-]+)(\s*)").expect("Invalid icon shorthand regex pattern")
});

/// Icon font family used by [`icon`](crate::HtmlHelper::icon) rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconFont {
	/// Twitter Bootstrap 3 glyphicons
	Glyphicon,
	/// Bootstrap Icons
	Bootstrap,
	/// Font Awesome 4
	#[default]
	Awesome,
	/// Font Awesome 5 Solid
	Awesome5Solid,
	/// Font Awesome 5 Regular
	Awesome5Regular,
	/// Font Awesome 5 Light
	Awesome5Light,
	/// Font Awesome 5 Duotone
	Awesome5Duotone,
	/// Font Awesome 5 Brand
	Awesome5Brand,
	/// Font Awesome 6 Solid
	Awesome6Solid,
	/// Font Awesome 6 Regular
	Awesome6Regular,
	/// Font Awesome 6 Light
	Awesome6Light,
	/// Font Awesome 6 Duotone
	Awesome6Duotone,
	/// Font Awesome 6 Thin
	Awesome6Thin,
	/// Font Awesome 6 Brand
	Awesome6Brand,
}

impl IconFont {
	/// Short identifier for the font family
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Glyphicon => "glyphicon",
			Self::Bootstrap => "bi",
			Self::Awesome => "fa",
			Self::Awesome5Solid => "fas",
			Self::Awesome5Regular => "far",
			Self::Awesome5Light => "fal",
			Self::Awesome5Duotone => "fad",
			Self::Awesome5Brand => "fab",
			Self::Awesome6Solid => "fa-solid",
			Self::Awesome6Regular => "fa-regular",
			Self::Awesome6Light => "fa-light",
			Self::Awesome6Duotone => "fa-duotone",
			Self::Awesome6Thin => "fa-thin",
			Self::Awesome6Brand => "fa-brands",
		}
	}

	/// Class prefix the icon name is appended to
	///
	/// # Examples
	///
	/// ```
	/// use bootstrap_view::IconFont;
	///
	/// assert_eq!(IconFont::Glyphicon.prefix(), "glyphicon glyphicon-");
	/// assert_eq!(IconFont::Awesome6Brand.prefix(), "fa-brands fa-");
	/// ```
	pub fn prefix(self) -> &'static str {
		match self {
			Self::Glyphicon => "glyphicon glyphicon-",
			Self::Bootstrap => "bi bi-",
			Self::Awesome => "fa fa-",
			Self::Awesome5Solid => "fas fa-",
			Self::Awesome5Regular => "far fa-",
			Self::Awesome5Light => "fal fa-",
			Self::Awesome5Duotone => "fad fa-",
			Self::Awesome5Brand => "fab fa-",
			Self::Awesome6Solid => "fa-solid fa-",
			Self::Awesome6Regular => "fa-regular fa-",
			Self::Awesome6Light => "fa-light fa-",
			Self::Awesome6Duotone => "fa-duotone fa-",
			Self::Awesome6Thin => "fa-thin fa-",
			Self::Awesome6Brand => "fa-brands fa-",
		}
	}
}

/// Expand every `i:<name>` token in `text` using `render`.
///
/// Token names are `[A-Za-z0-9_-]+`; tokens are recognized at string
/// boundaries or after whitespace. Whitespace around tokens is preserved.
/// Returns the expanded string and whether any token was converted.
pub fn expand_easy_icons<F>(text: &str, mut render: F) -> (String, bool)
where
	F: FnMut(&str) -> String,
{
	let mut converted = false;
	let expanded = EASY_ICON.replace_all(text, |caps: &Captures| {
		converted = true;
		format!("{}{}{}", &caps[1], render(&caps[2]), &caps[3])
	});
	(expanded.into_owned(), converted)
}
