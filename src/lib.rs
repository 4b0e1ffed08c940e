//! # Bootstrap View
//!
//! Bootstrap-styled markup helpers for server-rendered views.
//!
//! ## Features
//!
//! - Dropdown menus from loosely-shaped descriptions: dividers, headers and
//!   links in several equivalent forms, normalized to canonical rows and
//!   rendered through overridable string templates
//! - HTML widgets: icons (with `i:` shorthand expansion in titles), badges,
//!   dismissible alerts, tooltips, stacked progress bars, links
//! - Breadcrumb trails
//! - Form layout: horizontal column classes, buttons, input groups with
//!   text/icon/button/dropdown addons
//! - Named-route URL resolution behind every link target
//!
//! Helpers are configured once at construction (base defaults merged with
//! caller overrides) and hold no shared mutable state; malformed input
//! degrades to sensible defaults instead of failing, and only URL
//! resolution errors surface.
//!
//! ## Example
//!
//! ```
//! use bootstrap_view::{HtmlHelper, MenuEntry, UrlResolver};
//!
//! let mut urls = UrlResolver::new();
//! urls.register("articles:index", "/articles");
//!
//! let html = HtmlHelper::new(urls);
//! let menu = [
//!     MenuEntry::header("Reading"),
//!     MenuEntry::link("All articles", "/articles"),
//!     "divider".into(),
//!     "Coming soon".into(),
//! ];
//!
//! let markup = html.dropdown(&menu).unwrap();
//! assert!(markup.starts_with(r#"<div class="dropdown-menu dropdown-menu-left">"#));
//! assert!(markup.contains(r#"<h6 class="dropdown-header">Reading</h6>"#));
//! assert!(markup.contains(r#"class="dropdown-item disabled""#));
//! ```

pub mod attributes;
pub mod breadcrumbs;
pub mod dropdown;
pub mod error;
pub mod form;
pub mod html;
pub mod icon;
pub mod matching;
pub mod template;
pub mod url;

pub use attributes::Attributes;
pub use breadcrumbs::{Breadcrumbs, Crumb};
pub use dropdown::{
	CanonicalEntry, DropdownOptions, DropdownRenderer, MenuAlign, MenuEntry, MenuValue, normalize,
};
pub use error::{HelperError, Result};
pub use form::{
	ColumnRole, ColumnSizes, ControlOptions, DropdownButtonOptions, FormHelper, FormHelperConfig,
	FormOptions, LabelMode,
};
pub use html::{
	AlertOptions, HtmlHelper, HtmlHelperConfig, ProgressBar, TooltipOptions, default_templates,
};
pub use icon::{IconFont, expand_easy_icons};
pub use matching::{TagMatch, match_tag};
pub use template::{TemplateSet, TemplateVars};
pub use url::{Url, UrlResolver};
