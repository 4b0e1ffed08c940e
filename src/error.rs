//! Error types for bootstrap-view helpers

use thiserror::Error;

/// Error type for helper operations
///
/// Helpers degrade malformed input to defaults instead of failing; the only
/// errors that surface are missing templates and URL resolution failures,
/// which propagate to the caller unchanged.
#[derive(Debug, Error)]
pub enum HelperError {
	/// Named template missing from the active template set
	#[error("Unknown template: {0}")]
	TemplateNotFound(String),

	/// Named route missing from the URL resolver
	#[error("Unknown route: {0}")]
	RouteNotFound(String),

	/// Route pattern parameter missing or malformed
	#[error("Invalid route parameter: {0}")]
	RouteParam(String),
}

/// Result type for helper operations
pub type Result<T> = std::result::Result<T, HelperError>;
