//! GitHub source-URL validation and display-name derivation.
//!
//! A valid import source looks like `https://<host>/<owner>/<repo>`, with an
//! optional trailing slash. A `.git` suffix on the repository segment is
//! accepted and stripped when deriving the display name.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Anchored shape of an importable repository URL. The repo segment is
/// captured so the display name can be derived from the same match.
const SOURCE_URL_PATTERN: &str = r"^https://[A-Za-z0-9.-]+/[A-Za-z0-9._-]+/([A-Za-z0-9._-]+?)(?:\.git)?/?$";

static SOURCE_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SOURCE_URL_PATTERN).expect("valid regex"));

/// Validate a source URL and derive the project display name from it.
///
/// Returns the last path segment with any `.git` suffix removed, e.g.
/// `https://github.com/acme/widget.git` -> `widget`.
pub fn derive_display_name(source_url: &str) -> Result<String, CoreError> {
    let captures = SOURCE_URL_RE.captures(source_url).ok_or_else(|| {
        CoreError::Validation(format!("Invalid repository URL: {source_url}"))
    })?;
    // Group 1 is the repo segment; the regex guarantees it is non-empty.
    Ok(captures[1].to_string())
}

/// Check a source URL against the repository-URL shape without deriving
/// anything. Used by the request-body validator.
pub fn is_valid_source_url(source_url: &str) -> bool {
    SOURCE_URL_RE.is_match(source_url)
}
