//! Validation of user-supplied query components before URL assembly

use crate::error::{CheckError, Result};

/// Validate one path component of a RIPE REST query (source, object type, or
/// primary key).
///
/// Components end up in the request URL verbatim, so anything outside the
/// character set RIPE primary keys actually use (`A-Z a-z 0-9 . _ : / -`,
/// slash included for route keys) is rejected rather than escaped, and `..`
/// never passes.
pub fn validate_query_component(kind: &str, value: &str) -> Result<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(CheckError::InvalidQuery(format!("{} is empty", kind)));
    }

    if value.contains("..") {
        return Err(CheckError::InvalidQuery(format!(
            "{} '{}' contains a path traversal sequence",
            kind, value
        )));
    }

    let valid = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | ':' | '/' | '-'));
    if !valid {
        return Err(CheckError::InvalidQuery(format!(
            "{} '{}' contains characters outside [A-Za-z0-9._:/-]",
            kind, value
        )));
    }

    Ok(value.to_string())
}
