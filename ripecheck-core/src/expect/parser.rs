use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{CheckError, Result};

// Groups must not nest, so anything between a '(' and the next ')' is one
// group body.
static GROUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^()]*)\)").expect("group pattern compiles"));

/// How the expected values of one attribute are compared against the values
/// found in the database object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Exactly one expected and one actual value, compared case-insensitively.
    SingleValue,
    /// Actual values must equal the expected values as a multiset,
    /// order-independent and case-insensitive.
    ExactList,
}

impl std::str::FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "SINGLEVALUE" => Ok(MatchMode::SingleValue),
            "EXACTLIST" => Ok(MatchMode::ExactList),
            _ => Err(format!("Unknown match mode: {}", s)),
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::SingleValue => write!(f, "SINGLEVALUE"),
            MatchMode::ExactList => write!(f, "EXACTLIST"),
        }
    }
}

/// One monitored attribute with its expected values and match mode.
///
/// The attribute keeps the casing the operator wrote; comparisons use
/// [`Expectation::normalized_attribute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectation {
    pub attribute: String,
    pub expected_values: Vec<String>,
    pub mode: MatchMode,
}

impl Expectation {
    pub fn normalized_attribute(&self) -> String {
        self.attribute.to_uppercase()
    }
}

/// Parse an expectation spec string into its expectations.
///
/// The spec is a comma-separated sequence of groups of the form
/// `(<attribute>, <MODE>, <payload>)` where `<MODE>` is `SINGLEVALUE` or
/// `EXACTLIST` and `<payload>` is a bare or quoted token, or a bracketed
/// `[a, b]` list. Parsing is all-or-nothing: the first malformed group fails
/// the whole call.
///
/// The payload is tokenized the same way for both modes, so a SINGLEVALUE
/// group can carry more than one value; that authoring error surfaces at
/// evaluation time as a CRITICAL, not here.
pub fn parse_expectations(spec: &str) -> Result<Vec<Expectation>> {
    let mut expectations = Vec::new();

    for captures in GROUP_RE.captures_iter(spec) {
        let group = captures.get(1).map(|m| m.as_str()).unwrap_or("");
        expectations.push(parse_group(group)?);
    }

    if expectations.is_empty() {
        return Err(CheckError::MalformedSpec(format!(
            "no (attribute, MODE, values) group found in '{}'",
            spec
        )));
    }

    Ok(expectations)
}

fn parse_group(group: &str) -> Result<Expectation> {
    let malformed = || CheckError::MalformedSpec(format!("({})", group));

    // Attribute and mode cannot contain commas, so the first two commas
    // delimit the three fields and the payload keeps its own.
    let mut fields = group.splitn(3, ',');
    let attribute = fields.next().map(str::trim).unwrap_or("");
    let mode_token = fields.next().map(str::trim).unwrap_or("");
    let payload = fields.next().map(str::trim).ok_or_else(|| malformed())?;

    if attribute.is_empty() {
        return Err(malformed());
    }

    let mode: MatchMode = mode_token.parse().map_err(|_| malformed())?;

    let expected_values = parse_payload(payload);
    if expected_values.is_empty() || expected_values.iter().any(|v| v.is_empty()) {
        return Err(malformed());
    }

    Ok(Expectation {
        attribute: attribute.to_string(),
        expected_values,
        mode,
    })
}

fn parse_payload(payload: &str) -> Vec<String> {
    let inner = payload
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(payload);

    if inner.trim().is_empty() {
        return Vec::new();
    }

    inner.split(", ").map(strip_token).collect()
}

fn strip_token(token: &str) -> String {
    token
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim()
        .to_string()
}
