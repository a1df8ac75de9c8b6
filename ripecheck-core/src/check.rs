use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::{flatten, Node};
use crate::expect::Expectation;
use crate::matcher::{evaluate, Verdict};

/// Monitoring-plugin status levels with their conventional exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    Ok,
    Critical,
    Unknown,
}

impl CheckStatus {
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckStatus::Ok => 0,
            CheckStatus::Critical => 2,
            CheckStatus::Unknown => 3,
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Ok => write!(f, "OK"),
            CheckStatus::Critical => write!(f, "CRITICAL"),
            CheckStatus::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// The terminal artifact of a check run, handed to the reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub status: CheckStatus,
    pub message: String,
}

impl CheckResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Ok,
            message: message.into(),
        }
    }

    pub fn critical(message: impl Into<String>) -> Self {
        Self {
            status: CheckStatus::Critical,
            message: message.into(),
        }
    }

    pub fn unknown(cause: impl fmt::Display) -> Self {
        Self {
            status: CheckStatus::Unknown,
            message: cause.to_string(),
        }
    }
}

/// Evaluate all expectations against a fetched document.
///
/// The document is flattened once against the union of requested attributes,
/// then expectations are evaluated in input order. The first failure becomes
/// the CRITICAL result; later expectations are not inspected.
pub fn run_check(expectations: &[Expectation], doc: &Node) -> CheckResult {
    let attributes: HashSet<String> = expectations
        .iter()
        .map(Expectation::normalized_attribute)
        .collect();

    let actual = flatten(doc, &attributes);
    debug!(
        requested = attributes.len(),
        found = actual.len(),
        "Flattened response document"
    );

    for expectation in expectations {
        if let Verdict::Fail(mismatch) = evaluate(expectation, &actual) {
            debug!(attribute = %expectation.attribute, reason = ?mismatch.reason, "Expectation failed");
            return CheckResult::critical(mismatch.to_string());
        }
    }

    CheckResult::ok("All values from the DB were as expected")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expect::parse_expectations;
    use serde_json::json;

    fn ripe_doc(attributes: serde_json::Value) -> Node {
        Node::from(json!({
            "objects": {
                "object": [{
                    "attributes": {"attribute": attributes}
                }]
            }
        }))
    }

    #[test]
    fn test_all_expectations_met() {
        let expectations = parse_expectations("(status, SINGLEVALUE, ACTIVE)").unwrap();
        let doc = ripe_doc(json!([{"name": "status", "value": "ACTIVE"}]));

        let result = run_check(&expectations, &doc);
        assert_eq!(result.status, CheckStatus::Ok);
        assert_eq!(result.message, "All values from the DB were as expected");
    }

    #[test]
    fn test_mismatch_is_critical_and_names_the_attribute() {
        let expectations = parse_expectations("(status, SINGLEVALUE, ACTIVE)").unwrap();
        let doc = ripe_doc(json!([{"name": "status", "value": "INACTIVE"}]));

        let result = run_check(&expectations, &doc);
        assert_eq!(result.status, CheckStatus::Critical);
        assert!(result.message.contains("status"));
        assert!(result.message.contains("ACTIVE"));
        assert!(result.message.contains("INACTIVE"));
    }

    #[test]
    fn test_first_failure_is_reported_not_later_ones() {
        let expectations = parse_expectations(
            "(admin-c, SINGLEVALUE, AB1-TEST), (status, SINGLEVALUE, ACTIVE)",
        )
        .unwrap();
        // admin-c is absent, status would also fail; only admin-c is surfaced.
        let doc = ripe_doc(json!([{"name": "status", "value": "INACTIVE"}]));

        let result = run_check(&expectations, &doc);
        assert_eq!(result.status, CheckStatus::Critical);
        assert!(result.message.contains("admin-c"));
        assert!(!result.message.contains("status"));
    }

    #[test]
    fn test_exact_list_end_to_end() {
        let expectations =
            parse_expectations("(mnt-by, EXACTLIST, [M2-MNT, M1-MNT])").unwrap();
        let doc = ripe_doc(json!([
            {"name": "mnt-by", "value": "M1-MNT"},
            {"name": "mnt-by", "value": "M2-MNT"}
        ]));

        let result = run_check(&expectations, &doc);
        assert_eq!(result.status, CheckStatus::Ok);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CheckStatus::Ok.exit_code(), 0);
        assert_eq!(CheckStatus::Critical.exit_code(), 2);
        assert_eq!(CheckStatus::Unknown.exit_code(), 3);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(CheckStatus::Ok.to_string(), "OK");
        assert_eq!(CheckStatus::Critical.to_string(), "CRITICAL");
        assert_eq!(CheckStatus::Unknown.to_string(), "UNKNOWN");
    }
}
