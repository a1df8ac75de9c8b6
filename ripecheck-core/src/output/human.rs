use super::OutputFormatter;
use crate::check::CheckResult;

/// Renders the single `STATUS - message` line monitoring frameworks scrape.
#[derive(Default)]
pub struct HumanFormatter;

impl HumanFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_result(&self, result: &CheckResult) -> String {
        format!("{} - {}", result.status, result.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::CheckStatus;

    #[test]
    fn test_plugin_line() {
        let formatter = HumanFormatter::new();

        let ok = CheckResult::ok("All values from the DB were as expected");
        assert_eq!(
            formatter.format_result(&ok),
            "OK - All values from the DB were as expected"
        );

        let unknown = CheckResult::unknown("Malformed expectation spec: (x)");
        let line = formatter.format_result(&unknown);
        assert!(line.starts_with("UNKNOWN - "));
        assert_eq!(unknown.status, CheckStatus::Unknown);
    }
}
