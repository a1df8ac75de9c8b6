use super::OutputFormatter;
use crate::check::CheckResult;

pub struct JsonFormatter {
    pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_result(&self, result: &CheckResult) -> String {
        let serialized = if self.pretty {
            serde_json::to_string_pretty(result)
        } else {
            serde_json::to_string(result)
        };
        serialized.unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let result = CheckResult::critical("Attribute 'status' did not match");
        let compact = JsonFormatter::new().compact().format_result(&result);

        let parsed: CheckResult = serde_json::from_str(&compact).unwrap();
        assert_eq!(parsed, result);
        assert!(compact.contains("\"CRITICAL\""));
    }
}
