pub mod check;
pub mod document;
pub mod error;
pub mod expect;
pub mod matcher;
pub mod output;
pub mod ripe;
pub mod validation;

pub use error::{CheckError, Result};
pub use validation::validate_query_component;

pub use check::{run_check, CheckResult, CheckStatus};
pub use document::{flatten, ActualValues, Node};
pub use expect::{parse_expectations, Expectation, MatchMode};
pub use matcher::{evaluate, FailReason, Mismatch, Verdict};
pub use ripe::RipeClient;

pub use output::{OutputFormat, OutputFormatter};
