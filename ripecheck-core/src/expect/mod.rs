mod parser;

pub use parser::{parse_expectations, Expectation, MatchMode};
