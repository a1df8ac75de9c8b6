use std::fmt;

use crate::document::ActualValues;
use crate::expect::{Expectation, MatchMode};

/// Why an expectation did not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailReason {
    MissingAttribute,
    TooManyActualValues,
    TooManyExpectedValues,
    ValueMismatch,
    LengthMismatch,
}

impl fmt::Display for FailReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailReason::MissingAttribute => write!(f, "was not found in the DB object"),
            FailReason::TooManyActualValues => {
                write!(f, "has more than one value in the DB object")
            }
            FailReason::TooManyExpectedValues => {
                write!(f, "was given more than one expected value for a SINGLEVALUE match")
            }
            FailReason::ValueMismatch => write!(f, "did not match the expected value(s)"),
            FailReason::LengthMismatch => {
                write!(f, "has a different number of values than expected")
            }
        }
    }
}

/// A failed expectation with everything needed for the alert line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub attribute: String,
    pub reason: FailReason,
    pub expected: Vec<String>,
    pub actual: Vec<String>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Attribute '{}' {} (expected [{}], actual [{}])",
            self.attribute,
            self.reason,
            self.expected.join(", "),
            self.actual.join(", ")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail(Mismatch),
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// Evaluate one expectation against the values collected from the document.
///
/// Lookup over the collected keys is case-insensitive; an attribute with no
/// key at all fails with [`FailReason::MissingAttribute`]. Value comparison
/// is always case-insensitive. EXACTLIST compares as a multiset: both sides
/// are sorted on the raw strings before the pairwise case-folded compare.
pub fn evaluate(expectation: &Expectation, actual: &ActualValues) -> Verdict {
    let wanted = expectation.normalized_attribute();
    let found = actual
        .iter()
        .find(|(key, _)| key.to_uppercase() == wanted)
        .map(|(_, values)| values.as_slice());

    let Some(found) = found else {
        return fail(expectation, FailReason::MissingAttribute, &[]);
    };

    match expectation.mode {
        MatchMode::SingleValue => evaluate_single(expectation, found),
        MatchMode::ExactList => evaluate_list(expectation, found),
    }
}

fn evaluate_single(expectation: &Expectation, found: &[String]) -> Verdict {
    if found.len() > 1 {
        return fail(expectation, FailReason::TooManyActualValues, found);
    }
    if expectation.expected_values.len() > 1 {
        return fail(expectation, FailReason::TooManyExpectedValues, found);
    }

    match (expectation.expected_values.first(), found.first()) {
        (Some(expected), Some(actual)) if expected.to_uppercase() == actual.to_uppercase() => {
            Verdict::Pass
        }
        _ => fail(expectation, FailReason::ValueMismatch, found),
    }
}

fn evaluate_list(expectation: &Expectation, found: &[String]) -> Verdict {
    if expectation.expected_values.len() != found.len() {
        return fail(expectation, FailReason::LengthMismatch, found);
    }

    // Sorting happens on the raw strings; only the element compare is
    // case-folded.
    let mut expected = expectation.expected_values.clone();
    let mut actual = found.to_vec();
    expected.sort();
    actual.sort();

    let matched = expected
        .iter()
        .zip(actual.iter())
        .all(|(e, a)| e.to_uppercase() == a.to_uppercase());

    if matched {
        Verdict::Pass
    } else {
        fail(expectation, FailReason::ValueMismatch, found)
    }
}

fn fail(expectation: &Expectation, reason: FailReason, found: &[String]) -> Verdict {
    Verdict::Fail(Mismatch {
        attribute: expectation.attribute.clone(),
        reason,
        expected: expectation.expected_values.clone(),
        actual: found.to_vec(),
    })
}
