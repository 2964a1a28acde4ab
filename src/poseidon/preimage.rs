//! Preimage parsing and normalization.

use super::{RATE, WIDTH};
use crate::error::{ErrorCode, OracleResult};
use crate::field::Fr;

/// Strip every `.` from a numeral.
///
/// Inputs sometimes arrive formatted as decimals ("12.3"); the digits that
/// remain are what gets hashed.
pub fn normalize_numeral(raw: &str) -> String {
    raw.chars().filter(|&c| c != '.').collect()
}

// Errors report the element as the caller wrote it, dots included.
fn parse_element(raw: &str) -> OracleResult<Fr> {
    Fr::from_decimal(&normalize_numeral(raw)).map_err(|e| match e {
        ErrorCode::E100_InvalidNumeral(_) => ErrorCode::E100_InvalidNumeral(raw.to_string()),
        other => other,
    })
}

/// A validated two-element preimage, reduced into the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preimage([Fr; RATE]);

impl Preimage {
    /// Build a preimage from field elements.
    pub fn new(first: Fr, second: Fr) -> Self {
        Preimage([first, second])
    }

    /// Parse a preimage from decimal numerals.
    ///
    /// Requires exactly two elements. Each one is `.`-stripped, then must be
    /// a non-empty run of ASCII digits; it is reduced modulo `p`.
    pub fn parse<S: AsRef<str>>(elements: &[S]) -> OracleResult<Self> {
        if elements.len() != RATE {
            return Err(ErrorCode::E102_InvalidArity(elements.len() as u64));
        }
        let first = parse_element(elements[0].as_ref())?;
        let second = parse_element(elements[1].as_ref())?;
        Ok(Preimage([first, second]))
    }

    /// The reduced elements.
    pub fn elements(&self) -> &[Fr; RATE] {
        &self.0
    }

    /// Initial permutation state: the preimage followed by a zero capacity lane.
    pub fn initial_state(&self) -> [Fr; WIDTH] {
        let [a, b] = &self.0;
        [a.clone(), b.clone(), Fr::zero()]
    }
}
