//! Hash engine: preimage in, digest out.

use super::params::PermutationParams;
use super::permute::permute_with;
use super::preimage::Preimage;
use crate::error::OracleResult;
use crate::field::Fr;
use tracing::debug_span;

/// Hash a preimage with explicit parameters. The digest is lane 0 of the
/// permuted state.
pub fn hash_with(params: &PermutationParams, preimage: &Preimage) -> Fr {
    let _span = debug_span!("poseidon2_hash").entered();
    let [digest, _, _] = permute_with(params, &preimage.initial_state());
    digest
}

/// Hash a preimage with the default parameters.
pub fn hash(preimage: &Preimage) -> Fr {
    hash_with(&PermutationParams::DEFAULT, preimage)
}

/// Hash decimal numerals and return the digest as a decimal string.
///
/// Fails with `E102_InvalidArity` unless exactly two elements are given, and
/// with `E100_InvalidNumeral`/`E101_EmptyNumeral` for malformed numerals.
/// Nothing is hashed until both elements validate.
pub fn hash_preimage<S: AsRef<str>>(elements: &[S]) -> OracleResult<String> {
    let preimage = Preimage::parse(elements)?;
    Ok(hash(&preimage).to_decimal())
}

/// Hash two decimal numerals.
pub fn hash_pair(first: &str, second: &str) -> OracleResult<String> {
    hash_preimage(&[first, second])
}
