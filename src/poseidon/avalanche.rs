//! Avalanche measurement between two preimages.
//!
//! This is a regression check that input changes propagate to the digest.
//! It says nothing about cryptographic strength.

use super::hash::hash;
use super::preimage::Preimage;
use crate::error::OracleResult;
use crate::field::{Fr, MODULUS_BITS};
use serde::Serialize;

/// Digests of two preimages and the number of differing bits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvalancheReport {
    /// Digest of the original preimage.
    pub original_digest: Fr,
    /// Digest of the modified preimage.
    pub modified_digest: Fr,
    /// Popcount of `original XOR modified`.
    pub hamming_weight: u32,
    /// Bit length of the field modulus.
    pub total_bits: u32,
}

/// Number of bit positions in which `a` and `b` differ.
pub fn hamming_distance(a: &Fr, b: &Fr) -> u32 {
    let diff = a.as_biguint() ^ b.as_biguint();
    diff.to_u64_digits().iter().map(|d| d.count_ones()).sum()
}

/// Hash both preimages and compare the digests.
pub fn avalanche<S: AsRef<str>>(original: &[S], modified: &[S]) -> OracleResult<AvalancheReport> {
    let original_digest = hash(&Preimage::parse(original)?);
    let modified_digest = hash(&Preimage::parse(modified)?);
    let hamming_weight = hamming_distance(&original_digest, &modified_digest);

    Ok(AvalancheReport {
        original_digest,
        modified_digest,
        hamming_weight,
        total_bits: MODULUS_BITS,
    })
}
