//! Permutation parameters and round classification.

use super::{
    FULL_ROUNDS, FULL_ROUND_OFFSETS, MIX_MATRIX, PARTIAL_ROUNDS, PARTIAL_ROUND_OFFSETS,
    SBOX_ALPHA, TOTAL_ROUNDS, WIDTH,
};
use serde::Serialize;

/// Whether a round applies the S-box to every lane or only to lane 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundKind {
    /// S-box on all lanes.
    Full,
    /// S-box on lane 0 only.
    Partial,
}

impl RoundKind {
    /// Classify a round index with the default parameters.
    pub fn for_round(round: usize) -> RoundKind {
        PermutationParams::DEFAULT.round_kind(round)
    }

    /// Lowercase name, as used in traces and test vectors.
    pub fn name(&self) -> &'static str {
        match self {
            RoundKind::Full => "full",
            RoundKind::Partial => "partial",
        }
    }
}

/// Parameter set driving the permutation.
///
/// All values are fixed at build time from `metadata.json`; the struct only
/// exists so they can be passed explicitly instead of read from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PermutationParams {
    /// Number of full rounds, half before and half after the partial rounds.
    pub full_rounds: usize,
    /// Number of partial rounds.
    pub partial_rounds: usize,
    /// S-box exponent.
    pub sbox_alpha: u64,
    /// Lane offsets added to the round index in full rounds.
    pub full_round_offsets: [u64; WIDTH],
    /// Lane offsets added to the round index in partial rounds.
    pub partial_round_offsets: [u64; WIDTH],
    /// Linear mixing matrix.
    pub mix_matrix: [[u64; WIDTH]; WIDTH],
}

impl PermutationParams {
    /// The parameter set generated from `metadata.json`.
    pub const DEFAULT: PermutationParams = PermutationParams {
        full_rounds: FULL_ROUNDS,
        partial_rounds: PARTIAL_ROUNDS,
        sbox_alpha: SBOX_ALPHA,
        full_round_offsets: FULL_ROUND_OFFSETS,
        partial_round_offsets: PARTIAL_ROUND_OFFSETS,
        mix_matrix: MIX_MATRIX,
    };

    /// Total number of rounds.
    pub const fn total_rounds(&self) -> usize {
        self.full_rounds + self.partial_rounds
    }

    /// Classify `round`: the first and last `full_rounds / 2` rounds are full.
    pub fn round_kind(&self, round: usize) -> RoundKind {
        let half_full = self.full_rounds / 2;
        if round < half_full || round >= half_full + self.partial_rounds {
            RoundKind::Full
        } else {
            RoundKind::Partial
        }
    }

    /// Constants added to each lane in `round`.
    pub fn round_constants(&self, round: usize) -> [u64; WIDTH] {
        let offsets = match self.round_kind(round) {
            RoundKind::Full => &self.full_round_offsets,
            RoundKind::Partial => &self.partial_round_offsets,
        };
        let mut constants = [0u64; WIDTH];
        for (c, offset) in constants.iter_mut().zip(offsets) {
            *c = round as u64 + offset;
        }
        constants
    }
}

impl Default for PermutationParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

const _: () = assert!(PermutationParams::DEFAULT.total_rounds() == TOTAL_ROUNDS);
