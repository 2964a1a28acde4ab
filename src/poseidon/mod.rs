//! Simplified Poseidon2-style permutation and hash over BN254 Fr.
//!
//! A preimage of two field elements is loaded into a width-3 state
//! `(a, b, 0)` and run through 8 rounds: 2 full, 4 partial, 2 full. Each
//! round adds round constants, applies the x^5 S-box (to every lane in full
//! rounds, to lane 0 only in partial rounds) and then mixes the state with
//! the fixed matrix `[[2,1,1],[1,2,1],[1,1,2]]`. The digest is lane 0 of
//! the final state.
//!
//! The round constants and the mixing matrix are placeholders, not a vetted
//! Poseidon2 instantiation. The output only claims determinism and that
//! input changes propagate. Replace the parameters before any production use.

mod avalanche;
mod hash;
mod params;
mod permute;
mod preimage;

pub use avalanche::{avalanche, hamming_distance, AvalancheReport};
pub use hash::{hash, hash_pair, hash_preimage, hash_with};
pub use params::{PermutationParams, RoundKind};
pub use permute::{permute, permute_with, permute_with_trace};
pub use preimage::{normalize_numeral, Preimage};

// Include generated parameters
include!(concat!(env!("OUT_DIR"), "/params_generated.rs"));
