//! Permutation implementation.
//!
//! Each round consists of:
//! 1. Round constant addition
//! 2. S-box (x^5) on all lanes (full) or lane 0 (partial)
//! 3. Linear mixing

use super::params::{PermutationParams, RoundKind};
use super::WIDTH;
use crate::field::Fr;
use tracing::trace;

/// Add the round constants for `round` to every lane.
fn add_round_constants(state: &mut [Fr; WIDTH], params: &PermutationParams, round: usize) {
    let constants = params.round_constants(round);
    for (lane, c) in state.iter_mut().zip(constants) {
        *lane = lane.add_u64(c);
    }
}

/// Apply the S-box to the lanes selected by `kind`.
fn apply_sbox(state: &mut [Fr; WIDTH], params: &PermutationParams, kind: RoundKind) {
    match kind {
        RoundKind::Full => {
            for lane in state.iter_mut() {
                *lane = lane.pow(params.sbox_alpha);
            }
        }
        RoundKind::Partial => {
            state[0] = state[0].pow(params.sbox_alpha);
        }
    }
}

/// Mix: state' = M * state. Every output reads the pre-mix lanes.
fn mix(state: &[Fr; WIDTH], matrix: &[[u64; WIDTH]; WIDTH]) -> [Fr; WIDTH] {
    let mut result: [Fr; WIDTH] = Default::default();

    for (out, row) in result.iter_mut().zip(matrix) {
        let mut sum = Fr::zero();
        for (lane, &coeff) in state.iter().zip(row) {
            sum = &sum + &lane.scale(coeff);
        }
        *out = sum;
    }

    result
}

fn apply_round(state: &mut [Fr; WIDTH], params: &PermutationParams, round: usize) {
    let kind = params.round_kind(round);
    trace!(round, kind = kind.name(), "permutation round");

    add_round_constants(state, params, round);
    apply_sbox(state, params, kind);
    *state = mix(state, &params.mix_matrix);
}

/// Run the permutation with explicit parameters.
pub fn permute_with(params: &PermutationParams, state: &[Fr; WIDTH]) -> [Fr; WIDTH] {
    let mut st = state.clone();
    for round in 0..params.total_rounds() {
        apply_round(&mut st, params, round);
    }
    st
}

/// Complete permutation with the default parameters.
pub fn permute(state: &[Fr; WIDTH]) -> [Fr; WIDTH] {
    permute_with(&PermutationParams::DEFAULT, state)
}

/// Permutation with trace output for debugging.
///
/// Returns (final_state, round_traces) where each trace entry contains
/// the state after that round.
pub fn permute_with_trace(state: &[Fr; WIDTH]) -> ([Fr; WIDTH], Vec<[Fr; WIDTH]>) {
    let params = PermutationParams::DEFAULT;
    let mut st = state.clone();
    let mut traces = Vec::with_capacity(params.total_rounds());

    for round in 0..params.total_rounds() {
        apply_round(&mut st, &params, round);
        traces.push(st.clone());
    }

    (st, traces)
}
