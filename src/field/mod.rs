//! BN254 scalar field (Fr) operations.
//!
//! This module provides the [`Fr`] type used by the permutation and the
//! square-and-multiply [`modpow`] primitive behind the S-box.
//!
//! The modulus is generated by `build.rs` from `metadata.json`:
//!
//! p = 21888242871839275222246405745257275088548364400416034343698204186575808495617

mod fr;
mod pow;

pub use fr::{modulus, Fr};
pub use pow::modpow;

// Include generated modulus constants
include!(concat!(env!("OUT_DIR"), "/modulus_generated.rs"));
