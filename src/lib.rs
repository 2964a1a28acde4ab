//! Poseidon2 Oracle - reference implementation of a simplified Poseidon2-style
//! hash over the BN254 scalar field.
//!
//! The hash commits to a two-element preimage with a single field element.
//! Its digests are what an external proving toolchain's circuit is expected
//! to reproduce bit for bit.
//!
//! # Architecture
//!
//! - [`field`] - BN254 scalar field arithmetic (Fr) and modular exponentiation
//! - [`poseidon`] - round classification, permutation and hash engine
//! - [`witness`] - circuit input document (`hashValue` + `preimage`)
//! - [`conformance`] - recorded test-vector corpus
//! - [`error`] - error codes
//! - [`logging`] - tracing subscriber setup for binaries
//!
//! # Example
//!
//! ```
//! let digest = poseidon2_oracle::hash_preimage(&["123456789", "987654321"]).unwrap();
//! assert_eq!(
//!     digest,
//!     "21211605167783748478198991034217750710666889077103304402041408732752963186065"
//! );
//! ```
//!
//! The round constants and mixing matrix are simplified placeholders. Do not
//! infer cryptographic security from this construction.

// Library code must avoid unwrap/expect/panic.
// Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod conformance;
pub mod error;
pub mod field;
pub mod logging;
pub mod poseidon;
pub mod witness;

// Re-export commonly used types
pub use conformance::{CorpusResults, CorpusRunner};
pub use error::{ErrorCode, OracleResult};
pub use field::Fr;
pub use poseidon::{hash, hash_pair, hash_preimage, Preimage, RoundKind};
pub use witness::CircuitInput;
