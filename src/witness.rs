//! Circuit input document.
//!
//! The external proving toolchain takes the preimage as private input and the
//! digest as public input:
//!
//! ```json
//! {
//!   "hashValue": "2121...6065",
//!   "preimage": ["123456789", "987654321"]
//! }
//! ```
//!
//! The preimage strings are stored exactly as supplied so the document matches
//! what the caller passed to the hash.

use crate::error::{ErrorCode, OracleResult};
use crate::poseidon::{hash, Preimage};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Input document for the hash circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitInput {
    /// Digest as a decimal string.
    #[serde(rename = "hashValue")]
    pub hash_value: String,
    /// The two preimage numerals.
    pub preimage: Vec<String>,
}

/// Outcome of recomputing the digest of a [`CircuitInput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verification {
    /// Whether the recorded digest matches.
    pub valid: bool,
    /// Digest recomputed from the preimage.
    pub computed_digest: String,
    /// Digest recorded in the document.
    pub expected_digest: String,
}

impl CircuitInput {
    /// Hash `preimage` and build the document.
    pub fn from_preimage<S: AsRef<str>>(preimage: &[S]) -> OracleResult<Self> {
        let parsed = Preimage::parse(preimage)?;
        Ok(Self {
            hash_value: hash(&parsed).to_decimal(),
            preimage: preimage.iter().map(|s| s.as_ref().to_string()).collect(),
        })
    }

    /// Parse a document from JSON.
    pub fn from_json(json: &str) -> OracleResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> OracleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a document from `path`.
    pub fn read_from<P: AsRef<Path>>(path: P) -> OracleResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Write the document to `path`.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> OracleResult<()> {
        let json = self.to_json_pretty()?;
        fs::write(path.as_ref(), json)?;
        debug!(path = %path.as_ref().display(), "wrote circuit input");
        Ok(())
    }

    /// Recompute the digest and compare it to `hash_value`.
    pub fn check(&self) -> OracleResult<Verification> {
        let computed = hash(&Preimage::parse(&self.preimage)?).to_decimal();
        Ok(Verification {
            valid: computed == self.hash_value,
            computed_digest: computed,
            expected_digest: self.hash_value.clone(),
        })
    }

    /// Like [`check`](Self::check), but a mismatch is an error.
    pub fn verify(&self) -> OracleResult<()> {
        let v = self.check()?;
        if v.valid {
            Ok(())
        } else {
            Err(ErrorCode::E400_DigestMismatch(
                v.expected_digest,
                v.computed_digest,
            ))
        }
    }
}
