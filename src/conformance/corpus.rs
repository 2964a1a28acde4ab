//! Corpus-based conformance testing.
//!
//! This module loads test vectors from a corpus JSON file and runs them
//! against the hash engine.
//!
//! Supported operations:
//!
//! - `poseidon2_hash`: input `{"preimage": [..]}`, expected
//!   `{"ok": {"digest": ".."}}` or `{"err": {"code": N}}`
//! - `modpow`: input `{"base": "..", "exp": N}`, expected `{"ok": {"decimal": ".."}}`
//! - `round_kind`: input `{"round": N}`, expected `{"ok": {"kind": "full"|"partial"}}`

use super::{ConformanceError, ConformanceResult};
use crate::field::{modpow, modulus, Fr, MODULUS_DECIMAL};
use crate::poseidon::{hash_preimage, RoundKind};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Corpus manifest with metadata.
#[derive(Debug, Deserialize)]
pub struct CorpusManifest {
    /// Format version of the corpus file.
    pub format_version: String,
    /// Field modulus in decimal.
    pub modulus_decimal: String,
    /// Free-form description of where the vectors came from.
    #[serde(default)]
    pub source: String,
}

/// A corpus containing test vectors.
#[derive(Debug, Deserialize)]
pub struct Corpus {
    /// Corpus metadata.
    pub manifest: CorpusManifest,
    /// List of test vectors.
    pub vectors: Vec<TestVector>,
}

/// A single test vector.
#[derive(Debug, Deserialize)]
pub struct TestVector {
    /// Unique identifier for the test.
    pub id: String,
    /// Operation to test (e.g., "poseidon2_hash", "modpow").
    pub op: String,
    /// Input parameters for the operation.
    pub input: serde_json::Value,
    /// Expected result (success or error).
    pub expected: serde_json::Value,
}

/// Result of running a single test vector.
#[derive(Debug)]
pub enum TestResult {
    /// Test passed.
    Pass,
    /// Test failed with mismatch.
    Fail {
        /// Expected result from the corpus.
        expected: String,
        /// Actual result from the engine.
        actual: String,
    },
    /// Test was skipped (operation not implemented).
    Skip {
        /// Reason for skipping.
        reason: String,
    },
    /// Test errored during execution.
    Error {
        /// Error message.
        message: String,
    },
}

impl TestResult {
    /// Returns true if this is a failing result.
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }

    fn compare(expected: &str, actual: String) -> TestResult {
        if expected == actual {
            TestResult::Pass
        } else {
            TestResult::Fail {
                expected: expected.to_string(),
                actual,
            }
        }
    }

    fn error(message: impl Into<String>) -> TestResult {
        TestResult::Error {
            message: message.into(),
        }
    }
}

/// Results from running the corpus.
#[derive(Debug, Default)]
pub struct CorpusResults {
    /// Number of tests that passed.
    pub passed: usize,
    /// Number of tests that failed.
    pub failed: usize,
    /// Number of tests that were skipped.
    pub skipped: usize,
    /// Number of tests that errored.
    pub errors: usize,
    /// Detailed results for each test.
    pub details: Vec<(String, TestResult)>,
}

impl CorpusResults {
    /// Create a new empty results container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a test result.
    pub fn record(&mut self, id: &str, result: TestResult) {
        match &result {
            TestResult::Pass => self.passed += 1,
            TestResult::Fail { .. } => self.failed += 1,
            TestResult::Skip { .. } => self.skipped += 1,
            TestResult::Error { .. } => self.errors += 1,
        }
        self.details.push((id.to_string(), result));
    }

    /// Get total number of tests run.
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped + self.errors
    }

    /// Returns true if all tests passed (no failures or errors).
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }

    /// Get a summary string of the results.
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed, {} skipped, {} errors (total: {})",
            self.passed,
            self.failed,
            self.skipped,
            self.errors,
            self.total()
        )
    }

    /// Get failures only.
    pub fn failures(&self) -> Vec<&(String, TestResult)> {
        self.details
            .iter()
            .filter(|(_, r)| matches!(r, TestResult::Fail { .. }))
            .collect()
    }

    /// Get errors only.
    pub fn error_details(&self) -> Vec<&(String, TestResult)> {
        self.details
            .iter()
            .filter(|(_, r)| matches!(r, TestResult::Error { .. }))
            .collect()
    }
}

/// Corpus runner that executes test vectors.
pub struct CorpusRunner {
    corpus: Corpus,
}

impl CorpusRunner {
    /// Load corpus from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> ConformanceResult<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConformanceError::IoError(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Parse a corpus from JSON text.
    ///
    /// Fails if the manifest was recorded for a different modulus.
    pub fn from_json(content: &str) -> ConformanceResult<Self> {
        let corpus: Corpus = serde_json::from_str(content)
            .map_err(|e| ConformanceError::ParseError(e.to_string()))?;

        if corpus.manifest.modulus_decimal != MODULUS_DECIMAL {
            return Err(ConformanceError::ModulusMismatch {
                expected: MODULUS_DECIMAL.to_string(),
                found: corpus.manifest.modulus_decimal,
            });
        }

        debug!(vectors = corpus.vectors.len(), "loaded corpus");
        Ok(Self { corpus })
    }

    /// Get the corpus manifest.
    pub fn manifest(&self) -> &CorpusManifest {
        &self.corpus.manifest
    }

    /// Get the number of test vectors.
    pub fn vector_count(&self) -> usize {
        self.corpus.vectors.len()
    }

    /// Run all test vectors and return results.
    pub fn run_all(&self) -> CorpusResults {
        let mut results = CorpusResults::new();

        for vector in &self.corpus.vectors {
            let result = self.run_vector(vector);
            if result.is_fail() {
                warn!(id = %vector.id, "corpus vector failed");
            }
            results.record(&vector.id, result);
        }

        results
    }

    /// Run a single test vector.
    fn run_vector(&self, vector: &TestVector) -> TestResult {
        match vector.op.as_str() {
            "poseidon2_hash" => self.run_hash(vector),
            "modpow" => self.run_modpow(vector),
            "round_kind" => self.run_round_kind(vector),
            _ => TestResult::Skip {
                reason: format!("Unknown operation: {}", vector.op),
            },
        }
    }

    /// Run poseidon2_hash test.
    fn run_hash(&self, vector: &TestVector) -> TestResult {
        let preimage: Vec<String> = match vector
            .input
            .get("preimage")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
        {
            Some(p) => p,
            None => return TestResult::error("Missing 'preimage' array in input"),
        };

        let result = hash_preimage(&preimage);

        if let Some(ok) = vector.expected.get("ok") {
            let expected = ok.get("digest").and_then(|v| v.as_str()).unwrap_or("");
            match result {
                Ok(digest) => TestResult::compare(expected, digest),
                Err(e) => TestResult::Fail {
                    expected: format!("ok: {}", expected),
                    actual: format!("err: {}", e),
                },
            }
        } else if let Some(err) = vector.expected.get("err") {
            let expected_code = err.get("code").and_then(|v| v.as_u64()).unwrap_or(0);
            match result {
                Ok(digest) => TestResult::Fail {
                    expected: format!("E{}", expected_code),
                    actual: format!("ok: {}", digest),
                },
                Err(e) => TestResult::compare(
                    &format!("E{}", expected_code),
                    format!("E{}", e.code()),
                ),
            }
        } else {
            TestResult::error("Invalid expected format")
        }
    }

    /// Run modpow test.
    fn run_modpow(&self, vector: &TestVector) -> TestResult {
        let base = match vector.input.get("base").and_then(|v| v.as_str()) {
            Some(b) => b,
            None => return TestResult::error("Missing 'base' in input"),
        };
        let exp = match vector.input.get("exp").and_then(|v| v.as_u64()) {
            Some(e) => e,
            None => return TestResult::error("Missing 'exp' in input"),
        };
        let base = match Fr::from_decimal(base) {
            Ok(fr) => fr,
            Err(e) => return TestResult::error(format!("Invalid base: {}", e)),
        };

        let expected = match vector
            .expected
            .get("ok")
            .and_then(|ok| ok.get("decimal"))
            .and_then(|v| v.as_str())
        {
            Some(d) => d,
            None => return TestResult::error("Invalid expected format"),
        };

        let actual = modpow(base.as_biguint(), exp, modulus()).to_str_radix(10);
        TestResult::compare(expected, actual)
    }

    /// Run round_kind test.
    fn run_round_kind(&self, vector: &TestVector) -> TestResult {
        let round = match vector.input.get("round").and_then(|v| v.as_u64()) {
            Some(r) => r as usize,
            None => return TestResult::error("Missing 'round' in input"),
        };
        let expected = match vector
            .expected
            .get("ok")
            .and_then(|ok| ok.get("kind"))
            .and_then(|v| v.as_str())
        {
            Some(k) => k,
            None => return TestResult::error("Invalid expected format"),
        };

        TestResult::compare(expected, RoundKind::for_round(round).name().to_string())
    }
}
