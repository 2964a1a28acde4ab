//! Test-vector corpus for checking the oracle against recorded outputs.
//!
//! A corpus pins digests captured from a reference run. Running it after a
//! change shows whether any digest, error code or round classification moved.
//! The external circuit can be checked against the same file.

pub mod corpus;

pub use corpus::{Corpus, CorpusManifest, CorpusResults, CorpusRunner, TestResult, TestVector};

/// Result type for conformance operations.
pub type ConformanceResult<T> = Result<T, ConformanceError>;

/// Errors that can occur while loading a corpus.
#[derive(Debug)]
pub enum ConformanceError {
    /// I/O error
    IoError(String),
    /// Failed to parse the corpus file
    ParseError(String),
    /// Corpus was generated for a different field
    ModulusMismatch {
        /// Modulus this crate was built with
        expected: String,
        /// Modulus recorded in the corpus manifest
        found: String,
    },
}

impl std::fmt::Display for ConformanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(msg) => write!(f, "I/O error: {}", msg),
            Self::ParseError(msg) => write!(f, "Failed to parse corpus: {}", msg),
            Self::ModulusMismatch { expected, found } => write!(
                f,
                "Corpus modulus {} does not match field modulus {}",
                found, expected
            ),
        }
    }
}

impl std::error::Error for ConformanceError {}
