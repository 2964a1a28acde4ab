//! Error handling for the Poseidon2 oracle.
//!
//! Every failure the oracle can report is an [`ErrorCode`] variant with a
//! stable numeric code and name, so the CLI and the test-vector corpus can
//! match failures without parsing messages.
//!
//! Input validation always happens before any field arithmetic. Once a
//! preimage is parsed, hashing cannot fail.

use thiserror::Error;

/// All error codes reported by the oracle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    /// A numeral contains characters other than ASCII digits (code 100).
    #[error("E100_InvalidNumeral({0})")]
    E100_InvalidNumeral(/* value */ String),

    /// A numeral is empty after `.` characters are stripped (code 101).
    #[error("E101_EmptyNumeral")]
    E101_EmptyNumeral,

    /// A preimage does not contain exactly two elements (code 102).
    #[error("E102_InvalidArity({0})")]
    E102_InvalidArity(/* got */ u64),

    /// A field element encoding is not valid hex (code 103).
    #[error("E103_InvalidHex")]
    E103_InvalidHex,

    /// An encoding has the wrong length (code 104).
    #[error("E104_WrongLength({0}, {1})")]
    E104_WrongLength(/* expected */ String, /* got */ u64),

    /// Input bytes are not valid UTF-8 (code 105).
    #[error("E105_InvalidUTF8")]
    E105_InvalidUTF8,

    /// A JSON document could not be parsed (code 106).
    #[error("E106_InvalidJSON({0})")]
    E106_InvalidJSON(/* reason */ String),

    /// A file could not be read or written (code 107).
    #[error("E107_Io({0})")]
    E107_Io(/* reason */ String),

    /// An encoded value is not below the field modulus (code 300).
    #[error("E300_NonCanonicalFr({0})")]
    E300_NonCanonicalFr(/* value */ String),

    /// A recomputed digest differs from the recorded one (code 400).
    #[error("E400_DigestMismatch({0}, {1})")]
    E400_DigestMismatch(/* expected */ String, /* computed */ String),
}

impl ErrorCode {
    /// Get the numeric error code.
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::E100_InvalidNumeral(_) => 100,
            ErrorCode::E101_EmptyNumeral => 101,
            ErrorCode::E102_InvalidArity(_) => 102,
            ErrorCode::E103_InvalidHex => 103,
            ErrorCode::E104_WrongLength(_, _) => 104,
            ErrorCode::E105_InvalidUTF8 => 105,
            ErrorCode::E106_InvalidJSON(_) => 106,
            ErrorCode::E107_Io(_) => 107,
            ErrorCode::E300_NonCanonicalFr(_) => 300,
            ErrorCode::E400_DigestMismatch(_, _) => 400,
        }
    }

    /// Get the error name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::E100_InvalidNumeral(_) => "E100_InvalidNumeral",
            ErrorCode::E101_EmptyNumeral => "E101_EmptyNumeral",
            ErrorCode::E102_InvalidArity(_) => "E102_InvalidArity",
            ErrorCode::E103_InvalidHex => "E103_InvalidHex",
            ErrorCode::E104_WrongLength(_, _) => "E104_WrongLength",
            ErrorCode::E105_InvalidUTF8 => "E105_InvalidUTF8",
            ErrorCode::E106_InvalidJSON(_) => "E106_InvalidJSON",
            ErrorCode::E107_Io(_) => "E107_Io",
            ErrorCode::E300_NonCanonicalFr(_) => "E300_NonCanonicalFr",
            ErrorCode::E400_DigestMismatch(_, _) => "E400_DigestMismatch",
        }
    }
}

impl From<std::io::Error> for ErrorCode {
    fn from(e: std::io::Error) -> Self {
        ErrorCode::E107_Io(e.to_string())
    }
}

impl From<serde_json::Error> for ErrorCode {
    fn from(e: serde_json::Error) -> Self {
        ErrorCode::E106_InvalidJSON(e.to_string())
    }
}

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, ErrorCode>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_names_agree() {
        let errors = [
            ErrorCode::E100_InvalidNumeral("12a".to_string()),
            ErrorCode::E101_EmptyNumeral,
            ErrorCode::E102_InvalidArity(1),
            ErrorCode::E300_NonCanonicalFr("ff".to_string()),
        ];
        for e in &errors {
            assert!(e.name().starts_with(&format!("E{}_", e.code())));
        }
    }

    #[test]
    fn test_display_includes_payload() {
        let e = ErrorCode::E102_InvalidArity(3);
        assert_eq!(e.to_string(), "E102_InvalidArity(3)");
    }
}
