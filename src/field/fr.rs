//! BN254 scalar field element (Fr).
//!
//! Wraps an arbitrary-precision `BigUint` that is always reduced into
//! `[0, p)`. Every constructor reduces or validates, so no operation can
//! observe an unreduced value.

use super::{modpow, MODULUS_LIMBS};
use crate::error::{ErrorCode, OracleResult};
use num::{BigUint, One, Zero};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;
use std::sync::OnceLock;

/// Byte length of a canonical big-endian encoding.
const ENCODED_LEN: usize = 32;

/// The field modulus `p` (parsed once).
pub fn modulus() -> &'static BigUint {
    static MODULUS: OnceLock<BigUint> = OnceLock::new();
    MODULUS.get_or_init(|| BigUint::from_slice(&MODULUS_LIMBS))
}

/// A BN254 scalar field element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Fr(BigUint);

impl Fr {
    /// The additive identity (zero).
    pub fn zero() -> Fr {
        Fr(BigUint::zero())
    }

    /// The multiplicative identity (one).
    pub fn one() -> Fr {
        Fr(BigUint::one())
    }

    /// Create an Fr from a u64 value.
    pub fn from_u64(val: u64) -> Fr {
        Fr::from_biguint(BigUint::from(val))
    }

    /// Create an Fr from an arbitrary natural number, reducing modulo `p`.
    pub fn from_biguint(val: BigUint) -> Fr {
        if &val < modulus() {
            Fr(val)
        } else {
            Fr(val % modulus())
        }
    }

    /// Parse a decimal numeral and reduce it modulo `p`.
    ///
    /// The numeral must be non-empty and consist only of ASCII digits.
    /// Values of any length are accepted.
    pub fn from_decimal(s: &str) -> OracleResult<Fr> {
        if s.is_empty() {
            return Err(ErrorCode::E101_EmptyNumeral);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ErrorCode::E100_InvalidNumeral(s.to_string()));
        }
        BigUint::parse_bytes(s.as_bytes(), 10)
            .map(Fr::from_biguint)
            .ok_or_else(|| ErrorCode::E100_InvalidNumeral(s.to_string()))
    }

    /// Convert to decimal string representation.
    pub fn to_decimal(&self) -> String {
        self.0.to_str_radix(10)
    }

    /// Create an Fr from 32 big-endian bytes.
    ///
    /// Returns an error if the value is not below the field modulus.
    pub fn from_bytes_be(bytes: &[u8; ENCODED_LEN]) -> OracleResult<Fr> {
        let val = BigUint::from_bytes_be(bytes);
        if &val >= modulus() {
            return Err(ErrorCode::E300_NonCanonicalFr(hex::encode(bytes)));
        }
        Ok(Fr(val))
    }

    /// Convert to canonical 32-byte big-endian representation.
    pub fn to_bytes_be(&self) -> [u8; ENCODED_LEN] {
        let raw = self.0.to_bytes_be();
        let mut out = [0u8; ENCODED_LEN];
        // raw.len() <= 32 because the value is below a 254-bit modulus
        out[ENCODED_LEN - raw.len()..].copy_from_slice(&raw);
        out
    }

    /// Create an Fr from a 64-character big-endian hex string.
    pub fn from_hex(hex_str: &str) -> OracleResult<Fr> {
        if hex_str.len() != ENCODED_LEN * 2 {
            return Err(ErrorCode::E104_WrongLength(
                (ENCODED_LEN * 2).to_string(),
                hex_str.len() as u64,
            ));
        }

        let bytes = hex::decode(hex_str).map_err(|_| ErrorCode::E103_InvalidHex)?;

        let mut arr = [0u8; ENCODED_LEN];
        arr.copy_from_slice(&bytes);
        Self::from_bytes_be(&arr)
    }

    /// Convert to 64-character lowercase big-endian hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes_be())
    }

    /// Get the underlying integer.
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Returns true if this is the zero element.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Raise to a power with [`modpow`].
    pub fn pow(&self, exp: u64) -> Fr {
        Fr(modpow(&self.0, exp, modulus()))
    }

    /// Compute x^5 (used in the S-box).
    pub fn pow5(&self) -> Fr {
        self.pow(5)
    }

    /// Compute 2x.
    pub fn double(&self) -> Fr {
        Fr::from_biguint(&self.0 << 1)
    }

    /// Multiply by a small scalar.
    pub fn scale(&self, k: u64) -> Fr {
        Fr::from_biguint(&self.0 * BigUint::from(k))
    }

    /// Add a small scalar.
    pub fn add_u64(&self, k: u64) -> Fr {
        Fr::from_biguint(&self.0 + BigUint::from(k))
    }
}

impl From<u64> for Fr {
    fn from(val: u64) -> Self {
        Fr::from_u64(val)
    }
}

impl From<BigUint> for Fr {
    fn from(val: BigUint) -> Self {
        Fr::from_biguint(val)
    }
}

impl FromStr for Fr {
    type Err = ErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Fr::from_decimal(s)
    }
}

impl<'a> Add<&'a Fr> for &'a Fr {
    type Output = Fr;
    fn add(self, rhs: &'a Fr) -> Fr {
        Fr::from_biguint(&self.0 + &rhs.0)
    }
}

impl Add for Fr {
    type Output = Fr;
    fn add(self, rhs: Fr) -> Fr {
        &self + &rhs
    }
}

impl<'a> Sub<&'a Fr> for &'a Fr {
    type Output = Fr;
    fn sub(self, rhs: &'a Fr) -> Fr {
        if self.0 >= rhs.0 {
            Fr(&self.0 - &rhs.0)
        } else {
            Fr(modulus() - &rhs.0 + &self.0)
        }
    }
}

impl Sub for Fr {
    type Output = Fr;
    fn sub(self, rhs: Fr) -> Fr {
        &self - &rhs
    }
}

impl<'a> Mul<&'a Fr> for &'a Fr {
    type Output = Fr;
    fn mul(self, rhs: &'a Fr) -> Fr {
        Fr::from_biguint(&self.0 * &rhs.0)
    }
}

impl Mul for Fr {
    type Output = Fr;
    fn mul(self, rhs: Fr) -> Fr {
        &self * &rhs
    }
}

impl fmt::Display for Fr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Serialized as a decimal string, the encoding circuit toolchains consume.
impl Serialize for Fr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Fr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Fr::from_decimal(&s).map_err(de::Error::custom)
    }
}
