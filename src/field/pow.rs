//! Modular exponentiation by repeated squaring.

use num::{BigUint, One};

/// Compute `base^exp mod modulus`.
///
/// The exponent is consumed from the least-significant bit upward. `base` is
/// reduced before the loop starts and `exp = 0` yields 1.
///
/// The loop runs once per exponent bit regardless of `base`, but the big
/// integer multiplications are not constant time. Do not rely on this for
/// side-channel resistance.
///
/// `modulus` must be non-zero.
pub fn modpow(base: &BigUint, exp: u64, modulus: &BigUint) -> BigUint {
    let mut base = base % modulus;
    let mut exp = exp;
    let mut result = BigUint::one();

    while exp > 0 {
        if exp & 1 == 1 {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}
