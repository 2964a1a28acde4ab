//! Property tests over random preimages.

use num::BigUint;
use poseidon2_oracle::field::modulus;
use poseidon2_oracle::poseidon::{hash_pair, normalize_numeral, RoundKind};
use proptest::prelude::*;

fn numeral() -> impl Strategy<Value = String> {
    "[0-9]{1,90}"
}

proptest! {
    #[test]
    fn digest_is_deterministic(a in numeral(), b in numeral()) {
        prop_assert_eq!(hash_pair(&a, &b).unwrap(), hash_pair(&a, &b).unwrap());
    }

    #[test]
    fn digest_is_in_field(a in numeral(), b in numeral()) {
        let digest = hash_pair(&a, &b).unwrap();
        prop_assert!(digest.bytes().all(|c| c.is_ascii_digit()));
        let value = BigUint::parse_bytes(digest.as_bytes(), 10).unwrap();
        prop_assert!(&value < modulus());
    }

    #[test]
    fn congruent_inputs_agree(a in numeral(), b in numeral()) {
        let a_shifted = BigUint::parse_bytes(a.as_bytes(), 10).unwrap() + modulus();
        prop_assert_eq!(
            hash_pair(&a_shifted.to_str_radix(10), &b).unwrap(),
            hash_pair(&a, &b).unwrap()
        );
    }

    #[test]
    fn dots_are_ignored(head in "[0-9]{1,30}", tail in "[0-9]{0,30}", b in numeral()) {
        let dotted = format!("{}.{}", head, tail);
        let plain = format!("{}{}", head, tail);
        prop_assert_eq!(normalize_numeral(&dotted), plain.clone());
        prop_assert_eq!(hash_pair(&dotted, &b).unwrap(), hash_pair(&plain, &b).unwrap());
    }

    #[test]
    fn non_digits_are_rejected(a in "[0-9]{0,5}[a-zA-Z +\\-][0-9]{0,5}", b in numeral()) {
        prop_assert!(hash_pair(&a, &b).is_err());
    }

    #[test]
    fn partial_rounds_are_the_middle_four(round in 0usize..8) {
        let expected = if (2..6).contains(&round) { RoundKind::Partial } else { RoundKind::Full };
        prop_assert_eq!(RoundKind::for_round(round), expected);
    }
}
