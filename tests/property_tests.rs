//! Property-based tests for the encode/decode round trip.
//!
//! Every primitive with an encode capability must decode back to itself from
//! its canonical literal, and the composites must preserve length and order.

use node_decode::{decode, encode, Decode, Encode};
use proptest::prelude::*;

fn roundtrip<T: Encode + Decode + PartialEq + std::fmt::Debug>(value: &T) -> bool {
    match decode::<T>(&encode(value)) {
        Ok(decoded) => *value == decoded,
        Err(e) => {
            eprintln!("decode failed: {}", e);
            false
        }
    }
}

proptest! {
    #[test]
    fn prop_i32(n in any::<i32>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_i64(n in any::<i64>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_u64(n in any::<u64>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_u128(n in any::<u128>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_bool(b in any::<bool>()) {
        prop_assert!(roundtrip(&b));
    }

    #[test]
    fn prop_f64(x in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        prop_assert!(roundtrip(&x));
    }

    #[test]
    fn prop_string(s in ".*") {
        prop_assert!(roundtrip(&s));
    }

    #[test]
    fn prop_vec_i32(v in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_option_u16(opt in proptest::option::of(any::<u16>())) {
        prop_assert!(roundtrip(&opt));
    }

    #[test]
    fn prop_array(v in proptest::array::uniform4(any::<i16>())) {
        prop_assert!(roundtrip(&v));
    }

    // Out-of-range literals must fail, never wrap.
    #[test]
    fn prop_narrowing_is_checked(n in (i16::from(i8::MAX) + 1)..=i16::MAX) {
        prop_assert!(decode::<i8>(&encode(&n)).is_err());
    }
}
