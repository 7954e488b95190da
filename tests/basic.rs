use bigfloat::{ibig_ext, BigFloat, IBig, GUARD_BITS};

fn samples() -> Vec<BigFloat> {
    vec![
        BigFloat::ZERO,
        BigFloat::ONE,
        BigFloat::NEG_ONE,
        BigFloat::from(42u8),
        BigFloat::from(-1000i16),
        BigFloat::from(u64::MAX),
        "0.1".parse().unwrap(),
        "-123.456".parse().unwrap(),
        "1e30".parse().unwrap(),
        BigFloat::from_parts(IBig::ONE, 0), // guard noise
        BigFloat::zero_with_accuracy(64),
        BigFloat::from_value(IBig::from(3), -200),
        BigFloat::from_value(IBig::from(-7), 150),
    ]
}

#[test]
fn test_size_invariant() {
    for value in samples() {
        assert_eq!(
            value.size(),
            ibig_ext::bit_length(value.raw_mantissa()),
            "size cache of {:?}",
            value
        );
    }
}

#[test]
fn test_zero_sign_invariants() {
    for value in samples() {
        assert_eq!(value.is_zero(), value.signum() == IBig::ZERO, "{:?}", value);
        if value.is_zero() {
            assert!(value.is_integer(), "{:?}", value);
        }
        assert!(!(value.is_positive() && value.is_negative()));
    }
}

#[test]
fn test_reflexivity() {
    use core::hash::{BuildHasher, Hash, Hasher};
    let state = std::collections::hash_map::RandomState::new();
    let hash_of = |value: &BigFloat| {
        let mut hasher = state.build_hasher();
        value.hash(&mut hasher);
        hasher.finish()
    };

    for value in samples() {
        assert_eq!(value, value.clone(), "{:?}", value);
        assert_eq!(hash_of(&value), hash_of(&value.clone()));
        assert!(value.is_bitwise_equal(&value.clone()));
        assert_eq!(value.total_cmp(&value.clone()), core::cmp::Ordering::Equal);
    }
}

#[test]
fn test_bitwise_implies_value_eq() {
    for value in samples() {
        let copy = BigFloat::from_parts(value.raw_mantissa().clone(), value.scale());
        assert!(value.is_bitwise_equal(&copy));
        assert_eq!(value, copy);
    }
}

#[test]
fn test_precision_accuracy_properties() {
    let a = BigFloat::from(42u8);
    assert_eq!(a.size(), 6 + GUARD_BITS);
    assert_eq!(a.precision(), 6);
    assert_eq!(a.accuracy(), GUARD_BITS as isize);
    assert_eq!(a.scale(), 0);
    assert!(!a.is_out_of_precision());
    assert!(BigFloat::from_parts(IBig::from(99), 5).is_out_of_precision());
}

#[test]
fn test_overflow_word_boundary() {
    // crossing the 64-bit boundary is an ordinary carry
    let sum = BigFloat::from(u64::MAX) + BigFloat::from(1u8);
    let shifted = BigFloat::from(1u8) << 64;
    let parsed: BigFloat = "18446744073709551616".parse().unwrap();
    assert!(sum.is_bitwise_equal(&shifted));
    assert!(sum.is_bitwise_equal(&parsed));
}

#[test]
fn test_next_up_down_inverse() {
    for value in samples() {
        let there_and_back = value.next_up().next_down();
        assert!(there_and_back.is_bitwise_equal(&value), "{:?}", value);
        let back_and_there = value.next_down().next_up();
        assert!(back_and_there.is_bitwise_equal(&value), "{:?}", value);
    }
}

#[test]
fn test_ulp_value() {
    let a = BigFloat::from(6u8);
    assert_eq!(a.ulp(), BigFloat::ONE);
    let b = a.clone().adjust_scale(-3);
    assert_eq!(b.ulp(), "0.125".parse().unwrap());
    assert_eq!(&a + &a.ulp(), BigFloat::from(7u8));
}

#[test]
fn test_smallest_guard_bit_zero_band() {
    // a single guard bit is a zero until it reaches the accuracy threshold
    for scale in [-100, -2, 0, 10, GUARD_BITS as isize - 2] {
        let value = BigFloat::from_parts(IBig::ONE, scale);
        assert!(value.is_zero(), "scale {}", scale);
        assert!(!value.is_strict_zero());
    }
    assert!(!BigFloat::from_parts(IBig::ONE, GUARD_BITS as isize - 1).is_zero());
    assert!(!BigFloat::from_parts(IBig::ONE, GUARD_BITS as isize).is_zero());
}
