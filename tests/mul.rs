use bigfloat::BigFloat;

#[test]
fn test_mul_cases() {
    let cases: [(&str, &str, &str); 6] = [
        ("0", "7", "0"),
        ("1", "0.5", "0.5"),
        ("6", "7", "42"),
        ("-0.5", "0.5", "-0.25"),
        ("1e10", "1e10", "1e20"),
        ("1.5", "1.5", "2.25"),
    ];
    for (a, b, c) in cases {
        let (a, b, c): (BigFloat, BigFloat, BigFloat) =
            (a.parse().unwrap(), b.parse().unwrap(), c.parse().unwrap());
        assert_eq!(&a * &b, c, "{} * {}", a, b);
    }
}

#[test]
fn test_commutative() {
    let values: Vec<BigFloat> = ["1.7", "-0.003", "123456.789", "1e20"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    for a in &values {
        for b in &values {
            assert!((a * b).is_bitwise_equal(&(b * a)), "{} * {}", a, b);
        }
    }
}

#[test]
fn test_multiplicative_identity() {
    for text in ["1.7", "-0.003", "1e20"] {
        let a: BigFloat = text.parse().unwrap();
        assert_eq!(&a * BigFloat::ONE, a);
    }
}

#[test]
fn test_distribution() {
    let triples = [
        ("1.7", "2.3", "0.9"),
        ("123.456", "-7.89", "0.001"),
        ("0.1", "0.2", "0.3"),
    ];
    for (a, b, c) in triples {
        let (a, b, c): (BigFloat, BigFloat, BigFloat) =
            (a.parse().unwrap(), b.parse().unwrap(), c.parse().unwrap());
        let left = &a * (&b + &c);
        let right = &a * &b + &a * &c;
        assert!(left.eq_ulp(&right, 8, false), "{} * ({} + {})", a, b, c);
    }
}

#[test]
fn test_scale_shift_law() {
    // AdjustScale(v, k) * 2^-k restores v bit for bit
    let v: BigFloat = "123.456".parse().unwrap();
    for k in [1isize, 7, 32, 100] {
        let shifted = v.clone().adjust_scale(k);
        let back = shifted * BigFloat::from_value(1.into(), -k);
        assert!(back.is_bitwise_equal(&v), "k = {}", k);
    }
}

#[test]
fn test_power_of_two_operands_exact() {
    let v: BigFloat = "123.456".parse().unwrap();
    let eight = BigFloat::from(8u8);
    let product = &v * &eight;
    // no mantissa bit is lost against a power of two
    assert_eq!(product.size(), v.size());
    assert_eq!(&product / &eight, v);
    assert!((&product / &eight).is_bitwise_equal(&v));
}

#[test]
fn test_precision_propagation() {
    // the result precision is the minimum of the operand precisions
    let narrow: BigFloat = "3.1".parse().unwrap();
    let wide: BigFloat = "2.718281828459045235360287".parse().unwrap();
    let product = &narrow * &wide;
    assert_eq!(product.size(), narrow.size().min(wide.size()));
}

#[test]
fn test_product_iterator() {
    let factorial: BigFloat = (1u8..=10).map(BigFloat::from).product();
    assert_eq!(factorial, BigFloat::from(3628800u32));
}
