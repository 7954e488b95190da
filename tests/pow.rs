use bigfloat::BigFloat;

#[test]
fn test_cube_of_three() {
    let a: BigFloat = "3.000".parse().unwrap();
    assert_eq!(a.powi(3), BigFloat::from(27u8));
    assert_eq!(a.powi(3), "27.0".parse().unwrap());

    // the negative power is the inverse, nowhere near 27
    let inv = a.powi(-3);
    assert_ne!(inv, BigFloat::from(27u8));
    assert!(inv < BigFloat::ONE);
    let approx: BigFloat = "0.037037037".parse().unwrap();
    assert!(inv.eq_ulp(&approx, 8, false));
}

#[test]
fn test_pow_shortcuts() {
    let a: BigFloat = "1.7".parse().unwrap();
    assert_eq!(a.powi(0), BigFloat::ONE);
    assert!(a.powi(1).is_bitwise_equal(&a));
    assert_eq!(a.powi(2), &a * &a);
    assert!(a.powi(-1).eq_ulp(&a.recip(), 1, false));
}

#[test]
fn test_pow_sign_rule() {
    let a: BigFloat = "-1.5".parse().unwrap();
    let mag: BigFloat = "1.5".parse().unwrap();
    for n in 1..=8 {
        let expected = if n % 2 == 0 {
            mag.powi(n)
        } else {
            -mag.powi(n)
        };
        assert!(a.powi(n).is_bitwise_equal(&expected), "n = {}", n);
    }
}

#[test]
fn test_pow_addition_law() {
    let a: BigFloat = "1.7".parse().unwrap();
    for (m, n) in [(3isize, 4isize), (10, 13), (60, 70), (100, 150)] {
        let left = a.powi(m) * a.powi(n);
        let right = a.powi(m + n);
        assert!(left.eq_ulp(&right, 1, false), "a^{} * a^{}", m, n);
    }
}

#[test]
fn test_pow_large_exponent_path() {
    // the leading-bits kernel and the direct chain agree
    let a: BigFloat = "1.0001".parse().unwrap();
    let direct = a.powi(64);
    let kernel = a.powi(65) / &a;
    assert!(direct.eq_ulp(&kernel, 4, false));

    // a huge power stays well out of f64 range but keeps its size
    let b: BigFloat = "2.5".parse().unwrap();
    let big = b.powi(5000);
    assert!((big.size() as isize - b.size() as isize).abs() <= 1);
    assert!(big.scale() > 0);
}

#[test]
fn test_zero_powers() {
    assert_eq!(BigFloat::ZERO.powi(5), BigFloat::ZERO);
    assert_eq!(BigFloat::ZERO.powi(0), BigFloat::ONE);
}

#[test]
#[should_panic]
fn test_zero_negative_power() {
    let _ = BigFloat::ZERO.powi(-2);
}
