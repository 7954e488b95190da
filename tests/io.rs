use bigfloat::{BigFloat, ParseError, GUARD_BITS};

#[test]
fn test_parse_and_hex_scenario() {
    // the radix point sits inside the guard region; rounding to integer
    // uses the guard half-bit as tie breaker
    let v: BigFloat = "0b101010101|10101010101010101.100000000000000"
        .parse()
        .unwrap();
    assert_eq!(v.to_hex_string(), "2AB5556");
    assert_eq!(v.precision(), 9);
    assert_eq!(v.scale(), 17);
}

#[test]
fn test_parse_decimal_forms() {
    let cases: [(&str, f64); 7] = [
        ("0", 0.0),
        ("42", 42.0),
        ("-13.25", -13.25),
        ("+0.5", 0.5),
        ("6.02e3", 6020.0),
        ("1_000_000", 1e6),
        ("25e-2", 0.25),
    ];
    for (text, expected) in cases {
        let parsed: BigFloat = text.parse().unwrap();
        assert_eq!(parsed.to_f64(), expected, "parse({:?})", text);
    }
}

#[test]
fn test_parse_binary_and_hex_forms() {
    assert_eq!("0b1101".parse::<BigFloat>().unwrap(), BigFloat::from(13u8));
    assert_eq!("0b0.01".parse::<BigFloat>().unwrap().to_f64(), 0.25);
    assert_eq!("0xff".parse::<BigFloat>().unwrap(), BigFloat::from(255u8));
    assert_eq!("0x0.8".parse::<BigFloat>().unwrap().to_f64(), 0.5);
    assert_eq!("-0x1A.4".parse::<BigFloat>().unwrap().to_f64(), -26.25);
}

#[test]
fn test_parse_guard_region_literals() {
    // the bar splits storage, not value: digits after it land in the
    // guard region
    let noisy: BigFloat = "0b1|1".parse().unwrap();
    assert_eq!(noisy.precision(), 1);
    assert_eq!(noisy, BigFloat::from(3u8));
    assert_eq!(
        noisy.total_cmp(&BigFloat::from(3u8)),
        core::cmp::Ordering::Equal
    );
    assert!(!noisy.is_bitwise_equal(&BigFloat::from(3u8)));

    // a full guard region of zeros is the plain value
    let plain: BigFloat = "0b101|00000000000000000000000000000000".parse().unwrap();
    assert!(plain.is_bitwise_equal(&BigFloat::from(5u8)));
}

#[test]
fn test_parse_errors() {
    assert_eq!("".parse::<BigFloat>(), Err(ParseError::NoDigits));
    assert_eq!("abc".parse::<BigFloat>(), Err(ParseError::InvalidDigit));
    assert_eq!("0b12".parse::<BigFloat>(), Err(ParseError::InvalidDigit));
    assert_eq!("1.2e".parse::<BigFloat>(), Err(ParseError::NoDigits));
    assert_eq!("1.2.3".parse::<BigFloat>(), Err(ParseError::InvalidDigit));
    assert_eq!("12|3".parse::<BigFloat>(), Err(ParseError::InvalidDigit));
}

#[test]
fn test_binary_string_round_trips() {
    let values: Vec<BigFloat> = vec![
        BigFloat::ONE,
        BigFloat::from(-1000i16),
        "0.1".parse().unwrap(),
        "123.456".parse().unwrap(),
        BigFloat::from_parts(12345.into(), 3),
        BigFloat::from(7u8) << 3,
        // coarser than the guard frame: the positions below the stored
        // mantissa print as implied zeros
        BigFloat::from_parts(12345.into(), GUARD_BITS as isize + 8),
    ];
    for value in values {
        let text = value.to_binary_string();
        let back: BigFloat = text.parse().unwrap();
        assert!(back.is_bitwise_equal(&value), "{}", text);
    }
}

#[test]
fn test_binary_string_separator_choices() {
    let v = BigFloat::from(5u8);
    assert_eq!(
        v.to_binary_string(),
        "0b101|.00000000000000000000000000000000"
    );
    assert_eq!(
        v.to_binary_string_with(None),
        "0b101.00000000000000000000000000000000"
    );
    assert!(v
        .to_binary_string_with(Some(':'))
        .contains(':'));
}

#[test]
fn test_display_rounds_to_precision() {
    assert_eq!(format!("{}", BigFloat::from(42u8)), "42");
    assert_eq!(format!("{}", "3.000".parse::<BigFloat>().unwrap()), "3");
    assert_eq!(format!("{}", "0.15".parse::<BigFloat>().unwrap()), "0.15");
    assert_eq!(format!("{}", "-12.3125".parse::<BigFloat>().unwrap()), "-12.3125");
    assert_eq!(format!("{}", BigFloat::ZERO), "0");
    let third = BigFloat::ONE / BigFloat::from(3u8);
    assert_eq!(format!("{}", third), "0.3");
}

#[test]
fn test_scientific_string() {
    assert_eq!(
        BigFloat::ONE.to_scientific_string(),
        "0b1.|00000000000000000000000000000000p+0"
    );
    let v: BigFloat = "0b101.1".parse().unwrap();
    assert_eq!(
        v.to_scientific_string(),
        "0b1.011|00000000000000000000000000000000p+2"
    );
    assert_eq!(
        v.to_scientific_string_with(None),
        "0b1.01100000000000000000000000000000000p+2"
    );
    assert!(BigFloat::from(-2i8).to_scientific_string().starts_with("-0b1."));
}

#[test]
fn test_guard_bits_constant_is_public() {
    assert_eq!(GUARD_BITS, 32);
}
