//! Parsing from strings.
//!
//! Three literal forms are accepted, all with optional sign and `_` digit
//! separators:
//!
//! * decimal: `12.34`, `6.022e23` (the exponent is a power of ten);
//! * binary: `0b101.1`, optionally with a `|` marking where the guard
//!   region starts; digits after the bar land in the guard region, so
//!   `0b11|01.0` carries two visible bits and stores the rest as guard
//!   noise;
//! * hexadecimal: `0x1a.8`.
//!
//! Decimal fractions are converted with the guard region filled from the
//! exact quotient, so a literal is accurate to the bottom of its guard
//! bits even when it has no exact binary form.

use crate::{
    ibig_ext::rounding_right_shift,
    repr::{BigFloat, GUARD_BITS},
};
use alloc::string::String;
use core::str::FromStr;
use dashu_base::{ParseError, Sign};
use dashu_int::{IBig, UBig};

impl FromStr for BigFloat {
    type Err = ParseError;

    fn from_str(src: &str) -> Result<Self, ParseError> {
        let (sign, src) = match src.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, src.strip_prefix('+').unwrap_or(src)),
        };
        let value = if let Some(body) = src.strip_prefix("0b").or_else(|| src.strip_prefix("0B")) {
            parse_binary(body)?
        } else if let Some(body) = src.strip_prefix("0x").or_else(|| src.strip_prefix("0X")) {
            parse_hex(body)?
        } else {
            parse_decimal(src)?
        };
        Ok(sign * value)
    }
}

struct Body {
    digits: String,
    after_bar: Option<usize>,
    after_point: Option<usize>,
}

// Collect digits of the given radix, tracking how many fall after the
// guard bar and after the radix point.
fn scan(src: &str, radix: u32, allow_bar: bool) -> Result<Body, ParseError> {
    let mut body = Body {
        digits: String::new(),
        after_bar: None,
        after_point: None,
    };
    for ch in src.chars() {
        match ch {
            '_' => {}
            '|' if allow_bar => {
                if body.after_bar.is_some() {
                    return Err(ParseError::InvalidDigit);
                }
                body.after_bar = Some(0);
            }
            '.' => {
                if body.after_point.is_some() {
                    return Err(ParseError::InvalidDigit);
                }
                body.after_point = Some(0);
            }
            _ if ch.is_digit(radix) => {
                body.digits.push(ch);
                if let Some(count) = &mut body.after_bar {
                    *count += 1;
                }
                if let Some(count) = &mut body.after_point {
                    *count += 1;
                }
            }
            _ => return Err(ParseError::InvalidDigit),
        }
    }
    if body.digits.is_empty() {
        return Err(ParseError::NoDigits);
    }
    Ok(body)
}

fn parse_binary(src: &str) -> Result<BigFloat, ParseError> {
    let body = scan(src, 2, true)?;
    let mantissa = IBig::from(UBig::from_str_radix(&body.digits, 2)?);
    let fract = body.after_point.unwrap_or(0);
    match body.after_bar {
        Some(guard) => {
            // raw form: the trailing digits are (the top of) the guard
            // region; digit positions below it only carry implied zeros
            let mantissa = if guard <= GUARD_BITS {
                mantissa << (GUARD_BITS - guard)
            } else {
                rounding_right_shift(mantissa, guard - GUARD_BITS)
            };
            Ok(BigFloat::from_parts(
                mantissa,
                guard as isize - fract as isize,
            ))
        }
        None => Ok(BigFloat::from_value(mantissa, -(fract as isize))),
    }
}

fn parse_hex(src: &str) -> Result<BigFloat, ParseError> {
    let body = scan(src, 16, false)?;
    let mantissa = IBig::from(UBig::from_str_radix(&body.digits, 16)?);
    let fract = body.after_point.unwrap_or(0);
    Ok(BigFloat::from_value(mantissa, -4 * fract as isize))
}

fn parse_decimal(src: &str) -> Result<BigFloat, ParseError> {
    let (body, exponent) = match src.find(&['e', 'E'][..]) {
        Some(at) => {
            let exponent = match src[at + 1..].parse::<isize>() {
                Ok(exponent) => exponent,
                Err(_) if src[at + 1..].is_empty() => return Err(ParseError::NoDigits),
                Err(_) => return Err(ParseError::InvalidDigit),
            };
            (&src[..at], exponent)
        }
        None => (src, 0),
    };
    let body = scan(body, 10, false)?;
    let digits = UBig::from_str_radix(&body.digits, 10)?;
    let fract = body.after_point.unwrap_or(0);

    let power = exponent - fract as isize;
    if power >= 0 {
        // an exact integer
        let value = digits * UBig::from(10u8).pow(power as usize);
        return Ok(BigFloat::from_value(IBig::from(value), 0));
    }

    // digits · 10^-k: divide out 5^k with the guard region taking the
    // rounded tail, keeping about as many visible bits as were written
    let k = (-power) as usize;
    let widen = 7 * k / 3 + 1;
    let numerator = digits << (GUARD_BITS + widen);
    let denominator = UBig::from(5u8).pow(k);
    let (quotient, rem) = dashu_base::DivRem::div_rem(numerator, &denominator);
    let quotient = if rem << 1usize >= denominator {
        quotient + UBig::ONE
    } else {
        quotient
    };
    Ok(BigFloat::from_parts(
        IBig::from(quotient),
        power - widen as isize,
    ))
}
