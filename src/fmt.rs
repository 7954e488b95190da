//! Implementation of formatters and diagnostic string forms.

use crate::{
    ibig_ext::rounding_shr_magnitude,
    repr::{BigFloat, GUARD_BITS},
};
use alloc::format;
use alloc::string::String;
use core::fmt::{self, Display, Formatter, Write};
use dashu_base::Sign;
use dashu_int::UBig;

impl fmt::Debug for BigFloat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.mantissa, f)?;
        f.write_str(" * 2 ^ ")?;
        fmt::Debug::fmt(&(self.scale as i128 - GUARD_BITS as i128), f)?;
        f.write_str(" (prec: ")?;
        fmt::Debug::fmt(&self.precision(), f)?;
        f.write_str(", acc: ")?;
        fmt::Debug::fmt(&self.accuracy(), f)?;
        f.write_str(")")
    }
}

impl Display for BigFloat {
    /// Prints the value in decimal, rounded to the number of decimal
    /// digits its visible precision justifies (the guard region only
    /// participates in the rounding).
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        if self.mantissa.sign() == Sign::Negative {
            f.write_char('-')?;
        }

        // exact decimal digits of the raw value, fraction through 5^k
        let mag = self.magnitude();
        let fract_bits = self.accuracy();
        let (int_digits, frac_digits) = if fract_bits <= 0 {
            (format!("{}", mag << (-fract_bits) as usize), String::new())
        } else {
            let point = fract_bits as usize;
            let (low, high) = mag.split_bits(point);
            let frac = format!("{}", low * UBig::from(5u8).pow(point));
            let mut padded = String::new();
            for _ in 0..point - frac.len() {
                padded.push('0');
            }
            padded.push_str(&frac);
            (format!("{}", high), padded)
        };

        // one decimal digit per log10(2) bits of visible precision
        let significant = ((self.precision() * 30103 + 99999) / 100000).max(1);
        let (int_digits, frac_digits) =
            round_significant(int_digits, frac_digits, significant);

        f.write_str(&int_digits)?;
        let frac_digits = frac_digits.trim_end_matches('0');
        if !frac_digits.is_empty() {
            f.write_char('.')?;
            f.write_str(frac_digits)?;
        }
        Ok(())
    }
}

// Round a decimal digit string (split at the radix point) to the given
// number of significant digits, half up.
fn round_significant(int_part: String, frac_part: String, significant: usize) -> (String, String) {
    let mut digits: alloc::vec::Vec<u8> = int_part.bytes().chain(frac_part.bytes()).collect();
    let mut point = int_part.len();
    let first = match digits.iter().position(|d| *d != b'0') {
        Some(first) => first,
        None => return (String::from("0"), String::new()),
    };
    let cut = first + significant;
    if cut < digits.len() {
        let round_up = digits[cut] >= b'5';
        if cut <= point {
            digits.truncate(point);
            for digit in &mut digits[cut..] {
                *digit = b'0';
            }
        } else {
            digits.truncate(cut);
        }
        if round_up {
            let mut at = cut.min(digits.len());
            loop {
                if at == 0 {
                    digits.insert(0, b'1');
                    point += 1;
                    break;
                }
                at -= 1;
                if digits[at] < b'9' {
                    digits[at] += 1;
                    break;
                }
                digits[at] = b'0';
            }
        }
    }
    let frac = String::from_utf8(digits.split_off(point)).unwrap();
    let int = if digits.is_empty() {
        String::from("0")
    } else {
        String::from_utf8(digits).unwrap()
    };
    (int, frac)
}

impl BigFloat {
    /// Raw mantissa bits with `|` marking the start of the guard region,
    /// a radix point per the scale, and a `0b` prefix; the inverse of the
    /// binary parser.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigfloat::BigFloat;
    /// let a: BigFloat = "0b11|01000000000000000000000000000000".parse().unwrap();
    /// assert_eq!(a.to_binary_string(), "0b11|01000000000000000000000000000000");
    /// ```
    #[inline]
    pub fn to_binary_string(&self) -> String {
        self.to_binary_string_with(Some('|'))
    }

    /// [to_binary_string][Self::to_binary_string] with a configurable
    /// guard-region indicator (`None` omits it).
    pub fn to_binary_string_with(&self, guard_separator: Option<char>) -> String {
        let mut out = String::new();
        if self.mantissa.sign() == Sign::Negative {
            out.push('-');
        }
        out.push_str("0b");

        let mut digits = format!("{:b}", self.magnitude());
        // integral values coarser than the guard frame carry implied zeros
        let appended = (-self.accuracy()).max(0) as usize;
        let fract = self.accuracy().max(0) as usize;
        for _ in 0..appended {
            digits.push('0');
        }
        let min_len = (GUARD_BITS + appended).max(fract) + 1;
        while digits.len() < min_len {
            digits.insert(0, '0');
        }

        // insert markers, the one further from the low end first
        let sep_pos = GUARD_BITS + appended;
        match guard_separator {
            Some(sep) if sep_pos >= fract => {
                let at = digits.len() - sep_pos;
                digits.insert(at, sep);
                if fract > 0 {
                    let at = digits.len() - fract;
                    digits.insert(at, '.');
                }
            }
            Some(sep) => {
                let at = digits.len() - fract;
                digits.insert(at, '.');
                let at = digits.len() - sep_pos;
                digits.insert(at, sep);
            }
            None => {
                if fract > 0 {
                    let at = digits.len() - fract;
                    digits.insert(at, '.');
                }
            }
        }
        out.push_str(&digits);
        out
    }

    /// Binary scientific form `0b1.xxx|xxxp±k` with the guard indicator,
    /// where `k` is the power of two of the leading bit.
    #[inline]
    pub fn to_scientific_string(&self) -> String {
        self.to_scientific_string_with(Some('|'))
    }

    /// [to_scientific_string][Self::to_scientific_string] with a
    /// configurable guard-region indicator (`None` omits it).
    pub fn to_scientific_string_with(&self, guard_separator: Option<char>) -> String {
        if self.is_strict_zero() {
            return String::from("0b0p+0");
        }
        let mut out = String::new();
        if self.mantissa.sign() == Sign::Negative {
            out.push('-');
        }
        out.push_str("0b");

        let mut digits = format!("{:b}", self.magnitude());
        if digits.len() > 1 {
            digits.insert(1, '.');
            if let Some(sep) = guard_separator {
                if self.size > GUARD_BITS {
                    let at = digits.len() - GUARD_BITS;
                    digits.insert(at, sep);
                }
            }
        }
        out.push_str(&digits);
        let exponent = self.size as i128 - 1 + self.scale as i128 - GUARD_BITS as i128;
        out.push('p');
        if exponent >= 0 {
            out.push('+');
        }
        out.push_str(&format!("{}", exponent));
        out
    }

    /// Hexadecimal digits of the value rounded to the nearest integer
    /// (ties away from zero), without a prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigfloat::BigFloat;
    /// assert_eq!(BigFloat::from(43981u16).to_hex_string(), "ABCD");
    /// ```
    pub fn to_hex_string(&self) -> String {
        let fract = self.accuracy();
        let integral = if fract <= 0 {
            self.magnitude() << (-fract) as usize
        } else {
            rounding_shr_magnitude(self.magnitude(), fract as usize)
        };
        if self.mantissa.sign() == Sign::Negative && !integral.is_zero() {
            format!("-{:X}", integral)
        } else {
            format!("{:X}", integral)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_decimal() {
        assert_eq!(format!("{}", BigFloat::from(42u8)), "42");
        assert_eq!(format!("{}", BigFloat::from(-42i8)), "-42");
        assert_eq!(format!("{}", BigFloat::ZERO), "0");
        let half: BigFloat = "0.5".parse().unwrap();
        assert_eq!(format!("{}", half), "0.5");
        let x: BigFloat = "-12.3125".parse().unwrap();
        assert_eq!(format!("{}", x), "-12.3125");
    }

    #[test]
    fn test_debug_shape() {
        let a = BigFloat::from(3u8);
        let rendered = format!("{:?}", a);
        assert!(rendered.contains(" * 2 ^ "));
        assert!(rendered.contains("(prec: 2, acc: 32)"));
    }

    #[test]
    fn test_binary_string_round_trip() {
        let a = BigFloat::from(5u8);
        let text = a.to_binary_string();
        let back: BigFloat = text.parse().unwrap();
        assert!(back.is_bitwise_equal(&a));

        let b: BigFloat = "0b101.1".parse().unwrap();
        let back: BigFloat = b.to_binary_string().parse().unwrap();
        assert!(back.is_bitwise_equal(&b));
    }

    #[test]
    fn test_scientific_string() {
        let one = BigFloat::ONE;
        assert_eq!(one.to_scientific_string(), "0b1.|00000000000000000000000000000000p+0");
    }

    #[test]
    fn test_hex_string_rounds_to_integer() {
        let a: BigFloat = "10.75".parse().unwrap();
        assert_eq!(a.to_hex_string(), "B");
        let b: BigFloat = "10.25".parse().unwrap();
        assert_eq!(b.to_hex_string(), "A");
    }
}
