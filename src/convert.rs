//! Conversions between [BigFloat] and the primitive numeric types.
//!
//! Integer conversions are exact in both directions (to-integer truncates
//! toward zero). IEEE 754 conversions decode exactly, including
//! subnormals, and encode with round-to-nearest-ties-to-even; infinities
//! and NaNs are rejected on the way in and only produced by overflow on
//! the way out. Decimal conversions exchange the 96-bit-mantissa,
//! power-of-ten representation as explicit parts.

use crate::{
    ibig_ext::rounding_shr_magnitude,
    repr::{BigFloat, GUARD_BITS},
};
use dashu_base::{BitTest, ConversionError, DivRem, Sign};
use dashu_int::{IBig, UBig};

// decimal128-style parts: 96-bit mantissa times a power of ten
const DECIMAL_MANTISSA_BITS: usize = 96;
const DECIMAL_MAX_SCALE: u32 = 28;
// headroom covering the base-10 to base-2 conversion loss
const DECIMAL_EXTRA_BITS: usize = 96;

impl From<IBig> for BigFloat {
    #[inline]
    fn from(n: IBig) -> Self {
        Self::from_value(n, 0)
    }
}

impl From<UBig> for BigFloat {
    #[inline]
    fn from(n: UBig) -> Self {
        IBig::from(n).into()
    }
}

macro_rules! bigfloat_unsigned_conversions {
    ($($t:ty)*) => {$(
        impl From<$t> for BigFloat {
            #[inline]
            fn from(value: $t) -> BigFloat {
                UBig::from(value).into()
            }
        }
    )*};
}
bigfloat_unsigned_conversions!(u8 u16 u32 u64 u128 usize);

macro_rules! bigfloat_signed_conversions {
    ($($t:ty)*) => {$(
        impl From<$t> for BigFloat {
            #[inline]
            fn from(value: $t) -> BigFloat {
                IBig::from(value).into()
            }
        }
    )*};
}
bigfloat_signed_conversions!(i8 i16 i32 i64 i128 isize);

impl BigFloat {
    /// The integral part of the value as a big integer (truncation toward
    /// zero), exact.
    pub fn to_ibig(&self) -> IBig {
        let fract_bits = self.accuracy();
        let (sign, mag) = self.mantissa.clone().into_parts();
        let integral = if fract_bits <= 0 {
            mag << (-fract_bits) as usize
        } else {
            mag >> fract_bits as usize
        };
        IBig::from_parts(sign, integral)
    }
}

impl From<&BigFloat> for IBig {
    #[inline]
    fn from(value: &BigFloat) -> IBig {
        value.to_ibig()
    }
}

impl From<BigFloat> for IBig {
    #[inline]
    fn from(value: BigFloat) -> IBig {
        value.to_ibig()
    }
}

macro_rules! bigfloat_to_int_conversions {
    ($($t:ty)*) => {$(
        impl TryFrom<&BigFloat> for $t {
            type Error = ConversionError;
            #[inline]
            fn try_from(value: &BigFloat) -> Result<$t, ConversionError> {
                <$t>::try_from(value.to_ibig())
            }
        }

        impl TryFrom<BigFloat> for $t {
            type Error = ConversionError;
            #[inline]
            fn try_from(value: BigFloat) -> Result<$t, ConversionError> {
                <$t>::try_from(value.to_ibig())
            }
        }
    )*};
}
bigfloat_to_int_conversions!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);

impl TryFrom<f32> for BigFloat {
    type Error = ConversionError;

    /// Decode a single precision float, exactly. The result carries the
    /// 24 bits of precision of the source format (fewer for subnormals).
    /// NaNs and infinities are out of bounds.
    fn try_from(f: f32) -> Result<Self, ConversionError> {
        let bits = f.to_bits();
        let sign = if bits >> 31 == 0 {
            Sign::Positive
        } else {
            Sign::Negative
        };
        let exponent = ((bits >> 23) & 0xff) as isize;
        let fraction = bits & 0x7f_ffff;
        if exponent == 0xff {
            return Err(ConversionError::OutOfBounds);
        }
        if exponent == 0 && fraction == 0 {
            // both zeros map to the zero accurate at the last subnormal bit
            return Ok(Self::zero_with_accuracy(149));
        }
        let (mantissa, scale) = if exponent == 0 {
            (fraction, 1 - 127 - 23)
        } else {
            (fraction | 0x80_0000, exponent - 127 - 23)
        };
        Ok(Self::from_value_with_binary_precision(
            IBig::from_parts(sign, UBig::from(mantissa)),
            scale,
            24,
        ))
    }
}

impl TryFrom<f64> for BigFloat {
    type Error = ConversionError;

    /// Decode a double precision float, exactly. The result carries the
    /// 53 bits of precision of the source format (fewer for subnormals).
    /// NaNs and infinities are out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigfloat::BigFloat;
    /// let a = BigFloat::try_from(0.5f64).unwrap();
    /// assert_eq!(a.precision(), 53);
    /// assert_eq!(a.to_f64(), 0.5);
    /// assert!(BigFloat::try_from(f64::NAN).is_err());
    /// ```
    fn try_from(f: f64) -> Result<Self, ConversionError> {
        let bits = f.to_bits();
        let sign = if bits >> 63 == 0 {
            Sign::Positive
        } else {
            Sign::Negative
        };
        let exponent = ((bits >> 52) & 0x7ff) as isize;
        let fraction = bits & 0xf_ffff_ffff_ffff;
        if exponent == 0x7ff {
            return Err(ConversionError::OutOfBounds);
        }
        if exponent == 0 && fraction == 0 {
            return Ok(Self::zero_with_accuracy(1074));
        }
        let (mantissa, scale) = if exponent == 0 {
            (fraction, 1 - 1023 - 52)
        } else {
            (fraction | 0x10_0000_0000_0000, exponent - 1023 - 52)
        };
        Ok(Self::from_value_with_binary_precision(
            IBig::from_parts(sign, UBig::from(mantissa)),
            scale,
            53,
        ))
    }
}

impl BigFloat {
    /// Encode into a single precision float with round-to-nearest, ties to
    /// even. Overflow produces an infinity, underflow a (signed) zero.
    pub fn to_f32(&self) -> f32 {
        if self.mantissa.is_zero() {
            return 0.0;
        }
        let sign_bit = ((self.mantissa.sign() == Sign::Negative) as u32) << 31;
        let msb_exp = self.size as i128 - 1 + self.scale as i128 - GUARD_BITS as i128;
        if msb_exp > 127 {
            return f32::from_bits(sign_bit | 0xff << 23);
        }

        if msb_exp >= -126 {
            let (frac, bumped) = round_fraction(self.magnitude(), self.size, 24);
            let msb_exp = msb_exp + bumped as i128;
            if msb_exp > 127 {
                return f32::from_bits(sign_bit | 0xff << 23);
            }
            let biased = (msb_exp + 127) as u32;
            let frac = u32::try_from(frac).unwrap() & 0x7f_ffff;
            f32::from_bits(sign_bit | biased << 23 | frac)
        } else {
            // subnormal range: pin the last place at 2^-149
            let kept = msb_exp + 149 + 1;
            let frac = if kept >= self.size as i128 {
                self.magnitude() << (kept - self.size as i128) as usize
            } else {
                shr_ties_even(self.magnitude(), (self.size as i128 - kept) as usize)
            };
            f32::from_bits(sign_bit | u32::try_from(frac).unwrap())
        }
    }

    /// Encode into a double precision float with round-to-nearest, ties to
    /// even. Overflow produces an infinity, underflow a (signed) zero; the
    /// boundary at the smallest subnormal resolves ties to even.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigfloat::BigFloat;
    /// assert_eq!(BigFloat::from(1u8).to_f64(), 1.0);
    /// let huge = BigFloat::from(2u8).powi(2000);
    /// assert_eq!(huge.to_f64(), f64::INFINITY);
    /// ```
    pub fn to_f64(&self) -> f64 {
        if self.mantissa.is_zero() {
            return 0.0;
        }
        let sign_bit = ((self.mantissa.sign() == Sign::Negative) as u64) << 63;
        let msb_exp = self.size as i128 - 1 + self.scale as i128 - GUARD_BITS as i128;
        if msb_exp > 1023 {
            return f64::from_bits(sign_bit | 0x7ff << 52);
        }

        if msb_exp >= -1022 {
            let (frac, bumped) = round_fraction(self.magnitude(), self.size, 53);
            let msb_exp = msb_exp + bumped as i128;
            if msb_exp > 1023 {
                return f64::from_bits(sign_bit | 0x7ff << 52);
            }
            let biased = (msb_exp + 1023) as u64;
            let frac = u64::try_from(frac).unwrap() & 0xf_ffff_ffff_ffff;
            f64::from_bits(sign_bit | biased << 52 | frac)
        } else {
            // subnormal range: pin the last place at 2^-1074
            let kept = msb_exp + 1074 + 1;
            let frac = if kept >= self.size as i128 {
                self.magnitude() << (kept - self.size as i128) as usize
            } else {
                shr_ties_even(self.magnitude(), (self.size as i128 - kept) as usize)
            };
            f64::from_bits(sign_bit | u64::try_from(frac).unwrap())
        }
    }

    /// True when the value encodes into a normal (or zero) double without
    /// overflow or denormalization.
    #[inline]
    pub fn fits_in_f64(&self) -> bool {
        self.mantissa.is_zero() || self.to_f64().is_normal()
    }

    /// True when the value survives conversion to a double, allowing the
    /// subnormal range.
    #[inline]
    pub fn fits_in_f64_with_denormalization(&self) -> bool {
        if self.mantissa.is_zero() {
            return true;
        }
        let encoded = self.to_f64();
        encoded.is_finite() && encoded != 0.0
    }

    /// True when [to_decimal128_parts][Self::to_decimal128_parts] succeeds.
    #[inline]
    pub fn fits_in_decimal128(&self) -> bool {
        self.to_decimal128_parts().is_ok()
    }

    /// Reconstruct a value from decimal parts `±mantissa · 10^-scale`
    /// (96-bit mantissa, scale at most 28), exactly up to the stated
    /// conversion headroom. Any value accepted here converts back to the
    /// identical parts.
    pub fn from_decimal128_parts(
        sign: Sign,
        mantissa: u128,
        scale: u32,
    ) -> Result<Self, ConversionError> {
        if mantissa >> DECIMAL_MANTISSA_BITS != 0 || scale > DECIMAL_MAX_SCALE {
            return Err(ConversionError::OutOfBounds);
        }
        let mag = UBig::from(mantissa);
        if scale == 0 {
            return Ok(Self::from_value(sign * mag, 0));
        }

        // mantissa / 10^s = (mantissa · 2^(G+t) / 5^s) · 2^(-s-t-G)
        let numerator = mag << (GUARD_BITS + DECIMAL_EXTRA_BITS);
        let denominator = UBig::from(5u8).pow(scale as usize);
        let (quotient, rem) = numerator.div_rem(&denominator);
        let quotient = if rem << 1usize >= denominator {
            quotient + UBig::ONE
        } else {
            quotient
        };
        Ok(Self::from_parts(
            sign * quotient,
            -(scale as isize) - DECIMAL_EXTRA_BITS as isize,
        ))
    }

    /// Break the value into decimal parts `(sign, mantissa, scale)` with
    /// `mantissa < 2^96` and `scale <= 28`, choosing the scale that makes
    /// the parts convert back to this exact value where one exists (and
    /// the shortest such scale otherwise). Values too large for the
    /// decimal mantissa are out of bounds; values below the smallest
    /// representable decimal round to zero.
    pub fn to_decimal128_parts(&self) -> Result<(Sign, u128, u32), ConversionError> {
        if self.is_zero() {
            return Ok((Sign::Positive, 0, 0));
        }
        let sign = self.mantissa.sign();

        // the scale a from_decimal128_parts value naturally carries
        let natural = (-(self.scale as i128) - DECIMAL_EXTRA_BITS as i128)
            .clamp(0, DECIMAL_MAX_SCALE as i128) as u32;

        let mut fallback = None;
        let candidates =
            core::iter::once(natural).chain((0..=DECIMAL_MAX_SCALE).filter(|e| *e != natural));
        for exp in candidates {
            let mantissa = match self.decimal_candidate(exp) {
                Some(mantissa) => mantissa,
                None => continue,
            };
            if Self::from_decimal128_parts(sign, mantissa, exp)? == *self {
                return Ok((sign, mantissa, exp));
            }
            fallback.get_or_insert((sign, mantissa, exp));
        }
        match fallback {
            Some(parts) => Ok(parts),
            // even scale 0 overflowed the 96-bit mantissa
            None => Err(ConversionError::OutOfBounds),
        }
    }

    // |self| · 10^exp rounded to an integer, if it fits in 96 bits.
    fn decimal_candidate(&self, exp: u32) -> Option<u128> {
        let scaled = self.magnitude() * UBig::from(5u8).pow(exp as usize);
        let point = GUARD_BITS as i128 - self.scale as i128 - exp as i128;
        let integral = if point <= 0 {
            scaled << (-point) as usize
        } else {
            rounding_shr_magnitude(scaled, point as usize)
        };
        u128::try_from(integral)
            .ok()
            .filter(|m| m >> DECIMAL_MANTISSA_BITS == 0)
    }
}

// Round the top `bits` bits of the magnitude to nearest, ties to even.
// Returns the rounded mantissa and whether the rounding carried into one
// extra bit (in which case the extra bit is dropped and the exponent must
// grow by one).
fn round_fraction(mag: UBig, size: usize, bits: usize) -> (UBig, bool) {
    if size <= bits {
        return (mag << (bits - size), false);
    }
    let frac = shr_ties_even(mag, size - bits);
    if frac.bit_len() > bits {
        (frac >> 1usize, true)
    } else {
        (frac, false)
    }
}

// Right shift rounding to nearest with ties to even; handles shifts beyond
// the bit length (rounding everything away).
fn shr_ties_even(mag: UBig, shift: usize) -> UBig {
    if shift == 0 {
        return mag;
    }
    let (low, high) = mag.split_bits(shift);
    let half = UBig::ONE << (shift - 1);
    match low.cmp(&half) {
        core::cmp::Ordering::Less => high,
        core::cmp::Ordering::Greater => high + UBig::ONE,
        core::cmp::Ordering::Equal => {
            if high.bit(0) {
                high + UBig::ONE
            } else {
                high
            }
        }
    }
}
