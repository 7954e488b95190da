//! Rounding to integers.
//!
//! The radix point of a value sits `accuracy()` raw bits above the bottom
//! of the mantissa (guard region included), so every operator here splits
//! the mantissa at that position. The default operators return a
//! minimal-precision integer in the value frame; the `_preserving_accuracy`
//! variants keep the operand's own frame and merely clear the fractional
//! bits. None of these operations can fail.

use crate::{
    ibig_ext::rounding_right_shift,
    repr::{BigFloat, GUARD_BITS},
};
use dashu_base::{BitTest, Sign};
use dashu_int::{IBig, UBig};

impl BigFloat {
    /// Round toward zero to a minimal-precision integer.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigfloat::BigFloat;
    /// let a: BigFloat = "2.7".parse().unwrap();
    /// assert_eq!(a.trunc(), BigFloat::from(2u8));
    /// assert_eq!((-a).trunc(), BigFloat::from(-2i8));
    /// ```
    pub fn trunc(&self) -> Self {
        let fract_bits = self.accuracy();
        if fract_bits <= 0 {
            return self.clone();
        }
        let (sign, mag) = self.mantissa.clone().into_parts();
        let integral = mag >> fract_bits as usize;
        Self::from_value(IBig::from_parts(sign, integral), 0)
    }

    /// Round toward negative infinity to a minimal-precision integer.
    pub fn floor(&self) -> Self {
        if self.accuracy() <= 0 {
            return self.clone();
        }
        let (integral, _) = self.split_rounded(Sign::Negative);
        Self::from_value(integral, 0)
    }

    /// Round toward positive infinity to a minimal-precision integer.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigfloat::BigFloat;
    /// let a: BigFloat = "2.1".parse().unwrap();
    /// assert_eq!(a.ceil(), BigFloat::from(3u8));
    /// assert_eq!(a.floor(), BigFloat::from(2u8));
    /// assert_eq!((-a).ceil(), BigFloat::from(-2i8));
    /// ```
    pub fn ceil(&self) -> Self {
        if self.accuracy() <= 0 {
            return self.clone();
        }
        let (integral, _) = self.split_rounded(Sign::Positive);
        Self::from_value(integral, 0)
    }

    /// Round to the nearest integer, ties away from zero. The guard bits
    /// take part in the rounding like any other fractional bits, so a
    /// half-ulp produced by earlier arithmetic still breaks the tie.
    pub fn round(&self) -> Self {
        let fract_bits = self.accuracy();
        if fract_bits <= 0 {
            return self.clone();
        }
        let integral = rounding_right_shift(self.mantissa.clone(), fract_bits as usize);
        Self::from_value(integral, 0)
    }

    /// [floor][Self::floor], but in the operand's own frame: the scale and
    /// with it the accuracy of the result equal the input's.
    pub fn floor_preserving_accuracy(&self) -> Self {
        let fract_bits = self.accuracy();
        if fract_bits <= 0 {
            return self.clone();
        }
        let (integral, _) = self.split_rounded(Sign::Negative);
        Self::from_parts(integral << fract_bits as usize, self.scale)
    }

    /// [ceil][Self::ceil], but in the operand's own frame.
    pub fn ceil_preserving_accuracy(&self) -> Self {
        let fract_bits = self.accuracy();
        if fract_bits <= 0 {
            return self.clone();
        }
        let (integral, _) = self.split_rounded(Sign::Positive);
        Self::from_parts(integral << fract_bits as usize, self.scale)
    }

    /// The fractional part in the operand's own frame, such that
    /// `self.trunc() + self.fract()` equals `self`.
    pub fn fract(&self) -> Self {
        let fract_bits = self.accuracy();
        if fract_bits <= 0 {
            return Self::zero_with_accuracy(self.accuracy());
        }
        let (sign, mag) = self.mantissa.clone().into_parts();
        let (low, _) = mag.split_bits(fract_bits as usize);
        Self::from_parts(IBig::from_parts(sign, low), self.scale)
    }

    /// True when the value is an integer at its own accuracy.
    ///
    /// Values with no fractional bits (`scale >= GUARD_BITS`) are always
    /// integers. Otherwise the distance from the nearest integer must
    /// itself be a guard-noise zero: fractional bits that are all zeros or
    /// all ones at the top of the guard region count as integral.
    pub fn is_integer(&self) -> bool {
        let fract_bits = self.accuracy();
        if fract_bits <= 0 {
            return true;
        }
        let fract_bits = fract_bits as usize;
        let (_, mag) = self.mantissa.clone().into_parts();
        let (low, _) = mag.split_bits(fract_bits);
        if low.is_zero() {
            return true;
        }
        let complement = (UBig::ONE << fract_bits) - &low;
        let distance = low.min(complement);
        let bits = distance.bit_len();
        bits < GUARD_BITS && (bits as isize).saturating_add(self.scale) < GUARD_BITS as isize
    }

    // Split at the radix point, rounding the integral part toward the
    // given direction. Returns the signed integral part and whether any
    // fractional bit was dropped.
    fn split_rounded(&self, toward: Sign) -> (IBig, bool) {
        let fract_bits = self.accuracy();
        debug_assert!(fract_bits > 0);
        let (sign, mag) = self.mantissa.clone().into_parts();
        let (low, high) = mag.split_bits(fract_bits as usize);
        let inexact = !low.is_zero();
        let step = inexact && sign == toward;
        let integral = if step { high + UBig::ONE } else { high };
        (IBig::from_parts(sign, integral), inexact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn half() -> BigFloat {
        BigFloat::from_value(IBig::ONE, -1)
    }

    #[test]
    fn test_trunc_floor_ceil() {
        let a = BigFloat::from(5u8) + half(); // 5.5
        assert_eq!(a.trunc(), BigFloat::from(5u8));
        assert_eq!(a.floor(), BigFloat::from(5u8));
        assert_eq!(a.ceil(), BigFloat::from(6u8));
        assert_eq!(a.round(), BigFloat::from(6u8));

        let b = -a;
        assert_eq!(b.trunc(), BigFloat::from(-5i8));
        assert_eq!(b.floor(), BigFloat::from(-6i8));
        assert_eq!(b.ceil(), BigFloat::from(-5i8));
        assert_eq!(b.round(), BigFloat::from(-6i8));
    }

    #[test]
    fn test_round_integers_unchanged() {
        let a = BigFloat::from(7u8);
        assert!(a.round().is_integer());
        assert_eq!(a.round(), a);
        assert_eq!(a.floor(), a);
        assert_eq!(a.ceil(), a);
    }

    #[test]
    fn test_preserving_accuracy() {
        let a = BigFloat::from(5u8) + half();
        let f = a.floor_preserving_accuracy();
        assert_eq!(f, BigFloat::from(5u8));
        assert_eq!(f.scale(), a.scale());
        let c = a.ceil_preserving_accuracy();
        assert_eq!(c, BigFloat::from(6u8));
        assert_eq!(c.scale(), a.scale());
    }

    #[test]
    fn test_fract() {
        let a = BigFloat::from(5u8) + half();
        assert_eq!(&a.trunc() + &a.fract(), a);
        assert_eq!(a.fract(), half());
    }

    #[test]
    fn test_is_integer_bands() {
        assert!(BigFloat::from(3u8).is_integer());
        assert!(BigFloat::ZERO.is_integer());
        // no fractional bits at all
        assert!(BigFloat::from_parts(IBig::from(3), GUARD_BITS as isize).is_integer());
        // guard noise right above an integer
        assert!((BigFloat::from(3u8) + BigFloat::from_parts(IBig::ONE, 0)).is_integer());
        // a real half is not an integer
        assert!(!(BigFloat::from(3u8) + half()).is_integer());
        // noise-zero values are integers
        assert!(BigFloat::from_parts(IBig::ONE, 0).is_integer());
    }
}
