//! Shift operators.
//!
//! `<<` and `>>` shift the mantissa itself, multiplying the value by a
//! power of two while keeping the scale (and with it the accuracy frame)
//! fixed. This makes `x << k` bitwise-compatible with results computed by
//! addition in the same frame. To move the frame instead, use
//! [BigFloat::adjust_scale].

use crate::{
    ibig_ext::rounding_right_shift_in_place,
    repr::BigFloat,
};
use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

impl Shl<usize> for BigFloat {
    type Output = Self;
    #[inline]
    fn shl(mut self, rhs: usize) -> Self::Output {
        self.shl_assign(rhs);
        self
    }
}

impl Shl<usize> for &BigFloat {
    type Output = BigFloat;
    #[inline]
    fn shl(self, rhs: usize) -> Self::Output {
        self.clone().shl(rhs)
    }
}

impl ShlAssign<usize> for BigFloat {
    #[inline]
    fn shl_assign(&mut self, rhs: usize) {
        if self.is_strict_zero() || rhs == 0 {
            return;
        }
        self.mantissa <<= rhs;
        self.size += rhs;
    }
}

impl Shr<usize> for BigFloat {
    type Output = Self;
    #[inline]
    fn shr(mut self, rhs: usize) -> Self::Output {
        self.shr_assign(rhs);
        self
    }
}

impl Shr<usize> for &BigFloat {
    type Output = BigFloat;
    #[inline]
    fn shr(self, rhs: usize) -> Self::Output {
        self.clone().shr(rhs)
    }
}

impl ShrAssign<usize> for BigFloat {
    /// Mantissa right shift; the dropped bits round to nearest.
    #[inline]
    fn shr_assign(&mut self, rhs: usize) {
        rounding_right_shift_in_place(&mut self.mantissa, rhs, &mut self.size);
    }
}
