use crate::{
    error::{check_divisor, panic_scale_overflow},
    helper_macros,
    ibig_ext::truncate_to_and_round,
    repr::{BigFloat, GUARD_BITS},
};
use core::ops::{Div, DivAssign, Rem, RemAssign};
use dashu_base::{DivRem, Sign, UnsignedAbs};
use dashu_int::{IBig, UBig};

// safety margin of the internal quotient beyond the result precision
const DIV_MARGIN: usize = 4;

impl Div for &BigFloat {
    type Output = BigFloat;

    fn div(self, rhs: Self) -> Self::Output {
        check_divisor(rhs);

        // dividing by a power of two only moves the scale
        if rhs.is_power_of_two() {
            return div_power_of_two(self, rhs);
        }
        if self.is_strict_zero() {
            return BigFloat {
                mantissa: IBig::ZERO,
                scale: quotient_scale(self.scale, rhs.scale, 0),
                size: 0,
            };
        }

        // widen the numerator so the integer quotient carries the result
        // precision plus a few bits to round from
        let target = self.size.min(rhs.size);
        let shift = (target + DIV_MARGIN + rhs.size).saturating_sub(self.size);
        let (quotient, rem) = (&self.mantissa << shift).div_rem(&rhs.mantissa);

        // round the quotient to nearest, ties away from zero
        let quotient = if rem.unsigned_abs() << 1usize >= rhs.magnitude() {
            let sign = self.mantissa.sign() * rhs.mantissa.sign();
            quotient + IBig::from_parts(sign, UBig::ONE)
        } else {
            quotient
        };

        let (mantissa, extra) = truncate_to_and_round(quotient, target);
        let scale = quotient_scale(self.scale, rhs.scale, extra as isize - shift as isize);
        BigFloat::from_parts(mantissa, scale)
    }
}

/// `value / (±2^k)`: flip the sign if needed and adjust the scale, exact.
fn div_power_of_two(value: &BigFloat, pow: &BigFloat) -> BigFloat {
    let mantissa = match pow.mantissa.sign() {
        Sign::Positive => value.mantissa.clone(),
        Sign::Negative => -&value.mantissa,
    };
    let point = pow.size as isize - 1;
    let scale = quotient_scale(value.scale, pow.scale, -point);
    BigFloat {
        mantissa,
        scale,
        size: value.size,
    }
}

#[inline]
fn quotient_scale(lhs: isize, rhs: isize, extra: isize) -> isize {
    let scale = lhs as i128 - rhs as i128 + GUARD_BITS as i128 + extra as i128;
    match isize::try_from(scale) {
        Ok(scale) => scale,
        Err(_) => panic_scale_overflow(),
    }
}

impl BigFloat {
    /// Multiplicative inverse, computed as a division with a power-of-two
    /// numerator at the precision of `self`.
    ///
    /// # Panics
    ///
    /// Panics when `self` is a strict zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigfloat::BigFloat;
    /// let a = BigFloat::from(4u8);
    /// assert_eq!(a.recip(), "0.25".parse().unwrap());
    /// ```
    #[inline]
    pub fn recip(&self) -> Self {
        check_divisor(self);
        let one = Self::one_with_accuracy(self.size.saturating_sub(1) as isize);
        &one / self
    }

    /// Floored modulus: the result takes the sign of the divisor.
    ///
    /// The `%` operator is the truncated remainder (sign of the dividend);
    /// both are computed exactly in the common frame of the operands.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigfloat::BigFloat;
    /// let a = BigFloat::from(-2i8);
    /// let b = BigFloat::from(10u8);
    /// assert_eq!(&a % &b, BigFloat::from(-2i8));
    /// assert_eq!(a.modulo(&b), BigFloat::from(8u8));
    /// ```
    pub fn modulo(&self, rhs: &Self) -> Self {
        let rem = self % rhs;
        if !rem.is_strict_zero() && rem.mantissa.sign() != rhs.mantissa.sign() {
            &rem + rhs
        } else {
            rem
        }
    }
}

impl Rem for &BigFloat {
    type Output = BigFloat;

    /// Truncated remainder with the sign of the dividend, exact.
    fn rem(self, rhs: Self) -> Self::Output {
        check_divisor(rhs);

        // align both mantissas to the smaller scale and reduce exactly
        let scale = self.scale.min(rhs.scale);
        let lhs_mantissa = &self.mantissa << (self.scale - scale) as usize;
        let rhs_mantissa = &rhs.mantissa << (rhs.scale - scale) as usize;
        BigFloat::from_parts(lhs_mantissa % rhs_mantissa, scale)
    }
}

helper_macros::forward_binop_to_ref_ref!(impl Div, div);
helper_macros::forward_binop_to_ref_ref!(impl Rem, rem);
helper_macros::impl_binop_assign_by_taking!(impl DivAssign, div_assign, div);
helper_macros::impl_binop_assign_by_taking!(impl RemAssign, rem_assign, rem);
helper_macros::impl_commutative_binop_with_primitives!(impl Div, div);
helper_macros::impl_commutative_binop_with_primitives!(impl Rem, rem);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_exact() {
        assert_eq!(BigFloat::from(42u8) / BigFloat::from(6u8), BigFloat::from(7u8));
        assert_eq!(BigFloat::from(-42i8) / BigFloat::from(6u8), BigFloat::from(-7i8));
        assert_eq!(BigFloat::from(21u8) / BigFloat::from(2u8), "10.5".parse().unwrap());
    }

    #[test]
    fn test_div_rounds() {
        // 1/3 at the precision of the operands
        let third = BigFloat::ONE / BigFloat::from(3u8);
        assert!(third < BigFloat::ONE);
        assert_eq!(&third * &BigFloat::from(3u8), BigFloat::ONE);
    }

    #[test]
    fn test_recip() {
        let a = BigFloat::from(8u8);
        assert_eq!(a.recip(), "0.125".parse().unwrap());
        let b: BigFloat = "1.6".parse().unwrap();
        assert_eq!(b.recip(), "0.625".parse().unwrap());
    }

    #[test]
    #[should_panic]
    fn test_div_by_zero() {
        let _ = BigFloat::ONE / BigFloat::ZERO;
    }

    #[test]
    fn test_rem_mod() {
        let a = BigFloat::from(14u8);
        let b = BigFloat::from(10u8);
        assert_eq!(&a % &b, BigFloat::from(4u8));
        assert_eq!(BigFloat::from(-2i8) % &b, BigFloat::from(-2i8));
        assert_eq!(BigFloat::from(-2i8).modulo(&b), BigFloat::from(8u8));
        assert_eq!(BigFloat::from(2i8).modulo(&BigFloat::from(-10i8)), BigFloat::from(-8i8));
    }
}
