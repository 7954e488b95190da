use crate::{
    error::panic_scale_overflow,
    helper_macros,
    ibig_ext::truncate_to_and_round,
    repr::{BigFloat, GUARD_BITS},
};
use core::ops::{Mul, MulAssign};
use dashu_base::Sign;

impl Mul for &BigFloat {
    type Output = BigFloat;

    fn mul(self, rhs: Self) -> Self::Output {
        // powers of two multiply by scale arithmetic alone, preserving
        // every mantissa bit of the other operand
        if rhs.is_power_of_two() {
            return mul_power_of_two(self, rhs);
        }
        if self.is_power_of_two() {
            return mul_power_of_two(rhs, self);
        }

        // each operand counts its guard region once; one copy comes back out
        let scale = product_scale(self.scale, rhs.scale, 0);
        if self.is_strict_zero() || rhs.is_strict_zero() {
            return BigFloat {
                mantissa: dashu_int::IBig::ZERO,
                scale,
                size: 0,
            };
        }

        let product = &self.mantissa * &rhs.mantissa;
        let (mantissa, shift) = truncate_to_and_round(product, self.size.min(rhs.size));
        BigFloat::from_parts(mantissa, product_scale(self.scale, rhs.scale, shift as isize))
    }
}

/// `value * (±2^k)`: flip the sign if needed and adjust the scale, exact.
fn mul_power_of_two(value: &BigFloat, pow: &BigFloat) -> BigFloat {
    let mantissa = match pow.mantissa.sign() {
        Sign::Positive => value.mantissa.clone(),
        Sign::Negative => -&value.mantissa,
    };
    let point = pow.size as isize - 1;
    let scale = product_scale(value.scale, pow.scale, point);
    BigFloat {
        mantissa,
        scale,
        size: value.size,
    }
}

#[inline]
fn product_scale(lhs: isize, rhs: isize, extra: isize) -> isize {
    let scale = lhs as i128 + rhs as i128 - GUARD_BITS as i128 + extra as i128;
    match isize::try_from(scale) {
        Ok(scale) => scale,
        Err(_) => panic_scale_overflow(),
    }
}

helper_macros::forward_binop_to_ref_ref!(impl Mul, mul);
helper_macros::impl_binop_assign_by_taking!(impl MulAssign, mul_assign, mul);
helper_macros::impl_commutative_binop_with_primitives!(impl Mul, mul);
