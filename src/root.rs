use crate::{
    error::{panic_root_negative, panic_root_order_zero, panic_scale_overflow},
    ibig_ext,
    repr::{BigFloat, GUARD_BITS},
};
use dashu_base::{Sign, SquareRootRem};
use dashu_int::{IBig, UBig};

impl BigFloat {
    /// Square root, rounded to nearest at the precision of the operand.
    ///
    /// # Panics
    ///
    /// Panics when the value is negative (and not a guard-noise zero).
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigfloat::BigFloat;
    /// let a = BigFloat::from(9u8);
    /// assert_eq!(a.sqrt(), BigFloat::from(3u8));
    /// ```
    pub fn sqrt(&self) -> Self {
        if self.mantissa.sign() == Sign::Negative && !self.is_zero() {
            panic_root_negative();
        }
        let exponent = self.scale as i128 - GUARD_BITS as i128;
        if self.is_strict_zero() {
            return zero_at_scale(exponent / 2);
        }

        // widen to an even exponent frame large enough that the integer
        // root keeps the full size of the operand
        let mut widen = self.size;
        if (exponent - widen as i128) % 2 != 0 {
            widen += 1;
        }
        let mag = self.magnitude() << widen;
        let (root, rem) = mag.sqrt_rem();

        // x = r² + rem with rem in [0, 2r]; the midpoint is at rem = r + ¼
        let root = if rem > root { root + UBig::ONE } else { root };
        Self::from_parts(IBig::from(root), root_scale(exponent - widen as i128, 2))
    }

    /// The `n`-th root, rounded to nearest at the precision of the operand.
    ///
    /// Odd roots of negative values are the negated root of the magnitude;
    /// even roots of negative values panic.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigfloat::BigFloat;
    /// let a = BigFloat::from(32u8);
    /// assert_eq!(a.nth_root(5), BigFloat::from(2u8));
    /// assert_eq!(BigFloat::from(-27i8).nth_root(3), BigFloat::from(-3i8));
    /// ```
    pub fn nth_root(&self, n: usize) -> Self {
        if n == 0 {
            panic_root_order_zero();
        }
        if n == 1 {
            return self.clone();
        }
        if n == 2 {
            return self.sqrt();
        }
        if self.mantissa.sign() == Sign::Negative {
            if n % 2 == 0 {
                panic_root_negative();
            }
            return -(-self).nth_root(n);
        }
        let exponent = self.scale as i128 - GUARD_BITS as i128;
        if self.is_strict_zero() {
            return zero_at_scale(exponent / n as i128);
        }

        // widen so the exponent divides by n and the root keeps the size
        // of the operand
        let mut widen = (n - 1) * self.size;
        widen += (exponent - widen as i128).rem_euclid(n as i128) as usize;
        let mag = self.magnitude() << widen;
        let root = ibig_ext::nth_root(&mag, n);

        // round to nearest: step up iff 2ⁿ·x reaches the midpoint (2r+1)ⁿ
        let midpoint = (&root << 1usize) + UBig::ONE;
        let root = if (mag << n) >= midpoint.pow(n) {
            root + UBig::ONE
        } else {
            root
        };
        Self::from_parts(
            IBig::from(root),
            root_scale(exponent - widen as i128, n as i128),
        )
    }
}

#[inline]
fn root_scale(exponent: i128, order: i128) -> isize {
    debug_assert!(exponent % order == 0);
    match isize::try_from(exponent / order + GUARD_BITS as i128) {
        Ok(scale) => scale,
        Err(_) => panic_scale_overflow(),
    }
}

#[inline]
fn zero_at_scale(exponent: i128) -> BigFloat {
    BigFloat::zero_with_accuracy(
        isize::try_from(-exponent).unwrap_or(isize::MAX),
    )
}
