use crate::{
    error::panic_scale_overflow,
    ibig_ext::pow_most_significant_bits,
    repr::{BigFloat, GUARD_BITS},
};
use dashu_base::Sign;

// bounds above which powering switches to the leading-bits kernel
const POW_DIRECT_MAX_EXP: usize = 64;
const POW_DIRECT_MAX_SIZE: usize = 4096;

impl BigFloat {
    /// Raise the value to an integer power.
    ///
    /// Squaring chains round like any other multiplication, so the result
    /// keeps the precision of `self` while the error accumulated over the
    /// chain stays inside the guard region. Very large exponents or
    /// operands switch to a kernel that computes only the leading bits of
    /// the power.
    ///
    /// Negative bases follow `(-v)^n = (-1)^n · v^n`; a negative exponent
    /// raises to the positive power and inverts.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigfloat::BigFloat;
    /// let a: BigFloat = "3.000".parse().unwrap();
    /// assert_eq!(a.powi(3), BigFloat::from(27u8));
    /// assert_eq!(a.powi(-1), BigFloat::ONE / &a);
    /// assert_eq!(BigFloat::from(-2i8).powi(3), BigFloat::from(-8i8));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics when `self` is a strict zero and `exp` is negative.
    pub fn powi(&self, exp: isize) -> Self {
        match exp {
            0 => return Self::one_with_accuracy(self.size.saturating_sub(1) as isize),
            1 => return self.clone(),
            2 => return self * self,
            -1 => return self.recip(),
            _ => {}
        }
        if exp < 0 {
            self.powi_magnitude(exp.unsigned_abs()).recip()
        } else {
            self.powi_magnitude(exp as usize)
        }
    }

    fn powi_magnitude(&self, exp: usize) -> Self {
        debug_assert!(exp >= 2);
        if self.is_strict_zero() {
            return self.clone();
        }

        if exp <= POW_DIRECT_MAX_EXP && self.size <= POW_DIRECT_MAX_SIZE {
            // binary exponentiation from the most significant exponent bit
            let bits = usize::BITS as usize - exp.leading_zeros() as usize;
            let mut result = self.clone();
            for p in (0..bits - 1).rev() {
                result = &result * &result;
                if (exp >> p) & 1 == 1 {
                    result = &result * self;
                }
            }
            return result;
        }

        // compute only the top bits of mantissa^exp and rebuild the scale
        let sign = match exp % 2 {
            0 => Sign::Positive,
            _ => self.mantissa.sign(),
        };
        let (mag, shifted) =
            pow_most_significant_bits(&self.magnitude(), exp, self.size, self.size, true, false);
        let scale = shifted as i128
            + exp as i128 * (self.scale as i128 - GUARD_BITS as i128)
            + GUARD_BITS as i128;
        let scale = match isize::try_from(scale) {
            Ok(scale) => scale,
            Err(_) => panic_scale_overflow(),
        };
        BigFloat::from_parts(sign * mag, scale)
    }
}
