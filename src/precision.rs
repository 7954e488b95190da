//! Precision and accuracy adjustment operators.
//!
//! Precision counts mantissa bits above the guard region, accuracy counts
//! fractional bits including it. Both are changed by physically moving the
//! mantissa: growing extends with zeros, shrinking rounds to nearest. The
//! scale moves in the opposite direction so the numeric value is preserved
//! (up to the rounding).

use crate::{
    error::panic_scale_overflow,
    ibig_ext::rounding_right_shift_with_carry,
    repr::{BigFloat, GUARD_BITS},
};

impl BigFloat {
    /// Change the scale by `delta` without touching the mantissa.
    ///
    /// This multiplies the numeric value by `2^delta` while preserving
    /// every stored bit.
    ///
    /// # Panics
    ///
    /// Panics if the new scale leaves the representable range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigfloat::BigFloat;
    /// let a = BigFloat::from(3u8);
    /// assert_eq!(a.clone().adjust_scale(4), BigFloat::from(48u8));
    /// assert!(a
    ///     .clone()
    ///     .adjust_scale(4)
    ///     .is_bitwise_equal(&a.adjust_scale(5).adjust_scale(-1)));
    /// ```
    #[inline]
    pub fn adjust_scale(mut self, delta: isize) -> Self {
        self.scale = checked_scale(self.scale, delta);
        self
    }

    /// Add `delta` precise bits on the right (`delta > 0`, extending with
    /// zeros) or round `-delta` bits away (`delta < 0`). The numeric value
    /// is unchanged except for the rounding of dropped bits.
    pub fn adjust_precision(mut self, delta: isize) -> Self {
        if delta >= 0 {
            self.extend_precision(delta as usize)
        } else {
            let shift = delta.unsigned_abs();
            self.scale = checked_scale(self.scale, shift as isize);
            let (mantissa, _) =
                rounding_right_shift_with_carry(core::mem::take(&mut self.mantissa), shift);
            Self::from_parts(mantissa, self.scale)
        }
    }

    /// Alias of [adjust_precision][Self::adjust_precision]: moving the
    /// low end of the mantissa changes precision and accuracy by the same
    /// amount.
    #[inline]
    pub fn adjust_accuracy(self, delta: isize) -> Self {
        self.adjust_precision(delta)
    }

    /// Round to exactly `precision` bits above the guard region.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigfloat::BigFloat;
    /// let a: BigFloat = "0.1".parse().unwrap();
    /// let b: BigFloat = "0.2".parse().unwrap();
    /// let c: BigFloat = "0.3".parse().unwrap();
    /// assert_eq!((a + b).set_precision_with_round(24), c.set_precision_with_round(24));
    /// ```
    #[inline]
    pub fn set_precision_with_round(self, precision: usize) -> Self {
        let target = precision + GUARD_BITS;
        let delta = target as isize - self.size as isize;
        self.adjust_precision(delta)
    }

    /// Add or remove low-order bits until the accuracy is exactly
    /// `accuracy` fractional bits.
    #[inline]
    pub fn set_accuracy(self, accuracy: isize) -> Self {
        let delta = match accuracy.checked_sub(self.accuracy()) {
            Some(delta) => delta,
            None => panic_scale_overflow(),
        };
        self.adjust_precision(delta)
    }

    /// Extend the mantissa with `extra` zero bits on the right.
    #[inline]
    pub fn extend_precision(mut self, extra: usize) -> Self {
        if extra == 0 || self.is_strict_zero() {
            self.scale = checked_scale(self.scale, -(extra as isize));
            return self;
        }
        self.scale = checked_scale(self.scale, -(extra as isize));
        self.mantissa <<= extra;
        self.size += extra;
        self
    }
}

#[inline]
fn checked_scale(scale: isize, delta: isize) -> isize {
    match scale.checked_add(delta) {
        Some(scale) => scale,
        None => panic_scale_overflow(),
    }
}
