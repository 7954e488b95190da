//! Comparisons and hashing.
//!
//! Three relations live here, from loosest to strictest:
//!
//! * **Value comparison** (`==`, `<`, [Ord]): numeric comparison with both
//!   operands rounded to their visible precision in the frame of the
//!   coarser operand, so differences confined to the guard region are
//!   ignored. `1.00 == 1.0000`.
//! * **Total order** ([total_cmp][BigFloat::total_cmp]): exact numeric
//!   comparison of the raw values. Deterministic for container keys;
//!   collapses zero extensions but distinguishes guard contents.
//! * **Bitwise equality** ([is_bitwise_equal][BigFloat::is_bitwise_equal]):
//!   identical mantissa and scale.
//!
//! The ULP tolerance family sits between the first two: it compares the
//! exact difference against a tolerance expressed in bits at the visible
//! (or guard) least significant place.

use crate::{
    ibig_ext::{bit_length, rounding_right_shift},
    repr::{BigFloat, GUARD_BITS},
};
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use dashu_base::Sign;
use dashu_int::IBig;

#[inline]
fn directed(sign: Sign, ordering: Ordering) -> Ordering {
    match sign {
        Sign::Positive => ordering,
        Sign::Negative => ordering.reverse(),
    }
}

impl BigFloat {
    // Compare by numeric value, ignoring differences inside the guard
    // region of the coarser operand.
    fn cmp_value(&self, other: &Self) -> Ordering {
        // zeros of any accuracy compare equal
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return directed(other.mantissa.sign(), Ordering::Less),
            (false, true) => return directed(self.mantissa.sign(), Ordering::Greater),
            (false, false) => {}
        }
        let sign = self.mantissa.sign();
        if sign != other.mantissa.sign() {
            return directed(sign, Ordering::Greater);
        }

        // positions of the leading bits; two apart cannot round together
        let lhs_exp = self.scale as i128 + self.size as i128;
        let rhs_exp = other.scale as i128 + other.size as i128;
        if lhs_exp > rhs_exp + 1 {
            return directed(sign, Ordering::Greater);
        }
        if rhs_exp > lhs_exp + 1 {
            return directed(sign, Ordering::Less);
        }

        // round both into the coarser frame and compare the visible bits
        let frame = self.scale.max(other.scale);
        let lhs = rounding_right_shift(
            self.mantissa.clone(),
            (frame - self.scale) as usize + GUARD_BITS,
        );
        let rhs = rounding_right_shift(
            other.mantissa.clone(),
            (frame - other.scale) as usize + GUARD_BITS,
        );
        lhs.cmp(&rhs)
    }

    /// Exact numeric comparison of the raw values, guard bits included.
    ///
    /// Unlike the `==` family this is a true total order: use it for
    /// container keys and sorting, in the same spirit as
    /// [f64::total_cmp]. Trailing zero extensions of the mantissa do not
    /// affect the result.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        let lhs_sign = self.mantissa.signum();
        let rhs_sign = other.mantissa.signum();
        match lhs_sign.cmp(&rhs_sign) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        if self.mantissa.is_zero() {
            return Ordering::Equal;
        }
        let sign = self.mantissa.sign();

        let lhs_exp = self.scale as i128 + self.size as i128;
        let rhs_exp = other.scale as i128 + other.size as i128;
        match lhs_exp.cmp(&rhs_exp) {
            Ordering::Equal => {}
            unequal => return directed(sign, unequal),
        }

        let (lhs, rhs, _) = align(self, other);
        lhs.cmp(&rhs)
    }

    /// True when mantissa and scale are identical. Implies value equality;
    /// the converse does not hold.
    #[inline]
    pub fn is_bitwise_equal(&self, other: &Self) -> bool {
        self.scale == other.scale && self.mantissa == other.mantissa
    }

    /// Three-way ULP-tolerance comparison.
    ///
    /// The operands are aligned exactly and their difference measured in
    /// bits. With `include_guard_bits` false, the tolerance counts from
    /// the least significant *visible* bit of the wider operand: the
    /// values are equal when the difference spans at most
    /// `tolerance` bits beyond the guard region. With it true, the
    /// tolerance counts raw bits from the bottom of the mantissa.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigfloat::BigFloat;
    /// let a = BigFloat::from(555u16);
    /// let b = BigFloat::from(554u16);
    /// // one visible ulp apart at ten visible bits
    /// assert!(!a.eq_ulp(&b, 22, false));
    /// assert!(a.eq_ulp(&b, 23, false));
    /// ```
    pub fn cmp_ulp(&self, other: &Self, tolerance: usize, include_guard_bits: bool) -> Ordering {
        let (lhs, rhs, max_size) = align(self, other);
        let delta = lhs - rhs;
        if delta.is_zero() {
            return Ordering::Equal;
        }
        let limit = if include_guard_bits {
            tolerance
        } else {
            tolerance + max_size.saturating_sub(GUARD_BITS)
        };
        if bit_length(&delta) <= limit {
            Ordering::Equal
        } else {
            directed(delta.sign(), Ordering::Greater)
        }
    }

    /// Equality within `tolerance` units in the last place.
    #[inline]
    pub fn eq_ulp(&self, other: &Self, tolerance: usize, include_guard_bits: bool) -> bool {
        self.cmp_ulp(other, tolerance, include_guard_bits) == Ordering::Equal
    }

    /// Strictly less than `other` beyond the ULP tolerance.
    #[inline]
    pub fn lt_ulp(&self, other: &Self, tolerance: usize, include_guard_bits: bool) -> bool {
        self.cmp_ulp(other, tolerance, include_guard_bits) == Ordering::Less
    }

    /// Strictly greater than `other` beyond the ULP tolerance.
    #[inline]
    pub fn gt_ulp(&self, other: &Self, tolerance: usize, include_guard_bits: bool) -> bool {
        self.cmp_ulp(other, tolerance, include_guard_bits) == Ordering::Greater
    }
}

// Shift both mantissas into the frame of the smaller scale (exact) and
// report the larger aligned bit size.
fn align(lhs: &BigFloat, rhs: &BigFloat) -> (IBig, IBig, usize) {
    let frame = lhs.scale.min(rhs.scale);
    let lhs_shift = (lhs.scale - frame) as usize;
    let rhs_shift = (rhs.scale - frame) as usize;
    let max_size = (lhs.size + lhs_shift).max(rhs.size + rhs_shift);
    (
        &lhs.mantissa << lhs_shift,
        &rhs.mantissa << rhs_shift,
        max_size,
    )
}

impl PartialEq for BigFloat {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp_value(other) == Ordering::Equal
    }
}

// Value equality is an equivalence in all but pathological guard-boundary
// chains, where the tolerance can fail to be transitive.
impl Eq for BigFloat {}

impl PartialOrd for BigFloat {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigFloat {
    /// Value comparison. For container keys prefer
    /// [total_cmp][BigFloat::total_cmp], which distinguishes values that
    /// differ only in their guard regions.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other)
    }
}

impl Hash for BigFloat {
    /// Hashes the exact value in a scale-normalized form, so numerically
    /// equal values hash alike regardless of their precision. Every zero
    /// hashes to the same fixed sentinel.
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_zero() {
            state.write_u64(0);
            return;
        }
        // strip trailing zeros, compensating through the scale
        let zeros = self.mantissa.trailing_zeros().unwrap_or(0);
        let mantissa = &self.mantissa >> zeros;
        let scale = self.scale as i128 + zeros as i128;
        mantissa.hash(state);
        scale.hash(state);
    }
}
