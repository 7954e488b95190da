use crate::{
    error::panic_scale_overflow,
    ibig_ext::{bit_length, into_sized, rounding_right_shift},
};
use dashu_base::{Sign, UnsignedAbs};
use dashu_int::{DoubleWord, IBig, UBig};
use static_assertions::{assert_impl_all, const_assert};

/// Number of extra low-order bits carried by every stored mantissa.
///
/// The guard region absorbs intermediate rounding error: arithmetic flows
/// through it like through ordinary bits, value equality ignores it, and
/// the ULP comparison family reasons about it explicitly. The constant is
/// fixed at build time; all accuracy and precision figures reported by
/// [BigFloat] are expressed relative to it.
pub const GUARD_BITS: usize = 32;

// the guard region must leave room for a carry and fit in the 64-bit accessors
const_assert!(GUARD_BITS >= 2);
const_assert!(GUARD_BITS <= 64);
const_assert!(core::mem::size_of::<isize>() >= 4);

/// An arbitrary precision binary floating point number with guard bits.
///
/// The number is stored as a raw mantissa (a signed big integer), a binary
/// scale and a cached bit size. The numeric value is
/// `mantissa · 2^(scale - GUARD_BITS)`: the lowest [GUARD_BITS] bits of
/// every mantissa sit below the scale point and hold the rounding noise of
/// previous operations.
///
/// Two derived quantities describe a value:
/// * its *precision* is the number of mantissa bits above the guard
///   region, i.e. the bits the caller may rely on;
/// * its *accuracy* is `GUARD_BITS - scale`, the number of fractional bits
///   including the guard region.
///
/// Values are immutable; every operation allocates a fresh result. Unlike
/// IEEE 754 there are no NaNs, infinities or signed zeros: operations that
/// would produce them panic instead.
///
/// # Examples
///
/// ```
/// use bigfloat::BigFloat;
///
/// let a = BigFloat::from(42u8);
/// assert_eq!(a.precision(), 6);
/// assert_eq!(a.accuracy(), 32); // the guard bits, all zero
///
/// let b: BigFloat = "0.25".parse().unwrap();
/// assert_eq!((&a * &b), BigFloat::from(21u8) / BigFloat::from(2u8));
/// ```
pub struct BigFloat {
    pub(crate) mantissa: IBig,
    pub(crate) scale: isize,
    pub(crate) size: usize,
}

// immutable values are freely shareable across threads
assert_impl_all!(BigFloat: Send, Sync);

impl BigFloat {
    /// Zero with no accuracy information (scale 0).
    pub const ZERO: Self = Self {
        mantissa: IBig::ZERO,
        scale: 0,
        size: 0,
    };

    /// One, with clean guard bits.
    pub const ONE: Self = Self {
        mantissa: IBig::from_parts_const(Sign::Positive, (1 as DoubleWord) << GUARD_BITS),
        scale: 0,
        size: GUARD_BITS + 1,
    };

    /// Negative one, with clean guard bits.
    pub const NEG_ONE: Self = Self {
        mantissa: IBig::from_parts_const(Sign::Negative, (1 as DoubleWord) << GUARD_BITS),
        scale: 0,
        size: GUARD_BITS + 1,
    };

    /// Create a value from a raw mantissa and scale.
    ///
    /// The mantissa is taken as stored, guard bits included: the numeric
    /// value of the result is `mantissa · 2^(scale - GUARD_BITS)`. Use
    /// [from_value][Self::from_value] when the integer does not carry
    /// guard bits yet.
    #[inline]
    pub fn from_parts(mantissa: IBig, scale: isize) -> Self {
        let (mantissa, size) = into_sized(mantissa);
        Self {
            mantissa,
            scale,
            size,
        }
    }

    /// Create a value equal to `value · 2^scale`.
    ///
    /// The integer is shifted into the guard frame, so the full bit length
    /// of `value` becomes the precision of the result and the guard region
    /// starts out zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigfloat::BigFloat;
    /// let a = BigFloat::from_value(3.into(), -1); // 1.5
    /// assert_eq!(a.precision(), 2);
    /// assert_eq!(a.to_f64(), 1.5);
    /// ```
    #[inline]
    pub fn from_value(value: IBig, scale: isize) -> Self {
        Self::from_parts(value << GUARD_BITS, scale)
    }

    /// Create a value equal to `value · 2^scale` carrying `extra` additional
    /// bits of precision (zeros below the integer's last bit).
    #[inline]
    pub fn from_value_with_precision(value: IBig, scale: isize, extra: usize) -> Self {
        let scale = match scale.checked_sub(extra as isize) {
            Some(s) => s,
            None => panic_scale_overflow(),
        };
        Self::from_parts(value << (GUARD_BITS + extra), scale)
    }

    /// Create a value equal to `value · 2^scale` whose precision is known to
    /// be less than the integer's bit length.
    ///
    /// The excess low-order bits are kept, but stored in the guard region
    /// instead of the visible mantissa. Float decoding uses this to state
    /// that a `f32` carries 24 significant bits however its fraction is
    /// populated.
    pub fn from_value_with_binary_precision(value: IBig, scale: isize, precision: usize) -> Self {
        let excess = bit_length(&value).saturating_sub(precision);
        if excess == 0 {
            return Self::from_value(value, scale);
        }
        let scale = match scale.checked_add(excess as isize) {
            Some(s) => s,
            None => panic_scale_overflow(),
        };
        if excess <= GUARD_BITS {
            Self::from_parts(value << (GUARD_BITS - excess), scale)
        } else {
            // not even the guard region can hold that many noise bits
            Self::from_parts(rounding_right_shift(value, excess - GUARD_BITS), scale)
        }
    }

    /// A zero that carries `accuracy` fractional bits of accuracy.
    ///
    /// Adding such a zero to a value never degrades the value below the
    /// stated accuracy; adding a plain integer zero would.
    #[inline]
    pub fn zero_with_accuracy(accuracy: isize) -> Self {
        Self {
            mantissa: IBig::ZERO,
            scale: accuracy_to_scale(accuracy),
            size: 0,
        }
    }

    /// One with `accuracy` fractional bits of accuracy (`accuracy >= 0`).
    #[inline]
    pub fn one_with_accuracy(accuracy: isize) -> Self {
        Self::int_with_accuracy(IBig::ONE, accuracy)
    }

    /// The integer `n` stored with `accuracy` fractional bits of accuracy.
    ///
    /// A non-negative accuracy extends the mantissa with zeros; a negative
    /// accuracy (coarser than one) rounds the integer to that resolution.
    pub fn int_with_accuracy(n: IBig, accuracy: isize) -> Self {
        let scale = accuracy_to_scale(accuracy);
        if accuracy >= 0 {
            Self::from_parts(n << accuracy as usize, scale)
        } else {
            Self::from_parts(rounding_right_shift(n, (-accuracy) as usize), scale)
        }
    }

    /// The binary scale of the value.
    #[inline]
    pub const fn scale(&self) -> isize {
        self.scale
    }

    /// Bit length of the raw mantissa (guard bits included). Kept as a
    /// cache; always equal to `bit_length(|raw_mantissa|)`.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of mantissa bits above the guard region.
    #[inline]
    pub const fn precision(&self) -> usize {
        self.size.saturating_sub(GUARD_BITS)
    }

    /// Number of fractional bits, guard region included: `GUARD_BITS - scale`.
    ///
    /// Negative for values so coarse that even some integral bits are not
    /// represented.
    #[inline]
    pub const fn accuracy(&self) -> isize {
        (GUARD_BITS as isize).saturating_sub(self.scale)
    }

    /// The stored mantissa, guard bits included.
    #[inline]
    pub const fn raw_mantissa(&self) -> &IBig {
        &self.mantissa
    }

    /// The mantissa with the guard region rounded away (to nearest, ties
    /// away from zero).
    #[inline]
    pub fn rounded_mantissa(&self) -> IBig {
        rounding_right_shift(self.mantissa.clone(), GUARD_BITS)
    }

    /// Magnitude of the raw mantissa.
    #[inline]
    pub(crate) fn magnitude(&self) -> UBig {
        self.mantissa.clone().unsigned_abs()
    }

    /// True when the mantissa is exactly zero.
    #[inline]
    pub const fn is_strict_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    /// True when the value is indistinguishable from zero at its own
    /// accuracy: either the mantissa is exactly zero, or all its bits are
    /// guard noise below the accuracy threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bigfloat::{BigFloat, GUARD_BITS};
    /// use dashu_int::IBig;
    ///
    /// assert!(BigFloat::ZERO.is_zero());
    /// // a lone guard bit well below the scale point is noise
    /// assert!(BigFloat::from_parts(IBig::ONE, 0).is_zero());
    /// assert!(!BigFloat::ONE.is_zero());
    /// ```
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
            || (self.size < GUARD_BITS
                && (self.size as isize).saturating_add(self.scale) < GUARD_BITS as isize)
    }

    /// Sign of the value as an integer: `-1`, `0` or `1`. Values that are
    /// zero at their own accuracy report `0`.
    #[inline]
    pub fn signum(&self) -> IBig {
        if self.is_zero() {
            IBig::ZERO
        } else {
            self.mantissa.signum()
        }
    }

    /// Sign of the mantissa. [Sign::Positive] for zeros, following the
    /// convention of `dashu`.
    #[inline]
    pub const fn sign(&self) -> Sign {
        self.mantissa.sign()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && matches!(self.mantissa.sign(), Sign::Positive)
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        !self.is_zero() && matches!(self.mantissa.sign(), Sign::Negative)
    }

    /// True when the magnitude of the mantissa is a single one bit followed
    /// by zeros, i.e. the value is a signed power of two. Multiplication
    /// and division recognize such operands and adjust scales exactly.
    #[inline]
    pub fn is_power_of_two(&self) -> bool {
        match self.mantissa.trailing_zeros() {
            Some(zeros) => zeros + 1 == self.size,
            None => false,
        }
    }

    /// True when every mantissa bit lies inside the guard region, so the
    /// value has no precision the caller may rely on.
    #[inline]
    pub const fn is_out_of_precision(&self) -> bool {
        self.size < GUARD_BITS
    }

    /// The value of one unit in the last visible place: `2^scale`.
    #[inline]
    pub fn ulp(&self) -> Self {
        Self::from_value(IBig::ONE, self.scale)
    }

    /// The next value upwards, one visible ulp away. Bitwise inverse of
    /// [next_down][Self::next_down].
    #[inline]
    pub fn next_up(&self) -> Self {
        Self::from_parts(&self.mantissa + (IBig::ONE << GUARD_BITS), self.scale)
    }

    /// The next value downwards, one visible ulp away.
    #[inline]
    pub fn next_down(&self) -> Self {
        Self::from_parts(&self.mantissa - (IBig::ONE << GUARD_BITS), self.scale)
    }

    /// Low 64 bits of the raw mantissa magnitude, guard bits included.
    #[inline]
    pub fn lowest_64_bits_with_guard_bits(&self) -> u64 {
        low_bits(self.magnitude())
    }

    /// Low 64 bits of the mantissa magnitude after the guard region is
    /// rounded away. Out-of-range integer conversions wrap through this
    /// view.
    #[inline]
    pub fn lowest_64_bits(&self) -> u64 {
        low_bits(self.rounded_mantissa().unsigned_abs())
    }

    /// Top 64 bits of the raw mantissa magnitude, left aligned so the most
    /// significant mantissa bit lands on bit 63.
    pub fn highest_64_bits(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        let mag = self.magnitude();
        let aligned = if self.size >= 64 {
            mag >> (self.size - 64)
        } else {
            mag << (64 - self.size)
        };
        low_bits(aligned)
    }

}

#[inline]
fn low_bits(mag: UBig) -> u64 {
    let (low, _) = mag.split_bits(64);
    u64::try_from(low).unwrap()
}

#[inline]
fn accuracy_to_scale(accuracy: isize) -> isize {
    match (GUARD_BITS as isize).checked_sub(accuracy) {
        Some(scale) => scale,
        None => panic_scale_overflow(),
    }
}

// This custom implementation mirrors the field-wise clone_from of the
// underlying big integer, so cloning into an existing value can reuse its
// allocation.
impl Clone for BigFloat {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            mantissa: self.mantissa.clone(),
            scale: self.scale,
            size: self.size,
        }
    }

    #[inline]
    fn clone_from(&mut self, source: &Self) {
        self.mantissa.clone_from(&source.mantissa);
        self.scale = source.scale;
        self.size = source.size;
    }
}

impl Default for BigFloat {
    /// Default value: 0.
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(BigFloat::ZERO.is_strict_zero());
        assert_eq!(BigFloat::ZERO.size(), 0);
        assert_eq!(BigFloat::ONE.precision(), 1);
        assert_eq!(BigFloat::ONE.accuracy(), GUARD_BITS as isize);
        assert_eq!(BigFloat::NEG_ONE.signum(), IBig::NEG_ONE);
        assert_eq!(
            BigFloat::ONE.size(),
            crate::ibig_ext::bit_length(BigFloat::ONE.raw_mantissa())
        );
    }

    #[test]
    fn test_accuracy_constructors() {
        let z = BigFloat::zero_with_accuracy(64);
        assert!(z.is_strict_zero());
        assert_eq!(z.accuracy(), 64);

        let one = BigFloat::one_with_accuracy(GUARD_BITS as isize);
        assert_eq!(one.mantissa, BigFloat::ONE.mantissa);
        assert_eq!(one.scale, BigFloat::ONE.scale);

        let n = BigFloat::int_with_accuracy(IBig::from(10), 40);
        assert_eq!(n.accuracy(), 40);
        assert_eq!(n.precision(), 4 + 8);
        assert_eq!(n.to_f64(), 10.0);
    }

    #[test]
    fn test_zero_band() {
        // a single guard bit below the threshold is a zero
        assert!(BigFloat::from_parts(IBig::ONE, 0).is_zero());
        assert!(!BigFloat::from_parts(IBig::ONE, 0).is_strict_zero());
        // the same bit at the accuracy boundary is not
        assert!(!BigFloat::from_parts(IBig::ONE, GUARD_BITS as isize).is_zero());
        // wide mantissas are never zero, no matter how small the value
        assert!(!BigFloat::from_parts(IBig::ONE << GUARD_BITS, -1000).is_zero());
    }

    #[test]
    fn test_value_with_precision_constructor() {
        let v = BigFloat::from_value_with_precision(IBig::from(3), 0, 10);
        assert_eq!(v.precision(), 2 + 10);
        assert_eq!(v, BigFloat::from(3u8));
        assert!(v.is_bitwise_equal(&BigFloat::from(3u8).extend_precision(10)));
    }

    #[test]
    fn test_binary_precision_constructor() {
        // a 24-bit significand stated to carry 10 precise bits keeps the
        // rest as guard noise, value unchanged
        let v = BigFloat::from_value_with_binary_precision(IBig::from(0xabcdefu32), -23, 10);
        assert_eq!(v.precision(), 10);
        assert_eq!(
            v.total_cmp(&BigFloat::from_value(IBig::from(0xabcdefu32), -23)),
            core::cmp::Ordering::Equal
        );

        // stating more precision than the integer has is a plain construction
        let w = BigFloat::from_value_with_binary_precision(IBig::from(5), 0, 24);
        assert!(w.is_bitwise_equal(&BigFloat::from(5u8)));
    }

    #[test]
    fn test_power_of_two() {
        assert!(BigFloat::ONE.is_power_of_two());
        assert!(BigFloat::NEG_ONE.is_power_of_two());
        assert!(BigFloat::from(8u8).is_power_of_two());
        assert!(!BigFloat::from(6u8).is_power_of_two());
        assert!(!BigFloat::ZERO.is_power_of_two());
    }

    #[test]
    fn test_bit_accessors() {
        let a = BigFloat::from(0xdead_beefu32);
        assert_eq!(a.lowest_64_bits(), 0xdead_beef);
        assert_eq!(a.lowest_64_bits_with_guard_bits(), 0xdead_beef << 32);
        assert_eq!(a.highest_64_bits(), 0xdead_beef_0000_0000);
    }

    #[test]
    fn test_next_up_down() {
        let a = BigFloat::from(5u8);
        assert!(a.next_up().next_down().is_bitwise_equal(&a));
        assert!(a.next_down() < a && a < a.next_up());
    }
}
