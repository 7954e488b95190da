//! Extensions to the `dashu-int` big integers used by the float layer.
//!
//! These primitives operate on raw mantissas and know nothing about scales
//! or guard bits. Rounding is always to the nearest value with ties away
//! from zero, which is the only rounding the float layer needs below the
//! value level.

use dashu_base::{BitTest, SquareRoot, UnsignedAbs};
use dashu_int::{IBig, UBig};

/// Bit length of the magnitude of `x`.
#[inline]
pub fn bit_length(x: &IBig) -> usize {
    x.clone().unsigned_abs().bit_len()
}

/// Split `x` into sign and magnitude, measure the magnitude and reassemble,
/// avoiding a copy of the digits.
#[inline]
pub(crate) fn into_sized(x: IBig) -> (IBig, usize) {
    let (sign, mag) = x.into_parts();
    let size = mag.bit_len();
    (IBig::from_parts(sign, mag), size)
}

/// Shift the magnitude right, rounding to nearest with ties upwards.
///
/// The identity `(x >> (k-1) + 1) >> 1` rounds the dropped half-bit into
/// the result in a single pass.
#[inline]
pub(crate) fn rounding_shr_magnitude(mag: UBig, shift: usize) -> UBig {
    if shift == 0 {
        return mag;
    }
    ((mag >> (shift - 1)) + UBig::ONE) >> 1usize
}

/// Shift `x` right by `shift` bits, rounding to nearest with ties away
/// from zero.
#[inline]
pub fn rounding_right_shift(x: IBig, shift: usize) -> IBig {
    rounding_right_shift_with_carry(x, shift).0
}

/// Shift `x` right by `shift` bits with rounding, and report whether the
/// rounding carried into a new top bit (the bit length of the result is one
/// more than the plain shift would produce). Callers use the carry to keep
/// a scale in sync with the mantissa.
pub fn rounding_right_shift_with_carry(x: IBig, shift: usize) -> (IBig, bool) {
    if shift == 0 {
        return (x, false);
    }
    let (sign, mag) = x.into_parts();
    let len = mag.bit_len();
    let shifted = rounding_shr_magnitude(mag, shift);
    let carried = shifted.bit_len() > len.saturating_sub(shift);
    (IBig::from_parts(sign, shifted), carried)
}

/// In-place rounding right shift that keeps a caller-maintained size cache
/// current.
#[inline]
pub fn rounding_right_shift_in_place(x: &mut IBig, shift: usize, size: &mut usize) {
    let (value, _) = rounding_right_shift_with_carry(core::mem::take(x), shift);
    let (value, new_size) = into_sized(value);
    *x = value;
    *size = new_size;
}

/// Reduce `x` to at most `bits` significant bits, rounding to nearest with
/// ties away from zero. Returns the reduced value and the number of bits
/// shifted out, including the extra renormalization step taken when the
/// rounding carries into a new top bit.
pub fn truncate_to_and_round(x: IBig, bits: usize) -> (IBig, usize) {
    let (x, size) = into_sized(x);
    if size <= bits {
        return (x, 0);
    }
    let shift = size - bits;
    let (value, carried) = rounding_right_shift_with_carry(x, shift);
    if carried {
        // the carry produced a power of two one bit too long, drop it exactly
        (value >> 1usize, shift + 1)
    } else {
        (value, shift)
    }
}

/// Compute the top `wanted_bits` bits of `base ^ exp` without forming the
/// full power. Returns the leading bits and the number of bits implicitly
/// shifted out, so that `result << shifted` approximates `base ^ exp`.
///
/// The partial products are floor-truncated to a working width; the final
/// reduction rounds to nearest unless `round_down` is set. With
/// `extra_accurate` the working width grows enough that the two modes agree
/// except for one unit in the last place, and when the final rounding
/// carries, the reported shift count is one larger accordingly.
pub fn pow_most_significant_bits(
    base: &UBig,
    exp: usize,
    base_size: usize,
    wanted_bits: usize,
    extra_accurate: bool,
    round_down: bool,
) -> (UBig, usize) {
    debug_assert!(base_size == base.bit_len());
    if exp == 0 {
        return (UBig::ONE, 0);
    }
    if base.is_zero() {
        return (UBig::ZERO, 0);
    }

    let exp_bits = usize::BITS as usize - exp.leading_zeros() as usize;
    let slack = if extra_accurate {
        2 * exp_bits + 24
    } else {
        exp_bits + 4
    };
    let working = wanted_bits + slack;

    // trimmed copy of the base used by every multiplication step
    let (base_trim, base_shift) = if base_size > working {
        (base >> (base_size - working), base_size - working)
    } else {
        (base.clone(), 0)
    };

    // binary exponentiation from the most significant exponent bit down
    let mut acc = base_trim.clone();
    let mut shifted = base_shift;
    let mut p = exp_bits - 1;
    while p > 0 {
        p -= 1;
        acc = &acc * &acc;
        shifted *= 2;
        let excess = acc.bit_len().saturating_sub(working);
        if excess > 0 {
            acc >>= excess;
            shifted += excess;
        }
        if (exp >> p) & 1 == 1 {
            acc = acc * &base_trim;
            shifted += base_shift;
            let excess = acc.bit_len().saturating_sub(working);
            if excess > 0 {
                acc >>= excess;
                shifted += excess;
            }
        }
    }

    // final reduction to the requested width
    let excess = acc.bit_len().saturating_sub(wanted_bits);
    if excess > 0 {
        if round_down {
            acc >>= excess;
            shifted += excess;
        } else {
            let len = acc.bit_len();
            acc = rounding_shr_magnitude(acc, excess);
            shifted += excess;
            if acc.bit_len() > len - excess {
                acc >>= 1usize;
                shifted += 1;
            }
        }
    }
    (acc, shifted)
}

/// Floor integer `n`-th root of `x`.
pub fn nth_root(x: &UBig, n: usize) -> UBig {
    assert!(n >= 1, "the order of the root must be at least one");
    if n == 1 || x.is_zero() || x.is_one() {
        return x.clone();
    }
    if n == 2 {
        return x.sqrt();
    }
    let bits = x.bit_len();
    if bits <= n {
        // 1 <= x < 2^n, so the root is exactly one
        return UBig::ONE;
    }

    // Newton iteration g <- ((n-1)g + x/g^(n-1)) / n, starting above the root
    let big_n = UBig::from(n);
    let big_n1 = UBig::from(n - 1);
    let mut guess = UBig::ONE << (bits / n + 1);
    loop {
        let next = (&guess * &big_n1 + x / guess.pow(n - 1)) / &big_n;
        if next >= guess {
            break;
        }
        guess = next;
    }
    while guess.pow(n) > *x {
        guess -= UBig::ONE;
    }
    guess
}

/// Uniform random integer in the inclusive range `[lo, hi]`.
#[cfg(feature = "rand")]
pub fn uniform<R: rand::Rng + ?Sized>(lo: &IBig, hi: &IBig, rng: &mut R) -> IBig {
    use rand::distributions::uniform::UniformSampler;
    UniformSampler::sample(&dashu_int::rand::UniformIBig::new_inclusive(lo, hi), rng)
}
