use crate::repr::BigFloat;

#[inline]
pub(crate) const fn check_divisor(divisor: &BigFloat) {
    if divisor.is_strict_zero() {
        panic_divide_by_zero()
    }
}

/// Panics when dividing by a strict zero
pub(crate) const fn panic_divide_by_zero() -> ! {
    panic!("attempt to divide by a strict zero!")
}

/// Panics when a scale adjustment would leave the representable scale range
pub(crate) const fn panic_scale_overflow() -> ! {
    panic!("the scale of the result overflows the scale range!")
}

/// Panics when taking an even order root of a negative number
pub(crate) const fn panic_root_negative() -> ! {
    panic!("the root of a negative number is a complex number!")
}

/// Panics when the order of a root is zero
pub(crate) const fn panic_root_order_zero() -> ! {
    panic!("the order of the root must be at least one!")
}
