use crate::{
    helper_macros,
    ibig_ext::rounding_right_shift,
    repr::BigFloat,
};
use core::ops::{Add, AddAssign, Sub, SubAssign};

impl Add for &BigFloat {
    type Output = BigFloat;

    fn add(self, rhs: Self) -> Self::Output {
        // the operand with the larger scale defines the result frame
        let (lhs, rhs) = if self.scale >= rhs.scale {
            (self, rhs)
        } else {
            (rhs, self)
        };

        // a scale difference beyond isize means the frames cannot meet
        let ediff = match lhs.scale.checked_sub(rhs.scale) {
            Some(diff) => diff as usize,
            None => return lhs.clone(),
        };

        // shortcut: every bit of rhs falls below the result frame
        if ediff > rhs.size {
            return lhs.clone();
        }

        let aligned = rounding_right_shift(rhs.mantissa.clone(), ediff);
        BigFloat::from_parts(&lhs.mantissa + aligned, lhs.scale)
    }
}

impl Sub for &BigFloat {
    type Output = BigFloat;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.add(&(-rhs))
    }
}

helper_macros::forward_binop_to_ref_ref!(impl Add, add);
helper_macros::forward_binop_to_ref_ref!(impl Sub, sub);
helper_macros::impl_binop_assign_by_taking!(impl AddAssign, add_assign, add);
helper_macros::impl_binop_assign_by_taking!(impl SubAssign, sub_assign, sub);
helper_macros::impl_commutative_binop_with_primitives!(impl Add, add);
helper_macros::impl_commutative_binop_with_primitives!(impl Sub, sub);
