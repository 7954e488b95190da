/// Implement the owned/borrowed combinations of a binary operator by
/// forwarding to the `&lhs op &rhs` implementation.
macro_rules! forward_binop_to_ref_ref {
    (impl $trait:ident, $method:ident) => {
        impl $trait for BigFloat {
            type Output = BigFloat;
            #[inline]
            fn $method(self, rhs: BigFloat) -> BigFloat {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&BigFloat> for BigFloat {
            type Output = BigFloat;
            #[inline]
            fn $method(self, rhs: &BigFloat) -> BigFloat {
                (&self).$method(rhs)
            }
        }

        impl $trait<BigFloat> for &BigFloat {
            type Output = BigFloat;
            #[inline]
            fn $method(self, rhs: BigFloat) -> BigFloat {
                self.$method(&rhs)
            }
        }
    };
}

/// Implement `impl OpAssign<T> for BigFloat` by `*f = mem::take(f).op(rhs)`,
/// including the `&T` right-hand side.
macro_rules! impl_binop_assign_by_taking {
    (impl $trait:ident, $methodassign:ident, $method:ident) => {
        impl $trait<BigFloat> for BigFloat {
            #[inline]
            fn $methodassign(&mut self, rhs: BigFloat) {
                *self = core::mem::take(self).$method(rhs);
            }
        }
        impl $trait<&BigFloat> for BigFloat {
            #[inline]
            fn $methodassign(&mut self, rhs: &BigFloat) {
                *self = core::mem::take(self).$method(rhs);
            }
        }
    };
}

/// Implement `impl Op<T> for BigFloat` and `impl Op<BigFloat> for T` for a
/// primitive integer type by converting it first. Covers the borrowed
/// combinations as well.
macro_rules! impl_commutative_binop_with_primitive {
    (impl $trait:ident<$target:ty>, $method:ident) => {
        impl $trait<$target> for BigFloat {
            type Output = BigFloat;
            #[inline]
            fn $method(self, rhs: $target) -> BigFloat {
                self.$method(BigFloat::from(rhs))
            }
        }

        impl $trait<$target> for &BigFloat {
            type Output = BigFloat;
            #[inline]
            fn $method(self, rhs: $target) -> BigFloat {
                self.$method(BigFloat::from(rhs))
            }
        }

        impl $trait<BigFloat> for $target {
            type Output = BigFloat;
            #[inline]
            fn $method(self, rhs: BigFloat) -> BigFloat {
                BigFloat::from(self).$method(rhs)
            }
        }

        impl $trait<&BigFloat> for $target {
            type Output = BigFloat;
            #[inline]
            fn $method(self, rhs: &BigFloat) -> BigFloat {
                BigFloat::from(self).$method(rhs)
            }
        }
    };
}

/// Expand a commutative operator over the primitive integer types.
macro_rules! impl_commutative_binop_with_primitives {
    (impl $trait:ident, $method:ident) => {
        crate::helper_macros::impl_commutative_binop_with_primitive!(impl $trait<u8>, $method);
        crate::helper_macros::impl_commutative_binop_with_primitive!(impl $trait<u16>, $method);
        crate::helper_macros::impl_commutative_binop_with_primitive!(impl $trait<u32>, $method);
        crate::helper_macros::impl_commutative_binop_with_primitive!(impl $trait<u64>, $method);
        crate::helper_macros::impl_commutative_binop_with_primitive!(impl $trait<u128>, $method);
        crate::helper_macros::impl_commutative_binop_with_primitive!(impl $trait<usize>, $method);
        crate::helper_macros::impl_commutative_binop_with_primitive!(impl $trait<i8>, $method);
        crate::helper_macros::impl_commutative_binop_with_primitive!(impl $trait<i16>, $method);
        crate::helper_macros::impl_commutative_binop_with_primitive!(impl $trait<i32>, $method);
        crate::helper_macros::impl_commutative_binop_with_primitive!(impl $trait<i64>, $method);
        crate::helper_macros::impl_commutative_binop_with_primitive!(impl $trait<i128>, $method);
        crate::helper_macros::impl_commutative_binop_with_primitive!(impl $trait<isize>, $method);
    };
}

pub(crate) use forward_binop_to_ref_ref;
pub(crate) use impl_binop_assign_by_taking;
pub(crate) use impl_commutative_binop_with_primitive;
pub(crate) use impl_commutative_binop_with_primitives;
