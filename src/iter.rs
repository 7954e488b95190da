//! Implementation of core::iter traits

use crate::repr::BigFloat;
use core::{
    iter::{Product, Sum},
    ops::{Add, Mul},
};

impl<T> Sum<T> for BigFloat
where
    Self: Add<T, Output = Self>,
{
    fn sum<I: Iterator<Item = T>>(iter: I) -> Self {
        iter.fold(BigFloat::ZERO, BigFloat::add)
    }
}

impl<T> Product<T> for BigFloat
where
    Self: Mul<T, Output = Self>,
{
    fn product<I: Iterator<Item = T>>(iter: I) -> Self {
        iter.fold(BigFloat::ONE, BigFloat::mul)
    }
}
