//! Element-wise arithmetic, comparisons and boolean logic with broadcasting.
//!
//! The `try_*` methods report incompatible shapes as errors. The operator
//! impls on references (`&a + &b`, `&a * 2`) panic instead, with the same
//! message.

use num_traits::Float;
use std::ops::{Add, BitAnd, BitOr, Div, Mul, Neg, Not, Sub};

use crate::array::Array;
use crate::dtype::{Element, FloatElement, Numeric};
use crate::error::Result;
use crate::layout::broadcast_shape;

impl<T: Element> Array<T> {
    /// Applies `f` pairwise over both operands broadcast to a common shape.
    pub fn zip_with<U, V, F>(&self, other: &Array<U>, mut f: F) -> Result<Array<V>>
    where
        U: Element,
        V: Element,
        F: FnMut(T, U) -> V,
    {
        let shape = broadcast_shape(self.shape(), other.shape())?;
        if shape.as_slice() != self.shape() || shape.as_slice() != other.shape() {
            log::debug!(
                "broadcasting {:?} with {:?} to {:?}",
                self.shape(),
                other.shape(),
                shape
            );
        }
        let lhs = self.gather(&self.layout().broadcast_to(&shape)?);
        let rhs = other.gather(&other.layout().broadcast_to(&shape)?);
        let data = lhs.into_iter().zip(rhs).map(|(a, b)| f(a, b)).collect();
        Ok(Array::owned(shape, data))
    }

    /// `zip_with` for the built-in operators. Equal-shaped contiguous
    /// operands are read straight from their buffers without gathering.
    fn elementwise<U, V>(&self, other: &Array<U>, f: fn(T, U) -> V) -> Result<Array<V>>
    where
        U: Element,
        V: Element,
    {
        if self.shape() == other.shape() {
            let data = self.with_contiguous(|lhs| {
                other.with_contiguous(|rhs| {
                    lhs.iter()
                        .zip(rhs)
                        .map(|(&a, &b)| f(a, b))
                        .collect::<Vec<V>>()
                })
            });
            if let Some(Some(data)) = data {
                return Ok(Array::owned(self.shape().to_vec(), data));
            }
        }
        self.zip_with(other, f)
    }

    pub fn gt(&self, value: T) -> Array<bool> {
        self.mapv(|v| v > value)
    }

    pub fn ge(&self, value: T) -> Array<bool> {
        self.mapv(|v| v >= value)
    }

    pub fn lt(&self, value: T) -> Array<bool> {
        self.mapv(|v| v < value)
    }

    pub fn le(&self, value: T) -> Array<bool> {
        self.mapv(|v| v <= value)
    }

    pub fn eq_elem(&self, value: T) -> Array<bool> {
        self.mapv(|v| v == value)
    }

    pub fn ne_elem(&self, value: T) -> Array<bool> {
        self.mapv(|v| v != value)
    }

    pub fn gt_array(&self, other: &Array<T>) -> Result<Array<bool>> {
        self.elementwise(other, |a, b| a > b)
    }

    pub fn ge_array(&self, other: &Array<T>) -> Result<Array<bool>> {
        self.elementwise(other, |a, b| a >= b)
    }

    pub fn lt_array(&self, other: &Array<T>) -> Result<Array<bool>> {
        self.elementwise(other, |a, b| a < b)
    }

    pub fn le_array(&self, other: &Array<T>) -> Result<Array<bool>> {
        self.elementwise(other, |a, b| a <= b)
    }

    pub fn eq_array(&self, other: &Array<T>) -> Result<Array<bool>> {
        self.elementwise(other, |a, b| a == b)
    }
}

impl<T: Numeric> Array<T> {
    pub fn try_add(&self, rhs: &Array<T>) -> Result<Array<T>> {
        self.elementwise(rhs, |a, b| a + b)
    }

    pub fn try_sub(&self, rhs: &Array<T>) -> Result<Array<T>> {
        self.elementwise(rhs, |a, b| a - b)
    }

    pub fn try_mul(&self, rhs: &Array<T>) -> Result<Array<T>> {
        self.elementwise(rhs, |a, b| a * b)
    }

    /// True division. Integers are promoted to floating point first, so
    /// dividing by zero gives `inf` or `NaN` for every dtype.
    pub fn try_div(&self, rhs: &Array<T>) -> Result<Array<T::Float>> {
        self.elementwise(rhs, |a, b| a.to_float() / b.to_float())
    }

    /// Raises every element to a non-negative integer power.
    pub fn pow(&self, exp: usize) -> Array<T> {
        self.mapv(|v| num_traits::pow(v, exp))
    }

    pub fn abs(&self) -> Array<T> {
        self.mapv(|v| if v < T::zero() { T::zero() - v } else { v })
    }

    pub fn sqrt(&self) -> Array<T::Float> {
        self.mapv(|v| v.to_float().sqrt())
    }

    pub fn to_float(&self) -> Array<T::Float> {
        self.mapv(|v| v.to_float())
    }
}

impl<T: FloatElement> Array<T> {
    pub fn powf(&self, exp: T) -> Array<T> {
        self.mapv(|v| v.powf(exp))
    }

    pub fn is_nan(&self) -> Array<bool> {
        self.mapv(|v| v.is_nan_elem())
    }
}

impl Array<bool> {
    pub fn and(&self, rhs: &Array<bool>) -> Result<Array<bool>> {
        self.elementwise(rhs, |a, b| a && b)
    }

    pub fn or(&self, rhs: &Array<bool>) -> Result<Array<bool>> {
        self.elementwise(rhs, |a, b| a || b)
    }

    pub fn not(&self) -> Array<bool> {
        self.mapv(|v| !v)
    }
}

fn expect_broadcast<T>(result: Result<Array<T>>) -> Array<T> {
    match result {
        Ok(array) => array,
        Err(e) => panic!("{}", e),
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl<'a, 'b, T: Numeric> $trait<&'b Array<T>> for &'a Array<T> {
            type Output = Array<T>;

            fn $method(self, rhs: &'b Array<T>) -> Array<T> {
                expect_broadcast(self.$checked(rhs))
            }
        }

        impl<'a, T: Numeric> $trait<T> for &'a Array<T> {
            type Output = Array<T>;

            fn $method(self, rhs: T) -> Array<T> {
                self.mapv(|v| $trait::$method(v, rhs))
            }
        }
    };
}

impl_binary_op!(Add, add, try_add);
impl_binary_op!(Sub, sub, try_sub);
impl_binary_op!(Mul, mul, try_mul);

impl<'a, 'b, T: Numeric> Div<&'b Array<T>> for &'a Array<T> {
    type Output = Array<T::Float>;

    fn div(self, rhs: &'b Array<T>) -> Array<T::Float> {
        expect_broadcast(self.try_div(rhs))
    }
}

impl<'a, T: Numeric> Div<T> for &'a Array<T> {
    type Output = Array<T::Float>;

    fn div(self, rhs: T) -> Array<T::Float> {
        let rhs = rhs.to_float();
        self.mapv(|v| v.to_float() / rhs)
    }
}

impl<'a, T: Numeric + Neg<Output = T>> Neg for &'a Array<T> {
    type Output = Array<T>;

    fn neg(self) -> Array<T> {
        self.mapv(|v| -v)
    }
}

impl<'a, 'b> BitAnd<&'b Array<bool>> for &'a Array<bool> {
    type Output = Array<bool>;

    fn bitand(self, rhs: &'b Array<bool>) -> Array<bool> {
        expect_broadcast(self.and(rhs))
    }
}

impl<'a, 'b> BitOr<&'b Array<bool>> for &'a Array<bool> {
    type Output = Array<bool>;

    fn bitor(self, rhs: &'b Array<bool>) -> Array<bool> {
        expect_broadcast(self.or(rhs))
    }
}

impl<'a> Not for &'a Array<bool> {
    type Output = Array<bool>;

    fn not(self) -> Array<bool> {
        Array::not(self)
    }
}
