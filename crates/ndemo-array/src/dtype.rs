//! Element types.
//!
//! The dtype of an array is its static type parameter. `DType` is the runtime
//! tag reported by `Array::dtype` and carried by `DynArray`.

use std::fmt;

use num_traits::{AsPrimitive, Float, Num, NumCast};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DType {
    Bool,
    Int32,
    Int64,
    Float32,
    Float64,
}

impl DType {
    pub fn name(&self) -> &'static str {
        match self {
            DType::Bool => "bool",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, DType::Int32 | DType::Int64)
    }

    pub fn is_float(&self) -> bool {
        matches!(self, DType::Float32 | DType::Float64)
    }

    /// Width of one element in bytes.
    pub fn item_size(&self) -> usize {
        match self {
            DType::Bool => 1,
            DType::Int32 | DType::Float32 => 4,
            DType::Int64 | DType::Float64 => 8,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value that can be stored in an `Array`.
pub trait Element: Copy + fmt::Debug + fmt::Display + PartialEq + PartialOrd + 'static {
    const DTYPE: DType;

    /// True only for floating NaN.
    #[inline]
    fn is_nan_elem(self) -> bool {
        self != self
    }
}

/// Element types that support arithmetic.
pub trait Numeric: Element + Num + NumCast + AsPrimitive<f64> {
    /// Floating type produced by true division.
    type Float: FloatElement;

    fn to_float(self) -> Self::Float;
}

pub trait FloatElement: Numeric + Float {}

impl Element for bool {
    const DTYPE: DType = DType::Bool;
}

macro_rules! impl_numeric {
    ($ty:ty, $dtype:expr, $float:ty) => {
        impl Element for $ty {
            const DTYPE: DType = $dtype;
        }

        impl Numeric for $ty {
            type Float = $float;

            #[inline]
            fn to_float(self) -> $float {
                self as $float
            }
        }
    };
}

impl_numeric!(i32, DType::Int32, f64);
impl_numeric!(i64, DType::Int64, f64);
impl_numeric!(f32, DType::Float32, f32);
impl_numeric!(f64, DType::Float64, f64);

impl FloatElement for f32 {}
impl FloatElement for f64 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dtype_names_match_numpy() {
        assert_eq!(<i64 as Element>::DTYPE.to_string(), "int64");
        assert_eq!(<f64 as Element>::DTYPE.to_string(), "float64");
        assert_eq!(<bool as Element>::DTYPE.to_string(), "bool");
    }

    #[test]
    fn nan_detection() {
        assert!(f64::NAN.is_nan_elem());
        assert!(!3i64.is_nan_elem());
    }
}
