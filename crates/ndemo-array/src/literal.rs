//! Nested literal sequences and dtype inference.
//!
//! A `Literal` is what a user writes down before it becomes an array: numbers,
//! booleans and lists of them. Shape is inferred from nesting depth and list
//! lengths, dtype from the leaves. Literals deserialize from JSON, so arrays can
//! be handed over in a config file or on the command line.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::array::Array;
use crate::dtype::{DType, Element};
use crate::error::{Result, ShapeError, TypeError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Float(f64),
    List(Vec<Literal>),
}

impl Literal {
    /// Shape implied by the nesting. Ragged siblings fail with a shape error,
    /// lists mixed with scalars on one level with a type error.
    pub fn shape(&self) -> Result<Vec<usize>> {
        infer_shape(self, 0)
    }

    /// `bool` when every leaf is a boolean, `int64` when every leaf is an
    /// integer, `float64` as soon as one leaf is a float (or there are none).
    pub fn dtype(&self) -> Result<DType> {
        let leaves = self.leaves();
        let bools = leaves
            .iter()
            .filter(|leaf| matches!(leaf, Literal::Bool(_)))
            .count();
        if bools > 0 && bools < leaves.len() {
            return Err(TypeError::MixedKinds.into());
        }
        if bools > 0 {
            return Ok(DType::Bool);
        }
        let all_ints = !leaves.is_empty() && leaves.iter().all(|leaf| matches!(leaf, Literal::Int(_)));
        Ok(if all_ints { DType::Int64 } else { DType::Float64 })
    }

    /// Scalar leaves in row-major order.
    pub fn leaves(&self) -> Vec<&Literal> {
        let mut out = Vec::new();
        collect_leaves(self, &mut out);
        out
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Literal::List(_))
    }
}

fn infer_shape(literal: &Literal, depth: usize) -> Result<Vec<usize>> {
    let items = match literal {
        Literal::List(items) => items,
        _ => return Ok(Vec::new()),
    };
    let first = match items.first() {
        Some(first) => first,
        None => return Ok(vec![0]),
    };
    if items.iter().any(|item| item.is_list() != first.is_list()) {
        return Err(TypeError::IrregularNesting { depth }.into());
    }
    let inner = infer_shape(first, depth + 1)?;
    for item in &items[1..] {
        if infer_shape(item, depth + 1)? != inner {
            return Err(ShapeError::Ragged { depth: depth + 1 }.into());
        }
    }
    let mut shape = Vec::with_capacity(inner.len() + 1);
    shape.push(items.len());
    shape.extend(inner);
    Ok(shape)
}

fn collect_leaves<'a>(literal: &'a Literal, out: &mut Vec<&'a Literal>) {
    match literal {
        Literal::List(items) => items.iter().for_each(|item| collect_leaves(item, out)),
        leaf => out.push(leaf),
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bool(v) => write!(f, "{}", v),
            Literal::Int(v) => write!(f, "{}", v),
            Literal::Float(v) => write!(f, "{:?}", v),
            Literal::List(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

macro_rules! impl_literal_from {
    ($($ty:ty => $variant:ident as $target:ty),* $(,)?) => {
        $(
            impl From<$ty> for Literal {
                fn from(value: $ty) -> Self {
                    Literal::$variant(value as $target)
                }
            }
        )*
    };
}

impl_literal_from!(
    bool => Bool as bool,
    i32 => Int as i64,
    i64 => Int as i64,
    f32 => Float as f64,
    f64 => Float as f64,
);

impl From<Vec<Literal>> for Literal {
    fn from(value: Vec<Literal>) -> Self {
        Literal::List(value)
    }
}

/// Builds a `Literal` from bracketed values. Unlike `array!`, ragged input is
/// accepted here and rejected when the literal is turned into an array.
#[macro_export]
macro_rules! literal {
    ($([$([$($x:expr),* $(,)?]),* $(,)?]),+ $(,)?) => {
        $crate::Literal::List(vec![$(
            $crate::Literal::List(vec![$(
                $crate::Literal::List(vec![$($crate::Literal::from($x)),*])
            ),*])
        ),+])
    };
    ($([$($x:expr),* $(,)?]),+ $(,)?) => {
        $crate::Literal::List(vec![$(
            $crate::Literal::List(vec![$($crate::Literal::from($x)),*])
        ),+])
    };
    ($($x:expr),* $(,)?) => {
        $crate::Literal::List(vec![$($crate::Literal::from($x)),*])
    };
}

/// Element types a literal leaf can be converted into.
pub trait FromLiteral: Element {
    fn from_leaf(leaf: &Literal) -> Option<Self>;
}

impl FromLiteral for bool {
    fn from_leaf(leaf: &Literal) -> Option<Self> {
        match leaf {
            Literal::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromLiteral for i32 {
    fn from_leaf(leaf: &Literal) -> Option<Self> {
        match leaf {
            Literal::Int(v) => i32::try_from(*v).ok(),
            _ => None,
        }
    }
}

impl FromLiteral for i64 {
    fn from_leaf(leaf: &Literal) -> Option<Self> {
        match leaf {
            Literal::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromLiteral for f32 {
    fn from_leaf(leaf: &Literal) -> Option<Self> {
        match leaf {
            Literal::Int(v) => Some(*v as f32),
            Literal::Float(v) => Some(*v as f32),
            Literal::Bool(_) | Literal::List(_) => None,
        }
    }
}

impl FromLiteral for f64 {
    fn from_leaf(leaf: &Literal) -> Option<Self> {
        match leaf {
            Literal::Int(v) => Some(*v as f64),
            Literal::Float(v) => Some(*v),
            Literal::Bool(_) | Literal::List(_) => None,
        }
    }
}

impl<T: FromLiteral> Array<T> {
    /// Builds an array of an explicitly chosen dtype from a literal.
    pub fn from_literal(literal: &Literal) -> Result<Self> {
        let shape = literal.shape()?;
        let data = literal
            .leaves()
            .into_iter()
            .map(|leaf| {
                T::from_leaf(leaf).ok_or_else(|| TypeError::Element {
                    expected: T::DTYPE,
                    found: leaf.to_string(),
                })
            })
            .collect::<std::result::Result<Vec<T>, TypeError>>()?;
        Ok(Array::owned(shape, data))
    }
}

/// An array whose dtype was inferred from a literal.
#[derive(Debug, PartialEq)]
pub enum DynArray {
    Bool(Array<bool>),
    Int(Array<i64>),
    Float(Array<f64>),
}

impl DynArray {
    pub fn from_literal(literal: &Literal) -> Result<Self> {
        // shape first: ragged input is a shape error even when leaves also disagree
        literal.shape()?;
        Ok(match literal.dtype()? {
            DType::Bool => DynArray::Bool(Array::from_literal(literal)?),
            DType::Int32 | DType::Int64 => DynArray::Int(Array::from_literal(literal)?),
            DType::Float32 | DType::Float64 => DynArray::Float(Array::from_literal(literal)?),
        })
    }

    pub fn dtype(&self) -> DType {
        match self {
            DynArray::Bool(a) => a.dtype(),
            DynArray::Int(a) => a.dtype(),
            DynArray::Float(a) => a.dtype(),
        }
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            DynArray::Bool(a) => a.shape(),
            DynArray::Int(a) => a.shape(),
            DynArray::Float(a) => a.shape(),
        }
    }

    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    pub fn size(&self) -> usize {
        self.shape().iter().product()
    }

    /// Numeric contents as `float64`; booleans become 0.0 and 1.0.
    pub fn to_float(&self) -> Array<f64> {
        match self {
            DynArray::Bool(a) => a.mapv(|v| if v { 1.0 } else { 0.0 }),
            DynArray::Int(a) => a.cast::<f64>(),
            DynArray::Float(a) => a.copy(),
        }
    }

    pub fn as_int(&self) -> Option<&Array<i64>> {
        match self {
            DynArray::Int(a) => Some(a),
            _ => None,
        }
    }
}

impl fmt::Display for DynArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DynArray::Bool(a) => fmt::Display::fmt(a, f),
            DynArray::Int(a) => fmt::Display::fmt(a, f),
            DynArray::Float(a) => fmt::Display::fmt(a, f),
        }
    }
}
