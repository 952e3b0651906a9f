//! ndemo-array: dense N-dimensional arrays with numpy-style semantics.
//!
//! An `Array<T>` is a shape/strides/offset layout over a reference-counted
//! buffer. Slicing, reshaping, transposing and splitting return views that
//! share the buffer; arithmetic, fancy indexing, masking and joining return
//! fresh arrays. Element-wise operations broadcast trailing dimension first.
//!
//! Literal input (`literal!` or JSON) goes through `Literal`, which infers
//! shape and dtype and yields a `DynArray`.
pub mod array;
pub mod dtype;
pub mod error;
pub mod format;
pub mod indexing;
pub mod layout;
pub mod literal;
pub mod manipulation;
pub mod ops;
pub mod reduce;
mod storage;

pub use array::Array;
pub use dtype::{DType, Element, FloatElement, Numeric};
pub use error::{ArrayError, IndexError, Result, ShapeError, TypeError};
pub use indexing::{unravel_index, SliceArg};
pub use layout::{broadcast_shape, Layout};
pub use literal::{DynArray, FromLiteral, Literal};
