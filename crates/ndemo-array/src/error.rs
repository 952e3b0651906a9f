use std::error::Error;
use std::fmt;

use crate::dtype::DType;

pub type Result<T> = std::result::Result<T, ArrayError>;

/// Errors raised by array construction, indexing and shape manipulation.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayError {
    Shape(ShapeError),
    Index(IndexError),
    Type(TypeError),
    /// A reduction with no identity (min, max, argmax, ...) over zero elements.
    EmptyReduction(&'static str),
}

impl ArrayError {
    pub fn is_shape_error(&self) -> bool {
        matches!(self, ArrayError::Shape(_))
    }

    pub fn is_index_error(&self) -> bool {
        matches!(self, ArrayError::Index(_))
    }

    pub fn is_type_error(&self) -> bool {
        matches!(self, ArrayError::Type(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// Buffer length does not match the product of the requested shape.
    BufferLength { shape: Vec<usize>, len: usize },
    Reshape { from: Vec<usize>, to: Vec<usize> },
    NonContiguous { shape: Vec<usize>, strides: Vec<usize> },
    Broadcast { lhs: Vec<usize>, rhs: Vec<usize> },
    /// Sibling sequences of a nested literal disagree in length.
    Ragged { depth: usize },
    Concat { axis: usize, expected: Vec<usize>, found: Vec<usize> },
    NoArrays,
    Split { len: usize, sections: usize },
    Mask { array: Vec<usize>, mask: Vec<usize> },
    IndexLengths { lengths: Vec<usize> },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::BufferLength { shape, len } => {
                write!(f, "invalid shape {:?} for buffer of length {}", shape, len)
            }
            ShapeError::Reshape { from, to } => {
                write!(f, "cannot reshape array of shape {:?} into shape {:?}", from, to)
            }
            ShapeError::NonContiguous { shape, strides } => write!(
                f,
                "cannot reshape non-contiguous array (shape {:?}, strides {:?}) without copying",
                shape, strides
            ),
            ShapeError::Broadcast { lhs, rhs } => write!(
                f,
                "operands could not be broadcast together with shapes {:?} {:?}",
                lhs, rhs
            ),
            ShapeError::Ragged { depth } => write!(
                f,
                "inhomogeneous nested sequence: sibling lengths differ at depth {}",
                depth
            ),
            ShapeError::Concat {
                axis,
                expected,
                found,
            } => write!(
                f,
                "all input array dimensions except for axis {} must match: {:?} vs {:?}",
                axis, expected, found
            ),
            ShapeError::NoArrays => write!(f, "need at least one array to concatenate"),
            ShapeError::Split { len, sections } => write!(
                f,
                "array split does not result in an equal division: {} into {} sections",
                len, sections
            ),
            ShapeError::Mask { array, mask } => write!(
                f,
                "boolean mask of shape {:?} does not match array of shape {:?}",
                mask, array
            ),
            ShapeError::IndexLengths { lengths } => write!(
                f,
                "index sequences must have equal lengths, got {:?}",
                lengths
            ),
        }
    }
}

impl Error for ShapeError {}

#[derive(Debug, Clone, PartialEq)]
pub enum IndexError {
    OutOfBounds { index: isize, axis: usize, len: usize },
    Axis { axis: usize, ndim: usize },
    TooManyIndices { given: usize, ndim: usize },
    /// Element access needs exactly one index per axis.
    Incomplete { given: usize, ndim: usize },
    ZeroStep { axis: usize },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::OutOfBounds { index, axis, len } => write!(
                f,
                "index {} is out of bounds for axis {} with size {}",
                index, axis, len
            ),
            IndexError::Axis { axis, ndim } => write!(
                f,
                "axis {} is out of bounds for array of dimension {}",
                axis, ndim
            ),
            IndexError::TooManyIndices { given, ndim } => write!(
                f,
                "too many indices for array: array is {}-dimensional, but {} were indexed",
                ndim, given
            ),
            IndexError::Incomplete { given, ndim } => write!(
                f,
                "element access needs {} indices, got {}",
                ndim, given
            ),
            IndexError::ZeroStep { axis } => write!(f, "slice step cannot be zero (axis {})", axis),
        }
    }
}

impl Error for IndexError {}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeError {
    /// A list level mixes nested sequences and scalars.
    IrregularNesting { depth: usize },
    /// Booleans mixed with numbers in one literal.
    MixedKinds,
    /// A literal leaf cannot be represented in the requested dtype.
    Element { expected: DType, found: String },
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeError::IrregularNesting { depth } => write!(
                f,
                "irregular nesting: sequences and scalars mixed at depth {}",
                depth
            ),
            TypeError::MixedKinds => write!(f, "cannot mix booleans and numbers in one array"),
            TypeError::Element { expected, found } => {
                write!(f, "cannot represent {} as {}", found, expected)
            }
        }
    }
}

impl Error for TypeError {}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayError::Shape(e) => write!(f, "shape error: {}", e),
            ArrayError::Index(e) => write!(f, "index error: {}", e),
            ArrayError::Type(e) => write!(f, "type error: {}", e),
            ArrayError::EmptyReduction(op) => {
                write!(f, "zero-size array to reduction operation {} which has no identity", op)
            }
        }
    }
}

// `Display` already carries the inner message, so no `source` is reported.
impl Error for ArrayError {}

impl From<ShapeError> for ArrayError {
    fn from(value: ShapeError) -> Self {
        ArrayError::Shape(value)
    }
}

impl From<IndexError> for ArrayError {
    fn from(value: IndexError) -> Self {
        ArrayError::Index(value)
    }
}

impl From<TypeError> for ArrayError {
    fn from(value: TypeError) -> Self {
        ArrayError::Type(value)
    }
}
