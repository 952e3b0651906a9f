use std::fmt;
use std::iter::FromIterator;

use num_traits::AsPrimitive;

use crate::dtype::{DType, Element, Numeric};
use crate::error::{IndexError, Result, ShapeError};
use crate::layout::Layout;
use crate::storage::Storage;

/// A dense, homogeneously typed N-dimensional array.
///
/// An `Array` is a handle: a shared buffer plus the shape, strides and offset
/// used to address it. Handles produced by slicing, `view`, `reshape`,
/// `transpose` and `split` alias the buffer of their source; everything else
/// allocates. `copy` is the explicit way to detach.
pub struct Array<T> {
    storage: Storage<T>,
    layout: Layout,
}

impl<T: Element> Array<T> {
    /// Freshly owned contiguous array. `data.len()` must equal the shape's size.
    pub(crate) fn owned(shape: Vec<usize>, data: Vec<T>) -> Self {
        debug_assert_eq!(shape.iter().product::<usize>(), data.len());
        Array {
            layout: Layout::contiguous(&shape),
            storage: Storage::new(data),
        }
    }

    /// Another handle on this array's buffer with a different layout.
    pub(crate) fn with_layout(&self, layout: Layout) -> Self {
        Array {
            storage: self.storage.share(),
            layout,
        }
    }

    pub(crate) fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Elements addressed by `layout` in row-major order.
    pub(crate) fn gather(&self, layout: &Layout) -> Vec<T> {
        let data = self.storage.read();
        layout.offsets().map(|offset| data[offset]).collect()
    }

    /// Runs `f` on the elements as one borrowed slice, or returns `None` when
    /// the layout is not contiguous.
    pub(crate) fn with_contiguous<R>(&self, f: impl FnOnce(&[T]) -> R) -> Option<R> {
        if !self.layout.is_contiguous() {
            return None;
        }
        let data = self.storage.read();
        let start = self.layout.offset();
        data.get(start..start + self.size()).map(f)
    }

    pub fn from_shape_vec(shape: &[usize], data: Vec<T>) -> Result<Self> {
        if data.len() != shape.iter().product::<usize>() {
            return Err(ShapeError::BufferLength {
                shape: shape.to_vec(),
                len: data.len(),
            }
            .into());
        }
        Ok(Self::owned(shape.to_vec(), data))
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        let len = data.len();
        Self::owned(vec![len], data)
    }

    /// A 2-D array from fixed-size rows.
    pub fn from_rows<const N: usize, const M: usize>(rows: [[T; N]; M]) -> Self {
        let data = rows.iter().flat_map(|row| row.iter().copied()).collect();
        Self::owned(vec![M, N], data)
    }

    /// A 3-D array from fixed-size blocks of rows.
    pub fn from_blocks<const N: usize, const M: usize, const K: usize>(
        blocks: [[[T; N]; M]; K],
    ) -> Self {
        let data = blocks
            .iter()
            .flat_map(|block| block.iter().flat_map(|row| row.iter().copied()))
            .collect();
        Self::owned(vec![K, M, N], data)
    }

    /// A 0-dimensional array holding one value.
    pub fn scalar(value: T) -> Self {
        Self::owned(Vec::new(), vec![value])
    }

    pub fn from_elem(shape: &[usize], value: T) -> Self {
        let size = shape.iter().product();
        Self::owned(shape.to_vec(), vec![value; size])
    }

    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    pub fn strides(&self) -> &[usize] {
        self.layout.strides()
    }

    pub fn ndim(&self) -> usize {
        self.layout.ndim()
    }

    pub fn size(&self) -> usize {
        self.layout.size()
    }

    pub fn len(&self) -> usize {
        self.shape().first().copied().unwrap_or(1)
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    pub fn is_contiguous(&self) -> bool {
        self.layout.is_contiguous()
    }

    /// Whether both handles address the same buffer.
    pub fn shares_storage(&self, other: &Array<T>) -> bool {
        self.storage.ptr_eq(&other.storage)
    }

    /// Number of live handles on this array's buffer, this one included.
    pub fn storage_handles(&self) -> usize {
        self.storage.handles()
    }

    /// Length of the underlying buffer, which a view may only partly cover.
    pub fn storage_len(&self) -> usize {
        self.storage.len()
    }

    pub fn get(&self, index: &[usize]) -> Result<T> {
        let offset = self.layout.offset_of(index)?;
        Ok(self.storage.read()[offset])
    }

    /// Writes one element. Every handle sharing the buffer observes the write.
    pub fn set(&mut self, index: &[usize], value: T) -> Result<()> {
        let offset = self.layout.offset_of(index)?;
        self.storage.write()[offset] = value;
        Ok(())
    }

    /// The single element of a size-1 array.
    pub fn item(&self) -> Result<T> {
        if self.size() != 1 {
            return Err(ShapeError::Reshape {
                from: self.shape().to_vec(),
                to: Vec::new(),
            }
            .into());
        }
        Ok(self.gather(&self.layout)[0])
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.gather(&self.layout)
    }

    pub fn iter(&self) -> std::vec::IntoIter<T> {
        self.to_vec().into_iter()
    }

    /// A handle over the whole array that shares its storage.
    pub fn view(&self) -> Array<T> {
        self.with_layout(self.layout.clone())
    }

    /// A contiguous array with its own storage.
    pub fn copy(&self) -> Array<T> {
        Self::owned(self.shape().to_vec(), self.to_vec())
    }

    pub fn mapv<U, F>(&self, f: F) -> Array<U>
    where
        U: Element,
        F: FnMut(T) -> U,
    {
        Array::owned(self.shape().to_vec(), self.iter().map(f).collect())
    }

    /// Replaces every element with `f(element)`.
    ///
    /// All new values are computed before the buffer is written, so `f` may
    /// read any handle sharing this storage.
    pub fn map_inplace<F>(&mut self, f: F)
    where
        F: FnMut(T) -> T,
    {
        let values: Vec<T> = self.to_vec().into_iter().map(f).collect();
        let mut data = self.storage.write();
        for (offset, value) in self.layout.offsets().zip(values) {
            data[offset] = value;
        }
    }

    pub fn fill(&mut self, value: T) {
        self.map_inplace(|_| value);
    }

    /// Copies `source` into this array, broadcasting it to this shape.
    ///
    /// `source` may alias this array; it is read completely before writing.
    pub fn assign(&mut self, source: &Array<T>) -> Result<()> {
        let layout = source.layout.broadcast_to(self.shape())?;
        let values = source.gather(&layout);
        let mut data = self.storage.write();
        for (offset, value) in self.layout.offsets().zip(values) {
            data[offset] = value;
        }
        Ok(())
    }

    /// Element-wise numeric conversion. Float to integer truncates toward zero.
    pub fn cast<U>(&self) -> Array<U>
    where
        T: AsPrimitive<U>,
        U: Element,
    {
        self.mapv(|v| v.as_())
    }
}

impl<T: Numeric> Array<T> {
    pub fn zeros(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::zero())
    }

    pub fn ones(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::one())
    }

    /// `0, 1, ..., n - 1` as a 1-D array.
    pub fn arange(n: usize) -> Self {
        let mut values = Vec::with_capacity(n);
        let mut next = T::zero();
        for _ in 0..n {
            values.push(next);
            next = next + T::one();
        }
        Self::from_vec(values)
    }

    /// Values from `start` (inclusive) to `stop` (exclusive) spaced by `step`.
    pub fn arange_step(start: T, stop: T, step: T) -> Result<Self> {
        if step == T::zero() {
            return Err(IndexError::ZeroStep { axis: 0 }.into());
        }
        let span: f64 = (stop - start).as_() / step.as_();
        let len = if span > 0.0 { span.ceil() as usize } else { 0 };
        let mut values = Vec::with_capacity(len);
        let mut next = start;
        for _ in 0..len {
            values.push(next);
            next = next + step;
        }
        Ok(Self::from_vec(values))
    }
}

impl Array<f64> {
    /// `num` evenly spaced samples over `[start, stop]`.
    pub fn linspace(start: f64, stop: f64, num: usize) -> Self {
        let values = match num {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (stop - start) / (num - 1) as f64;
                (0..num).map(|i| start + step * i as f64).collect()
            }
        };
        Self::from_vec(values)
    }
}

impl<T: Element> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.to_vec() == other.to_vec()
    }
}

impl<T: Element> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("dtype", &T::DTYPE)
            .field("shape", &self.shape())
            .field("strides", &self.strides())
            .field("offset", &self.layout.offset())
            .field("data", &self.to_vec())
            .finish()
    }
}

impl<T: Element> From<Vec<T>> for Array<T> {
    fn from(value: Vec<T>) -> Self {
        Array::from_vec(value)
    }
}

impl<T: Element> From<Array<T>> for Vec<T> {
    fn from(value: Array<T>) -> Self {
        value.to_vec()
    }
}

impl<T: Element> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array::from_vec(iter.into_iter().collect())
    }
}

/// Builds an `Array` from bracketed rows, like a nested literal.
///
/// ```
/// use ndemo_array::array;
///
/// let a = array![[1i64, 2, 3], [4, 5, 6]];
/// assert_eq!(a.shape(), &[2, 3]);
/// ```
#[macro_export]
macro_rules! array {
    ($([$([$($x:expr),* $(,)?]),+ $(,)?]),+ $(,)?) => {
        $crate::Array::from_blocks([$([$([$($x,)*],)*],)*])
    };
    ($([$($x:expr),* $(,)?]),+ $(,)?) => {
        $crate::Array::from_rows([$([$($x,)*],)*])
    };
    ($($x:expr),* $(,)?) => {
        $crate::Array::from_vec(vec![$($x,)*])
    };
}
