//! Basic (view) indexing, fancy (copy) indexing and boolean masks.

use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo};

use crate::array::Array;
use crate::dtype::Element;
use crate::error::{IndexError, Result, ShapeError};
use crate::layout::Layout;

/// One entry of a basic index: an integer drops its axis, a range keeps it.
///
/// Negative positions count from the end of the axis. Range bounds are
/// clamped to the axis like python slices; integers are bounds checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliceArg {
    Index(isize),
    Range {
        start: Option<isize>,
        end: Option<isize>,
        step: usize,
    },
}

impl SliceArg {
    pub fn full() -> Self {
        SliceArg::Range {
            start: None,
            end: None,
            step: 1,
        }
    }

    /// Sets the step of a range entry; integer entries are returned unchanged.
    pub fn step(self, step: usize) -> Self {
        match self {
            SliceArg::Range { start, end, .. } => SliceArg::Range { start, end, step },
            index => index,
        }
    }
}

impl From<RangeFull> for SliceArg {
    fn from(_: RangeFull) -> Self {
        SliceArg::full()
    }
}

macro_rules! impl_slice_arg_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for SliceArg {
                fn from(value: $ty) -> Self {
                    SliceArg::Index(value as isize)
                }
            }

            impl From<Range<$ty>> for SliceArg {
                fn from(value: Range<$ty>) -> Self {
                    SliceArg::Range {
                        start: Some(value.start as isize),
                        end: Some(value.end as isize),
                        step: 1,
                    }
                }
            }

            impl From<RangeFrom<$ty>> for SliceArg {
                fn from(value: RangeFrom<$ty>) -> Self {
                    SliceArg::Range {
                        start: Some(value.start as isize),
                        end: None,
                        step: 1,
                    }
                }
            }

            impl From<RangeTo<$ty>> for SliceArg {
                fn from(value: RangeTo<$ty>) -> Self {
                    SliceArg::Range {
                        start: None,
                        end: Some(value.end as isize),
                        step: 1,
                    }
                }
            }

            impl From<RangeInclusive<$ty>> for SliceArg {
                fn from(value: RangeInclusive<$ty>) -> Self {
                    let end = *value.end() as isize;
                    SliceArg::Range {
                        start: Some(*value.start() as isize),
                        end: if end == -1 { None } else { Some(end + 1) },
                        step: 1,
                    }
                }
            }
        )*
    };
}

impl_slice_arg_from!(i32, i64, isize, usize);

/// Builds a basic index: `s![1, .., 0..3;2, -1]`.
///
/// Each entry is an integer or a range, optionally followed by `;step`.
#[macro_export]
macro_rules! s {
    ($($arg:expr $(; $step:expr)?),* $(,)?) => {
        [$($crate::SliceArg::from($arg)$(.step($step))?),*]
    };
}

pub(crate) fn normalize_index(index: isize, axis: usize, len: usize) -> Result<usize> {
    let resolved = if index < 0 {
        index + len as isize
    } else {
        index
    };
    if resolved < 0 || resolved as usize >= len {
        return Err(IndexError::OutOfBounds { index, axis, len }.into());
    }
    Ok(resolved as usize)
}

/// First position and length of a clamped range with a positive step.
fn resolve_range(start: Option<isize>, end: Option<isize>, step: usize, len: usize) -> (usize, usize) {
    let clamp = |pos: isize| -> usize {
        let pos = if pos < 0 { pos + len as isize } else { pos };
        pos.clamp(0, len as isize) as usize
    };
    let first = start.map_or(0, clamp);
    let last = end.map_or(len, clamp);
    if last <= first {
        (first, 0)
    } else {
        (first, (last - first + step - 1) / step)
    }
}

impl<T: Element> Array<T> {
    /// Basic indexing. The result is a view sharing this array's storage.
    ///
    /// Axes without an entry are taken whole.
    pub fn slice(&self, args: &[SliceArg]) -> Result<Array<T>> {
        let layout = self.layout();
        if args.len() > layout.ndim() {
            return Err(IndexError::TooManyIndices {
                given: args.len(),
                ndim: layout.ndim(),
            }
            .into());
        }

        let mut shape = Vec::with_capacity(layout.ndim());
        let mut strides = Vec::with_capacity(layout.ndim());
        let mut offset = layout.offset();

        for axis in 0..layout.ndim() {
            let len = layout.shape[axis];
            let stride = layout.strides[axis];
            match args.get(axis).copied().unwrap_or_else(SliceArg::full) {
                SliceArg::Index(index) => {
                    offset += normalize_index(index, axis, len)? * stride;
                }
                SliceArg::Range { start, end, step } => {
                    if step == 0 {
                        return Err(IndexError::ZeroStep { axis }.into());
                    }
                    let (first, count) = resolve_range(start, end, step, len);
                    if count > 0 {
                        offset += first * stride;
                    }
                    shape.push(count);
                    strides.push(stride * step);
                }
            }
        }

        Ok(self.with_layout(Layout {
            shape,
            strides,
            offset,
        }))
    }

    /// The sub-array at position `index` along `axis`, as a view.
    pub fn index_axis(&self, axis: usize, index: isize) -> Result<Array<T>> {
        let layout = self.layout();
        layout.check_axis(axis)?;
        let position = normalize_index(index, axis, layout.shape[axis])?;
        let mut sub = layout.remove_axis(axis);
        sub.offset += position * layout.strides[axis];
        Ok(self.with_layout(sub))
    }

    pub fn row(&self, index: isize) -> Result<Array<T>> {
        self.index_axis(0, index)
    }

    pub fn column(&self, index: isize) -> Result<Array<T>> {
        self.index_axis(1, index)
    }

    /// Fancy indexing: one index sequence per leading axis, paired
    /// positionally (not a cross product).
    ///
    /// With `k` sequences of length `n` the result has shape
    /// `(n,) + shape[k..]` and owns its storage.
    pub fn fancy_index(&self, indices: &[Vec<isize>]) -> Result<Array<T>> {
        let layout = self.layout();
        if indices.len() > layout.ndim() {
            return Err(IndexError::TooManyIndices {
                given: indices.len(),
                ndim: layout.ndim(),
            }
            .into());
        }
        let count = match indices.first() {
            Some(first) => first.len(),
            None => return Ok(self.copy()),
        };
        if indices.iter().any(|seq| seq.len() != count) {
            return Err(ShapeError::IndexLengths {
                lengths: indices.iter().map(Vec::len).collect(),
            }
            .into());
        }

        let k = indices.len();
        let mut bases = Vec::with_capacity(count);
        for i in 0..count {
            let mut base = layout.offset();
            for (axis, seq) in indices.iter().enumerate() {
                base += normalize_index(seq[i], axis, layout.shape[axis])? * layout.strides[axis];
            }
            bases.push(base);
        }

        let mut sub = Layout {
            shape: layout.shape[k..].to_vec(),
            strides: layout.strides[k..].to_vec(),
            offset: 0,
        };
        let mut data = Vec::with_capacity(count * sub.size());
        for base in bases {
            sub.offset = base;
            data.extend(self.gather(&sub));
        }

        let mut shape = vec![count];
        shape.extend_from_slice(&sub.shape);
        Ok(Array::owned(shape, data))
    }

    /// Whole sub-arrays along `axis`, in the order given. Always a copy.
    pub fn select(&self, axis: usize, indices: &[usize]) -> Result<Array<T>> {
        self.layout().check_axis(axis)?;
        let parts = indices
            .iter()
            .map(|&i| self.index_axis(axis, i as isize))
            .collect::<Result<Vec<_>>>()?;
        if parts.is_empty() {
            let mut shape = self.shape().to_vec();
            shape[axis] = 0;
            return Ok(Array::owned(shape, Vec::new()));
        }
        let refs: Vec<&Array<T>> = parts.iter().collect();
        Array::stack(&refs, axis)
    }

    /// Elements where `mask` is true, flattened in row-major order. A copy.
    pub fn masked(&self, mask: &Array<bool>) -> Result<Array<T>> {
        self.check_mask(mask)?;
        Ok(self
            .iter()
            .zip(mask.iter())
            .filter_map(|(value, keep)| keep.then_some(value))
            .collect())
    }

    /// Sets every element where `mask` is true to `value`.
    pub fn assign_where(&mut self, mask: &Array<bool>, value: T) -> Result<()> {
        self.check_mask(mask)?;
        let mut keep = mask.iter();
        self.map_inplace(|current| {
            if keep.next().unwrap_or(false) {
                value
            } else {
                current
            }
        });
        Ok(())
    }

    fn check_mask(&self, mask: &Array<bool>) -> Result<()> {
        if mask.shape() != self.shape() {
            return Err(ShapeError::Mask {
                array: self.shape().to_vec(),
                mask: mask.shape().to_vec(),
            }
            .into());
        }
        Ok(())
    }
}

impl Array<bool> {
    /// Positions of true elements as one index sequence per axis.
    pub fn nonzero(&self) -> Vec<Vec<usize>> {
        let mut per_axis = vec![Vec::new(); self.ndim()];
        for index in self.argwhere() {
            for (axis, i) in index.into_iter().enumerate() {
                per_axis[axis].push(i);
            }
        }
        per_axis
    }

    /// Multi-indices of true elements in row-major order.
    pub fn argwhere(&self) -> Vec<Vec<usize>> {
        self.iter()
            .enumerate()
            .filter(|(_, v)| *v)
            .map(|(linear, _)| unravel_index(linear, self.shape()))
            .collect()
    }
}

/// Multi-index of the `linear`-th element in row-major order.
pub fn unravel_index(mut linear: usize, shape: &[usize]) -> Vec<usize> {
    let mut index = vec![0; shape.len()];
    for axis in (0..shape.len()).rev() {
        if shape[axis] > 0 {
            index[axis] = linear % shape[axis];
            linear /= shape[axis];
        }
    }
    index
}
