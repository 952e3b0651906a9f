//! Shape, strides and offset into a linear buffer.

use crate::error::{IndexError, Result, ShapeError};

/// Row-major strides for a contiguous buffer of the given shape.
pub fn contiguous_strides(shape: &[usize]) -> Vec<usize> {
    let mut strides = vec![1; shape.len()];
    for i in (0..shape.len().saturating_sub(1)).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// The shape two operands broadcast to, compared trailing dimension first.
pub fn broadcast_shape(lhs: &[usize], rhs: &[usize]) -> Result<Vec<usize>> {
    let ndim = lhs.len().max(rhs.len());
    let mut result = Vec::with_capacity(ndim);

    for i in 0..ndim {
        let a = if i < lhs.len() { lhs[lhs.len() - 1 - i] } else { 1 };
        let b = if i < rhs.len() { rhs[rhs.len() - 1 - i] } else { 1 };

        if a == b || b == 1 {
            result.push(a);
        } else if a == 1 {
            result.push(b);
        } else {
            return Err(ShapeError::Broadcast {
                lhs: lhs.to_vec(),
                rhs: rhs.to_vec(),
            }
            .into());
        }
    }

    result.reverse();
    Ok(result)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub(crate) shape: Vec<usize>,
    pub(crate) strides: Vec<usize>,
    pub(crate) offset: usize,
}

impl Layout {
    pub fn contiguous(shape: &[usize]) -> Self {
        Self::contiguous_at(shape, 0)
    }

    pub fn contiguous_at(shape: &[usize], offset: usize) -> Self {
        Layout {
            shape: shape.to_vec(),
            strides: contiguous_strides(shape),
            offset,
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn size(&self) -> usize {
        self.shape.iter().product()
    }

    /// Whether the elements occupy one unbroken row-major run of the buffer.
    ///
    /// Axes of length 1 may carry any stride.
    pub fn is_contiguous(&self) -> bool {
        if self.size() == 0 {
            return true;
        }
        let mut expected = 1;
        for (&dim, &stride) in self.shape.iter().zip(self.strides.iter()).rev() {
            if dim == 1 {
                continue;
            }
            if stride != expected {
                return false;
            }
            expected *= dim;
        }
        true
    }

    pub(crate) fn check_axis(&self, axis: usize) -> Result<()> {
        if axis >= self.ndim() {
            return Err(IndexError::Axis {
                axis,
                ndim: self.ndim(),
            }
            .into());
        }
        Ok(())
    }

    /// Buffer offset of a full multi-index, bounds checked.
    pub fn offset_of(&self, index: &[usize]) -> Result<usize> {
        if index.len() != self.ndim() {
            return Err(IndexError::Incomplete {
                given: index.len(),
                ndim: self.ndim(),
            }
            .into());
        }
        let mut offset = self.offset;
        for (axis, ((&i, &dim), &stride)) in index
            .iter()
            .zip(self.shape.iter())
            .zip(self.strides.iter())
            .enumerate()
        {
            if i >= dim {
                return Err(IndexError::OutOfBounds {
                    index: i as isize,
                    axis,
                    len: dim,
                }
                .into());
            }
            offset += i * stride;
        }
        Ok(offset)
    }

    /// Layout of the same data seen with `shape`; broadcast axes get stride 0.
    pub fn broadcast_to(&self, shape: &[usize]) -> Result<Layout> {
        if shape.len() < self.ndim() {
            return Err(ShapeError::Broadcast {
                lhs: self.shape.clone(),
                rhs: shape.to_vec(),
            }
            .into());
        }
        let lead = shape.len() - self.ndim();
        let mut strides = vec![0; shape.len()];
        for (axis, &target) in shape.iter().enumerate().skip(lead) {
            let dim = self.shape[axis - lead];
            if dim == target {
                strides[axis] = self.strides[axis - lead];
            } else if dim != 1 {
                return Err(ShapeError::Broadcast {
                    lhs: self.shape.clone(),
                    rhs: shape.to_vec(),
                }
                .into());
            }
        }
        Ok(Layout {
            shape: shape.to_vec(),
            strides,
            offset: self.offset,
        })
    }

    pub fn remove_axis(&self, axis: usize) -> Layout {
        let mut shape = self.shape.clone();
        let mut strides = self.strides.clone();
        shape.remove(axis);
        strides.remove(axis);
        Layout {
            shape,
            strides,
            offset: self.offset,
        }
    }

    pub fn reversed_axes(&self) -> Layout {
        let mut shape = self.shape.clone();
        let mut strides = self.strides.clone();
        shape.reverse();
        strides.reverse();
        Layout {
            shape,
            strides,
            offset: self.offset,
        }
    }

    /// Buffer offsets of every element in row-major order.
    pub fn offsets(&self) -> Offsets<'_> {
        Offsets {
            layout: self,
            index: vec![0; self.ndim()],
            next: self.offset,
            remaining: self.size(),
        }
    }
}

/// Row-major walk over the buffer offsets of a layout.
pub struct Offsets<'a> {
    layout: &'a Layout,
    index: Vec<usize>,
    next: usize,
    remaining: usize,
}

impl Iterator for Offsets<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.remaining -= 1;

        for axis in (0..self.index.len()).rev() {
            self.index[axis] += 1;
            self.next += self.layout.strides[axis];
            if self.index[axis] < self.layout.shape[axis] {
                break;
            }
            self.next -= self.layout.strides[axis] * self.layout.shape[axis];
            self.index[axis] = 0;
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Offsets<'_> {}
