//! Reshaping, joining and splitting.
//!
//! `reshape`, `ravel`, `transpose`, `insert_axis` and the parts returned by the
//! split family are views. Everything that joins arrays copies.

use crate::array::Array;
use crate::dtype::Element;
use crate::error::{IndexError, Result, ShapeError};
use crate::layout::Layout;

impl<T: Element> Array<T> {
    /// Reinterprets the elements with a new shape of the same size.
    ///
    /// Only contiguous arrays can be reshaped in place; anything else is a
    /// `ShapeError::NonContiguous`, never a hidden copy.
    pub fn reshape(&self, shape: &[usize]) -> Result<Array<T>> {
        if shape.iter().product::<usize>() != self.size() {
            return Err(ShapeError::Reshape {
                from: self.shape().to_vec(),
                to: shape.to_vec(),
            }
            .into());
        }
        if !self.is_contiguous() {
            return Err(ShapeError::NonContiguous {
                shape: self.shape().to_vec(),
                strides: self.strides().to_vec(),
            }
            .into());
        }
        Ok(self.with_layout(Layout::contiguous_at(shape, self.layout().offset())))
    }

    /// A 1-D view of a contiguous array.
    pub fn ravel(&self) -> Result<Array<T>> {
        self.reshape(&[self.size()])
    }

    /// A 1-D copy in row-major order.
    pub fn flatten(&self) -> Array<T> {
        Array::from_vec(self.to_vec())
    }

    /// Reverses the axes. The result is a view.
    pub fn transpose(&self) -> Array<T> {
        self.with_layout(self.layout().reversed_axes())
    }

    /// A view with a new axis of length 1 inserted at `axis`.
    pub fn insert_axis(&self, axis: usize) -> Result<Array<T>> {
        if axis > self.ndim() {
            return Err(IndexError::Axis {
                axis,
                ndim: self.ndim() + 1,
            }
            .into());
        }
        let mut layout = self.layout().clone();
        layout.shape.insert(axis, 1);
        layout.strides.insert(axis, 0);
        Ok(self.with_layout(layout))
    }

    /// Joins arrays along an existing axis. All other dimensions must agree.
    pub fn concatenate(arrays: &[&Array<T>], axis: usize) -> Result<Array<T>> {
        let first = arrays.first().ok_or(ShapeError::NoArrays)?;
        first.layout().check_axis(axis)?;
        for array in &arrays[1..] {
            let compatible = array.ndim() == first.ndim()
                && array
                    .shape()
                    .iter()
                    .zip(first.shape())
                    .enumerate()
                    .all(|(k, (a, b))| k == axis || a == b);
            if !compatible {
                return Err(ShapeError::Concat {
                    axis,
                    expected: first.shape().to_vec(),
                    found: array.shape().to_vec(),
                }
                .into());
            }
        }
        log::debug!("concatenating {} arrays along axis {}", arrays.len(), axis);

        let outer: usize = first.shape()[..axis].iter().product();
        let blocks: Vec<(Vec<T>, usize)> = arrays
            .iter()
            .map(|array| (array.to_vec(), array.shape()[axis..].iter().product()))
            .collect();

        let mut shape = first.shape().to_vec();
        shape[axis] = arrays.iter().map(|array| array.shape()[axis]).sum();
        let mut data = Vec::with_capacity(shape.iter().product());
        for i in 0..outer {
            for (values, block) in &blocks {
                data.extend_from_slice(&values[i * block..(i + 1) * block]);
            }
        }
        Ok(Array::owned(shape, data))
    }

    /// Joins equally shaped arrays along a new axis.
    pub fn stack(arrays: &[&Array<T>], axis: usize) -> Result<Array<T>> {
        let first = arrays.first().ok_or(ShapeError::NoArrays)?;
        if let Some(other) = arrays.iter().find(|a| a.shape() != first.shape()) {
            return Err(ShapeError::Concat {
                axis,
                expected: first.shape().to_vec(),
                found: other.shape().to_vec(),
            }
            .into());
        }
        let expanded = arrays
            .iter()
            .map(|array| array.insert_axis(axis))
            .collect::<Result<Vec<_>>>()?;
        let refs: Vec<&Array<T>> = expanded.iter().collect();
        Array::concatenate(&refs, axis)
    }

    /// Concatenates along the last axis.
    pub fn hstack(arrays: &[&Array<T>]) -> Result<Array<T>> {
        let first = arrays.first().ok_or(ShapeError::NoArrays)?;
        Array::concatenate(arrays, first.ndim().saturating_sub(1))
    }

    /// Concatenates along the first axis; 1-D inputs are taken as rows.
    pub fn vstack(arrays: &[&Array<T>]) -> Result<Array<T>> {
        let rows = arrays
            .iter()
            .map(|array| {
                if array.ndim() == 1 {
                    array.insert_axis(0)
                } else {
                    Ok(array.view())
                }
            })
            .collect::<Result<Vec<_>>>()?;
        let refs: Vec<&Array<T>> = rows.iter().collect();
        Array::concatenate(&refs, 0)
    }

    /// Splits into `sections` equal views along `axis`.
    pub fn split(&self, axis: usize, sections: usize) -> Result<Vec<Array<T>>> {
        let layout = self.layout();
        layout.check_axis(axis)?;
        let len = layout.shape[axis];
        if sections == 0 || len % sections != 0 {
            return Err(ShapeError::Split { len, sections }.into());
        }

        let step = len / sections;
        let parts = (0..sections)
            .map(|i| {
                let mut part = layout.clone();
                part.shape[axis] = step;
                if step > 0 {
                    part.offset += i * step * layout.strides[axis];
                }
                self.with_layout(part)
            })
            .collect();
        Ok(parts)
    }

    /// Splits along the last axis.
    pub fn hsplit(&self, sections: usize) -> Result<Vec<Array<T>>> {
        self.split(self.ndim().saturating_sub(1), sections)
    }

    /// Splits along the first axis.
    pub fn vsplit(&self, sections: usize) -> Result<Vec<Array<T>>> {
        self.split(0, sections)
    }
}
