//! Reductions over the whole array or along one axis.
//!
//! Axis variants drop the reduced axis from the shape. Means and deviations
//! are accumulated in `f64` whatever the element type.


use crate::array::Array;
use crate::dtype::{Element, Numeric};
use crate::error::{ArrayError, Result};
use crate::layout::Layout;

impl<T: Element> Array<T> {
    /// Applies `f` to every 1-D lane along `axis`. The result has the shape of
    /// this array with `axis` removed.
    pub fn map_lanes<U, F>(&self, axis: usize, mut f: F) -> Result<Array<U>>
    where
        U: Element,
        F: FnMut(&[T]) -> U,
    {
        self.try_map_lanes(axis, |lane| Ok(f(lane)))
    }

    pub fn try_map_lanes<U, F>(&self, axis: usize, mut f: F) -> Result<Array<U>>
    where
        U: Element,
        F: FnMut(&[T]) -> Result<U>,
    {
        let layout = self.layout();
        layout.check_axis(axis)?;
        let outer = layout.remove_axis(axis);
        let mut lane = Layout {
            shape: vec![layout.shape[axis]],
            strides: vec![layout.strides[axis]],
            offset: 0,
        };

        let mut out = Vec::with_capacity(outer.size());
        for base in outer.offsets() {
            lane.offset = base;
            out.push(f(&self.gather(&lane))?);
        }
        Ok(Array::owned(outer.shape, out))
    }
}

fn sum_of<T: Numeric>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &v| acc + v)
}

fn mean_of<T: Numeric>(values: &[T]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let total: f64 = values.iter().map(|v| v.as_()).sum();
    Some(total / values.len() as f64)
}

/// Mean squared deviation with `ddof` delta degrees of freedom.
fn var_of<T: Numeric>(values: &[T], ddof: usize) -> Option<f64> {
    if values.len() <= ddof {
        return None;
    }
    let mean = mean_of(values)?;
    let squares: f64 = values
        .iter()
        .map(|v| {
            let d: f64 = v.as_() - mean;
            d * d
        })
        .sum();
    Some(squares / (values.len() - ddof) as f64)
}

/// Position of the first element that `better` prefers over all earlier ones.
/// A NaN wins immediately.
fn arg_extreme<T: Element>(values: &[T], better: impl Fn(T, T) -> bool) -> Option<usize> {
    let mut best = 0;
    for (idx, &v) in values.iter().enumerate() {
        if v.is_nan_elem() {
            return Some(idx);
        }
        if better(v, values[best]) {
            best = idx;
        }
    }
    if values.is_empty() {
        None
    } else {
        Some(best)
    }
}

fn extreme_of<T: Element>(
    values: &[T],
    op: &'static str,
    better: impl Fn(T, T) -> bool,
) -> Result<T> {
    arg_extreme(values, better)
        .map(|idx| values[idx])
        .ok_or(ArrayError::EmptyReduction(op))
}

impl<T: Numeric> Array<T> {
    pub fn sum(&self) -> T {
        sum_of(&self.to_vec())
    }

    pub fn sum_axis(&self, axis: usize) -> Result<Array<T>> {
        self.map_lanes(axis, sum_of)
    }

    pub fn product(&self) -> T {
        self.iter().fold(T::one(), |acc, v| acc * v)
    }

    /// Arithmetic mean, `None` for an empty array.
    pub fn mean(&self) -> Option<f64> {
        mean_of(&self.to_vec())
    }

    /// Means along `axis`; an empty lane gives NaN.
    pub fn mean_axis(&self, axis: usize) -> Result<Array<f64>> {
        self.map_lanes(axis, |lane| mean_of(lane).unwrap_or(f64::NAN))
    }

    /// Population variance.
    pub fn var(&self) -> Option<f64> {
        self.var_ddof(0)
    }

    pub fn var_ddof(&self, ddof: usize) -> Option<f64> {
        var_of(&self.to_vec(), ddof)
    }

    pub fn var_axis(&self, axis: usize) -> Result<Array<f64>> {
        self.map_lanes(axis, |lane| var_of(lane, 0).unwrap_or(f64::NAN))
    }

    /// Population standard deviation, `sqrt(mean((x - mean(x))^2))`.
    pub fn std(&self) -> Option<f64> {
        self.var().map(f64::sqrt)
    }

    pub fn std_ddof(&self, ddof: usize) -> Option<f64> {
        self.var_ddof(ddof).map(f64::sqrt)
    }

    pub fn std_axis(&self, axis: usize) -> Result<Array<f64>> {
        self.map_lanes(axis, |lane| var_of(lane, 0).map_or(f64::NAN, f64::sqrt))
    }

    pub fn min(&self) -> Result<T> {
        extreme_of(&self.to_vec(), "minimum", |a, b| a < b)
    }

    pub fn max(&self) -> Result<T> {
        extreme_of(&self.to_vec(), "maximum", |a, b| a > b)
    }

    pub fn min_axis(&self, axis: usize) -> Result<Array<T>> {
        self.try_map_lanes(axis, |lane| extreme_of(lane, "minimum", |a, b| a < b))
    }

    pub fn max_axis(&self, axis: usize) -> Result<Array<T>> {
        self.try_map_lanes(axis, |lane| extreme_of(lane, "maximum", |a, b| a > b))
    }

    /// Row-major position of the first maximum.
    pub fn argmax(&self) -> Result<usize> {
        arg_extreme(&self.to_vec(), |a, b| a > b).ok_or(ArrayError::EmptyReduction("argmax"))
    }

    /// Row-major position of the first minimum.
    pub fn argmin(&self) -> Result<usize> {
        arg_extreme(&self.to_vec(), |a, b| a < b).ok_or(ArrayError::EmptyReduction("argmin"))
    }

    pub fn argmax_axis(&self, axis: usize) -> Result<Array<i64>> {
        self.try_map_lanes(axis, |lane| {
            arg_extreme(lane, |a, b| a > b)
                .map(|idx| idx as i64)
                .ok_or(ArrayError::EmptyReduction("argmax"))
        })
    }

    pub fn argmin_axis(&self, axis: usize) -> Result<Array<i64>> {
        self.try_map_lanes(axis, |lane| {
            arg_extreme(lane, |a, b| a < b)
                .map(|idx| idx as i64)
                .ok_or(ArrayError::EmptyReduction("argmin"))
        })
    }
}

impl Array<bool> {
    /// True when every element is true (and for an empty array).
    pub fn all(&self) -> bool {
        self.iter().all(|v| v)
    }

    pub fn any(&self) -> bool {
        self.iter().any(|v| v)
    }

    pub fn all_axis(&self, axis: usize) -> Result<Array<bool>> {
        self.map_lanes(axis, |lane| lane.iter().all(|&v| v))
    }

    pub fn any_axis(&self, axis: usize) -> Result<Array<bool>> {
        self.map_lanes(axis, |lane| lane.iter().any(|&v| v))
    }

    pub fn count_true(&self) -> usize {
        self.iter().filter(|&v| v).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_extreme_ties_pick_first() {
        assert_eq!(arg_extreme(&[1, 5, 5, 2], |a, b| a > b), Some(1));
        assert_eq!(arg_extreme::<i32>(&[], |a, b| a > b), None);
    }

    #[test]
    fn test_arg_extreme_nan_wins() {
        assert_eq!(arg_extreme(&[1.0, f64::NAN, 9.0], |a, b| a > b), Some(1));
    }

    #[test]
    fn test_var_of_population() {
        let v = var_of(&[1.0f64, 2.0, 3.0, 4.0], 0).unwrap();
        assert!((v - 1.25).abs() < 1e-12);
        assert!(var_of(&[1.0f64], 1).is_none());
    }
}
