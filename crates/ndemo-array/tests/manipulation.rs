//! Integration tests for reshape, stacking and splitting.

use ndemo_array::{array, Array, ArrayError, ShapeError};

// ---------------------------------------------------------------------------
// Reshape and flatten
// ---------------------------------------------------------------------------

#[test]
fn reshape_then_flatten_round_trip() {
    let a = array![[1i64, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12]];
    let flat = a.flatten();
    assert_eq!(flat.shape(), &[12]);
    assert_eq!(flat.reshape(&[3, 4]).unwrap(), a);
    assert!(!flat.shares_storage(&a));
}

#[test]
fn reshape_to_wrong_size_fails() {
    let a: Array<i64> = Array::arange(12);
    let err = a.reshape(&[4, 4]).unwrap_err();
    assert!(matches!(err, ArrayError::Shape(ShapeError::Reshape { .. })));
    assert_eq!(
        err.to_string(),
        "shape error: cannot reshape array of shape [12] into shape [4, 4]"
    );
}

#[test]
fn reshape_of_contiguous_slice() {
    let a: Array<i64> = Array::arange(12).reshape(&[3, 4]).unwrap();
    let tail = a.row(2).unwrap().reshape(&[2, 2]).unwrap();
    assert_eq!(tail.to_vec(), vec![8, 9, 10, 11]);
    assert!(tail.shares_storage(&a));
}

#[test]
fn transpose_swaps_axes() {
    let a = array![[1i64, 2, 3], [4, 5, 6]];
    let t = a.transpose();
    assert_eq!(t.shape(), &[3, 2]);
    assert_eq!(t.get(&[2, 1]).unwrap(), 6);
    assert_eq!(t.transpose(), a);
}

// ---------------------------------------------------------------------------
// Stacking
// ---------------------------------------------------------------------------

#[test]
fn hstack_and_vstack_square_blocks() {
    let a = array![[1i64, 2], [3, 4]];
    let b = array![[5i64, 6], [7, 8]];

    let h = Array::hstack(&[&a, &b]).unwrap();
    assert_eq!(h, array![[1i64, 2, 5, 6], [3, 4, 7, 8]]);

    let v = Array::vstack(&[&a, &b]).unwrap();
    assert_eq!(v.shape(), &[4, 2]);
    assert_eq!(v.to_vec(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn vstack_takes_vectors_as_rows() {
    let v = Array::vstack(&[&array![1i64, 2], &array![3i64, 4]]).unwrap();
    assert_eq!(v, array![[1i64, 2], [3, 4]]);
}

#[test]
fn hstack_of_vectors_concatenates() {
    let h = Array::hstack(&[&array![1i64, 2], &array![3i64]]).unwrap();
    assert_eq!(h.to_vec(), vec![1, 2, 3]);
}

#[test]
fn concatenate_checks_other_dimensions() {
    let a = array![[1i64, 2], [3, 4]];
    let b = array![[5i64, 6, 7]];
    assert!(matches!(
        Array::concatenate(&[&a, &b], 0),
        Err(ArrayError::Shape(ShapeError::Concat { axis: 0, .. }))
    ));
    let joined = Array::concatenate(&[&a, &b.transpose().reshape(&[1, 3]).unwrap()], 1);
    assert!(joined.unwrap_err().is_shape_error());
}

#[test]
fn concatenate_nothing_fails() {
    let none: [&Array<i64>; 0] = [];
    assert!(matches!(
        Array::concatenate(&none, 0),
        Err(ArrayError::Shape(ShapeError::NoArrays))
    ));
}

#[test]
fn stacking_copies() {
    let a = array![[1i64, 2], [3, 4]];
    let mut v = Array::vstack(&[&a, &a]).unwrap();
    v.fill(0);
    assert_eq!(a.sum(), 10);
}

// ---------------------------------------------------------------------------
// Splitting
// ---------------------------------------------------------------------------

#[test]
fn hsplit_and_reassemble() {
    let a: Array<i64> = Array::arange(12).reshape(&[3, 4]).unwrap();
    let parts = a.hsplit(2).unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0], array![[0i64, 1], [4, 5], [8, 9]]);

    let refs: Vec<&Array<i64>> = parts.iter().collect();
    assert_eq!(Array::hstack(&refs).unwrap(), a);
}

#[test]
fn vsplit_rows() {
    let a: Array<i64> = Array::arange(12).reshape(&[3, 4]).unwrap();
    let parts = a.vsplit(3).unwrap();
    assert_eq!(parts[2].to_vec(), vec![8, 9, 10, 11]);
    assert_eq!(parts[2].shape(), &[1, 4]);
}

#[test]
fn unequal_split_fails() {
    let a: Array<i64> = Array::arange(12).reshape(&[3, 4]).unwrap();
    assert!(matches!(
        a.hsplit(3),
        Err(ArrayError::Shape(ShapeError::Split { len: 4, sections: 3 }))
    ));
    assert!(a.split(0, 0).unwrap_err().is_shape_error());
    assert!(a.split(2, 1).unwrap_err().is_index_error());
}
