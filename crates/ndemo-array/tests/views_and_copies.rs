//! Integration tests for storage sharing between views and copies.

use ndemo_array::{array, s, Array, ArrayError, ShapeError};

fn sample() -> Array<i64> {
    array![[1i64, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12]]
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

#[test]
fn slice_writes_reach_the_source() {
    let a = sample();
    let mut row = a.slice(&s![0, ..]).unwrap();
    assert!(row.shares_storage(&a));
    row.set(&[0], 99).unwrap();
    assert_eq!(a.get(&[0, 0]).unwrap(), 99);
}

#[test]
fn source_writes_reach_the_view() {
    let mut a = sample();
    let col = a.column(-1).unwrap();
    a.set(&[2, 3], -5).unwrap();
    assert_eq!(col.to_vec(), vec![4, 8, -5]);
}

#[test]
fn views_of_views_share_the_buffer() {
    let a = sample();
    let tail = a.slice(&s![1.., ..]).unwrap();
    let inner = tail.slice(&s![0, 1..3]).unwrap();
    assert!(inner.shares_storage(&a));
    assert_eq!(inner.to_vec(), vec![6, 7]);
    assert_eq!(a.storage_handles(), 3);
    assert_eq!(inner.storage_len(), 12);
}

#[test]
fn fill_through_a_column_view() {
    let a = sample();
    let mut col = a.column(0).unwrap();
    col.fill(0);
    assert_eq!(a.to_vec(), vec![0, 2, 3, 4, 0, 6, 7, 8, 0, 10, 11, 12]);
}

#[test]
fn assign_broadcasts_a_row() {
    let mut a: Array<i64> = Array::zeros(&[2, 3]);
    a.assign(&array![1i64, 2, 3]).unwrap();
    assert_eq!(a, array![[1i64, 2, 3], [1, 2, 3]]);
    assert!(a.assign(&array![1i64, 2]).unwrap_err().is_shape_error());
}

#[test]
fn assign_from_an_aliasing_view() {
    let mut a = array![[1i64, 2], [3, 4]];
    let t = a.transpose();
    a.assign(&t).unwrap();
    assert_eq!(a.to_vec(), vec![1, 3, 2, 4]);
}

#[test]
fn map_inplace_may_read_an_aliasing_view() {
    let mut a = array![1i64, 2, 3];
    let v = a.view();
    a.map_inplace(|x| x + v.get(&[0]).unwrap());
    assert_eq!(a.to_vec(), vec![2, 3, 4]);
    assert_eq!(v.to_vec(), vec![2, 3, 4]);
}

#[test]
fn assign_where_on_a_view_sees_the_source() {
    let a = sample();
    let mut row = a.row(1).unwrap();
    let mask = row.gt(6);
    row.assign_where(&mask, 0).unwrap();
    assert_eq!(a.to_vec(), vec![1, 2, 3, 4, 5, 6, 0, 0, 9, 10, 11, 12]);
}

// ---------------------------------------------------------------------------
// Copies
// ---------------------------------------------------------------------------

#[test]
fn copy_and_view_after_write() {
    let mut original = array![1i64, 2, 3, 4, 5];
    let copy = original.copy();
    let view = original.view();
    original.set(&[0], 999).unwrap();

    assert_eq!(copy.to_vec(), vec![1, 2, 3, 4, 5]);
    assert_eq!(view.to_vec(), vec![999, 2, 3, 4, 5]);
    assert!(!copy.shares_storage(&original));
}

#[test]
fn writes_to_a_copy_stay_local() {
    let a = sample();
    let mut c = a.slice(&s![.., 0]).unwrap().copy();
    c.fill(-1);
    assert_eq!(a.get(&[0, 0]).unwrap(), 1);
    assert!(c.is_contiguous());
    assert_eq!(c.storage_len(), 3);
}

#[test]
fn arithmetic_results_own_their_storage() {
    let a = sample();
    let b = &a * 2;
    assert!(!b.shares_storage(&a));
    let masked = a.masked(&a.gt(6)).unwrap();
    assert!(!masked.shares_storage(&a));
}

// ---------------------------------------------------------------------------
// Reshape and split views
// ---------------------------------------------------------------------------

#[test]
fn reshape_is_a_view() {
    let a: Array<i64> = Array::arange(12);
    let m = a.reshape(&[3, 4]).unwrap();
    assert!(m.shares_storage(&a));
    let mut r = m.ravel().unwrap();
    r.set(&[5], 50).unwrap();
    assert_eq!(a.get(&[5]).unwrap(), 50);
}

#[test]
fn transposed_reshape_fails_instead_of_copying() {
    let t = sample().transpose();
    assert!(!t.is_contiguous());
    let err = t.reshape(&[12]).unwrap_err();
    assert!(matches!(err, ArrayError::Shape(ShapeError::NonContiguous { .. })));

    let flat = t.flatten();
    assert_eq!(flat.to_vec()[..4], [1, 5, 9, 2]);
}

#[test]
fn split_parts_are_views() {
    let a = Array::<i64>::arange(12).reshape(&[3, 4]).unwrap();
    let mut parts = a.hsplit(2).unwrap();
    assert!(parts.iter().all(|p| p.shares_storage(&a)));
    parts[1].set(&[0, 0], 100).unwrap();
    assert_eq!(a.get(&[0, 2]).unwrap(), 100);
}
