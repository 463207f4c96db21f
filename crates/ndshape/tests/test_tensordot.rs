//! Integration tests for tensordot.

use ndshape::{ArrayError, ErrorKind, NdArray, tensordot};

fn operands() -> (NdArray<i64>, NdArray<i64>) {
    let a = NdArray::arange(&[2, 3, 2, 2]);
    let b = NdArray::from_fn(&[2, 2, 2, 2], |ix| {
        25 + (ix[0] * 8 + ix[1] * 4 + ix[2] * 2 + ix[3]) as i64
    });
    (a, b)
}

#[test]
fn test_tensordot_axes_0_1_2() {
    let (a, b) = operands();

    let c0 = tensordot(&a, &b, 0).unwrap();
    assert_eq!(c0.shape(), &[2, 3, 2, 2, 2, 2, 2, 2]);
    assert_eq!(c0.get_linear(0), Some(&25));
    assert_eq!(c0.get_linear(c0.len() - 1), Some(&(24 * 40)));

    let c1 = tensordot(&a, &b, 1).unwrap();
    assert_eq!(c1.shape(), &[2, 3, 2, 2, 2, 2]);
    assert_eq!(c1.get_linear(0), Some(&91));
    assert_eq!(c1.get_linear(c1.len() - 1), Some(&1696));

    let c2 = tensordot(&a, &b, 2).unwrap();
    assert_eq!(c2.shape(), &[2, 3, 2, 2]);
    assert_eq!(c2.take(0, 0).unwrap().take(0, 0).unwrap().data(), &[330, 340, 350, 360]);
    assert_eq!(c2.take(1, 0).unwrap().take(2, 0).unwrap().data(), &[2810, 2900, 2990, 3080]);
}

#[test]
fn test_tensordot_vector_dot_is_scalar() {
    let a = NdArray::<i32>::from_nested([1, 2, 3]).unwrap();
    let b = NdArray::<i32>::from_nested([4, 5, 6]).unwrap();
    let c = tensordot(&a, &b, 1).unwrap();
    assert_eq!(c.ndim(), 0);
    assert_eq!(c.shape(), &[0usize; 0]);
    assert_eq!(c.to_string(), "32");
}

#[test]
fn test_tensordot_matches_matmul_for_matrices() {
    let a: NdArray<i64> = NdArray::arange(&[3, 4]);
    let b: NdArray<i64> = NdArray::arange(&[4, 2]);
    assert_eq!(tensordot(&a, &b, 1).unwrap(), ndshape::matmul(&a, &b).unwrap());
}

#[test]
fn test_tensordot_errors() {
    let (a, b) = operands();

    let err = tensordot(&a, &b, 5).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);

    let err = tensordot(&a, &b, -2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);

    // a.shape[-3:] = (3, 2, 2) vs b.shape[:3] = (2, 2, 2)
    let err = tensordot(&a, &b, 3).unwrap_err();
    assert_eq!(
        err,
        ArrayError::ContractDimMismatch {
            lhs: vec![3, 2, 2],
            rhs: vec![2, 2, 2]
        }
    );
}
