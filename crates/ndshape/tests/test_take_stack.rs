//! Integration tests for axis slicing and restacking.

use ndshape::{ErrorKind, NdArray, stack, take};

fn split_and_restack(a: &NdArray<i32>) {
    for axis in 0..a.ndim() {
        let parts: Vec<NdArray<i32>> = (0..a.shape()[axis])
            .map(|i| take(a, i, axis).unwrap())
            .collect();
        for part in &parts {
            assert_eq!(part.ndim(), a.ndim() - 1);
        }
        assert_eq!(&stack(&parts, axis).unwrap(), a);
    }
}

#[test]
fn test_axis_slices_1d_2d_3d() {
    let a1 = NdArray::<i32>::from_nested([10, 20, 30]).unwrap();
    let a2 = NdArray::<i32>::from_nested([[1, 2, 3], [4, 5, 6]]).unwrap();
    let a3 = NdArray::<i32>::from_nested([[[1, 2], [3, 4]], [[5, 6], [7, 8]]]).unwrap();

    assert_eq!(a1.take(2, 0).unwrap().to_string(), "30");
    assert_eq!(a2.take(1, 1).unwrap().to_string(), "[2, 5]");
    assert_eq!(a3.take(0, 2).unwrap().to_string(), "[[1, 3], [5, 7]]");
    assert_eq!(a3.take(1, 1).unwrap().to_string(), "[[3, 4], [7, 8]]");

    split_and_restack(&a1);
    split_and_restack(&a2);
    split_and_restack(&a3);
}

#[test]
fn test_restack_larger() {
    split_and_restack(&NdArray::arange(&[3, 1, 4, 2]));
}

#[test]
fn test_take_errors_are_index_errors() {
    let a: NdArray<i32> = NdArray::arange(&[2, 3]);
    assert_eq!(a.take(0, 5).unwrap_err().kind(), ErrorKind::Index);
    assert_eq!(a.take(2, 0).unwrap_err().kind(), ErrorKind::Index);
}
