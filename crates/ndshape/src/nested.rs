//! Construction from nested sequences.
//!
//! Any nesting of `Vec` and fixed-size arrays with [`Scalar`] leaves can be
//! turned into an [`NdArray`](crate::NdArray), as can the [`Nested`] tree
//! returned by [`NdArray::to_nested`](crate::NdArray::to_nested).
//!
//! Shape inference follows the first element at every depth, then the
//! whole input is checked against that shape so jagged input is rejected
//! before anything is flattened.

use crate::error::ArrayError;
use crate::scalar::Scalar;

/// Dynamically nested sequence of scalars.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<ElT> {
    Scalar(ElT),
    List(Vec<Nested<ElT>>),
}

/// Input accepted by [`NdArray::from_nested`](crate::NdArray::from_nested).
pub trait NestedData<ElT: Scalar> {
    /// Shape obtained by following the first element at every depth.
    fn leading_shape(&self) -> Vec<usize>;

    /// Check that every sibling at every depth matches `shape`.
    fn check_shape(&self, shape: &[usize], depth: usize) -> Result<(), ArrayError>;

    /// Append leaves in row-major order.
    fn flatten_into(&self, out: &mut Vec<ElT>);
}

impl<ElT: Scalar> NestedData<ElT> for ElT {
    fn leading_shape(&self) -> Vec<usize> {
        vec![]
    }

    fn check_shape(&self, shape: &[usize], depth: usize) -> Result<(), ArrayError> {
        if shape.is_empty() {
            Ok(())
        } else {
            Err(ArrayError::JaggedDepth { depth })
        }
    }

    fn flatten_into(&self, out: &mut Vec<ElT>) {
        out.push(*self);
    }
}

fn leading_shape_of<ElT: Scalar, T: NestedData<ElT>>(items: &[T]) -> Vec<usize> {
    let mut shape = vec![items.len()];
    if let Some(first) = items.first() {
        shape.extend(first.leading_shape());
    }
    shape
}

fn check_items<ElT: Scalar, T: NestedData<ElT>>(
    items: &[T],
    shape: &[usize],
    depth: usize,
) -> Result<(), ArrayError> {
    let Some((&len, rest)) = shape.split_first() else {
        return Err(ArrayError::JaggedDepth { depth });
    };
    if items.len() != len {
        return Err(ArrayError::JaggedLength {
            depth,
            expected: len,
            actual: items.len(),
        });
    }
    items
        .iter()
        .try_for_each(|item| item.check_shape(rest, depth + 1))
}

impl<ElT: Scalar, T: NestedData<ElT>> NestedData<ElT> for Vec<T> {
    fn leading_shape(&self) -> Vec<usize> {
        leading_shape_of(self)
    }

    fn check_shape(&self, shape: &[usize], depth: usize) -> Result<(), ArrayError> {
        check_items(self, shape, depth)
    }

    fn flatten_into(&self, out: &mut Vec<ElT>) {
        for item in self {
            item.flatten_into(out);
        }
    }
}

impl<ElT: Scalar, T: NestedData<ElT>, const N: usize> NestedData<ElT> for [T; N] {
    fn leading_shape(&self) -> Vec<usize> {
        leading_shape_of(self)
    }

    fn check_shape(&self, shape: &[usize], depth: usize) -> Result<(), ArrayError> {
        check_items(self, shape, depth)
    }

    fn flatten_into(&self, out: &mut Vec<ElT>) {
        for item in self {
            item.flatten_into(out);
        }
    }
}

impl<ElT: Scalar> NestedData<ElT> for Nested<ElT> {
    fn leading_shape(&self) -> Vec<usize> {
        match self {
            Nested::Scalar(_) => vec![],
            Nested::List(items) => leading_shape_of(items),
        }
    }

    fn check_shape(&self, shape: &[usize], depth: usize) -> Result<(), ArrayError> {
        match self {
            Nested::Scalar(v) => NestedData::<ElT>::check_shape(v, shape, depth),
            Nested::List(items) => check_items(items, shape, depth),
        }
    }

    fn flatten_into(&self, out: &mut Vec<ElT>) {
        match self {
            Nested::Scalar(v) => out.push(*v),
            Nested::List(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }
}

/// Infer the shape of `data` and flatten it.
pub(crate) fn shape_and_flatten<ElT: Scalar, N: NestedData<ElT>>(
    data: &N,
) -> Result<(Vec<usize>, Vec<ElT>), ArrayError> {
    let shape = data.leading_shape();
    data.check_shape(&shape, 0)?;

    let mut flat = Vec::with_capacity(shape.iter().product());
    data.flatten_into(&mut flat);
    Ok((shape, flat))
}
