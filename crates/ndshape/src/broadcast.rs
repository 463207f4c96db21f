//! Right-aligned broadcasting of batch shapes.
//!
//! Two shapes are aligned on their last axis, the shorter one padded on the
//! left with 1s. Each aligned pair must either agree or contain a 1, which is
//! stretched to the other size.

use crate::error::ArrayError;
use crate::shape::Shape;

/// Broadcast two batch shapes against each other.
///
/// # Errors
///
/// Returns `ArrayError::Broadcast` if an aligned pair differs and neither
/// side is 1.
///
/// # Examples
///
/// ```
/// use ndshape::broadcast_batch_shapes;
///
/// assert_eq!(broadcast_batch_shapes(&[3], &[1]).unwrap(), [3]);
/// assert_eq!(broadcast_batch_shapes(&[2, 1], &[5]).unwrap(), [2, 5]);
/// assert!(broadcast_batch_shapes(&[2], &[3]).is_err());
/// ```
pub fn broadcast_batch_shapes(a: &[usize], b: &[usize]) -> Result<Shape, ArrayError> {
    let ndim = a.len().max(b.len());
    let pad_a = ndim - a.len();
    let pad_b = ndim - b.len();

    (0..ndim)
        .map(|d| {
            let x = if d < pad_a { 1 } else { a[d - pad_a] };
            let y = if d < pad_b { 1 } else { b[d - pad_b] };
            match (x, y) {
                _ if x == y => Ok(x),
                (_, 1) => Ok(x),
                (1, _) => Ok(y),
                _ => Err(ArrayError::Broadcast {
                    lhs: a.to_vec(),
                    rhs: b.to_vec(),
                }),
            }
        })
        .collect()
}

/// Linear batch index into `src` for a position in the broadcast batch.
///
/// `out_index` is a multi-index into the broadcast shape; `src` is one of the
/// operand batch shapes that produced it. Axes missing from `src` (left
/// padding) and axes of size 1 contribute nothing.
pub(crate) fn source_batch_offset(out_index: &[usize], src: &[usize]) -> usize {
    let pad = out_index.len() - src.len();
    out_index[pad..]
        .iter()
        .zip(src.iter())
        .fold(0, |acc, (&i, &dim)| acc * dim + if dim == 1 { 0 } else { i })
}
