//! Demo routines. Each writes to any `io::Write` so tests can capture it.

use std::io::Write;

use anyhow::{Context, Result};
use ndshape::{ArrayError, NdArray, Scalar, Shape, matmul_gemm, tensordot_gemm};

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Print full result contents, not only shapes.
    pub values: bool,
    /// Use f64 arrays and the faer kernels.
    pub gemm: bool,
}

pub fn dims<W: Write>(out: &mut W) -> Result<()> {
    let shapes: [&[usize]; 5] = [&[2], &[2, 3], &[2, 3, 4], &[2, 3, 4, 5], &[2, 3, 4, 5, 6]];

    for shape in shapes {
        let a: NdArray<f32> = NdArray::zeros(shape);
        writeln!(
            out,
            "\n{}D array:\n    Dimensions: {}, Shape: {}, Strides: {}",
            a.ndim(),
            a.ndim(),
            a.shape(),
            Shape::from(a.byte_strides())
        )?;
    }
    Ok(())
}

pub fn axis<W: Write>(out: &mut W) -> Result<()> {
    let arrays: [(&str, NdArray<i32>); 3] = [
        ("1D", NdArray::from_nested([10, 20, 30])?),
        ("2D", NdArray::from_nested([[1, 2, 3], [4, 5, 6]])?),
        ("3D", NdArray::from_nested([[[1, 2], [3, 4]], [[5, 6], [7, 8]]])?),
    ];

    let rule = "=".repeat(10);
    for (name, arr) in &arrays {
        writeln!(out, "\n{rule} {name} array, shape={} {rule}", arr.shape())?;
        writeln!(out, "{arr}")?;

        for axis in 0..arr.ndim() {
            writeln!(out, "\n---- Axis {axis} slices ----")?;
            for i in 0..arr.shape()[axis] {
                let slice = arr
                    .take(i, axis)
                    .with_context(|| format!("slicing {name} array at index {i} of axis {axis}"))?;
                writeln!(out, "\nIndex {i}:\n{slice}")?;
            }
        }
    }
    Ok(())
}

fn report<W: Write, ElT: Scalar>(
    out: &mut W,
    label: &str,
    c: &NdArray<ElT>,
    opts: &Options,
) -> Result<()> {
    if opts.values {
        writeln!(out, "{c}")?;
    }
    writeln!(out, "{label}: {}", c.shape())?;
    Ok(())
}

fn matmul_report<W, ElT, F>(
    out: &mut W,
    a: &NdArray<ElT>,
    b: &NdArray<ElT>,
    kernel: F,
    what: &str,
    opts: &Options,
) -> Result<()>
where
    W: Write,
    ElT: Scalar,
    F: Fn(&NdArray<ElT>, &NdArray<ElT>) -> Result<NdArray<ElT>, ArrayError>,
{
    writeln!(out, "Shape_a: {}", a.shape())?;
    writeln!(out, "Shape_b: {}", b.shape())?;
    let c = kernel(a, b).context(what.to_owned())?;
    report(out, "Shape_c", &c, opts)
}

pub fn matmul<W: Write>(out: &mut W, opts: &Options) -> Result<()> {
    if opts.gemm {
        let a: NdArray<f64> = NdArray::arange(&[2, 3, 2, 3]);
        let b: NdArray<f64> = NdArray::arange(&[2, 1, 3, 2]);
        matmul_report(out, &a, &b, matmul_gemm, "faer matmul", opts)
    } else {
        let a: NdArray<i64> = NdArray::arange(&[2, 3, 2, 3]);
        let b: NdArray<i64> = NdArray::arange(&[2, 1, 3, 2]);
        matmul_report(out, &a, &b, ndshape::matmul, "matmul", opts)
    }
}

fn tensordot_report<W, ElT, F>(
    out: &mut W,
    a: &NdArray<ElT>,
    b: &NdArray<ElT>,
    kernel: F,
    what: &str,
    opts: &Options,
) -> Result<()>
where
    W: Write,
    ElT: Scalar,
    F: Fn(&NdArray<ElT>, &NdArray<ElT>, isize) -> Result<NdArray<ElT>, ArrayError>,
{
    writeln!(out, "Shape of matrix A: {}", a.shape())?;
    writeln!(out, "Shape of matrix B: {}", b.shape())?;

    for axes in 0..=2 {
        let c = kernel(a, b, axes).with_context(|| format!("{what} over {axes} axes"))?;
        report(out, &format!("Shape of matrix C (axis {axes})"), &c, opts)?;
    }
    Ok(())
}

pub fn tensordot<W: Write>(out: &mut W, opts: &Options) -> Result<()> {
    if opts.gemm {
        let a: NdArray<f64> = NdArray::arange(&[2, 3, 2, 2]);
        let b: NdArray<f64> = NdArray::from_fn(&[2, 2, 2, 2], |ix| 25.0 + linear(ix) as f64);
        tensordot_report(out, &a, &b, tensordot_gemm, "faer tensordot", opts)
    } else {
        let a: NdArray<i64> = NdArray::arange(&[2, 3, 2, 2]);
        let b: NdArray<i64> = NdArray::from_fn(&[2, 2, 2, 2], |ix| 25 + linear(ix) as i64);
        tensordot_report(out, &a, &b, ndshape::tensordot, "tensordot", opts)
    }
}

/// Row-major position inside a (2, 2, 2, 2) block.
fn linear(ix: &[usize]) -> usize {
    ix.iter().fold(0, |acc, &i| acc * 2 + i)
}

pub fn all<W: Write>(out: &mut W, opts: &Options) -> Result<()> {
    dims(out)?;
    axis(out)?;
    writeln!(out)?;
    matmul(out, opts)?;
    writeln!(out)?;
    tensordot(out, opts)
}
