//! Dense‐matrix API on top of Faer.
//!
//! This module provides the `DenseMatrix` trait and its implementation for the `faer::Mat<T>` type,
//! enabling construction from raw column-major storage or from a list of rows.

use crate::core::traits::{MatShape, MatVec, MatrixGet};
use faer::Mat;

impl<T: Copy + num_traits::Float> MatrixGet<T> for Mat<T> {
    fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

/// Blanket impl so any Faer Mat<T> is a DenseMatrix.
pub trait DenseMatrix<T>: MatVec<Vec<T>> + MatShape + Sized {
    /// Construct from raw column-major storage.
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Self;

    /// Construct from row slices. Every row must have the length of the first one.
    fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Self;
}

impl<T: Copy + num_traits::Float> DenseMatrix<T> for Mat<T> {
    fn from_raw(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(data.len(), nrows * ncols, "raw storage has incorrect length");
        Mat::from_fn(nrows, ncols, |i, j| data[j * nrows + i])
    }

    fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Self {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.as_ref().len(), ncols, "row {} has incorrect length", i);
        }
        Mat::from_fn(nrows, ncols, |i, j| rows[i].as_ref()[j])
    }
}

impl<T: Copy + num_traits::Float> MatShape for Mat<T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}
