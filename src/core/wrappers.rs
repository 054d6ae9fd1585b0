//! Wrappers for faer dense matrix types and vector operations.
//!
//! This module provides implementations of the core linear algebra traits for `faer::Mat`, `faer::MatRef`,
//! and `Vec<T>`, so the stationary solvers can run generically over them.
//!
//! Reductions are always evaluated left to right. A solve repeated on the same inputs
//! therefore reproduces its residuals bit for bit, which the iteration count depends on.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)
//! - [num-traits crate documentation](https://docs.rs/num-traits)

use crate::core::traits::{InnerProduct, MatVec};
use faer::{Mat, MatRef};
use num_traits::Float;

/// Implements matrix-vector multiplication for `faer::Mat`.
///
/// Computes `y = A * x` where `A` is a dense matrix, `x` and `y` are vectors.
impl<T: Float> MatVec<Vec<T>> for Mat<T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        self.as_ref().matvec(x, y)
    }
}

/// Implements matrix-vector multiplication for a matrix reference (`faer::MatRef`).
impl<'a, T: Float> MatVec<Vec<T>> for MatRef<'a, T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.nrows(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.ncols(), x.len(), "Input vector x has incorrect length");
        for i in 0..self.nrows() {
            y[i] = T::zero();
            for j in 0..self.ncols() {
                y[i] = y[i] + self[(i, j)] * x[j];
            }
        }
    }
}

/// Implements the Euclidean norm for vectors.
impl<T: Float> InnerProduct<Vec<T>> for () {
    type Scalar = T;
    /// Computes the Euclidean norm of a vector: `||x||_2`.
    fn norm(&self, x: &Vec<T>) -> T {
        x.iter()
            .map(|xi| *xi * *xi)
            .fold(T::zero(), |acc, v| acc + v)
            .sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mat_and_matref_agree() {
        let a = Mat::from_fn(2, 3, |i, j| (i * 3 + j) as f64);
        let x = vec![1.0, -1.0, 2.0];
        let mut y_owned = vec![0.0; 2];
        let mut y_ref = vec![0.0; 2];
        a.matvec(&x, &mut y_owned);
        a.as_ref().matvec(&x, &mut y_ref);
        assert_eq!(y_owned, vec![3.0, 9.0]);
        assert_eq!(y_owned, y_ref);
    }

    #[test]
    #[should_panic(expected = "Input vector x has incorrect length")]
    fn matvec_rejects_short_input() {
        let a = Mat::<f64>::zeros(2, 2);
        let mut y = vec![0.0; 2];
        a.matvec(&vec![1.0], &mut y);
    }

    #[test]
    fn norm_in_single_and_double_precision() {
        let ip = ();
        assert_eq!(ip.norm(&vec![3.0_f64, 4.0]), 5.0);
        assert_eq!(ip.norm(&vec![3.0_f32, -4.0]), 5.0);
    }

    #[test]
    fn norm_of_empty_vector_is_zero() {
        let ip = ();
        let x: Vec<f64> = Vec::new();
        assert_eq!(ip.norm(&x), 0.0);
    }
}
