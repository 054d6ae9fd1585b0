//! Forward Gauss-Seidel iteration, Saad §4.1.

use crate::core::traits::{MatShape, MatrixGet};
use crate::solver::StationaryMethod;
use crate::utils::dominance::is_strictly_diagonally_dominant;
use num_traits::Float;

/// Gauss-Seidel sweep:
/// x_i^(k+1) = (b_i − Σ_{j<i} a_ij x_j^(k+1) − Σ_{j>i} a_ij x_j^(k)) / a_ii
///
/// Rows are visited in increasing order and each one reads the entries of
/// `next` already written in the same sweep.
#[derive(Clone, Copy, Debug, Default)]
pub struct GaussSeidel;

impl<M, T> StationaryMethod<M, T> for GaussSeidel
where
    M: MatShape + MatrixGet<T>,
    T: Float,
{
    fn name(&self) -> &'static str {
        "Gauss-Seidel"
    }

    fn check_precondition(&self, a: &M) -> bool {
        is_strictly_diagonally_dominant(a)
    }

    fn sweep(&self, prev: &[T], a: &M, b: &[T], next: &mut [T]) {
        let n = a.nrows();
        for i in 0..n {
            let mut sigma = T::zero();
            for j in 0..i {
                sigma = sigma + a.get(i, j) * next[j];
            }
            for j in (i + 1)..n {
                sigma = sigma + a.get(i, j) * prev[j];
            }
            next[i] = (b[i] - sigma) / a.get(i, i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::DenseMatrix;
    use crate::solver::Jacobi;
    use faer::Mat;

    #[test]
    fn sweep_uses_updated_entries() {
        let a = <Mat<f64> as DenseMatrix<f64>>::from_rows(&[[4.0, 1.0], [2.0, 5.0]]);
        let b = [8.0, 10.0];
        let mut next = [0.0; 2];
        GaussSeidel.sweep(&[0.0, 0.0], &a, &b, &mut next);
        // x0 = 8/4 = 2, then x1 = (10 - 2*2)/5
        assert_eq!(next, [2.0, 6.0 / 5.0]);
    }

    #[test]
    fn first_row_matches_jacobi() {
        let a = <Mat<f64> as DenseMatrix<f64>>::from_rows(&[
            [10.0, -1.0, 2.0],
            [-1.0, 11.0, -1.0],
            [2.0, -1.0, 10.0],
        ]);
        let b = [6.0, 25.0, -11.0];
        let prev = [0.5, 1.5, -0.5];
        let mut gs = [0.0; 3];
        let mut jac = [0.0; 3];
        GaussSeidel.sweep(&prev, &a, &b, &mut gs);
        Jacobi.sweep(&prev, &a, &b, &mut jac);
        assert_eq!(gs[0], jac[0]);
        assert_ne!(gs[1], jac[1]);
    }

    #[test]
    fn fixed_point_is_preserved() {
        let a = <Mat<f64> as DenseMatrix<f64>>::from_rows(&[[4.0, 1.0], [2.0, 5.0]]);
        // exact solution x = [1, 2]
        let b = [6.0, 12.0];
        let x = [1.0, 2.0];
        let mut next = [0.0; 2];
        GaussSeidel.sweep(&x, &a, &b, &mut next);
        assert_eq!(next, x);
    }
}
