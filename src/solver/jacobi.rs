//! Jacobi iteration, Saad §4.1.

use crate::core::traits::{MatShape, MatrixGet};
use crate::solver::StationaryMethod;
use crate::utils::dominance::is_strictly_diagonally_dominant;
use num_traits::Float;

/// Jacobi sweep: x_i^(k+1) = (b_i − Σ_{j≠i} a_ij x_j^(k)) / a_ii
///
/// Every component is computed from the previous iterate only, so the rows
/// may be visited in any order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Jacobi;

impl<M, T> StationaryMethod<M, T> for Jacobi
where
    M: MatShape + MatrixGet<T>,
    T: Float,
{
    fn name(&self) -> &'static str {
        "Jacobi"
    }

    fn check_precondition(&self, a: &M) -> bool {
        is_strictly_diagonally_dominant(a)
    }

    fn sweep(&self, prev: &[T], a: &M, b: &[T], next: &mut [T]) {
        let n = a.nrows();
        for i in 0..n {
            let mut sigma = T::zero();
            for j in 0..n {
                if j != i {
                    sigma = sigma + a.get(i, j) * prev[j];
                }
            }
            next[i] = (b[i] - sigma) / a.get(i, i);
        }
    }
}
