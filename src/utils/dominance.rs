//! Strict diagonal dominance, the convergence precondition shared by Jacobi and Gauss-Seidel.

use crate::core::traits::{MatShape, MatrixGet};
use num_traits::Float;

/// A row that fails the dominance test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DominanceViolation<T> {
    pub row: usize,
    /// `|A[i][i]|`
    pub diag: T,
    /// `Σ_{j≠i} |A[i][j]|`
    pub off_diag: T,
}

/// Returns the first row `i` with `|A[i][i]| <= Σ_{j≠i} |A[i][j]|`, if any.
pub fn first_non_dominant_row<M, T>(a: &M) -> Option<DominanceViolation<T>>
where
    M: MatShape + MatrixGet<T>,
    T: Float,
{
    let n = a.nrows();
    for i in 0..n {
        let diag = a.get(i, i).abs();
        let mut off_diag = T::zero();
        for j in 0..a.ncols() {
            if j != i {
                off_diag = off_diag + a.get(i, j).abs();
            }
        }
        // Written as a negated `>` so NaN entries fail the test.
        if !(diag > off_diag) {
            return Some(DominanceViolation { row: i, diag, off_diag });
        }
    }
    None
}

/// `true` iff every row satisfies `|A[i][i]| > Σ_{j≠i} |A[i][j]|`.
pub fn is_strictly_diagonally_dominant<M, T>(a: &M) -> bool
where
    M: MatShape + MatrixGet<T>,
    T: Float,
{
    first_non_dominant_row(a).is_none()
}
