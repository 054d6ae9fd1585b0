//! Convergence tracking & tolerance checks for stationary solvers.

use crate::core::traits::{InnerProduct, MatVec};

/// Default tolerance on the scaled residual.
pub const DEFAULT_TOL: f64 = 1e-16;
/// Default iteration budget.
pub const DEFAULT_MAX_ITERS: usize = 20_000;

/// Stopping criteria.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Convergence<T> {
    pub tol: T,
    pub max_iters: usize,
}

impl<T: num_traits::Float> Default for Convergence<T> {
    fn default() -> Self {
        Self {
            tol: T::from(DEFAULT_TOL).unwrap_or_else(T::epsilon),
            max_iters: DEFAULT_MAX_ITERS,
        }
    }
}

impl<T: Copy + num_traits::Float> Convergence<T> {
    pub fn new(tol: T, max_iters: usize) -> Self {
        Self { tol, max_iters }
    }

    /// Strict test: a residual equal to `tol` has not converged.
    pub fn is_converged(&self, res: T) -> bool {
        res < self.tol
    }
}

/// Residual of `x` against `A x = b`, scaled by `b_norm`.
///
/// When `b_norm` is zero the absolute residual `‖A x − b‖₂` is returned instead,
/// so a homogeneous system never yields a non-finite residual.
pub fn scaled_residual<M, T>(a: &M, x: &Vec<T>, b: &Vec<T>, b_norm: T) -> T
where
    M: MatVec<Vec<T>>,
    (): InnerProduct<Vec<T>, Scalar = T>,
    T: num_traits::Float,
{
    let mut r = vec![T::zero(); b.len()];
    a.matvec(x, &mut r);
    for (ri, &bi) in r.iter_mut().zip(b) {
        *ri = *ri - bi;
    }
    let ip = ();
    let res = ip.norm(&r);
    if b_norm == T::zero() { res } else { res / b_norm }
}
