//! Stationary solver interfaces.

use crate::core::traits::{MatShape, MatrixGet};

/// Common interface for any linear solver.
pub trait LinearSolver<M, V> {
    type Error;
    type Scalar: Copy + PartialOrd;
    /// Solve A·x = b from a zero initial guess.
    /// Returns the final iterate together with its diagnostics.
    fn solve(&mut self, a: &M, b: &V) -> Result<Solution<Self::Scalar>, Self::Error>;
}

/// A fixed-point update `x_{k+1} = f(x_k)` together with the precondition
/// under which it is allowed to run.
pub trait StationaryMethod<M, T>
where
    M: MatShape + MatrixGet<T>,
{
    /// Label reported in results and errors.
    fn name(&self) -> &'static str;

    /// Whether `a` satisfies the structural condition required before any sweep.
    fn check_precondition(&self, a: &M) -> bool;

    /// One sweep: compute all `n` entries of `next` from `prev`.
    ///
    /// Assumes the precondition holds; diagonal entries are divided by unguarded.
    fn sweep(&self, prev: &[T], a: &M, b: &[T], next: &mut [T]);
}

pub mod solution;
pub use solution::Solution;

pub mod jacobi;
pub use jacobi::Jacobi;

pub mod gauss_seidel;
pub use gauss_seidel::GaussSeidel;

pub mod stationary;
pub use stationary::StationarySolver;
