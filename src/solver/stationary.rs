//! Driver shared by all stationary methods.
//!
//! The loop is method-agnostic. It checks the method's precondition, starts
//! from the zero vector, sweeps until the scaled residual drops below the
//! tolerance or the iteration budget is spent, and returns a [`Solution`].

use log::{debug, info, trace, warn};
use num_traits::ToPrimitive;

use crate::core::traits::{InnerProduct, MatShape, MatVec, MatrixGet};
use crate::error::StationaryError;
use crate::solver::{LinearSolver, Solution, StationaryMethod};
use crate::utils::convergence::{scaled_residual, Convergence};
use crate::utils::dominance::first_non_dominant_row;
use crate::utils::timer::Timer;

pub struct StationarySolver<S, T> {
    pub method: S,
    pub conv: Convergence<T>,
}

impl<S, T: Copy + num_traits::Float> StationarySolver<S, T> {
    pub fn new(method: S, tol: T, max_iters: usize) -> Self {
        Self { method, conv: Convergence { tol, max_iters } }
    }

    pub fn with_convergence(method: S, conv: Convergence<T>) -> Self {
        Self { method, conv }
    }
}

impl<S: Default, T: num_traits::Float> Default for StationarySolver<S, T> {
    fn default() -> Self {
        Self { method: S::default(), conv: Convergence::default() }
    }
}

fn as_f64<T: ToPrimitive>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

impl<S, M, T> LinearSolver<M, Vec<T>> for StationarySolver<S, T>
where
    S: StationaryMethod<M, T>,
    M: MatVec<Vec<T>> + MatShape + MatrixGet<T>,
    (): InnerProduct<Vec<T>, Scalar = T>,
    T: num_traits::Float,
{
    type Error = StationaryError;
    type Scalar = T;

    /// Expects a square `a` with `a.nrows() == b.len()`; see [`crate::LinearSystem`]
    /// for the validated entry point.
    fn solve(&mut self, a: &M, b: &Vec<T>) -> Result<Solution<T>, StationaryError> {
        let timer = Timer::new();
        let method = self.method.name();
        let n = a.nrows();
        debug!(
            "{}: n = {}, tol = {:e}, max_iters = {}",
            method,
            n,
            as_f64(self.conv.tol),
            self.conv.max_iters
        );

        if !self.method.check_precondition(a) {
            if let Some(v) = first_non_dominant_row(a) {
                debug!(
                    "{}: row {} is not strictly dominant (|a_ii| = {:e}, sum |a_ij| = {:e})",
                    method,
                    v.row,
                    as_f64(v.diag),
                    as_f64(v.off_diag)
                );
            }
            return Err(StationaryError::ConvergencePrecondition { method });
        }

        let ip = ();
        let b_norm = ip.norm(b);

        let mut x = vec![T::zero(); n];
        let mut prev = vec![T::zero(); n];
        let mut iterations = 0;
        for i in 0..self.conv.max_iters {
            // x becomes the output buffer; the sweep overwrites every entry.
            std::mem::swap(&mut prev, &mut x);
            self.method.sweep(&prev, a, b, &mut x);
            iterations = i + 1;

            let res = scaled_residual(a, &x, b, b_norm);
            trace!("{}: iter {} residual {:e}", method, iterations, as_f64(res));
            if self.conv.is_converged(res) {
                break;
            }
        }

        let elapsed_ms = timer.stop();

        let residual = scaled_residual(a, &x, b, b_norm);
        let converged = self.conv.is_converged(residual);
        if converged {
            info!(
                "{}: converged in {} iterations (residual {:e}, {:.3} ms)",
                method,
                iterations,
                as_f64(residual),
                elapsed_ms
            );
        } else {
            warn!(
                "{}: stopped after {} iterations without reaching tol {:e} (residual {:e})",
                method,
                iterations,
                as_f64(self.conv.tol),
                as_f64(residual)
            );
        }

        Ok(Solution::new(x, residual, elapsed_ms, method, iterations, converged))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{GaussSeidel, Jacobi};

    // Simple row-major dense matrix type for testing
    #[derive(Clone)]
    struct DenseMat {
        data: Vec<Vec<f64>>,
    }
    impl MatVec<Vec<f64>> for DenseMat {
        fn matvec(&self, x: &Vec<f64>, y: &mut Vec<f64>) {
            for (i, row) in self.data.iter().enumerate() {
                y[i] = row.iter().zip(x.iter()).map(|(a, b)| a * b).sum();
            }
        }
    }
    impl MatShape for DenseMat {
        fn nrows(&self) -> usize {
            self.data.len()
        }
        fn ncols(&self) -> usize {
            self.data.first().map_or(0, |r| r.len())
        }
    }
    impl MatrixGet<f64> for DenseMat {
        fn get(&self, i: usize, j: usize) -> f64 {
            self.data[i][j]
        }
    }

    fn example() -> (DenseMat, Vec<f64>) {
        let a = DenseMat {
            data: vec![
                vec![10.0, -1.0, 2.0],
                vec![-1.0, 11.0, -1.0],
                vec![2.0, -1.0, 10.0],
            ],
        };
        (a, vec![6.0, 25.0, -11.0])
    }

    #[test]
    fn jacobi_solves_dominant_system() {
        let (a, b) = example();
        let mut solver = StationarySolver::new(Jacobi, 1e-10, 1000);
        let sol = solver.solve(&a, &b).unwrap();
        assert!(sol.converged(), "Jacobi did not converge");
        assert!(sol.residual() < 1e-10);
        // exact solution [217/208, 59/26, -225/208]
        for (xi, ei) in sol.x().iter().zip([217.0 / 208.0, 59.0 / 26.0, -225.0 / 208.0]) {
            assert!((xi - ei).abs() < 1e-8, "xi = {}, expected = {}", xi, ei);
        }
        assert_eq!(sol.method(), "Jacobi");
    }

    #[test]
    fn gauss_seidel_needs_fewer_sweeps() {
        let (a, b) = example();
        let jac = StationarySolver::new(Jacobi, 1e-10, 1000).solve(&a, &b).unwrap();
        let gs = StationarySolver::new(GaussSeidel, 1e-10, 1000).solve(&a, &b).unwrap();
        assert!(gs.converged());
        assert!(gs.iterations() <= jac.iterations(), "gs = {}, jacobi = {}", gs.iterations(), jac.iterations());
    }

    #[test]
    fn non_dominant_matrix_is_rejected() {
        let a = DenseMat { data: vec![vec![1.0, 2.0], vec![3.0, 1.0]] };
        let b = vec![1.0, 1.0];
        let err = StationarySolver::new(GaussSeidel, 1e-10, 10).solve(&a, &b).unwrap_err();
        assert_eq!(err, StationaryError::ConvergencePrecondition { method: "Gauss-Seidel" });
    }

    #[test]
    fn exhausted_budget_reports_max_iters() {
        let (a, b) = example();
        let sol = StationarySolver::new(Jacobi, 0.0, 3).solve(&a, &b).unwrap();
        assert_eq!(sol.iterations(), 3);
        assert!(!sol.converged());
    }

    #[test]
    fn zero_budget_keeps_zero_iterate() {
        let (a, b) = example();
        let sol = StationarySolver::new(Jacobi, 1e-10, 0).solve(&a, &b).unwrap();
        assert_eq!(sol.iterations(), 0);
        assert_eq!(sol.x(), &[0.0, 0.0, 0.0]);
        assert_eq!(sol.residual(), 1.0);
        assert!(!sol.converged());
    }

    #[test]
    fn zero_rhs_converges_in_one_sweep() {
        let (a, _) = example();
        let b = vec![0.0; 3];
        let sol = StationarySolver::new(GaussSeidel, 1e-12, 100).solve(&a, &b).unwrap();
        assert_eq!(sol.iterations(), 1);
        assert_eq!(sol.residual(), 0.0);
        assert!(sol.converged());
    }
}
