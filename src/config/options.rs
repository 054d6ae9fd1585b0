//! Command-line or API options for stationary solves.
//!
//! This module provides the `SolveOptions` struct, which carries the stopping
//! criteria for a solve: the tolerance on the scaled residual and the maximum
//! number of sweeps. The defaults (`1e-16`, `20000`) are strict enough that
//! hitting the iteration limit is the usual way a solve ends; pass a looser
//! tolerance when an early exit is wanted.

use crate::utils::convergence::{Convergence, DEFAULT_MAX_ITERS, DEFAULT_TOL};

/// Stopping criteria for a solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveOptions {
    /// Tolerance on ‖Ax − b‖ / ‖b‖ (strict `<`)
    pub tol: f64,

    /// Maximum number of sweeps
    pub max_iters: usize,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self { tol: DEFAULT_TOL, max_iters: DEFAULT_MAX_ITERS }
    }
}

impl SolveOptions {
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }
}

/// The tolerance is cast to the solver's scalar type; a value too large for it
/// saturates to the type's maximum.
impl<T: num_traits::Float> From<SolveOptions> for Convergence<T> {
    fn from(opts: SolveOptions) -> Self {
        Convergence {
            tol: T::from(opts.tol).unwrap_or_else(T::max_value),
            max_iters: opts.max_iters,
        }
    }
}
