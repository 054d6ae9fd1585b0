//! Result of a completed solve.

use std::fmt;

/// Immutable snapshot of a finished solve: the final iterate and its diagnostics.
///
/// Reaching the iteration limit is a normal outcome; check [`Solution::converged`]
/// or compare [`Solution::iterations`] against the budget.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<T> {
    x: Vec<T>,
    residual: T,
    elapsed_ms: f64,
    method: &'static str,
    iterations: usize,
    converged: bool,
}

impl<T> Solution<T> {
    pub(crate) fn new(
        x: Vec<T>,
        residual: T,
        elapsed_ms: f64,
        method: &'static str,
        iterations: usize,
        converged: bool,
    ) -> Self {
        Self { x, residual, elapsed_ms, method, iterations, converged }
    }

    /// Final iterate.
    pub fn x(&self) -> &[T] {
        &self.x
    }

    /// Consume the record, keeping only the solution vector.
    pub fn into_x(self) -> Vec<T> {
        self.x
    }

    /// `‖A x − b‖₂ / ‖b‖₂` at termination (absolute when `b = 0`).
    pub fn residual(&self) -> T
    where
        T: Copy,
    {
        self.residual
    }

    /// Wall-clock time of the solve in milliseconds, precondition check included.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    /// Sweeps actually performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn converged(&self) -> bool {
        self.converged
    }
}

impl<T: fmt::Display + fmt::LowerExp> fmt::Display for Solution<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Method: {}", self.method)?;
        writeln!(f, "Iterations: {}", self.iterations)?;
        writeln!(f, "Elapsed time: {:.3} ms", self.elapsed_ms)?;
        writeln!(f, "Residual: {:e}", self.residual)?;
        write!(f, "Solution:")?;
        for xi in &self.x {
            write!(f, " {}", xi)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_every_field() {
        let s = Solution::new(vec![1.0, 2.0, -1.0], 0.0, 0.25, "Jacobi", 42, true);
        let text = s.to_string();
        assert_eq!(
            text,
            "Method: Jacobi\nIterations: 42\nElapsed time: 0.250 ms\nResidual: 0e0\nSolution: 1 2 -1"
        );
    }

    #[test]
    fn display_uses_scientific_residual_and_millisecond_precision() {
        let s = Solution::new(vec![0.5], 6.35223908897721e-17, 0.15901099999999999, "Gauss-Seidel", 13, true);
        let text = s.to_string();
        assert!(text.contains("Residual: 6.35223908897721e-17\n"), "{}", text);
        assert!(text.contains("Elapsed time: 0.159 ms\n"), "{}", text);
    }

    #[test]
    fn into_x_returns_iterate() {
        let s = Solution::new(vec![3.0_f64], 1e-3, 0.0, "Gauss-Seidel", 1, false);
        assert!(!s.converged());
        assert_eq!(s.into_x(), vec![3.0]);
    }
}
