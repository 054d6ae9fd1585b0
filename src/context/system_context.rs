//! Validated linear systems and method selection.
//!
//! `LinearSystem` owns a square coefficient matrix and a matching right-hand
//! side. Dimensions are checked once, at construction, so the solvers can index
//! without re-validating. `Method` is the closed set of stationary methods; a
//! system is solved by naming one and the context builds the matching solver.
//!
//! # Example
//! ```rust
//! use stationary::{LinearSystem, Method, SolveOptions};
//! use stationary::matrix::DenseMatrix;
//! use faer::Mat;
//!
//! let a = <Mat<f64> as DenseMatrix<f64>>::from_rows(&[[4.0, 1.0], [2.0, 5.0]]);
//! let system = LinearSystem::new(a, vec![6.0, 12.0]).unwrap();
//! let sol = system
//!     .solve_with(Method::GaussSeidel, &SolveOptions::default().with_tol(1e-12))
//!     .unwrap();
//! assert!((sol.x()[0] - 1.0).abs() < 1e-10);
//! ```

use std::fmt;
use std::str::FromStr;

use faer::Mat;

use crate::config::SolveOptions;
use crate::error::StationaryError;
use crate::solver::{GaussSeidel, Jacobi, LinearSolver, Solution, StationarySolver};

/// Enum representing the available stationary methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Jacobi: every component updated from the previous iterate
    Jacobi,
    /// Forward Gauss-Seidel: components updated in place, in row order
    GaussSeidel,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Jacobi, Method::GaussSeidel];

    /// Display label, as reported in [`Solution::method`].
    pub fn name(self) -> &'static str {
        match self {
            Method::Jacobi => "Jacobi",
            Method::GaussSeidel => "Gauss-Seidel",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = StationaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jacobi" => Ok(Method::Jacobi),
            "gauss-seidel" | "gauss_seidel" | "gaussseidel" | "gs" => Ok(Method::GaussSeidel),
            _ => Err(StationaryError::InvalidMethod(s.to_string())),
        }
    }
}

/// A square system `A x = b` with matching dimensions.
#[derive(Debug, Clone)]
pub struct LinearSystem<T> {
    a: Mat<T>,
    b: Vec<T>,
}

impl<T> LinearSystem<T>
where
    T: num_traits::Float,
{
    /// Fails with `NotSquare` or `DimensionMismatch` before any solve is attempted.
    pub fn new(a: Mat<T>, b: Vec<T>) -> Result<Self, StationaryError> {
        if a.nrows() != a.ncols() {
            return Err(StationaryError::NotSquare { rows: a.nrows(), cols: a.ncols() });
        }
        if a.nrows() != b.len() {
            return Err(StationaryError::DimensionMismatch { rows: a.nrows(), len: b.len() });
        }
        Ok(Self { a, b })
    }

    pub fn a(&self) -> &Mat<T> {
        &self.a
    }

    pub fn b(&self) -> &[T] {
        &self.b
    }

    pub fn dim(&self) -> usize {
        self.b.len()
    }

    /// Solve with the default stopping criteria (`tol = 1e-16`, `max_iters = 20000`).
    pub fn solve(&self, method: Method) -> Result<Solution<T>, StationaryError> {
        self.solve_with(method, &SolveOptions::default())
    }

    /// Solve with the given method and stopping criteria. Each call starts
    /// from the zero vector with a freshly built solver.
    pub fn solve_with(&self, method: Method, opts: &SolveOptions) -> Result<Solution<T>, StationaryError> {
        match method {
            Method::Jacobi => {
                let mut solver = StationarySolver::with_convergence(Jacobi, (*opts).into());
                solver.solve(&self.a, &self.b)
            }
            Method::GaussSeidel => {
                let mut solver = StationarySolver::with_convergence(GaussSeidel, (*opts).into());
                solver.solve(&self.a, &self.b)
            }
        }
    }
}
