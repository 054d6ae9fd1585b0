//! stationary: Jacobi and Gauss-Seidel iteration over Faer
//!
//! This crate solves square dense linear systems `A x = b` with stationary
//! iterative methods. A solve checks the method's convergence precondition
//! (strict diagonal dominance), sweeps from the zero vector until the scaled
//! residual falls below the tolerance or the iteration budget runs out, and
//! returns the iterate with its residual, iteration count and timing.

pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod matrix;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use context::*;
pub use self::core::*;
pub use error::*;
pub use matrix::*;
pub use solver::*;
pub use utils::*;
