//! Helpers shared by the solvers: stopping criteria, dominance test, timing.

pub mod convergence;
pub mod dominance;
pub mod timer;

pub use convergence::Convergence;
pub use dominance::{first_non_dominant_row, is_strictly_diagonally_dominant};
pub use timer::Timer;
