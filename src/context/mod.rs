//! Context module for stationary.
//!
//! This module provides the types that sit between a caller and the solvers:
//! a validated system, the method selector, and batch solving.
//!
//! Modules:
//! - [`system_context`]: `LinearSystem` (dimension checks, method dispatch) and `Method`.
//! - [`batch`]: independent solves over a slice of systems.
//!
//! # References
//! - Saad, Y. (2003). Iterative Methods for Sparse Linear Systems. SIAM, ch. 4.

pub mod batch;
pub mod system_context;

pub use batch::solve_batch;
pub use system_context::{LinearSystem, Method};
