//! Solving many independent systems.
//!
//! Each system gets its own solver and iterate buffers, and each solve's sweeps
//! stay sequential. With the `rayon` feature the systems are spread over rayon's
//! thread pool; without it they are solved one after another. Either way the
//! results come back in input order.

use crate::config::SolveOptions;
use crate::context::system_context::{LinearSystem, Method};
use crate::error::StationaryError;
use crate::solver::Solution;

/// Solve every system with the same method and options.
///
/// A failing system yields its own `Err` without affecting the others.
pub fn solve_batch<T>(
    systems: &[LinearSystem<T>],
    method: Method,
    opts: &SolveOptions,
) -> Vec<Result<Solution<T>, StationaryError>>
where
    T: num_traits::Float + Send + Sync,
{
    #[cfg(feature = "rayon")]
    {
        use rayon::prelude::*;
        systems
            .par_iter()
            .map(|sys| sys.solve_with(method, opts))
            .collect()
    }
    #[cfg(not(feature = "rayon"))]
    {
        systems
            .iter()
            .map(|sys| sys.solve_with(method, opts))
            .collect()
    }
}
