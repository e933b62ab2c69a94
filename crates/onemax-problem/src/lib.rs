//! Fitness evaluation for the interleaved onemax problem.
//!
//! A [`Problem`] is built with a fixed number of *slices*. Each evaluation splits a genome into
//! that many interleaved sub-sequences, scores each one by counting its set genes (onemax), and
//! folds the scores into a single fitness value that rewards the best sub-sequence and uses the
//! others only as tie-breakers.
//!
//! # Modules
//!
//! - [`gene`] - How genome elements are read as set or unset
//! - [`stride`] - Interleaved sub-sequences and the onemax score
//! - [`problem`] - The evaluator, its configuration, and the evaluation breakdown
//!
//! # Example
//!
//! ```
//! use onemax_problem::{make_problem, problem::TraceConfig};
//!
//! let mut problem = make_problem(3)?.with_trace(TraceConfig::silent());
//!
//! let genome = [1, 1, 0, 1, 1, 0, 1, 1, 0];
//! let evaluation = problem.evaluate_detailed(&genome)?;
//! assert_eq!(evaluation.scores, [3, 3, 0]);
//! assert_eq!(problem.calls(), 1);
//! # Ok::<(), onemax_problem::ProblemError>(())
//! ```
//!
//! # Concurrency
//!
//! Evaluation mutates the call counter, so it takes `&mut self`. Use one evaluator per thread
//! or put a shared one behind a lock.

pub use self::{
    problem::{Evaluation, Problem, ProblemConfig, TraceConfig, make_problem},
    stride::onemax,
};

pub mod gene;
pub mod problem;
pub mod stride;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ProblemError {
    #[display("number of slices must be positive")]
    NonPositiveSlices,
    #[display("cannot evaluate an empty genome")]
    EmptyGenome,
}
