//! The interleaved onemax problem: scoring genomes and counting evaluations.
//!
//! # Fitness
//!
//! For a genome of length `L` evaluated with `n` slices:
//!
//! 1. Split the genome into `n` interleaved sub-sequences (see [`stride`](crate::stride)).
//! 2. Score each sub-sequence with [`onemax`].
//! 3. Sort the scores in descending order: `f₀ ≥ f₁ ≥ … ≥ fₙ₋₁`.
//! 4. Discount every score after the best one by a decaying weight:
//!
//! ```text
//! val     = f₀ − (f₁·0.1 + f₂·0.01 + … + fₙ₋₁·0.1ⁿ⁻¹)
//! fitness = val / L × n
//! ```
//!
//! The best sub-sequence dominates. The others only break ties, since their weights sum to
//! less than 1/9 of a single unit.
//!
//! The normalization divides by the genome length and then multiplies by `n`. This is not the
//! same as dividing by the per-slice length when `n` does not divide `L`.
//!
//! # Tracing
//!
//! Every evaluation emits one line through the [`log`] facade:
//!
//! ```text
//! val=3.6 fitnesses=[4, 4] fitness=0.9
//! ```
//!
//! The level is taken from the evaluator's [`TraceConfig`] (`Debug` unless configured
//! otherwise). The library never installs a logger.
//!
//! The line is meant for humans and its format may change. Read [`Evaluation`] fields when a
//! program needs the values.
//!
//! # Usage
//!
//! ```
//! use onemax_problem::make_problem;
//!
//! let mut problem = make_problem(2)?;
//! let fitness = problem.evaluate(&[true; 8])?;
//! assert!((fitness - 0.9).abs() < 1e-12);
//! assert_eq!(problem.calls(), 1);
//! # Ok::<(), onemax_problem::ProblemError>(())
//! ```

use std::{fmt, num::NonZeroUsize};

use serde::{Deserialize, Serialize};

use crate::{
    ProblemError,
    gene::Gene,
    stride::{self, onemax},
};

/// Weight ratio between consecutive secondary scores.
const PENALTY_DECAY: f64 = 0.1;

/// Where the per-evaluation trace line goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Log level of the trace line, or `None` to skip it.
    pub level: Option<log::Level>,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self::at(log::Level::Debug)
    }
}

impl TraceConfig {
    /// Traces at the given level.
    #[must_use]
    pub const fn at(level: log::Level) -> Self {
        Self { level: Some(level) }
    }

    /// Emits no trace line.
    #[must_use]
    pub const fn silent() -> Self {
        Self { level: None }
    }
}

/// Serializable description of a [`Problem`].
///
/// ```
/// use onemax_problem::problem::{Problem, ProblemConfig, TraceConfig};
///
/// let config = ProblemConfig {
///     slices: 4,
///     trace: TraceConfig::silent(),
/// };
/// let problem = Problem::from_config(&config)?;
/// assert_eq!(problem.config(), config);
/// # Ok::<(), onemax_problem::ProblemError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemConfig {
    /// Number of interleaved sub-sequences to extract.
    pub slices: usize,
    #[serde(default)]
    pub trace: TraceConfig,
}

/// Breakdown of a single evaluation.
///
/// Displays as the trace line: `val=… fitnesses=[…] fitness=…`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Best score minus the discounted secondary scores.
    pub val: f64,
    /// Onemax score of every sub-sequence, in descending order.
    pub scores: Vec<usize>,
    /// `val` normalized by genome length and slice count.
    pub fitness: f64,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "val={:?} fitnesses={:?} fitness={:?}",
            self.val, self.scores, self.fitness
        )
    }
}

/// Fitness evaluator for a fixed number of interleaved slices.
///
/// The slice count is fixed at construction. The call counter starts at zero and grows by one
/// for every evaluation that completes. Evaluation takes `&mut self`, so concurrent callers
/// must either own separate instances or share one behind a lock.
#[derive(Debug, Clone)]
pub struct Problem {
    slices: NonZeroUsize,
    calls: u64,
    trace: TraceConfig,
}

/// Creates a [`Problem`] that splits genomes into `slices` interleaved sub-sequences.
///
/// Fails with [`ProblemError::NonPositiveSlices`] if `slices` is zero.
pub fn make_problem(slices: usize) -> Result<Problem, ProblemError> {
    Problem::new(slices)
}

impl Problem {
    /// Creates a problem with the default trace configuration.
    pub fn new(slices: usize) -> Result<Self, ProblemError> {
        let slices = NonZeroUsize::new(slices).ok_or(ProblemError::NonPositiveSlices)?;
        Ok(Self {
            slices,
            calls: 0,
            trace: TraceConfig::default(),
        })
    }

    /// Creates a problem from a deserialized configuration.
    pub fn from_config(config: &ProblemConfig) -> Result<Self, ProblemError> {
        Ok(Self::new(config.slices)?.with_trace(config.trace))
    }

    /// Replaces the trace configuration.
    #[must_use]
    pub fn with_trace(mut self, trace: TraceConfig) -> Self {
        self.trace = trace;
        self
    }

    #[must_use]
    pub fn slices(&self) -> usize {
        self.slices.get()
    }

    /// Number of completed evaluations since construction.
    #[must_use]
    pub fn calls(&self) -> u64 {
        self.calls
    }

    #[must_use]
    pub fn trace(&self) -> TraceConfig {
        self.trace
    }

    #[must_use]
    pub fn config(&self) -> ProblemConfig {
        ProblemConfig {
            slices: self.slices(),
            trace: self.trace,
        }
    }

    /// Evaluates `genome` and returns its fitness.
    ///
    /// Fails with [`ProblemError::EmptyGenome`] if `genome` is empty; failed evaluations are
    /// not counted.
    pub fn evaluate<G>(&mut self, genome: &[G]) -> Result<f64, ProblemError>
    where
        G: Gene,
    {
        self.evaluate_detailed(genome).map(|e| e.fitness)
    }

    /// Evaluates `genome` and returns the full breakdown.
    ///
    /// Counts as a call and emits the trace line, exactly like [`Problem::evaluate`].
    #[expect(clippy::cast_precision_loss)]
    pub fn evaluate_detailed<G>(&mut self, genome: &[G]) -> Result<Evaluation, ProblemError>
    where
        G: Gene,
    {
        if genome.is_empty() {
            return Err(ProblemError::EmptyGenome);
        }

        let mut scores = stride::interleave(genome, self.slices)
            .map(onemax)
            .collect::<Vec<_>>();
        scores.sort_unstable_by(|a, b| b.cmp(a));

        let val = discounted_score(&scores);
        let fitness = val / genome.len() as f64 * self.slices.get() as f64;

        self.calls += 1;

        let evaluation = Evaluation {
            val,
            scores,
            fitness,
        };
        if let Some(level) = self.trace.level {
            log::log!(level, "{evaluation}");
        }
        Ok(evaluation)
    }
}

/// Best score minus the remaining scores weighted by `0.1, 0.01, …`.
///
/// `sorted_scores` must be in descending order.
#[expect(clippy::cast_precision_loss)]
fn discounted_score(sorted_scores: &[usize]) -> f64 {
    debug_assert!(sorted_scores.is_sorted_by(|a, b| a >= b));
    let Some((&best, rest)) = sorted_scores.split_first() else {
        return 0.0;
    };
    let penalty = rest
        .iter()
        .enumerate()
        .map(|(k, &f)| f as f64 * PENALTY_DECAY.powf((k + 1) as f64))
        .sum::<f64>();
    best as f64 - penalty
}
