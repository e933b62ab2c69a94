//! Interleaved striding and onemax scoring.
//!
//! A genome of length `L` split with `slices = n` yields `n` sub-sequences. Sub-sequence `s`
//! holds the genes at offsets `s, s + n, s + 2n, …`:
//!
//! ```text
//! genome:  g0 g1 g2 g3 g4 g5 g6     (n = 3)
//! slice 0: g0       g3       g6
//! slice 1:    g1       g4
//! slice 2:       g2       g5
//! ```
//!
//! Sub-sequence lengths sum to `L` and differ by at most one. When `n > L` the trailing
//! sub-sequences are empty and score 0.
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use onemax_problem::stride::{self, onemax};
//!
//! let genome = [1, 0, 1, 1, 0, 1, 1];
//! let slices = NonZeroUsize::new(3).unwrap();
//! let scores = stride::interleave(&genome, slices)
//!     .map(onemax)
//!     .collect::<Vec<_>>();
//! assert_eq!(scores, [3, 0, 2]);
//! ```

use std::{
    iter::{Skip, StepBy},
    num::NonZeroUsize,
    slice,
};

use crate::gene::Gene;

/// One interleaved sub-sequence of a genome.
pub type Stride<'a, G> = StepBy<Skip<slice::Iter<'a, G>>>;

/// Splits `genome` into `slices` interleaved sub-sequences, in offset order.
#[must_use]
pub fn interleave<G>(
    genome: &[G],
    slices: NonZeroUsize,
) -> impl ExactSizeIterator<Item = Stride<'_, G>> {
    let step = slices.get();
    (0..step).map(move |offset| genome.iter().skip(offset).step_by(step))
}

/// Counts the genes that are set.
#[must_use]
pub fn onemax<I>(genes: I) -> usize
where
    I: IntoIterator,
    I::Item: Gene,
{
    genes.into_iter().filter(Gene::is_set).count()
}
