use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SamplingError {
    #[error("Cannot sample {requested} element(s) from only {available} candidate(s)")]
    TooManyRequested { requested: usize, available: usize },
}

/// Creates the generator used for sampling.
///
/// A seed gives reproducible runs; without one the generator is seeded from
/// OS entropy.
#[must_use]
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Draws `n` distinct elements from `candidates`, uniformly and without replacement.
///
/// Every subset of size `n` is equally likely, and the returned elements are
/// in random order (not the order of `candidates`).
///
/// # Errors
///
/// Returns [`SamplingError::TooManyRequested`] if `n` exceeds the number of
/// candidates. This check happens before any randomness is consumed.
#[instrument(level = "trace", skip_all, fields(requested = n, available = candidates.len()))]
pub fn sample<T: Copy>(
    candidates: &[T],
    n: usize,
    rng: &mut impl Rng,
) -> Result<Vec<T>, SamplingError> {
    if n > candidates.len() {
        return Err(SamplingError::TooManyRequested {
            requested: n,
            available: candidates.len(),
        });
    }

    Ok(index::sample(rng, candidates.len(), n)
        .into_iter()
        .map(|i| candidates[i])
        .collect())
}
