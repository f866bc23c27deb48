//! Prime-distribution statistics over a computed prime list.
//!
//! Consumers of the sieve output often care less about the list itself than
//! about how the primes are spread: the gaps between consecutive primes and
//! how many primes fall into each fixed-width window below the bound.

use itertools::Itertools;

use crate::error::SieveError;

/// Summary of the gaps between consecutive primes.
#[derive(Debug, Clone, PartialEq)]
pub struct GapStats {
    /// Largest gap observed.
    pub max: u64,
    /// Mean gap.
    pub mean: f64,
    /// Number of gaps (one less than the number of primes).
    pub count: usize,
}

/// Differences between consecutive entries of a prime list.
pub fn prime_gaps(primes: &[u64]) -> Vec<u64> {
    primes.iter().tuple_windows().map(|(a, b)| b - a).collect()
}

/// Gap summary for a prime list, or `None` for fewer than two primes.
pub fn gap_stats(primes: &[u64]) -> Option<GapStats> {
    let gaps = prime_gaps(primes);
    let max = gaps.iter().copied().max()?;
    let total: u64 = gaps.iter().sum();
    Some(GapStats {
        max,
        mean: total as f64 / gaps.len() as f64,
        count: gaps.len(),
    })
}

/// Prime counts per fixed-width window of candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowFrequency {
    /// Window width the counts were taken over.
    pub window: u64,
    /// Primes in each full window: `counts[k]` covers `k*window+1 ..= (k+1)*window`.
    pub counts: Vec<usize>,
    /// Smallest per-window count.
    pub min: usize,
    /// Largest per-window count.
    pub max: usize,
    /// Primes across all full windows.
    pub total: usize,
}

/// Count primes per full window of `window` candidates over `1..=bound`.
///
/// A trailing partial window is not emitted. Primes beyond the last full
/// window are ignored, so `primes` may safely extend past `bound`.
pub fn window_frequency(
    primes: &[u64],
    bound: u64,
    window: u64,
) -> Result<WindowFrequency, SieveError> {
    if window == 0 {
        return Err(SieveError::InvalidWindow);
    }
    let full_windows = (bound / window) as usize;
    let mut counts = vec![0usize; full_windows];
    for &prime in primes {
        let index = ((prime - 1) / window) as usize;
        if index < full_windows {
            counts[index] += 1;
        }
    }
    let min = counts.iter().copied().min().unwrap_or(0);
    let max = counts.iter().copied().max().unwrap_or(0);
    let total = counts.iter().sum();
    Ok(WindowFrequency {
        window,
        counts,
        min,
        max,
        total,
    })
}
