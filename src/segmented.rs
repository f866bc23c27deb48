//! Index-segmented parallel sieve: contiguous flag ranges per worker.
//!
//! The alternative partitioning to [`crate::parallel`]: instead of giving each
//! worker a stripe of divisors and sharing the whole flag array for writes,
//! the array itself is split into contiguous candidate ranges and each worker
//! marks composites only inside its own range. No slot is ever written by two
//! workers, so the flags stay plain `bool`s, at the cost of every worker
//! walking all divisors up to √n instead of only its own stripe.

use log::debug;
use rayon::prelude::*;

use crate::config::SieveConfig;
use crate::error::SieveError;

/// Primes in `1..=n`, computed over a fresh rayon pool of `cfg.threads`
/// workers, each owning a contiguous range of the flag array.
///
/// Output is identical to [`crate::parallel::parallel_primes`] and
/// [`crate::decompose::sequential_primes`] for the same bound.
pub fn parallel_primes_segmented(n: u64, cfg: &SieveConfig) -> Result<Vec<u64>, SieveError> {
    if cfg.threads == 0 {
        return Err(SieveError::InvalidWorkerCount);
    }
    if n == 0 {
        return Err(SieveError::InvalidBound);
    }
    debug!("segmented sieve to {n} across {} workers", cfg.threads);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(cfg.threads)
        .thread_name(|i| format!("sieve-segment-{i}"))
        .build()?;

    let mut flags = vec![true; n as usize];
    let segment_len = (n as usize).div_ceil(cfg.threads).max(1);
    pool.install(|| {
        flags
            .par_chunks_mut(segment_len)
            .enumerate()
            .for_each(|(index, segment)| {
                mark_segment(segment, (index * segment_len) as u64, n);
            });
    });

    // Slot 0 (candidate 1) survives marking but is not a prime.
    let count = flags.iter().skip(1).filter(|&&alive| alive).count();
    let mut primes = Vec::with_capacity(count);
    for (index, &alive) in flags.iter().enumerate().skip(1) {
        if alive {
            primes.push(index as u64 + 1);
        }
    }
    Ok(primes)
}

/// Mark composites inside one contiguous candidate range `base+1 ..= base+len`.
///
/// Walks every divisor up to √n and strikes the strict multiples that land in
/// this segment, starting each divisor at its first strict multiple at or
/// above the segment's low edge.
fn mark_segment(segment: &mut [bool], base: u64, n: u64) {
    let lo = base + 1;
    let hi = base + segment.len() as u64;
    for d in 2..=n.isqrt() {
        let mut multiple = lo.div_ceil(d).max(2) * d;
        while multiple <= hi {
            segment[(multiple - lo) as usize] = false;
            multiple += d;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose::sequential_primes;

    #[test]
    fn zero_bound_is_a_usage_error() {
        let cfg = SieveConfig::default();
        assert!(matches!(
            parallel_primes_segmented(0, &cfg),
            Err(SieveError::InvalidBound)
        ));
    }

    #[test]
    fn zero_workers_is_a_usage_error() {
        let cfg = SieveConfig::with_threads(0);
        assert!(matches!(
            parallel_primes_segmented(10, &cfg),
            Err(SieveError::InvalidWorkerCount)
        ));
    }

    #[test]
    fn degenerate_bounds() {
        let cfg = SieveConfig::default();
        assert!(parallel_primes_segmented(1, &cfg).unwrap().is_empty());
        assert_eq!(parallel_primes_segmented(2, &cfg).unwrap(), vec![2]);
        assert_eq!(parallel_primes_segmented(3, &cfg).unwrap(), vec![2, 3]);
    }

    #[test]
    fn segment_boundaries_do_not_leak_composites() {
        // Bounds chosen so segment edges fall on composites and on primes.
        for n in [30, 31, 49, 50, 121, 1000] {
            let expected = sequential_primes(n);
            for threads in [1, 2, 3, 7, 8] {
                let cfg = SieveConfig::with_threads(threads);
                assert_eq!(
                    parallel_primes_segmented(n, &cfg).unwrap(),
                    expected,
                    "mismatch at n={n}, {threads} workers"
                );
            }
        }
    }

    #[test]
    fn more_workers_than_candidates() {
        let cfg = SieveConfig::with_threads(32);
        assert_eq!(parallel_primes_segmented(5, &cfg).unwrap(), vec![2, 3, 5]);
    }
}
