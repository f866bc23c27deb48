//! Striped parallel sieve: a fixed pool of workers sharing one flag array.
//!
//! The bound's candidates are represented as one flag array shared by every
//! worker. Each worker owns a disjoint, interleaved stripe of divisors and
//! strikes their multiples; no two workers ever walk the same divisor. Two
//! workers may still strike the same slot (12 is a multiple of both 2 and 3),
//! which is harmless because every store writes the same value. Workers never
//! read the array; the only read pass runs in the coordinator after all
//! workers have been joined. If a worker ever needs to read shared flags,
//! that argument no longer holds and real synchronization must be added.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use log::debug;

use crate::config::SieveConfig;
use crate::error::SieveError;

/// One flag per candidate: slot `i` covers `i + 1` and starts out true,
/// meaning "not yet shown composite".
struct FlagArray {
    slots: Box<[AtomicBool]>,
}

impl FlagArray {
    fn all_true(n: u64) -> Self {
        Self {
            slots: (0..n).map(|_| AtomicBool::new(true)).collect(),
        }
    }

    /// Mark a candidate composite. Concurrent callers may hit the same slot;
    /// every store writes `false`, so the outcome is independent of order and
    /// `Relaxed` is enough.
    fn strike(&self, candidate: u64) {
        self.slots[candidate as usize - 1].store(false, Ordering::Relaxed);
    }

    /// Compact the surviving flags into a prime list. Candidate 1 is never
    /// struck but is not a prime, so slot 0 is skipped. Must only run after
    /// every writer has been joined: the join is the happens-before edge that
    /// makes `Relaxed` loads observe all stores.
    fn collect_primes(&self) -> Vec<u64> {
        let count = self
            .slots
            .iter()
            .skip(1)
            .filter(|slot| slot.load(Ordering::Relaxed))
            .count();
        let mut primes = Vec::with_capacity(count);
        for (index, slot) in self.slots.iter().enumerate().skip(1) {
            if slot.load(Ordering::Relaxed) {
                primes.push(index as u64 + 1);
            }
        }
        primes
    }
}

/// Strike every strict multiple of every divisor owned by `rank`.
///
/// Rank `r` owns divisors `r+2, r+2+stripe, r+2+2*stripe, ...` up to √n;
/// across all ranks that covers every divisor from 2 upward exactly once.
/// Every owned divisor strikes all of its strict multiples, with no early
/// exit of any kind.
fn strike_stripe(flags: &FlagArray, rank: usize, stripe: usize, n: u64) {
    let limit = n.isqrt();
    let mut d = rank as u64 + 2;
    while d <= limit {
        let mut multiple = 2 * d;
        while multiple <= n {
            flags.strike(multiple);
            multiple += d;
        }
        d += stripe as u64;
    }
}

/// Primes in `1..=n`, computed by `cfg.threads` workers striking composites
/// into one shared flag array.
///
/// Equivalent in content to [`crate::decompose::sequential_primes`] for the
/// same bound, for any worker count. A worker that cannot be spawned or that
/// panics fails the whole call: its stripe of composites would otherwise stay
/// unmarked and the returned list would be silently wrong.
pub fn parallel_primes(n: u64, cfg: &SieveConfig) -> Result<Vec<u64>, SieveError> {
    if cfg.threads == 0 {
        return Err(SieveError::InvalidWorkerCount);
    }
    if n == 0 {
        return Err(SieveError::InvalidBound);
    }
    debug!("striped sieve to {n} across {} workers", cfg.threads);

    let flags = FlagArray::all_true(n);
    let mut failure: Option<SieveError> = None;
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(cfg.threads);
        for rank in 0..cfg.threads {
            let flags = &flags;
            let spawned = thread::Builder::new()
                .name(format!("sieve-worker-{rank}"))
                .spawn_scoped(scope, move || strike_stripe(flags, rank, cfg.threads, n));
            match spawned {
                Ok(handle) => handles.push((rank, handle)),
                Err(source) => {
                    failure.get_or_insert(SieveError::WorkerSpawn { rank, source });
                }
            }
        }
        // Full barrier: the reduction below must never overlap marking.
        for (rank, handle) in handles {
            if handle.join().is_err() {
                failure.get_or_insert(SieveError::WorkerPanicked { rank });
            }
        }
    });

    match failure {
        Some(err) => Err(err),
        None => Ok(flags.collect_primes()),
    }
}
