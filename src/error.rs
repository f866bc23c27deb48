//! SieveError: unified error type for prime-sieve public APIs
//!
//! Every fallible operation in this crate reports through this enum rather
//! than panicking. A worker that fails to run would leave its share of
//! composites unmarked, so worker spawn and join failures are fatal to the
//! whole sieve call instead of degrading the result silently.

use thiserror::Error;

/// Unified error type for sieve operations.
#[derive(Debug, Error)]
pub enum SieveError {
    /// A prime-list operation was asked for a bound of zero; the sieve needs
    /// at least one candidate.
    #[error("bound must be at least 1 (got 0)")]
    InvalidBound,
    /// A worker count of zero would leave every divisor stripe unowned.
    #[error("worker count must be at least 1")]
    InvalidWorkerCount,
    /// A frequency scan was asked for windows of width zero.
    #[error("window width must be at least 1")]
    InvalidWindow,
    /// The OS refused to spawn a sieve worker, so its divisor stripe would
    /// have gone unmarked.
    #[error("failed to spawn sieve worker {rank}")]
    WorkerSpawn {
        rank: usize,
        #[source]
        source: std::io::Error,
    },
    /// A sieve worker panicked before finishing its stripe, leaving the flag
    /// array partially marked.
    #[error("sieve worker {rank} panicked before completing its stripe")]
    WorkerPanicked { rank: usize },
    /// The thread pool for the segmented sieve could not be built.
    #[error("failed to build sieve worker pool")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),
}
