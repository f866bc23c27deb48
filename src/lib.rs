//! # prime-sieve
//!
//! prime-sieve computes the prime numbers up to a bound with the Sieve of
//! Eratosthenes, in three flavors:
//!
//! - a sequential sieve that decomposes every natural up to the bound into its
//!   smallest prime factor ([`decompose::natural_decomposition`]), from which
//!   a prime list can be extracted ([`decompose::extract_primes`]);
//! - a striped parallel sieve ([`parallel::parallel_primes`]) where a fixed
//!   pool of worker threads shares one flag array and each worker strikes the
//!   multiples of its own disjoint stripe of divisors;
//! - a segmented parallel sieve ([`segmented::parallel_primes_segmented`])
//!   where each worker owns a contiguous range of the flag array instead,
//!   trading shared writes for redundant divisor walks.
//!
//! All three produce the same strictly increasing prime list for the same
//! bound. The [`analysis`] module adds gap and window-frequency statistics
//! over a computed prime list.
//!
//! ## Determinism
//!
//! Sieve output depends only on the bound: the set of primes below `n` does
//! not change with the worker count or with scheduling, so repeated calls with
//! any thread count yield identical lists.
//!
//! ## Usage
//!
//! ```
//! use prime_sieve::config::SieveConfig;
//! use prime_sieve::parallel::parallel_primes;
//!
//! let primes = parallel_primes(30, &SieveConfig::default()).unwrap();
//! assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
//! ```

pub mod analysis;
pub mod config;
pub mod decompose;
pub mod error;
pub mod parallel;
pub mod segmented;

pub use config::SieveConfig;
pub use error::SieveError;

/// A convenient prelude importing the most-used functions and types.
pub mod prelude {
    pub use crate::analysis::{GapStats, WindowFrequency, gap_stats, prime_gaps, window_frequency};
    pub use crate::config::SieveConfig;
    pub use crate::decompose::{extract_primes, natural_decomposition, sequential_primes};
    pub use crate::error::SieveError;
    pub use crate::parallel::parallel_primes;
    pub use crate::segmented::parallel_primes_segmented;
}
