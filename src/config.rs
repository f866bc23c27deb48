//! Configuration for the parallel sieves.

/// Worker-pool configuration shared by both parallel sieve variants.
///
/// The thread count is a fixed caller-side choice, not derived from the
/// hardware at call time; each sieve call spins up exactly this many workers
/// and joins them before returning.
#[derive(Debug, Clone)]
pub struct SieveConfig {
    /// Number of worker threads per sieve call. Must be at least 1.
    pub threads: usize,
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self { threads: 4 }
    }
}

impl SieveConfig {
    /// Config with an explicit worker count.
    pub fn with_threads(threads: usize) -> Self {
        Self { threads }
    }
}
