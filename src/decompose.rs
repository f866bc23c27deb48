//! Sequential Sieve of Eratosthenes over natural decompositions.
//!
//! The sequential sieve records, for every natural up to the bound, its
//! smallest prime factor rather than a bare prime/composite bit. The full
//! decomposition is useful on its own and the prime list falls out of it by a
//! linear scan ([`extract_primes`]). This path is also the correctness
//! reference the parallel sieves are tested against.

/// Smallest prime factor of every natural in `1..=n`.
///
/// Slot `i` of the result holds the smallest prime factor of `i + 1`; the
/// slot for 1 stays at its initial value 1. Divisors are tried in increasing
/// order and a slot is only written while still unmarked, so the first writer
/// is guaranteed to be the smallest factor.
///
/// Runs in O(n log n) time and O(n) space. `natural_decomposition(0)` is the
/// empty vector.
pub fn natural_decomposition(n: u64) -> Vec<u64> {
    let mut sieve = vec![1u64; n as usize];
    for d in 2..=n {
        let mut multiple = d;
        while multiple <= n {
            let slot = &mut sieve[(multiple - 1) as usize];
            if *slot == 1 {
                *slot = d;
            }
            multiple += d;
        }
    }
    sieve
}

/// Extract the strictly increasing prime list from a decomposition array.
///
/// A slot holds a previously unseen prime exactly when its value exceeds the
/// running maximum: the first slot whose smallest factor is `p` is candidate
/// `p` itself. The running maximum starts at 1 so that candidate 1 never
/// qualifies.
///
/// Scans twice, once to count and once to fill, so the result is allocated at
/// its exact final size.
pub fn extract_primes(decomposition: &[u64]) -> Vec<u64> {
    let mut count = 0usize;
    let mut largest = 1u64;
    for &factor in decomposition {
        if factor > largest {
            largest = factor;
            count += 1;
        }
    }

    let mut primes = Vec::with_capacity(count);
    let mut largest = 1u64;
    for &factor in decomposition {
        if factor > largest {
            largest = factor;
            primes.push(factor);
        }
    }
    primes
}

/// Primes in `1..=n` via the sequential sieve.
pub fn sequential_primes(n: u64) -> Vec<u64> {
    extract_primes(&natural_decomposition(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decomposition_of_ten() {
        assert_eq!(
            natural_decomposition(10),
            vec![1, 2, 3, 2, 5, 2, 7, 2, 3, 2]
        );
    }

    #[test]
    fn decomposition_degenerate_bounds() {
        assert!(natural_decomposition(0).is_empty());
        assert_eq!(natural_decomposition(1), vec![1]);
        assert_eq!(natural_decomposition(2), vec![1, 2]);
        assert_eq!(natural_decomposition(3), vec![1, 2, 3]);
    }

    #[test]
    fn extract_primes_of_ten() {
        let d = natural_decomposition(10);
        assert_eq!(extract_primes(&d), vec![2, 3, 5, 7]);
    }

    #[test]
    fn extract_primes_empty_input() {
        assert!(extract_primes(&[]).is_empty());
        assert!(extract_primes(&[1]).is_empty());
    }

    #[test]
    fn primes_to_thirty() {
        assert_eq!(
            sequential_primes(30),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
    }

    #[test]
    fn primes_to_one_hundred() {
        let primes = sequential_primes(100);
        assert_eq!(primes.len(), 25);
        assert_eq!(*primes.last().unwrap(), 97);
    }

    #[test]
    fn repeated_calls_are_identical() {
        assert_eq!(sequential_primes(500), sequential_primes(500));
    }
}
