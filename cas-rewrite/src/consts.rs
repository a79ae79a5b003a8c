//! Static constants used by the rewrite rules.

use once_cell::sync::Lazy;

/// The largest prime tried when searching for a common factor of a quotient.
pub const LARGEST_TRIAL_PRIME: u32 = 541;

/// Every prime up to and including [`LARGEST_TRIAL_PRIME`], in ascending order.
///
/// These are the literal factors the quotient rule tries to cancel from both sides of a fraction
/// when structural division finds nothing.
pub static PRIMES: Lazy<Vec<u32>> = Lazy::new(|| {
    let limit = LARGEST_TRIAL_PRIME as usize;
    let mut composite = vec![false; limit + 1];
    let mut primes = Vec::new();
    for n in 2..=limit {
        if composite[n] {
            continue;
        }
        primes.push(n as u32);
        for multiple in (n * n..=limit).step_by(n) {
            composite[multiple] = true;
        }
    }
    primes
});
