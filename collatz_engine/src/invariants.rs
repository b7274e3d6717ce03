/// Collatz Kernel — Trajectory Invariant Checks
///
/// Non-panicking validation for term lists from untrusted sources
/// (loaded records). Generated trajectories satisfy these checks by
/// construction.

use num_bigint::BigUint;
use num_traits::One;

use crate::arithmetic::next_term;

/// Validate a full trajectory. Returns `Err(message)` on the first
/// violation, `Ok(())` if all checks pass:
///   - non-empty
///   - first term at least 2
///   - last term exactly 1, and 1 never appears earlier
///   - every adjacent pair obeys the transition rule
pub fn validate_trajectory(terms: &[BigUint]) -> Result<(), String> {
    let first = match terms.first() {
        Some(t) => t,
        None => return Err("trajectory is empty".to_string()),
    };
    if *first < BigUint::from(2u32) {
        return Err(format!("first term {} must be at least 2", first));
    }

    let one = BigUint::one();
    let last = terms.last().expect("non-empty checked above");
    if *last != one {
        return Err(format!("last term {} must be exactly 1", last));
    }

    for (i, pair) in terms.windows(2).enumerate() {
        if pair[0] == one {
            return Err(format!(
                "term {} is 1 before the end of the trajectory",
                i + 1
            ));
        }
        let expected = next_term(&pair[0]);
        if pair[1] != expected {
            return Err(format!(
                "terms {} and {} break the transition rule: {} -> {}, expected {}",
                i + 1,
                i + 2,
                pair[0],
                pair[1],
                expected
            ));
        }
    }

    Ok(())
}

/// Validate a (start, trajectory) pairing: the trajectory invariants
/// plus the first term matching the recorded start value.
pub fn validate_record(start: &BigUint, terms: &[BigUint]) -> Result<(), String> {
    validate_trajectory(terms)?;
    if &terms[0] != start {
        return Err(format!(
            "recorded start {} does not match first term {}",
            start, terms[0]
        ));
    }
    Ok(())
}
