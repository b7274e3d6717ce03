/// Collatz Kernel — Trajectory Generation
///
/// Iteratively applies the transition rule until the value collapses
/// to 1. No iteration cap is imposed: termination relies on the
/// empirically universal (formally unproven) Collatz property.

use num_bigint::BigUint;
use num_traits::One;

use crate::arithmetic::{next_term, soft_limit};
use crate::domain::{Advisory, GenerateError, Trajectory};

/// Generate the full trajectory for `start`.
///
/// The trajectory begins with `start` itself and ends with the first 1
/// reached. Returns the trajectory plus an optional advisory when
/// `start` exceeds the soft limit; the advisory never changes the
/// result. Fails with `InvalidInput` when `start` is 0 or 1.
pub fn generate(
    start: BigUint,
) -> Result<(Trajectory, Option<Advisory>), GenerateError> {
    if start < BigUint::from(2u32) {
        return Err(GenerateError::InvalidInput(start));
    }

    let advisory = if start > soft_limit() {
        Some(Advisory::LargeStartValue {
            digits: start.to_str_radix(10).len(),
        })
    } else {
        None
    };

    let mut current = start.clone();
    let mut terms = vec![start];
    while !current.is_one() {
        current = next_term(&current);
        terms.push(current.clone());
    }

    Ok((Trajectory::from_terms(terms), advisory))
}
