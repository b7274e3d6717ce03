/// Collatz Kernel — Arithmetic Primitives
///
/// All trajectory values: arbitrary-precision `BigUint`.
/// No fixed-width integer may ever hold a trajectory term — peaks
/// exceed 64 bits even for modest start values.

use num_bigint::BigUint;

/// Decimal form of the soft advisory limit, 10^21.
const SOFT_LIMIT_DECIMAL: &str = "1000000000000000000000";

/// The soft advisory limit: exactly 10^21. Start values above it are
/// permitted but trigger a large-value advisory.
pub fn soft_limit() -> BigUint {
    SOFT_LIMIT_DECIMAL
        .parse()
        .expect("soft limit literal is a valid decimal")
}

/// True when `n` is even.
pub fn is_even(n: &BigUint) -> bool {
    !n.bit(0)
}

/// One Collatz transition: `n/2` when even, `3n+1` when odd.
/// Halving is exact — it is only ever applied to even terms.
pub fn next_term(n: &BigUint) -> BigUint {
    if is_even(n) {
        n >> 1
    } else {
        n * 3u32 + 1u32
    }
}
