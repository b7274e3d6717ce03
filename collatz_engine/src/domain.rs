/// Collatz Kernel — Core Domain Types
///
/// Pure data plus read-only accessors. No I/O, no generation logic.

use std::fmt;

use num_bigint::BigUint;

// ── Core Domain Types ──────────────────────────────────────────────

/// A complete Collatz trajectory.
///
/// First term is the start value, last term is 1, and every adjacent
/// pair obeys the transition rule. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trajectory {
    terms: Vec<BigUint>,
}

impl Trajectory {
    /// Wrap a precomputed term list. The caller is responsible for the
    /// trajectory invariants; term lists from untrusted sources go
    /// through `invariants::validate_trajectory` first.
    pub fn from_terms(terms: Vec<BigUint>) -> Self {
        Self { terms }
    }

    /// All terms, in generation order.
    pub fn terms(&self) -> &[BigUint] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The start value (first term). Panics on an empty trajectory —
    /// the generator never produces one.
    pub fn start(&self) -> &BigUint {
        &self.terms[0]
    }

    /// The final term — exactly 1 for a valid trajectory.
    pub fn last(&self) -> &BigUint {
        &self.terms[self.terms.len() - 1]
    }
}

/// Derived summary metrics over a trajectory.
/// Recomputed on demand, never persisted independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryStats {
    /// Total number of terms, start value and final 1 included.
    pub length: usize,
    /// Largest term reached anywhere in the trajectory.
    pub max_value: BigUint,
    /// First min(5, length) terms as (1-based position, value).
    pub head: Vec<(usize, BigUint)>,
    /// Last min(5, length) terms as (1-based position, value).
    /// Positions never drop below 1 for short trajectories.
    pub tail: Vec<(usize, BigUint)>,
}

// ── Advisory side channel ──────────────────────────────────────────

/// Non-fatal advisory emitted alongside a successful generation.
/// Observable by the caller; never alters the computed trajectory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// The start value exceeds the soft limit (10^21); generation may
    /// be slow and memory-intensive.
    LargeStartValue { digits: usize },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::LargeStartValue { digits } => write!(
                f,
                "start value has {} digits and exceeds 10^21; \
                 processing may require more time and memory",
                digits
            ),
        }
    }
}

// ── Error type ─────────────────────────────────────────────────────

/// Generation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// Start value is not greater than 1.
    InvalidInput(BigUint),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::InvalidInput(n) => write!(
                f,
                "InvalidInput: start value {} must be greater than 1",
                n
            ),
        }
    }
}
