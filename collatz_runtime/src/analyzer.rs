//! Analysis session — generate, summarize, and optionally persist.
//!
//! Thin orchestration over the kernel; no sequence logic lives here.
//!
//! Generate-before-persist order:
//!   1. kernel generates the trajectory (may fail on invalid input)
//!   2. statistics are derived
//!   3. the (start, trajectory) pair is written — only if step 1 succeeded

use std::fmt;
use std::path::Path;

use num_bigint::BigUint;

use collatz_engine::domain::{Advisory, GenerateError, SummaryStats, Trajectory};
use collatz_engine::generator::generate;
use collatz_engine::stats::summarize;

use crate::codec::{SequenceRecord, StoreError};
use crate::store;

/// Outcome of one analysis run: the trajectory, its derived
/// statistics, and the large-start advisory when one was emitted.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub trajectory: Trajectory,
    pub stats: SummaryStats,
    pub advisory: Option<Advisory>,
}

/// Analysis failures — generation or persistence.
#[derive(Debug)]
pub enum AnalyzeError {
    Generate(GenerateError),
    Store(StoreError),
}

impl fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzeError::Generate(e) => write!(f, "{}", e),
            AnalyzeError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl From<GenerateError> for AnalyzeError {
    fn from(err: GenerateError) -> Self {
        AnalyzeError::Generate(err)
    }
}

impl From<StoreError> for AnalyzeError {
    fn from(err: StoreError) -> Self {
        AnalyzeError::Store(err)
    }
}

/// Generate the trajectory for `start` and derive its statistics.
///
/// The large-start advisory, when present, is surfaced both on the
/// returned `Analysis` and as a warning log.
pub fn analyze(start: BigUint) -> Result<Analysis, AnalyzeError> {
    let (trajectory, advisory) = generate(start)?;
    if let Some(adv) = &advisory {
        tracing::warn!("{}", adv);
    }

    let stats = summarize(&trajectory);
    Ok(Analysis {
        trajectory,
        stats,
        advisory,
    })
}

/// Analyze `start` and persist the (start, trajectory) pair at `path`.
pub fn analyze_and_save(start: BigUint, path: &Path) -> Result<Analysis, AnalyzeError> {
    let analysis = analyze(start)?;

    let record = SequenceRecord::from_trajectory(&analysis.trajectory);
    store::save_record(&record, path)?;
    tracing::debug!(
        path = %path.display(),
        terms = analysis.stats.length,
        "sequence saved"
    );

    Ok(analysis)
}

/// Load a persisted pair from `path` and rebuild its statistics.
///
/// No advisory is attached: the trajectory is already computed, so the
/// generation-cost warning does not apply.
pub fn load_analysis(path: &Path) -> Result<Analysis, AnalyzeError> {
    let record = store::load_record(path)?;
    let trajectory = record.into_trajectory();
    let stats = summarize(&trajectory);

    Ok(Analysis {
        trajectory,
        stats,
        advisory: None,
    })
}
