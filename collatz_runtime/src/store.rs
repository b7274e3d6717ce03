//! File-backed sequence store.
//!
//! One record per file, encoded as a single JSON document.
//!
//! - `save_record`: encode + write, creating parent directories.
//! - `load_record`: missing target → `NotFound`; present but invalid
//!   → `MalformedRecord`. Loaded sequences are validated against the
//!   trajectory invariants before being handed back.

use std::fs;
use std::path::Path;

use crate::codec::{encode_record, restore_record, SequenceRecord, StoreError};

/// Persist a record at `path`.
pub fn save_record(record: &SequenceRecord, path: &Path) -> Result<(), StoreError> {
    let json = encode_record(record)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, json.as_bytes())?;
    Ok(())
}

/// Load and validate a record from `path`.
pub fn load_record(path: &Path) -> Result<SequenceRecord, StoreError> {
    if !path.exists() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    restore_record(&content)
}
