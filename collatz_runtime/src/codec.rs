//! Sequence record codec — lossless JSON encoder/decoder.
//!
//! On-disk format (field names fixed for compatibility):
//!   {"numero_inicial": <integer>, "secuencia": [<integer>, ...]}
//!
//! Both fields are plain arbitrary-precision JSON integers. Encoding
//! never routes a value through a fixed-width integer or a float; the
//! `arbitrary_precision` feature of serde_json carries the exact
//! decimal digits end to end, so 22+-digit values round-trip losslessly.
//!
//! - `encode_record`:  SequenceRecord → JSON string
//! - `decode_record`:  JSON string → SequenceRecord (structure only)
//! - `restore_record`: decode + trajectory invariant validation

use std::fmt;
use std::io;
use std::path::PathBuf;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use collatz_engine::domain::Trajectory;
use collatz_engine::invariants::validate_record;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// All possible sequence store failures.
#[derive(Debug)]
pub enum StoreError {
    /// The persistence target does not exist.
    NotFound(PathBuf),
    /// The target exists but is not a well-formed sequence record:
    /// bad JSON, missing fields, wrong types, truncated content, or a
    /// sequence that breaks the trajectory invariants.
    MalformedRecord(String),
    /// Filesystem failure other than a missing target.
    Io(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(path) => {
                write!(f, "NotFound: {}", path.display())
            }
            StoreError::MalformedRecord(msg) => {
                write!(f, "MalformedRecord: {}", msg)
            }
            StoreError::Io(msg) => {
                write!(f, "IoError: {}", msg)
            }
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Arbitrary-precision JSON number adapters
// ---------------------------------------------------------------------------

/// Serde adapters mapping `BigUint` values to plain JSON numbers.
///
/// Decoding rejects floats, negatives, and non-number JSON values.
mod bigint_json {
    use num_bigint::BigUint;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Number;

    pub(super) fn number_from(n: &BigUint) -> Number {
        // The decimal digits of a BigUint always form a valid JSON
        // integer token of unlimited length.
        serde_json::from_str(&n.to_str_radix(10))
            .expect("digit string is a valid JSON number")
    }

    pub(super) fn biguint_from(num: &Number) -> Result<BigUint, String> {
        num.to_string()
            .parse::<BigUint>()
            .map_err(|_| format!("not a non-negative integer: {}", num))
    }

    pub fn serialize<S>(n: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serde::Serialize::serialize(&number_from(n), serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
    where
        D: Deserializer<'de>,
    {
        let num = Number::deserialize(deserializer)?;
        biguint_from(&num).map_err(D::Error::custom)
    }

    pub mod seq {
        use super::*;
        use serde::de::Error as _;
        use serde::ser::SerializeSeq;

        pub fn serialize<S>(values: &[BigUint], serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut seq = serializer.serialize_seq(Some(values.len()))?;
            for n in values {
                seq.serialize_element(&number_from(n))?;
            }
            seq.end()
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<BigUint>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let nums = Vec::<Number>::deserialize(deserializer)?;
            nums.iter()
                .map(biguint_from)
                .collect::<Result<Vec<_>, _>>()
                .map_err(D::Error::custom)
        }
    }
}

// ---------------------------------------------------------------------------
// Record type
// ---------------------------------------------------------------------------

/// Durable pairing of a start value and its full trajectory.
///
/// Field names are part of the on-disk format and must not change.
/// Strict deserialization: unknown fields are rejected, missing
/// required fields cause failure, no silent defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SequenceRecord {
    /// The start value the trajectory was generated from.
    #[serde(with = "bigint_json")]
    pub numero_inicial: BigUint,
    /// Every trajectory term, in generation order.
    #[serde(with = "bigint_json::seq")]
    pub secuencia: Vec<BigUint>,
}

impl SequenceRecord {
    /// Build a record from a generated trajectory.
    pub fn from_trajectory(trajectory: &Trajectory) -> Self {
        Self {
            numero_inicial: trajectory.start().clone(),
            secuencia: trajectory.terms().to_vec(),
        }
    }

    /// Rebuild the trajectory this record persists.
    pub fn into_trajectory(self) -> Trajectory {
        Trajectory::from_terms(self.secuencia)
    }
}

// ---------------------------------------------------------------------------
// Encoder / Decoder
// ---------------------------------------------------------------------------

/// Encode a record to its JSON string form.
pub fn encode_record(record: &SequenceRecord) -> Result<String, StoreError> {
    serde_json::to_string(record)
        .map_err(|e| StoreError::Io(format!("record serialization failed: {}", e)))
}

/// Decode a JSON string into a record.
///
/// Structure only: field presence and integer types are enforced, the
/// trajectory invariants are not — use `restore_record` for validated
/// loading.
pub fn decode_record(json: &str) -> Result<SequenceRecord, StoreError> {
    serde_json::from_str::<SequenceRecord>(json)
        .map_err(|e| StoreError::MalformedRecord(e.to_string()))
}

/// Decode a JSON string and validate the trajectory immediately.
///
/// The safe entry point for records from untrusted sources: the
/// sequence must be a genuine Collatz trajectory matching the recorded
/// start value.
pub fn restore_record(json: &str) -> Result<SequenceRecord, StoreError> {
    let record = decode_record(json)?;
    validate_record(&record.numero_inicial, &record.secuencia)
        .map_err(StoreError::MalformedRecord)?;
    Ok(record)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
