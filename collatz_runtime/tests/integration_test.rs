//! Integration tests for collatz_runtime.
//!
//! All tests use temporary directories for isolation.

use std::fs;
use std::path::PathBuf;

use num_bigint::BigUint;

use collatz_engine::domain::{Advisory, GenerateError};

use collatz_runtime::analyzer::{analyze, analyze_and_save, load_analysis, AnalyzeError};
use collatz_runtime::codec::{SequenceRecord, StoreError};
use collatz_runtime::store::{load_record, save_record};

fn big(n: u32) -> BigUint {
    BigUint::from(n)
}

fn big_str(s: &str) -> BigUint {
    s.parse().expect("valid decimal literal")
}

/// Create a temp directory for a test.
fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("collatz_runtime_tests")
        .join(name);
    if dir.exists() {
        fs::remove_dir_all(&dir).ok();
    }
    fs::create_dir_all(&dir).expect("Failed to create temp dir");
    dir
}

// ─────────────────────────────────────────────────────────────
// Test 1: save_then_load_round_trips_exactly
// ─────────────────────────────────────────────────────────────

#[test]
fn save_then_load_round_trips_exactly() {
    let dir = temp_dir("round_trip");
    let path = dir.join("classic.json");

    let analysis = analyze_and_save(big(27), &path).expect("analyze and save");
    let loaded = load_record(&path).expect("load record");

    assert_eq!(loaded.numero_inicial, big(27));
    assert_eq!(loaded.secuencia, analysis.trajectory.terms());
    assert_eq!(loaded.secuencia.len(), 112);
}

// ─────────────────────────────────────────────────────────────
// Test 2: twenty_one_digit_round_trip_keeps_precision
// ─────────────────────────────────────────────────────────────

#[test]
fn twenty_one_digit_round_trip_keeps_precision() {
    let dir = temp_dir("huge_round_trip");
    let path = dir.join("gigante.json");
    let start = big_str("999999999999999999999");

    let analysis = analyze_and_save(start.clone(), &path).expect("analyze and save");
    assert_eq!(analysis.stats.length, 637);

    // The raw file must carry the digits as plain JSON integers —
    // any float coercion would mangle them.
    let raw = fs::read_to_string(&path).expect("read saved file");
    assert!(raw.contains(r#""numero_inicial":999999999999999999999"#));
    assert!(raw.contains("64789056568007883646132048"));

    let loaded = load_analysis(&path).expect("load analysis");
    assert_eq!(loaded.trajectory, analysis.trajectory);
    assert_eq!(loaded.stats, analysis.stats);
    assert_eq!(
        loaded.stats.max_value,
        big_str("64789056568007883646132048")
    );
    assert_eq!(loaded.trajectory.start(), &start);
    assert_eq!(loaded.trajectory.last(), &big(1));
}

// ─────────────────────────────────────────────────────────────
// Test 3: missing_file_is_not_found
// ─────────────────────────────────────────────────────────────

#[test]
fn missing_file_is_not_found() {
    let dir = temp_dir("missing_file");
    let path = dir.join("missing.json");

    match load_record(&path) {
        Err(StoreError::NotFound(p)) => assert_eq!(p, path),
        other => panic!("Expected NotFound, got: {:?}", other),
    }

    // Same taxonomy through the analyzer.
    match load_analysis(&path) {
        Err(AnalyzeError::Store(StoreError::NotFound(_))) => {}
        other => panic!("Expected Store(NotFound), got: {:?}", other),
    }
}

// ─────────────────────────────────────────────────────────────
// Test 4: wrong_structure_is_malformed
// ─────────────────────────────────────────────────────────────

#[test]
fn wrong_structure_is_malformed() {
    let dir = temp_dir("wrong_structure");
    let path = dir.join("bad.json");
    fs::write(&path, br#"{"foo": 1}"#).expect("write bad file");

    match load_record(&path) {
        Err(StoreError::MalformedRecord(_)) => {}
        other => panic!("Expected MalformedRecord, got: {:?}", other),
    }
}

// ─────────────────────────────────────────────────────────────
// Test 5: truncated_file_is_malformed
// ─────────────────────────────────────────────────────────────

#[test]
fn truncated_file_is_malformed() {
    let dir = temp_dir("truncated_file");
    let path = dir.join("seq.json");

    let record = SequenceRecord {
        numero_inicial: big(6),
        secuencia: [6u32, 3, 10, 5, 16, 8, 4, 2, 1]
            .iter()
            .map(|&v| big(v))
            .collect(),
    };
    save_record(&record, &path).expect("save record");

    // Truncate the file in the middle of the sequence.
    let data = fs::read(&path).expect("read saved file");
    fs::write(&path, &data[..data.len() - 10]).expect("truncate");

    match load_record(&path) {
        Err(StoreError::MalformedRecord(_)) => {}
        other => panic!("Expected MalformedRecord, got: {:?}", other),
    }
}

// ─────────────────────────────────────────────────────────────
// Test 6: float_values_are_malformed
// ─────────────────────────────────────────────────────────────

#[test]
fn float_values_are_malformed() {
    let dir = temp_dir("float_values");
    let path = dir.join("float.json");
    fs::write(&path, br#"{"numero_inicial":6,"secuencia":[6.0,3.0,1.0]}"#)
        .expect("write float file");

    match load_record(&path) {
        Err(StoreError::MalformedRecord(msg)) => {
            assert!(msg.contains("integer"), "got: {}", msg);
        }
        other => panic!("Expected MalformedRecord, got: {:?}", other),
    }
}

// ─────────────────────────────────────────────────────────────
// Test 7: rule_breaking_file_is_malformed
// ─────────────────────────────────────────────────────────────

#[test]
fn rule_breaking_file_is_malformed() {
    let dir = temp_dir("rule_breaking");
    let path = dir.join("fake.json");
    // Structurally valid JSON, but 5 -> 11 is not a Collatz step.
    fs::write(&path, br#"{"numero_inicial":5,"secuencia":[5,11,1]}"#)
        .expect("write fake file");

    match load_record(&path) {
        Err(StoreError::MalformedRecord(_)) => {}
        other => panic!("Expected MalformedRecord, got: {:?}", other),
    }
}

// ─────────────────────────────────────────────────────────────
// Test 8: invalid_start_surfaces_through_analyzer
// ─────────────────────────────────────────────────────────────

#[test]
fn invalid_start_surfaces_through_analyzer() {
    match analyze(big(1)) {
        Err(AnalyzeError::Generate(GenerateError::InvalidInput(n))) => {
            assert_eq!(n, big(1));
        }
        other => panic!("Expected Generate(InvalidInput), got: {:?}", other),
    }
}

// ─────────────────────────────────────────────────────────────
// Test 9: advisory_flows_through_analysis
// ─────────────────────────────────────────────────────────────

#[test]
fn advisory_flows_through_analysis() {
    // Just above 10^21: advisory present, result unaffected.
    let above = big_str("1000000000000000000001");
    let analysis = analyze(above).expect("analyze above soft limit");
    assert_eq!(
        analysis.advisory,
        Some(Advisory::LargeStartValue { digits: 22 })
    );
    assert_eq!(analysis.trajectory.last(), &big(1));

    // Within the limit: no advisory.
    let analysis = analyze(big(27)).expect("analyze 27");
    assert!(analysis.advisory.is_none());
    assert_eq!(analysis.stats.length, 112);
    assert_eq!(analysis.stats.max_value, big(9232));
}

// ─────────────────────────────────────────────────────────────
// Test 10: loaded_stats_match_generated_stats
// ─────────────────────────────────────────────────────────────

#[test]
fn loaded_stats_match_generated_stats() {
    let dir = temp_dir("stats_parity");
    let path = dir.join("largo.json");

    let saved = analyze_and_save(big(97), &path).expect("analyze and save");
    let loaded = load_analysis(&path).expect("load analysis");

    assert_eq!(loaded.stats, saved.stats);
    assert_eq!(loaded.stats.length, 119);
    assert_eq!(loaded.stats.max_value, big(9232));
    // Head starts at position 1, tail ends at the trajectory length.
    assert_eq!(loaded.stats.head[0], (1, big(97)));
    assert_eq!(loaded.stats.tail.last().unwrap(), &(119, big(1)));
}
