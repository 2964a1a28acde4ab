//! CLI integration tests.
//!
//! Tests the oracle CLI commands by invoking the binary as a subprocess.

use std::io::Write;
use std::process::{Command, Stdio};

const KNOWN_DIGEST: &str =
    "21211605167783748478198991034217750710666889077103304402041408732752963186065";

fn oracle_path() -> &'static str {
    env!("CARGO_BIN_EXE_oracle")
}

fn run_args(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(oracle_path())
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .unwrap_or_else(|e| panic!("Failed to run oracle: {}", e));

    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

fn run_with_stdin(args: &[&str], input: &str) -> (i32, String, String) {
    let mut child = Command::new(oracle_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to spawn oracle: {}", e));

    {
        let stdin = child.stdin.as_mut().unwrap();
        stdin.write_all(input.as_bytes()).unwrap();
    }

    let output = child.wait_with_output().unwrap();
    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

fn parse(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout.trim())
        .unwrap_or_else(|e| panic!("stdout is not JSON ({}): {}", e, stdout))
}

// ============================================================================
// Hash Command Tests
// ============================================================================

#[test]
fn cli_hash_known_vector() {
    let (code, stdout, _stderr) = run_args(&["hash", "123456789", "987654321"]);
    assert_eq!(code, 0, "Expected success exit code");
    assert_eq!(parse(&stdout)["ok"]["digest"], KNOWN_DIGEST);
}

#[test]
fn cli_hash_plain() {
    let (code, stdout, _stderr) = run_args(&["hash", "--plain", "123456789", "987654321"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), KNOWN_DIGEST);
}

#[test]
fn cli_hash_dotted_input() {
    let (_, dotted, _) = run_args(&["hash", "12.3", "4"]);
    let (_, plain, _) = run_args(&["hash", "123", "4"]);
    assert_eq!(parse(&dotted), parse(&plain));
}

#[test]
fn cli_hash_invalid_numeral() {
    let (code, stdout, _stderr) = run_args(&["hash", "12a", "4"]);
    assert_eq!(code, 1, "Expected failure exit code");
    let json = parse(&stdout);
    assert_eq!(json["err"]["code"], 100);
    assert_eq!(json["err"]["name"], "E100_InvalidNumeral");
}

#[test]
fn cli_hash_negative_numeral() {
    let (code, stdout, _stderr) = run_args(&["hash", "-5", "4"]);
    assert_eq!(code, 1);
    assert_eq!(parse(&stdout)["err"]["code"], 100);
}

#[test]
fn cli_hash_missing_argument() {
    let (code, _stdout, _stderr) = run_args(&["hash", "1"]);
    assert_eq!(code, 2, "clap reports usage errors with exit code 2");
}

// ============================================================================
// Trace Command Tests
// ============================================================================

#[test]
fn cli_trace_rounds() {
    let (code, stdout, _stderr) = run_args(&["trace", "0", "0"]);
    assert_eq!(code, 0);
    let json = parse(&stdout);
    let rounds = json["ok"]["rounds"].as_array().unwrap();
    assert_eq!(rounds.len(), 8);
    assert_eq!(rounds[0]["kind"], "full");
    assert_eq!(rounds[2]["kind"], "partial");
    assert_eq!(rounds[0]["state"][0], "277");
    assert_eq!(rounds[0]["constants"], serde_json::json!([1, 2, 3]));
    assert_eq!(json["ok"]["preimage"], serde_json::json!(["0", "0"]));
    assert_eq!(
        json["ok"]["digest"],
        "3726168635605505378214265510820414452620660667547784670125577659766201037750"
    );
}

// ============================================================================
// Input / Verify Command Tests
// ============================================================================

#[test]
fn cli_input_to_stdout() {
    let (code, stdout, _stderr) = run_args(&["input", "123456789", "987654321"]);
    assert_eq!(code, 0);
    let json = parse(&stdout);
    assert_eq!(json["hashValue"], KNOWN_DIGEST);
    assert_eq!(json["preimage"], serde_json::json!(["123456789", "987654321"]));
}

#[test]
fn cli_input_to_file_then_verify() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.json");
    let path_str = path.to_str().unwrap();

    let (code, stdout, _stderr) = run_args(&["input", "123456789", "987654321", "-o", path_str]);
    assert_eq!(code, 0);
    assert_eq!(parse(&stdout)["ok"]["hashValue"], KNOWN_DIGEST);
    assert!(path.exists());

    let (code, stdout, _stderr) = run_args(&["verify", path_str]);
    assert_eq!(code, 0, "Expected valid document: {}", stdout);
    assert_eq!(parse(&stdout)["ok"]["valid"], true);
}

#[test]
fn cli_verify_stdin_incorrect_digest() {
    let input = r#"{"hashValue": "12345", "preimage": ["123456789", "987654321"]}"#;
    let (code, stdout, _stderr) = run_with_stdin(&["verify"], input);
    assert_eq!(code, 1, "Expected failure exit code for wrong digest");
    let json = parse(&stdout);
    assert_eq!(json["ok"]["valid"], false);
    assert_eq!(json["ok"]["expected_digest"], "12345");
    assert_eq!(json["ok"]["computed_digest"], KNOWN_DIGEST);
}

#[test]
fn cli_verify_invalid_json() {
    let (code, stdout, _stderr) = run_with_stdin(&["verify"], "{not json");
    assert_eq!(code, 1);
    assert_eq!(parse(&stdout)["err"]["name"], "E106_InvalidJSON");
}

#[test]
fn cli_verify_non_utf8_stdin() {
    let mut child = Command::new(oracle_path())
        .arg("verify")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to spawn oracle: {}", e));
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(&[0x7b, 0xff, 0xfe, 0x7d])
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json = parse(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(json["err"]["code"], 105);
    assert_eq!(json["err"]["name"], "E105_InvalidUTF8");
}

#[test]
fn cli_verify_missing_file() {
    let (code, stdout, _stderr) = run_args(&["verify", "/nonexistent/input.json"]);
    assert_eq!(code, 1);
    let json = parse(&stdout);
    assert_eq!(json["err"]["code"], 107);
    assert_eq!(json["err"]["name"], "E107_Io");
}

#[test]
fn cli_input_into_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("input.json");
    let (code, stdout, _stderr) = run_args(&["input", "1", "2", "-o", path.to_str().unwrap()]);
    assert_eq!(code, 1);
    assert_eq!(parse(&stdout)["err"]["code"], 107);
    assert!(!path.exists());
}

#[test]
fn cli_hash_invalid_numeral_reports_raw_input() {
    let (code, stdout, _stderr) = run_args(&["hash", "1.x", "4"]);
    assert_eq!(code, 1);
    let message = parse(&stdout)["err"]["message"].as_str().unwrap().to_string();
    assert!(message.contains("1.x"), "unexpected message: {}", message);
}

// ============================================================================
// Avalanche / Corpus / Metadata Tests
// ============================================================================

#[test]
fn cli_avalanche_defaults() {
    let (code, stdout, _stderr) = run_args(&["avalanche"]);
    assert_eq!(code, 0);
    let json = parse(&stdout);
    assert_eq!(json["ok"]["hamming_weight"], 115);
    assert_eq!(json["ok"]["total_bits"], 254);
}

#[test]
fn cli_corpus_passes() {
    let corpus = concat!(env!("CARGO_MANIFEST_DIR"), "/corpus/corpus.json");
    let (code, stdout, _stderr) = run_args(&["corpus", corpus]);
    assert_eq!(code, 0, "corpus run failed: {}", stdout);
    let json = parse(&stdout);
    assert_eq!(json["ok"]["all_passed"], true);
    assert_eq!(json["ok"]["failed"], 0);
}

#[test]
fn cli_corpus_missing_file() {
    let (code, stdout, _stderr) = run_args(&["corpus", "/nonexistent/corpus.json"]);
    assert_eq!(code, 1);
    assert!(parse(&stdout)["err"]["message"].is_string());
}

#[test]
fn cli_export_metadata() {
    let (code, stdout, _stderr) = run_args(&["export-metadata"]);
    assert_eq!(code, 0);
    let json = parse(&stdout);
    assert_eq!(json["ok"]["poseidon2"]["total_rounds"], 8);
    assert_eq!(json["ok"]["poseidon2"]["sbox_alpha"], 5);
    assert_eq!(
        json["ok"]["poseidon2"]["mix_matrix"],
        serde_json::json!([[2, 1, 1], [1, 2, 1], [1, 1, 2]])
    );
    assert_eq!(
        json["ok"]["field"]["modulus"],
        "21888242871839275222246405745257275088548364400416034343698204186575808495617"
    );
}

#[test]
fn cli_logs_go_to_stderr() {
    let (code, stdout, stderr) = run_args(&["--log-level", "debug", "hash", "1", "2"]);
    assert_eq!(code, 0);
    assert!(parse(&stdout)["ok"]["digest"].is_string());
    assert!(stderr.contains("hash"), "expected debug log on stderr: {}", stderr);
}
