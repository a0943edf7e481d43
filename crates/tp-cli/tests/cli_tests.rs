//! End-to-end tests for the tokpack driver: files in, files out.

use clap::Parser;
use std::fs;
use tempfile::TempDir;
use tp_cli::{normalize_line_endings, run, verify_roundtrip, Args, Mode};
use tp_codec::Codec;

const SAMPLE: &str = "Repeated words compress well.\r\n\
                      Repeated phrases and repeated words compress.\r\n\
                      \r\n\
                      Contact someone@example.org or @support for 12345 12345.\r\n";

fn args(list: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("tokpack").chain(list.iter().copied())).unwrap()
}

fn write(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_normalize_line_endings() {
    assert_eq!(normalize_line_endings("a\r\nb\nc\r\n"), "a\nb\nc");
    assert_eq!(normalize_line_endings(""), "");
}

#[test]
fn test_encode_then_decode_files() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "plain.txt", SAMPLE);
    let encoded_path = dir.path().join("plain.tp").to_string_lossy().into_owned();
    let decoded_path = dir.path().join("plain.out").to_string_lossy().into_owned();

    let summary = run(&args(&[&input, &encoded_path])).unwrap();
    assert_eq!(summary.mode, Mode::Encode);
    assert!(summary.verified);
    assert!(summary.dictionary_len > 0);
    let encoded = fs::read_to_string(&encoded_path).unwrap();
    assert!(encoded.starts_with('@'));
    assert_eq!(summary.output, encoded);

    let summary = run(&args(&[&encoded_path, &decoded_path])).unwrap();
    assert_eq!(summary.mode, Mode::Decode);
    assert!(!summary.verified);
    let decoded = fs::read_to_string(&decoded_path).unwrap();
    assert_eq!(decoded, normalize_line_endings(SAMPLE));
}

#[test]
fn test_run_without_output_file() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "plain.txt", "alpha beta gamma");
    let summary = run(&args(&[&input])).unwrap();
    assert_eq!(summary.output, "@@alpha beta gamma");
    assert!(summary.compression_ratio() < 0.0);
}

#[test]
fn test_forced_encode_of_encoded_file() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "twice.tp", "@hello@@0 @0");
    let summary = run(&args(&["--mode", "encode", &input])).unwrap();
    assert_eq!(summary.mode, Mode::Encode);
    assert_eq!(Codec::default().decode(&summary.output).unwrap(), "@hello@@0 @0");
}

#[test]
fn test_decode_without_header_fails() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "plain.txt", "no marker here");
    let err = run(&args(&["--mode", "decode", &input])).unwrap_err();
    assert!(format!("{err:#}").contains("Header not found"));
}

#[test]
fn test_custom_marker_flag() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "plain.txt", "marker marker @home");
    let summary = run(&args(&["--marker", "#", &input])).unwrap();
    assert_eq!(summary.output, "#marker##0 #0 @home");
}

#[test]
fn test_config_file() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "codec.json", r#"{"min_word_chars": 3}"#);
    let input = write(&dir, "plain.txt", "cat cat dog");
    let summary = run(&args(&["--config", &config, &input])).unwrap();
    assert_eq!(summary.output, "@cat@@0 @0 dog");
}

#[test]
fn test_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "codec.json", r#"{"marker": " "}"#);
    let input = write(&dir, "plain.txt", "text");
    let err = run(&args(&["--config", &config, &input])).unwrap_err();
    assert!(format!("{err:#}").contains("Invalid configuration"));
}

#[test]
fn test_missing_input_file() {
    let err = run(&args(&["/definitely/not/here.txt"])).unwrap_err();
    assert!(err.to_string().contains("failed to read"));
}

#[test]
fn test_no_verify_flag() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "plain.txt", "again again");
    let summary = run(&args(&["--no-verify", &input])).unwrap();
    assert!(!summary.verified);
}

#[test]
fn test_verify_detects_mismatch() {
    let codec = Codec::default();
    assert!(verify_roundtrip(&codec, "hello hello", "@hello@@0 @0").is_ok());
    let err = verify_roundtrip(&codec, "hello hello", "@hello@@0 @1").unwrap_err();
    assert!(err.to_string().contains("line 1"));
}
