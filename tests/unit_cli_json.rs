#![allow(missing_docs)]

use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;

#[test]
fn decode_json_output_is_valid_and_structured() {
	let path = write_message("decode_json", &[0x15, 0xAC, 0x02, 0x00]);
	let output = run_thriftdoc(&["decode", path.to_str().expect("utf8 path"), "--json"]);
	assert!(output.status.success(), "command should succeed");

	let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be valid json");
	assert_eq!(json["type"], "struct");
	assert_eq!(json["bytes"], 4);
	assert_eq!(json["value"]["fields"]["1"]["type"], "i32");
	assert_eq!(json["value"]["fields"]["1"]["value"], 150);

	let _ = std::fs::remove_file(path);
}

#[test]
fn decode_json_renders_typed_values() {
	let path = write_message("decode_typed", &[0x03, 0x61, 0x62, 0x63]);
	let output = run_thriftdoc(&["decode", path.to_str().expect("utf8 path"), "--type", "binary", "--json"]);
	assert!(output.status.success(), "command should succeed");

	let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be valid json");
	assert_eq!(json["type"], "binary");
	assert_eq!(json["value"], "abc");

	let _ = std::fs::remove_file(path);
}

#[test]
fn info_summarizes_top_level_fields() {
	let path = write_message("info", &[0x15, 0xAC, 0x02, 0x00]);
	let output = run_thriftdoc(&["info", path.to_str().expect("utf8 path")]);
	assert!(output.status.success(), "command should succeed");

	let text = String::from_utf8(output.stdout).expect("stdout should be utf8");
	assert!(text.contains("fields: 1"), "expected field count in summary");
	assert!(text.contains("1 i32"), "expected field line in summary");

	let _ = std::fs::remove_file(path);
}

#[test]
fn malformed_input_fails_with_error_on_stderr() {
	let path = write_message("malformed", &[0x15]);
	let output = run_thriftdoc(&["decode", path.to_str().expect("utf8 path")]);
	assert!(!output.status.success(), "truncated message should fail");

	let text = String::from_utf8(output.stderr).expect("stderr should be utf8");
	assert!(text.contains("error:"), "expected error line on stderr");

	let _ = std::fs::remove_file(path);
}

fn run_thriftdoc(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_thriftdoc")).args(args).output().expect("command executes")
}

fn write_message(name: &str, bytes: &[u8]) -> PathBuf {
	let path = std::env::temp_dir().join(format!("thriftdoc_{}_{}.bin", name, std::process::id()));
	std::fs::write(&path, bytes).expect("temp message writes");
	path
}
