#![allow(missing_docs)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use unserialize_testkit::fixture_path;

#[test]
fn decode_json_renders_record_as_object() {
	let json = run_json(&["decode", &fixture("person.txt"), "--json"]);

	assert_eq!(json["kind"], "record");
	assert_eq!(json["bytes"], 43);
	assert_eq!(json["value"]["name"], "Andy");
	assert_eq!(json["value"]["age"], 82);
}

#[test]
fn decode_json_renders_dense_composite_as_array() {
	let json = run_json(&["decode", &fixture("dense.txt"), "--json"]);
	assert_eq!(json["kind"], "sequence");
	assert_eq!(json["value"], serde_json::json!([1, 2, 3, 4, 5]));

	let json = run_json(&["decode", &fixture("dense.txt"), "--json", "--no-sequences"]);
	assert_eq!(json["kind"], "record");
	assert_eq!(json["value"]["0"], 1);
	assert_eq!(json["value"]["4"], 5);
}

#[test]
fn decode_json_session_fixture() {
	let json = run_json(&["decode", &fixture("session.txt"), "--json", "--iterative"]);
	let value = &json["value"];

	assert_eq!(value["username"], "mörk \"the; admin\"");
	assert_eq!(value["logged_in"], true);
	assert_eq!(value["roles"], serde_json::json!(["editor", "author", "subscriber"]));
	assert_eq!(value["cart"]["7"]["sku"], "B-7");
	assert_eq!(value["flash"], serde_json::json!({}));
	assert!(value["last_error"].is_null());
	assert!(value["ratio"].as_f64().is_some_and(|item| (item - 1e-5).abs() < 1e-12));
}

#[test]
fn decode_json_empty_null_option() {
	let json = run_json(&["decode", &fixture("session.txt"), "--json", "--empty-null"]);
	assert!(json["value"]["flash"].is_null());
}

#[test]
fn decode_reads_stdin() {
	let output = run_with_stdin(&["decode", "-", "--json"], b"a:1:{i:0;s:1:\";\";}");
	assert!(output.status.success(), "stdin decode should succeed");
	let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be valid json");
	assert_eq!(json["path"], "<stdin>");
	assert_eq!(json["value"], serde_json::json!([";"]));
}

#[test]
fn decode_text_output_lists_fields() {
	let output = run(&["decode", &fixture("person.txt")]);
	assert!(output.status.success(), "decode should succeed");
	let stdout = String::from_utf8(output.stdout).expect("stdout is utf8");
	assert!(stdout.contains("kind: record"));
	assert!(stdout.contains("name = \"Andy\""));
	assert!(stdout.contains("age = 82"));
}

#[test]
fn trailing_data_fails_with_byte_count() {
	let output = run(&["decode", &fixture("trailing.txt")]);
	assert!(!output.status.success(), "trailing data must fail");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("unconsumed trailing data: 6 bytes"), "stderr was: {stderr}");
}

#[test]
fn object_tag_fails_as_unknown() {
	let output = run(&["decode", &fixture("object.txt")]);
	assert!(!output.status.success(), "objects are unsupported");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("unknown type tag 'O' at offset 0"), "stderr was: {stderr}");
}

#[test]
fn max_bytes_rejects_large_input() {
	let output = run(&["decode", &fixture("session.txt"), "--max-bytes", "16"]);
	assert!(!output.status.success(), "oversized input must fail");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("--max-bytes"), "stderr was: {stderr}");
}

#[test]
fn max_depth_rejects_nested_input() {
	let output = run_with_stdin(&["decode", "-", "--max-depth", "1"], b"a:1:{i:0;a:0:{}}");
	assert!(!output.status.success(), "nested input must fail");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("depth exceeded"), "stderr was: {stderr}");
}

#[test]
fn info_json_reports_stats() {
	let json = run_json(&["info", &fixture("nested.txt"), "--json"]);

	assert_eq!(json["kind"], "record");
	assert_eq!(json["stats"]["max_depth"], 3);
	assert_eq!(json["stats"]["kinds"]["record"], 3);
	assert_eq!(json["stats"]["kinds"]["null"], 1);
}

fn fixture(name: &str) -> String {
	fixture_path(name).display().to_string()
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_unserialize")).args(args).output().expect("command executes")
}

fn run_with_stdin(args: &[&str], input: &[u8]) -> Output {
	let mut child = Command::new(env!("CARGO_BIN_EXE_unserialize"))
		.args(args)
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("command spawns");
	child.stdin.take().expect("stdin is piped").write_all(input).expect("stdin accepts input");
	child.wait_with_output().expect("command completes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(
		output.status.success(),
		"command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}
