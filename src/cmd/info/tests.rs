use unserialize::wire::{DecodeOptions, Value, decode};

use super::collect_stats;
use crate::cmd::test_support::{decoded, fixture_bytes};

#[test]
fn scalar_root_has_zero_depth() {
	let stats = collect_stats(&Value::Int(1));
	assert_eq!(stats.nodes, 1);
	assert_eq!(stats.max_depth, 0);
	assert_eq!(stats.kinds.get("int"), Some(&1));
}

#[test]
fn counts_nested_nodes() {
	let value = decoded(r#"a:2:{i:0;a:0:{}i:1;a:1:{s:1:"k";a:1:{i:0;N;}}}"#);
	let stats = collect_stats(&value);

	// sequence -> [empty record, record -> sequence -> null]
	assert_eq!(stats.nodes, 5);
	assert_eq!(stats.max_depth, 3);
	assert_eq!(stats.kinds.get("sequence"), Some(&2));
	assert_eq!(stats.kinds.get("record"), Some(&2));
	assert_eq!(stats.kinds.get("null"), Some(&1));
}

#[test]
fn session_fixture_stats() {
	let bytes = fixture_bytes("session.txt");
	let value = decode(&bytes, &DecodeOptions::default()).expect("fixture decodes");
	let stats = collect_stats(&value);

	assert_eq!(value.kind(), "record");
	assert!(stats.nodes > 10, "expected a non-trivial tree, got {}", stats.nodes);
	assert!(stats.max_depth >= 2);
	assert!(stats.kinds.contains_key("sequence"));
	assert!(stats.kinds.contains_key("bool"));
}
