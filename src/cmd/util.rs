use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::{Map, Number};
use unserialize::wire::{Composite, DecodeOptions, Value, decode, decode_iterative};

use crate::cmd::{CliError, Result};

/// Human-readable label for an input path argument.
pub(crate) fn input_label(path: &Path) -> String {
	if is_stdin(path) { "<stdin>".to_owned() } else { path.display().to_string() }
}

/// Read a file, or stdin for `-`, refusing anything over `max_bytes`.
pub(crate) fn read_input(path: &Path, max_bytes: Option<usize>) -> Result<Vec<u8>> {
	let label = input_label(path);
	let io_err = |source| CliError::Io { path: label.clone(), source };

	let mut reader: Box<dyn Read> = if is_stdin(path) {
		Box::new(std::io::stdin().lock())
	} else {
		Box::new(File::open(path).map_err(io_err)?)
	};

	let mut bytes = Vec::new();
	match max_bytes {
		Some(limit) => {
			let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
			reader.take(cap).read_to_end(&mut bytes).map_err(io_err)?;
			if bytes.len() > limit {
				return Err(CliError::InputTooLarge { limit });
			}
		}
		None => {
			reader.read_to_end(&mut bytes).map_err(io_err)?;
		}
	}
	Ok(bytes)
}

/// Run the recursive or explicit-stack decoder.
pub(crate) fn decode_with(bytes: &[u8], opt: &DecodeOptions, iterative: bool) -> Result<Value> {
	let value = if iterative { decode_iterative(bytes, opt)? } else { decode(bytes, opt)? };
	Ok(value)
}

/// Convert a decoded value into a JSON document.
///
/// Mapping and record keys become object keys in insertion order. Non-finite floats
/// have no JSON spelling and become `null`.
pub(crate) fn value_to_json(value: &Value) -> serde_json::Value {
	match value {
		Value::Null => serde_json::Value::Null,
		Value::Int(v) => serde_json::Value::from(*v),
		Value::Float(v) => Number::from_f64(*v).map(serde_json::Value::Number).unwrap_or(serde_json::Value::Null),
		Value::Bool(v) => serde_json::Value::Bool(*v),
		Value::String(v) => serde_json::Value::String(v.to_string()),
		Value::Composite(Composite::Sequence(items)) => serde_json::Value::Array(items.iter().map(value_to_json).collect()),
		Value::Composite(Composite::Mapping(map)) => {
			let object: Map<String, serde_json::Value> = map.iter().map(|(key, value)| (key.to_string(), value_to_json(value))).collect();
			serde_json::Value::Object(object)
		}
		Value::Composite(Composite::Record(record)) => {
			let object: Map<String, serde_json::Value> = record.iter().map(|(name, value)| (name.to_owned(), value_to_json(value))).collect();
			serde_json::Value::Object(object)
		}
	}
}

fn is_stdin(path: &Path) -> bool {
	path == Path::new("-")
}
