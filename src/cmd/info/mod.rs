use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;
use unserialize::wire::{Composite, DecodeOptions, Value};

use crate::cmd::util::{decode_with, input_label, read_input};
use crate::cmd::{DEFAULT_MAX_DEPTH, Result};

#[derive(clap::Args)]
pub struct Args {
	/// Input file, or `-` for stdin.
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "max-depth", default_value_t = DEFAULT_MAX_DEPTH)]
	pub max_depth: u32,
	#[arg(long = "max-bytes")]
	pub max_bytes: Option<usize>,
}

/// Node counts gathered from one decoded tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValueStats {
	/// Total number of values, composites included.
	pub nodes: usize,
	/// Deepest composite nesting level (0 for a scalar root).
	pub max_depth: usize,
	/// Node count per value kind.
	pub kinds: BTreeMap<&'static str, usize>,
}

/// Print size, shape, and node statistics for one input.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		json,
		max_depth,
		max_bytes,
	} = args;

	let label = input_label(&path);
	let bytes = read_input(&path, max_bytes)?;
	debug!(input = %label, bytes = bytes.len(), "collecting stats");

	let opt = DecodeOptions {
		max_depth: Some(max_depth),
		..DecodeOptions::default()
	};
	let value = decode_with(&bytes, &opt, true)?;
	let stats = collect_stats(&value);

	if json {
		let doc = serde_json::json!({
			"path": label,
			"bytes": bytes.len(),
			"kind": value.kind(),
			"stats": stats,
		});
		println!("{}", serde_json::to_string_pretty(&doc)?);
		return Ok(());
	}

	println!("path: {label}");
	println!("bytes: {}", bytes.len());
	println!("kind: {}", value.kind());
	println!("nodes: {}", stats.nodes);
	println!("max_depth: {}", stats.max_depth);
	println!("kinds:");
	for (kind, count) in &stats.kinds {
		println!("  {kind}: {count}");
	}

	Ok(())
}

/// Walk a value tree without recursion and count its nodes.
pub fn collect_stats(value: &Value) -> ValueStats {
	let mut stats = ValueStats::default();
	let mut pending: Vec<(&Value, usize)> = vec![(value, 0)];

	while let Some((item, depth)) = pending.pop() {
		stats.nodes += 1;
		*stats.kinds.entry(item.kind()).or_default() += 1;

		let Value::Composite(composite) = item else {
			continue;
		};
		let depth = depth + 1;
		stats.max_depth = stats.max_depth.max(depth);
		match composite {
			Composite::Sequence(items) => pending.extend(items.iter().map(|child| (child, depth))),
			Composite::Mapping(map) => pending.extend(map.iter().map(|(_, child)| (child, depth))),
			Composite::Record(record) => pending.extend(record.iter().map(|(_, child)| (child, depth))),
		}
	}

	stats
}

#[cfg(test)]
mod tests;
