use std::path::PathBuf;

use tracing::debug;
use unserialize::wire::{DecodeOptions, Value};

use crate::cmd::print::{PrintOptions, print_value};
use crate::cmd::util::{decode_with, input_label, read_input, value_to_json};
use crate::cmd::{DEFAULT_MAX_DEPTH, Result};

#[derive(clap::Args)]
pub struct Args {
	/// Input file, or `-` for stdin.
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	/// Keep original key types instead of string-keyed records.
	#[arg(long)]
	pub mapping: bool,
	/// Never flatten `0..len` keyed composites into sequences.
	#[arg(long = "no-sequences")]
	pub no_sequences: bool,
	/// Decode empty composites as null.
	#[arg(long = "empty-null")]
	pub empty_null: bool,
	/// Use the explicit-stack decoder.
	#[arg(long)]
	pub iterative: bool,
	#[arg(long = "max-depth", default_value_t = DEFAULT_MAX_DEPTH)]
	pub max_depth: u32,
	#[arg(long = "max-bytes")]
	pub max_bytes: Option<usize>,
	#[arg(long = "max-items")]
	pub max_items: Option<usize>,
	#[arg(long = "max-string")]
	pub max_string: Option<usize>,
	#[arg(long)]
	pub compact: bool,
}

impl Args {
	fn decode_options(&self) -> DecodeOptions {
		DecodeOptions {
			empty_array_value: if self.empty_null { Value::Null } else { Value::empty_record() },
			represent_composite_as_mapping: self.mapping,
			detect_sequences: !self.no_sequences,
			max_depth: Some(self.max_depth),
		}
	}

	fn print_options(&self) -> PrintOptions {
		let mut print = if self.compact { PrintOptions::compact() } else { PrintOptions::default() };
		if let Some(max_items) = self.max_items {
			print.max_entries = max_items;
		}
		if let Some(max_string) = self.max_string {
			print.max_string_len = max_string;
		}
		print
	}
}

/// Decode one input and print the value tree.
pub fn run(args: Args) -> Result<()> {
	let decode = args.decode_options();
	let print = args.print_options();
	let label = input_label(&args.path);

	let bytes = read_input(&args.path, args.max_bytes)?;
	debug!(input = %label, bytes = bytes.len(), iterative = args.iterative, options = ?decode, "decoding");
	let value = decode_with(&bytes, &decode, args.iterative)?;
	debug!(kind = value.kind(), "decoded");

	if args.json {
		let doc = serde_json::json!({
			"path": label,
			"bytes": bytes.len(),
			"kind": value.kind(),
			"value": value_to_json(&value),
		});
		println!("{}", serde_json::to_string_pretty(&doc)?);
		return Ok(());
	}

	println!("path: {label}");
	println!("bytes: {}", bytes.len());
	println!("kind: {}", value.kind());
	println!("value:");
	print_value(&value, 2, print);

	Ok(())
}
