use unserialize::wire::{Composite, Key, Value};

/// Output truncation and formatting limits for decoded values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of items, entries, or fields printed per composite.
	pub max_entries: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum recursive print depth for nested composites.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_entries: 80,
			max_string_len: 200,
			max_print_depth: 6,
		}
	}
}

impl PrintOptions {
	/// Preset for skimming large inputs.
	pub fn compact() -> Self {
		Self {
			max_entries: 16,
			max_string_len: 80,
			max_print_depth: 3,
		}
	}
}

/// Print one decoded value tree to stdout.
pub fn print_value(value: &Value, indent: usize, options: PrintOptions) {
	print!("{}", render_value(value, indent, options));
}

/// Render one decoded value tree as indented text, one item per line.
pub fn render_value(value: &Value, indent: usize, options: PrintOptions) -> String {
	let mut out = String::new();
	write_value(&mut out, value, indent, 0, options);
	out
}

fn write_value(out: &mut String, value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Null => out.push_str(&format!("{pad}null\n")),
		Value::Int(v) => out.push_str(&format!("{pad}{v}\n")),
		Value::Float(v) => out.push_str(&format!("{pad}{v:?}\n")),
		Value::Bool(v) => out.push_str(&format!("{pad}{v}\n")),
		Value::String(v) => out.push_str(&format!("{pad}{:?}\n", truncate(v, options.max_string_len))),
		Value::Composite(Composite::Sequence(items)) => {
			if depth >= options.max_print_depth {
				out.push_str(&format!("{pad}[... {} items]\n", items.len()));
				return;
			}
			out.push_str(&format!("{pad}[\n"));
			for item in items.iter().take(options.max_entries) {
				write_value(out, item, indent + 2, depth + 1, options);
			}
			write_more(out, &pad, items.len(), options);
			out.push_str(&format!("{pad}]\n"));
		}
		Value::Composite(Composite::Mapping(map)) => {
			if depth >= options.max_print_depth {
				out.push_str(&format!("{pad}mapping {{ ... {} entries }}\n", map.len()));
				return;
			}
			out.push_str(&format!("{pad}mapping {{\n"));
			for (key, item) in map.iter().take(options.max_entries) {
				let label = match key {
					Key::Int(v) => format!("{v} =>"),
					Key::Str(v) => format!("{:?} =>", truncate(v, options.max_string_len)),
				};
				write_entry(out, &pad, &label, item, indent, depth, options);
			}
			write_more(out, &pad, map.len(), options);
			out.push_str(&format!("{pad}}}\n"));
		}
		Value::Composite(Composite::Record(record)) => {
			if depth >= options.max_print_depth {
				out.push_str(&format!("{pad}record {{ ... {} fields }}\n", record.len()));
				return;
			}
			out.push_str(&format!("{pad}record {{\n"));
			for (name, item) in record.iter().take(options.max_entries) {
				write_entry(out, &pad, &format!("{name} ="), item, indent, depth, options);
			}
			write_more(out, &pad, record.len(), options);
			out.push_str(&format!("{pad}}}\n"));
		}
	}
}

fn write_entry(out: &mut String, pad: &str, label: &str, value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	if matches!(value, Value::Composite(_)) {
		out.push_str(&format!("{pad}  {label}\n"));
		write_value(out, value, indent + 4, depth + 1, options);
	} else {
		out.push_str(&format!("{pad}  {label} "));
		write_value(out, value, 0, depth + 1, options);
	}
}

fn write_more(out: &mut String, pad: &str, len: usize, options: PrintOptions) {
	if len > options.max_entries {
		out.push_str(&format!("{pad}  ... {} more\n", len - options.max_entries));
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
