use crate::wire::bytes::Cursor;
use crate::wire::scalar::{Tag, read_composite_close, read_composite_open, read_scalar, read_tag};
use crate::wire::{DecodeError, Key, Result, Value, materialize};

/// Smallest encoded pair (`i:0;N;`), used to cap untrusted preallocation.
pub(crate) const MIN_PAIR_LEN: usize = 6;

/// Per-call output shaping and limits.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeOptions {
	/// Value returned for every zero-entry composite.
	pub empty_array_value: Value,
	/// Emit keyed composites as [`crate::wire::Mapping`] instead of [`crate::wire::Record`].
	pub represent_composite_as_mapping: bool,
	/// Emit composites keyed exactly `0..len` as dense sequences.
	pub detect_sequences: bool,
	/// Maximum composite nesting depth, unbounded when `None`.
	pub max_depth: Option<u32>,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			empty_array_value: Value::empty_record(),
			represent_composite_as_mapping: false,
			detect_sequences: true,
			max_depth: None,
		}
	}
}

impl DecodeOptions {
	/// Preset keeping original key types in keyed composites.
	pub fn mapping() -> Self {
		Self {
			represent_composite_as_mapping: true,
			..Self::default()
		}
	}

	/// Preset that never flattens composites into sequences.
	pub fn raw_composites() -> Self {
		Self {
			represent_composite_as_mapping: true,
			detect_sequences: false,
			..Self::default()
		}
	}

	/// Fail when a composite opened at `at` would sit at `depth`.
	pub(crate) fn check_depth(&self, depth: usize, at: usize) -> Result<()> {
		if let Some(max_depth) = self.max_depth
			&& depth > max_depth as usize
		{
			return Err(DecodeError::DepthExceeded { max_depth, at });
		}
		Ok(())
	}
}

/// Decode exactly one value spanning all of `bytes`.
pub fn decode(bytes: &[u8], opt: &DecodeOptions) -> Result<Value> {
	let mut cursor = Cursor::new(bytes);
	let value = read_value(&mut cursor, opt, 0)?;
	cursor.finish()?;
	Ok(value)
}

/// Decode the UTF-8 bytes of `text`.
pub fn decode_str(text: &str, opt: &DecodeOptions) -> Result<Value> {
	decode(text.as_bytes(), opt)
}

fn read_value(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: usize) -> Result<Value> {
	let (at, tag) = read_tag(cursor)?;
	match tag {
		Tag::Scalar(tag) => read_scalar(cursor, tag),
		Tag::Composite => read_composite(cursor, opt, depth + 1, at),
	}
}

fn read_composite(cursor: &mut Cursor<'_>, opt: &DecodeOptions, depth: usize, at: usize) -> Result<Value> {
	opt.check_depth(depth, at)?;
	let count = read_composite_open(cursor)?;

	let mut pairs = Vec::with_capacity(count.min(cursor.remaining() / MIN_PAIR_LEN));
	for _ in 0..count {
		let key_at = cursor.pos();
		let key = Key::from_value(read_value(cursor, opt, depth)?, key_at)?;
		let value = read_value(cursor, opt, depth)?;
		pairs.push((key, value));
	}
	read_composite_close(cursor)?;

	Ok(materialize(pairs, opt))
}
