//! Tag dispatch and the primitive field readers shared by both decoders.

use crate::wire::bytes::Cursor;
use crate::wire::{DecodeError, Result, Value};

/// Leading type tag of one encoded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tag {
	Scalar(Scalar),
	Composite,
}

/// Tags whose value is read without descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scalar {
	Null,
	Int,
	Float,
	Bool,
	String,
}

impl Tag {
	fn from_byte(byte: u8) -> Option<Self> {
		match byte {
			b'N' => Some(Self::Scalar(Scalar::Null)),
			b'i' => Some(Self::Scalar(Scalar::Int)),
			b'd' => Some(Self::Scalar(Scalar::Float)),
			b'b' => Some(Self::Scalar(Scalar::Bool)),
			b's' => Some(Self::Scalar(Scalar::String)),
			b'a' => Some(Self::Composite),
			_ => None,
		}
	}
}

/// Read and classify one tag byte, returning its offset.
pub(crate) fn read_tag(cursor: &mut Cursor<'_>) -> Result<(usize, Tag)> {
	let at = cursor.pos();
	let byte = cursor.read_byte("type tag")?;
	let tag = Tag::from_byte(byte).ok_or(DecodeError::UnknownTag { tag: char::from(byte), at })?;
	Ok((at, tag))
}

/// Read the body of any non-composite value after its tag.
pub(crate) fn read_scalar(cursor: &mut Cursor<'_>, tag: Scalar) -> Result<Value> {
	match tag {
		Scalar::Null => {
			cursor.expect_byte(b';')?;
			Ok(Value::Null)
		}
		Scalar::Int => Ok(Value::Int(read_int_field(cursor)?)),
		Scalar::Float => Ok(Value::Float(read_float_field(cursor)?)),
		Scalar::Bool => Ok(Value::Bool(read_bool_field(cursor)?)),
		Scalar::String => Ok(Value::String(read_string_field(cursor)?)),
	}
}

/// `:` count `:` `{` — returns the declared pair count.
pub(crate) fn read_composite_open(cursor: &mut Cursor<'_>) -> Result<usize> {
	cursor.expect_byte(b':')?;
	let (at, run) = cursor.read_until(b':', "composite count")?;
	let count = parse_len(run, at, "composite count")?;
	cursor.expect_byte(b'{')?;
	Ok(count)
}

/// Closing `}` of a composite.
pub(crate) fn read_composite_close(cursor: &mut Cursor<'_>) -> Result<()> {
	cursor.expect_byte(b'}')
}

fn read_int_field(cursor: &mut Cursor<'_>) -> Result<i64> {
	read_int_with_offset(cursor).map(|(_, value)| value)
}

fn read_int_with_offset(cursor: &mut Cursor<'_>) -> Result<(usize, i64)> {
	cursor.expect_byte(b':')?;
	let (at, run) = cursor.read_until(b';', "integer")?;
	let value = std::str::from_utf8(run)
		.ok()
		.and_then(|text| text.parse::<i64>().ok())
		.ok_or_else(|| malformed("integer", run, at))?;
	Ok((at, value))
}

fn read_float_field(cursor: &mut Cursor<'_>) -> Result<f64> {
	cursor.expect_byte(b':')?;
	let (at, run) = cursor.read_until(b';', "float")?;
	std::str::from_utf8(run)
		.ok()
		.and_then(|text| text.parse::<f64>().ok())
		.ok_or_else(|| malformed("float", run, at))
}

fn read_bool_field(cursor: &mut Cursor<'_>) -> Result<bool> {
	match read_int_with_offset(cursor)? {
		(_, 0) => Ok(false),
		(_, 1) => Ok(true),
		(at, value) => Err(DecodeError::InvalidBoolean { value, at }),
	}
}

fn read_string_field(cursor: &mut Cursor<'_>) -> Result<Box<str>> {
	cursor.expect_byte(b':')?;
	let (at, run) = cursor.read_until(b':', "string length")?;
	let len = parse_len(run, at, "string length")?;
	cursor.expect_byte(b'"')?;
	let payload = cursor.read_exact(len, "string payload")?;
	cursor.expect_byte(b'"')?;
	cursor.expect_byte(b';')?;
	Ok(String::from_utf8_lossy(payload).into_owned().into_boxed_str())
}

fn parse_len(run: &[u8], at: usize, field: &'static str) -> Result<usize> {
	std::str::from_utf8(run)
		.ok()
		.and_then(|text| text.parse::<usize>().ok())
		.ok_or_else(|| malformed(field, run, at))
}

fn malformed(field: &'static str, run: &[u8], at: usize) -> DecodeError {
	DecodeError::MalformedNumber {
		field,
		text: String::from_utf8_lossy(run).into_owned(),
		at,
	}
}
