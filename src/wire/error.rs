use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors produced while decoding serialized input.
///
/// Every variant carries the byte offset where decoding stopped. No partial value is
/// ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
	/// A specific framing byte was required but another byte was found.
	#[error("expected {expected:?} at offset {at}, found {found:?}")]
	UnexpectedByte {
		/// Required framing byte.
		expected: char,
		/// Byte actually present.
		found: char,
		/// Offset of the offending byte.
		at: usize,
	},
	/// Input ended in the middle of a field.
	#[error("unexpected end of input at offset {at} while reading {context}")]
	UnexpectedEof {
		/// Offset where more input was needed.
		at: usize,
		/// Field being read when input ran out.
		context: &'static str,
	},
	/// Leading type tag is not one of `N`, `i`, `d`, `b`, `s`, `a`.
	#[error("unknown type tag {tag:?} at offset {at}")]
	UnknownTag {
		/// Offending tag byte.
		tag: char,
		/// Offset of the tag byte.
		at: usize,
	},
	/// Boolean field held an integer other than 0 or 1.
	#[error("invalid boolean value {value} at offset {at}")]
	InvalidBoolean {
		/// Parsed integer.
		value: i64,
		/// Offset of the digit run.
		at: usize,
	},
	/// Integer, float, length, or count field did not parse.
	#[error("malformed {field} {text:?} at offset {at}")]
	MalformedNumber {
		/// Field kind being parsed.
		field: &'static str,
		/// Raw field text (lossy UTF-8).
		text: String,
		/// Offset of the field text.
		at: usize,
	},
	/// Bytes remained after the top-level value.
	#[error("unconsumed trailing data: {leftover} bytes at offset {at}")]
	TrailingData {
		/// Number of unread bytes.
		leftover: usize,
		/// Offset of the first unread byte.
		at: usize,
	},
	/// Composite key decoded to something other than an integer or string.
	#[error("invalid composite key of kind {kind} at offset {at}")]
	InvalidKey {
		/// Kind label of the rejected key value.
		kind: &'static str,
		/// Offset of the key's type tag.
		at: usize,
	},
	/// Composite nesting exceeded the configured ceiling.
	#[error("composite depth exceeded (max={max_depth}) at offset {at}")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
		/// Offset of the composite that crossed the ceiling.
		at: usize,
	},
}

/// Fieldless classification of [`DecodeError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// Wrong or missing delimiter byte.
	Framing,
	/// Ran out of bytes mid-field.
	TruncatedInput,
	/// Unsupported leading tag.
	UnknownTag,
	/// Boolean outside `0`/`1`.
	InvalidBoolean,
	/// Unparseable numeric field.
	MalformedNumber,
	/// Bytes left after the top-level value.
	TrailingData,
	/// Non-scalar composite key.
	InvalidKey,
	/// Nesting ceiling crossed.
	DepthExceeded,
}

impl DecodeError {
	/// Classify this error.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::UnexpectedByte { .. } => ErrorKind::Framing,
			Self::UnexpectedEof { .. } => ErrorKind::TruncatedInput,
			Self::UnknownTag { .. } => ErrorKind::UnknownTag,
			Self::InvalidBoolean { .. } => ErrorKind::InvalidBoolean,
			Self::MalformedNumber { .. } => ErrorKind::MalformedNumber,
			Self::TrailingData { .. } => ErrorKind::TrailingData,
			Self::InvalidKey { .. } => ErrorKind::InvalidKey,
			Self::DepthExceeded { .. } => ErrorKind::DepthExceeded,
		}
	}

	/// Byte offset where decoding stopped.
	pub fn offset(&self) -> usize {
		match self {
			Self::UnexpectedByte { at, .. }
			| Self::UnexpectedEof { at, .. }
			| Self::UnknownTag { at, .. }
			| Self::InvalidBoolean { at, .. }
			| Self::MalformedNumber { at, .. }
			| Self::TrailingData { at, .. }
			| Self::InvalidKey { at, .. }
			| Self::DepthExceeded { at, .. } => *at,
		}
	}
}

impl ErrorKind {
	/// Stable snake_case label for diagnostics output.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Framing => "framing",
			Self::TruncatedInput => "truncated_input",
			Self::UnknownTag => "unknown_tag",
			Self::InvalidBoolean => "invalid_boolean",
			Self::MalformedNumber => "malformed_number",
			Self::TrailingData => "trailing_data",
			Self::InvalidKey => "invalid_key",
			Self::DepthExceeded => "depth_exceeded",
		}
	}
}
