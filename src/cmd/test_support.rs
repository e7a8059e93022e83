use unserialize::wire::{DecodeOptions, Value, decode};

pub(crate) use unserialize_testkit::fixture_bytes;

/// Decode a string literal with default options.
pub(crate) fn decoded(input: &str) -> Value {
	decoded_with(input, &DecodeOptions::default())
}

/// Decode a string literal with explicit options.
pub(crate) fn decoded_with(input: &str, opt: &DecodeOptions) -> Value {
	decode(input.as_bytes(), opt).expect("test input decodes")
}
