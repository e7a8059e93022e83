use crate::wire::{Composite, DecodeOptions, Key, Mapping, Value};

/// Turn one composite's fully read pair list into its output value.
///
/// Zero pairs yield a clone of `empty_array_value`. With sequence detection on, pairs
/// whose unique keys are exactly `0..len` become a [`Composite::Sequence`] ordered by key.
/// Everything else becomes a mapping or a record depending on the options.
pub fn materialize(pairs: Vec<(Key, Value)>, opt: &DecodeOptions) -> Value {
	if pairs.is_empty() {
		return opt.empty_array_value.clone();
	}

	let mapping = Mapping::from_pairs(pairs);
	if !opt.detect_sequences {
		return keyed(mapping, opt);
	}

	match mapping.into_sequence() {
		Ok(items) => Value::Composite(Composite::Sequence(items)),
		Err(mapping) => keyed(mapping, opt),
	}
}

fn keyed(mapping: Mapping, opt: &DecodeOptions) -> Value {
	if opt.represent_composite_as_mapping {
		Value::Composite(Composite::Mapping(mapping))
	} else {
		Value::Composite(Composite::Record(mapping.into_record()))
	}
}
