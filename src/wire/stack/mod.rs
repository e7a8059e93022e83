//! Explicit-stack decoder.
//!
//! Produces the same values and errors as [`crate::wire::decode`], but keeps open
//! composites in a heap-allocated frame stack so nesting depth is bounded by memory
//! rather than by the native call stack.

use crate::wire::bytes::Cursor;
use crate::wire::decode::MIN_PAIR_LEN;
use crate::wire::scalar::{Tag, read_composite_close, read_composite_open, read_scalar, read_tag};
use crate::wire::{DecodeOptions, Key, Result, Value, materialize};

struct Frame {
	/// Offset of the composite's tag byte.
	open_at: usize,
	/// Pairs still to be read.
	remaining: usize,
	pairs: Vec<(Key, Value)>,
	/// Key read, value pending.
	key: Option<Key>,
}

/// Decode exactly one value spanning all of `bytes` without recursion.
pub fn decode_iterative(bytes: &[u8], opt: &DecodeOptions) -> Result<Value> {
	let mut cursor = Cursor::new(bytes);
	let mut stack: Vec<Frame> = Vec::new();

	let root = 'values: loop {
		let (mut at, tag) = read_tag(&mut cursor)?;
		let mut produced = match tag {
			Tag::Scalar(tag) => read_scalar(&mut cursor, tag)?,
			Tag::Composite => {
				opt.check_depth(stack.len() + 1, at)?;
				let count = read_composite_open(&mut cursor)?;
				if count > 0 {
					stack.push(Frame {
						open_at: at,
						remaining: count,
						pairs: Vec::with_capacity(count.min(cursor.remaining() / MIN_PAIR_LEN)),
						key: None,
					});
					continue 'values;
				}
				read_composite_close(&mut cursor)?;
				materialize(Vec::new(), opt)
			}
		};

		// Hand the finished value to its parent, closing every frame it completes.
		loop {
			let Some(frame) = stack.last_mut() else {
				break 'values produced;
			};

			let Some(key) = frame.key.take() else {
				frame.key = Some(Key::from_value(produced, at)?);
				continue 'values;
			};

			frame.pairs.push((key, produced));
			frame.remaining -= 1;
			if frame.remaining > 0 {
				continue 'values;
			}

			let pairs = std::mem::take(&mut frame.pairs);
			at = frame.open_at;
			read_composite_close(&mut cursor)?;
			stack.pop();
			produced = materialize(pairs, opt);
		}
	};

	cursor.finish()?;
	Ok(root)
}
