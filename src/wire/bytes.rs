use crate::wire::{DecodeError, Result};

/// Forward-only cursor over an immutable byte slice.
pub(crate) struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub(crate) fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub(crate) fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub(crate) fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read one byte and advance.
	pub(crate) fn read_byte(&mut self, context: &'static str) -> Result<u8> {
		let byte = *self.bytes.get(self.pos).ok_or(DecodeError::UnexpectedEof { at: self.pos, context })?;
		self.pos += 1;
		Ok(byte)
	}

	/// Consume one byte that must equal `expected`.
	pub(crate) fn expect_byte(&mut self, expected: u8) -> Result<()> {
		let at = self.pos;
		let found = self.read_byte("delimiter")?;
		if found != expected {
			return Err(DecodeError::UnexpectedByte {
				expected: char::from(expected),
				found: char::from(found),
				at,
			});
		}
		Ok(())
	}

	/// Read exactly `n` bytes and advance cursor.
	pub(crate) fn read_exact(&mut self, n: usize, context: &'static str) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(DecodeError::UnexpectedEof { at: self.bytes.len(), context });
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Read the run of bytes before `delim`, consuming the delimiter.
	///
	/// Returns the run start offset alongside the run itself.
	pub(crate) fn read_until(&mut self, delim: u8, context: &'static str) -> Result<(usize, &'a [u8])> {
		let start = self.pos;
		let rem = &self.bytes[start..];
		let Some(rel_end) = rem.iter().position(|byte| *byte == delim) else {
			return Err(DecodeError::UnexpectedEof { at: self.bytes.len(), context });
		};

		let end = start + rel_end;
		self.pos = end + 1;
		Ok((start, &self.bytes[start..end]))
	}

	/// Fail unless every byte has been consumed.
	pub(crate) fn finish(&self) -> Result<()> {
		let leftover = self.remaining();
		if leftover > 0 {
			return Err(DecodeError::TrailingData { leftover, at: self.pos });
		}
		Ok(())
	}
}
