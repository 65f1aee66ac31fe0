use super::{Source, SourcePos};


/// A cursor for the source code.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	input: &'a [u8],
	offset: usize,
	pos: SourcePos,
}


impl<'a> Cursor<'a> {
	pub fn pos(&self) -> SourcePos {
		self.pos
	}


	pub fn offset(&self) -> usize {
		self.offset
	}


	pub fn is_eof(&self) -> bool {
		self.offset == self.input.len()
	}


	pub fn peek(&self) -> Option<u8> {
		self.input.get(self.offset).copied()
	}


	/// Peek the character after the current one.
	pub fn peek_next(&self) -> Option<u8> {
		self.input.get(self.offset + 1).copied()
	}


	/// The consumed input since the given offset, excluding the current character.
	pub fn slice_from(&self, start: usize) -> &'a [u8] {
		&self.input[start .. self.offset]
	}


	/// The consumed input since the given offset, including the current character.
	pub fn slice_through(&self, start: usize) -> &'a [u8] {
		let end = (self.offset + 1).min(self.input.len());
		&self.input[start .. end]
	}


	pub fn step(&mut self) {
		if self.is_eof() {
			return;
		}

		self.pos.visit(self.input[self.offset]);
		self.offset += 1;
	}
}


impl<'a> From<&'a [u8]> for Cursor<'a> {
	fn from(input: &'a [u8]) -> Self {
		Self {
			input,
			offset: 0,
			pos: SourcePos::default()
		}
	}
}


impl<'a> From<&'a Source> for Cursor<'a> {
	fn from(source: &'a Source) -> Self {
		Self::from(source.contents.as_ref())
	}
}
