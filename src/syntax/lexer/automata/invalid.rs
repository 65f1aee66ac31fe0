use super::{Cursor, Error, Root, SourcePos, State, Transition};


/// The state for skipping an invalid multi-byte character, so that a single error is
/// reported for it.
#[derive(Debug)]
pub(super) struct Invalid {
	start_offset: usize,
	pos: SourcePos,
}


impl Invalid {
	pub fn at(cursor: &Cursor) -> Self {
		Self { start_offset: cursor.offset(), pos: cursor.pos() }
	}


	pub fn visit(self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			// UTF-8 continuation byte.
			Some(c) if c & 0b1100_0000 == 0b1000_0000 => Transition::step(self),

			_ => {
				let bytes = cursor.slice_from(self.start_offset);
				let character = std::str::from_utf8(bytes)
					.ok()
					.and_then(|string| string.chars().next())
					.unwrap_or(std::char::REPLACEMENT_CHARACTER);

				Transition::resume_error(Root, Error::unexpected(character, self.pos))
			}
		}
	}
}


impl From<Invalid> for State {
	fn from(state: Invalid) -> State {
		State::Invalid(state)
	}
}
