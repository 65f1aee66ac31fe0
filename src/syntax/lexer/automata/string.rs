use super::{Cursor, Error, Literal, Root, SourcePos, State, Token, TokenKind, Transition};


/// The state for lexing string literals. There are no escape sequences, and literals may
/// span multiple lines.
#[derive(Debug)]
pub(super) struct StringLiteral {
	/// The offset of the opening quote.
	start_offset: usize,
	/// The position of the literal.
	pos: SourcePos,
}


impl StringLiteral {
	pub fn at(cursor: &Cursor) -> Self {
		Self { start_offset: cursor.offset(), pos: cursor.pos() }
	}


	pub fn visit(self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			// EOF while scanning a literal is always an error.
			None => Transition::resume_error(Root, Error::unterminated_string(self.pos)),

			// Closing quote.
			Some(b'"') => {
				let lexeme = cursor.slice_through(self.start_offset);
				let value = &lexeme[1 .. lexeme.len() - 1];

				Transition::produce(
					Root,
					Token::new(TokenKind::Literal(Literal::String(value.into())), lexeme, self.pos),
				)
			}

			// Ordinary character, including newlines.
			Some(_) => Transition::step(self),
		}
	}
}


impl From<StringLiteral> for State {
	fn from(state: StringLiteral) -> State {
		State::StringLiteral(state)
	}
}
