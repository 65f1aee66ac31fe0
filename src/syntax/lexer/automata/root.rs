use super::{
	symbol::SymbolChar,
	word::IsWord,
	Cursor,
	Error,
	Invalid,
	NumberLiteral,
	Slash,
	State,
	StringLiteral,
	Symbol,
	Token,
	Transition,
	Word,
};


/// The top level lexer state.
#[derive(Debug)]
pub(super) struct Root;


impl Root {
	pub fn visit(self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			// Whitespace.
			Some(c) if c.is_ascii_whitespace() => Transition::step(self),

			// Comments or division.
			Some(b'/') => Transition::step(Slash::at(cursor)),

			// String literals.
			Some(b'"') => Transition::step(StringLiteral::at(cursor)),

			// Number literals.
			Some(c) if c.is_ascii_digit() => Transition::resume(NumberLiteral::at(cursor)),

			// Identifier, keywords and word operators.
			Some(c) if c.is_word_start() => Transition::resume(Word::at(cursor)),

			// Multi-byte characters are never valid outside strings and comments.
			Some(c) if !c.is_ascii() => Transition::step(Invalid::at(cursor)),

			// Symbols.
			Some(c) => match SymbolChar::from_first(c) {
				SymbolChar::None => Transition::error(self, Error::unexpected(c as char, cursor.pos())),

				SymbolChar::Single(kind) => Transition::produce(
					self,
					Token::new(kind, cursor.slice_through(cursor.offset()), cursor.pos()),
				),

				SymbolChar::Double { first } => Transition::step(Symbol::from_first(first, cursor)),
			},

			// Eof.
			None => Transition::resume_produce(self, Token::eof(cursor.pos())),
		}
	}
}


impl From<Root> for State {
	fn from(state: Root) -> State {
		State::Root(state)
	}
}
