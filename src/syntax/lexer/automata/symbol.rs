use super::{
	Cursor,
	Operator,
	Root,
	SourcePos,
	State,
	Token,
	TokenKind,
	Transition,
};


/// The state for lexing two-character symbols.
#[derive(Debug)]
pub(super) struct Symbol {
	first: u8,
	start_offset: usize,
	pos: SourcePos,
}


impl Symbol {
	pub fn from_first(first: u8, cursor: &Cursor) -> Self {
		Self { first, start_offset: cursor.offset(), pos: cursor.pos() }
	}


	pub fn visit(self, cursor: &Cursor) -> Transition {
		let double = |op| Transition::produce(
			Root,
			Token::new(TokenKind::Operator(op), cursor.slice_through(self.start_offset), self.pos),
		);
		let single = |op| Transition::resume_produce(
			Root,
			Token::new(TokenKind::Operator(op), cursor.slice_from(self.start_offset), self.pos),
		);

		match (self.first, cursor.peek()) {
			(b'>', Some(b'=')) => double(Operator::GreaterEquals),
			(b'>', _) => single(Operator::Greater),

			(b'<', Some(b'=')) => double(Operator::LowerEquals),
			(b'<', _) => single(Operator::Lower),

			(b'=', Some(b'=')) => double(Operator::Equals),
			(b'=', _) => single(Operator::Assign),

			(b'!', Some(b'=')) => double(Operator::NotEquals),
			(b'!', _) => single(Operator::Not),

			// We must have covered all possibilites for the first character. The peeked
			// character is wildcarded, which will cover everthing including EOF (None).
			_ => unreachable!("invalid first character in symbol state"),
		}
	}
}


impl From<Symbol> for State {
	fn from(state: Symbol) -> State {
		Self::Symbol(state)
	}
}


/// Helper for symbols.
pub enum SymbolChar {
	/// Not a symbol character.
	None,
	/// Some symbols are single characters. We can produce them straight away.
	Single(TokenKind),
	/// Others have two characters, so we must handle those separately.
	Double { first: u8 },
}


impl SymbolChar {
	pub fn from_first(first: u8) -> Self {
		let token = Self::Single;
		let operator = |op| token(TokenKind::Operator(op));
		let double = |c| Self::Double { first: c };

		match first {
			// Single character.
			b'+' => operator(Operator::Plus),
			b'-' => operator(Operator::Minus),
			b'*' => operator(Operator::Times),
			b'%' => operator(Operator::Mod),
			b'.' => token(TokenKind::Dot),
			b',' => token(TokenKind::Comma),
			b';' => token(TokenKind::Semicolon),
			b'(' => token(TokenKind::OpenParens),
			b')' => token(TokenKind::CloseParens),
			b'{' => token(TokenKind::OpenBrace),
			b'}' => token(TokenKind::CloseBrace),

			// Double character.
			b'>' => double(first),
			b'<' => double(first),
			b'=' => double(first),
			b'!' => double(first),

			// Not a symbol character:
			_ => SymbolChar::None,
		}
	}
}
