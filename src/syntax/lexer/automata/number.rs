use super::{
	Cursor,
	Error,
	Literal,
	Root,
	SourcePos,
	State,
	Token,
	TokenKind,
	Transition,
};


/// The state for lexing number literals: digits, optionally followed by a dot and more
/// digits.
#[derive(Debug)]
pub(super) struct NumberLiteral {
	start_offset: usize,
	consumed_decimal: bool,
	pos: SourcePos,
}


impl NumberLiteral {
	pub fn at(cursor: &Cursor) -> Self {
		Self {
			start_offset: cursor.offset(),
			consumed_decimal: false,
			pos: cursor.pos(),
		}
	}


	pub fn visit(mut self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			// Consume digits.
			Some(value) if value.is_ascii_digit() => Transition::step(self),

			// A dot is part of the number only when followed by a digit.
			Some(b'.') if !self.consumed_decimal && cursor.peek_next().map_or(false, |c| c.is_ascii_digit()) => {
				self.consumed_decimal = true;
				Transition::step(self)
			}

			// Stop and produce if a non-digit is found, including EOF.
			_ => match self.parse(cursor) {
				Ok(token) => Transition::resume_produce(Root, token),
				Err(error) => Transition::resume_error(Root, error),
			},
		}
	}


	/// Parse the consumed characters.
	fn parse(&self, cursor: &Cursor) -> Result<Token, Error> {
		let number = cursor.slice_from(self.start_offset);

		// There is no method in std to parse a number from a byte array.
		let number_str = std::str::from_utf8(number)
			.map_err(|_| Error::invalid_number(number, self.pos))?;

		match number_str.parse() {
			Ok(float) => Ok(
				Token::new(TokenKind::Literal(Literal::Number(float)), number, self.pos)
			),
			Err(_) => Err(Error::invalid_number(number, self.pos)),
		}
	}
}


impl From<NumberLiteral> for State {
	fn from(state: NumberLiteral) -> State {
		State::NumberLiteral(state)
	}
}
