mod automata;
mod cursor;
mod error;
#[cfg(test)]
mod tests;
mod token;

use crate::symbol;
use automata::Automata;
use super::{Source, SourcePos};
pub use cursor::Cursor;
pub use error::{Error, ErrorKind};
pub use token::{Keyword, Literal, Operator, Token, TokenKind};


/// The lexer for Lox source code.
/// Produces tokens and errors in-band. The last item is always the end of input token.
#[derive(Debug)]
pub struct Lexer<'a, 'b>(Automata<'a, 'b>);


impl<'a, 'b> Lexer<'a, 'b> {
	pub fn new(cursor: Cursor<'a>, interner: &'b mut symbol::Interner) -> Self {
		Self(Automata::new(cursor, interner))
	}
}


impl<'a, 'b> Iterator for Lexer<'a, 'b> {
	type Item = Result<Token, Error>;

	fn next(&mut self) -> Option<Self::Item> {
		self.0.next()
	}
}
