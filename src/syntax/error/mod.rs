mod fmt;

use super::{lexer, parser};


/// Syntax error.
#[derive(Debug)]
pub enum Error {
	Lexer(lexer::Error),
	Parser(parser::Error),
}


impl Error {
	/// The line where the error was found.
	pub fn line(&self) -> u32 {
		match self {
			Self::Lexer(error) => error.pos.line,
			Self::Parser(error) => error.pos().line,
		}
	}
}


impl std::error::Error for Error {}
