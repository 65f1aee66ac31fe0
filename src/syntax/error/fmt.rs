use std::fmt::{self, Display};

use super::Error;


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Lexer(error) => error.fmt(f),
			Self::Parser(error) => error.fmt(f),
		}
	}
}
