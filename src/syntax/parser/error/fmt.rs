use std::fmt::{self, Display};

use super::{super::MAX_ARGS, Error};


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let token = self.token();

		write!(f, "[line {}] Error ", token.pos.line)?;

		if token.is_eof() {
			"at end: ".fmt(f)?;
		} else {
			write!(f, "at '{}': ", String::from_utf8_lossy(&token.lexeme))?;
		}

		match self {
			Self::Unexpected { expected, .. } => write!(f, "Expect {}.", expected),

			Self::InvalidAssignment { .. } => "Invalid assignment target.".fmt(f),

			Self::TooManyParameters { .. } => {
				write!(f, "Can't have more than {} parameters.", MAX_ARGS)
			}

			Self::TooManyArguments { .. } => {
				write!(f, "Can't have more than {} arguments.", MAX_ARGS)
			}

			Self::OutsideLoop { token } => {
				write!(f, "Can't use '{}' outside of a loop.", String::from_utf8_lossy(&token.lexeme))
			}
		}
	}
}
