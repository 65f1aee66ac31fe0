use std::fmt::{self, Display};

use super::{Error, ErrorKind};


impl Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Unexpected(value) => write!(f, "Unexpected character '{}'", value.escape_debug()),

			Self::UnterminatedString => "Unterminated string".fmt(f),

			Self::UnterminatedComment => "Unterminated comment".fmt(f),

			Self::InvalidNumber(number) => {
				write!(f, "Invalid number: {}", String::from_utf8_lossy(number))
			}
		}
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "[line {}] Error: {}.", self.pos.line, self.error)
	}
}
