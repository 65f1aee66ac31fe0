mod fmt;

use super::SourcePos;


/// The kind of lexical error.
#[derive(Debug)]
pub enum ErrorKind {
	/// Unexpected character.
	Unexpected(char),
	/// String literal missing the closing quote.
	UnterminatedString,
	/// Block comment missing the closing delimiter.
	UnterminatedComment,
	/// Invalid number literal.
	InvalidNumber(Box<[u8]>),
}


/// A lexical error.
#[derive(Debug)]
pub struct Error {
	pub error: ErrorKind,
	pub pos: SourcePos,
}


impl std::error::Error for Error {}


impl Error {
	pub fn unexpected(input: char, pos: SourcePos) -> Self {
		Self { error: ErrorKind::Unexpected(input), pos }
	}

	pub fn unterminated_string(pos: SourcePos) -> Self {
		Self { error: ErrorKind::UnterminatedString, pos }
	}

	pub fn unterminated_comment(pos: SourcePos) -> Self {
		Self { error: ErrorKind::UnterminatedComment, pos }
	}

	pub fn invalid_number(number: &[u8], pos: SourcePos) -> Self {
		Self {
			error: ErrorKind::InvalidNumber(number.into()),
			pos,
		}
	}
}
