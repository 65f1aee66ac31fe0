mod fmt;

use super::{SourcePos, Token};


/// A parser error.
#[derive(Debug)]
pub enum Error {
	/// Unexpected token, and a description of what was expected instead.
	Unexpected { token: Token, expected: &'static str },
	/// The left hand side of an assignment is not a variable or a property.
	InvalidAssignment { token: Token },
	/// Function declaration with more than the maximum number of parameters.
	TooManyParameters { token: Token },
	/// Function call with more than the maximum number of arguments.
	TooManyArguments { token: Token },
	/// Break or continue statement outside of a loop.
	OutsideLoop { token: Token },
}


impl Error {
	/// Create an error signaling an unexpected token, and what was expected.
	pub fn unexpected(token: Token, expected: &'static str) -> Self {
		Self::Unexpected { token, expected }
	}


	/// Create an error signaling an invalid assignment target. The token is the `=`.
	pub fn invalid_assignment(token: Token) -> Self {
		Self::InvalidAssignment { token }
	}


	pub fn too_many_parameters(token: Token) -> Self {
		Self::TooManyParameters { token }
	}


	pub fn too_many_arguments(token: Token) -> Self {
		Self::TooManyArguments { token }
	}


	/// Create an error signaling a loop control statement outside of a loop.
	pub fn outside_loop(token: Token) -> Self {
		Self::OutsideLoop { token }
	}


	/// The offending token.
	pub fn token(&self) -> &Token {
		match self {
			Self::Unexpected { token, .. }
			| Self::InvalidAssignment { token }
			| Self::TooManyParameters { token }
			| Self::TooManyArguments { token }
			| Self::OutsideLoop { token } => token,
		}
	}


	pub fn pos(&self) -> SourcePos {
		self.token().pos
	}
}


impl std::error::Error for Error {}
