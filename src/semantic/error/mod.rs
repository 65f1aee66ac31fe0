mod fmt;

use super::{Symbol, SourcePos};


/// A collection of semantic errors.
#[derive(Debug, Default)]
pub struct Errors(pub Vec<Error>);


impl IntoIterator for Errors {
	type Item = Error;
	type IntoIter = std::vec::IntoIter<Error>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}


/// The kind of semantic error.
#[derive(Debug)]
pub enum ErrorKind {
	/// Variable declared with the same name twice in the same local scope.
	/// Includes function parameters.
	DuplicateVariable(Symbol),
	/// Local variable read in its own initializer.
	SelfReference(Symbol),
	/// Return statement outside function.
	ReturnOutsideFunction,
	/// Break statement outside loop.
	BreakOutsideLoop,
	/// Continue statement outside loop.
	ContinueOutsideLoop,
	/// Return statement with a value in a class initializer.
	ReturnValueInInitializer,
	/// This keyword outside of a class.
	ThisOutsideClass,
}


/// A semantic error.
#[derive(Debug)]
pub struct Error {
	pub kind: ErrorKind,
	pub pos: SourcePos,
}


impl Error {
	/// Variable declared with the same name twice in the same local scope.
	pub fn duplicate_variable(symbol: Symbol, pos: SourcePos) -> Self {
		Self {
			kind: ErrorKind::DuplicateVariable(symbol),
			pos
		}
	}


	/// Local variable read in its own initializer.
	pub fn self_reference(symbol: Symbol, pos: SourcePos) -> Self {
		Self {
			kind: ErrorKind::SelfReference(symbol),
			pos
		}
	}


	/// Return statement outside function.
	pub fn return_outside_function(pos: SourcePos) -> Self {
		Self {
			kind: ErrorKind::ReturnOutsideFunction,
			pos
		}
	}


	/// Break statement outside loop.
	pub fn break_outside_loop(pos: SourcePos) -> Self {
		Self {
			kind: ErrorKind::BreakOutsideLoop,
			pos
		}
	}


	/// Continue statement outside loop.
	pub fn continue_outside_loop(pos: SourcePos) -> Self {
		Self {
			kind: ErrorKind::ContinueOutsideLoop,
			pos
		}
	}


	pub fn return_value_in_initializer(pos: SourcePos) -> Self {
		Self {
			kind: ErrorKind::ReturnValueInInitializer,
			pos
		}
	}


	/// This keyword outside of a class.
	pub fn this_outside_class(pos: SourcePos) -> Self {
		Self {
			kind: ErrorKind::ThisOutsideClass,
			pos
		}
	}
}


impl std::error::Error for Error {}
