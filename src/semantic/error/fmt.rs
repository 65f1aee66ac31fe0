use std::fmt::Display as _;

use super::{Errors, Error, ErrorKind};
use crate::{
	fmt::Display,
	symbol,
};


impl<'a> Display<'a> for ErrorKind {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::DuplicateVariable(symbol) => {
				"at '".fmt(f)?;
				symbol.fmt(f, context)?;
				"': Already a variable with this name in this scope.".fmt(f)
			}

			Self::SelfReference(symbol) => {
				"at '".fmt(f)?;
				symbol.fmt(f, context)?;
				"': Can't read local variable in its own initializer.".fmt(f)
			}

			Self::ReturnOutsideFunction => "at 'return': Can't return from top-level code.".fmt(f),

			Self::BreakOutsideLoop => "at 'break': Can't use 'break' outside of a loop.".fmt(f),

			Self::ContinueOutsideLoop => {
				"at 'continue': Can't use 'continue' outside of a loop.".fmt(f)
			}

			Self::ReturnValueInInitializer => {
				"at 'return': Can't return a value from an initializer.".fmt(f)
			}

			Self::ThisOutsideClass => "at 'this': Can't use 'this' outside of a class.".fmt(f),
		}
	}
}


impl<'a> Display<'a> for Error {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		write!(f, "[line {}] Error ", self.pos.line)?;
		self.kind.fmt(f, context)
	}
}


/// One error per line.
impl<'a> Display<'a> for Errors {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		crate::fmt::sep_by(
			self.0.iter(),
			f,
			|error, f| Display::fmt(error, f, context),
			"\n",
		)
	}
}


/// We need this in order to be able to implement std::error::Error.
impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		Display::fmt(self, f, &symbol::Interner::new())
	}
}
