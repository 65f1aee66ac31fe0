use std::fmt::Display as _;

use crate::{
	fmt::Display,
	symbol,
};
use super::{Class, Function, Instance, Value};


/// Format a number the way print does: integral values have no fractional part.
fn fmt_number(number: f64, f: &mut std::fmt::Formatter) -> std::fmt::Result {
	if number == f64::INFINITY {
		"Infinity".fmt(f)
	} else if number == f64::NEG_INFINITY {
		"-Infinity".fmt(f)
	} else {
		number.fmt(f)
	}
}


impl<'a> Display<'a> for Function {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::Lox(fun) => match fun.decl.name {
				Some(name) => {
					"<fn ".fmt(f)?;
					name.fmt(f, context)?;
					">".fmt(f)
				}

				None => "<fn>".fmt(f),
			},

			Self::Native(_) => "<native fn>".fmt(f),
		}
	}
}


impl<'a> Display<'a> for Class {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		self.name.fmt(f, context)
	}
}


impl<'a> Display<'a> for Instance {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		self.class().name.fmt(f, context)?;
		" instance".fmt(f)
	}
}


/// The printable form of a value, as shown by the print statement.
impl<'a> Display<'a> for Value {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::Nil => "nil".fmt(f),
			Self::Bool(b) => b.fmt(f),
			Self::Number(n) => fmt_number(*n, f),
			Self::String(string) => String::from_utf8_lossy(string).fmt(f),
			Self::Function(fun) => fun.fmt(f, context),
			Self::Class(class) => class.fmt(f, context),
			Self::Instance(instance) => instance.fmt(f, context),
		}
	}
}


/// The generic textual form of a value, used when concatenating to strings. Unlike the
/// printable form, finite numbers always show a fractional part.
#[derive(Debug)]
pub struct Generic<'v>(pub &'v Value);


impl<'a, 'v> Display<'a> for Generic<'v> {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self.0 {
			Value::Number(n) if n.is_finite() => write!(f, "{:?}", n),
			value => value.fmt(f, context),
		}
	}
}
