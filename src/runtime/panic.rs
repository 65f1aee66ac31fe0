use std::{
	fmt::Display as _,
	io,
};

use crate::{
	fmt::{self, Display},
	symbol::{self, Symbol},
};
use super::{program::BinaryOp, SourcePos, Value};


/// A runtime fault. Aborts the execution of the current program.
#[derive(Debug)]
pub enum Panic {
	/// Binary operator applied to unsupported operands.
	InvalidOperands {
		operator: BinaryOp,
		left: Value,
		right: Value,
		pos: SourcePos,
	},
	/// Unary minus applied to a non-number.
	InvalidOperand { pos: SourcePos },
	UndeclaredVariable { identifier: Symbol, pos: SourcePos },
	UnassignedVariable { identifier: Symbol, pos: SourcePos },
	/// Assignment to a global that was never declared.
	UndeclaredAssignment { identifier: Symbol, pos: SourcePos },
	/// Call of a value that is not a function or class.
	InvalidCall { pos: SourcePos },
	InvalidArgs {
		expected: usize,
		got: usize,
		pos: SourcePos,
	},
	/// Property access on a value that is not an instance.
	NotAnInstance { pos: SourcePos },
	UndefinedProperty { field: Symbol, pos: SourcePos },
	StackOverflow { pos: SourcePos },
	/// Failure to write the program output.
	Io(io::Error),
}


impl Panic {
	pub fn invalid_operands(operator: BinaryOp, left: Value, right: Value, pos: SourcePos) -> Self {
		Self::InvalidOperands { operator, left, right, pos }
	}


	pub fn invalid_operand(pos: SourcePos) -> Self {
		Self::InvalidOperand { pos }
	}


	pub fn undeclared_variable(identifier: Symbol, pos: SourcePos) -> Self {
		Self::UndeclaredVariable { identifier, pos }
	}


	pub fn unassigned_variable(identifier: Symbol, pos: SourcePos) -> Self {
		Self::UnassignedVariable { identifier, pos }
	}


	pub fn undeclared_assignment(identifier: Symbol, pos: SourcePos) -> Self {
		Self::UndeclaredAssignment { identifier, pos }
	}


	pub fn invalid_call(pos: SourcePos) -> Self {
		Self::InvalidCall { pos }
	}


	pub fn invalid_args(expected: usize, got: usize, pos: SourcePos) -> Self {
		Self::InvalidArgs { expected, got, pos }
	}


	pub fn not_an_instance(pos: SourcePos) -> Self {
		Self::NotAnInstance { pos }
	}


	pub fn undefined_property(field: Symbol, pos: SourcePos) -> Self {
		Self::UndefinedProperty { field, pos }
	}


	pub fn stack_overflow(pos: SourcePos) -> Self {
		Self::StackOverflow { pos }
	}


	/// The position of the offending token, if any.
	pub fn pos(&self) -> Option<SourcePos> {
		match self {
			Self::InvalidOperands { pos, .. }
			| Self::InvalidOperand { pos }
			| Self::UndeclaredVariable { pos, .. }
			| Self::UnassignedVariable { pos, .. }
			| Self::UndeclaredAssignment { pos, .. }
			| Self::InvalidCall { pos }
			| Self::InvalidArgs { pos, .. }
			| Self::NotAnInstance { pos }
			| Self::UndefinedProperty { pos, .. }
			| Self::StackOverflow { pos } => Some(*pos),

			Self::Io(_) => None,
		}
	}
}


impl From<io::Error> for Panic {
	fn from(error: io::Error) -> Self {
		Self::Io(error)
	}
}


impl<'a> Display<'a> for Panic {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::InvalidOperands { operator, left, right, .. } => write!(
				f,
				"Operator '{}' is not defined for operands '{}' and '{}'.",
				operator,
				fmt::Show(left, context),
				fmt::Show(right, context),
			)?,

			Self::InvalidOperand { .. } => "Operand must be a number.".fmt(f)?,

			Self::UndeclaredVariable { identifier, .. } => write!(
				f,
				"Undefined variable '{}'.",
				fmt::Show(identifier, context),
			)?,

			Self::UnassignedVariable { identifier, .. } => write!(
				f,
				"Unassigned variable '{}'.",
				fmt::Show(identifier, context),
			)?,

			Self::UndeclaredAssignment { identifier, .. } => write!(
				f,
				"Undefined variable '{}'.",
				fmt::Show(identifier, context),
			)?,

			Self::InvalidCall { .. } => "Can only call functions and classes.".fmt(f)?,

			Self::InvalidArgs { expected, got, .. } => {
				write!(f, "Expected {} arguments but got {}.", expected, got)?
			}

			Self::NotAnInstance { .. } => "Only instances have properties.".fmt(f)?,

			Self::UndefinedProperty { field, .. } => write!(
				f,
				"Undefined property '{}'.",
				fmt::Show(field, context),
			)?,

			Self::StackOverflow { .. } => "Stack overflow.".fmt(f)?,

			Self::Io(error) => write!(f, "Failed to write output: {}", error)?,
		}

		match self.pos() {
			Some(pos) => write!(f, "\n[line {}]", pos.line),
			None => Ok(()),
		}
	}
}


/// We need this in order to be able to implement std::error::Error.
impl std::fmt::Display for Panic {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		Display::fmt(self, f, &symbol::Interner::new())
	}
}


impl std::error::Error for Panic { }
