use std::fmt::Display as _;

use super::{
	Ast,
	BinaryOp,
	Block,
	Expr,
	Function,
	Literal,
	LogicalOp,
	Statement,
	UnaryOp,
};
use crate::{
	fmt::{self, Display},
	symbol,
};


/// The context for displaying AST nodes, which are printed in a parenthesized prefix
/// notation.
pub type Context<'a> = &'a symbol::Interner;


impl std::fmt::Display for Literal {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Nil => "nil".fmt(f),
			Self::Bool(b) => b.fmt(f),
			Self::Number(n) => n.fmt(f),
			Self::String(s) => String::from_utf8_lossy(s).fmt(f),
		}
	}
}


impl std::fmt::Display for UnaryOp {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Minus => "-".fmt(f),
			Self::Not => "!".fmt(f),
		}
	}
}


impl std::fmt::Display for BinaryOp {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Plus => "+",
			Self::Minus => "-",
			Self::Times => "*",
			Self::Div => "/",
			Self::Mod => "%",
			Self::Equals => "==",
			Self::NotEquals => "!=",
			Self::Greater => ">",
			Self::GreaterEquals => ">=",
			Self::Lower => "<",
			Self::LowerEquals => "<=",
		}
		.fmt(f)
	}
}


impl std::fmt::Display for LogicalOp {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::And => "and".fmt(f),
			Self::Or => "or".fmt(f),
		}
	}
}


/// Format a parenthesized form, with the given head and space-separated items.
fn parenthesize<'a, T, I>(
	f: &mut std::fmt::Formatter,
	head: impl std::fmt::Display,
	items: I,
	context: Context<'a>,
) -> std::fmt::Result
where
	I: IntoIterator<Item = T>,
	T: Display<'a, Context = Context<'a>>,
{
	write!(f, "({}", head)?;

	for item in items {
		" ".fmt(f)?;
		item.fmt(f, context)?;
	}

	")".fmt(f)
}


impl<'a> Display<'a> for Block {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		parenthesize(f, "block", self.0.iter(), context)
	}
}


impl<'a> Display<'a> for Function {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		"(fun ".fmt(f)?;

		if let Some(name) = self.name {
			name.fmt(f, context)?;
			" ".fmt(f)?;
		}

		"(".fmt(f)?;
		fmt::sep_by(
			self.params.iter(),
			f,
			|(param, _), f| param.fmt(f, context),
			" ",
		)?;
		")".fmt(f)?;

		for statement in self.body.0.iter() {
			" ".fmt(f)?;
			statement.fmt(f, context)?;
		}

		")".fmt(f)
	}
}


impl<'a> Display<'a> for Expr {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::Literal { literal, .. } => literal.fmt(f),

			Self::UnaryOp { op, operand, .. } => parenthesize(f, op, Some(&**operand), context),

			Self::BinaryOp { left, op, right, .. } => parenthesize(f, op, [&**left, &**right].iter(), context),

			Self::Logical { left, op, right, .. } => parenthesize(f, op, [&**left, &**right].iter(), context),

			Self::Grouping { expr, .. } => parenthesize(f, "group", Some(&**expr), context),

			Self::Variable { identifier, .. } => identifier.fmt(f, context),

			Self::Assign { identifier, value, .. } => {
				"(= ".fmt(f)?;
				identifier.fmt(f, context)?;
				" ".fmt(f)?;
				value.fmt(f, context)?;
				")".fmt(f)
			}

			Self::Call { callee, args, .. } => {
				"(call ".fmt(f)?;
				callee.fmt(f, context)?;

				for arg in args.iter() {
					" ".fmt(f)?;
					arg.fmt(f, context)?;
				}

				")".fmt(f)
			}

			Self::Function(function) => function.fmt(f, context),

			Self::Get { object, field, .. } => {
				"(. ".fmt(f)?;
				object.fmt(f, context)?;
				" ".fmt(f)?;
				field.fmt(f, context)?;
				")".fmt(f)
			}

			Self::Set { object, field, value, .. } => {
				"(= (. ".fmt(f)?;
				object.fmt(f, context)?;
				" ".fmt(f)?;
				field.fmt(f, context)?;
				") ".fmt(f)?;
				value.fmt(f, context)?;
				")".fmt(f)
			}

			Self::This { .. } => "this".fmt(f),
		}
	}
}


impl<'a> Display<'a> for Statement {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::Expr(expr) => parenthesize(f, ";", Some(expr), context),

			Self::Print { expr, .. } => parenthesize(f, "print", Some(expr), context),

			Self::Var { identifier, init, .. } => {
				"(var ".fmt(f)?;
				identifier.fmt(f, context)?;

				if let Some(init) = init {
					" = ".fmt(f)?;
					init.fmt(f, context)?;
				}

				")".fmt(f)
			}

			Self::Block { block, .. } => block.fmt(f, context),

			Self::If { condition, then, otherwise: None, .. } => {
				"(if ".fmt(f)?;
				condition.fmt(f, context)?;
				" ".fmt(f)?;
				then.fmt(f, context)?;
				")".fmt(f)
			}

			Self::If { condition, then, otherwise: Some(otherwise), .. } => {
				"(if-else ".fmt(f)?;
				condition.fmt(f, context)?;
				" ".fmt(f)?;
				then.fmt(f, context)?;
				" ".fmt(f)?;
				otherwise.fmt(f, context)?;
				")".fmt(f)
			}

			Self::While { condition, body, .. } => {
				"(while ".fmt(f)?;
				condition.fmt(f, context)?;
				" ".fmt(f)?;
				body.fmt(f, context)?;
				")".fmt(f)
			}

			Self::For { init, condition, increment, body, .. } => {
				"(for ".fmt(f)?;

				match init {
					Some(init) => init.fmt(f, context)?,
					None => "_".fmt(f)?,
				}
				" ".fmt(f)?;

				match condition {
					Some(condition) => condition.fmt(f, context)?,
					None => "_".fmt(f)?,
				}
				" ".fmt(f)?;

				match increment {
					Some(increment) => increment.fmt(f, context)?,
					None => "_".fmt(f)?,
				}
				" ".fmt(f)?;

				body.fmt(f, context)?;
				")".fmt(f)
			}

			Self::Break { .. } => "(break)".fmt(f),

			Self::Continue { .. } => "(continue)".fmt(f),

			Self::Return { value, .. } => parenthesize(f, "return", value, context),

			Self::Function(function) => function.fmt(f, context),

			Self::Class { identifier, methods, .. } => {
				"(class ".fmt(f)?;
				identifier.fmt(f, context)?;

				for method in methods.iter() {
					" ".fmt(f)?;
					method.fmt(f, context)?;
				}

				")".fmt(f)
			}
		}
	}
}


impl<'a> Display<'a> for Ast {
	type Context = Context<'a>;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		fmt::sep_by(
			self.statements.0.iter(),
			f,
			|statement, f| statement.fmt(f, context),
			"\n",
		)
	}
}
