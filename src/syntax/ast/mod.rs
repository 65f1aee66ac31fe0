pub mod fmt;

use std::path::Path;

use super::{lexer, SourcePos};
pub use crate::symbol::Symbol;


/// A block is a list of statements, constituting a new scope.
#[derive(Debug, Default)]
pub struct Block(pub Box<[Statement]>);


impl From<Box<[Statement]>> for Block {
	fn from(block: Box<[Statement]>) -> Self {
		Self(block)
	}
}


impl From<Vec<Statement>> for Block {
	fn from(block: Vec<Statement>) -> Self {
		Self(block.into_boxed_slice())
	}
}


/// Literals of all types in the language.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
	Nil,
	Bool(bool),
	Number(f64),
	String(Box<[u8]>),
}


impl From<lexer::Literal> for Literal {
	fn from(literal: lexer::Literal) -> Self {
		match literal {
			lexer::Literal::Nil => Literal::Nil,
			lexer::Literal::True => Literal::Bool(true),
			lexer::Literal::False => Literal::Bool(false),
			lexer::Literal::Number(number) => Literal::Number(number),
			lexer::Literal::String(string) => Literal::String(string),
		}
	}
}


/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
	Minus, // -
	Not,   // !
}


/// Warning, the following instance may panic if used with unmapped operators.
impl From<lexer::Operator> for UnaryOp {
	fn from(op: lexer::Operator) -> Self {
		match op {
			lexer::Operator::Minus => UnaryOp::Minus,
			lexer::Operator::Not => UnaryOp::Not,
			_ => panic!("invalid operator"),
		}
	}
}


/// Binary operators.
/// Assignment and property access are not represented as operators, but directly as
/// expressions instead. Short-circuiting operators are LogicalOp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
	Plus,  // +
	Minus, // -
	Times, // *
	Div,   // /
	Mod,   // %

	Equals,        // ==
	NotEquals,     // !=
	Greater,       // >
	GreaterEquals, // >=
	Lower,         // <
	LowerEquals,   // <=
}


/// Warning, the following instance may panic if used with unmapped operators.
impl From<lexer::Operator> for BinaryOp {
	fn from(op: lexer::Operator) -> Self {
		match op {
			lexer::Operator::Plus => BinaryOp::Plus,
			lexer::Operator::Minus => BinaryOp::Minus,
			lexer::Operator::Times => BinaryOp::Times,
			lexer::Operator::Div => BinaryOp::Div,
			lexer::Operator::Mod => BinaryOp::Mod,
			lexer::Operator::Equals => BinaryOp::Equals,
			lexer::Operator::NotEquals => BinaryOp::NotEquals,
			lexer::Operator::Greater => BinaryOp::Greater,
			lexer::Operator::GreaterEquals => BinaryOp::GreaterEquals,
			lexer::Operator::Lower => BinaryOp::Lower,
			lexer::Operator::LowerEquals => BinaryOp::LowerEquals,
			_ => panic!("invalid operator"),
		}
	}
}


/// Short-circuiting operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
	And, // and
	Or,  // or
}


/// Warning, the following instance may panic if used with unmapped operators.
impl From<lexer::Operator> for LogicalOp {
	fn from(op: lexer::Operator) -> Self {
		match op {
			lexer::Operator::And => LogicalOp::And,
			lexer::Operator::Or => LogicalOp::Or,
			_ => panic!("invalid operator"),
		}
	}
}


/// A function declaration, method or anonymous function.
#[derive(Debug)]
pub struct Function {
	/// Anonymous functions have no name.
	pub name: Option<Symbol>,
	pub params: Box<[(Symbol, SourcePos)]>,
	pub body: Block,
	pub pos: SourcePos,
}


/// Expressions of all kinds in the language.
#[derive(Debug)]
pub enum Expr {
	Literal {
		literal: Literal,
		pos: SourcePos,
	},
	UnaryOp {
		op: UnaryOp,
		operand: Box<Expr>,
		pos: SourcePos,
	},
	BinaryOp {
		left: Box<Expr>,
		op: BinaryOp,
		right: Box<Expr>,
		pos: SourcePos,
	},
	/// Short-circuiting operators.
	Logical {
		left: Box<Expr>,
		op: LogicalOp,
		right: Box<Expr>,
		pos: SourcePos,
	},
	/// Parenthesized expression.
	Grouping {
		expr: Box<Expr>,
		pos: SourcePos,
	},
	Variable {
		identifier: Symbol,
		pos: SourcePos,
	},
	Assign {
		identifier: Symbol,
		value: Box<Expr>,
		pos: SourcePos,
	},
	Call {
		callee: Box<Expr>,
		args: Box<[Expr]>,
		pos: SourcePos,
	},
	/// Anonymous function.
	Function(Box<Function>),
	/// Property access.
	Get {
		object: Box<Expr>,
		field: Symbol,
		pos: SourcePos,
	},
	/// Property assignment.
	Set {
		object: Box<Expr>,
		field: Symbol,
		value: Box<Expr>,
		pos: SourcePos,
	},
	/// The `this` keyword.
	This {
		pos: SourcePos,
	},
}


impl Expr {
	/// The source position of the expression's defining token.
	pub fn pos(&self) -> SourcePos {
		match self {
			Self::Literal { pos, .. }
			| Self::UnaryOp { pos, .. }
			| Self::BinaryOp { pos, .. }
			| Self::Logical { pos, .. }
			| Self::Grouping { pos, .. }
			| Self::Variable { pos, .. }
			| Self::Assign { pos, .. }
			| Self::Call { pos, .. }
			| Self::Get { pos, .. }
			| Self::Set { pos, .. }
			| Self::This { pos } => *pos,
			Self::Function(function) => function.pos,
		}
	}
}


/// Statements of all kinds in the language.
#[derive(Debug)]
pub enum Statement {
	Expr(Expr),
	Print {
		expr: Expr,
		pos: SourcePos,
	},
	/// Introduces an identifier, possibly without a value.
	Var {
		identifier: Symbol,
		init: Option<Expr>,
		pos: SourcePos,
	},
	Block {
		block: Block,
		pos: SourcePos,
	},
	If {
		condition: Expr,
		then: Box<Statement>,
		otherwise: Option<Box<Statement>>,
		pos: SourcePos,
	},
	While {
		condition: Expr,
		body: Box<Statement>,
		pos: SourcePos,
	},
	/// For loop. The increment runs after every iteration, including those ended by
	/// `continue`.
	For {
		init: Option<Box<Statement>>,
		condition: Option<Expr>,
		increment: Option<Expr>,
		body: Box<Statement>,
		pos: SourcePos,
	},
	Break {
		pos: SourcePos,
	},
	Continue {
		pos: SourcePos,
	},
	Return {
		value: Option<Expr>,
		pos: SourcePos,
	},
	Function(Function),
	Class {
		identifier: Symbol,
		methods: Box<[Function]>,
		pos: SourcePos,
	},
}


/// The abstract syntax tree for a source file.
#[derive(Debug)]
pub struct Ast {
	/// The source path.
	pub source: Box<Path>,
	/// The top level statements.
	pub statements: Block,
}
