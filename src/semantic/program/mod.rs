use std::path::Path;

use super::SourcePos;
pub use crate::symbol::Symbol;
pub use crate::syntax::ast::{BinaryOp, Literal, LogicalOp, UnaryOp};


/// A block is a list of statements.
#[derive(Debug, Default)]
pub struct Block(pub Box<[Statement]>);


impl From<Box<[Statement]>> for Block {
	fn from(block: Box<[Statement]>) -> Self {
		Self(block)
	}
}


/// The role of a function, which determines how it may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
	Function,
	Anonymous,
	Method,
	/// The `init` method of a class. Always returns the instance.
	Initializer,
}


/// A function declaration, method or anonymous function.
#[derive(Debug)]
pub struct Function {
	pub name: Option<Symbol>,
	pub params: Box<[Symbol]>,
	/// The body shares the scope of the parameters.
	pub body: Block,
	pub kind: FunctionKind,
	pub pos: SourcePos,
}


/// Expressions of all kinds in the language.
/// Variable references carry their resolved scope depth: the number of scopes between
/// the usage and the declaration. Globals have no depth.
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
	Logical {
		left: Box<Expr>,
		op: LogicalOp,
		right: Box<Expr>,
		pos: SourcePos,
	},
	Variable {
		identifier: Symbol,
		depth: Option<u32>,
		pos: SourcePos,
	},
	Assign {
		identifier: Symbol,
		value: Box<Expr>,
		depth: Option<u32>,
		pos: SourcePos,
	},
	Call {
		callee: Box<Expr>,
		args: Box<[Expr]>,
		pos: SourcePos,
	},
	Function(Box<Function>),
	Get {
		object: Box<Expr>,
		field: Symbol,
		pos: SourcePos,
	},
	Set {
		object: Box<Expr>,
		field: Symbol,
		value: Box<Expr>,
		pos: SourcePos,
	},
	This {
		depth: Option<u32>,
		pos: SourcePos,
	},
}


/// Statements of all kinds in the language.
#[derive(Debug)]
pub enum Statement {
	Expr(Expr),
	Print(Expr),
	Var {
		identifier: Symbol,
		init: Option<Expr>,
	},
	Block(Block),
	If {
		condition: Expr,
		then: Box<Statement>,
		otherwise: Option<Box<Statement>>,
	},
	/// Both while and for loops. The initializer, if any, gets its own scope.
	Loop {
		init: Option<Box<Statement>>,
		condition: Option<Expr>,
		increment: Option<Expr>,
		body: Box<Statement>,
	},
	Break,
	Continue,
	Return(Option<Expr>),
	Function(Function),
	Class {
		identifier: Symbol,
		methods: Box<[Function]>,
	},
}


/// A statically correct (syntactically and semantically) Lox program.
#[derive(Debug)]
pub struct Program {
	/// The source path. May be something fictional, like "<stdin>".
	pub source: Box<Path>,
	/// The program.
	pub statements: Block,
}
