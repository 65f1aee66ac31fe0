mod fmt;

use super::SourcePos;
use crate::symbol::Symbol;


/// All keywords in the language, except for operator keywords (and, or) and literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
	Class,
	Else,
	For,
	Fun,
	If,
	Print,
	Return,
	Super,
	This,
	Var,
	While,
	Break,
	Continue,
}


impl Keyword {
	/// Keywords that may start a declaration or statement. The parser synchronizes on
	/// those after an error.
	pub fn starts_statement(&self) -> bool {
		matches!(
			self,
			Self::Class
				| Self::Fun
				| Self::Var
				| Self::For
				| Self::If
				| Self::While
				| Self::Print
				| Self::Return
		)
	}
}


/// Literals for non-composite types.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
	Nil,
	True,
	False,
	Number(f64),
	// String literals are not interned because they probably won't be repeated very often.
	String(Box<[u8]>),
}


/// Operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
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

	Not, // !
	And, // and
	Or,  // or

	Assign, // =
}


impl Operator {
	/// Strict equality operators (==, !=).
	pub fn is_equality(&self) -> bool {
		matches!(self, Self::Equals | Self::NotEquals)
	}


	/// Non-strict comparison operators (>, >=, <, <=).
	pub fn is_comparison(&self) -> bool {
		matches!(
			self,
			Self::Lower | Self::LowerEquals | Self::Greater | Self::GreaterEquals
		)
	}


	/// Additive arithmetic operators (+, -).
	pub fn is_term(&self) -> bool {
		matches!(self, Self::Plus | Self::Minus)
	}


	/// Multiplicative arithmetic operators (*, /, %).
	pub fn is_factor(&self) -> bool {
		matches!(self, Self::Times | Self::Div | Self::Mod)
	}


	/// Unary operators (-, !)
	pub fn is_unary(&self) -> bool {
		matches!(self, Self::Not | Self::Minus)
	}


	/// Short-circuiting operators (and, or).
	pub fn is_logical(&self) -> bool {
		matches!(self, Self::And | Self::Or)
	}
}


/// All possible kinds of token in Lox.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
	Identifier(Symbol),
	Keyword(Keyword),
	Operator(Operator),
	Literal(Literal),

	Comma,     // ,
	Dot,       // .
	Semicolon, // ;

	OpenParens,  // (
	CloseParens, // )

	OpenBrace,  // {
	CloseBrace, // }

	/// End of input. Always the last token produced by the lexer.
	Eof,
}


impl TokenKind {
	/// Check if the token is a keyword that starts a declaration or statement.
	pub fn starts_statement(&self) -> bool {
		matches!(self, Self::Keyword(keyword) if keyword.starts_statement())
	}
}


/// A lexical token.
#[derive(Debug, Clone)]
pub struct Token {
	pub kind: TokenKind,
	/// The source text of the token.
	pub lexeme: Box<[u8]>,
	pub pos: SourcePos,
}


impl Token {
	pub fn new(kind: TokenKind, lexeme: &[u8], pos: SourcePos) -> Self {
		Self { kind, lexeme: lexeme.into(), pos }
	}


	/// The end of input token.
	pub fn eof(pos: SourcePos) -> Self {
		Self::new(TokenKind::Eof, b"", pos)
	}


	pub fn is_eof(&self) -> bool {
		self.kind == TokenKind::Eof
	}
}
