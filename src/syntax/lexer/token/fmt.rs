use std::fmt::Display as _;

use super::{Keyword, Literal, Operator, Token, TokenKind};
use crate::{
	fmt::Display,
	symbol,
};


impl std::fmt::Display for Keyword {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Class => "class",
			Self::Else => "else",
			Self::For => "for",
			Self::Fun => "fun",
			Self::If => "if",
			Self::Print => "print",
			Self::Return => "return",
			Self::Super => "super",
			Self::This => "this",
			Self::Var => "var",
			Self::While => "while",
			Self::Break => "break",
			Self::Continue => "continue",
		}
		.fmt(f)
	}
}


impl std::fmt::Display for Literal {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Nil => "nil".fmt(f),
			Self::True => "true".fmt(f),
			Self::False => "false".fmt(f),
			Self::Number(n) => write!(f, "{:?}", n),
			Self::String(s) => write!(f, "\"{}\"", String::from_utf8_lossy(s)),
		}
	}
}


impl std::fmt::Display for Operator {
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
			Self::Not => "!",
			Self::And => "and",
			Self::Or => "or",
			Self::Assign => "=",
		}
		.fmt(f)
	}
}


impl<'a> Display<'a> for TokenKind {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::Identifier(s) => {
				"identifier ".fmt(f)?;
				s.fmt(f, context)
			}
			Self::Keyword(kw) => write!(f, "keyword {}", kw),
			Self::Operator(op) => write!(f, "operator {}", op),
			Self::Literal(lit) => write!(f, "literal {}", lit),
			Self::Comma => ",".fmt(f),
			Self::Dot => ".".fmt(f),
			Self::Semicolon => ";".fmt(f),
			Self::OpenParens => "(".fmt(f),
			Self::CloseParens => ")".fmt(f),
			Self::OpenBrace => "{".fmt(f),
			Self::CloseBrace => "}".fmt(f),
			Self::Eof => "end of input".fmt(f),
		}
	}
}


impl<'a> Display<'a> for Token {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		write!(f, "{}:\t", self.pos)?;
		self.kind.fmt(f, context)
	}
}
