mod error;
#[cfg(test)]
mod tests;

use std::iter::Peekable;

use super::{
	ast,
	lexer::{Keyword, Operator, Token, TokenKind},
	SourcePos,
};
use crate::symbol::Symbol;
pub use error::Error;


/// Maximum number of parameters in a function, or arguments in a call.
const MAX_ARGS: usize = 255;


/// The parser may report multiple errors before finishing. Instead of allocating those in
/// an vector, we delegate such handling to the caller.
pub trait ErrorReporter {
	fn report(&mut self, error: Error);
}


impl<F> ErrorReporter for F
where
	F: FnMut(Error),
{
	fn report(&mut self, error: Error) {
		self(error)
	}
}


/// The parser for Lox syntax.
#[derive(Debug)]
pub struct Parser<I, E>
where
	I: Iterator<Item = Token>,
{
	cursor: Peekable<I>,
	/// The current token. Once the input is exhausted, this is always the EOF token.
	token: Token,
	/// How many tokens have been consumed so far.
	consumed: usize,
	/// How many loops enclose the current statement in the current function.
	loop_depth: u32,
	error_reporter: E,
}


impl<I, E> Parser<I, E>
where
	I: Iterator<Item = Token>,
	E: ErrorReporter,
{
	/// Create a new parser for the given input.
	pub fn new(mut cursor: I, error_reporter: E) -> Self {
		let token = cursor
			.next()
			.unwrap_or_else(|| Token::eof(SourcePos::default()));

		Self {
			cursor: cursor.peekable(),
			token,
			consumed: 0,
			loop_depth: 0,
			error_reporter,
		}
	}


	/// Parse the input, producing a top-level block. Declarations containing errors are
	/// reported and omitted from the result.
	pub fn parse(mut self) -> ast::Block {
		let mut statements = Vec::new();

		while !self.token.is_eof() {
			if let Some(statement) = self.parse_declaration() {
				statements.push(statement);
			}
		}

		statements.into()
	}


	/// Step the cursor, returning the previous token. Stepping past EOF is a no-op.
	fn step(&mut self) -> Token {
		match self.cursor.next() {
			Some(token) => {
				self.consumed += 1;
				std::mem::replace(&mut self.token, token)
			}

			None => self.token.clone(),
		}
	}


	fn check(&self, kind: &TokenKind) -> bool {
		&self.token.kind == kind
	}


	/// Consume the current token if it is of the given kind.
	fn consume(&mut self, kind: &TokenKind) -> bool {
		let matches = self.check(kind);

		if matches {
			self.step();
		}

		matches
	}


	/// Try and eat a token.
	fn eat<F, T>(&mut self, eat: F) -> Result<T, Error>
	where
		F: FnOnce(&Token) -> Result<T, Error>,
	{
		let value = eat(&self.token)?;
		self.step();
		Ok(value)
	}


	/// Consume the expected token, or produce an error.
	fn expect(&mut self, expected: TokenKind, message: &'static str) -> Result<Token, Error> {
		if self.check(&expected) {
			Ok(self.step())
		} else {
			Err(Error::unexpected(self.token.clone(), message))
		}
	}


	/// Whether the token after the current one is an identifier.
	fn peek_identifier(&mut self) -> bool {
		matches!(
			self.cursor.peek(),
			Some(Token { kind: TokenKind::Identifier(_), .. })
		)
	}


	/// Discard tokens until a probable declaration boundary: after a semicolon, or before
	/// a keyword that starts a statement.
	fn synchronize(&mut self) {
		let mut previous = self.step();

		while !self.token.is_eof() {
			if previous.kind == TokenKind::Semicolon || self.token.kind.starts_statement() {
				return;
			}

			previous = self.step();
		}
	}


	/// Parse the body of a loop.
	fn in_loop<F, T>(&mut self, parse: F) -> T
	where
		F: FnOnce(&mut Self) -> T,
	{
		self.loop_depth += 1;
		let result = parse(self);
		self.loop_depth -= 1;
		result
	}


	/// Parse the body of a function. Loops outside the function don't enclose its body.
	fn in_function<F, T>(&mut self, parse: F) -> T
	where
		F: FnOnce(&mut Self) -> T,
	{
		let loop_depth = std::mem::replace(&mut self.loop_depth, 0);
		let result = parse(self);
		self.loop_depth = loop_depth;
		result
	}


	/// Parse a single declaration. On error, report it and skip to the next declaration.
	fn parse_declaration(&mut self) -> Option<ast::Statement> {
		let function_declaration =
			self.check(&TokenKind::Keyword(Keyword::Fun)) && self.peek_identifier();

		let result = match self.token.kind {
			TokenKind::Keyword(Keyword::Class) => self.parse_class(),

			TokenKind::Keyword(Keyword::Fun) if function_declaration => {
				self.step();
				self.parse_function().map(ast::Statement::Function)
			}

			TokenKind::Keyword(Keyword::Var) => self.parse_var(),

			_ => self.parse_statement(),
		};

		match result {
			Ok(statement) => Some(statement),

			Err(error) => {
				self.error_reporter.report(error);
				self.synchronize();
				None
			}
		}
	}


	fn parse_class(&mut self) -> Result<ast::Statement, Error> {
		let keyword = self.step();

		let (identifier, _) = self.parse_identifier("class name")?;
		self.expect(TokenKind::OpenBrace, "'{' before class body")?;

		let mut methods = Vec::new();
		while !self.check(&TokenKind::CloseBrace) && !self.token.is_eof() {
			methods.push(self.parse_function()?);
		}

		self.expect(TokenKind::CloseBrace, "'}' after class body")?;

		Ok(ast::Statement::Class {
			identifier,
			methods: methods.into(),
			pos: keyword.pos,
		})
	}


	/// Parse a named function, after the `fun` keyword if any.
	fn parse_function(&mut self) -> Result<ast::Function, Error> {
		let (name, pos) = self.parse_identifier("function name")?;
		let (params, body) = self.parse_function_body()?;

		Ok(ast::Function { name: Some(name), params, body, pos })
	}


	/// Parse the parameter list and the body of a function.
	fn parse_function_body(
		&mut self,
	) -> Result<(Box<[(Symbol, SourcePos)]>, ast::Block), Error> {
		self.expect(TokenKind::OpenParens, "'(' after function name")?;

		let mut params = Vec::new();

		if !self.check(&TokenKind::CloseParens) {
			loop {
				if params.len() >= MAX_ARGS {
					let error = Error::too_many_parameters(self.token.clone());
					self.error_reporter.report(error);
				}

				params.push(self.parse_identifier("parameter name")?);

				if !self.consume(&TokenKind::Comma) {
					break;
				}
			}
		}

		self.expect(TokenKind::CloseParens, "')' after parameters")?;
		self.expect(TokenKind::OpenBrace, "'{' before function body")?;

		let body = self.in_function(Self::parse_block)?;

		Ok((params.into(), body))
	}


	fn parse_var(&mut self) -> Result<ast::Statement, Error> {
		let keyword = self.step();

		let (identifier, _) = self.parse_identifier("variable name")?;

		let init =
			if self.consume(&TokenKind::Operator(Operator::Assign)) {
				Some(self.parse_expression()?)
			} else {
				None
			};

		self.expect(TokenKind::Semicolon, "';' after variable declaration")?;

		Ok(ast::Statement::Var { identifier, init, pos: keyword.pos })
	}


	/// Parse a single statement.
	fn parse_statement(&mut self) -> Result<ast::Statement, Error> {
		match self.token.kind {
			// Print.
			TokenKind::Keyword(Keyword::Print) => {
				let keyword = self.step();

				let expr = self.parse_expression()?;
				self.expect(TokenKind::Semicolon, "';' after value")?;

				Ok(ast::Statement::Print { expr, pos: keyword.pos })
			}

			// Block.
			TokenKind::OpenBrace => {
				let brace = self.step();
				let block = self.parse_block()?;

				Ok(ast::Statement::Block { block, pos: brace.pos })
			}

			// If.
			TokenKind::Keyword(Keyword::If) => {
				let keyword = self.step();

				self.expect(TokenKind::OpenParens, "'(' after 'if'")?;
				let condition = self.parse_expression()?;
				self.expect(TokenKind::CloseParens, "')' after if condition")?;

				let then = Box::new(self.parse_statement()?);

				let otherwise =
					if self.consume(&TokenKind::Keyword(Keyword::Else)) {
						Some(Box::new(self.parse_statement()?))
					} else {
						None
					};

				Ok(ast::Statement::If { condition, then, otherwise, pos: keyword.pos })
			}

			// While.
			TokenKind::Keyword(Keyword::While) => {
				let keyword = self.step();

				self.expect(TokenKind::OpenParens, "'(' after 'while'")?;
				let condition = self.parse_expression()?;
				self.expect(TokenKind::CloseParens, "')' after condition")?;

				let body = Box::new(self.in_loop(Self::parse_statement)?);

				Ok(ast::Statement::While { condition, body, pos: keyword.pos })
			}

			// For.
			TokenKind::Keyword(Keyword::For) => self.parse_for(),

			// Break and continue.
			TokenKind::Keyword(keyword @ Keyword::Break)
			| TokenKind::Keyword(keyword @ Keyword::Continue) => {
				let token = self.step();

				if self.loop_depth == 0 {
					self.error_reporter.report(Error::outside_loop(token.clone()));
				}

				if keyword == Keyword::Break {
					self.expect(TokenKind::Semicolon, "';' after 'break'")?;
					Ok(ast::Statement::Break { pos: token.pos })
				} else {
					self.expect(TokenKind::Semicolon, "';' after 'continue'")?;
					Ok(ast::Statement::Continue { pos: token.pos })
				}
			}

			// Return.
			TokenKind::Keyword(Keyword::Return) => {
				let keyword = self.step();

				let value =
					if self.check(&TokenKind::Semicolon) {
						None
					} else {
						Some(self.parse_expression()?)
					};

				self.expect(TokenKind::Semicolon, "';' after return value")?;

				Ok(ast::Statement::Return { value, pos: keyword.pos })
			}

			_ => self.parse_expression_statement(),
		}
	}


	/// Parse the declarations of a block, after the opening brace.
	fn parse_block(&mut self) -> Result<ast::Block, Error> {
		let mut statements = Vec::new();

		while !self.check(&TokenKind::CloseBrace) && !self.token.is_eof() {
			if let Some(statement) = self.parse_declaration() {
				statements.push(statement);
			}
		}

		self.expect(TokenKind::CloseBrace, "'}' after block")?;

		Ok(statements.into())
	}


	fn parse_for(&mut self) -> Result<ast::Statement, Error> {
		let keyword = self.step();

		self.expect(TokenKind::OpenParens, "'(' after 'for'")?;

		let init = match self.token.kind {
			TokenKind::Semicolon => {
				self.step();
				None
			}

			TokenKind::Keyword(Keyword::Var) => Some(Box::new(self.parse_var()?)),

			_ => Some(Box::new(self.parse_expression_statement()?)),
		};

		let condition =
			if self.check(&TokenKind::Semicolon) {
				None
			} else {
				Some(self.parse_expression()?)
			};

		self.expect(TokenKind::Semicolon, "';' after loop condition")?;

		let increment =
			if self.check(&TokenKind::CloseParens) {
				None
			} else {
				Some(self.parse_expression()?)
			};

		self.expect(TokenKind::CloseParens, "')' after for clauses")?;

		let body = Box::new(self.in_loop(Self::parse_statement)?);

		Ok(ast::Statement::For { init, condition, increment, body, pos: keyword.pos })
	}


	/// Parse an expression statement. A lone expression spanning the whole input with no
	/// trailing semicolon is a print statement instead.
	fn parse_expression_statement(&mut self) -> Result<ast::Statement, Error> {
		let whole_input = self.consumed == 0;

		let expr = self.parse_expression()?;

		if whole_input && self.token.is_eof() {
			let pos = expr.pos();
			return Ok(ast::Statement::Print { expr, pos });
		}

		self.expect(TokenKind::Semicolon, "';' after expression")?;

		Ok(ast::Statement::Expr(expr))
	}


	/// Parse a single expression.
	fn parse_expression(&mut self) -> Result<ast::Expr, Error> {
		let expr = self.parse_logical()?;

		if !self.check(&TokenKind::Operator(Operator::Assign)) {
			return Ok(expr);
		}

		let equals = self.step();
		let value = Box::new(self.parse_expression()?);

		match expr {
			ast::Expr::Variable { identifier, pos } => {
				Ok(ast::Expr::Assign { identifier, value, pos })
			}

			ast::Expr::Get { object, field, pos } => {
				Ok(ast::Expr::Set { object, field, value, pos })
			}

			// Reported, but parsing may go on.
			expr => {
				self.error_reporter.report(Error::invalid_assignment(equals));
				Ok(expr)
			}
		}
	}


	/// Parse a binary operator expression, or anything with higher precedence.
	fn parse_logical(&mut self) -> Result<ast::Expr, Error> {
		let parse_factor =
			move |parser: &mut Self| parser.parse_binop(Self::parse_unop, Operator::is_factor);

		let parse_term =
			move |parser: &mut Self| parser.parse_binop(parse_factor, Operator::is_term);

		let parse_comparison =
			move |parser: &mut Self| parser.parse_binop(parse_term, Operator::is_comparison);

		let parse_equality =
			move |parser: &mut Self| parser.parse_binop(parse_comparison, Operator::is_equality);

		let parse_and =
			move |parser: &mut Self| parser.parse_binop(parse_equality, |&op| op == Operator::And);

		let parse_or =
			move |parser: &mut Self| parser.parse_binop(parse_and, |&op| op == Operator::Or);

		parse_or(self)
	}


	/// Parse a higher precedence expression, optionally followed by a sequence of
	/// left-associative operators.
	fn parse_binop<P, F>(
		&mut self,
		mut parse_higher_prec_op: P,
		mut check: F,
	) -> Result<ast::Expr, Error>
	where
		P: FnMut(&mut Self) -> Result<ast::Expr, Error>,
		F: FnMut(&Operator) -> bool,
	{
		let mut expr = parse_higher_prec_op(self)?;

		loop {
			match self.token.kind {
				TokenKind::Operator(op) if check(&op) => {
					let operator = self.step();

					let left = Box::new(expr);
					let right = Box::new(parse_higher_prec_op(self)?);
					let pos = operator.pos;

					expr =
						if op.is_logical() {
							ast::Expr::Logical { left, op: op.into(), right, pos }
						} else {
							ast::Expr::BinaryOp { left, op: op.into(), right, pos }
						};
				}

				_ => break,
			}
		}

		Ok(expr)
	}


	/// Parse a higher precedence expression, optionally starting with a unary operator.
	fn parse_unop(&mut self) -> Result<ast::Expr, Error> {
		match self.token.kind {
			TokenKind::Operator(op) if op.is_unary() => {
				let operator = self.step();

				let operand = self.parse_unop()?;

				Ok(ast::Expr::UnaryOp {
					op: op.into(),
					operand: operand.into(),
					pos: operator.pos,
				})
			}

			_ => self.parse_call(),
		}
	}


	/// Parse a primary expression followed by any number of calls and property accesses.
	fn parse_call(&mut self) -> Result<ast::Expr, Error> {
		let mut expr = self.parse_primary()?;

		loop {
			match self.token.kind {
				TokenKind::OpenParens => {
					self.step();
					expr = self.finish_call(expr)?;
				}

				TokenKind::Dot => {
					self.step();

					let (field, pos) = self.parse_identifier("property name after '.'")?;

					expr = ast::Expr::Get { object: expr.into(), field, pos };
				}

				_ => break,
			}
		}

		Ok(expr)
	}


	/// Parse the arguments of a call, after the opening parenthesis.
	fn finish_call(&mut self, callee: ast::Expr) -> Result<ast::Expr, Error> {
		let mut args = Vec::new();

		if !self.check(&TokenKind::CloseParens) {
			loop {
				if args.len() >= MAX_ARGS {
					let error = Error::too_many_arguments(self.token.clone());
					self.error_reporter.report(error);
				}

				args.push(self.parse_expression()?);

				if !self.consume(&TokenKind::Comma) {
					break;
				}
			}
		}

		let paren = self.expect(TokenKind::CloseParens, "')' after arguments")?;

		Ok(ast::Expr::Call {
			callee: callee.into(),
			args: args.into(),
			pos: paren.pos,
		})
	}


	/// Parse a higher precedence expression.
	fn parse_primary(&mut self) -> Result<ast::Expr, Error> {
		match self.token.kind {
			// Identifier.
			TokenKind::Identifier(identifier) => {
				let token = self.step();

				Ok(ast::Expr::Variable { identifier, pos: token.pos })
			}

			// This.
			TokenKind::Keyword(Keyword::This) => {
				let token = self.step();

				Ok(ast::Expr::This { pos: token.pos })
			}

			// Basic literal.
			TokenKind::Literal(ref literal) => {
				let literal = literal.clone().into();
				let token = self.step();

				Ok(ast::Expr::Literal { literal, pos: token.pos })
			}

			// Parenthesis.
			TokenKind::OpenParens => {
				let paren = self.step();

				let expr = self.parse_expression()?;
				self.expect(TokenKind::CloseParens, "')' after expression")?;

				Ok(ast::Expr::Grouping { expr: expr.into(), pos: paren.pos })
			}

			// Anonymous function.
			TokenKind::Keyword(Keyword::Fun) => {
				let keyword = self.step();

				let (params, body) = self.parse_function_body()?;

				Ok(ast::Expr::Function(Box::new(ast::Function {
					name: None,
					params,
					body,
					pos: keyword.pos,
				})))
			}

			_ => Err(Error::unexpected(self.token.clone(), "expression")),
		}
	}


	/// Parse an identifier, describing what was expected in case of error.
	fn parse_identifier(&mut self, expected: &'static str) -> Result<(Symbol, SourcePos), Error> {
		self.eat(|token| match token.kind {
			TokenKind::Identifier(identifier) => Ok((identifier, token.pos)),
			_ => Err(Error::unexpected(token.clone(), expected)),
		})
	}
}
