mod error;
mod scope;
pub mod program;
#[cfg(test)]
mod tests;

use crate::symbol::{self, Symbol};
use super::syntax::{ast, SourcePos};
pub use error::{Error, ErrorKind, Errors};
pub use program::{Block, Expr, Function, FunctionKind, Program, Statement};


/// Perform semantic analysis in the given AST, resolving the scope depth of every local
/// variable reference.
pub fn analyze(ast: ast::Ast, interner: &mut symbol::Interner) -> Result<Program, Errors> {
	let mut scope = scope::Stack::default();
	let mut errors = Errors::default();
	let symbols = Symbols {
		this: interner.get_or_intern("this"),
		init: interner.get_or_intern("init"),
	};

	let result = {
		// Top level declarations are globals, and therefore have no scope.
		let mut context = Context::new(&mut scope, &mut errors, symbols);
		analyze_block(ast.statements, &mut context)
	};

	match result {
		Some(statements) if errors.0.is_empty() => Ok(
			Program {
				source: ast.source,
				statements
			}
		),

		_ => Err(errors)
	}
}


fn analyze_block(block: ast::Block, context: &mut Context) -> Option<Block> {
	let block = analyze_items(
		analyze_statement,
		block.0.into_vec(), // Use vec's owned iterator.
		context
	)?;

	Some(block.into())
}


fn analyze_statement(statement: ast::Statement, context: &mut Context) -> Option<Statement> {
	match statement {
		ast::Statement::Expr(expr) => {
			let expr = analyze_expr(expr, context)?;
			Some(Statement::Expr(expr))
		}

		ast::Statement::Print { expr, .. } => {
			let expr = analyze_expr(expr, context)?;
			Some(Statement::Print(expr))
		}

		ast::Statement::Var { identifier, init, pos } => {
			let id = context.declare(identifier, pos);
			let init = analyze_optional(init, context);
			context.scope.define(identifier);

			let (_, init) = id.zip(init)?;

			Some(Statement::Var { identifier, init })
		}

		ast::Statement::Block { block, .. } => {
			let mut context = context.enter_block();
			let block = analyze_block(block, &mut context)?;

			Some(Statement::Block(block))
		}

		ast::Statement::If { condition, then, otherwise, .. } => {
			let condition = analyze_expr(condition, context);
			let then = analyze_statement(*then, context);
			let otherwise = match otherwise {
				Some(otherwise) => analyze_statement(*otherwise, context).map(|s| Some(Box::new(s))),
				None => Some(None),
			};

			let (condition, (then, otherwise)) = condition.zip(then.zip(otherwise))?;

			Some(
				Statement::If {
					condition,
					then: Box::new(then),
					otherwise,
				}
			)
		}

		ast::Statement::While { condition, body, .. } => {
			let condition = analyze_expr(condition, context);
			let body = {
				let mut context = context.enter_loop();
				analyze_statement(*body, &mut context)
			};

			let (condition, body) = condition.zip(body)?;

			Some(
				Statement::Loop {
					init: None,
					condition: Some(condition),
					increment: None,
					body: Box::new(body),
				}
			)
		}

		ast::Statement::For { init, condition, increment, body, .. } => {
			// The initializer variable lives in a scope enclosing the whole loop.
			let mut context = context.nested(init.is_some());

			let init = match init {
				Some(init) => analyze_statement(*init, &mut context).map(|s| Some(Box::new(s))),
				None => Some(None),
			};
			let condition = analyze_optional(condition, &mut context);
			let increment = analyze_optional(increment, &mut context);
			let body = {
				let mut context = context.enter_loop();
				analyze_statement(*body, &mut context)
			};

			let (init, (condition, (increment, body))) =
				init.zip(condition.zip(increment.zip(body)))?;

			Some(
				Statement::Loop {
					init,
					condition,
					increment,
					body: Box::new(body),
				}
			)
		}

		ast::Statement::Break { pos } => {
			if context.ops.contains(Ops::LOOP) {
				Some(Statement::Break)
			} else {
				context.report(Error::break_outside_loop(pos));
				None
			}
		}

		ast::Statement::Continue { pos } => {
			if context.ops.contains(Ops::LOOP) {
				Some(Statement::Continue)
			} else {
				context.report(Error::continue_outside_loop(pos));
				None
			}
		}

		ast::Statement::Return { value, pos } => {
			let ret =
				if !context.ops.contains(Ops::RETURN) {
					context.report(Error::return_outside_function(pos));
					None
				} else if context.function == Some(FunctionKind::Initializer) && value.is_some() {
					context.report(Error::return_value_in_initializer(pos));
					None
				} else {
					Some(())
				};

			let value = analyze_optional(value, context);

			let (_, value) = ret.zip(value)?;

			Some(Statement::Return(value))
		}

		ast::Statement::Function(function) => {
			// Defined before the body, allowing recursion.
			let id = match function.name {
				Some(name) => {
					let id = context.declare(name, function.pos).map(|_| ());
					context.scope.define(name);
					id
				}

				None => Some(()),
			};

			let function = analyze_function(function, FunctionKind::Function, context);

			let (_, function) = id.zip(function)?;

			Some(Statement::Function(function))
		}

		ast::Statement::Class { identifier, methods, pos } => {
			let id = context.declare(identifier, pos);
			context.scope.define(identifier);

			let methods = {
				let mut context = context.enter_class();

				analyze_items(
					|method: ast::Function, context| {
						let kind =
							if method.name == Some(context.symbols.init) {
								FunctionKind::Initializer
							} else {
								FunctionKind::Method
							};

						analyze_function(method, kind, context)
					},
					methods.into_vec(), // Use vec's owned iterator.
					&mut context,
				)
			};

			let (_, methods) = id.zip(methods)?;

			Some(Statement::Class { identifier, methods })
		}
	}
}


fn analyze_expr(expr: ast::Expr, context: &mut Context) -> Option<Expr> {
	match expr {
		ast::Expr::Literal { literal, pos } => Some(Expr::Literal { literal, pos }),

		ast::Expr::UnaryOp { op, operand, pos } => {
			let operand = analyze_expr(*operand, context)?;

			Some(
				Expr::UnaryOp {
					op,
					operand: Box::new(operand),
					pos,
				}
			)
		}

		ast::Expr::BinaryOp { left, op, right, pos } => {
			let left = analyze_expr(*left, context);
			let right = analyze_expr(*right, context);

			let (left, right) = left.zip(right)?;

			Some(
				Expr::BinaryOp {
					left: Box::new(left),
					op,
					right: Box::new(right),
					pos,
				}
			)
		}

		ast::Expr::Logical { left, op, right, pos } => {
			let left = analyze_expr(*left, context);
			let right = analyze_expr(*right, context);

			let (left, right) = left.zip(right)?;

			Some(
				Expr::Logical {
					left: Box::new(left),
					op,
					right: Box::new(right),
					pos,
				}
			)
		}

		// Groupings only matter for parsing.
		ast::Expr::Grouping { expr, .. } => analyze_expr(*expr, context),

		ast::Expr::Variable { identifier, pos } => {
			if context.scope.is_declaring(identifier) {
				context.report(Error::self_reference(identifier, pos));
				return None;
			}

			let depth = context.scope.resolve(identifier);

			Some(Expr::Variable { identifier, depth, pos })
		}

		ast::Expr::Assign { identifier, value, pos } => {
			let value = analyze_expr(*value, context)?;
			let depth = context.scope.resolve(identifier);

			Some(
				Expr::Assign {
					identifier,
					value: Box::new(value),
					depth,
					pos,
				}
			)
		}

		ast::Expr::Call { callee, args, pos } => {
			let callee = analyze_expr(*callee, context);

			let args = analyze_items(
				analyze_expr,
				args.into_vec(), // Use vec's owned iterator.
				context
			);

			let (callee, args) = callee.zip(args)?;

			Some(
				Expr::Call {
					callee: Box::new(callee),
					args,
					pos,
				}
			)
		}

		ast::Expr::Function(function) => {
			let function = analyze_function(*function, FunctionKind::Anonymous, context)?;
			Some(Expr::Function(Box::new(function)))
		}

		ast::Expr::Get { object, field, pos } => {
			let object = analyze_expr(*object, context)?;

			Some(
				Expr::Get {
					object: Box::new(object),
					field,
					pos,
				}
			)
		}

		ast::Expr::Set { object, field, value, pos } => {
			let value = analyze_expr(*value, context);
			let object = analyze_expr(*object, context);

			let (object, value) = object.zip(value)?;

			Some(
				Expr::Set {
					object: Box::new(object),
					field,
					value: Box::new(value),
					pos,
				}
			)
		}

		ast::Expr::This { pos } => {
			if context.ops.contains(Ops::THIS) {
				let depth = context.scope.resolve(context.symbols.this);
				Some(Expr::This { depth, pos })
			} else {
				context.report(Error::this_outside_class(pos));
				None
			}
		}
	}
}


fn analyze_optional(expr: Option<ast::Expr>, context: &mut Context) -> Option<Option<Expr>> {
	match expr {
		Some(expr) => analyze_expr(expr, context).map(Some),
		None => Some(None),
	}
}


/// Analyze a function. Parameters and body share a single new scope.
fn analyze_function(
	function: ast::Function,
	kind: FunctionKind,
	context: &mut Context,
) -> Option<Function> {
	let mut context = context.enter_function(kind);

	let params = analyze_items(
		|(symbol, pos), context| {
			let id = context.declare(symbol, pos);
			context.scope.define(symbol);
			id.map(|_| symbol)
		},
		function.params.into_vec(), // Use vec's owned iterator.
		&mut context
	);

	let body = analyze_items(
		analyze_statement,
		function.body.0.into_vec(), // Use vec's owned iterator.
		&mut context
	);

	let (params, body) = params.zip(body)?;

	Some(
		Function {
			name: function.name,
			params,
			body: body.into(),
			kind,
			pos: function.pos,
		}
	)
}


fn analyze_items<T, U, F, I>(
	mut analyze: F,
	iter: I,
	context: &mut Context,
) -> Option<Box<[U]>>
where
	I: IntoIterator<Item = T>,
	F: FnMut(T, &mut Context) -> Option<U>,
{
	let mut error = false;
	let mut items = Vec::new();

	for item in iter {
		if let Some(item) = analyze(item, context) {
			items.push(item);
		} else {
			error = true;
		}
	}

	if error {
		None
	} else {
		Some(
			items.into_boxed_slice()
		)
	}
}


/// The set of contextual operations enabled at some point of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Ops(u8);


impl Ops {
	const NONE: Self = Self(0);
	const RETURN: Self = Self(1);
	/// Break and continue.
	const LOOP: Self = Self(1 << 1);
	const THIS: Self = Self(1 << 2);


	fn contains(self, ops: Self) -> bool {
		self.0 & ops.0 == ops.0
	}


	fn with(self, ops: Self) -> Self {
		Self(self.0 | ops.0)
	}


	fn without(self, ops: Self) -> Self {
		Self(self.0 & !ops.0)
	}
}


/// Symbols the analyzer treats specially.
#[derive(Debug, Clone, Copy)]
struct Symbols {
	this: Symbol,
	init: Symbol,
}


/// Static semantic analysis.
#[derive(Debug)]
struct Context<'a> {
	/// Scope stack to resolve local variables.
	scope: &'a mut scope::Stack,
	/// Collected errors.
	errors: &'a mut Errors,
	symbols: Symbols,
	/// Enabled contextual operations.
	ops: Ops,
	/// The innermost enclosing function, if any.
	function: Option<FunctionKind>,
	/// Whether this context has pushed a scope, which must be popped on drop.
	scoped: bool,
}


impl<'a> Context<'a> {
	/// Create a new top level context.
	fn new(
		scope: &'a mut scope::Stack,
		errors: &'a mut Errors,
		symbols: Symbols,
	) -> Self {
		Self {
			scope,
			errors,
			symbols,
			ops: Ops::NONE,
			function: None,
			scoped: false,
		}
	}


	/// Derive a context, optionally entering a new scope.
	fn nested<'b>(&'b mut self, scoped: bool) -> Context<'b> {
		if scoped {
			self.scope.enter();
		}

		Context {
			scope: self.scope,
			errors: self.errors,
			symbols: self.symbols,
			ops: self.ops,
			function: self.function,
			scoped,
		}
	}


	fn enter_block<'b>(&'b mut self) -> Context<'b> {
		self.nested(true)
	}


	/// Enter a loop body. Loop control is enabled in addition to the enclosing operations.
	fn enter_loop<'b>(&'b mut self) -> Context<'b> {
		let mut context = self.nested(false);
		context.ops = context.ops.with(Ops::LOOP);
		context
	}


	/// Enter a function body. Functions nested in methods keep access to `this`.
	fn enter_function<'b>(&'b mut self, kind: FunctionKind) -> Context<'b> {
		let mut context = self.nested(true);

		context.ops = match kind {
			FunctionKind::Method | FunctionKind::Initializer => Ops::RETURN.with(Ops::THIS),
			FunctionKind::Function | FunctionKind::Anonymous => {
				context.ops.without(Ops::LOOP).with(Ops::RETURN)
			}
		};
		context.function = Some(kind);

		context
	}


	/// Enter a class body, where the instance is bound to `this`.
	fn enter_class<'b>(&'b mut self) -> Context<'b> {
		let context = self.nested(true);
		context.scope.define(context.symbols.this);
		context
	}


	/// Declare a symbol in the current scope, reporting duplicates.
	fn declare(&mut self, symbol: Symbol, pos: SourcePos) -> Option<Symbol> {
		self.scope
			.declare(symbol, pos)
			.map_err(
				|error| self.report(error)
			)
			.ok()
	}


	fn report(&mut self, error: Error) {
		self.errors.0.push(error);
	}
}


impl<'a> Drop for Context<'a> {
	fn drop(&mut self) {
		if self.scoped {
			self.scope.exit();
		}
	}
}
