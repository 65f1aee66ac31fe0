mod flow;
mod lib;
mod mem;
mod panic;
pub mod value;
#[cfg(test)]
mod tests;

use std::{collections::HashMap, io::Write};

use gc::Gc;

use crate::{
	fmt::{self, FmtString},
	symbol::{self, Symbol},
};
use super::{semantic::program, syntax::SourcePos};
use flow::Flow;
use mem::Environment;
pub use panic::Panic;
use value::{Class, Function, Generic, Instance, LoxFun, Value};


/// Maximum number of nested function calls. Deeper recursion would exhaust the native
/// stack the interpreter runs on.
const MAX_CALL_DEPTH: u32 = 10_000;


/// Symbols the runtime treats specially.
#[derive(Debug, Clone, Copy)]
struct Symbols {
	this: Symbol,
	init: Symbol,
}


/// A tree-walking interpreter. Globals persist across evaluated programs, which allows
/// incremental execution in a REPL.
#[derive(Debug)]
pub struct Runtime<W> {
	/// Where the print statement writes to.
	output: W,
	interner: symbol::Interner,
	globals: Environment,
	symbols: Symbols,
	call_depth: u32,
}


impl<W> Runtime<W>
where
	W: Write,
{
	/// Create a new runtime, with all native functions defined as globals.
	pub fn new(output: W, mut interner: symbol::Interner) -> Self {
		let globals = Environment::global();

		for native in inventory::iter::<lib::NativeFun> {
			let name = interner.get_or_intern(native.name);
			globals.define(name, native.into());
		}

		let symbols = Symbols {
			this: interner.get_or_intern("this"),
			init: interner.get_or_intern("init"),
		};

		Self {
			output,
			interner,
			globals,
			symbols,
			call_depth: 0,
		}
	}


	pub fn interner(&self) -> &symbol::Interner {
		&self.interner
	}


	pub fn interner_mut(&mut self) -> &mut symbol::Interner {
		&mut self.interner
	}


	pub fn output(&self) -> &W {
		&self.output
	}


	/// Execute a program in the global environment. Globals defined before a panic
	/// persist.
	pub fn eval(&mut self, program: &'static program::Program) -> Result<(), Panic> {
		let globals = self.globals.clone();

		self.call_depth = 0;
		self.eval_statements(&program.statements.0, &globals)?;

		self.output.flush()?;

		Ok(())
	}


	fn eval_statements(
		&mut self,
		statements: &'static [program::Statement],
		env: &Environment,
	) -> Result<Flow, Panic> {
		for statement in statements {
			match self.eval_statement(statement, env)? {
				Flow::Regular => (),
				flow => return Ok(flow),
			}
		}

		Ok(Flow::Regular)
	}


	fn eval_statement(
		&mut self,
		statement: &'static program::Statement,
		env: &Environment,
	) -> Result<Flow, Panic> {
		match statement {
			program::Statement::Expr(expr) => {
				self.eval_expr(expr, env)?;
			}

			program::Statement::Print(expr) => {
				let value = self.eval_expr(expr, env)?;
				writeln!(self.output, "{}", fmt::Show(&value, &self.interner))?;
			}

			program::Statement::Var { identifier, init: Some(init) } => {
				let value = self.eval_expr(init, env)?;
				env.define(*identifier, value);
			}

			program::Statement::Var { identifier, init: None } => env.declare(*identifier),

			program::Statement::Block(block) => {
				return self.eval_statements(&block.0, &env.child());
			}

			program::Statement::If { condition, then, otherwise } => {
				if self.eval_expr(condition, env)?.is_truthy() {
					return self.eval_statement(then, env);
				} else if let Some(otherwise) = otherwise {
					return self.eval_statement(otherwise, env);
				}
			}

			program::Statement::Loop { init, condition, increment, body } => {
				// The initializer gets its own scope, enclosing the whole loop.
				let env = match init {
					Some(init) => {
						let env = env.child();
						self.eval_statement(init, &env)?;
						env
					}

					None => env.clone(),
				};

				loop {
					if let Some(condition) = condition {
						if !self.eval_expr(condition, &env)?.is_truthy() {
							break;
						}
					}

					match self.eval_statement(body, &env)? {
						Flow::Regular | Flow::Continue => (),
						Flow::Break => break,
						flow @ Flow::Return(_) => return Ok(flow),
					}

					if let Some(increment) = increment {
						self.eval_expr(increment, &env)?;
					}
				}
			}

			program::Statement::Break => return Ok(Flow::Break),

			program::Statement::Continue => return Ok(Flow::Continue),

			program::Statement::Return(value) => {
				let value = match value {
					Some(expr) => self.eval_expr(expr, env)?,
					None => Value::Nil,
				};

				return Ok(Flow::Return(value));
			}

			program::Statement::Function(function) => {
				if let Some(name) = function.name {
					env.define(name, LoxFun::new(function, env.clone()).into());
				}
			}

			program::Statement::Class { identifier, methods } => {
				let methods: HashMap<Symbol, LoxFun> = methods
					.iter()
					.filter_map(
						|method| method.name.map(
							|name| (name, LoxFun::new(method, env.clone()))
						)
					)
					.collect();

				let class = Class::new(*identifier, methods, self.symbols.init);

				env.define(*identifier, class.into());
			}
		}

		Ok(Flow::Regular)
	}


	fn eval_expr(
		&mut self,
		expr: &'static program::Expr,
		env: &Environment,
	) -> Result<Value, Panic> {
		match expr {
			// Literal.
			program::Expr::Literal { literal, .. } => Ok(
				match literal {
					program::Literal::Nil => Value::Nil,
					program::Literal::Bool(b) => (*b).into(),
					program::Literal::Number(n) => (*n).into(),
					program::Literal::String(string) => Value::from(&string[..]),
				}
			),

			// UnaryOp.
			program::Expr::UnaryOp { op, operand, pos } => {
				let value = self.eval_expr(operand, env)?;

				match (op, value) {
					(program::UnaryOp::Minus, Value::Number(n)) => Ok((-n).into()),
					(program::UnaryOp::Minus, _) => Err(Panic::invalid_operand(*pos)),
					(program::UnaryOp::Not, value) => Ok((!value.is_truthy()).into()),
				}
			}

			// BinaryOp.
			program::Expr::BinaryOp { left, op, right, pos } => {
				let left = self.eval_expr(left, env)?;
				let right = self.eval_expr(right, env)?;

				self.binary_op(*op, left, right, *pos)
			}

			// Logical.
			program::Expr::Logical { left, op, right, .. } => {
				let left = self.eval_expr(left, env)?.is_truthy();

				let value = match (op, left) {
					(program::LogicalOp::Or, true) => true,
					(program::LogicalOp::And, false) => false,
					_ => self.eval_expr(right, env)?.is_truthy(),
				};

				Ok(value.into())
			}

			// Variable.
			program::Expr::Variable { identifier, depth, pos } => {
				self.lookup(*identifier, *depth, env, *pos)
			}

			// Assign.
			program::Expr::Assign { identifier, value, depth, pos } => {
				let value = self.eval_expr(value, env)?;

				let result = match depth {
					Some(depth) => env.assign_at(*depth, *identifier, value.clone()),
					None => self.globals.assign(*identifier, value.clone()),
				};

				result.map_err(|_| Panic::undeclared_assignment(*identifier, *pos))?;

				Ok(value)
			}

			// Call.
			program::Expr::Call { callee, args, pos } => {
				let callee = self.eval_expr(callee, env)?;

				let mut arguments = Vec::with_capacity(args.len());
				for arg in args.iter() {
					arguments.push(self.eval_expr(arg, env)?);
				}

				self.call(callee, arguments, *pos)
			}

			// Anonymous function.
			program::Expr::Function(function) => Ok(LoxFun::new(function, env.clone()).into()),

			// Property access.
			program::Expr::Get { object, field, pos } => {
				match self.eval_expr(object, env)? {
					Value::Instance(ref instance) => self.get_property(instance.clone(), *field, *pos),
					_ => Err(Panic::not_an_instance(*pos)),
				}
			}

			// Property assignment.
			program::Expr::Set { object, field, value, pos } => {
				let instance = match self.eval_expr(object, env)? {
					Value::Instance(ref instance) => instance.clone(),
					_ => return Err(Panic::not_an_instance(*pos)),
				};

				let value = self.eval_expr(value, env)?;
				instance.set(*field, value.clone());

				Ok(value)
			}

			// This.
			program::Expr::This { depth, pos } => {
				self.lookup(self.symbols.this, *depth, env, *pos)
			}
		}
	}


	/// Read a variable, either from the given number of links away, or from the globals.
	fn lookup(
		&self,
		identifier: Symbol,
		depth: Option<u32>,
		env: &Environment,
		pos: SourcePos,
	) -> Result<Value, Panic> {
		let result = match depth {
			Some(depth) => env.get_at(depth, identifier),
			None => self.globals.get(identifier),
		};

		result.map_err(
			|error| match error {
				mem::Error::Undeclared => Panic::undeclared_variable(identifier, pos),
				mem::Error::Unassigned => Panic::unassigned_variable(identifier, pos),
			}
		)
	}


	fn binary_op(
		&self,
		op: program::BinaryOp,
		left: Value,
		right: Value,
		pos: SourcePos,
	) -> Result<Value, Panic> {
		use program::BinaryOp::*;

		match (op, &left, &right) {
			(Equals, left, right) => Ok((left == right).into()),
			(NotEquals, left, right) => Ok((left != right).into()),

			(Plus, Value::Number(left), Value::Number(right)) => Ok((left + right).into()),
			(Plus, Value::String(left), Value::String(right)) => {
				Ok([&left[..], &right[..]].concat().into_boxed_slice().into())
			}
			(Plus, Value::String(left), right) => {
				let right = Generic(right).fmt_string(&self.interner);
				Ok([&left[..], right.as_bytes()].concat().into_boxed_slice().into())
			}

			(Minus, Value::Number(left), Value::Number(right)) => Ok((left - right).into()),
			(Times, Value::Number(left), Value::Number(right)) => Ok((left * right).into()),
			(Div, Value::Number(left), Value::Number(right)) => Ok((left / right).into()),
			(Mod, Value::Number(left), Value::Number(right)) => Ok((left % right).into()),

			(Greater, Value::Number(left), Value::Number(right)) => Ok((left > right).into()),
			(GreaterEquals, Value::Number(left), Value::Number(right)) => Ok((left >= right).into()),
			(Lower, Value::Number(left), Value::Number(right)) => Ok((left < right).into()),
			(LowerEquals, Value::Number(left), Value::Number(right)) => Ok((left <= right).into()),

			_ => Err(Panic::invalid_operands(op, left.clone(), right.clone(), pos)),
		}
	}


	/// Get a field, or a method bound to the instance.
	fn get_property(&self, instance: Instance, field: Symbol, pos: SourcePos) -> Result<Value, Panic> {
		if let Some(value) = instance.get(field) {
			return Ok(value);
		}

		let method = instance
			.class()
			.find_method(field)
			.cloned()
			.ok_or_else(|| Panic::undefined_property(field, pos))?;

		Ok(method.bind(instance, self.symbols.this).into())
	}


	fn call(&mut self, callee: Value, args: Vec<Value>, pos: SourcePos) -> Result<Value, Panic> {
		match &callee {
			Value::Function(function) => {
				check_arity(function.arity(), args.len(), pos)?;

				match function {
					Function::Lox(function) => self.call_lox(function, args, pos),
					Function::Native(native) => (native.call)(&args),
				}
			}

			Value::Class(class) => {
				check_arity(class.arity(), args.len(), pos)?;

				let instance = Instance::new(Gc::clone(class));

				if let Some(initializer) = class.initializer() {
					let initializer = initializer.bind(instance.clone(), self.symbols.this);
					self.call_lox(&initializer, args, pos)?;
				}

				Ok(instance.into())
			}

			_ => Err(Panic::invalid_call(pos)),
		}
	}


	fn call_lox(&mut self, function: &LoxFun, args: Vec<Value>, pos: SourcePos) -> Result<Value, Panic> {
		if self.call_depth >= MAX_CALL_DEPTH {
			return Err(Panic::stack_overflow(pos));
		}

		// Parameters and body share the same environment.
		let env = function.closure.child();
		for (param, arg) in function.decl.params.iter().zip(args) {
			env.define(*param, arg);
		}

		self.call_depth += 1;
		let result = self.eval_statements(&function.decl.body.0, &env);
		self.call_depth -= 1;

		let value = match result? {
			Flow::Return(value) => value,
			_ => Value::Nil,
		};

		if function.decl.kind == program::FunctionKind::Initializer {
			// Initializers always yield the instance.
			return self.lookup(self.symbols.this, Some(0), &function.closure, pos);
		}

		Ok(value)
	}
}


fn check_arity(expected: usize, got: usize, pos: SourcePos) -> Result<(), Panic> {
	if expected == got {
		Ok(())
	} else {
		Err(Panic::invalid_args(expected, got, pos))
	}
}
