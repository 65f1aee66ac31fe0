use std::fmt::{self, Debug};

use gc::{Finalize, Trace};

use crate::symbol::Symbol;
use super::{
	super::{lib::NativeFun, mem::Environment, program},
	Instance,
	Value,
};


/// A function object.
#[derive(Debug, Clone, PartialEq)]
#[derive(Trace, Finalize)]
pub enum Function {
	Lox(LoxFun),
	Native(&'static NativeFun),
}


impl Function {
	/// How many arguments the function expects.
	pub fn arity(&self) -> usize {
		match self {
			Self::Lox(fun) => fun.arity(),
			Self::Native(fun) => fun.arity,
		}
	}
}


impl From<LoxFun> for Function {
	fn from(fun: LoxFun) -> Self {
		Self::Lox(fun)
	}
}


/// A function object implemented in Lox code, closing over its defining environment.
#[derive(Clone)]
#[derive(Trace, Finalize)]
pub struct LoxFun {
	pub decl: &'static program::Function,
	pub closure: Environment,
}


impl LoxFun {
	pub fn new(decl: &'static program::Function, closure: Environment) -> Self {
		Self { decl, closure }
	}


	pub fn arity(&self) -> usize {
		self.decl.params.len()
	}


	/// Bind the method to an instance. The resulting function sees the instance as `this`.
	pub fn bind(&self, instance: Instance, this: Symbol) -> Self {
		let closure = self.closure.child();
		closure.define(this, instance.into());

		Self { decl: self.decl, closure }
	}
}


/// Functions have identity: two function values are the same only if they come from the
/// same declaration evaluated in the same environment.
impl PartialEq for LoxFun {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self.decl, other.decl)
			&& self.closure == other.closure
	}
}


impl Debug for LoxFun {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("LoxFun")
			.field("name", &self.decl.name)
			.field("pos", &self.decl.pos)
			.finish()
	}
}


/// Natives are compared by name, which is globally unique.
impl PartialEq for NativeFun {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name
	}
}


impl From<&'static NativeFun> for Value {
	fn from(fun: &'static NativeFun) -> Self {
		Self::Function(Function::Native(fun))
	}
}
