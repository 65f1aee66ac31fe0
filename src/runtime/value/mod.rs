mod class;
mod fmt;
mod function;

use gc::{Gc, Finalize, Trace};

pub use class::{Class, Instance};
pub use fmt::Generic;
pub use function::{Function, LoxFun};


/// A runtime value. Strings are immutable and shared. Functions, classes and instances
/// have identity.
#[derive(Debug, Clone)]
#[derive(Trace, Finalize)]
pub enum Value {
	Nil,
	Bool(bool),
	Number(f64),
	String(Gc<Box<[u8]>>),
	Function(Function),
	Class(Gc<Class>),
	Instance(Instance),
}


impl Value {
	/// Nil and false are falsy, everything else is truthy.
	pub fn is_truthy(&self) -> bool {
		!matches!(self, Self::Nil | Self::Bool(false))
	}
}


impl Default for Value {
	fn default() -> Self {
		Self::Nil
	}
}


/// Values of different types are never equal. Numbers follow IEEE equality, so NaN is
/// not equal to itself.
impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Nil, Self::Nil) => true,
			(Self::Bool(left), Self::Bool(right)) => left == right,
			(Self::Number(left), Self::Number(right)) => left == right,
			(Self::String(left), Self::String(right)) => left[..] == right[..],
			(Self::Function(left), Self::Function(right)) => left == right,
			(Self::Class(left), Self::Class(right)) => std::ptr::eq::<Class>(&**left, &**right),
			(Self::Instance(left), Self::Instance(right)) => left == right,
			_ => false,
		}
	}
}


impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Self::Bool(b)
	}
}


impl From<f64> for Value {
	fn from(number: f64) -> Self {
		Self::Number(number)
	}
}


impl<'a> From<&'a str> for Value {
	fn from(string: &'a str) -> Self {
		string.as_bytes().into()
	}
}


impl<'a> From<&'a [u8]> for Value {
	fn from(string: &'a [u8]) -> Self {
		Self::String(
			Gc::new(string.into())
		)
	}
}


impl From<Box<[u8]>> for Value {
	fn from(string: Box<[u8]>) -> Self {
		Self::String(Gc::new(string))
	}
}


impl From<Function> for Value {
	fn from(fun: Function) -> Self {
		Self::Function(fun)
	}
}


impl From<LoxFun> for Value {
	fn from(fun: LoxFun) -> Self {
		Self::Function(fun.into())
	}
}


impl From<Class> for Value {
	fn from(class: Class) -> Self {
		Self::Class(Gc::new(class))
	}
}


impl From<Instance> for Value {
	fn from(instance: Instance) -> Self {
		Self::Instance(instance)
	}
}
