use std::{
	collections::HashMap,
	fmt::{self, Debug},
};

use gc::{Gc, GcCell, Finalize, Trace};

use crate::symbol::Symbol;
use super::{LoxFun, Value};


/// A class value. Classes are callable, producing instances.
#[derive(Debug)]
#[derive(Trace, Finalize)]
pub struct Class {
	pub name: Symbol,
	methods: HashMap<Symbol, LoxFun>,
	/// The `init` method, if any.
	initializer: Option<LoxFun>,
}


impl Class {
	pub fn new(name: Symbol, methods: HashMap<Symbol, LoxFun>, init: Symbol) -> Self {
		let initializer = methods.get(&init).cloned();

		Self { name, methods, initializer }
	}


	pub fn find_method(&self, name: Symbol) -> Option<&LoxFun> {
		self.methods.get(&name)
	}


	pub fn initializer(&self) -> Option<&LoxFun> {
		self.initializer.as_ref()
	}


	/// How many arguments construction expects.
	pub fn arity(&self) -> usize {
		self.initializer
			.as_ref()
			.map(LoxFun::arity)
			.unwrap_or(0)
	}
}


/// An instance of a class, with its own mutable fields.
#[derive(Clone)]
#[derive(Trace, Finalize)]
pub struct Instance(Gc<Object>);


#[derive(Trace, Finalize)]
struct Object {
	class: Gc<Class>,
	fields: GcCell<HashMap<Symbol, Value>>,
}


impl Instance {
	pub fn new(class: Gc<Class>) -> Self {
		Self(
			Gc::new(
				Object {
					class,
					fields: GcCell::new(HashMap::new()),
				}
			)
		)
	}


	pub fn class(&self) -> &Gc<Class> {
		&self.0.class
	}


	/// Get a field. Methods are not fields.
	pub fn get(&self, field: Symbol) -> Option<Value> {
		self.0.fields
			.borrow()
			.get(&field)
			.cloned()
	}


	pub fn set(&self, field: Symbol, value: Value) {
		self.0.fields
			.borrow_mut()
			.insert(field, value);
	}
}


/// Instances have identity.
impl PartialEq for Instance {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq::<Object>(&*self.0, &*other.0)
	}
}


/// Fields may refer back to the instance, so they are omitted.
impl Debug for Instance {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_tuple("Instance")
			.field(&self.0.class.name)
			.finish()
	}
}
