use std::{
	collections::HashMap,
	fmt::{self, Debug},
};

use gc::{Gc, GcCell, Finalize, Trace};

use crate::symbol::Symbol;
use super::Value;


/// Variable access error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
	/// The variable was never declared.
	Undeclared,
	/// The variable was declared without a value, and never assigned.
	Unassigned,
}


/// A storage slot for a variable.
#[derive(Trace, Finalize)]
enum Slot {
	Unassigned,
	Value(Value),
}


#[derive(Trace, Finalize)]
struct Frame {
	slots: HashMap<Symbol, Slot>,
	enclosing: Option<Environment>,
}


/// A chain of frames. Environments are shared: closures keep their defining environment
/// alive, and mutations are visible to everyone that holds it.
#[derive(Clone)]
#[derive(Trace, Finalize)]
pub struct Environment(Gc<GcCell<Frame>>);


impl Environment {
	/// Create an environment with no enclosing frame.
	pub fn global() -> Self {
		Self::new(None)
	}


	/// Create a new empty environment enclosed by this one.
	pub fn child(&self) -> Self {
		Self::new(Some(self.clone()))
	}


	fn new(enclosing: Option<Environment>) -> Self {
		Self(
			Gc::new(
				GcCell::new(
					Frame {
						slots: HashMap::new(),
						enclosing,
					}
				)
			)
		)
	}


	/// Declare a variable in this frame, without a value.
	pub fn declare(&self, symbol: Symbol) {
		self.0
			.borrow_mut()
			.slots
			.insert(symbol, Slot::Unassigned);
	}


	/// Define a variable in this frame, replacing any previous definition.
	pub fn define(&self, symbol: Symbol, value: Value) {
		self.0
			.borrow_mut()
			.slots
			.insert(symbol, Slot::Value(value));
	}


	/// Read a variable from this frame.
	pub fn get(&self, symbol: Symbol) -> Result<Value, Error> {
		match self.0.borrow().slots.get(&symbol) {
			Some(Slot::Value(value)) => Ok(value.clone()),
			Some(Slot::Unassigned) => Err(Error::Unassigned),
			None => Err(Error::Undeclared),
		}
	}


	/// Assign to an existing variable in this frame.
	pub fn assign(&self, symbol: Symbol, value: Value) -> Result<(), Error> {
		match self.0.borrow_mut().slots.get_mut(&symbol) {
			Some(slot) => {
				*slot = Slot::Value(value);
				Ok(())
			}

			None => Err(Error::Undeclared),
		}
	}


	/// Read a variable from the frame the given number of links away.
	pub fn get_at(&self, depth: u32, symbol: Symbol) -> Result<Value, Error> {
		self.ancestor(depth)
			.ok_or(Error::Undeclared)?
			.get(symbol)
	}


	/// Assign to a variable in the frame the given number of links away.
	pub fn assign_at(&self, depth: u32, symbol: Symbol, value: Value) -> Result<(), Error> {
		self.ancestor(depth)
			.ok_or(Error::Undeclared)?
			.assign(symbol, value)
	}


	fn ancestor(&self, depth: u32) -> Option<Environment> {
		let mut environment = self.clone();

		for _ in 0 .. depth {
			let enclosing = environment.0.borrow().enclosing.clone()?;
			environment = enclosing;
		}

		Some(environment)
	}
}


/// Environments have identity.
impl PartialEq for Environment {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq::<GcCell<Frame>>(&*self.0, &*other.0)
	}
}


impl Debug for Environment {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "Environment({:p})", &*self.0)
	}
}
