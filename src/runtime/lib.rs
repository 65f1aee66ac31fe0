automod::dir!("src/runtime/lib");

use std::fmt::{self, Debug};

use super::{Panic, Value};


/// A native function, implemented in Rust. Natives are registered at link time, and
/// defined as globals when the runtime is created.
pub struct NativeFun {
	/// The global name. Must be unique.
	pub name: &'static str,
	pub arity: usize,
	pub call: fn(&[Value]) -> Result<Value, Panic>,
}


impl Debug for NativeFun {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "NativeFun({})", self.name)
	}
}


inventory::collect!(NativeFun);
