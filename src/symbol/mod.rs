mod fmt;

use gc::{Finalize, Trace};
use intaglio::{Symbol as SymbolInner, bytes::SymbolTable};


/// A symbol is a reference to an value stored in the symbol interner.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Symbol(SymbolInner);


impl From<Symbol> for usize {
	fn from(symbol: Symbol) -> usize {
		symbol.0.id() as usize
	}
}


impl Finalize for Symbol { }


/// Symbols hold no garbage collected references.
unsafe impl Trace for Symbol {
	gc::unsafe_empty_trace!();
}


/// A symbol interner, used to store identifiers.
#[derive(Debug)]
pub struct Interner(SymbolTable);


impl Interner {
	/// Create a new empty interner.
	pub fn new() -> Self {
		Self(SymbolTable::new())
	}


	/// Get the symbol for a value.
	#[cfg(test)]
	pub fn get<T>(&self, value: T) -> Option<Symbol>
	where
		T: AsRef<[u8]>,
	{
		self.0
			.check_interned(value.as_ref())
			.map(Symbol)
	}


	/// Get the symbol for a value. The value is interned if needed.
	pub fn get_or_intern<T>(&mut self, value: T) -> Symbol
	where
		T: AsRef<[u8]>,
	{
		let value = value.as_ref().to_owned();

		Symbol(
			self.0
				.intern(value)
				.expect("failed to intern symbol")
		)
	}


	/// Resolve the string for a symbol.
	pub fn resolve(&self, symbol: Symbol) -> Option<&[u8]> {
		self.0.get(symbol.0)
	}
}


impl Default for Interner {
	fn default() -> Self {
		Self::new()
	}
}
