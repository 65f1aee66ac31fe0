use std::collections::HashMap;

use super::{Error, Symbol, SourcePos};


/// A scope stack. Each scope maps its declared symbols to whether they have been
/// defined yet. The global scope is not tracked.
#[derive(Debug, Default)]
pub struct Stack(Vec<HashMap<Symbol, bool>>);


impl Stack {
	/// Enter a new empty scope.
	pub fn enter(&mut self) {
		self.0.push(HashMap::new());
	}


	/// Exit the current scope.
	/// Panics if the stack is empty.
	pub fn exit(&mut self) -> HashMap<Symbol, bool> {
		self.0
			.pop()
			.expect("attempt to exit empty stack")
	}


	/// Declares a symbol in the current scope, without defining it.
	/// Fails if the symbol was already declared in the same local scope.
	pub fn declare(&mut self, symbol: Symbol, pos: SourcePos) -> Result<Symbol, Error> {
		match self.0.last_mut() {
			Some(scope) if scope.contains_key(&symbol) => {
				Err(Error::duplicate_variable(symbol, pos))
			}

			Some(scope) => {
				scope.insert(symbol, false);
				Ok(symbol)
			}

			None => Ok(symbol),
		}
	}


	/// Mark a symbol as defined in the current scope.
	pub fn define(&mut self, symbol: Symbol) {
		if let Some(scope) = self.0.last_mut() {
			scope.insert(symbol, true);
		}
	}


	/// Whether the symbol is declared but not yet defined in the current scope.
	pub fn is_declaring(&self, symbol: Symbol) -> bool {
		matches!(
			self.0.last().and_then(|scope| scope.get(&symbol)),
			Some(false)
		)
	}


	/// Find how many scopes away the symbol was declared. Symbols not found in the stack
	/// are assumed to be globals.
	pub fn resolve(&self, symbol: Symbol) -> Option<u32> {
		self.0
			.iter()
			.rev()
			.position(|scope| scope.contains_key(&symbol))
			.map(|depth| depth as u32)
	}
}
