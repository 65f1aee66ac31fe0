use std::fmt::{self, Display};

use termion::color as term;
pub use termion::color::Red;


/// Paint the foreground with a given color when formatting the value.
pub struct Fg<C, T>(pub C, pub T);


impl<C, T> Display for Fg<C, T>
where
	C: term::Color + Copy,
	T: Display,
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}{}{}", term::Fg(self.0), self.1, term::Fg(term::Reset))
	}
}


/// Paint the foreground only when the output is a terminal.
pub struct Paint<C, T> {
	pub color: C,
	pub value: T,
	pub enabled: bool,
}


impl<C, T> Display for Paint<C, T>
where
	C: term::Color + Copy,
	T: Display,
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if self.enabled {
			Fg(self.color, &self.value).fmt(f)
		} else {
			self.value.fmt(f)
		}
	}
}
