use std::fmt::{self, Debug, Display};

use termion::{color as term, style};
pub use termion::color::{Blue, Cyan, Green, Red, Yellow};


/// Paint the foreground with a given color when formatting the value.
pub struct Fg<C, T>(pub C, pub T);


impl<C, T> Debug for Fg<C, T>
where
	C: term::Color + Copy,
	T: Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", term::Fg(self.0))?;
		self.1.fmt(f)?;
		write!(f, "{}", term::Fg(term::Reset))
	}
}


impl<C, T> Display for Fg<C, T>
where
	C: term::Color + Copy,
	T: Display,
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}{}{}", term::Fg(self.0), self.1, term::Fg(term::Reset))
	}
}


/// Use a bold font when formatting the value.
pub struct Bold<T>(pub T);


impl<T> Display for Bold<T>
where
	T: Display,
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}{}{}", style::Bold, self.0, style::Reset)
	}
}


/// Whether output should be painted at all.
/// Painting is disabled for non terminal outputs and when requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
	enabled: bool,
}


impl Palette {
	pub fn new(enabled: bool) -> Self {
		Self { enabled }
	}


	pub fn plain() -> Self {
		Self::new(false)
	}


	/// Enable painting only if stdout is a terminal.
	pub fn for_stdout(requested: bool) -> Self {
		Self::new(requested && termion::is_tty(&std::io::stdout()))
	}


	/// Enable painting only if stderr is a terminal.
	pub fn for_stderr(requested: bool) -> Self {
		Self::new(requested && termion::is_tty(&std::io::stderr()))
	}


	pub fn fg<C, T>(self, color: C, value: T) -> Paint<Fg<C, T>, T>
	where
		C: term::Color + Copy,
		T: Display,
	{
		if self.enabled {
			Paint::Painted(Fg(color, value))
		} else {
			Paint::Plain(value)
		}
	}


	pub fn bold<T: Display>(self, value: T) -> Paint<Bold<T>, T> {
		if self.enabled {
			Paint::Painted(Bold(value))
		} else {
			Paint::Plain(value)
		}
	}
}


/// A value that may or may not have been painted.
pub enum Paint<P, T> {
	Painted(P),
	Plain(T),
}


impl<P, T> Display for Paint<P, T>
where
	P: Display,
	T: Display,
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::Painted(value) => value.fmt(f),
			Self::Plain(value) => value.fmt(f),
		}
	}
}
