//! Input units for the lexer: a command string, the lines of a script, or the lines
//! read from standard input.

use std::{
	fmt::{self, Display},
	fs::File,
	io::{self, BufRead, BufReader},
	path::Path,
};


/// Where the shell input comes from.
#[derive(Debug)]
pub enum Source {
	/// A `-c` command string, tokenized as a single unit.
	Command(String),
	/// A script file, tokenized line by line.
	Script(Box<Path>),
	/// Standard input, tokenized line by line.
	Stdin,
}


/// A single input unit. Each unit is tokenized independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
	/// The origin name, may be something fictional like `<stdin>`.
	pub origin: Box<str>,
	/// The line number of the unit in its origin, starting at 1.
	pub line: u32,
	pub text: String,
}


impl Display for Unit {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}:{}", self.origin, self.line)
	}
}


/// An iterator over input units.
pub type Units = Box<dyn Iterator<Item = io::Result<Unit>>>;


impl Source {
	/// The origin name of the source, used in error messages.
	pub fn origin(&self) -> Box<str> {
		match self {
			Self::Command(_) => "<command>".into(),
			Self::Script(path) => path.display().to_string().into(),
			Self::Stdin => "<stdin>".into(),
		}
	}


	/// Open the source, producing its units lazily.
	pub fn units(self) -> io::Result<Units> {
		let origin = self.origin();

		match self {
			Self::Command(text) => Ok(Box::new(std::iter::once(Ok(Unit { origin, line: 1, text })))),

			Self::Script(path) => {
				let file = File::open(&path)?;
				Ok(lines(origin, BufReader::new(file)))
			}

			Self::Stdin => Ok(lines(origin, BufReader::new(io::stdin()))),
		}
	}
}


/// Split a reader in line units. The trailing newline is not part of the unit.
pub fn lines<R>(origin: Box<str>, reader: R) -> Units
where
	R: BufRead + 'static,
{
	Box::new(
		reader
			.lines()
			.zip(1 ..)
			.map(move |(line, number)| {
				line.map(|text| Unit { origin: origin.clone(), line: number, text })
			})
	)
}
