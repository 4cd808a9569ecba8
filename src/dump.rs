//! Token dumps for input units, as printed by the command line driver.

use std::{
	fmt::{self, Display},
	io::{self, Write},
};

use log::info;

use crate::{
	lexer::{self, Painted, Token},
	source::Unit,
	term::color::{self, Palette},
};


/// The output format for tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
	/// `KIND: text`, one token per line.
	Plain(Palette),
	/// One JSON object per line.
	Json,
}


/// Tokenize a unit and write its tokens. A unit with a lexical error is discarded as a
/// whole: no tokens are written, and the error is returned instead.
pub fn dump<W>(out: &mut W, unit: &Unit, format: Format) -> io::Result<Result<usize, lexer::Error>>
where
	W: Write,
{
	info!("tokenizing {}", unit);

	let tokens: Vec<Token> = match lexer::stream(unit.text.clone()).collect() {
		Ok(tokens) => tokens,
		Err(error) => return Ok(Err(error)),
	};

	for token in &tokens {
		match format {
			Format::Plain(palette) => writeln!(out, "{}", Painted(token, palette))?,
			Format::Json => {
				serde_json::to_writer(&mut *out, token)?;
				writeln!(out)?;
			}
		}
	}

	Ok(Ok(tokens.len()))
}


/// A lexical error report for an input unit.
#[derive(Debug)]
pub struct SyntaxError<'a> {
	pub unit: &'a Unit,
	pub error: &'a lexer::Error,
	pub palette: Palette,
}


impl<'a> Display for SyntaxError<'a> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(
			f,
			"{}: {}: {}",
			self.unit,
			self.palette.fg(color::Red, "syntax error"),
			self.error
		)
	}
}
