//! The lexical front end for the shell command language.
//!
//! The lexer converts a single input unit (a line, or a command string) into tokens,
//! following the token recognition rules of the POSIX shell command language. Quotes
//! and expansions are recognized only to find the boundaries of words: their contents
//! are never evaluated.

mod automata;
mod cursor;
mod error;
pub mod operator;
mod stream;
#[cfg(test)]
mod tests;
mod token;

use automata::Automata;
pub use cursor::{Cursor, SourcePos};
pub use error::{Error, ErrorKind};
pub use stream::{stream, Stream};
pub use token::{resolve, Painted, Span, Token, TokenKind};


/// The lexer for shell input. Yields tokens until the end of input token, or until the
/// first error.
#[derive(Debug)]
pub struct Lexer<'a>(Automata<'a>);


impl<'a> Lexer<'a> {
	pub fn new(cursor: Cursor<'a>) -> Self {
		Self(Automata::new(cursor))
	}
}


impl<'a> From<&'a str> for Lexer<'a> {
	fn from(input: &'a str) -> Self {
		Self::new(Cursor::from(input))
	}
}


impl<'a> Iterator for Lexer<'a> {
	type Item = Result<Token, Error>;

	fn next(&mut self) -> Option<Self::Item> {
		self.0.next()
	}
}


/// Tokenize the whole input. On success, the last token is always the end of input.
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
	Lexer::from(input).collect()
}
