mod fmt;

use super::SourcePos;


/// The kind of lexical error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// Single or double quote still open at the end of input.
	UnterminatedQuote,
	/// Parameter expansion, command substitution or arithmetic expansion still open at
	/// the end of input.
	UnterminatedExpansion,
}


/// A lexical error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
	pub error: ErrorKind,
	/// Position of the construct that was left open.
	pub pos: SourcePos,
	/// Byte offset of the construct that was left open.
	pub offset: usize,
}


impl std::error::Error for Error {}


impl Error {
	pub fn unterminated_quote(offset: usize, pos: SourcePos) -> Self {
		Self { error: ErrorKind::UnterminatedQuote, pos, offset }
	}

	pub fn unterminated_expansion(offset: usize, pos: SourcePos) -> Self {
		Self { error: ErrorKind::UnterminatedExpansion, pos, offset }
	}
}
