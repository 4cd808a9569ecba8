mod fmt;

use serde::{Serialize, Serializer};

use super::{operator, SourcePos};
pub use self::fmt::Painted;


/// All possible kinds of token in the shell command language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
	/// A command word, possibly containing quotes and expansions.
	Word,
	/// A file descriptor number glued to a redirection operator, like the `2` in `2>`.
	IoNumber,
	/// Always the last token produced for a well formed input.
	EndOfInput,

	// Control operators.
	And,        // &
	AndIf,      // &&
	OpenParen,  // (
	CloseParen, // )
	Semi,       // ;
	DSemi,      // ;;
	Newline,    // \n
	Or,         // |
	OrIf,       // ||

	// Redirection operators.
	Less,      // <
	Great,     // >
	Clobber,   // >|
	DLess,     // <<
	DGreat,    // >>
	LessAnd,   // <&
	GreatAnd,  // >&
	DLessDash, // <<-
	LessGreat, // <>
}


impl TokenKind {
	/// Check if the token is a control operator.
	pub fn is_control_operator(&self) -> bool {
		matches!(
			self,
			Self::And
				| Self::AndIf
				| Self::OpenParen
				| Self::CloseParen
				| Self::Semi
				| Self::DSemi
				| Self::Newline
				| Self::Or
				| Self::OrIf
		)
	}


	/// Check if the token is a redirection operator.
	pub fn is_redirection(&self) -> bool {
		matches!(
			self,
			Self::Less
				| Self::Great
				| Self::Clobber
				| Self::DLess
				| Self::DGreat
				| Self::LessAnd
				| Self::GreatAnd
				| Self::DLessDash
				| Self::LessGreat
		)
	}


	/// Check if the token is any operator.
	pub fn is_operator(&self) -> bool {
		self.is_control_operator() || self.is_redirection()
	}
}


/// Token kinds are serialized by their grammar name, like `AND_IF`.
impl Serialize for TokenKind {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.name())
	}
}


/// A half open range of byte offsets in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
	pub start: usize,
	pub end: usize,
}


impl Span {
	pub fn new(start: usize, end: usize) -> Self {
		Self { start, end }
	}


	pub fn len(&self) -> usize {
		self.end - self.start
	}


	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}
}


/// A lexical token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
	pub kind: TokenKind,
	/// The token text. Quotes are kept, escaping backslashes outside expansions are not.
	pub text: String,
	pub span: Span,
	pub pos: SourcePos,
}


/// Decide the kind of a pending word that is being closed.
///
/// `plain` indicates that the text was built only from unquoted, unescaped characters,
/// and `delimiter` is the character that triggered the resolution, if any.
pub fn resolve(text: &[u8], plain: bool, delimiter: Option<u8>) -> TokenKind {
	if plain {
		if let Some(kind) = operator::lookup(text) {
			return kind;
		}
	}

	let is_number = !text.is_empty() && text.iter().all(u8::is_ascii_digit);

	match delimiter {
		Some(b'<') | Some(b'>') if plain && is_number => TokenKind::IoNumber,
		_ => TokenKind::Word,
	}
}
