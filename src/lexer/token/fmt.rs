use std::fmt::{self, Display};

use super::{Span, Token, TokenKind};
use crate::term::color::{self, Palette};


impl TokenKind {
	/// The upper case name of the token kind, as used in the POSIX grammar.
	pub fn name(&self) -> &'static str {
		match self {
			Self::Word => "WORD",
			Self::IoNumber => "IO_NUMBER",
			Self::EndOfInput => "END_OF_INPUT",

			Self::And => "AND",
			Self::AndIf => "AND_IF",
			Self::OpenParen => "OPENPAREN",
			Self::CloseParen => "CLOSEPAREN",
			Self::Semi => "SEMI",
			Self::DSemi => "DSEMI",
			Self::Newline => "NEWLINE",
			Self::Or => "OR",
			Self::OrIf => "OR_IF",

			Self::Less => "LESS",
			Self::Great => "GREAT",
			Self::Clobber => "CLOBBER",
			Self::DLess => "DLESS",
			Self::DGreat => "DGREAT",
			Self::LessAnd => "LESSAND",
			Self::GreatAnd => "GREATAND",
			Self::DLessDash => "DLESSDASH",
			Self::LessGreat => "LESSGREAT",
		}
	}
}


impl Display for TokenKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.name().fmt(f)
	}
}


impl Display for Span {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}..{}", self.start, self.end)
	}
}


impl Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}: {}", self.kind, self.text.escape_debug())
	}
}


/// Token display with terminal colors, when enabled in the palette.
#[derive(Debug)]
pub struct Painted<'a>(pub &'a Token, pub Palette);


impl<'a> Display for Painted<'a> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let Painted(token, palette) = self;

		let kind = token.kind.name();
		match token.kind {
			TokenKind::Word => palette.fg(color::Green, kind).fmt(f)?,
			TokenKind::IoNumber => palette.fg(color::Cyan, kind).fmt(f)?,
			TokenKind::EndOfInput => palette.fg(color::Blue, kind).fmt(f)?,
			_ => palette.fg(color::Yellow, kind).fmt(f)?,
		}

		write!(f, ": {}", palette.bold(token.text.escape_debug()))
	}
}
