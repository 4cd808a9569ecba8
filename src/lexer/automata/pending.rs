use super::{Cursor, SourcePos, Span, Token};
use crate::lexer::token;


/// The token currently being accumulated.
#[derive(Debug)]
pub(super) struct Pending {
	/// The token text, which may differ from the source text due to escapes.
	text: Vec<u8>,
	/// Where the token starts, if it has been started.
	start: Option<(usize, SourcePos)>,
	/// Whether the text is composed only of unquoted, unescaped, unexpanded characters.
	plain: bool,
}


impl Default for Pending {
	fn default() -> Self {
		Self {
			text: Vec::with_capacity(16), // We expect most words to be short.
			start: None,
			plain: true,
		}
	}
}


impl Pending {
	/// Whether any input has been attributed to the token, even if no text was kept.
	pub fn is_started(&self) -> bool {
		self.start.is_some()
	}


	/// Attribute the character under the cursor to the token, without keeping it in the
	/// text. Used for escaping backslashes.
	pub fn elide(&mut self, cursor: &Cursor) {
		self.anchor(cursor);
		self.plain = false;
	}


	/// Keep the character under the cursor as an ordinary unquoted character.
	pub fn push(&mut self, cursor: &Cursor) {
		self.anchor(cursor);
		if let Some(c) = cursor.peek() {
			self.text.push(c);
		}
	}


	/// Keep the character under the cursor as part of a quoted, escaped or expanded
	/// construct.
	pub fn keep(&mut self, cursor: &Cursor) {
		self.push(cursor);
		self.plain = false;
	}


	/// Close the pending token, if any, resolving its kind. The token ends right before
	/// the cursor, and the character under the cursor is the delimiter.
	/// A started token with no text yields nothing.
	pub fn take(&mut self, cursor: &Cursor) -> Option<Token> {
		let (start, pos) = self.start.take()?;
		let text = std::mem::replace(&mut self.text, Vec::with_capacity(16));
		let plain = std::mem::replace(&mut self.plain, true);

		if text.is_empty() {
			return None;
		}

		Some(Token {
			kind: token::resolve(&text, plain, cursor.peek()),
			text: String::from_utf8_lossy(&text).into_owned(),
			span: Span::new(start, cursor.offset()),
			pos,
		})
	}


	fn anchor(&mut self, cursor: &Cursor) {
		if self.start.is_none() {
			self.start = Some((cursor.offset(), cursor.pos()));
		}
	}
}
