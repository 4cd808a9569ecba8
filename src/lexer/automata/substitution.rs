use super::{
	expansion,
	Cursor,
	DoubleQuoted,
	Error,
	Escape,
	Pending,
	SingleQuoted,
	SourcePos,
	State,
	Transition,
};
use crate::lexer::operator;


/// The state for `$(...)` command substitutions.
/// The interior is kept verbatim in the enclosing word. Quotes, escapes, nested
/// expansions and comments are recognized so that their parentheses are not counted.
#[derive(Debug)]
pub(super) struct CommandSubstitution {
	/// Unquoted parenthesis depth. The opening parenthesis is yet to be visited when
	/// entering this state.
	depth: usize,
	/// Whether the next character may start a comment.
	word_start: bool,
	/// Whether we are inside a comment.
	comment: bool,
	offset: usize,
	pos: SourcePos,
}


impl CommandSubstitution {
	/// Start a command substitution for the dollar under the cursor.
	pub fn at(cursor: &Cursor) -> Self {
		Self {
			depth: 0,
			word_start: true,
			comment: false,
			offset: cursor.offset(),
			pos: cursor.pos(),
		}
	}


	pub fn visit(mut self, cursor: &Cursor, pending: &mut Pending) -> Transition {
		let error = |this: &Self| {
			Transition::error(Error::unterminated_expansion(this.offset, this.pos))
		};

		if self.comment {
			return match cursor.peek() {
				Some(b'\n') => {
					self.comment = false;
					Transition::resume(self)
				}

				Some(_) => {
					pending.keep(cursor);
					Transition::step(self)
				}

				None => error(&self),
			};
		}

		match cursor.peek() {
			Some(b'(') => {
				pending.keep(cursor);
				self.depth += 1;
				self.word_start = true;
				Transition::step(self)
			}

			Some(b')') => {
				pending.keep(cursor);
				self.depth = self.depth.saturating_sub(1);
				if self.depth == 0 {
					Transition::leave()
				} else {
					self.word_start = true;
					Transition::step(self)
				}
			}

			Some(b'#') if self.word_start => {
				pending.keep(cursor);
				self.comment = true;
				Transition::step(self)
			}

			Some(b'\\') => {
				self.word_start = false;
				Escape::enter(self, cursor, pending, true)
			}

			Some(b'\'') => {
				self.word_start = false;
				SingleQuoted::enter(self, cursor, pending)
			}

			Some(b'"') => {
				self.word_start = false;
				DoubleQuoted::enter(self, cursor, pending, true)
			}

			Some(b'$') => {
				self.word_start = false;
				expansion::enter(self, cursor, pending)
			}

			Some(b'`') => {
				self.word_start = false;
				Backtick::enter(self, cursor, pending)
			}

			Some(c) => {
				pending.keep(cursor);
				self.word_start = c == b' ' || c == b'\t' || operator::is_start(c);
				Transition::step(self)
			}

			None => error(&self),
		}
	}
}


impl From<CommandSubstitution> for State {
	fn from(state: CommandSubstitution) -> State {
		State::CommandSubstitution(state)
	}
}


/// The state for legacy `` `...` `` command substitutions.
#[derive(Debug)]
pub(super) struct Backtick {
	offset: usize,
	pos: SourcePos,
}


impl Backtick {
	/// Consume the opening backtick under the cursor and enter the backtick state.
	pub fn enter<S>(invoker: S, cursor: &Cursor, pending: &mut Pending) -> Transition
	where
		S: Into<State>,
	{
		pending.keep(cursor);
		Transition::enter(Self { offset: cursor.offset(), pos: cursor.pos() }, invoker)
	}


	pub fn visit(self, cursor: &Cursor, pending: &mut Pending) -> Transition {
		match cursor.peek() {
			// Closing backtick.
			Some(b'`') => {
				pending.keep(cursor);
				Transition::leave()
			}

			// Only dollars, backticks and backslashes may be escaped, otherwise the backslash
			// is literal.
			Some(b'\\') if matches!(cursor.peek_nth(1), Some(b'$') | Some(b'`') | Some(b'\\')) => {
				Escape::enter(self, cursor, pending, true)
			}

			Some(b'\'') => SingleQuoted::enter(self, cursor, pending),

			Some(b'"') => DoubleQuoted::enter(self, cursor, pending, true),

			Some(_) => {
				pending.keep(cursor);
				Transition::step(self)
			}

			None => Transition::error(Error::unterminated_expansion(self.offset, self.pos)),
		}
	}
}


impl From<Backtick> for State {
	fn from(state: Backtick) -> State {
		State::Backtick(state)
	}
}
