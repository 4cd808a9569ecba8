use super::{
	expansion,
	Backtick,
	Cursor,
	Error,
	Escape,
	Pending,
	SourcePos,
	State,
	Transition,
};


/// The state for literals enclosed in single quotes. Every character is taken
/// verbatim, including backslashes.
#[derive(Debug)]
pub(super) struct SingleQuoted {
	offset: usize,
	pos: SourcePos,
}


impl SingleQuoted {
	/// Consume the opening quote under the cursor and enter the single quoted state.
	pub fn enter<S>(invoker: S, cursor: &Cursor, pending: &mut Pending) -> Transition
	where
		S: Into<State>,
	{
		pending.keep(cursor);
		Transition::enter(Self { offset: cursor.offset(), pos: cursor.pos() }, invoker)
	}


	pub fn visit(self, cursor: &Cursor, pending: &mut Pending) -> Transition {
		match cursor.peek() {
			// Closing quote.
			Some(b'\'') => {
				pending.keep(cursor);
				Transition::leave()
			}

			Some(_) => {
				pending.keep(cursor);
				Transition::step(self)
			}

			None => Transition::error(Error::unterminated_quote(self.offset, self.pos)),
		}
	}
}


impl From<SingleQuoted> for State {
	fn from(state: SingleQuoted) -> State {
		State::SingleQuoted(state)
	}
}


/// The state for strings enclosed in double quotes, which may contain expansions.
#[derive(Debug)]
pub(super) struct DoubleQuoted {
	offset: usize,
	pos: SourcePos,
	/// Whether the string is nested in an expansion, where escapes are kept verbatim.
	verbatim: bool,
}


impl DoubleQuoted {
	/// Consume the opening quote under the cursor and enter the double quoted state.
	pub fn enter<S>(invoker: S, cursor: &Cursor, pending: &mut Pending, verbatim: bool) -> Transition
	where
		S: Into<State>,
	{
		pending.keep(cursor);
		Transition::enter(
			Self { offset: cursor.offset(), pos: cursor.pos(), verbatim },
			invoker,
		)
	}


	pub fn visit(self, cursor: &Cursor, pending: &mut Pending) -> Transition {
		match cursor.peek() {
			// Closing quote.
			Some(b'"') => {
				pending.keep(cursor);
				Transition::leave()
			}

			// Only a few characters may be escaped, otherwise the backslash is literal.
			Some(b'\\') if cursor.peek_nth(1).map_or(false, is_escapable) => {
				let verbatim = self.verbatim;
				Escape::enter(self, cursor, pending, verbatim)
			}

			Some(b'$') => expansion::enter(self, cursor, pending),

			Some(b'`') => Backtick::enter(self, cursor, pending),

			Some(_) => {
				pending.keep(cursor);
				Transition::step(self)
			}

			None => Transition::error(Error::unterminated_quote(self.offset, self.pos)),
		}
	}
}


impl From<DoubleQuoted> for State {
	fn from(state: DoubleQuoted) -> State {
		State::DoubleQuoted(state)
	}
}


/// Whether a character may be escaped inside double quotes.
fn is_escapable(c: u8) -> bool {
	b"$`\"\\\n".contains(&c)
}
