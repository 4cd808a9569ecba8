use super::{expansion, Backtick, Cursor, Error, Escape, Pending, SourcePos, State, Transition};


/// The state for `$((...))` arithmetic expansions.
#[derive(Debug)]
pub(super) struct Arithmetic {
	/// Parenthesis depth. Both opening parentheses are yet to be visited when entering
	/// this state, and the expansion ends when the depth drops back to zero.
	depth: usize,
	offset: usize,
	pos: SourcePos,
}


impl Arithmetic {
	/// Start an arithmetic expansion for the dollar under the cursor.
	pub fn at(cursor: &Cursor) -> Self {
		Self { depth: 0, offset: cursor.offset(), pos: cursor.pos() }
	}


	pub fn visit(mut self, cursor: &Cursor, pending: &mut Pending) -> Transition {
		match cursor.peek() {
			Some(b'(') => {
				pending.keep(cursor);
				self.depth += 1;
				Transition::step(self)
			}

			Some(b')') => {
				pending.keep(cursor);
				self.depth = self.depth.saturating_sub(1);
				if self.depth == 0 {
					Transition::leave()
				} else {
					Transition::step(self)
				}
			}

			Some(b'\\') => Escape::enter(self, cursor, pending, true),

			Some(b'$') => expansion::enter(self, cursor, pending),

			Some(b'`') => Backtick::enter(self, cursor, pending),

			Some(_) => {
				pending.keep(cursor);
				Transition::step(self)
			}

			None => Transition::error(Error::unterminated_expansion(self.offset, self.pos)),
		}
	}
}


impl From<Arithmetic> for State {
	fn from(state: Arithmetic) -> State {
		State::Arithmetic(state)
	}
}
