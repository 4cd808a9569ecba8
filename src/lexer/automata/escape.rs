use super::{Cursor, Pending, State, Transition};


/// The state for the character following a backslash.
#[derive(Debug)]
pub(super) struct Escape {
	/// Whether the backslash and line continuations are kept in the token text. This is
	/// the case inside expansions, whose text will be lexed again when evaluated.
	verbatim: bool,
}


impl Escape {
	/// Consume the backslash under the cursor and enter the escape state.
	pub fn enter<S>(invoker: S, cursor: &Cursor, pending: &mut Pending, verbatim: bool) -> Transition
	where
		S: Into<State>,
	{
		if verbatim {
			pending.keep(cursor);
		} else if cursor.peek_nth(1) != Some(b'\n') {
			pending.elide(cursor);
		}

		Transition::enter(Self { verbatim }, invoker)
	}


	pub fn visit(self, cursor: &Cursor, pending: &mut Pending) -> Transition {
		match cursor.peek() {
			// Line continuation. Neither character is attributed to the token, so it
			// neither starts a token nor taints a plain one.
			Some(b'\n') if !self.verbatim => Transition::leave(),

			// The escaped character loses any special meaning.
			Some(_) => {
				pending.keep(cursor);
				Transition::leave()
			}

			// A trailing backslash is tolerated.
			None => Transition::resume_leave(),
		}
	}
}


impl From<Escape> for State {
	fn from(state: Escape) -> State {
		State::Escape(state)
	}
}
