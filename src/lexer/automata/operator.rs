use super::{token, Cursor, SourcePos, State, Transition};
use crate::lexer::operator::{self, MAX_LEN};


/// The state for control and redirection operators. The longest lexeme in the operator
/// table is always preferred.
#[derive(Debug)]
pub(super) struct Operator {
	lexeme: [u8; MAX_LEN],
	len: usize,
	offset: usize,
	pos: SourcePos,
}


impl Operator {
	/// Start an operator at the cursor. The character under the cursor must be an operator
	/// start, and it is consumed when entering this state.
	pub fn at(cursor: &Cursor) -> Self {
		let mut lexeme = [0; MAX_LEN];
		lexeme[0] = cursor.peek().unwrap_or_default();

		Self { lexeme, len: 1, offset: cursor.offset(), pos: cursor.pos() }
	}


	pub fn visit(mut self, cursor: &Cursor) -> Transition {
		let lexeme = &self.lexeme[.. self.len];

		match cursor.peek() {
			Some(c) if operator::extends(lexeme, c) => {
				self.lexeme[self.len] = c;
				self.len += 1;
				Transition::step(self)
			}

			_ => match operator::lookup(lexeme) {
				Some(kind) => Transition::resume_leave_produce(
					token(kind, lexeme, self.offset, self.pos, cursor)
				),

				// Only operator starts enter this state, and each one is an operator by itself.
				None => Transition::resume_leave(),
			},
		}
	}
}


impl From<Operator> for State {
	fn from(state: Operator) -> State {
		State::Operator(state)
	}
}
