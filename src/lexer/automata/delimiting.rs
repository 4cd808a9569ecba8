use super::{
	expansion,
	token,
	Backtick,
	Cursor,
	DoubleQuoted,
	Escape,
	Operator,
	Pending,
	SingleQuoted,
	State,
	TokenKind,
	Transition,
};
use crate::lexer::operator;


/// The top level lexer state, which scans unquoted text and decides where each token
/// ends.
#[derive(Debug, Default)]
pub(super) struct Delimiting {
	/// Whether we are skipping a comment.
	comment: bool,
}


impl Delimiting {
	pub fn visit(self, cursor: &Cursor, pending: &mut Pending) -> Transition {
		if self.comment {
			return match cursor.peek() {
				// Newline marks the end of the comment, and must be lexed as an operator.
				Some(b'\n') | None => Transition::resume(Self::default()),

				// Otherwise, eat everything.
				Some(_) => Transition::step(self),
			};
		}

		match cursor.peek() {
			// Eof. Any pending token must be produced before the end of input token.
			None => match pending.take(cursor) {
				Some(word) => Transition::resume_produce(self, word),
				None => Transition::finish(
					token(TokenKind::EndOfInput, b"", cursor.offset(), cursor.pos(), cursor)
				),
			},

			Some(b'\\') => Escape::enter(self, cursor, pending, false),

			Some(b'\'') => SingleQuoted::enter(self, cursor, pending),

			Some(b'"') => DoubleQuoted::enter(self, cursor, pending, false),

			Some(b'$') => expansion::enter(self, cursor, pending),

			Some(b'`') => Backtick::enter(self, cursor, pending),

			// Operators delimit the pending token, which is produced first.
			Some(c) if operator::is_start(c) => match pending.take(cursor) {
				Some(word) => Transition::resume_produce(self, word),
				None => Transition::enter(Operator::at(cursor), self),
			},

			// Blanks delimit the pending token, and are then discarded.
			Some(b' ') | Some(b'\t') => match pending.take(cursor) {
				Some(word) => Transition::resume_produce(self, word),
				None => Transition::step(self),
			},

			// Comments may only start a token.
			Some(b'#') if !pending.is_started() => Transition::step(Self { comment: true }),

			Some(_) => {
				pending.push(cursor);
				Transition::step(self)
			}
		}
	}
}


impl From<Delimiting> for State {
	fn from(state: Delimiting) -> State {
		State::Delimiting(state)
	}
}
