use super::{
	Arithmetic,
	Backtick,
	CommandSubstitution,
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


/// Consume the dollar under the cursor and enter the expansion it starts. Up to two
/// characters after the dollar are inspected to pick the expansion form.
pub(super) fn enter<S>(invoker: S, cursor: &Cursor, pending: &mut Pending) -> Transition
where
	S: Into<State>,
{
	pending.keep(cursor);

	match (cursor.peek_nth(1), cursor.peek_nth(2)) {
		(Some(b'('), Some(b'(')) => Transition::enter(Arithmetic::at(cursor), invoker),
		(Some(b'('), _) => Transition::enter(CommandSubstitution::at(cursor), invoker),
		_ => Transition::enter(Parameter::at(cursor), invoker),
	}
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Form {
	/// Right after the dollar.
	Head,
	/// A name, like `$HOME`.
	Name,
	/// Enclosed in braces, with the current brace depth.
	Braced(usize),
}


/// The state for parameter expansions: `$name`, `$?`, `${...}`.
#[derive(Debug)]
pub(super) struct Parameter {
	form: Form,
	offset: usize,
	pos: SourcePos,
}


impl Parameter {
	/// Start a parameter expansion for the dollar under the cursor.
	pub fn at(cursor: &Cursor) -> Self {
		Self { form: Form::Head, offset: cursor.offset(), pos: cursor.pos() }
	}


	pub fn visit(mut self, cursor: &Cursor, pending: &mut Pending) -> Transition {
		match (self.form, cursor.peek()) {
			(Form::Head, Some(b'{')) => {
				pending.keep(cursor);
				self.form = Form::Braced(1);
				Transition::step(self)
			}

			// Special parameters have a single character.
			(Form::Head, Some(c)) if is_special(c) => {
				pending.keep(cursor);
				Transition::leave()
			}

			(Form::Head, Some(c)) if is_name_start(c) => {
				pending.keep(cursor);
				self.form = Form::Name;
				Transition::step(self)
			}

			// A lone dollar is just a literal.
			(Form::Head, _) => Transition::resume_leave(),

			(Form::Name, Some(c)) if is_name(c) => {
				pending.keep(cursor);
				Transition::step(self)
			}

			(Form::Name, _) => Transition::resume_leave(),

			(Form::Braced(depth), Some(b'}')) => {
				pending.keep(cursor);
				if depth == 1 {
					Transition::leave()
				} else {
					self.form = Form::Braced(depth - 1);
					Transition::step(self)
				}
			}

			(Form::Braced(depth), Some(b'{')) => {
				pending.keep(cursor);
				self.form = Form::Braced(depth + 1);
				Transition::step(self)
			}

			(Form::Braced(_), Some(b'\\')) => Escape::enter(self, cursor, pending, true),

			(Form::Braced(_), Some(b'\'')) => SingleQuoted::enter(self, cursor, pending),

			(Form::Braced(_), Some(b'"')) => DoubleQuoted::enter(self, cursor, pending, true),

			(Form::Braced(_), Some(b'$')) => enter(self, cursor, pending),

			(Form::Braced(_), Some(b'`')) => Backtick::enter(self, cursor, pending),

			(Form::Braced(_), Some(_)) => {
				pending.keep(cursor);
				Transition::step(self)
			}

			(Form::Braced(_), None) => {
				Transition::error(Error::unterminated_expansion(self.offset, self.pos))
			}
		}
	}
}


impl From<Parameter> for State {
	fn from(state: Parameter) -> State {
		State::Parameter(state)
	}
}


/// Whether a character is a special parameter, like `$?` or `$1`.
fn is_special(c: u8) -> bool {
	c.is_ascii_digit() || b"@*#?-$!".contains(&c)
}


fn is_name_start(c: u8) -> bool {
	c.is_ascii_alphabetic() || c == b'_'
}


fn is_name(c: u8) -> bool {
	c.is_ascii_alphanumeric() || c == b'_'
}
