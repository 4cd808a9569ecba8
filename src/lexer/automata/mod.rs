mod arithmetic;
mod delimiting;
mod escape;
mod expansion;
mod operator;
mod pending;
mod quoted;
mod substitution;

use log::{debug, trace};

use self::{
	arithmetic::Arithmetic,
	delimiting::Delimiting,
	escape::Escape,
	expansion::Parameter,
	operator::Operator,
	pending::Pending,
	quoted::{DoubleQuoted, SingleQuoted},
	substitution::{Backtick, CommandSubstitution},
};
use super::{Cursor, Error, SourcePos, Span, Token, TokenKind};


/// The automata may produce a token, or an error.
type Output = Result<Token, Error>;


/// Where control goes once a character has been visited.
#[derive(Debug)]
enum Flow {
	/// Replace the current state.
	Goto(State),
	/// Push the invoker in the continuation stack, and descend into a substate.
	Enter { state: State, invoker: State },
	/// Pop the continuation stack, resuming the invoker of the current state.
	Return,
	/// Stop the machine. No more output will be produced.
	Halt,
}


/// The transition to be made after a character in the input has been visited.
#[derive(Debug)]
struct Transition {
	flow: Flow,
	/// Whether to consume the visited input character.
	consume: bool,
	/// The produced output, if any.
	output: Option<Output>,
}


impl Transition {
	/// Consume the character while updating the machine state, but not producing a token
	/// yet.
	pub fn step<S: Into<State>>(state: S) -> Self {
		Self { flow: Flow::Goto(state.into()), consume: true, output: None }
	}

	/// Don't consume the input character, updating the machine state instead.
	pub fn resume<S: Into<State>>(state: S) -> Self {
		Self { flow: Flow::Goto(state.into()), consume: false, output: None }
	}

	/// Don't consume the input character, but produce a token.
	pub fn resume_produce<S: Into<State>>(state: S, token: Token) -> Self {
		Self {
			flow: Flow::Goto(state.into()),
			consume: false,
			output: Some(Ok(token)),
		}
	}

	/// Consume the input character and descend into a substate, which will return control
	/// to the invoker once finished.
	pub fn enter<S, I>(state: S, invoker: I) -> Self
	where
		S: Into<State>,
		I: Into<State>,
	{
		Self {
			flow: Flow::Enter { state: state.into(), invoker: invoker.into() },
			consume: true,
			output: None,
		}
	}

	/// Consume the input character and return control to the invoker.
	pub fn leave() -> Self {
		Self { flow: Flow::Return, consume: true, output: None }
	}

	/// Don't consume the input character, returning control to the invoker.
	pub fn resume_leave() -> Self {
		Self { flow: Flow::Return, consume: false, output: None }
	}

	/// Don't consume the input character, but produce a token and return control to the
	/// invoker.
	pub fn resume_leave_produce(token: Token) -> Self {
		Self { flow: Flow::Return, consume: false, output: Some(Ok(token)) }
	}

	/// Produce the end of input token and stop.
	pub fn finish(token: Token) -> Self {
		Self { flow: Flow::Halt, consume: false, output: Some(Ok(token)) }
	}

	/// Produce an error and stop.
	pub fn error(error: Error) -> Self {
		Self { flow: Flow::Halt, consume: false, output: Some(Err(error)) }
	}
}


/// All states in the automata.
#[derive(Debug)]
enum State {
	Delimiting(Delimiting),
	Escape(Escape),
	SingleQuoted(SingleQuoted),
	DoubleQuoted(DoubleQuoted),
	Operator(Operator),
	Parameter(Parameter),
	CommandSubstitution(CommandSubstitution),
	Backtick(Backtick),
	Arithmetic(Arithmetic),
}


impl Default for State {
	fn default() -> Self {
		Delimiting::default().into()
	}
}


impl State {
	pub fn visit(self, cursor: &Cursor, pending: &mut Pending) -> Transition {
		match self {
			State::Delimiting(state) => state.visit(cursor, pending),
			State::Escape(state) => state.visit(cursor, pending),
			State::SingleQuoted(state) => state.visit(cursor, pending),
			State::DoubleQuoted(state) => state.visit(cursor, pending),
			State::Operator(state) => state.visit(cursor),
			State::Parameter(state) => state.visit(cursor, pending),
			State::CommandSubstitution(state) => state.visit(cursor, pending),
			State::Backtick(state) => state.visit(cursor, pending),
			State::Arithmetic(state) => state.visit(cursor, pending),
		}
	}


	fn name(&self) -> &'static str {
		match self {
			State::Delimiting(_) => "delimiting",
			State::Escape(_) => "escape",
			State::SingleQuoted(_) => "single quoted",
			State::DoubleQuoted(_) => "double quoted",
			State::Operator(_) => "operator",
			State::Parameter(_) => "parameter expansion",
			State::CommandSubstitution(_) => "command substitution",
			State::Backtick(_) => "backtick substitution",
			State::Arithmetic(_) => "arithmetic expansion",
		}
	}
}


/// The automata instance. Each instance tokenizes a single input and is then discarded.
#[derive(Debug)]
pub(super) struct Automata<'a> {
	state: State,
	/// The states to be resumed once the current state is finished. The bottom of the
	/// stack is always the delimiting state.
	stack: Vec<State>,
	cursor: Cursor<'a>,
	pending: Pending,
	halted: bool,
}


impl<'a> Automata<'a> {
	pub fn new(cursor: Cursor<'a>) -> Self {
		Self {
			state: State::default(),
			stack: Vec::with_capacity(4), // Nesting is usually shallow.
			cursor,
			pending: Pending::default(),
			halted: false,
		}
	}
}


impl<'a> Iterator for Automata<'a> {
	type Item = Output;

	fn next(&mut self) -> Option<Output> {
		while !self.halted {
			// We must temporarily take the state so that we can consume it.
			let state = std::mem::take(&mut self.state);

			let transition = state.visit(&self.cursor, &mut self.pending);

			if transition.consume {
				self.cursor.step();
			}

			match transition.flow {
				Flow::Goto(state) => self.state = state,

				Flow::Enter { state, invoker } => {
					trace!("entering {} from {}, depth {}", state.name(), invoker.name(), self.stack.len() + 1);
					self.stack.push(invoker);
					self.state = state;
				}

				Flow::Return => {
					let invoker = self.stack.pop().unwrap_or_default();
					trace!("resuming {}, depth {}", invoker.name(), self.stack.len());
					self.state = invoker;
				}

				Flow::Halt => self.halted = true,
			}

			match transition.output {
				Some(Ok(token)) => {
					debug!("token {} at {}", token, token.span);
					return Some(Ok(token));
				}

				Some(Err(error)) => {
					debug!("lexical error: {}", error);
					return Some(Err(error));
				}

				None => (),
			}
		}

		None
	}
}


/// Build an operator or end of input token spanning from the given start up to the
/// cursor.
fn token(kind: TokenKind, text: &[u8], start: usize, pos: SourcePos, cursor: &Cursor) -> Token {
	Token {
		kind,
		text: String::from_utf8_lossy(text).into_owned(),
		span: Span::new(start, cursor.offset()),
		pos,
	}
}
