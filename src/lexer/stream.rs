use std::{
	sync::mpsc::{self, Receiver},
	thread::{self, JoinHandle},
};

use log::{debug, warn};

use super::{Error, Lexer, Token};


/// How many tokens the producer may run ahead of the consumer.
const CAPACITY: usize = 64;


/// Tokens delivered by a producer thread, in order.
/// The stream ends after the end of input token or the first error. Dropping the stream
/// before it is drained stops the producer.
#[derive(Debug)]
pub struct Stream {
	receiver: Receiver<Result<Token, Error>>,
	producer: JoinHandle<()>,
}


/// Tokenize the input in a separate thread.
pub fn stream(input: String) -> Stream {
	let (sender, receiver) = mpsc::sync_channel(CAPACITY);

	let producer = thread::spawn(move || {
		for item in Lexer::from(input.as_str()) {
			if sender.send(item).is_err() {
				debug!("token stream consumer hung up");
				break;
			}
		}
	});

	Stream { receiver, producer }
}


impl Stream {
	/// Stop consuming tokens, and wait for the producer to finish.
	pub fn cancel(self) {
		let Stream { receiver, producer } = self;
		drop(receiver);

		if producer.join().is_err() {
			warn!("token stream producer panicked");
		}
	}
}


impl Iterator for Stream {
	type Item = Result<Token, Error>;

	fn next(&mut self) -> Option<Self::Item> {
		self.receiver.recv().ok()
	}
}
