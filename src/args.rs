use std::{ffi::OsString, path::Path};

use clap::{clap_app, crate_description, crate_version};
use log::LevelFilter;

use pesh::source::Source;


#[derive(Debug)]
pub enum Command {
	Help(Box<str>),
	Version(Box<str>),
	Run(Args)
}


#[derive(Debug)]
pub struct Args {
	/// Where to read input from.
	pub source: Source,
	/// Positional parameters following the command string or script path. They are
	/// recorded only, as nothing is evaluated.
	pub params: Vec<String>,
	/// Print tokens as JSON lines.
	pub json: bool,
	/// Whether colored output was not disabled.
	pub color: bool,
	/// Maximum log level.
	pub log_level: LevelFilter,
}


pub fn parse<A, T>(args: A) -> clap::Result<Command>
where
	A: IntoIterator<Item = T>,
	T: Into<OsString> + Clone
{
	let app = clap_app!(
		pesh =>
			(version: crate_version!())
			(about: crate_description!())
			(@setting TrailingVarArg)
			(@arg command: -c "Tokenize the command string given as first argument")
			(@arg stdin: -s "Read input from the standard input")
			(@arg json: --json "Print tokens as JSON lines")
			(@arg no_color: --("no-color") "Disable colored output")
			(@arg verbose: -v ... "Increase log verbosity, may be repeated")
			(@arg args: ... "Command string or script path, followed by positional parameters")
	);

	let matches = match app.get_matches_from_safe(args) {
		Ok(matches) => matches,

		Err(error) => return match error.kind {
			clap::ErrorKind::HelpDisplayed => Ok(
				Command::Help(error.message.into_boxed_str())
			),
			clap::ErrorKind::VersionDisplayed => Ok(
				Command::Version(error.message.into_boxed_str())
			),
			_ => Err(error)
		}
	};

	let mut free = matches
		.values_of_lossy("args")
		.unwrap_or_default()
		.into_iter();

	let source = if matches.is_present("command") {
		match free.next() {
			Some(command) => Source::Command(command),
			None => return Err(
				clap::Error::with_description(
					"-c requires a command string",
					clap::ErrorKind::EmptyValue,
				)
			),
		}
	} else if matches.is_present("stdin") {
		Source::Stdin
	} else {
		match free.next() {
			Some(path) => Source::Script(Path::new(&path).into()),
			None => Source::Stdin,
		}
	};

	let log_level = match matches.occurrences_of("verbose") {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	};

	Ok(
		Command::Run(
			Args {
				source,
				params: free.collect(),
				json: matches.is_present("json"),
				color: !matches.is_present("no_color"),
				log_level,
			}
		)
	)
}
