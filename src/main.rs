mod args;

use std::io::{self, Write};

use log::debug;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use pesh::{
	dump::{self, Format, SyntaxError},
	term::color::Palette,
};

use args::{Args, Command};


fn main() -> ! {
	let command = match args::parse(std::env::args_os()) {
		Ok(command) => command,
		Err(error) => {
			eprint!("{}", error);
			std::process::exit(1)
		}
	};

	let result = match command {
		Command::Run(args) => run(args),
		Command::Help(msg) | Command::Version(msg) => {
			println!("{}", msg);
			std::process::exit(0)
		},
	};

	let exit_code = match result {
		Ok(code) => code,
		Err(error) => {
			eprintln!("pesh: {}", error);
			1
		}
	};

	std::process::exit(exit_code)
}


fn run(args: Args) -> io::Result<i32> {
	let color_choice = if args.color { ColorChoice::Auto } else { ColorChoice::Never };

	if TermLogger::init(args.log_level, Config::default(), TerminalMode::Stderr, color_choice).is_err() {
		eprintln!("pesh: failed to initialize logging");
	}

	if !args.params.is_empty() {
		debug!("ignoring {} positional parameters", args.params.len());
	}

	let format = if args.json {
		Format::Json
	} else {
		Format::Plain(Palette::for_stdout(args.color))
	};
	let palette = Palette::for_stderr(args.color);

	let stdout = io::stdout();
	let mut out = stdout.lock();

	let mut failed = 0usize;

	for unit in args.source.units()? {
		let unit = unit?;

		if let Err(error) = dump::dump(&mut out, &unit, format)? {
			out.flush()?;
			eprintln!("{}", SyntaxError { unit: &unit, error: &error, palette });
			failed += 1;
		}
	}

	out.flush()?;

	if failed > 0 {
		debug!("{} units failed to tokenize", failed);
		Ok(2)
	} else {
		Ok(0)
	}
}
