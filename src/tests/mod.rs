mod util;

use std::{
	io::{self, BufReader},
	path::Path,
};

use crate::{
	lexer::{self, TokenKind},
	source::{self, Unit},
};


fn units(path: &Path, file: std::fs::File) -> io::Result<Vec<Unit>> {
	source::lines(path.display().to_string().into(), BufReader::new(file))
		.filter(|unit| !matches!(unit, Ok(unit) if unit.text.trim().is_empty()))
		.collect()
}


#[test]
fn test_valid_demos() -> io::Result<()> {
	let files = util::test_dir(
		"demos/valid",
		|path, file| {
			for unit in units(path, file)? {
				match lexer::tokenize(&unit.text) {
					Ok(tokens) => assert_eq!(
						tokens.last().map(|token| token.kind),
						Some(TokenKind::EndOfInput),
						"{}",
						unit
					),
					Err(error) => panic!("{}: {}\n{}", unit, error, unit.text),
				}
			}

			Ok(())
		}
	)?;

	assert!(files > 0);

	Ok(())
}


#[test]
fn test_invalid_demos() -> io::Result<()> {
	let files = util::test_dir(
		"demos/invalid",
		|path, file| {
			for unit in units(path, file)? {
				assert!(
					lexer::tokenize(&unit.text).is_err(),
					"{} should fail: {}",
					unit,
					unit.text
				);
			}

			Ok(())
		}
	)?;

	assert!(files > 0);

	Ok(())
}
