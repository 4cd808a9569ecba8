use super::*;

use assert_matches::assert_matches;


macro_rules! error {
	($error:pat) => {
		Err(Error { error: $error, .. })
	};
}


fn lex(input: &str) -> Vec<(TokenKind, String)> {
	tokenize(input)
		.unwrap_or_else(|error| panic!("failed to tokenize {:?}: {}", input, error))
		.into_iter()
		.map(|token| (token.kind, token.text))
		.collect()
}


fn word(text: &str) -> (TokenKind, String) {
	(TokenKind::Word, text.to_owned())
}


fn op(kind: TokenKind, text: &str) -> (TokenKind, String) {
	(kind, text.to_owned())
}


fn eof() -> (TokenKind, String) {
	(TokenKind::EndOfInput, String::new())
}


fn assert_single_word(input: &str) {
	assert_eq!(lex(input), vec![word(input), eof()]);
}


#[test]
fn test_simple_command() {
	let tokens = tokenize("ls -la /tmp").expect("valid input");

	assert_matches!(
		&tokens[..],
		[
			Token { kind: TokenKind::Word, span: Span { start: 0, end: 2 }, .. },
			Token { kind: TokenKind::Word, span: Span { start: 3, end: 6 }, .. },
			Token { kind: TokenKind::Word, span: Span { start: 7, end: 11 }, .. },
			Token { kind: TokenKind::EndOfInput, span: Span { start: 11, end: 11 }, .. },
		]
	);

	assert_eq!(lex("ls -la /tmp"), vec![word("ls"), word("-la"), word("/tmp"), eof()]);
}


#[test]
fn test_words_match_fields() {
	let inputs = [
		"ls -la /tmp",
		"  leading and trailing  ",
		"a\tb\t\tc",
		"one",
		"",
	];

	for input in inputs.iter() {
		let words = lex(input)
			.into_iter()
			.filter(|(kind, _)| *kind == TokenKind::Word)
			.count();

		assert_eq!(words, input.split_whitespace().count(), "input: {:?}", input);
	}
}


#[test]
fn test_empty_inputs() {
	assert_eq!(lex(""), vec![eof()]);
	assert_eq!(lex("   \t "), vec![eof()]);
	assert_eq!(lex("# just a comment"), vec![eof()]);
}


#[test]
fn test_double_quotes_do_not_split() {
	assert_eq!(lex("echo \"a b\""), vec![word("echo"), word("\"a b\""), eof()]);
}


#[test]
fn test_single_quotes_are_verbatim() {
	assert_eq!(
		lex(r#"echo 'a\b "c" $d'"#),
		vec![word("echo"), word(r#"'a\b "c" $d'"#), eof()]
	);
}


#[test]
fn test_quotes_glue_into_one_word() {
	assert_single_word(r#"a'b c'"d e"f"#);
}


#[test]
fn test_redirection_operator_is_one_token() {
	assert_eq!(
		lex("cat <&2"),
		vec![word("cat"), op(TokenKind::LessAnd, "<&"), word("2"), eof()]
	);
}


#[test]
fn test_io_number() {
	assert_eq!(
		lex("3>file.txt"),
		vec![op(TokenKind::IoNumber, "3"), op(TokenKind::Great, ">"), word("file.txt"), eof()]
	);

	assert_eq!(
		lex("echo 2>&1"),
		vec![
			word("echo"),
			op(TokenKind::IoNumber, "2"),
			op(TokenKind::GreatAnd, ">&"),
			word("1"),
			eof(),
		]
	);

	assert_eq!(
		lex("read 0<input"),
		vec![word("read"), op(TokenKind::IoNumber, "0"), op(TokenKind::Less, "<"), word("input"), eof()]
	);
}


#[test]
fn test_io_number_requires_adjacent_redirection() {
	assert_eq!(
		lex("echo 2 >x"),
		vec![word("echo"), word("2"), op(TokenKind::Great, ">"), word("x"), eof()]
	);

	assert_eq!(
		lex("echo 2|cat"),
		vec![word("echo"), word("2"), op(TokenKind::Or, "|"), word("cat"), eof()]
	);

	assert_eq!(
		lex("a2>x"),
		vec![word("a2"), op(TokenKind::Great, ">"), word("x"), eof()]
	);

	assert_eq!(
		lex("\"2\">x"),
		vec![word("\"2\""), op(TokenKind::Great, ">"), word("x"), eof()]
	);
}


#[test]
fn test_comment() {
	assert_eq!(lex("echo hi # comment"), vec![word("echo"), word("hi"), eof()]);

	assert_eq!(
		lex("a # comment\nb"),
		vec![word("a"), op(TokenKind::Newline, "\n"), word("b"), eof()]
	);
}


#[test]
fn test_hash_inside_word_is_text() {
	assert_eq!(lex("echo x#y #z"), vec![word("echo"), word("x#y"), eof()]);
}


#[test]
fn test_maximal_munch() {
	assert_eq!(
		lex("a&&b"),
		vec![word("a"), op(TokenKind::AndIf, "&&"), word("b"), eof()]
	);

	assert_eq!(
		lex("cat <<-EOF"),
		vec![word("cat"), op(TokenKind::DLessDash, "<<-"), word("EOF"), eof()]
	);

	assert_eq!(
		lex("a&&&b"),
		vec![
			word("a"),
			op(TokenKind::AndIf, "&&"),
			op(TokenKind::And, "&"),
			word("b"),
			eof(),
		]
	);
}


#[test]
fn test_every_operator() {
	let cases = [
		("&", TokenKind::And),
		("&&", TokenKind::AndIf),
		("(", TokenKind::OpenParen),
		(")", TokenKind::CloseParen),
		(";", TokenKind::Semi),
		(";;", TokenKind::DSemi),
		("\n", TokenKind::Newline),
		("|", TokenKind::Or),
		("||", TokenKind::OrIf),
		("<", TokenKind::Less),
		(">", TokenKind::Great),
		(">|", TokenKind::Clobber),
		("<<", TokenKind::DLess),
		(">>", TokenKind::DGreat),
		("<&", TokenKind::LessAnd),
		(">&", TokenKind::GreatAnd),
		("<<-", TokenKind::DLessDash),
		("<>", TokenKind::LessGreat),
	];

	for (lexeme, kind) in cases.iter() {
		assert_eq!(
			lex(&format!("a{}b", lexeme)),
			vec![word("a"), op(*kind, lexeme), word("b"), eof()],
			"operator {:?}",
			lexeme,
		);
	}
}


#[test]
fn test_command_list() {
	assert_eq!(
		lex("(cd /tmp; ls) || echo failed &\nwait"),
		vec![
			op(TokenKind::OpenParen, "("),
			word("cd"),
			word("/tmp"),
			op(TokenKind::Semi, ";"),
			word("ls"),
			op(TokenKind::CloseParen, ")"),
			op(TokenKind::OrIf, "||"),
			word("echo"),
			word("failed"),
			op(TokenKind::And, "&"),
			op(TokenKind::Newline, "\n"),
			word("wait"),
			eof(),
		]
	);
}


#[test]
fn test_escape() {
	assert_eq!(lex("echo a\\ b"), vec![word("echo"), word("a b"), eof()]);
	assert_eq!(lex("a\\;b"), vec![word("a;b"), eof()]);
	assert_eq!(lex("\\#not-a-comment"), vec![word("#not-a-comment"), eof()]);
	assert_eq!(lex("\\$HOME"), vec![word("$HOME"), eof()]);
}


#[test]
fn test_escaped_digits_are_not_io_numbers() {
	assert_eq!(
		lex("\\2>x"),
		vec![word("2"), op(TokenKind::Great, ">"), word("x"), eof()]
	);
}


#[test]
fn test_line_continuation() {
	let tokens = tokenize("ec\\\nho hi").expect("valid input");

	assert_matches!(
		&tokens[..],
		[
			Token { kind: TokenKind::Word, span: Span { start: 0, end: 6 }, .. },
			Token { kind: TokenKind::Word, .. },
			Token { kind: TokenKind::EndOfInput, .. },
		]
			=> assert_eq!(tokens[0].text, "echo")
	);

	// A continuation does not start a token, so a comment may still follow it.
	assert_eq!(lex("\\\n#c"), vec![eof()]);
	assert_eq!(lex("a \\\n# c"), vec![word("a"), eof()]);

	// Nor does it make digits before a redirection any less of an IO number.
	let tokens = tokenize("2\\\n>f").expect("valid input");
	assert_matches!(
		&tokens[..],
		[
			Token { kind: TokenKind::IoNumber, span: Span { start: 0, end: 3 }, .. },
			Token { kind: TokenKind::Great, .. },
			Token { kind: TokenKind::Word, .. },
			Token { kind: TokenKind::EndOfInput, .. },
		]
			=> assert_eq!(tokens[0].text, "2")
	);
}


#[test]
fn test_trailing_backslash_is_tolerated() {
	assert_eq!(lex("echo \\"), vec![word("echo"), eof()]);
	assert_eq!(lex("echo a\\"), vec![word("echo"), word("a"), eof()]);
}


#[test]
fn test_double_quote_escapes() {
	// Escapable characters lose the backslash.
	assert_eq!(lex(r#""a\"b\$c\\d""#), vec![word(r#""a"b$c\d""#), eof()]);

	// Other backslashes are literal.
	assert_eq!(lex(r#""a\nb""#), vec![word(r#""a\nb""#), eof()]);

	// Line continuation.
	assert_eq!(lex("\"a\\\nb\""), vec![word("\"ab\""), eof()]);
}


#[test]
fn test_unterminated_quotes() {
	let tokens: Vec<_> = Lexer::from("echo \"abc").collect();
	assert_matches!(
		&tokens[..],
		[
			Ok(Token { kind: TokenKind::Word, .. }),
			error!(ErrorKind::UnterminatedQuote),
		]
	);

	assert_matches!(
		tokenize("echo 'abc"),
		Err(Error { error: ErrorKind::UnterminatedQuote, offset: 5, pos: SourcePos { line: 1, column: 5 } })
	);

	assert_matches!(tokenize("\"a $(b)"), error!(ErrorKind::UnterminatedQuote));
	assert_matches!(tokenize("\"a\\\""), error!(ErrorKind::UnterminatedQuote));
}


#[test]
fn test_lexer_stops_after_error() {
	let mut lexer = Lexer::from("'open");

	assert_matches!(lexer.next(), Some(error!(ErrorKind::UnterminatedQuote)));
	assert_matches!(lexer.next(), None);
	assert_matches!(lexer.next(), None);
}


#[test]
fn test_lexer_stops_after_end_of_input() {
	let mut lexer = Lexer::from("a");

	assert_matches!(lexer.next(), Some(Ok(Token { kind: TokenKind::Word, .. })));
	assert_matches!(lexer.next(), Some(Ok(Token { kind: TokenKind::EndOfInput, .. })));
	assert_matches!(lexer.next(), None);
}


#[test]
fn test_parameter_expansion() {
	assert_eq!(lex("echo $HOME/bin"), vec![word("echo"), word("$HOME/bin"), eof()]);
	assert_single_word("$?x");
	assert_single_word("$10");
	assert_single_word("a$_b-c");
	assert_single_word("${HOME}");
	assert_single_word("${a:-\"}\"}");
	assert_single_word("${a:-${b:-'}'}}");
	assert_single_word("${a#{x}}");
}


#[test]
fn test_lone_dollar_is_literal() {
	assert_eq!(lex("echo $"), vec![word("echo"), word("$"), eof()]);
	assert_eq!(lex("echo $ x"), vec![word("echo"), word("$"), word("x"), eof()]);
	assert_eq!(lex("\"$\""), vec![word("\"$\""), eof()]);
}


#[test]
fn test_bare_parameter_ends_at_delimiters() {
	assert_eq!(
		lex("$a;$b|$c"),
		vec![
			word("$a"),
			op(TokenKind::Semi, ";"),
			word("$b"),
			op(TokenKind::Or, "|"),
			word("$c"),
			eof(),
		]
	);
}


#[test]
fn test_command_substitution() {
	assert_eq!(lex("$(echo a) b"), vec![word("$(echo a)"), word("b"), eof()]);
	assert_single_word("$(echo ')')");
	assert_single_word("$(echo \")\")");
	assert_single_word("$(echo \\))");
	assert_single_word("$(echo $(echo a; echo b) | cat)");
	assert_single_word("$( (cd /tmp && ls) )");
	assert_single_word("x$(a)y");
}


#[test]
fn test_command_substitution_comment() {
	assert_single_word("$(echo a # ignore )\n)");
	assert_single_word("$(echo a#b)");
}


#[test]
fn test_backtick_substitution() {
	assert_eq!(lex("echo `date`"), vec![word("echo"), word("`date`"), eof()]);
	assert_single_word("`echo \\`nested\\``");
	assert_single_word("`echo \"a b\" 'c'`");
	assert_single_word("`echo a\\b`");
}


#[test]
fn test_arithmetic_expansion() {
	assert_eq!(lex("echo $((1+2))"), vec![word("echo"), word("$((1+2))"), eof()]);
	assert_single_word("$(( (1 + 2) * 3 ))");
	assert_single_word("$(( $x + ${y} + $(echo 1) ))");
	assert_single_word("$((1<2))");
}


#[test]
fn test_unterminated_expansions() {
	let inputs = [
		"echo ${a",
		"echo $(echo",
		"echo $(echo (a)",
		"echo `date",
		"echo $((1+2)",
		"echo $((1+2",
		"echo ${a:-$(b}",
		"echo $(a # )",
	];

	for input in inputs.iter() {
		assert_matches!(
			tokenize(input),
			error!(ErrorKind::UnterminatedExpansion),
			"input: {:?}",
			input
		);
	}
}


#[test]
fn test_unterminated_quote_inside_expansion() {
	assert_matches!(tokenize("$(echo 'a)"), error!(ErrorKind::UnterminatedQuote));
	assert_matches!(tokenize("${a:-\"b}"), error!(ErrorKind::UnterminatedQuote));
}


#[test]
fn test_deep_nesting() {
	assert_single_word(r#""$(echo "$(echo "$((1+$(echo 2)))")")""#);
	assert_single_word(r#"${a:-"`echo "${b:-$(echo ')')}"`"}"#);

	let mut input = String::new();
	for _ in 0 .. 200 {
		input.push_str("\"$(");
	}
	for _ in 0 .. 200 {
		input.push_str(")\"");
	}
	assert_single_word(&input);
}


#[test]
fn test_escapes_inside_expansions_are_verbatim() {
	assert_single_word(r#"$(echo \"a\")"#);
	assert_single_word(r#""$(echo "\"")""#);
	assert_single_word("${a:-\\}}");
}


#[test]
fn test_positions() {
	let tokens = tokenize("a\n  b").expect("valid input");

	assert_matches!(
		&tokens[..],
		[
			Token { kind: TokenKind::Word, pos: SourcePos { line: 1, column: 0 }, .. },
			Token { kind: TokenKind::Newline, pos: SourcePos { line: 1, column: 1 }, .. },
			Token { kind: TokenKind::Word, pos: SourcePos { line: 2, column: 2 }, .. },
			Token { kind: TokenKind::EndOfInput, .. },
		]
	);
}


#[test]
fn test_spans_are_ordered() {
	let inputs = [
		"ls -la /tmp",
		"cat <<-EOF | grep \"$x\" && echo $((1 + 2)) > out.txt",
		"a\\\nb 2>&1; (x) # trailing",
		"echo `date` ${a:-b}c 'd e'",
	];

	for input in inputs.iter() {
		let tokens = tokenize(input).expect("valid input");

		let mut last_end = 0;
		for token in &tokens {
			assert!(token.span.start >= last_end, "overlapping span in {:?}", input);
			assert!(token.span.end <= input.len());
			last_end = token.span.end;
		}

		let end = tokens.last().map(|token| token.span);
		assert_eq!(end, Some(Span::new(input.len(), input.len())));
	}
}


#[test]
fn test_span_covers_source_text() {
	let input = "echo \"a b\" $(x) 2>f";

	for token in tokenize(input).expect("valid input") {
		if token.kind == TokenKind::EndOfInput {
			assert!(token.span.is_empty());
		} else {
			assert_eq!(&input[token.span.start .. token.span.end], token.text);
			assert_eq!(token.span.len(), token.text.len());
		}
	}
}


#[test]
fn test_retokenizing_a_token_is_idempotent() {
	let inputs = [
		"ls -la /tmp",
		"echo \"a b\" 'c d' $((1+2)) $(echo x) `y` ${z}",
		"3>file.txt; a&&b || c | d &\n(e) <<- f >| g <> h",
	];

	for input in inputs.iter() {
		for token in tokenize(input).expect("valid input") {
			if token.kind == TokenKind::EndOfInput {
				continue;
			}

			let same_kind = tokenize(&token.text)
				.expect("valid token text")
				.into_iter()
				.filter(|retoken| retoken.kind == token.kind)
				.count();

			assert!(same_kind <= 1, "token {:?} split when lexed again", token.text);
		}
	}
}


#[test]
fn test_retokenizing_drops_removed_escapes() {
	// The escaping backslash is not part of the text, so the blank it protected splits
	// the word when the text is lexed again.
	let tokens = tokenize("a\\ b").expect("valid input");

	assert_matches!(
		&tokens[..],
		[
			Token { kind: TokenKind::Word, span, .. },
			Token { kind: TokenKind::EndOfInput, .. },
		]
			=> assert_eq!(span.len(), 4)
	);
	assert_eq!(tokens[0].text, "a b");

	assert_eq!(lex(&tokens[0].text), vec![word("a"), word("b"), eof()]);
}


#[test]
fn test_non_ascii_input() {
	assert_eq!(lex("echo héllo \"wörld\""), vec![word("echo"), word("héllo"), word("\"wörld\""), eof()]);
	assert_eq!(lex("a\\é"), vec![word("aé"), eof()]);
}
