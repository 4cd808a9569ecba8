use super::TokenKind;


/// The operator table: every control and redirection operator lexeme.
const OPERATORS: [(&[u8], TokenKind); 18] = [
	(b"&", TokenKind::And),
	(b"&&", TokenKind::AndIf),
	(b"(", TokenKind::OpenParen),
	(b")", TokenKind::CloseParen),
	(b";", TokenKind::Semi),
	(b";;", TokenKind::DSemi),
	(b"\n", TokenKind::Newline),
	(b"|", TokenKind::Or),
	(b"||", TokenKind::OrIf),
	(b"<", TokenKind::Less),
	(b">", TokenKind::Great),
	(b">|", TokenKind::Clobber),
	(b"<<", TokenKind::DLess),
	(b">>", TokenKind::DGreat),
	(b"<&", TokenKind::LessAnd),
	(b">&", TokenKind::GreatAnd),
	(b"<<-", TokenKind::DLessDash),
	(b"<>", TokenKind::LessGreat),
];


/// The longest operator lexeme.
pub const MAX_LEN: usize = 3;


/// Get the operator kind for an exact lexeme.
pub fn lookup(lexeme: &[u8]) -> Option<TokenKind> {
	OPERATORS
		.iter()
		.find(|(op, _)| *op == lexeme)
		.map(|(_, kind)| *kind)
}


/// Check if the lexeme extended with the given character is still an operator.
pub fn extends(lexeme: &[u8], next: u8) -> bool {
	if lexeme.len() >= MAX_LEN {
		return false;
	}

	let mut candidate = [0; MAX_LEN];
	candidate[.. lexeme.len()].copy_from_slice(lexeme);
	candidate[lexeme.len()] = next;

	lookup(&candidate[..= lexeme.len()]).is_some()
}


/// Check if a character starts an operator.
pub fn is_start(c: u8) -> bool {
	b"&();|<>\n".contains(&c)
}


/// Get the lexeme for an operator kind.
pub fn lexeme(kind: TokenKind) -> Option<&'static [u8]> {
	OPERATORS
		.iter()
		.find(|(_, op)| *op == kind)
		.map(|(lexeme, _)| *lexeme)
}
