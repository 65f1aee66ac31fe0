use super::*;

use assert_matches::assert_matches;


macro_rules! token {
	($kind:pat) => {
		Ok(Token { kind: $kind, .. })
	};
}

macro_rules! error {
	($error:pat) => {
		Err(Error { error: $error, .. })
	};
}

macro_rules! assert_symbol {
	($interner:ident, $symbol:ident, $expected:literal) => {
		assert_eq!($interner.resolve(*$symbol), Some($expected.as_bytes()))
	};
}


fn lex(input: &str, interner: &mut symbol::Interner) -> Vec<Result<Token, Error>> {
	let cursor = Cursor::from(input.as_bytes());
	Lexer::new(cursor, interner).collect()
}


#[test]
fn test_simple_function() {
	let input = r#"
		fun foo(bar, baz) {
			if (bar or baz == nil) { // here's a comment
				var result = do_something();
				return result;
			}
		}
	"#;

	let mut interner = symbol::Interner::new();
	let tokens = lex(input, &mut interner);

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Keyword(Keyword::Fun)),
			token!(TokenKind::Identifier(foo)),
			token!(TokenKind::OpenParens),
			token!(TokenKind::Identifier(bar1)),
			token!(TokenKind::Comma),
			token!(TokenKind::Identifier(baz1)),
			token!(TokenKind::CloseParens),
			token!(TokenKind::OpenBrace),
			token!(TokenKind::Keyword(Keyword::If)),
			token!(TokenKind::OpenParens),
			token!(TokenKind::Identifier(bar2)),
			token!(TokenKind::Operator(Operator::Or)),
			token!(TokenKind::Identifier(baz2)),
			token!(TokenKind::Operator(Operator::Equals)),
			token!(TokenKind::Literal(Literal::Nil)),
			token!(TokenKind::CloseParens),
			token!(TokenKind::OpenBrace),
			token!(TokenKind::Keyword(Keyword::Var)),
			token!(TokenKind::Identifier(result1)),
			token!(TokenKind::Operator(Operator::Assign)),
			token!(TokenKind::Identifier(do_something)),
			token!(TokenKind::OpenParens),
			token!(TokenKind::CloseParens),
			token!(TokenKind::Semicolon),
			token!(TokenKind::Keyword(Keyword::Return)),
			token!(TokenKind::Identifier(result2)),
			token!(TokenKind::Semicolon),
			token!(TokenKind::CloseBrace),
			token!(TokenKind::CloseBrace),
			token!(TokenKind::Eof),
		]
			=> {
				assert_symbol!(interner, foo, "foo");
				assert_symbol!(interner, bar1, "bar");
				assert_symbol!(interner, bar2, "bar");
				assert_symbol!(interner, baz1, "baz");
				assert_symbol!(interner, baz2, "baz");
				assert_symbol!(interner, result1, "result");
				assert_symbol!(interner, result2, "result");
				assert_symbol!(interner, do_something, "do_something");
			}
	);
}


#[test]
fn test_operators() {
	let mut interner = symbol::Interner::new();
	let tokens = lex("! != = == < <= > >= + - * / %", &mut interner);

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Operator(Operator::Not)),
			token!(TokenKind::Operator(Operator::NotEquals)),
			token!(TokenKind::Operator(Operator::Assign)),
			token!(TokenKind::Operator(Operator::Equals)),
			token!(TokenKind::Operator(Operator::Lower)),
			token!(TokenKind::Operator(Operator::LowerEquals)),
			token!(TokenKind::Operator(Operator::Greater)),
			token!(TokenKind::Operator(Operator::GreaterEquals)),
			token!(TokenKind::Operator(Operator::Plus)),
			token!(TokenKind::Operator(Operator::Minus)),
			token!(TokenKind::Operator(Operator::Times)),
			token!(TokenKind::Operator(Operator::Div)),
			token!(TokenKind::Operator(Operator::Mod)),
			token!(TokenKind::Eof),
		]
	);
}


#[test]
fn test_maximal_munch() {
	let mut interner = symbol::Interner::new();
	let tokens = lex("a>=b==!c", &mut interner);

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Identifier(_)),
			token!(TokenKind::Operator(Operator::GreaterEquals)),
			token!(TokenKind::Identifier(_)),
			token!(TokenKind::Operator(Operator::Equals)),
			token!(TokenKind::Operator(Operator::Not)),
			token!(TokenKind::Identifier(_)),
			token!(TokenKind::Eof),
		]
	);
}


#[test]
fn test_numbers() {
	let mut interner = symbol::Interner::new();
	let tokens = lex("123 45.67 8. .5", &mut interner);

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Literal(Literal::Number(n1))),
			token!(TokenKind::Literal(Literal::Number(n2))),
			token!(TokenKind::Literal(Literal::Number(n3))),
			token!(TokenKind::Dot),
			token!(TokenKind::Dot),
			token!(TokenKind::Literal(Literal::Number(n4))),
			token!(TokenKind::Eof),
		]
			=> {
				assert_eq!(*n1, 123.0);
				assert_eq!(*n2, 45.67);
				assert_eq!(*n3, 8.0);
				assert_eq!(*n4, 5.0);
			}
	);
}


#[test]
fn test_multiline_string() {
	let mut interner = symbol::Interner::new();
	let tokens = lex("\"hello\nworld\" after", &mut interner);

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Literal(Literal::String(string))),
			Ok(Token { kind: TokenKind::Identifier(_), pos: SourcePos { line: 2, .. }, .. }),
			token!(TokenKind::Eof),
		]
			=> assert_eq!(string.as_ref(), b"hello\nworld")
	);
}


#[test]
fn test_lexeme() {
	let mut interner = symbol::Interner::new();
	let tokens = lex("var name = \"text\";", &mut interner);

	let lexemes: Vec<&[u8]> = tokens
		.iter()
		.map(|token| token.as_ref().map(|token| token.lexeme.as_ref()))
		.collect::<Result<_, _>>()
		.expect("unexpected lexical error");

	assert_eq!(
		lexemes,
		vec![
			b"var".as_ref(),
			b"name".as_ref(),
			b"=".as_ref(),
			b"\"text\"".as_ref(),
			b";".as_ref(),
			b"".as_ref(),
		]
	);
}


#[test]
fn test_comments() {
	let input = r#"
		// line comment
		/* block
		   comment */
		/* outer /* inner */ still outer */
		a / b
	"#;

	let mut interner = symbol::Interner::new();
	let tokens = lex(input, &mut interner);

	assert_matches!(
		&tokens[..],
		[
			Ok(Token { kind: TokenKind::Identifier(_), pos: SourcePos { line: 6, .. }, .. }),
			token!(TokenKind::Operator(Operator::Div)),
			token!(TokenKind::Identifier(_)),
			token!(TokenKind::Eof),
		]
	);
}


#[test]
fn test_unterminated() {
	let mut interner = symbol::Interner::new();

	assert_matches!(
		&lex("print \"oops", &mut interner)[..],
		[
			token!(TokenKind::Keyword(Keyword::Print)),
			error!(ErrorKind::UnterminatedString),
			token!(TokenKind::Eof),
		]
	);

	assert_matches!(
		&lex("/* /* */", &mut interner)[..],
		[
			error!(ErrorKind::UnterminatedComment),
			token!(TokenKind::Eof),
		]
	);
}


#[test]
fn test_invalid_tokens() {
	let input = "var a = 1 @ 2; # ç\nprint a;";

	let mut interner = symbol::Interner::new();
	let tokens = lex(input, &mut interner);

	assert_matches!(
		&tokens[..],
		[
			token!(TokenKind::Keyword(Keyword::Var)),
			token!(TokenKind::Identifier(_)),
			token!(TokenKind::Operator(Operator::Assign)),
			token!(TokenKind::Literal(Literal::Number(_))),
			error!(ErrorKind::Unexpected('@')),
			token!(TokenKind::Literal(Literal::Number(_))),
			token!(TokenKind::Semicolon),
			error!(ErrorKind::Unexpected('#')),
			error!(ErrorKind::Unexpected('ç')),
			Ok(Token { kind: TokenKind::Keyword(Keyword::Print), pos: SourcePos { line: 2, column: 1 }, .. }),
			token!(TokenKind::Identifier(_)),
			token!(TokenKind::Semicolon),
			token!(TokenKind::Eof),
		]
	);
}


#[test]
fn test_keywords() {
	let input = "and class else false for fun if nil or print return super this true var while break continue";

	let mut interner = symbol::Interner::new();
	let tokens = lex(input, &mut interner);

	assert!(tokens.iter().all(|token| !matches!(token, token!(TokenKind::Identifier(_)))));
	assert_eq!(tokens.len(), 19);
}
