use assert_matches::assert_matches;

use super::*;
use crate::{
	fmt::Show,
	symbol,
	syntax::lexer::{Cursor, Lexer},
};


/// Parse the input, returning the printed AST and the parser errors.
fn parse(input: &str) -> (String, Vec<Error>) {
	let mut interner = symbol::Interner::new();
	let mut errors = Vec::new();

	let tokens: Vec<Token> = Lexer::new(Cursor::from(input.as_bytes()), &mut interner)
		.filter_map(Result::ok)
		.collect();

	let block = Parser::new(tokens.into_iter(), |error| errors.push(error)).parse();

	let printed = block.0
		.iter()
		.map(|statement| Show(statement, &interner).to_string())
		.collect::<Vec<_>>()
		.join("\n");

	(printed, errors)
}


#[test]
fn test_precedence() {
	let (ast, errors) = parse("print -123 * (45.67);");

	assert!(errors.is_empty());
	assert_eq!(ast, "(print (* (- 123) (group 45.67)))");

	let (ast, _) = parse("print 1 + 2 * 3 - 4 < 5 == !true;");
	assert_eq!(ast, "(print (== (< (- (+ 1 (* 2 3)) 4) 5) (! true)))");

	let (ast, _) = parse("a = b = c or d and e;");
	assert_eq!(ast, "(; (= a (= b (or c (and d e)))))");
}


#[test]
fn test_calls_and_properties() {
	let (ast, errors) = parse("a.b(1, 2).c = f()();");

	assert!(errors.is_empty());
	assert_eq!(ast, "(; (= (. (call (. a b) 1 2) c) (call (call f))))");
}


#[test]
fn test_declarations() {
	let (ast, errors) = parse(r#"
		class Point {
			init(x, y) { this.x = x; }
			norm() { return this.x; }
		}
		fun add(a, b) { return a + b; }
		var f = fun (x) { return; };
		var empty;
	"#);

	assert!(errors.is_empty(), "{:?}", errors);
	assert_eq!(
		ast,
		[
			"(class Point (fun init (x y) (; (= (. this x) x))) (fun norm () (return (. this x))))",
			"(fun add (a b) (return (+ a b)))",
			"(var f = (fun (x) (return)))",
			"(var empty)",
		].join("\n")
	);
}


#[test]
fn test_control_flow() {
	let (ast, errors) = parse(r#"
		if (a) print 1; else { print 2; }
		while (true) { break; }
		for (var i = 0; i < 3; i = i + 1) continue;
		for (;;) break;
	"#);

	assert!(errors.is_empty(), "{:?}", errors);
	assert_eq!(
		ast,
		[
			"(if-else a (print 1) (block (print 2)))",
			"(while true (block (break)))",
			"(for (var i = 0) (< i 3) (= i (+ i 1)) (continue))",
			"(for _ _ _ (break))",
		].join("\n")
	);
}


#[test]
fn test_implicit_print() {
	let (ast, errors) = parse("1 + 2");

	assert!(errors.is_empty());
	assert_eq!(ast, "(print (+ 1 2))");

	// Only when the expression is the whole input.
	let (_, errors) = parse("print 1; 1 + 2");
	assert_matches!(&errors[..], [Error::Unexpected { token, .. }] if token.is_eof());
}


#[test]
fn test_synchronize() {
	let (ast, errors) = parse("var = 1; print 2; (a) b; print 3;");

	assert_matches!(
		&errors[..],
		[
			Error::Unexpected { expected: "variable name", .. },
			Error::Unexpected { expected: "';' after expression", .. },
		]
	);
	assert_eq!(ast, "(print 2)\n(print 3)");
}


#[test]
fn test_invalid_assignment() {
	let (ast, errors) = parse("a + b = c;");

	assert_matches!(&errors[..], [Error::InvalidAssignment { .. }]);
	assert_eq!(ast, "(; (+ a b))");
	assert_eq!(
		errors[0].to_string(),
		"[line 1] Error at '=': Invalid assignment target."
	);
}


#[test]
fn test_loop_control_outside_loop() {
	let (_, errors) = parse("break;");
	assert_matches!(&errors[..], [Error::OutsideLoop { .. }]);
	assert_eq!(
		errors[0].to_string(),
		"[line 1] Error at 'break': Can't use 'break' outside of a loop."
	);

	let (_, errors) = parse("while (true) { fun f() { continue; } }");
	assert_matches!(&errors[..], [Error::OutsideLoop { .. }]);

	let (_, errors) = parse("while (true) { fun f() { while (false) continue; } break; }");
	assert!(errors.is_empty());
}


#[test]
fn test_too_many_arguments() {
	let args = vec!["1"; 256].join(", ");
	let (_, errors) = parse(&format!("f({});", args));

	assert_matches!(&errors[..], [Error::TooManyArguments { .. }]);

	let params: Vec<String> = (0 .. 256).map(|i| format!("p{}", i)).collect();
	let (ast, errors) = parse(&format!("fun f({}) {{}}", params.join(", ")));

	assert_matches!(&errors[..], [Error::TooManyParameters { .. }]);
	assert!(ast.starts_with("(fun f (p0 p1"));
}


#[test]
fn test_error_at_end() {
	let (_, errors) = parse("print (1");

	assert_matches!(&errors[..], [Error::Unexpected { .. }]);
	assert_eq!(
		errors[0].to_string(),
		"[line 1] Error at end: Expect ')' after expression."
	);
}
