use std::{io, path::Path};

use assert_matches::assert_matches;

use crate::{
	fmt,
	symbol,
	syntax::{self, ast, SourcePos},
	tests,
};
use super::{analyze, program, ErrorKind, Errors, Expr, Program, Statement};


fn analyze_str(input: &str, interner: &mut symbol::Interner) -> Result<Program, Errors> {
	let source = syntax::Source::from_str(Path::new("<test>"), input);
	let analysis = syntax::Analysis::analyze(source, interner);

	assert!(analysis.errors.is_empty(), "{:?}", analysis.errors);

	analyze(analysis.ast, interner)
}


fn test_dir<P, F>(path: P, mut check: F) -> io::Result<()>
where
	P: AsRef<Path>,
	F: FnMut(&Result<Program, Errors>) -> bool,
{
	let mut interner = symbol::Interner::new();

	tests::util::test_dir(
		path,
		move |path, file| {
			let source = syntax::Source::from_reader(path, file)?;
			let syntactic_analysis = syntax::Analysis::analyze(source, &mut interner);

			if !syntactic_analysis.errors.is_empty() {
				panic!("{}: {:?}", path.display(), syntactic_analysis.errors);
			}

			let result = analyze(syntactic_analysis.ast, &mut interner);

			if !check(&result) {
				match result {
					Ok(program) => panic!("{}: {:#?}", path.display(), program),

					Err(errors) => panic!("{}: {}", path.display(), fmt::Show(errors, &interner)),
				}
			}

			Ok(())
		}
	)
}


#[test]
fn test_positive() -> io::Result<()> {
	test_dir(
		"src/semantic/tests/data/positive",
		Result::is_ok
	)
}


#[test]
fn test_negative() -> io::Result<()> {
	test_dir(
		"src/semantic/tests/data/negative",
		Result::is_err,
	)
}


#[test]
fn test_resolution_depths() {
	let mut interner = symbol::Interner::new();

	let program = analyze_str(
		r#"
			var a = 1;
			{
				var b = 2;
				fun f(c) {
					print a;
					print b;
					print c;
				}
			}
		"#,
		&mut interner,
	).expect("program should be valid");

	let block = match &program.statements.0[1] {
		Statement::Block(block) => block,
		statement => panic!("unexpected statement: {:?}", statement),
	};

	let body = match &block.0[1] {
		Statement::Function(function) => &function.body,
		statement => panic!("unexpected statement: {:?}", statement),
	};

	assert_matches!(
		&body.0[..],
		[
			Statement::Print(Expr::Variable { depth: None, .. }),
			Statement::Print(Expr::Variable { depth: Some(1), .. }),
			Statement::Print(Expr::Variable { depth: Some(0), .. }),
		]
	);
}


#[test]
fn test_for_loop_scope() {
	let mut interner = symbol::Interner::new();

	let program = analyze_str(
		"for (var i = 0; i < 3; i = i + 1) { print i; }",
		&mut interner,
	).expect("program should be valid");

	assert_matches!(
		&program.statements.0[..],
		[
			Statement::Loop {
				init: Some(_),
				condition: Some(Expr::BinaryOp { .. }),
				increment: Some(Expr::Assign { depth: Some(0), .. }),
				body,
			}
		] => {
			assert_matches!(
				&**body,
				Statement::Block(block) => assert_matches!(
					&block.0[..],
					[Statement::Print(Expr::Variable { depth: Some(1), .. })]
				)
			);
		}
	);
}


#[test]
fn test_this_depth() {
	let mut interner = symbol::Interner::new();

	let program = analyze_str(
		"class A { method() { return fun () { return this; }; } }",
		&mut interner,
	).expect("program should be valid");

	let method = match &program.statements.0[0] {
		Statement::Class { methods, .. } => &methods[0],
		statement => panic!("unexpected statement: {:?}", statement),
	};

	assert_eq!(method.kind, program::FunctionKind::Method);

	assert_matches!(
		&method.body.0[..],
		[Statement::Return(Some(Expr::Function(function)))] => {
			assert_eq!(function.kind, program::FunctionKind::Anonymous);
			assert_matches!(
				&function.body.0[..],
				[Statement::Return(Some(Expr::This { depth: Some(2), .. }))]
			);
		}
	);
}


#[test]
fn test_errors() {
	let mut interner = symbol::Interner::new();

	let errors = analyze_str(
		r#"
			return 1;
			print this;
			{
				var a = 1;
				var a = 2;
				var b = b;
			}
			class A {
				init() { return 1; }
			}
			fun f(x, x) {}
		"#,
		&mut interner,
	).expect_err("program should be invalid");

	assert_matches!(
		&errors.0[..],
		[
			super::Error { kind: ErrorKind::ReturnOutsideFunction, .. },
			super::Error { kind: ErrorKind::ThisOutsideClass, .. },
			super::Error { kind: ErrorKind::DuplicateVariable(_), .. },
			super::Error { kind: ErrorKind::SelfReference(_), .. },
			super::Error { kind: ErrorKind::ReturnValueInInitializer, .. },
			super::Error { kind: ErrorKind::DuplicateVariable(_), .. },
		]
	);

	assert_eq!(
		fmt::Show(&errors.0[3], &interner).to_string(),
		"[line 7] Error at 'b': Can't read local variable in its own initializer."
	);
}


#[test]
fn test_globals_may_be_redeclared() {
	let mut interner = symbol::Interner::new();

	let result = analyze_str("var a = 1; var a = a; fun a() {}", &mut interner);

	assert_matches!(result, Ok(_));
}


#[test]
fn test_loop_control_outside_loop() {
	let mut interner = symbol::Interner::new();
	let f = interner.get_or_intern("f");
	let pos = |line| SourcePos { line, column: 1 };

	let function = |name: symbol::Symbol, statement: ast::Statement| ast::Statement::Function(
		ast::Function {
			name: Some(name),
			params: Box::new([]),
			body: vec![statement].into(),
			pos: pos(2),
		}
	);

	// Loop control may not cross function boundaries, even inside a loop.
	let ast = ast::Ast {
		source: Path::new("<test>").into(),
		statements: vec![
			ast::Statement::Break { pos: pos(1) },
			function(f, ast::Statement::Continue { pos: pos(2) }),
			ast::Statement::While {
				condition: ast::Expr::Literal { literal: ast::Literal::Bool(true), pos: pos(3) },
				body: Box::new(function(f, ast::Statement::Break { pos: pos(4) })),
				pos: pos(3),
			},
		].into(),
	};

	let errors = analyze(ast, &mut interner).expect_err("program should be invalid");

	assert_matches!(
		&errors.0[..],
		[
			super::Error { kind: ErrorKind::BreakOutsideLoop, pos: SourcePos { line: 1, .. } },
			super::Error { kind: ErrorKind::ContinueOutsideLoop, pos: SourcePos { line: 2, .. } },
			super::Error { kind: ErrorKind::BreakOutsideLoop, pos: SourcePos { line: 4, .. } },
		]
	);

	assert_eq!(
		fmt::Show(&errors.0[1], &interner).to_string(),
		"[line 2] Error at 'continue': Can't use 'continue' outside of a loop."
	);
}


#[test]
fn test_loops_keep_method_context() {
	let mut interner = symbol::Interner::new();

	let program = analyze_str(
		"class A { m() { for (var i = 0; i < 3; i = i + 1) { if (i == 1) break; print this; } } }",
		&mut interner,
	).expect("program should be valid");

	let method = match &program.statements.0[0] {
		Statement::Class { methods, .. } => &methods[0],
		statement => panic!("unexpected statement: {:?}", statement),
	};

	assert_matches!(
		&method.body.0[..],
		[Statement::Loop { body, .. }] => assert_matches!(
			&**body,
			Statement::Block(block) => assert_matches!(
				&block.0[..],
				[
					Statement::If { then, .. },
					Statement::Print(Expr::This { depth: Some(3), .. }),
				] => assert_matches!(&**then, Statement::Break)
			)
		)
	);
}
