use std::{
	io::{self, Read},
	path::Path,
};

use assert_matches::assert_matches;
use serial_test::serial;

use crate::{
	fmt,
	semantic,
	symbol,
	syntax,
	tests,
};
use super::{Panic, Runtime};


/// Analyze and evaluate a source in the given runtime, returning the error message if
/// evaluation fails. Static errors fail the test.
fn eval(runtime: &mut Runtime<Vec<u8>>, path: &Path, input: &str) -> Result<(), String> {
	let source = syntax::Source::from_str(path, input);
	let analysis = syntax::Analysis::analyze(source, runtime.interner_mut());

	if !analysis.errors.is_empty() {
		for error in analysis.errors.iter() {
			eprintln!("{}", error);
		}

		panic!("{}: syntax errors", path.display());
	}

	let program = match semantic::analyze(analysis.ast, runtime.interner_mut()) {
		Ok(program) => program,
		Err(errors) => panic!("{}", fmt::Show(&errors, runtime.interner())),
	};

	let program = Box::leak(Box::new(program));

	runtime
		.eval(program)
		.map_err(|panic| fmt::Show(&panic, runtime.interner()).to_string())
}


/// Run a fresh runtime over the input, returning the output and the error, if any.
fn run(input: &str) -> (String, Result<(), String>) {
	let mut runtime = Runtime::new(Vec::new(), symbol::Interner::new());
	let result = eval(&mut runtime, Path::new("<test>"), input);
	let output = String::from_utf8_lossy(runtime.output()).into_owned();

	(output, result)
}


/// Collect the text following the given marker in every line of the source.
fn expectations<'a>(source: &'a str, marker: &str) -> Vec<&'a str> {
	source
		.lines()
		.filter_map(
			|line| line
				.find(marker)
				.map(|ix| line[ix + marker.len() ..].trim())
		)
		.collect()
}


#[test]
#[serial]
fn test_positive() -> io::Result<()> {
	tests::util::test_dir(
		"src/runtime/tests/data/positive",
		|path, mut file| {
			let mut source = String::new();
			file.read_to_string(&mut source)?;

			let mut runtime = Runtime::new(Vec::new(), symbol::Interner::new());

			if let Err(panic) = eval(&mut runtime, path, &source) {
				panic!("{}: {}", path.display(), panic);
			}

			let output = String::from_utf8_lossy(runtime.output()).into_owned();
			let output: Vec<&str> = output.lines().collect();

			assert_eq!(
				output,
				expectations(&source, "// expect: "),
				"{}",
				path.display(),
			);

			Ok(())
		}
	)
}


#[test]
#[serial]
fn test_negative() -> io::Result<()> {
	tests::util::test_dir(
		"src/runtime/tests/data/negative",
		|path, mut file| {
			let mut source = String::new();
			file.read_to_string(&mut source)?;

			let mut runtime = Runtime::new(Vec::new(), symbol::Interner::new());
			let result = eval(&mut runtime, path, &source);

			let expected = expectations(&source, "// expect runtime error: ");
			assert_eq!(expected.len(), 1, "{}", path.display());

			match result {
				Ok(()) => panic!("{}: expected a runtime error", path.display()),
				Err(message) => assert_eq!(
					message.lines().next(),
					Some(expected[0]),
					"{}",
					path.display(),
				),
			}

			Ok(())
		}
	)
}


#[test]
fn test_shadowing() {
	let (output, result) = run("var a = 1; { var a = 2; print a; } print a;");

	assert_matches!(result, Ok(()));
	assert_eq!(output, "2\n1\n");
}


#[test]
fn test_closures_share_state() {
	let (output, result) = run(
		"fun counter() { var i = 0; fun inc() { i = i + 1; return i; } return inc; }
		var c = counter();
		print c();
		print c();"
	);

	assert_matches!(result, Ok(()));
	assert_eq!(output, "1\n2\n");
}


#[test]
fn test_loop_control() {
	let (output, result) = run(
		"for (var i = 0; i < 5; i = i + 1) { if (i == 2) continue; if (i == 4) break; print i; }"
	);

	assert_matches!(result, Ok(()));
	assert_eq!(output, "0\n1\n3\n");
}


#[test]
fn test_classes() {
	let (output, result) = run(
		"class Point {
			init(x, y) { this.x = x; this.y = y; }
			sum() { return this.x + this.y; }
		}
		print Point(3, 4).sum();"
	);

	assert_matches!(result, Ok(()));
	assert_eq!(output, "7\n");
}


#[test]
fn test_unassigned_and_undefined_differ() {
	let (_, unassigned) = run("var a; print a;");
	let (_, undefined) = run("print b;");

	assert_eq!(unassigned, Err("Unassigned variable 'a'.\n[line 1]".to_owned()));
	assert_eq!(undefined, Err("Undefined variable 'b'.\n[line 1]".to_owned()));
}


#[test]
fn test_number_forms() {
	let (output, result) = run("print \"a\" + 1; print 1.0; print 0.5;");

	assert_matches!(result, Ok(()));
	assert_eq!(output, "a1.0\n1\n0.5\n");
}


#[test]
fn test_large_number_forms() {
	let (output, result) = run(
		"var big = 100000000000 * 1000000000000; print big; print \"\" + big;"
	);

	assert_matches!(result, Ok(()));
	assert_eq!(output, "100000000000000000000000\n1e23\n");
}


#[test]
fn test_implicit_print() {
	let (output, result) = run("1 + 2");

	assert_matches!(result, Ok(()));
	assert_eq!(output, "3\n");
}


#[test]
fn test_fault_aborts_program() {
	let (output, result) = run("print 1; print -\"x\"; print 2;");

	assert_eq!(output, "1\n");
	assert_eq!(result, Err("Operand must be a number.\n[line 1]".to_owned()));
}


#[test]
fn test_globals_persist_across_programs() {
	let mut runtime = Runtime::new(Vec::new(), symbol::Interner::new());
	let path = Path::new("<repl>");

	assert_matches!(eval(&mut runtime, path, "var a = 1;"), Ok(()));
	assert_matches!(eval(&mut runtime, path, "var b = 2; print nope;"), Err(_));
	assert_matches!(eval(&mut runtime, path, "print a + b;"), Ok(()));

	assert_eq!(runtime.output(), b"3\n");
}


#[test]
fn test_deterministic_reruns() {
	let input = "var s = \"\"; for (var i = 0; i < 3; i = i + 1) s = s + i; print s;";

	let first = run(input);
	let second = run(input);

	assert_eq!(first, second);
	assert_eq!(first.0, "0.01.02.0\n");
}


/// Like `run`, but on a thread with room for deep recursion.
fn run_deep(input: &'static str) -> (String, Result<(), String>) {
	std::thread::Builder::new()
		.stack_size(512 * 1024 * 1024)
		.spawn(move || run(input))
		.expect("failed to spawn thread")
		.join()
		.expect("thread panicked")
}


#[test]
fn test_deep_recursion() {
	let (output, result) = run_deep(
		"fun count(n) { if (n == 0) return 0; return 1 + count(n - 1); } print count(1000);"
	);

	assert_matches!(result, Ok(()));
	assert_eq!(output, "1000\n");
}


#[test]
fn test_stack_overflow() {
	let (output, result) = run_deep("fun f(n) { return f(n + 1); } f(0); print 1;");

	assert_eq!(output, "");
	assert_eq!(result, Err("Stack overflow.\n[line 1]".to_owned()));
}


#[test]
fn test_io_error() {
	struct Broken;

	impl io::Write for Broken {
		fn write(&mut self, _: &[u8]) -> io::Result<usize> {
			Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken"))
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	let mut interner = symbol::Interner::new();
	let source = syntax::Source::from_str(Path::new("<test>"), "print 1;");
	let analysis = syntax::Analysis::analyze(source, &mut interner);
	let program = semantic::analyze(analysis.ast, &mut interner).expect("static errors");
	let program = Box::leak(Box::new(program));

	let mut runtime = Runtime::new(Broken, interner);

	assert_matches!(runtime.eval(program), Err(Panic::Io(_)));
}
