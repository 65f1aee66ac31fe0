use std::{io, path::Path};

use crate::{fmt, symbol, tests};
use super::{Analysis, Source};


fn test_dir<P, F>(path: P, mut check: F) -> io::Result<()>
where
	P: AsRef<Path>,
	F: FnMut(&Analysis) -> bool,
{
	let mut interner = symbol::Interner::new();

	tests::util::test_dir(
		path,
		move |path, file| {
			let source = Source::from_reader(path, file)?;
			let analysis = Analysis::analyze(source, &mut interner);

			if !check(&analysis) {
				for error in analysis.errors.iter() {
					eprintln!("{}", error);
				}

				panic!("{}: {}", path.display(), fmt::Show(&analysis.ast, &interner));
			}

			Ok(())
		}
	)
}


fn analyze(input: &str, interner: &mut symbol::Interner) -> Analysis {
	Analysis::analyze(Source::from_str(Path::new("<test>"), input), interner)
}


#[test]
fn test_positive() -> io::Result<()> {
	test_dir(
		"src/syntax/tests/data/positive",
		|analysis| analysis.errors.is_empty(),
	)
}


#[test]
fn test_negative() -> io::Result<()> {
	test_dir(
		"src/syntax/tests/data/negative",
		|analysis| !analysis.errors.is_empty(),
	)
}


#[test]
fn test_lexer_and_parser_errors_are_collected() {
	let mut interner = symbol::Interner::new();

	let analysis = analyze("var a = @;\nprint a", &mut interner);

	let lines: Vec<u32> = analysis.errors.iter().map(|error| error.line()).collect();
	assert_eq!(lines, [1, 1, 2]);

	assert_eq!(
		analysis.errors[0].to_string(),
		"[line 1] Error: Unexpected character '@'."
	);
	assert_eq!(
		analysis.errors[1].to_string(),
		"[line 1] Error at ';': Expect expression."
	);
	assert_eq!(
		analysis.errors[2].to_string(),
		"[line 2] Error at end: Expect ';' after value."
	);
}


#[test]
fn test_recovered_declarations() {
	let mut interner = symbol::Interner::new();

	let analysis = analyze("print 1 +;\nvar x = 2;\nprint x;", &mut interner);

	assert_eq!(analysis.errors.len(), 1);
	assert_eq!(
		fmt::Show(&analysis.ast, &interner).to_string(),
		"(var x = 2)\n(print x)"
	);
}
