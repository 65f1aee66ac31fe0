mod args;
mod fmt;
mod runtime;
mod semantic;
mod symbol;
mod syntax;
mod term;
#[cfg(test)]
mod tests;

use std::{
	io::{self, BufRead, Write},
	path::Path,
};

use args::{Args, Command};
use runtime::Runtime;
use term::color;


/// Exit codes, as in sysexits.h.
const EXIT_USAGE: i32 = 64;
const EXIT_DATAERR: i32 = 65;
const EXIT_SOFTWARE: i32 = 70;
const EXIT_IOERR: i32 = 74;

/// The interpreter recurses on the program tree, and deep Lox call stacks need room.
const STACK_SIZE: usize = 512 * 1024 * 1024;


fn main() -> ! {
	let command = match args::parse(std::env::args_os()) {
		Ok(command) => command,
		Err(error) => {
			eprint!("{}", error);
			std::process::exit(EXIT_USAGE)
		}
	};

	let args = match command {
		Command::Run(args) => args,
		Command::Help(msg) | Command::Version(msg) => {
			println!("{}", msg);
			std::process::exit(0)
		},
	};

	let interpreter = std::thread::Builder::new()
		.name("interpreter".into())
		.stack_size(STACK_SIZE)
		.spawn(move || run(args));

	let exit_code = match interpreter {
		Ok(thread) => match thread.join() {
			Ok(code) => code,
			Err(panic) => std::panic::resume_unwind(panic),
		},

		Err(error) => {
			report(error);
			EXIT_SOFTWARE
		}
	};

	std::process::exit(exit_code)
}


fn run(args: Args) -> i32 {
	match &args.script {
		Some(path) => run_file(path, &args),
		None => run_prompt(&args),
	}
}


/// Which stages of the pipeline to run for a given source.
#[derive(Debug, Clone, Copy)]
struct Stages {
	print_tokens: bool,
	print_ast: bool,
	resolve: bool,
	evaluate: bool,
}


impl Stages {
	const TOKENS: Self = Self { print_tokens: true, print_ast: false, resolve: false, evaluate: false };
	const AST: Self = Self { print_tokens: false, print_ast: true, resolve: false, evaluate: false };
	const EVALUATE: Self = Self { print_tokens: false, print_ast: false, resolve: true, evaluate: true };


	fn from_args(args: &Args) -> Self {
		Self {
			print_tokens: args.print_tokens,
			print_ast: args.print_ast,
			resolve: true,
			evaluate: !args.check,
		}
	}
}


/// Why a source did not run to completion. The errors have already been reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Failure {
	Static,
	Runtime,
}


fn run_file(path: &Path, args: &Args) -> i32 {
	let source = match syntax::Source::from_path(path) {
		Ok(source) => source,
		Err(error) => {
			report(format_args!("{}: {}", path.display(), error));
			return EXIT_IOERR;
		}
	};

	let stdout = io::stdout();
	let mut runtime = Runtime::new(stdout.lock(), symbol::Interner::new());

	match execute(&mut runtime, source, Stages::from_args(args)) {
		Ok(()) => 0,
		Err(Failure::Static) => EXIT_DATAERR,
		Err(Failure::Runtime) => EXIT_SOFTWARE,
	}
}


/// The interactive prompt. Every line is a separate program, sharing the same globals.
fn run_prompt(args: &Args) -> i32 {
	let stdout = io::stdout();
	let mut runtime = Runtime::new(stdout.lock(), symbol::Interner::new());
	let mut stages = Stages::from_args(args);

	let stdin = io::stdin();
	let mut lines = stdin.lock().lines();

	loop {
		print!("> ");
		if let Err(error) = io::stdout().flush() {
			report(error);
			return EXIT_IOERR;
		}

		let line = match lines.next() {
			Some(Ok(line)) => line,
			Some(Err(error)) => {
				report(error);
				return EXIT_IOERR;
			}
			None => break,
		};

		match line.trim() {
			"#printtokens" => stages = Stages::TOKENS,
			"#printast" => stages = Stages::AST,
			"#evaluate" => stages = Stages::EVALUATE,
			_ => {
				let source = syntax::Source::from_str(Path::new("<stdin>"), &line);
				// Errors were reported, and the prompt goes on.
				execute(&mut runtime, source, stages).ok();
			}
		}
	}

	println!();

	0
}


/// Run the requested stages over the source, reporting all errors to stderr.
fn execute<W: Write>(
	runtime: &mut Runtime<W>,
	source: syntax::Source,
	stages: Stages,
) -> Result<(), Failure> {
	if stages.print_tokens {
		let (tokens, errors) = syntax::tokenize(&source, runtime.interner_mut());

		for token in tokens.iter() {
			println!("{}", fmt::Show(token, runtime.interner()));
		}

		// Otherwise, the syntactic analysis reports them.
		if !(stages.print_ast || stages.resolve) {
			for error in errors.iter() {
				report(error);
			}

			return if errors.is_empty() { Ok(()) } else { Err(Failure::Static) };
		}
	}

	if !(stages.print_ast || stages.resolve) {
		return Ok(());
	}

	let analysis = syntax::Analysis::analyze(source, runtime.interner_mut());

	for error in analysis.errors.iter() {
		report(error);
	}

	if stages.print_ast {
		println!("{}", fmt::Show(&analysis.ast, runtime.interner()));
	}

	if !analysis.errors.is_empty() {
		return Err(Failure::Static);
	}

	if !stages.resolve {
		return Ok(());
	}

	let program = semantic::analyze(analysis.ast, runtime.interner_mut())
		.map_err(
			|errors| {
				for error in errors {
					report(fmt::Show(&error, runtime.interner()));
				}

				Failure::Static
			}
		)?;

	if !stages.evaluate {
		return Ok(());
	}

	// Functions keep references to the program, so it must live as long as the runtime.
	let program = Box::leak(Box::new(program));

	runtime
		.eval(program)
		.map_err(
			|panic| {
				report(fmt::Show(&panic, runtime.interner()));
				Failure::Runtime
			}
		)
}


/// Print a diagnostic to stderr, in red when it is a terminal.
fn report<E: std::fmt::Display>(error: E) {
	eprintln!(
		"{}",
		color::Paint {
			color: color::Red,
			value: error,
			enabled: term::stderr_is_tty(),
		}
	);
}
