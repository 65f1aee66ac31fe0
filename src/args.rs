use std::{ffi::OsString, path::PathBuf};

use clap::{clap_app, crate_authors, crate_version, crate_description};


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
	Help(Box<str>),
	Version(Box<str>),
	Run(Args)
}


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Args {
	/// The script to run. Without one, start the interactive prompt.
	pub script: Option<PathBuf>,
	/// Check program with static analysis, but don't run.
	pub check: bool,
	/// Print the token stream.
	pub print_tokens: bool,
	/// Print the AST.
	pub print_ast: bool,
}


pub fn parse<A, T>(args: A) -> clap::Result<Command>
where
	A: IntoIterator<Item = T>,
	T: Into<OsString> + Clone
{
	let app = clap_app!(
		Lox =>
			(version: crate_version!())
			(author: crate_authors!())
			(about: crate_description!())
			(@arg check: --check "Perform only static analysis instead of executing.")
			(@arg tokens: --tokens "Print the tokens")
			(@arg ast: --ast "Print the AST")
			(@arg script: "The script to run. Starts the interactive prompt if omitted.")
	);

	match app.get_matches_from_safe(args) {
		Ok(matches) => Ok(
			Command::Run(
				Args {
					script: matches.value_of_os("script").map(PathBuf::from),
					check: matches.is_present("check"),
					print_tokens: matches.is_present("tokens"),
					print_ast: matches.is_present("ast"),
				}
			)
		),

		Err(error) => match error.kind {
			clap::ErrorKind::HelpDisplayed => Ok(
				Command::Help(error.message.into_boxed_str())
			),
			clap::ErrorKind::VersionDisplayed => Ok(
				Command::Version(error.message.into_boxed_str())
			),
			_ => Err(error)
		}
	}
}


#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;

	use super::*;


	#[test]
	fn test_script_and_flags() {
		let command = parse(&["lox", "--check", "--ast", "script.lox"]);

		assert_matches!(
			command,
			Ok(Command::Run(Args { script: Some(_), check: true, print_tokens: false, print_ast: true }))
		);
	}


	#[test]
	fn test_prompt() {
		assert_matches!(
			parse(&["lox"]),
			Ok(Command::Run(Args { script: None, check: false, .. }))
		);
	}


	#[test]
	fn test_invalid_invocation() {
		assert_matches!(parse(&["lox", "a.lox", "b.lox"]), Err(_));
		assert_matches!(parse(&["lox", "--unknown"]), Err(_));
	}
}
