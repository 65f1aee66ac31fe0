pub mod color;


/// Whether the standard error stream is attached to a terminal.
pub fn stderr_is_tty() -> bool {
	termion::is_tty(&std::io::stderr())
}
