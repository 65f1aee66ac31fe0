use super::{
	Cursor,
	Error,
	Operator,
	Root,
	SourcePos,
	State,
	Token,
	TokenKind,
	Transition,
};


/// The state after a slash, which may start a comment or be the division operator.
#[derive(Debug)]
pub(super) struct Slash {
	pos: SourcePos,
}


impl Slash {
	pub fn at(cursor: &Cursor) -> Self {
		Self { pos: cursor.pos() }
	}


	pub fn visit(self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			Some(b'/') => Transition::step(Comment),

			Some(b'*') => Transition::step(BlockComment::at(self.pos)),

			_ => Transition::resume_produce(
				Root,
				Token::new(TokenKind::Operator(Operator::Div), b"/", self.pos),
			),
		}
	}
}


impl From<Slash> for State {
	fn from(state: Slash) -> State {
		State::Slash(state)
	}
}


/// The state for lexing line comments.
#[derive(Debug)]
pub(super) struct Comment;


impl Comment {
	pub fn visit(self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			// Newline or EOF marks the end of the comment.
			Some(b'\n') | None => Transition::resume(Root),

			// Otherwise, eat everything.
			_ => Transition::step(self),
		}
	}
}


impl From<Comment> for State {
	fn from(state: Comment) -> State {
		State::Comment(state)
	}
}


/// The state for lexing block comments, which may span multiple lines and nest.
#[derive(Debug)]
pub(super) struct BlockComment {
	/// How many comments are currently open.
	depth: u32,
	/// The previously consumed character, if it may start a delimiter.
	previous: Option<u8>,
	/// The position of the outermost comment.
	pos: SourcePos,
}


impl BlockComment {
	pub fn at(pos: SourcePos) -> Self {
		Self { depth: 1, previous: None, pos }
	}


	pub fn visit(mut self, cursor: &Cursor) -> Transition {
		match (self.previous, cursor.peek()) {
			(_, None) => Transition::resume_error(Root, Error::unterminated_comment(self.pos)),

			// Nested comment.
			(Some(b'/'), Some(b'*')) => {
				self.depth += 1;
				self.previous = None;
				Transition::step(self)
			}

			// Closing delimiter.
			(Some(b'*'), Some(b'/')) => {
				self.depth -= 1;
				self.previous = None;

				if self.depth == 0 {
					Transition::step(Root)
				} else {
					Transition::step(self)
				}
			}

			(_, Some(c)) => {
				self.previous = Some(c);
				Transition::step(self)
			}
		}
	}
}


impl From<BlockComment> for State {
	fn from(state: BlockComment) -> State {
		State::BlockComment(state)
	}
}
