use std::ops::Deref;

use arbitrary::{Arbitrary, Result, Unstructured};

#[derive(Arbitrary)]
enum Token {
	Register(u8),
	Lowercase(u8),
	Equals,
	Plus,
	Minus,
	LectureMinus,
	One,
	Number(i16),
	If,
	Then,
	GotoF,
	GotoB,
	Hash,
}

impl Token {
	fn write(&self, buffer: &mut String) {
		match self {
			Self::Register(reg) => buffer.push_str(&format!("R{reg}")),
			Self::Lowercase(reg) => buffer.push_str(&format!("r{reg}")),
			Self::Equals => buffer.push('='),
			Self::Plus => buffer.push('+'),
			Self::Minus => buffer.push('-'),
			Self::LectureMinus => buffer.push_str("\u{2212}\u{b7}"),
			Self::One => buffer.push('1'),
			Self::Number(value) => buffer.push_str(&value.to_string()),
			Self::If => buffer.push_str("if"),
			Self::Then => buffer.push_str("then"),
			Self::GotoF => buffer.push_str("gotof"),
			Self::GotoB => buffer.push_str("gotob"),
			Self::Hash => buffer.push('#'),
		}
	}
}

#[derive(Arbitrary)]
enum Line {
	Inc(u8),
	Dec(u8),
	Jump { reg: u8, backward: bool, offset: i16 },
	Comment,
	Blank,
	Soup(Vec<Token>),
}

impl Line {
	fn write(&self, buffer: &mut String) {
		match self {
			Self::Inc(reg) => buffer.push_str(&format!("R{reg} = R{reg} + 1")),
			Self::Dec(reg) => buffer.push_str(&format!("R{reg} = R{reg} - 1")),
			Self::Jump {
				reg,
				backward,
				offset,
			} => {
				let kind = if *backward { "gotob" } else { "gotof" };

				buffer.push_str(&format!("if R{reg} then {kind} {offset}"));
			}
			Self::Comment => buffer.push_str("# comment"),
			Self::Blank => {}
			Self::Soup(tokens) => {
				for token in tokens {
					token.write(buffer);
					buffer.push(' ');
				}
			}
		}

		buffer.push('\n');
	}
}

/// Text made of lines that are mostly statement-shaped.
#[derive(Debug)]
pub struct ProgramText {
	content: String,
}

impl Arbitrary<'_> for ProgramText {
	fn arbitrary(u: &mut Unstructured) -> Result<Self> {
		let len = u.arbitrary_len::<Line>()?;
		let mut content = String::new();

		for _ in 0..len {
			Line::arbitrary(u)?.write(&mut content);
		}

		Ok(Self { content })
	}
}

impl Deref for ProgramText {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.content
	}
}
