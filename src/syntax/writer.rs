use std::{
	fmt::{Display, Formatter},
	io::{Result, Write},
};

use crate::program::{Instruction, Program};

impl Display for Instruction {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match *self {
			Self::Inc { reg } => write!(f, "R{reg} = R{reg} + 1"),
			Self::Dec { reg } => write!(f, "R{reg} = R{reg} - 1"),
			Self::GotoF { reg, offset } => write!(f, "if R{reg} then gotof {offset}"),
			Self::GotoB { reg, offset } => write!(f, "if R{reg} then gotob {offset}"),
		}
	}
}

/// Writes one statement per line, with each line's position as a comment
/// when `numbered` is set.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write(writer: &mut dyn Write, program: &Program, numbered: bool) -> Result<()> {
	let width = program.len().to_string().len();

	program.iter().enumerate().try_for_each(|(index, insn)| {
		if numbered {
			let text = insn.to_string();

			writeln!(writer, "{text:<24} # {:>width$}", index + 1)
		} else {
			writeln!(writer, "{insn}")
		}
	})
}

#[must_use]
pub fn to_text(program: &Program) -> String {
	program.iter().map(|insn| format!("{insn}\n")).collect()
}
