use std::num::NonZeroUsize;

use serde::Serialize;

/// Index of a machine register, `R0` being the input and `R1` the output.
pub type Register = usize;

/// Distance of a conditional jump, never zero.
pub type Offset = NonZeroUsize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Instruction {
	/// `Rk = Rk + 1`
	Inc { reg: Register },

	/// `Rk = Rk - 1`, saturating at zero.
	Dec { reg: Register },

	/// `if Rk then gotof x`
	GotoF { reg: Register, offset: Offset },

	/// `if Rk then gotob x`
	GotoB { reg: Register, offset: Offset },
}

impl Instruction {
	#[must_use]
	pub const fn register(&self) -> Register {
		match *self {
			Self::Inc { reg } | Self::Dec { reg } => reg,
			Self::GotoF { reg, .. } | Self::GotoB { reg, .. } => reg,
		}
	}
}

/// An immutable instruction list addressed from 1, as the program counter is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Program {
	code: Box<[Instruction]>,
}

impl Program {
	#[must_use]
	pub fn new(code: Box<[Instruction]>) -> Self {
		Self { code }
	}

	#[must_use]
	pub fn code(&self) -> &[Instruction] {
		&self.code
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.code.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.code.is_empty()
	}

	/// Fetches the instruction at the 1-based position `pc`.
	#[must_use]
	pub fn fetch(&self, pc: usize) -> Option<&Instruction> {
		pc.checked_sub(1).and_then(|index| self.code.get(index))
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
		self.code.iter()
	}
}

impl From<Vec<Instruction>> for Program {
	fn from(code: Vec<Instruction>) -> Self {
		Self::new(code.into_boxed_slice())
	}
}

impl FromIterator<Instruction> for Program {
	fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

impl<'a> IntoIterator for &'a Program {
	type Item = &'a Instruction;
	type IntoIter = std::slice::Iter<'a, Instruction>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

