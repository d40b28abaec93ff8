use thiserror::Error;

use super::state::MachineState;
use crate::program::{Instruction, Program};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
	#[error("No instruction at pc={pc} in a program of length {len}")]
	Halted { pc: usize, len: usize },
}

/// A machine halts once `pc` leaves `1..=len`.
#[must_use]
pub const fn halted(state: &MachineState, len: usize) -> bool {
	state.pc == 0 || state.pc > len
}

impl MachineState {
	/// Executes the instruction at `pc` in place and returns it.
	pub(crate) fn advance(&mut self, program: &Program) -> Result<Instruction, MachineError> {
		let pc = self.pc;
		let insn = *program.fetch(pc).ok_or(MachineError::Halted {
			pc,
			len: program.len(),
		})?;

		self.pc = match insn {
			Instruction::Inc { reg } => {
				self.registers.increment(reg);

				pc + 1
			}
			Instruction::Dec { reg } => {
				self.registers.decrement(reg);

				pc + 1
			}
			Instruction::GotoF { reg, offset } if !self.registers.is_zero(reg) => {
				pc.saturating_add(offset.get())
			}
			Instruction::GotoB { reg, offset } if !self.registers.is_zero(reg) => {
				pc.saturating_sub(offset.get())
			}
			Instruction::GotoF { .. } | Instruction::GotoB { .. } => pc + 1,
		};

		Ok(insn)
	}
}

/// Returns the state after executing one instruction, leaving `state` as it was.
///
/// # Errors
///
/// Returns `MachineError::Halted` if `state` is already halted.
pub fn step(state: &MachineState, program: &Program) -> Result<MachineState, MachineError> {
	let mut next = state.clone();

	next.advance(program)?;

	Ok(next)
}
