use std::fmt::{Display, Formatter};

use num_bigint::BigInt;
use serde::{Serialize, Serializer};

use super::trace::ExecutionTrace;
use crate::{
	godel::DecodeError,
	machine::{MachineError, MachineState, Registers},
	syntax::parser::SyntaxError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
	Ok,
	SyntaxError,
	Timeout,
	DecodeError,
	RuntimeError,
}

impl Display for Status {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Self::Ok => "OK",
			Self::SyntaxError => "SYNTAX_ERROR",
			Self::Timeout => "TIMEOUT",
			Self::DecodeError => "DECODE_ERROR",
			Self::RuntimeError => "RUNTIME_ERROR",
		};

		f.write_str(name)
	}
}

/// How a run ended. Every failure is a variant, never a panic or an `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
	Halted {
		steps: u64,
		state: MachineState,
		trace: Option<ExecutionTrace>,
	},

	Timeout {
		steps: u64,
		max_steps: u64,
		state: MachineState,
		trace: Option<ExecutionTrace>,
	},

	SyntaxError(SyntaxError),

	DecodeError(DecodeError),

	RuntimeError {
		steps: u64,
		error: MachineError,
	},
}

impl ExecutionResult {
	#[must_use]
	pub const fn status(&self) -> Status {
		match self {
			Self::Halted { .. } => Status::Ok,
			Self::Timeout { .. } => Status::Timeout,
			Self::SyntaxError(_) => Status::SyntaxError,
			Self::DecodeError(_) => Status::DecodeError,
			Self::RuntimeError { .. } => Status::RuntimeError,
		}
	}

	#[must_use]
	pub const fn is_ok(&self) -> bool {
		matches!(self, Self::Halted { .. })
	}

	/// The value of `R1` once the machine halted.
	#[must_use]
	pub fn output(&self) -> Option<BigInt> {
		match self {
			Self::Halted { state, .. } => Some(state.registers.get(1)),
			_ => None,
		}
	}

	#[must_use]
	pub const fn steps(&self) -> u64 {
		match *self {
			Self::Halted { steps, .. } | Self::Timeout { steps, .. } => steps,
			Self::RuntimeError { steps, .. } => steps,
			Self::SyntaxError(_) | Self::DecodeError(_) => 0,
		}
	}

	#[must_use]
	pub const fn state(&self) -> Option<&MachineState> {
		match self {
			Self::Halted { state, .. } | Self::Timeout { state, .. } => Some(state),
			_ => None,
		}
	}

	#[must_use]
	pub const fn final_pc(&self) -> Option<usize> {
		match self.state() {
			Some(state) => Some(state.pc),
			None => None,
		}
	}

	#[must_use]
	pub const fn registers(&self) -> Option<&Registers> {
		match self.state() {
			Some(state) => Some(&state.registers),
			None => None,
		}
	}

	#[must_use]
	pub const fn trace(&self) -> Option<&ExecutionTrace> {
		match self {
			Self::Halted { trace, .. } | Self::Timeout { trace, .. } => trace.as_ref(),
			_ => None,
		}
	}

	#[must_use]
	pub fn error(&self) -> Option<String> {
		match self {
			Self::Halted { .. } => None,
			Self::Timeout { max_steps, .. } => Some(format!(
				"Maximum steps exceeded ({max_steps}). Program may diverge."
			)),
			Self::SyntaxError(error) => Some(error.to_string()),
			Self::DecodeError(error) => Some(error.to_string()),
			Self::RuntimeError { error, .. } => Some(error.to_string()),
		}
	}
}

#[derive(Serialize)]
struct Flat<'a> {
	status: Status,
	output: Option<String>,
	steps: u64,
	final_pc: Option<usize>,
	registers: Option<&'a Registers>,
	error: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	trace: Option<&'a ExecutionTrace>,
}

impl Serialize for ExecutionResult {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		Flat {
			status: self.status(),
			output: self.output().map(|value| value.to_string()),
			steps: self.steps(),
			final_pc: self.final_pc(),
			registers: self.registers(),
			error: self.error(),
			trace: self.trace(),
		}
		.serialize(serializer)
	}
}
