use num_bigint::BigInt;

use super::{
	config::ExecutionConfig,
	report::ExecutionResult,
	trace::{ExecutionTrace, TraceStep},
};
use crate::{
	godel::decode_program,
	machine::{halted, MachineState},
	program::Program,
	syntax::parser::{parse, SyntaxError},
};

/// Runs `program` on `input` until it halts or the step budget runs out.
#[must_use]
pub fn execute(program: &Program, input: &BigInt, config: &ExecutionConfig) -> ExecutionResult {
	let mut state = MachineState::initial(input);
	let mut trace = config.trace.then(ExecutionTrace::new);
	let mut steps = 0;

	while !halted(&state, program.len()) {
		if steps >= config.max_steps {
			return ExecutionResult::Timeout {
				steps,
				max_steps: config.max_steps,
				state,
				trace,
			};
		}

		let pc = state.pc;
		let instruction = match state.advance(program) {
			Ok(instruction) => instruction,
			Err(error) => return ExecutionResult::RuntimeError { steps, error },
		};

		if let Some(trace) = trace.as_mut() {
			trace.push(TraceStep {
				pc,
				instruction,
				next_pc: state.pc,
			});
		}

		steps += 1;
	}

	ExecutionResult::Halted {
		steps,
		state,
		trace,
	}
}

/// # Errors
///
/// Returns the first malformed line, see [`crate::syntax::parser::Parser::parse`].
pub fn check_syntax(text: &str) -> Result<(), SyntaxError> {
	parse(text).map(|_| ())
}

#[must_use]
pub fn run_text(text: &str, input: &BigInt, config: &ExecutionConfig) -> ExecutionResult {
	match parse(text) {
		Ok(program) => execute(&program, input, config),
		Err(error) => ExecutionResult::SyntaxError(error),
	}
}

#[must_use]
pub fn run_encoded(code: &BigInt, input: &BigInt, config: &ExecutionConfig) -> ExecutionResult {
	match decode_program(code) {
		Ok(program) => execute(&program, input, config),
		Err(error) => ExecutionResult::DecodeError(error),
	}
}
