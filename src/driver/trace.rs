//! Per-step record of a run, for tools that replay an execution without
//! rerunning it.

use serde::Serialize;

use crate::program::Instruction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraceStep {
	pub pc: usize,
	pub instruction: Instruction,
	pub next_pc: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionTrace {
	steps: Vec<TraceStep>,
}

impl ExecutionTrace {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, step: TraceStep) {
		self.steps.push(step);
	}

	#[must_use]
	pub fn steps(&self) -> &[TraceStep] {
		&self.steps
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.steps.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.steps.is_empty()
	}

	/// Program positions that executed at least once, in ascending order.
	#[must_use]
	pub fn coverage(&self) -> Vec<usize> {
		let mut visited: Vec<usize> = self.steps.iter().map(|step| step.pc).collect();

		visited.sort_unstable();
		visited.dedup();
		visited
	}
}
