use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_STEPS: u64 = 100_000;

/// Caller-configurable execution limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
	/// Steps executed before giving up with a timeout.
	pub max_steps: u64,
	/// Whether every executed step is recorded.
	pub trace: bool,
}

impl Default for ExecutionConfig {
	fn default() -> Self {
		Self {
			max_steps: DEFAULT_MAX_STEPS,
			trace: false,
		}
	}
}

impl ExecutionConfig {
	#[must_use]
	pub const fn with_max_steps(mut self, max_steps: u64) -> Self {
		self.max_steps = max_steps;
		self
	}

	#[must_use]
	pub const fn with_trace(mut self, trace: bool) -> Self {
		self.trace = trace;
		self
	}
}
