pub mod config;
pub mod report;
pub mod run;
pub mod trace;

pub use config::{ExecutionConfig, DEFAULT_MAX_STEPS};
pub use report::{ExecutionResult, Status};
pub use run::{check_syntax, execute, run_encoded, run_text};
pub use trace::{ExecutionTrace, TraceStep};
