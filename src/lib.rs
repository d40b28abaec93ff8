//! Interpreter and Gödel numbering for a four-instruction register machine.
//!
//! A program is written either as text (`R1 = R1 + 1`, `if R0 then gotob 2`)
//! or as the single natural number produced by [`godel::encode_program`].
//! Both forms decode to a [`program::Program`], which [`driver::execute`] runs
//! under a step budget.

pub mod driver;
pub mod godel;
pub mod log;
pub mod machine;
pub mod program;
pub mod syntax;

pub use driver::{
	check_syntax, execute, run_encoded, run_text, ExecutionConfig, ExecutionResult, Status,
};
