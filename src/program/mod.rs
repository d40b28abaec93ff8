pub mod data;

pub use data::{Instruction, Offset, Program, Register};
