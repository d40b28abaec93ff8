pub mod state;
pub mod step;

pub use state::{MachineState, Registers};
pub use step::{halted, step, MachineError};
