pub mod program_code;
pub mod program_text;
