#![no_main]

use libfuzzer_sys::{fuzz_target, Corpus};
use num_bigint::BigInt;
use ramcode::{
	driver::{execute, ExecutionConfig},
	syntax::{parser::Parser, writer::to_text},
};
use ramcode_fuzz::program_text::ProgramText;

fuzz_target!(|source: ProgramText| -> Corpus {
	let mut parser = Parser::new();
	let Ok(program) = parser.parse(&source) else { return Corpus::Reject };

	let written = to_text(&program);

	assert_eq!(parser.parse(&written).as_ref(), Ok(&program));

	let config = ExecutionConfig::default().with_max_steps(1_000);
	let _ = execute(&program, &BigInt::from(-3), &config);

	Corpus::Keep
});
