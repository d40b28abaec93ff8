#![no_main]

use libfuzzer_sys::{fuzz_target, Corpus};
use num_bigint::BigInt;
use ramcode::{
	driver::{execute, ExecutionConfig},
	godel::{decode_program, encode_program},
};
use ramcode_fuzz::program_code::ProgramCode;

fuzz_target!(|code: ProgramCode| -> Corpus {
	let Ok(program) = decode_program(&code.value) else { return Corpus::Reject };

	assert_eq!(BigInt::from(encode_program(&program)), code.value);

	let config = ExecutionConfig::default().with_max_steps(1_000);
	let _ = execute(&program, &BigInt::from(3), &config);

	Corpus::Keep
});
