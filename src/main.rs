use std::{
	fs::File,
	io::{BufWriter, Result, Write},
	process::ExitCode,
	sync::atomic::Ordering,
};

use argh::FromArgs;
use num_bigint::BigInt;
use ramcode::{
	check_syntax, error,
	driver::{ExecutionConfig, ExecutionResult, DEFAULT_MAX_STEPS},
	godel::{decode_program, encode_program},
	info,
	log::QUIET,
	machine::{halted, step, MachineState},
	run_encoded, run_text,
	syntax::{parser::parse, writer},
	warn,
};

/// Checks, runs and converts programs for the four-instruction RAM machine.
#[derive(FromArgs)]
struct Arguments {
	/// only report warnings and errors
	#[argh(switch, short = 'q')]
	quiet: bool,

	#[argh(subcommand)]
	command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
	Check(Check),
	Run(Run),
	RunEncoded(RunEncoded),
	Encode(Encode),
	Decode(Decode),
	Step(Step),
}

/// Check a program text for syntax errors.
#[derive(FromArgs)]
#[argh(subcommand, name = "check")]
struct Check {
	/// the program file to check,
	/// if not specified, stdin is used
	#[argh(positional)]
	file: Option<String>,

	/// print the result as JSON
	#[argh(switch)]
	json: bool,
}

/// Run a program text on an input value.
#[derive(FromArgs)]
#[argh(subcommand, name = "run")]
struct Run {
	/// the program file to run,
	/// if not specified, stdin is used
	#[argh(positional)]
	file: Option<String>,

	/// the value placed in R0, zero if not specified
	#[argh(option, short = 'x')]
	input: Option<BigInt>,

	/// the number of steps after which the run times out
	#[argh(option, default = "DEFAULT_MAX_STEPS")]
	max_steps: u64,

	/// record and print every executed step
	#[argh(switch)]
	trace: bool,

	/// print the result as JSON
	#[argh(switch)]
	json: bool,
}

/// Run a program given by its Gödel number.
#[derive(FromArgs)]
#[argh(subcommand, name = "run-encoded")]
struct RunEncoded {
	/// the program number in decimal,
	/// if not specified, it is read from stdin
	#[argh(positional)]
	code: Option<String>,

	/// the value placed in R0, zero if not specified
	#[argh(option, short = 'x')]
	input: Option<BigInt>,

	/// the number of steps after which the run times out
	#[argh(option, default = "DEFAULT_MAX_STEPS")]
	max_steps: u64,

	/// record and print every executed step
	#[argh(switch)]
	trace: bool,

	/// print the result as JSON
	#[argh(switch)]
	json: bool,
}

/// Print the Gödel number of a program text.
#[derive(FromArgs)]
#[argh(subcommand, name = "encode")]
struct Encode {
	/// the program file to encode,
	/// if not specified, stdin is used
	#[argh(positional)]
	file: Option<String>,

	/// the output file to write to,
	/// if not specified, stdout is used
	#[argh(option, short = 'o')]
	output: Option<String>,
}

/// Print the program text of a Gödel number.
#[derive(FromArgs)]
#[argh(subcommand, name = "decode")]
struct Decode {
	/// the program number in decimal,
	/// if not specified, it is read from stdin
	#[argh(positional)]
	code: Option<String>,

	/// the output file to write to,
	/// if not specified, stdout is used
	#[argh(option, short = 'o')]
	output: Option<String>,

	/// annotate each statement with its position
	#[argh(switch, short = 'n')]
	numbered: bool,
}

/// Print the machine state after every step of a program text.
#[derive(FromArgs)]
#[argh(subcommand, name = "step")]
struct Step {
	/// the program file to step through,
	/// if not specified, stdin is used
	#[argh(positional)]
	file: Option<String>,

	/// the value placed in R0, zero if not specified
	#[argh(option, short = 'x')]
	input: Option<BigInt>,

	/// the number of steps to print at most
	#[argh(option, default = "DEFAULT_MAX_STEPS")]
	max_steps: u64,
}

fn load_input(name: Option<&str>) -> Result<String> {
	if let Some(name) = name {
		std::fs::read_to_string(name)
	} else {
		let stdin = std::io::stdin().lock();

		std::io::read_to_string(stdin)
	}
}

fn load_output(name: Option<&str>) -> Result<Box<dyn Write>> {
	if let Some(name) = name {
		let file = File::create(name)?;

		Ok(Box::new(BufWriter::new(file)))
	} else {
		Ok(Box::new(std::io::stdout().lock()))
	}
}

fn load_code(code: Option<&str>) -> Result<Option<BigInt>> {
	let text = match code {
		Some(code) => code.to_owned(),
		None => load_input(None)?,
	};

	Ok(text.trim().parse().ok())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(value)?;

	println!("{text}");

	Ok(())
}

fn print_result(result: &ExecutionResult, json: bool) -> Result<()> {
	if json {
		return print_json(result);
	}

	if let Some(trace) = result.trace() {
		for step in trace.steps() {
			println!("{:>6}  {:<24} -> {}", step.pc, step.instruction, step.next_pc);
		}
	}

	match result {
		ExecutionResult::Halted { steps, state, .. } => {
			info!("halted after {steps} steps at pc={}", state.pc);
			info!("registers: {}", state.registers);

			println!("{}", state.registers.get(1));
		}
		ExecutionResult::Timeout { steps, state, .. } => {
			warn!("{}", result.error().unwrap_or_default());
			warn!("stopped after {steps} steps at pc={}", state.pc);
			warn!("registers: {}", state.registers);
		}
		_ => error!("{}: {}", result.status(), result.error().unwrap_or_default()),
	}

	Ok(())
}

fn run_check(arguments: &Check) -> Result<ExitCode> {
	let text = load_input(arguments.file.as_deref())?;
	let checked = check_syntax(&text);

	if arguments.json {
		let error = checked.as_ref().err();

		print_json(&serde_json::json!({ "ok": error.is_none(), "error": error }))?;
	} else if let Err(error) = &checked {
		error!("{error}");
	} else {
		info!("syntax is correct");
	}

	Ok(if checked.is_ok() {
		ExitCode::SUCCESS
	} else {
		ExitCode::FAILURE
	})
}

fn exit_code_of(result: &ExecutionResult) -> ExitCode {
	if result.is_ok() {
		ExitCode::SUCCESS
	} else {
		ExitCode::FAILURE
	}
}

fn run_run(arguments: &Run) -> Result<ExitCode> {
	let text = load_input(arguments.file.as_deref())?;
	let input = arguments.input.clone().unwrap_or_default();
	let config = ExecutionConfig::default()
		.with_max_steps(arguments.max_steps)
		.with_trace(arguments.trace);

	let result = run_text(&text, &input, &config);

	print_result(&result, arguments.json)?;

	Ok(exit_code_of(&result))
}

fn run_run_encoded(arguments: &RunEncoded) -> Result<ExitCode> {
	let Some(code) = load_code(arguments.code.as_deref())? else {
		error!("expected a decimal program number");

		return Ok(ExitCode::FAILURE);
	};

	let input = arguments.input.clone().unwrap_or_default();
	let config = ExecutionConfig::default()
		.with_max_steps(arguments.max_steps)
		.with_trace(arguments.trace);

	let result = run_encoded(&code, &input, &config);

	print_result(&result, arguments.json)?;

	Ok(exit_code_of(&result))
}

fn run_encode(arguments: &Encode) -> Result<ExitCode> {
	let text = load_input(arguments.file.as_deref())?;

	let program = match parse(&text) {
		Ok(program) => program,
		Err(error) => {
			error!("{error}");

			return Ok(ExitCode::FAILURE);
		}
	};

	let output = &mut load_output(arguments.output.as_deref())?;

	info!("encoding {} instructions", program.len());
	writeln!(output, "{}", encode_program(&program))?;
	output.flush()?;

	Ok(ExitCode::SUCCESS)
}

fn run_decode(arguments: &Decode) -> Result<ExitCode> {
	let Some(code) = load_code(arguments.code.as_deref())? else {
		error!("expected a decimal program number");

		return Ok(ExitCode::FAILURE);
	};

	let program = match decode_program(&code) {
		Ok(program) => program,
		Err(error) => {
			error!("{error}");

			return Ok(ExitCode::FAILURE);
		}
	};

	let output = &mut load_output(arguments.output.as_deref())?;

	info!("decoded {} instructions", program.len());
	writer::write(output, &program, arguments.numbered)?;
	output.flush()?;

	Ok(ExitCode::SUCCESS)
}

fn run_step(arguments: &Step) -> Result<ExitCode> {
	let text = load_input(arguments.file.as_deref())?;

	let program = match parse(&text) {
		Ok(program) => program,
		Err(error) => {
			error!("{error}");

			return Ok(ExitCode::FAILURE);
		}
	};

	let input = arguments.input.clone().unwrap_or_default();
	let mut state = MachineState::initial(&input);
	let mut steps = 0;

	println!("{:>6}  pc={:<6} {}", steps, state.pc, state.registers);

	while !halted(&state, program.len()) {
		if steps >= arguments.max_steps {
			warn!("stopped after {steps} steps without halting");

			return Ok(ExitCode::FAILURE);
		}

		state = match step(&state, &program) {
			Ok(next) => next,
			Err(error) => {
				error!("{error}");

				return Ok(ExitCode::FAILURE);
			}
		};

		steps += 1;

		println!("{:>6}  pc={:<6} {}", steps, state.pc, state.registers);
	}

	info!("halted after {steps} steps");

	Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
	let arguments = argh::from_env::<Arguments>();

	QUIET.store(arguments.quiet, Ordering::Relaxed);

	let result = match &arguments.command {
		Command::Check(check) => run_check(check),
		Command::Run(run) => run_run(run),
		Command::RunEncoded(run) => run_run_encoded(run),
		Command::Encode(encode) => run_encode(encode),
		Command::Decode(decode) => run_decode(decode),
		Command::Step(step) => run_step(step),
	};

	result.unwrap_or_else(|error| {
		error!("{error}");

		ExitCode::FAILURE
	})
}
