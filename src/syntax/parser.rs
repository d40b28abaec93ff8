use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};
use serde::{ser::SerializeStruct, Serialize, Serializer};
use thiserror::Error;

use crate::program::{Instruction, Offset, Program, Register};

/// Reason a single line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
	#[error("Register expected like R0, R1... got '{0}'")]
	BadRegister(String),

	#[error("Register index out of range in '{0}'")]
	RegisterOutOfRange(String),

	#[error("Expected format: Rk = Rk ± 1 (same register on both sides)")]
	MismatchedRegisters,

	#[error("Jump offset must be an integer")]
	BadOffset,

	#[error("Jump offset must be > 0")]
	NonPositiveOffset,

	#[error("Jump offset out of range")]
	OffsetOutOfRange,

	#[error("Unknown instruction format")]
	UnknownFormat,
}

/// The first malformed line of a program, numbered from 1 over the raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Line {line}: {kind} | Text: {text}")]
pub struct SyntaxError {
	pub line: usize,
	pub kind: LineError,
	pub text: String,
}

impl SyntaxError {
	#[must_use]
	pub fn message(&self) -> String {
		self.kind.to_string()
	}
}

impl Serialize for SyntaxError {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut error = serializer.serialize_struct("SyntaxError", 3)?;

		error.serialize_field("line", &self.line)?;
		error.serialize_field("message", &self.message())?;
		error.serialize_field("text", &self.text)?;
		error.end()
	}
}

const fn is_line_break(c: char) -> bool {
	matches!(
		c,
		'\n' | '\r' | '\u{b}' | '\u{c}' | '\u{1c}'..='\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
	)
}

/// Splits on every Unicode line boundary, `\r\n` counting as one.
fn split_lines(source: &str) -> impl Iterator<Item = &str> {
	let mut rest = source;

	std::iter::from_fn(move || {
		if rest.is_empty() {
			return None;
		}

		let Some((at, c)) = rest.char_indices().find(|&(_, c)| is_line_break(c)) else {
			return Some(std::mem::take(&mut rest));
		};

		let line = &rest[..at];
		let mut end = at + c.len_utf8();

		if c == '\r' && rest[end..].starts_with('\n') {
			end += 1;
		}

		rest = &rest[end..];

		Some(line)
	})
}

// Text copied out of lecture notes uses `−` for minus and `-·` for the
// truncated subtraction operator.
fn normalize(line: &str) -> String {
	line.replace('\u{2212}', "-").replace('\u{b7}', "").trim().to_owned()
}

fn strip_comment(line: &str) -> Option<String> {
	let line = normalize(line);

	if line.is_empty() || line.starts_with('#') {
		return None;
	}

	let line = match line.split_once('#') {
		Some((code, _)) => normalize(code),
		None => line,
	};

	(!line.is_empty()).then_some(line)
}

fn parse_register(token: &str) -> Result<Register, LineError> {
	let digits = token
		.strip_prefix('R')
		.filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
		.ok_or_else(|| LineError::BadRegister(token.to_owned()))?;

	digits
		.parse()
		.map_err(|_| LineError::RegisterOutOfRange(token.to_owned()))
}

fn parse_offset(token: &str) -> Result<Offset, LineError> {
	let value: BigInt = token.parse().map_err(|_| LineError::BadOffset)?;

	if !value.is_positive() {
		return Err(LineError::NonPositiveOffset);
	}

	value
		.to_usize()
		.and_then(Offset::new)
		.ok_or(LineError::OffsetOutOfRange)
}

fn parse_arithmetic(lhs: &str, rhs: &str, op: &str) -> Result<Instruction, LineError> {
	let reg = parse_register(lhs)?;

	if parse_register(rhs)? != reg {
		return Err(LineError::MismatchedRegisters);
	}

	if op == "+" {
		Ok(Instruction::Inc { reg })
	} else {
		Ok(Instruction::Dec { reg })
	}
}

fn parse_jump(reg: &str, kind: &str, offset: &str) -> Result<Instruction, LineError> {
	let reg = parse_register(reg)?;
	let offset = parse_offset(offset)?;

	if kind == "gotof" {
		Ok(Instruction::GotoF { reg, offset })
	} else {
		Ok(Instruction::GotoB { reg, offset })
	}
}

fn parse_statement(line: &str) -> Result<Instruction, LineError> {
	let tokens: Vec<&str> = line.split_whitespace().collect();

	match tokens[..] {
		[lhs, "=", rhs, op @ ("+" | "-"), "1"] => parse_arithmetic(lhs, rhs, op),
		["if", reg, "then", kind @ ("gotof" | "gotob"), offset] => parse_jump(reg, kind, offset),
		_ => Err(LineError::UnknownFormat),
	}
}

#[derive(Default)]
pub struct Parser {
	code: Vec<Instruction>,
}

impl Parser {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// # Errors
	///
	/// Returns a `SyntaxError` for the first line that is neither blank, a
	/// comment, nor one of the two statement forms. Nothing is returned for
	/// the lines before it.
	pub fn parse(&mut self, source: &str) -> Result<Program, SyntaxError> {
		self.code.clear();

		for (index, raw) in split_lines(source).enumerate() {
			let Some(line) = strip_comment(raw) else {
				continue;
			};

			let instruction = parse_statement(&line).map_err(|kind| SyntaxError {
				line: index + 1,
				kind,
				text: raw.to_owned(),
			})?;

			self.code.push(instruction);
		}

		Ok(self.code.drain(..).collect())
	}
}

/// # Errors
///
/// See [`Parser::parse`].
pub fn parse(source: &str) -> Result<Program, SyntaxError> {
	Parser::new().parse(source)
}
