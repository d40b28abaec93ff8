//! Instruction codes: `Inc(k) = 3k`, `Dec(k) = 3k + 1`, and a jump is
//! `3 * <b, <k, x>> - 1` with `b = 0` forward and `b = 1` backward.
//! A program is the sequence code of its instruction codes.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

use super::{
	error::DecodeError,
	pairing::{decode_sequence, encode_sequence, pair, unpair},
};
use crate::program::{Instruction, Offset, Program, Register};

fn encode_jump(kind: u32, reg: Register, offset: Offset) -> BigUint {
	let operands = pair(&BigUint::from(reg), &BigUint::from(offset.get()));

	pair(&BigUint::from(kind), &operands) * 3u32 - 1u32
}

#[must_use]
pub fn encode_instruction(insn: &Instruction) -> BigUint {
	match *insn {
		Instruction::Inc { reg } => BigUint::from(reg) * 3u32,
		Instruction::Dec { reg } => BigUint::from(reg) * 3u32 + 1u32,
		Instruction::GotoF { reg, offset } => encode_jump(0, reg, offset),
		Instruction::GotoB { reg, offset } => encode_jump(1, reg, offset),
	}
}

#[must_use]
pub fn encode_program(program: &Program) -> BigUint {
	let codes: Vec<_> = program.iter().map(encode_instruction).collect();

	encode_sequence(&codes)
}

fn to_register(index: &BigUint, code: &BigUint) -> Result<Register, DecodeError> {
	index.to_usize().ok_or_else(|| DecodeError::RegisterOutOfRange {
		index: index.clone(),
		code: code.clone(),
	})
}

fn decode_jump(t: &BigUint, code: &BigUint) -> Result<Instruction, DecodeError> {
	let (kind, rest) = unpair(t)?;
	let (reg, offset) = unpair(&rest)?;

	let backward = match kind.to_u8() {
		Some(0) => false,
		Some(1) => true,
		_ => {
			return Err(DecodeError::InvalidJumpType {
				kind,
				code: code.clone(),
			})
		}
	};

	if offset.is_zero() {
		return Err(DecodeError::InvalidJumpOffset { code: code.clone() });
	}

	let reg = to_register(&reg, code)?;
	let offset = offset
		.to_usize()
		.and_then(Offset::new)
		.ok_or_else(|| DecodeError::OffsetOutOfRange {
			offset: offset.clone(),
			code: code.clone(),
		})?;

	if backward {
		Ok(Instruction::GotoB { reg, offset })
	} else {
		Ok(Instruction::GotoF { reg, offset })
	}
}

fn decode_natural(code: &BigUint) -> Result<Instruction, DecodeError> {
	let (quotient, remainder) = code.div_rem(&BigUint::from(3u32));

	match remainder.to_u8() {
		Some(0) => to_register(&quotient, code).map(|reg| Instruction::Inc { reg }),
		Some(1) => to_register(&quotient, code).map(|reg| Instruction::Dec { reg }),
		_ => decode_jump(&(quotient + 1u32), code),
	}
}

/// # Errors
///
/// Returns `DecodeError::NegativeCode` for a negative code, and the matching
/// `DecodeError` when a jump code carries a bad type bit, a zero offset or an
/// operand that does not fit a machine word.
pub fn decode_instruction(code: &BigInt) -> Result<Instruction, DecodeError> {
	if code.is_negative() {
		return Err(DecodeError::NegativeCode {
			value: code.clone(),
		});
	}

	decode_natural(code.magnitude())
}

/// Decodes a whole program; the first bad instruction code fails all of it.
///
/// # Errors
///
/// Returns `DecodeError::InvalidArgument` for a negative code, otherwise the
/// first error raised by [`decode_instruction`].
pub fn decode_program(code: &BigInt) -> Result<Program, DecodeError> {
	if code.is_negative() {
		return Err(DecodeError::InvalidArgument {
			value: code.clone(),
		});
	}

	decode_sequence(code.magnitude())?
		.iter()
		.map(decode_natural)
		.collect()
}
