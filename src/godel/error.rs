use num_bigint::{BigInt, BigUint};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
	#[error("Cantor unpairing expects a positive integer, got {value}")]
	InvalidArgument { value: BigInt },

	#[error("Instruction code must be >= 0, got {value}")]
	NegativeCode { value: BigInt },

	#[error("Internal error while unpairing {value}")]
	Inconsistent { value: BigUint },

	#[error("Invalid jump type b={kind} decoded from {code}")]
	InvalidJumpType { kind: BigUint, code: BigUint },

	#[error("Invalid jump offset x=0 decoded from {code} (must be > 0)")]
	InvalidJumpOffset { code: BigUint },

	#[error("Register index {index} decoded from {code} is out of range")]
	RegisterOutOfRange { index: BigUint, code: BigUint },

	#[error("Jump offset {offset} decoded from {code} is out of range")]
	OffsetOutOfRange { offset: BigUint, code: BigUint },
}
