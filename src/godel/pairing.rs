//! The shifted Cantor pairing `<x, y> = 1 + y + (x + y)(x + y + 1) / 2`.
//!
//! Every pair maps to a positive number, which leaves `0` free to terminate
//! sequences written as `<a1, <a2, ... <an, 0>...>>`.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use super::error::DecodeError;

fn triangle(s: &BigUint) -> BigUint {
	(s * (s + 1u32)) >> 1u32
}

#[must_use]
pub fn pair(x: &BigUint, y: &BigUint) -> BigUint {
	triangle(&(x + y)) + y + 1u32
}

/// # Errors
///
/// Returns `DecodeError::InvalidArgument` if `z` is zero, which no pair maps to.
pub fn unpair(z: &BigUint) -> Result<(BigUint, BigUint), DecodeError> {
	if z.is_zero() {
		return Err(DecodeError::InvalidArgument {
			value: BigInt::from(z.clone()),
		});
	}

	let w = z - 1u32;

	// Largest `s` with `T(s) <= w`.
	let s = (((&w << 3u32) + 1u32).sqrt() - 1u32) >> 1u32;
	let base = triangle(&s);

	let inconsistent = || DecodeError::Inconsistent { value: z.clone() };

	if base > w {
		return Err(inconsistent());
	}

	let y = w - base;

	if y > s {
		return Err(inconsistent());
	}

	Ok((s - &y, y))
}

#[must_use]
pub fn encode_sequence(list: &[BigUint]) -> BigUint {
	list.iter()
		.rev()
		.fold(BigUint::zero(), |rest, head| pair(head, &rest))
}

/// # Errors
///
/// Returns `DecodeError::Inconsistent` if an unpairing step does not invert.
pub fn decode_sequence(code: &BigUint) -> Result<Vec<BigUint>, DecodeError> {
	let mut list = Vec::new();
	let mut rest = code.clone();

	while !rest.is_zero() {
		let (head, tail) = unpair(&rest)?;

		list.push(head);
		rest = tail;
	}

	Ok(list)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn natural(value: u64) -> BigUint {
		BigUint::from(value)
	}

	#[test]
	fn first_values() {
		let expected = [(0, 0, 1), (1, 0, 2), (0, 1, 3), (2, 0, 4), (1, 1, 5), (0, 2, 6)];

		for (x, y, z) in expected {
			assert_eq!(pair(&natural(x), &natural(y)), natural(z));
			assert_eq!(unpair(&natural(z)), Ok((natural(x), natural(y))));
		}
	}

	#[test]
	fn unpairs_around_triangle_boundaries() {
		for s in [1u64, 2, 7, 1_000, 1 << 31, u64::MAX / 4] {
			let t = natural(s) * natural(s + 1) / 2u32;

			// `z - 1 == T(s)` starts diagonal `s`, `z - 1 == T(s) - 1` ends diagonal `s - 1`.
			assert_eq!(unpair(&(&t + 1u32)), Ok((natural(s), natural(0))));
			assert_eq!(unpair(&t), Ok((natural(0), natural(s - 1))));
		}
	}

	#[test]
	fn zero_is_not_a_pair() {
		assert!(matches!(
			unpair(&natural(0)),
			Err(DecodeError::InvalidArgument { .. })
		));
	}

	#[test]
	fn sequence_of_two() {
		let code = pair(&natural(5), &pair(&natural(7), &natural(0)));

		assert_eq!(encode_sequence(&[natural(5), natural(7)]), code);
		assert_eq!(decode_sequence(&code), Ok(vec![natural(5), natural(7)]));
	}
}
