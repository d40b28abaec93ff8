use arbitrary::{Arbitrary, Result, Unstructured};
use num_bigint::BigInt;

/// A signed program number built from raw little-endian bytes.
#[derive(Debug)]
pub struct ProgramCode {
	pub value: BigInt,
}

impl Arbitrary<'_> for ProgramCode {
	fn arbitrary(u: &mut Unstructured) -> Result<Self> {
		let len = u.arbitrary_len::<u8>()?;
		let bytes = u.bytes(len)?;

		Ok(Self {
			value: BigInt::from_signed_bytes_le(bytes),
		})
	}
}
