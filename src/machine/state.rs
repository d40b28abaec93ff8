use std::{
	collections::{btree_map, BTreeMap},
	fmt::{Display, Formatter, Result},
};

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::program::Register;

/// Register file where every register absent from the map holds zero.
///
/// Zeros are never stored, so two files holding the same values compare
/// equal no matter how they got there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Registers {
	values: BTreeMap<Register, BigInt>,
}

impl Registers {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn get(&self, reg: Register) -> BigInt {
		self.values.get(&reg).cloned().unwrap_or_default()
	}

	#[must_use]
	pub fn is_zero(&self, reg: Register) -> bool {
		!self.values.contains_key(&reg)
	}

	pub fn set(&mut self, reg: Register, value: BigInt) {
		if value.is_zero() {
			self.values.remove(&reg);
		} else {
			self.values.insert(reg, value);
		}
	}

	pub fn increment(&mut self, reg: Register) {
		match self.values.entry(reg) {
			btree_map::Entry::Occupied(mut entry) => {
				*entry.get_mut() += 1u32;

				if entry.get().is_zero() {
					entry.remove();
				}
			}
			btree_map::Entry::Vacant(entry) => {
				entry.insert(BigInt::one());
			}
		}
	}

	/// Subtracts one from a positive value, and clamps anything else to zero.
	pub fn decrement(&mut self, reg: Register) {
		if let btree_map::Entry::Occupied(mut entry) = self.values.entry(reg) {
			if entry.get().is_positive() && !entry.get().is_one() {
				*entry.get_mut() -= 1u32;
			} else {
				entry.remove();
			}
		}
	}

	/// Number of non-zero registers.
	#[must_use]
	pub fn len(&self) -> usize {
		self.values.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Non-zero registers in ascending index order.
	pub fn iter(&self) -> impl Iterator<Item = (Register, &BigInt)> {
		self.values.iter().map(|(&reg, value)| (reg, value))
	}
}

impl FromIterator<(Register, BigInt)> for Registers {
	fn from_iter<I: IntoIterator<Item = (Register, BigInt)>>(iter: I) -> Self {
		let mut registers = Self::new();

		for (reg, value) in iter {
			registers.set(reg, value);
		}

		registers
	}
}

impl Display for Registers {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		if self.is_empty() {
			return write!(f, "(all zero)");
		}

		for (i, (reg, value)) in self.iter().enumerate() {
			if i != 0 {
				write!(f, " ")?;
			}

			write!(f, "R{reg}={value}")?;
		}

		Ok(())
	}
}

// Values are written as decimal strings since they may not fit a JSON number.
impl Serialize for Registers {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.len()))?;

		for (reg, value) in self.iter() {
			map.serialize_entry(&reg, &value.to_string())?;
		}

		map.end()
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct MachineState {
	pub pc: usize,
	pub registers: Registers,
}

impl MachineState {
	#[must_use]
	pub const fn new(pc: usize, registers: Registers) -> Self {
		Self { pc, registers }
	}

	/// The state before the first step: `pc = 1` and the input in `R0`.
	#[must_use]
	pub fn initial(input: &BigInt) -> Self {
		let mut registers = Registers::new();

		registers.set(0, input.clone());

		Self::new(1, registers)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_is_never_stored() {
		let mut registers = Registers::new();

		registers.increment(3);
		registers.decrement(3);
		registers.decrement(3);
		registers.set(4, BigInt::zero());

		assert!(registers.is_empty());
		assert_eq!(registers.get(3), BigInt::zero());
		assert_eq!(registers, Registers::default());
	}

	#[test]
	fn negative_values() {
		let mut registers: Registers = [(0, BigInt::from(-2))].into_iter().collect();

		registers.increment(0);
		assert_eq!(registers.get(0), BigInt::from(-1));

		registers.increment(0);
		assert!(registers.is_zero(0));

		registers.set(0, BigInt::from(-5));
		registers.decrement(0);
		assert!(registers.is_empty());
	}

	#[test]
	fn display() {
		let registers: Registers = [(1, BigInt::from(2u32)), (0, BigInt::from(7u32))]
			.into_iter()
			.collect();

		assert_eq!(registers.to_string(), "R0=7 R1=2");
		assert_eq!(Registers::new().to_string(), "(all zero)");
	}
}
