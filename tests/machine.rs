use num_bigint::BigInt;
use proptest::prelude::*;
use ramcode::{
	machine::{halted, step, MachineError, MachineState, Registers},
	program::{Instruction, Offset, Program},
};

fn int(value: impl Into<BigInt>) -> BigInt {
	value.into()
}

fn offset(value: usize) -> Offset {
	Offset::new(value).unwrap()
}

fn registers(values: &[(usize, i64)]) -> Registers {
	values.iter().map(|&(reg, value)| (reg, int(value))).collect()
}

fn single(insn: Instruction) -> Program {
	vec![insn].into()
}

#[test]
fn initial_state_holds_the_input() {
	let state = MachineState::initial(&int(7));

	assert_eq!(state.pc, 1);
	assert_eq!(state.registers, registers(&[(0, 7)]));

	let state = MachineState::initial(&int(0));

	assert!(state.registers.is_empty());
}

#[test]
fn increment_and_decrement() {
	let state = MachineState::new(1, registers(&[(2, 5)]));

	let next = step(&state, &single(Instruction::Inc { reg: 2 })).unwrap();

	assert_eq!(next, MachineState::new(2, registers(&[(2, 6)])));

	let next = step(&state, &single(Instruction::Dec { reg: 2 })).unwrap();

	assert_eq!(next, MachineState::new(2, registers(&[(2, 4)])));
}

#[test]
fn decrement_saturates_at_zero() {
	let program = single(Instruction::Dec { reg: 4 });
	let state = MachineState::new(1, Registers::new());

	let next = step(&state, &program).unwrap();

	assert_eq!(next.registers.get(4), int(0));
	assert!(next.registers.is_empty());

	let state = MachineState::new(1, registers(&[(4, 1)]));
	let next = step(&state, &program).unwrap();

	// A register brought down to zero is dropped from the map.
	assert!(next.registers.is_empty());
}

#[test]
fn negative_values_are_nonzero_until_decremented() {
	let state = MachineState::initial(&int(-4));

	assert_eq!(state.registers, registers(&[(0, -4)]));

	let jump = single(Instruction::GotoF {
		reg: 0,
		offset: offset(2),
	});

	assert_eq!(step(&state, &jump).unwrap().pc, 3);

	let next = step(&state, &single(Instruction::Inc { reg: 0 })).unwrap();

	assert_eq!(next.registers.get(0), int(-3));

	let next = step(&state, &single(Instruction::Dec { reg: 0 })).unwrap();

	assert!(next.registers.is_zero(0));
}

#[test]
fn jumps_depend_on_the_register() {
	let forward = single(Instruction::GotoF {
		reg: 0,
		offset: offset(3),
	});
	let backward: Program = vec![
		Instruction::Inc { reg: 9 },
		Instruction::Inc { reg: 9 },
		Instruction::GotoB {
			reg: 0,
			offset: offset(2),
		},
	]
	.into();

	let zero = MachineState::new(1, Registers::new());
	let set = MachineState::new(1, registers(&[(0, 1)]));

	assert_eq!(step(&zero, &forward).unwrap().pc, 2);
	assert_eq!(step(&set, &forward).unwrap().pc, 4);

	let zero = MachineState::new(3, Registers::new());
	let set = MachineState::new(3, registers(&[(0, 1)]));

	assert_eq!(step(&zero, &backward).unwrap().pc, 4);
	assert_eq!(step(&set, &backward).unwrap().pc, 1);
}

#[test]
fn backward_jump_past_the_start_lands_on_zero() {
	let program: Program = vec![
		Instruction::Inc { reg: 0 },
		Instruction::GotoB {
			reg: 0,
			offset: offset(5),
		},
	]
	.into();

	let state = MachineState::new(2, registers(&[(0, 1)]));
	let next = step(&state, &program).unwrap();

	assert_eq!(next.pc, 0);
	assert!(halted(&next, program.len()));
}

#[test]
fn step_leaves_the_previous_state_alone() {
	let program = single(Instruction::Inc { reg: 1 });
	let before = MachineState::new(1, registers(&[(1, 2)]));
	let copy = before.clone();

	let after = step(&before, &program).unwrap();

	assert_eq!(before, copy);
	assert_ne!(before, after);
	assert_eq!(after.registers.get(1), int(3));
}

#[test]
fn stepping_a_halted_state_is_an_error() {
	let program = single(Instruction::Inc { reg: 1 });

	for pc in [0, 2, 100] {
		let state = MachineState::new(pc, Registers::new());

		assert_eq!(
			step(&state, &program),
			Err(MachineError::Halted { pc, len: 1 })
		);
	}
}

fn arb_instruction() -> impl Strategy<Value = Instruction> {
	let offset = (1..8usize).prop_map(offset);

	prop_oneof![
		(0..4usize).prop_map(|reg| Instruction::Inc { reg }),
		(0..4usize).prop_map(|reg| Instruction::Dec { reg }),
		(0..4usize, offset.clone()).prop_map(|(reg, offset)| Instruction::GotoF { reg, offset }),
		(0..4usize, offset).prop_map(|(reg, offset)| Instruction::GotoB { reg, offset }),
	]
}

fn arb_registers() -> impl Strategy<Value = Registers> {
	prop::collection::vec((0..4usize, -2..3i64), 0..4)
		.prop_map(|values| values.into_iter().map(|(reg, value)| (reg, int(value))).collect())
}

proptest! {
	#[test]
	fn halts_exactly_outside_the_program(len in 0..16usize, pc in 0..24usize) {
		let state = MachineState::new(pc, Registers::new());

		prop_assert_eq!(halted(&state, len), pc == 0 || pc > len);
	}

	#[test]
	fn registers_never_store_zero(values in arb_registers()) {
		prop_assert!(values.iter().all(|(_, value)| *value != int(0)));
	}

	#[test]
	fn repeated_decrements_bottom_out(start in 0..20u64, times in 0..40usize) {
		let program: Program = std::iter::repeat(Instruction::Dec { reg: 0 }).take(times).collect();
		let mut state = MachineState::initial(&int(start));

		while !halted(&state, program.len()) {
			state = step(&state, &program).unwrap();
		}

		prop_assert_eq!(state.registers.get(0), int(start.saturating_sub(times as u64)));
	}

	#[test]
	fn steps_only_touch_the_named_register(
		insn in arb_instruction(),
		values in arb_registers(),
	) {
		let program = single(insn);
		let state = MachineState::new(1, values);
		let next = step(&state, &program).unwrap();

		for reg in (0..4).filter(|&reg| reg != insn.register()) {
			prop_assert_eq!(next.registers.get(reg), state.registers.get(reg));
		}

		if matches!(insn, Instruction::GotoF { .. } | Instruction::GotoB { .. }) {
			prop_assert_eq!(&next.registers, &state.registers);
		}
	}
}
