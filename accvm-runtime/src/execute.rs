//! Instruction execution for ACCVM

use accvm_spec::{Instruction, MachineConfig, Opcode};
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::{Result, RuntimeError};
use crate::state::VMState;

/// Execute single instruction
///
/// Operands are re-masked to their opcode's width here even though
/// [`Instruction::decode`] already did so; a hand-built `Instruction` may
/// carry wider values.
pub fn execute(instr: &Instruction, state: &mut VMState, config: &MachineConfig) -> Result<()> {
    let index = state.steps;

    match *instr {
        Instruction::LoadConst { value } => {
            state.accumulator = BigUint::from(value & Opcode::LoadConst.operand_mask());
        }

        Instruction::ReadMem { offset } => {
            let offset = (offset & Opcode::ReadMem.operand_mask()) as u64;
            // (acc + off) % n == ((acc % n) + off) % n
            let base = state.memory.wrap_big(&state.accumulator) as u64;
            state.accumulator = state.memory.load(base + offset).clone();
        }

        Instruction::WriteMem { address } => {
            let address = (address & Opcode::WriteMem.operand_mask()) as u64;
            state.memory.store(address, state.accumulator.clone());
        }

        Instruction::Pow { address } => {
            let address = (address & Opcode::Pow.operand_mask()) as u64;
            let exponent = state.memory.load(address);
            state.accumulator = pow(&state.accumulator, exponent, index, config.max_pow_bits)?;
        }
    }

    state.steps += 1;
    Ok(())
}

/// Unbounded `base ^ exponent`, with `0 ^ 0 = 1`.
///
/// With a limit, results longer than `limit` bits are rejected. The check
/// runs before the multiplication whenever the lower bound on the result
/// length already exceeds the limit.
pub fn pow(
    base: &BigUint,
    exponent: &BigUint,
    index: usize,
    limit: Option<u64>,
) -> Result<BigUint> {
    if exponent.is_zero() {
        return Ok(BigUint::one());
    }
    if base.is_zero() || base.is_one() {
        return Ok(base.clone());
    }

    // base >= 2, so the result has at least (bits(base) - 1) * exp + 1 bits
    let min_bits = (base.bits() - 1)
        .saturating_mul(exponent.to_u64().unwrap_or(u64::MAX))
        .saturating_add(1);
    if let Some(limit) = limit {
        if min_bits > limit {
            return Err(RuntimeError::PowLimitExceeded {
                index,
                bits: min_bits,
                limit,
            });
        }
    }

    let exp = exponent
        .to_u32()
        .ok_or_else(|| RuntimeError::PowExponentTooLarge {
            index,
            exponent: exponent.to_string(),
        })?;

    let result = base.pow(exp);
    if let Some(limit) = limit {
        if result.bits() > limit {
            return Err(RuntimeError::PowLimitExceeded {
                index,
                bits: result.bits(),
                limit,
            });
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    fn run(instrs: &[Instruction]) -> VMState {
        let config = MachineConfig::DEFAULT;
        let mut state = VMState::new(config.memory_size);
        for instr in instrs {
            execute(instr, &mut state, &config).unwrap();
        }
        state
    }

    #[test]
    fn test_load_const() {
        let state = run(&[Instruction::LoadConst { value: 42 }]);
        assert_eq!(state.accumulator, big(42));
        assert_eq!(state.steps, 1);
    }

    #[test]
    fn test_load_const_masks_wide_value() {
        let state = run(&[Instruction::LoadConst { value: 0xFF_FFFF }]);
        assert_eq!(state.accumulator, big(0x3F_FFFF));
    }

    #[test]
    fn test_write_then_read() {
        let state = run(&[
            Instruction::LoadConst { value: 99 },
            Instruction::WriteMem { address: 12 },
            Instruction::LoadConst { value: 10 },
            Instruction::ReadMem { offset: 2 },
        ]);
        assert_eq!(state.accumulator, big(99));
        assert_eq!(state.memory.load(12), &big(99));
    }

    #[test]
    fn test_write_leaves_accumulator() {
        let state = run(&[
            Instruction::LoadConst { value: 8 },
            Instruction::WriteMem { address: 0 },
        ]);
        assert_eq!(state.accumulator, big(8));
    }

    #[test]
    fn test_write_wraps() {
        let state = run(&[
            Instruction::LoadConst { value: 5 },
            Instruction::WriteMem { address: 1024 + 3 },
        ]);
        assert_eq!(state.memory.load(3), &big(5));
    }

    #[test]
    fn test_read_wraps_on_accumulator_plus_offset() {
        let state = run(&[
            Instruction::LoadConst { value: 77 },
            Instruction::WriteMem { address: 1 },
            Instruction::LoadConst { value: 1020 },
            Instruction::ReadMem { offset: 5 },
        ]);
        // (1020 + 5) % 1024 == 1
        assert_eq!(state.accumulator, big(77));
    }

    #[test]
    fn test_pow() {
        let state = run(&[
            Instruction::LoadConst { value: 5 },
            Instruction::WriteMem { address: 10 },
            Instruction::LoadConst { value: 3 },
            Instruction::Pow { address: 10 },
        ]);
        assert_eq!(state.accumulator, big(243));
    }

    #[test]
    fn test_pow_zero_exponent() {
        let state = run(&[
            Instruction::LoadConst { value: 12345 },
            Instruction::Pow { address: 500 },
        ]);
        assert_eq!(state.accumulator, big(1));
    }

    #[test]
    fn test_pow_zero_to_zero_is_one() {
        let state = run(&[Instruction::Pow { address: 0 }]);
        assert_eq!(state.accumulator, big(1));
    }

    #[test]
    fn test_pow_exceeds_u64() {
        let state = run(&[
            Instruction::LoadConst { value: 100 },
            Instruction::WriteMem { address: 0 },
            Instruction::Pow { address: 0 },
        ]);
        // 100^100 == 10^200
        assert_eq!(state.accumulator, BigUint::from(10u32).pow(200));
        assert!(state.accumulator.bits() > 64);
    }

    #[test]
    fn test_pow_limit_rejects_early() {
        let err = pow(&big(2), &big(1_000_000), 4, Some(64)).unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::PowLimitExceeded { index: 4, bits: 1_000_001, limit: 64 }
        ));
    }

    #[test]
    fn test_pow_limit_checks_exact_length() {
        // 3^40 needs 64 bits; the lower bound (41) passes
        assert!(pow(&big(3), &big(40), 0, Some(64)).is_ok());
        assert!(matches!(
            pow(&big(3), &big(41), 0, Some(64)),
            Err(RuntimeError::PowLimitExceeded { bits: 65, .. })
        ));
    }

    #[test]
    fn test_pow_huge_exponent_trivial_bases() {
        let huge = BigUint::from(1u32) << 100u32;
        assert_eq!(pow(&big(0), &huge, 0, None).unwrap(), big(0));
        assert_eq!(pow(&big(1), &huge, 0, None).unwrap(), big(1));
        assert!(matches!(
            pow(&big(2), &huge, 9, None),
            Err(RuntimeError::PowExponentTooLarge { index: 9, .. })
        ));
    }
}
