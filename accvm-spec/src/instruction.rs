//! ACCVM Instruction Set
//!
//! One accumulator, one operand per instruction.
//!
//! ## Instruction Format
//! - `[opcode:8][operand:24]`, operand significance depends on the opcode

use crate::encoding::{encode_word, extract_opcode, extract_operand_for, operand_fits};
use crate::error::SpecError;
use crate::Opcode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ACCVM Instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// LOAD_CONST: acc = value (22 bits)
    LoadConst { value: u32 },

    /// READ_MEM: acc = mem[(acc + offset) % size] (11-bit offset)
    ReadMem { offset: u32 },

    /// WRITE_MEM: mem[address % size] = acc (23-bit address)
    WriteMem { address: u32 },

    /// POW: acc = acc ^ mem[address % size] (23-bit address)
    Pow { address: u32 },
}

impl Instruction {
    /// Build an instruction, rejecting operands wider than the opcode allows
    pub fn new(opcode: Opcode, operand: u64) -> Result<Self, SpecError> {
        if !operand_fits(opcode, operand) {
            return Err(SpecError::OperandOutOfRange {
                opcode,
                operand,
                max: opcode.max_operand(),
            });
        }
        Ok(Self::from_parts(opcode, operand as u32))
    }

    /// Build an instruction after masking the operand to the opcode's width
    fn from_parts(opcode: Opcode, operand: u32) -> Self {
        let operand = operand & opcode.operand_mask();
        match opcode {
            Opcode::LoadConst => Instruction::LoadConst { value: operand },
            Opcode::ReadMem => Instruction::ReadMem { offset: operand },
            Opcode::WriteMem => Instruction::WriteMem { address: operand },
            Opcode::Pow => Instruction::Pow { address: operand },
        }
    }

    /// Get the opcode for this instruction
    pub const fn opcode(&self) -> Opcode {
        match self {
            Instruction::LoadConst { .. } => Opcode::LoadConst,
            Instruction::ReadMem { .. } => Opcode::ReadMem,
            Instruction::WriteMem { .. } => Opcode::WriteMem,
            Instruction::Pow { .. } => Opcode::Pow,
        }
    }

    /// Get the operand value
    pub const fn operand(&self) -> u32 {
        match *self {
            Instruction::LoadConst { value } => value,
            Instruction::ReadMem { offset } => offset,
            Instruction::WriteMem { address } | Instruction::Pow { address } => address,
        }
    }

    /// Pack into a 32-bit word
    pub const fn encode(&self) -> u32 {
        encode_word(self.opcode(), self.operand())
    }

    /// Unpack a 32-bit word.
    ///
    /// Bits above the opcode's operand width are ignored, so any word with a
    /// known opcode decodes.
    pub fn decode(word: u32) -> Result<Self, SpecError> {
        let raw = extract_opcode(word);
        let opcode = Opcode::from_u8(raw).ok_or(SpecError::InvalidOpcode(raw))?;
        Ok(Self::from_parts(opcode, extract_operand_for(opcode, word)))
    }

    /// Mnemonic text for this instruction
    pub const fn mnemonic(&self) -> &'static str {
        self.opcode().mnemonic()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.mnemonic(), self.operand())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_in_range() {
        assert_eq!(
            Instruction::new(Opcode::LoadConst, 5).unwrap(),
            Instruction::LoadConst { value: 5 }
        );
        assert_eq!(
            Instruction::new(Opcode::ReadMem, 2047).unwrap(),
            Instruction::ReadMem { offset: 2047 }
        );
    }

    #[test]
    fn test_new_out_of_range() {
        let err = Instruction::new(Opcode::ReadMem, 2048).unwrap_err();
        assert!(matches!(
            err,
            SpecError::OperandOutOfRange { opcode: Opcode::ReadMem, operand: 2048, max: 2047 }
        ));

        // Values past u32 must not wrap into range
        assert!(Instruction::new(Opcode::Pow, (1u64 << 32) + 1).is_err());
    }

    #[test]
    fn test_encode() {
        assert_eq!(Instruction::LoadConst { value: 5 }.encode(), 0x0000_0542);
        assert_eq!(Instruction::WriteMem { address: 10 }.encode(), 0x0000_0ABB);
        assert_eq!(Instruction::ReadMem { offset: 0 }.encode(), 0x0000_00A5);
    }

    #[test]
    fn test_decode() {
        assert_eq!(
            Instruction::decode(0x0000_0A2F).unwrap(),
            Instruction::Pow { address: 10 }
        );
    }

    #[test]
    fn test_decode_masks_unused_bits() {
        // READ_MEM with all 24 operand bits set keeps only 11
        let word = 0xFFFF_FFA5;
        assert_eq!(
            Instruction::decode(word).unwrap(),
            Instruction::ReadMem { offset: 0x7FF }
        );

        // LOAD_CONST keeps 22
        let word = 0xFFFF_FF42;
        assert_eq!(
            Instruction::decode(word).unwrap(),
            Instruction::LoadConst { value: 0x3F_FFFF }
        );
    }

    #[test]
    fn test_decode_unknown_opcode() {
        let err = Instruction::decode(0x0000_0100).unwrap_err();
        assert!(matches!(err, SpecError::InvalidOpcode(0x00)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Instruction::LoadConst { value: 42 }.to_string(), "LOAD_CONST 42");
        assert_eq!(Instruction::Pow { address: 3 }.to_string(), "POW 3");
    }
}
