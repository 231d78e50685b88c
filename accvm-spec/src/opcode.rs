//! # ACCVM Opcode Definitions
//!
//! The opcode table is closed: four instructions, each with a fixed 8-bit
//! code and a fixed operand width.
//!
//! | Mnemonic     | Code | Operand bits |
//! |--------------|------|--------------|
//! | `LOAD_CONST` | 0x42 | 22           |
//! | `READ_MEM`   | 0xA5 | 11           |
//! | `WRITE_MEM`  | 0xBB | 23           |
//! | `POW`        | 0x2F | 23           |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::encoding::{
    LOAD_CONST_BITS, OPCODE_MASK, POW_BITS, READ_MEM_BITS, WRITE_MEM_BITS,
};

/// Instruction opcode (low 8 bits of every word)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// LOAD_CONST: acc = imm22
    LoadConst = 66,
    /// READ_MEM: acc = mem[(acc + off11) % size]
    ReadMem = 165,
    /// WRITE_MEM: mem[addr23 % size] = acc
    WriteMem = 187,
    /// POW: acc = acc ^ mem[addr23 % size]
    Pow = 47,
}

impl Opcode {
    /// Every opcode, in table order
    pub const ALL: [Opcode; 4] = [
        Opcode::LoadConst,
        Opcode::ReadMem,
        Opcode::WriteMem,
        Opcode::Pow,
    ];

    /// Opcode width in bits
    pub const BITS: u32 = 8;

    /// Try to convert from u8
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            66 => Some(Opcode::LoadConst),
            165 => Some(Opcode::ReadMem),
            187 => Some(Opcode::WriteMem),
            47 => Some(Opcode::Pow),
            _ => None,
        }
    }

    /// Convert to u8
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Extract opcode from 32-bit instruction word
    #[inline]
    pub fn from_instruction(instruction: u32) -> Option<Self> {
        Self::from_u8((instruction & OPCODE_MASK) as u8)
    }

    /// Look up an opcode by its assembly mnemonic (case-sensitive)
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        match mnemonic {
            "LOAD_CONST" => Some(Opcode::LoadConst),
            "READ_MEM" => Some(Opcode::ReadMem),
            "WRITE_MEM" => Some(Opcode::WriteMem),
            "POW" => Some(Opcode::Pow),
            _ => None,
        }
    }

    /// Assembly mnemonic
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::LoadConst => "LOAD_CONST",
            Opcode::ReadMem => "READ_MEM",
            Opcode::WriteMem => "WRITE_MEM",
            Opcode::Pow => "POW",
        }
    }

    /// Number of significant operand bits
    #[inline]
    pub const fn operand_bits(self) -> u32 {
        match self {
            Opcode::LoadConst => LOAD_CONST_BITS,
            Opcode::ReadMem => READ_MEM_BITS,
            Opcode::WriteMem => WRITE_MEM_BITS,
            Opcode::Pow => POW_BITS,
        }
    }

    /// Mask covering the significant operand bits
    #[inline]
    pub const fn operand_mask(self) -> u32 {
        (1u32 << self.operand_bits()) - 1
    }

    /// Largest operand the assembler accepts (`2^bits - 1`)
    #[inline]
    pub const fn max_operand(self) -> u32 {
        self.operand_mask()
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
