//! # Program Structure for ACCVM
//!
//! A program is an ordered list of instruction words. The binary format has
//! no header, magic number or length field:
//!
//! ```text
//! Offset  Size  Field
//! ──────────────────────────────
//! 0x00    4     word 0 (LE)
//! 0x04    4     word 1 (LE)
//! ...
//! ```

use crate::error::SpecError;
use crate::{Instruction, WORD_BYTES};
use std::fmt;

/// Complete ACCVM program
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    /// Instruction words in execution order
    pub code: Vec<u32>,
}

impl Program {
    /// Create a program from raw words
    pub fn new(code: Vec<u32>) -> Self {
        Self { code }
    }

    /// Create a program by encoding instructions
    pub fn from_instructions(instructions: &[Instruction]) -> Self {
        Self {
            code: instructions.iter().map(Instruction::encode).collect(),
        }
    }

    /// Number of instruction words
    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Serialize to bytes: little-endian words, no delimiters
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.code.len() * WORD_BYTES);
        for word in &self.code {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        bytes
    }

    /// Deserialize from bytes. The length must be a multiple of 4.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SpecError> {
        let trailing = bytes.len() % WORD_BYTES;
        if trailing != 0 {
            return Err(SpecError::TruncatedProgram {
                len: bytes.len(),
                trailing,
            });
        }

        let code = bytes
            .chunks_exact(WORD_BYTES)
            .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        Ok(Self { code })
    }

    /// Decode every word, stopping at the first unknown opcode
    pub fn instructions(&self) -> Result<Vec<Instruction>, SpecError> {
        self.code.iter().map(|&word| Instruction::decode(word)).collect()
    }
}

impl From<Vec<u32>> for Program {
    fn from(code: Vec<u32>) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &word) in self.code.iter().enumerate() {
            match Instruction::decode(word) {
                Ok(inst) => writeln!(f, "{:04}: {:#010x}  {}", i, word, inst)?,
                Err(_) => writeln!(f, "{:04}: {:#010x}  <invalid>", i, word)?,
            }
        }
        Ok(())
    }
}
