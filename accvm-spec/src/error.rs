//! # Error Types for ACCVM

use crate::config::ConfigError;
use crate::Opcode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    // Instruction errors
    #[error("Invalid opcode: {0:#04x}")]
    InvalidOpcode(u8),

    #[error("Operand {operand} out of range for {opcode} (max {max})")]
    OperandOutOfRange { opcode: Opcode, operand: u64, max: u32 },

    // Program format errors
    #[error("Truncated program: {len} bytes is not a multiple of 4 ({trailing} trailing)")]
    TruncatedProgram { len: usize, trailing: usize },
}

impl SpecError {
    /// Check if this error makes the rest of a word stream meaningless
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SpecError::InvalidOpcode(_) | SpecError::TruncatedProgram { .. }
        )
    }
}
