//! Assembly trace
//!
//! One [`LogEntry`] per encoded instruction. The trace is diagnostic only;
//! nothing in the runtime reads it.

use accvm_spec::Instruction;
use serde::{Deserialize, Serialize};

/// Human-readable record of one assembled instruction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub mnemonic: String,
    pub opcode: u8,
    pub operand: u32,
    pub instruction_word: u32,
}

impl LogEntry {
    pub fn new(instr: &Instruction) -> Self {
        Self {
            mnemonic: instr.mnemonic().to_string(),
            opcode: instr.opcode().to_u8(),
            operand: instr.operand(),
            instruction_word: instr.encode(),
        }
    }
}

impl From<&Instruction> for LogEntry {
    fn from(instr: &Instruction) -> Self {
        Self::new(instr)
    }
}
