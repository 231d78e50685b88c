//! Instruction encoding to 32-bit words
//!
//! `word = (operand << 8) | opcode`, serialized little-endian.

use accvm_spec::Instruction;

use crate::error::Result;
use crate::parser::parse_instruction;

/// Encode instruction to 32-bit word
pub fn encode(instr: &Instruction) -> u32 {
    instr.encode()
}

/// Encode one line of source text.
///
/// Blank and comment lines produce `Ok(None)`.
pub fn encode_line(text: &str) -> Result<Option<u32>> {
    Ok(parse_instruction(text)?.map(|instr| encode(&instr)))
}
