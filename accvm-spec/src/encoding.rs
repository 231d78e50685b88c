//! # Instruction Encoding Constants and Helpers
//!
//! Centralized constants and helper functions for ACCVM instruction
//! encoding/decoding.
//!
//! ## Instruction Format (32-bit, little-endian)
//!
//! ```text
//! [opcode:8][operand:24]
//!  bits 0-7  bits 8-31
//! ```
//!
//! Only the low `operand_bits` of the operand field are significant. They
//! must be zero above that width when encoding and are masked off when
//! decoding.

use crate::Opcode;

// ============================================================================
// Bit Position Constants
// ============================================================================

/// Opcode field: bits 0-7 (8 bits)
pub const OPCODE_SHIFT: u32 = 0;

/// Operand field: bits 8-31 (24 bits)
pub const OPERAND_SHIFT: u32 = 8;

// ============================================================================
// Field Masks
// ============================================================================

/// Opcode mask (8 bits)
pub const OPCODE_MASK: u32 = 0xFF;

/// Operand field mask (24 bits)
pub const OPERAND_MASK: u32 = 0xFF_FFFF;

// ============================================================================
// Operand Widths
// ============================================================================

/// LOAD_CONST constant width
pub const LOAD_CONST_BITS: u32 = 22;

/// READ_MEM offset width
pub const READ_MEM_BITS: u32 = 11;

/// WRITE_MEM address width
pub const WRITE_MEM_BITS: u32 = 23;

/// POW address width
pub const POW_BITS: u32 = 23;

// ============================================================================
// Field Extraction Functions
// ============================================================================

/// Extract raw opcode byte (bits 0-7)
#[inline]
pub const fn extract_opcode(inst: u32) -> u8 {
    ((inst >> OPCODE_SHIFT) & OPCODE_MASK) as u8
}

/// Extract the full 24-bit operand field (bits 8-31)
#[inline]
pub const fn extract_operand(inst: u32) -> u32 {
    inst >> OPERAND_SHIFT
}

/// Extract the operand masked to the opcode's declared width
#[inline]
pub const fn extract_operand_for(opcode: Opcode, inst: u32) -> u32 {
    extract_operand(inst) & opcode.operand_mask()
}

// ============================================================================
// Instruction Encoding Functions
// ============================================================================

/// Pack an opcode and operand into a word.
///
/// The operand is masked to 24 bits; range validation against the opcode's
/// width is the caller's job (see [`operand_fits`]).
#[inline]
pub const fn encode_word(opcode: Opcode, operand: u32) -> u32 {
    ((operand & OPERAND_MASK) << OPERAND_SHIFT) | ((opcode.to_u8() as u32) << OPCODE_SHIFT)
}

/// Whether `operand` fits the opcode's operand width
#[inline]
pub const fn operand_fits(opcode: Opcode, operand: u64) -> bool {
    operand <= opcode.max_operand() as u64
}
