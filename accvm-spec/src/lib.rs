//! # ACCVM Specification
//!
//! Accumulator instruction set shared by the assembler and the runtime.
//!
//! ## Key Features
//! - Four instructions: LOAD_CONST, READ_MEM, WRITE_MEM, POW
//! - 32-bit instruction words, little-endian on the wire
//! - 8-bit opcode in the low byte, 24-bit operand above it
//! - Per-opcode operand width (11, 22 or 23 significant bits)
//! - Headerless binary format: words concatenated back to back

pub mod config;
pub mod encoding;
pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;

pub use config::{ConfigError, MachineConfig};
pub use error::SpecError;
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use program::Program;

/// Memory cells in the reference machine
pub const DEFAULT_MEMORY_SIZE: usize = 1024;

/// Bytes per instruction word
pub const WORD_BYTES: usize = 4;

/// Instruction word (stored little-endian)
pub type Word = u32;
