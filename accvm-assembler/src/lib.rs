//! ACCVM Assembler
//!
//! Assemble ACCVM assembly language into a flat binary of 32-bit words.
//!
//! ## Example
//!
//! ```rust
//! use accvm_assembler::assemble;
//!
//! let source = r#"
//!     LOAD_CONST 5
//!     WRITE_MEM 10
//! "#;
//!
//! let assembly = assemble(source).unwrap();
//! assert_eq!(assembly.to_bytes().len(), 8);
//! ```

pub mod assembler;
pub mod encoder;
pub mod error;
pub mod lexer;
pub mod log;
pub mod parser;

pub use assembler::{assemble, assemble_instruction, Assembly};
pub use encoder::{encode, encode_line};
pub use error::{AssemblerError, Result};
pub use log::LogEntry;
pub use parser::{parse_instruction, parse_mnemonic};
