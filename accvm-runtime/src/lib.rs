//! # ACCVM Runtime
//!
//! Execute ACCVM binaries against a bounded memory array.
//!
//! ## Features
//!
//! - **One accumulator**: unbounded unsigned integer
//! - **Fixed memory**: 1024 cells by default, every address wraps
//! - **Four instructions**: LOAD_CONST, READ_MEM, WRITE_MEM, POW
//! - **Strict input**: unknown opcodes and truncated streams abort the run
//!
//! ## Example
//!
//! ```rust
//! use accvm_runtime::VM;
//! use accvm_spec::{Instruction, Program};
//! use num_bigint::BigUint;
//!
//! let program = Program::from_instructions(&[
//!     Instruction::LoadConst { value: 5 },
//!     Instruction::WriteMem { address: 10 },
//!     Instruction::LoadConst { value: 3 },
//!     Instruction::Pow { address: 10 },
//! ]);
//! let mut vm = VM::default();
//! let result = vm.run_bytes(&program.to_bytes()).unwrap();
//! assert_eq!(result.accumulator, BigUint::from(243u32));
//! ```

pub mod error;
pub mod execute;
pub mod memory;
pub mod state;
pub mod vm;

pub use error::{Result, RuntimeError};
pub use memory::Memory;
pub use state::VMState;
pub use vm::{ExecutionResult, VM};

/// Simple execution helper
///
/// Runs a binary image on a fresh default VM and returns the finished VM.
pub fn run(bytes: &[u8]) -> Result<VM> {
    let mut vm = VM::default();
    vm.run_bytes(bytes)?;
    Ok(vm)
}
