//! Virtual Machine for ACCVM

use std::io::Read;

use accvm_spec::{Instruction, MachineConfig, Program, SpecError};
use num_bigint::BigUint;
use tracing::{debug, info};

use crate::error::{Result, RuntimeError};
use crate::execute::execute;
use crate::memory::Memory;
use crate::state::VMState;

/// Execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Number of instructions dispatched
    pub steps: usize,

    /// Final accumulator value
    pub accumulator: BigUint,
}

/// ACCVM Virtual Machine
///
/// Owns one accumulator and one memory array for the lifetime of a run.
#[derive(Debug, Clone)]
pub struct VM {
    /// VM state (accumulator, memory, step count)
    state: VMState,

    /// Configuration
    config: MachineConfig,
}

impl VM {
    /// Create a zero-initialized VM
    pub fn new(config: MachineConfig) -> Result<Self> {
        config.validate().map_err(SpecError::from)?;
        Ok(Self {
            state: VMState::new(config.memory_size),
            config,
        })
    }

    /// Decode and execute one word
    pub fn step(&mut self, word: u32) -> Result<()> {
        let index = self.state.steps;
        let inst = Instruction::decode(word).map_err(|e| match e {
            SpecError::InvalidOpcode(opcode) => RuntimeError::UnknownOpcode {
                index,
                opcode,
                word,
            },
            other => RuntimeError::SpecError(other),
        })?;

        debug!(index, "{:#010x} {}", word, inst);
        execute(&inst, &mut self.state, &self.config)
    }

    /// Run every word in order. Stops at the first failing instruction.
    pub fn run(&mut self, words: &[u32]) -> Result<ExecutionResult> {
        for &word in words {
            self.step(word)?;
        }

        info!(
            steps = self.state.steps,
            accumulator_bits = self.state.accumulator.bits(),
            "execution complete"
        );
        Ok(self.result())
    }

    /// Run a decoded program
    pub fn run_program(&mut self, program: &Program) -> Result<ExecutionResult> {
        self.run(&program.code)
    }

    /// Run a binary image.
    ///
    /// The length is checked before anything executes, so a truncated tail
    /// leaves the VM untouched.
    pub fn run_bytes(&mut self, bytes: &[u8]) -> Result<ExecutionResult> {
        let program = Program::from_bytes(bytes).map_err(|e| match e {
            SpecError::TruncatedProgram { len, trailing } => {
                RuntimeError::TruncatedStream { len, trailing }
            }
            other => RuntimeError::SpecError(other),
        })?;
        debug!(words = program.len(), bytes = bytes.len(), "loaded binary");
        self.run_program(&program)
    }

    /// Read a whole binary stream, then run it
    pub fn run_reader<R: Read>(&mut self, mut reader: R) -> Result<ExecutionResult> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.run_bytes(&bytes)
    }

    /// Summary of the current state
    pub fn result(&self) -> ExecutionResult {
        ExecutionResult {
            steps: self.state.steps,
            accumulator: self.state.accumulator.clone(),
        }
    }

    pub fn accumulator(&self) -> &BigUint {
        &self.state.accumulator
    }

    pub fn memory(&self) -> &Memory {
        &self.state.memory
    }

    /// Memory cells `[start, end)`, see [`Memory::slice`]
    pub fn memory_slice(&self, start: i64, end: i64) -> &[BigUint] {
        self.state.memory.slice(start, end)
    }

    pub fn state(&self) -> &VMState {
        &self.state
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }
}

impl Default for VM {
    fn default() -> Self {
        Self {
            state: VMState::new(MachineConfig::DEFAULT.memory_size),
            config: MachineConfig::DEFAULT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use accvm_spec::ConfigError;
    use num_traits::Zero;

    fn words(instrs: &[Instruction]) -> Vec<u32> {
        instrs.iter().map(Instruction::encode).collect()
    }

    #[test]
    fn test_vm_new_default() {
        let vm = VM::new(MachineConfig::DEFAULT).unwrap();
        assert!(vm.accumulator().is_zero());
        assert_eq!(vm.memory().size(), 1024);
        assert_eq!(vm.state().steps, 0);
    }

    #[test]
    fn test_vm_new_rejects_zero_memory() {
        let config = MachineConfig {
            memory_size: 0,
            max_pow_bits: None,
        };
        let err = VM::new(config).unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::SpecError(SpecError::InvalidConfig(ConfigError::ZeroMemory))
        ));
    }

    #[test]
    fn test_run_scenario_pow() {
        let mut vm = VM::default();
        let result = vm
            .run(&words(&[
                Instruction::LoadConst { value: 5 },
                Instruction::WriteMem { address: 10 },
                Instruction::LoadConst { value: 3 },
                Instruction::Pow { address: 10 },
            ]))
            .unwrap();
        assert_eq!(result.steps, 4);
        assert_eq!(result.accumulator, BigUint::from(243u32));
        assert_eq!(vm.memory_slice(10, 11), &[BigUint::from(5u32)]);
    }

    #[test]
    fn test_run_empty() {
        let mut vm = VM::default();
        let result = vm.run(&[]).unwrap();
        assert_eq!(result.steps, 0);
        assert!(result.accumulator.is_zero());
    }

    #[test]
    fn test_unknown_opcode_aborts() {
        let mut vm = VM::default();
        let mut code = words(&[Instruction::LoadConst { value: 1 }]);
        code.push(0x0000_0100);
        code.push(Instruction::LoadConst { value: 2 }.encode());

        let err = vm.run(&code).unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::UnknownOpcode { index: 1, opcode: 0x00, word: 0x0000_0100 }
        ));
        // Nothing after the bad word ran
        assert_eq!(vm.accumulator(), &BigUint::from(1u32));
        assert_eq!(vm.state().steps, 1);
    }

    #[test]
    fn test_run_bytes_truncated_runs_nothing() {
        let mut vm = VM::default();
        let mut bytes =
            Program::from_instructions(&[Instruction::LoadConst { value: 9 }]).to_bytes();
        bytes.push(0x42);

        let err = vm.run_bytes(&bytes).unwrap_err();
        assert!(matches!(err, RuntimeError::TruncatedStream { len: 5, trailing: 1 }));
        assert!(vm.accumulator().is_zero());
        assert_eq!(vm.state().steps, 0);
    }

    #[test]
    fn test_run_reader() {
        let bytes = Program::from_instructions(&[
            Instruction::LoadConst { value: 7 },
            Instruction::ReadMem { offset: 0 },
        ])
        .to_bytes();
        let mut vm = VM::default();
        let result = vm.run_reader(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(result.steps, 2);
        assert!(result.accumulator.is_zero());
    }

    #[test]
    fn test_small_memory_wraps() {
        let config = MachineConfig::new(4, None).unwrap();
        let mut vm = VM::new(config).unwrap();
        vm.run(&words(&[
            Instruction::LoadConst { value: 6 },
            Instruction::WriteMem { address: 9 },
        ]))
        .unwrap();
        // 9 % 4 == 1
        assert_eq!(vm.memory_slice(0, 4)[1], BigUint::from(6u32));
    }

    #[test]
    fn test_pow_limit_from_config() {
        let config = MachineConfig::new(1024, Some(16)).unwrap();
        let mut vm = VM::new(config).unwrap();
        let err = vm
            .run(&words(&[
                Instruction::LoadConst { value: 20 },
                Instruction::WriteMem { address: 0 },
                Instruction::Pow { address: 0 },
            ]))
            .unwrap_err();
        assert!(matches!(err, RuntimeError::PowLimitExceeded { index: 2, limit: 16, .. }));
    }
}
