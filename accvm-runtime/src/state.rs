//! VM state for ACCVM

use num_bigint::BigUint;
use num_traits::Zero;

use crate::memory::Memory;

/// VM state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VMState {
    /// Accumulator (unbounded)
    pub accumulator: BigUint,

    /// Memory
    pub memory: Memory,

    /// Instructions dispatched so far; also the index of the next word
    pub steps: usize,
}

impl VMState {
    pub fn new(memory_size: usize) -> Self {
        VMState {
            accumulator: BigUint::zero(),
            memory: Memory::new(memory_size),
            steps: 0,
        }
    }
}
