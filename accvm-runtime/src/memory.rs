//! Memory subsystem
//!
//! A fixed number of unbounded unsigned cells. Every address is reduced
//! modulo the memory size, so no access can fall outside the array.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    cells: Vec<BigUint>,
}

impl Memory {
    /// Zero-initialized memory. `size` must be non-zero.
    pub fn new(size: usize) -> Self {
        Memory {
            cells: vec![BigUint::zero(); size],
        }
    }

    /// Number of cells
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Reduce a small address into range
    #[inline]
    pub fn wrap(&self, address: u64) -> usize {
        (address % self.cells.len() as u64) as usize
    }

    /// Reduce an arbitrarily large address into range
    pub fn wrap_big(&self, address: &BigUint) -> usize {
        let reduced = address % BigUint::from(self.cells.len());
        // The remainder is below `cells.len()`, which is a usize
        reduced.to_usize().unwrap_or(0)
    }

    /// Read the cell at `address` (wrapped)
    pub fn load(&self, address: u64) -> &BigUint {
        &self.cells[self.wrap(address)]
    }

    /// Write the cell at `address` (wrapped)
    pub fn store(&mut self, address: u64, value: BigUint) {
        let index = self.wrap(address);
        self.cells[index] = value;
    }

    /// Contiguous range `[start, end)` with Python slice semantics.
    ///
    /// Negative bounds count back from the end. Both bounds are then clamped
    /// to `[0, size]`, and `start` to `end`.
    pub fn slice(&self, start: i64, end: i64) -> &[BigUint] {
        let end = self.resolve_bound(end);
        let start = self.resolve_bound(start).min(end);
        &self.cells[start..end]
    }

    fn resolve_bound(&self, bound: i64) -> usize {
        let len = self.cells.len();
        if bound < 0 {
            let back = usize::try_from(bound.unsigned_abs()).unwrap_or(usize::MAX);
            len.saturating_sub(back)
        } else {
            usize::try_from(bound).map_or(len, |b| b.min(len))
        }
    }

    /// All cells
    pub fn cells(&self) -> &[BigUint] {
        &self.cells
    }

    /// Count of non-zero cells
    pub fn used_cells(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_zero()).count()
    }
}
