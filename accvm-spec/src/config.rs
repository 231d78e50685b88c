//! # Machine Configuration
//!
//! Sizing and safety limits for a machine instance. The reference machine
//! has 1024 memory cells and no limit on POW results.

use std::fmt;

use crate::DEFAULT_MEMORY_SIZE;

/// Machine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MachineConfig {
    /// Number of memory cells; every address is reduced modulo this
    pub memory_size: usize,
    /// Maximum bit length of a POW result (`None` = unbounded)
    pub max_pow_bits: Option<u64>,
}

impl MachineConfig {
    /// Reference configuration: 1024 cells, unbounded POW
    pub const DEFAULT: Self = Self {
        memory_size: DEFAULT_MEMORY_SIZE,
        max_pow_bits: None,
    };

    /// Create a new configuration with validation
    pub const fn new(memory_size: usize, max_pow_bits: Option<u64>) -> Result<Self, ConfigError> {
        let config = Self {
            memory_size,
            max_pow_bits,
        };
        match config.validate() {
            Ok(()) => Ok(config),
            Err(e) => Err(e),
        }
    }

    /// Same configuration with a different memory size
    pub const fn with_memory_size(self, memory_size: usize) -> Result<Self, ConfigError> {
        Self::new(memory_size, self.max_pow_bits)
    }

    /// Same configuration with a POW result limit
    pub const fn with_max_pow_bits(self, max_pow_bits: Option<u64>) -> Result<Self, ConfigError> {
        Self::new(self.memory_size, max_pow_bits)
    }

    /// Validate configuration parameters
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.memory_size == 0 {
            return Err(ConfigError::ZeroMemory);
        }
        if let Some(0) = self.max_pow_bits {
            return Err(ConfigError::ZeroPowLimit);
        }
        Ok(())
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for MachineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max_pow_bits {
            Some(bits) => write!(f, "{} cells, POW limit {} bits", self.memory_size, bits),
            None => write!(f, "{} cells, unbounded POW", self.memory_size),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Memory must have at least one cell
    ZeroMemory,
    /// A POW limit of zero bits would reject every result
    ZeroPowLimit,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroMemory => write!(f, "memory_size must be at least 1"),
            ConfigError::ZeroPowLimit => write!(f, "max_pow_bits must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}
