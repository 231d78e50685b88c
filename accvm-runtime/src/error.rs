//! Runtime error types for ACCVM

use accvm_spec::SpecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Spec error: {0}")]
    SpecError(#[from] SpecError),

    #[error("Unknown opcode {opcode:#04x} in word {word:#010x} at index {index}")]
    UnknownOpcode { index: usize, opcode: u8, word: u32 },

    #[error("Truncated stream: {len} bytes leaves {trailing} trailing bytes after the last word")]
    TruncatedStream { len: usize, trailing: usize },

    #[error("POW at index {index} needs at least {bits} bits (limit {limit})")]
    PowLimitExceeded { index: usize, bits: u64, limit: u64 },

    #[error("POW at index {index}: exponent {exponent} does not fit in 32 bits")]
    PowExponentTooLarge { index: usize, exponent: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_unknown_opcode_display() {
        let err = RuntimeError::UnknownOpcode {
            index: 3,
            opcode: 0x01,
            word: 0x0000_0501,
        };
        assert_eq!(
            err.to_string(),
            "Unknown opcode 0x01 in word 0x00000501 at index 3"
        );
    }

    #[test]
    fn test_truncated_stream_display() {
        let err = RuntimeError::TruncatedStream { len: 7, trailing: 3 };
        assert_eq!(
            err.to_string(),
            "Truncated stream: 7 bytes leaves 3 trailing bytes after the last word"
        );
    }

    #[test]
    fn test_pow_limit_display() {
        let err = RuntimeError::PowLimitExceeded {
            index: 0,
            bits: 129,
            limit: 64,
        };
        assert_eq!(err.to_string(), "POW at index 0 needs at least 129 bits (limit 64)");
    }

    #[test]
    fn test_io_error_from() {
        let io_err = IoError::new(ErrorKind::NotFound, "file not found");
        let runtime_err: RuntimeError = io_err.into();
        assert!(runtime_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_spec_error_from() {
        let spec_err = SpecError::InvalidOpcode(0x99);
        let runtime_err: RuntimeError = spec_err.into();
        assert!(runtime_err.to_string().contains("Invalid opcode: 0x99"));
    }
}
