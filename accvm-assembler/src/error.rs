//! Assembler errors

use accvm_spec::Opcode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssemblerError {
    #[error("Unknown instruction: {0}")]
    UnknownMnemonic(String),

    #[error("Malformed operand for {mnemonic}: {message}")]
    MalformedOperand { mnemonic: String, message: String },

    #[error("Operand {operand} out of range for {opcode} (max {max})")]
    OperandOutOfRange {
        opcode: Opcode,
        operand: String,
        max: u32,
    },

    #[error("Line {line} `{text}`")]
    AtLine {
        line: usize,
        text: String,
        source: Box<AssemblerError>,
    },
}

impl AssemblerError {
    /// Attach the 1-based source line that produced this error
    pub fn at_line(self, line: usize, text: &str) -> Self {
        AssemblerError::AtLine {
            line,
            text: text.trim().to_string(),
            source: Box::new(self),
        }
    }

    /// The underlying error, without line context
    pub fn kind(&self) -> &AssemblerError {
        match self {
            AssemblerError::AtLine { source, .. } => source.kind(),
            other => other,
        }
    }

    /// 1-based source line, if known
    pub fn line(&self) -> Option<usize> {
        match self {
            AssemblerError::AtLine { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssemblerError>;
