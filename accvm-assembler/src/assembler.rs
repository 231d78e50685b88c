//! Main assembler logic

use accvm_spec::{Instruction, Program};
use tracing::{debug, info};

use crate::encoder::encode;
use crate::error::Result;
use crate::log::LogEntry;
use crate::parser::parse_instruction;

/// Output of a successful assembly pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    /// Encoded words in source order
    pub program: Program,
    /// One trace entry per word, parallel to `program.code`
    pub log: Vec<LogEntry>,
}

impl Assembly {
    /// Binary artifact: little-endian words, no header
    pub fn to_bytes(&self) -> Vec<u8> {
        self.program.to_bytes()
    }

    pub fn len(&self) -> usize {
        self.program.len()
    }

    pub fn is_empty(&self) -> bool {
        self.program.is_empty()
    }
}

/// Assemble one line into its word and trace entry.
///
/// Blank and comment lines produce `Ok(None)`.
pub fn assemble_instruction(line: &str) -> Result<Option<(u32, LogEntry)>> {
    Ok(parse_instruction(line)?.map(|instr: Instruction| (encode(&instr), LogEntry::new(&instr))))
}

/// Assemble source code into a program and its trace.
///
/// Stops at the first bad line; nothing is returned for a partially
/// assembled source.
pub fn assemble(source: &str) -> Result<Assembly> {
    let mut assembly = Assembly::default();

    for (line_num, line) in source.lines().enumerate() {
        let Some((word, entry)) =
            assemble_instruction(line).map_err(|e| e.at_line(line_num + 1, line))?
        else {
            continue;
        };

        debug!(
            line = line_num + 1,
            mnemonic = %entry.mnemonic,
            operand = entry.operand,
            "encoded {:#010x}",
            word
        );

        assembly.program.code.push(word);
        assembly.log.push(entry);
    }

    info!(instructions = assembly.len(), "assembly complete");
    Ok(assembly)
}
