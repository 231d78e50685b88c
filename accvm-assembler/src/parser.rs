//! Assembly parser
//!
//! A line is either blank, a comment, or `MNEMONIC OPERAND` where the operand
//! is an unsigned base-10 integer.

use accvm_spec::{Instruction, Opcode, SpecError};
use logos::Logos;

use crate::error::{AssemblerError, Result};
use crate::lexer::Token;

/// Parse a single line of assembly.
///
/// Returns `Ok(None)` for blank and comment lines.
pub fn parse_instruction(text: &str) -> Result<Option<Instruction>> {
    let mut lex = Token::lexer(text);

    let mnemonic = match lex.next() {
        None => return Ok(None),
        Some(Ok(Token::Identifier(name))) => name,
        Some(_) => {
            return Err(AssemblerError::UnknownMnemonic(
                word_at(text, lex.span().start).to_string(),
            ))
        }
    };

    let opcode = parse_mnemonic(&mnemonic)?;

    let literal = match lex.next() {
        Some(Ok(Token::Number(digits))) => digits,
        None => return Err(malformed(&mnemonic, "missing operand".to_string())),
        Some(_) => {
            return Err(malformed(
                &mnemonic,
                format!("expected unsigned integer, found `{}`", word_at(text, lex.span().start)),
            ))
        }
    };

    if lex.next().is_some() {
        return Err(malformed(
            &mnemonic,
            format!("unexpected trailing input `{}`", word_at(text, lex.span().start)),
        ));
    }

    parse_operand(opcode, &literal).map(Some)
}

/// Look up a mnemonic in the opcode table
pub fn parse_mnemonic(name: &str) -> Result<Opcode> {
    Opcode::from_mnemonic(name).ok_or_else(|| AssemblerError::UnknownMnemonic(name.to_string()))
}

/// Validate a decimal literal against the opcode's operand width
fn parse_operand(opcode: Opcode, literal: &str) -> Result<Instruction> {
    let out_of_range = || AssemblerError::OperandOutOfRange {
        opcode,
        operand: literal.to_string(),
        max: opcode.max_operand(),
    };

    // The lexer only produces digits, so a parse failure means overflow
    let value = literal.parse::<u64>().map_err(|_| out_of_range())?;

    Instruction::new(opcode, value).map_err(|e| match e {
        SpecError::OperandOutOfRange { .. } => out_of_range(),
        other => malformed(opcode.mnemonic(), other.to_string()),
    })
}

fn malformed(mnemonic: &str, message: String) -> AssemblerError {
    AssemblerError::MalformedOperand {
        mnemonic: mnemonic.to_string(),
        message,
    }
}

/// The whitespace-delimited word starting at byte `start`
fn word_at(text: &str, start: usize) -> &str {
    text.get(start..)
        .and_then(|rest| rest.split_whitespace().next())
        .unwrap_or("")
}
