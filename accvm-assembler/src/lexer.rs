//! # Lexer for ACCVM Assembly Language

use logos::Logos;

/// Tokens for ACCVM assembly
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"\s+")] // Skip whitespace, including Unicode spaces and newlines
#[logos(skip r"#[^\n]*")] // Skip comments
pub enum Token {
    /// Identifier (instruction mnemonics)
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// Unsigned decimal literal, kept as text so range errors can quote it
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
}
