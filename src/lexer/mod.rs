//! Lexical analysis for `.pw` sources.
//!
//! The lexer works one line at a time and turns each line into tokens
//! using an ordered table of anchored regex patterns. It handles:
//!
//! - Instruction and function keywords, identifiers and boolean literals
//! - Integer and quoted string literals
//! - Operators, grouping symbols and the `<-` assignment arrow
//! - Invalid lexemes and unterminated strings, reported as diagnostics

pub mod lexer;
pub mod tokens;
