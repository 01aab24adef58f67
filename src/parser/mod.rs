//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive descent parser that turns a token
//! stream into a `Program`. It handles:
//!
//! - Statement dispatch (assignments, labels, instructions, function calls)
//! - The bespoke `GoTo[label](condition)` form
//! - Arithmetic and boolean expressions with their precedence levels
//!
//! Parsing is fail-fast: the first syntax error aborts the parse.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
