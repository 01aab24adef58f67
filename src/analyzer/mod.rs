//! Semantic analysis of parsed programs.
//!
//! The analyzer runs after a successful parse and reports every problem it
//! can find instead of stopping at the first one:
//!
//! - The program must start with `Spawn`
//! - Labels are collected up front, duplicates and unknown jump targets are reported
//! - Instruction and function arguments are checked for count, type and range
//! - Variables must be assigned before they are read

pub mod analyzer;
pub mod rules;

#[cfg(test)]
mod tests;
