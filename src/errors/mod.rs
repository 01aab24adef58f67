//! Diagnostics shared by every stage of the front end.
//!
//! This module defines the single record type used for lexical, syntax and
//! semantic problems. It includes:
//!
//! - `Error`, a diagnostic with its source position and severity
//! - `ErrorImpl`, the specific variants and their messages
//! - Tips attached to each variant for the command line renderer

pub mod errors;
