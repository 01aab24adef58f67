#![allow(clippy::module_inception)]

use std::fmt::{Display, Write};

use crate::{
    analyzer::analyzer::analyze,
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod analyzer;
pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Line and column of a character in the source, both starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Runs the whole front end over `source`.
///
/// Stages run in order and the first one that reports errors stops the
/// pipeline: lexical errors are returned before parsing is attempted, and a
/// syntax error is returned before analysis. On success the validated program
/// is returned together with any warnings the analyzer produced.
pub fn check_source(source: &str, canvas_size: i64) -> Result<(Program, Vec<Error>), Vec<Error>> {
    let (tokens, lex_errors) = tokenize(source);
    if !lex_errors.is_empty() {
        return Err(lex_errors);
    }

    let program = parse(tokens).map_err(|error| vec![error])?;

    let (ok, diagnostics) = analyze(&program, canvas_size);
    if !ok {
        return Err(diagnostics);
    }

    Ok((program, diagnostics))
}

/// Returns the text of the 1-based `line` of `source`, without its newline.
pub fn get_line_at_position(source: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .lines()
        .nth(line - 1)
        .map(|text| text.trim_end_matches('\r'))
}

/// Renders a diagnostic with the offending source line underneath.
///
/// ```text
/// Error: UndefinedLabel (label 'loop' is not declared)
/// -> demo.pw:4:6
///   |
/// 4 | GoTo[loop](true)
///   | -----^
///   = declare a line with the label `loop`
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let mut out = String::new();
    let position = error.get_position();

    let _ = writeln!(
        out,
        "{}: {} ({})",
        error.get_severity().title(),
        error.get_error_name(),
        error.get_message()
    );
    let _ = writeln!(out, "-> {}:{}:{}", file, position.line, position.column);

    if let Some(line_text) = get_line_at_position(source, position.line) {
        let line_string = position.line.to_string();
        let padding = line_string.len() + 2;

        let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
        let arrows = position.column.saturating_sub(removed_whitespace).max(1);

        let _ = writeln!(out, "{:>padding$}", "|");
        let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());
        let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");

        if let ErrorTip::Suggestion(tip) = error.get_tip() {
            let _ = writeln!(out, "{:>padding$} {}", "=", tip);
        }
    } else if let ErrorTip::Suggestion(tip) = error.get_tip() {
        let _ = writeln!(out, "= {}", tip);
    }

    out
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    eprint!("{}", render_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (trimmed, string.chars().count() - trimmed.chars().count())
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "Spawn(0, 0)\nColor(\"Red\")\r\n  Fill()";

        assert_eq!(super::get_line_at_position(source, 1), Some("Spawn(0, 0)"));
        assert_eq!(super::get_line_at_position(source, 2), Some("Color(\"Red\")"));
        assert_eq!(super::get_line_at_position(source, 3), Some("  Fill()"));
        assert_eq!(super::get_line_at_position(source, 4), None);
        assert_eq!(super::get_line_at_position(source, 0), None);
    }

    #[test]
    fn test_render_error_points_at_column() {
        let source = "Spawn(0, 0)\n  GoTo[loop](true)";
        let error = Error::new(
            ErrorImpl::UndefinedLabel {
                label: "loop".to_string(),
            },
            Position::new(2, 8),
        );

        let rendered = super::render_error(&error, source, "demo.pw");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UndefinedLabel (label 'loop' is not declared)");
        assert_eq!(lines[1], "-> demo.pw:2:8");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | GoTo[loop](true)");
        assert_eq!(lines[4], "  | -----^");
        assert!(lines[5].starts_with("  = "));
    }

    #[test]
    fn test_render_error_without_source_line() {
        let error = Error::new(ErrorImpl::MissingSpawn, Position::new(9, 1));
        let rendered = super::render_error(&error, "", "empty.pw");

        assert!(rendered.starts_with("Error: MissingSpawn"));
        assert!(rendered.contains("-> empty.pw:9:1"));
        assert!(!rendered.contains('^'));
    }

    #[test]
    fn test_check_source_stops_at_lexer() {
        let result = super::check_source("Spawn(0, 0)\nColor(\"Red", 256);
        let errors = result.err().unwrap();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].get_error_name(), "UnterminatedString");
    }

    #[test]
    fn test_check_source_returns_warnings_on_success() {
        let (program, warnings) = super::check_source("Spawn(300, 0)", 256).unwrap();

        assert_eq!(program.body.len(), 1);
        assert_eq!(warnings.len(), 1);
        assert!(!warnings[0].is_error());
    }
}
