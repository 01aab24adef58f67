//! Unit tests for the semantic analyzer.

use crate::{
    ast::ast::Program,
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::parser::parse,
};

use super::analyzer::analyze;

fn program(source: &str) -> Program {
    let (tokens, errors) = tokenize(source);
    assert!(errors.is_empty(), "unexpected lexical errors: {:?}", errors);
    parse(tokens).unwrap()
}

fn check(source: &str) -> (bool, Vec<Error>) {
    analyze(&program(source), 256)
}

fn names(diagnostics: &[Error]) -> Vec<&str> {
    diagnostics.iter().map(|error| error.get_error_name()).collect()
}

#[test]
fn test_analyze_valid_program() {
    let (ok, diagnostics) = check("Spawn(0,0)\nColor(\"Red\")\nFill()");

    assert!(ok);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_analyze_missing_spawn_is_single_diagnostic() {
    let (ok, diagnostics) = check("Color(\"Red\")\nDrawLine(5, 5, 0)\nGoTo[nowhere](x)");

    assert!(!ok);
    assert_eq!(names(&diagnostics), vec!["MissingSpawn"]);
    assert_eq!(diagnostics[0].get_position().line, 1);
}

#[test]
fn test_analyze_empty_program() {
    let (ok, diagnostics) = check("");

    assert!(!ok);
    assert_eq!(names(&diagnostics), vec!["MissingSpawn"]);
}

#[test]
fn test_analyze_misplaced_spawn() {
    let (ok, diagnostics) = check("Spawn(0, 0)\nSpawn(1, 1)");

    assert!(!ok);
    assert_eq!(names(&diagnostics), vec!["MisplacedSpawn"]);
    assert_eq!(diagnostics[0].get_position().line, 2);
}

#[test]
fn test_analyze_spawn_arity() {
    let (ok, diagnostics) = check("Spawn(0)");

    assert!(!ok);
    assert_eq!(names(&diagnostics), vec!["ArgumentCountMismatch"]);
}

#[test]
fn test_analyze_undefined_label() {
    let (ok, diagnostics) = check("Spawn(0, 0)\nGoTo[\"missing\"](true)");

    assert!(!ok);
    assert_eq!(names(&diagnostics), vec!["UndefinedLabel"]);
    assert!(diagnostics[0].get_message().contains("missing"));
}

#[test]
fn test_analyze_defined_label() {
    let (ok, diagnostics) = check("Spawn(0, 0)\nhere\nFill()\nGoTo[\"here\"](1 == 1)");

    assert!(ok);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_analyze_forward_jump() {
    let (ok, _) = check("Spawn(0, 0)\nGoTo[end](true)\nFill()\nend");
    assert!(ok);
}

#[test]
fn test_analyze_goto_condition_must_be_boolean() {
    let (ok, diagnostics) = check("Spawn(0, 0)\nend\nGoTo[end](1)");

    assert!(!ok);
    assert_eq!(names(&diagnostics), vec!["TypeMatchError"]);
}

#[test]
fn test_analyze_goto_checks_condition_when_label_missing() {
    let (_, diagnostics) = check("Spawn(0, 0)\nGoTo[gone](n > 1)");

    assert_eq!(names(&diagnostics), vec!["UndefinedLabel", "UndefinedVariable"]);
}

#[test]
fn test_analyze_duplicate_label() {
    let (ok, diagnostics) = check("Spawn(0, 0)\nloop\nFill()\nloop\nFill()");

    assert!(!ok);
    assert_eq!(names(&diagnostics), vec!["DuplicateLabel"]);
    assert_eq!(diagnostics[0].get_position().line, 4);
    assert!(diagnostics[0].get_message().contains("line 2"));
}

#[test]
fn test_analyze_drawline_direction() {
    let (ok, diagnostics) = check("Spawn(0, 0)\nDrawLine(2, 0, 5)");
    assert!(!ok);
    assert_eq!(names(&diagnostics), vec!["InvalidDirection"]);

    let (ok, diagnostics) = check("Spawn(0, 0)\nDrawLine(1, 0, 5)");
    assert!(ok);
    assert!(diagnostics.is_empty());

    let (ok, diagnostics) = check("Spawn(0, 0)\nDrawLine(-1, -1, 5)");
    assert!(ok);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_analyze_zero_direction() {
    let (ok, diagnostics) = check("Spawn(0, 0)\nDrawCircle(0, 0, 3)");

    assert!(!ok);
    assert_eq!(names(&diagnostics), vec!["ZeroDirection"]);
}

#[test]
fn test_analyze_variable_direction_not_evaluated() {
    let (ok, diagnostics) = check("Spawn(0, 0)\nd <- 7\nDrawLine(d, 0, d)");

    assert!(ok);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_analyze_positive_arguments() {
    let (ok, diagnostics) = check("Spawn(0, 0)\nDrawRectangle(1, 1, 0, -2, (3))\nSize(-3)");

    assert!(!ok);
    assert_eq!(
        names(&diagnostics),
        vec!["NonPositiveArgument", "NonPositiveArgument", "NonPositiveArgument"]
    );
    assert!(diagnostics[1].get_message().contains("width"));
    assert!(diagnostics[2].get_message().contains("size"));
}

#[test]
fn test_analyze_double_negation_is_positive() {
    let (ok, _) = check("Spawn(0, 0)\nSize(--3)");
    assert!(ok);
}

#[test]
fn test_analyze_colors() {
    let (ok, diagnostics) = check("Spawn(0, 0)\nColor(\"Pink\")\nColor(\"red\")\nColor(\"Transparent\")");

    assert!(!ok);
    assert_eq!(names(&diagnostics), vec!["InvalidColor", "InvalidColor"]);
}

#[test]
fn test_analyze_color_needs_literal() {
    let (ok, diagnostics) = check("Spawn(0, 0)\nc <- 1\nColor(c)");

    assert!(!ok);
    assert_eq!(names(&diagnostics), vec!["ExpectedColorLiteral"]);
}

#[test]
fn test_analyze_fill_takes_no_arguments() {
    let (ok, diagnostics) = check("Spawn(0, 0)\nFill(1)");

    assert!(!ok);
    assert_eq!(names(&diagnostics), vec!["ArgumentCountMismatch"]);
}

#[test]
fn test_analyze_undefined_variable() {
    let (ok, diagnostics) = check("Spawn(0, 0)\nSize(n + 1)");

    assert!(!ok);
    assert_eq!(names(&diagnostics), vec!["UndefinedVariable"]);
    assert_eq!(diagnostics[0].get_position().column, 6);
}

#[test]
fn test_analyze_last_assignment_wins() {
    let (ok, diagnostics) = check("Spawn(0, 0)\nn <- true\nn <- 2\nSize(n)");
    assert!(ok, "{:?}", diagnostics);

    let (ok, diagnostics) = check("Spawn(0, 0)\nn <- 2\nn <- 1 == 1\nSize(n)");
    assert!(!ok);
    assert_eq!(names(&diagnostics), vec!["TypeMatchError"]);
}

#[test]
fn test_analyze_arithmetic_operands_must_be_numeric() {
    let (ok, diagnostics) = check("Spawn(0, 0)\ns <- \"Red\"\nn <- s * 2");

    assert!(!ok);
    assert_eq!(names(&diagnostics), vec!["TypeMatchError"]);
}

#[test]
fn test_analyze_boolean_variable_as_condition() {
    let (ok, diagnostics) = check("Spawn(0, 0)\nloop\nflag <- GetActualX() < 10\nGoTo[loop](flag)");

    assert!(ok, "{:?}", diagnostics);
}

#[test]
fn test_analyze_label_body_validated_inline() {
    let (ok, diagnostics) = check("Spawn(0, 0)\nloop\nColor(\"Pink\")\nSize(0)");

    assert!(!ok);
    assert_eq!(names(&diagnostics), vec!["InvalidColor", "NonPositiveArgument"]);
}

#[test]
fn test_analyze_functions() {
    let source = "Spawn(0, 0)\n\
                  a <- GetActualX() + GetActualY() + GetCanvasSize()\n\
                  b <- GetColorCount(\"Blue\", 0, 0, a, a)\n\
                  IsBrushColor(\"Black\")\n\
                  IsBrushSize(3)\n\
                  IsCanvasColor(\"White\", 1, 1)";
    let (ok, diagnostics) = check(source);

    assert!(ok, "{:?}", diagnostics);
}

#[test]
fn test_analyze_function_errors() {
    let source = "Spawn(0, 0)\n\
                  GetActualX(1)\n\
                  IsBrushColor(\"Gold\")\n\
                  n <- IsCanvasColor(\"Red\", true, 1)";
    let (ok, diagnostics) = check(source);

    assert!(!ok);
    assert_eq!(
        names(&diagnostics),
        vec!["ArgumentCountMismatch", "InvalidColor", "TypeMatchError"]
    );
}

#[test]
fn test_analyze_spawn_out_of_bounds_is_warning() {
    let (ok, diagnostics) = analyze(&program("Spawn(300, -1)"), 256);

    assert!(ok);
    assert_eq!(names(&diagnostics), vec!["SpawnOutOfBounds", "SpawnOutOfBounds"]);
    assert!(diagnostics.iter().all(|error| !error.is_error()));

    let (ok, diagnostics) = analyze(&program("Spawn(255, 0)"), 256);
    assert!(ok);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_analyze_accumulates() {
    let source = "Spawn(0, 0)\nColor(\"Pink\")\nDrawLine(5, 0, 1)\nSize(x)\nGoTo[nope](true)";
    let (ok, diagnostics) = check(source);

    assert!(!ok);
    assert_eq!(diagnostics.len(), 4);
}

#[test]
fn test_analyze_is_idempotent() {
    let tree = program("Spawn(0, 0)\nColor(\"Pink\")\nn <- m\nGoTo[x](n)");

    let first = analyze(&tree, 128);
    let second = analyze(&tree, 128);

    assert_eq!(first, second);
}

#[test]
fn test_analyze_undefined_condition_reported_once() {
    let (ok, diagnostics) = check("Spawn(0, 0)\nhere\nGoTo[here](flag)");

    assert!(!ok);
    assert_eq!(names(&diagnostics), vec!["UndefinedVariable"]);
    assert_eq!(diagnostics[0].get_position().line, 3);
    assert_eq!(diagnostics[0].get_position().column, 12);

    let (_, diagnostics) = check("Spawn(0, 0)\nSize((n))\nDrawLine(1, 0, -m)");
    assert_eq!(names(&diagnostics), vec!["UndefinedVariable", "UndefinedVariable"]);
}

#[test]
fn test_analyze_parenthesized_color() {
    let (ok, diagnostics) = check("Spawn(0, 0)\nColor((\"Red\"))\nb <- IsBrushColor((\"Blue\"))");
    assert!(ok, "{:?}", diagnostics);

    let (ok, diagnostics) = check("Spawn(0, 0)\nColor((\"Pink\"))");
    assert!(!ok);
    assert_eq!(names(&diagnostics), vec!["InvalidColor"]);
    assert_eq!(diagnostics[0].get_position().column, 8);
}

#[test]
fn test_analyze_parenthesized_string_assignment() {
    let (ok, diagnostics) = check("Spawn(0, 0)\ns <- (\"hi\")\nSize(s)");

    assert!(!ok);
    assert_eq!(names(&diagnostics), vec!["TypeMatchError"]);
}

#[test]
fn test_analyze_canvas_size_extremes() {
    let (ok, diagnostics) = analyze(&program("Spawn(0, 0)"), i64::MIN);

    assert!(ok);
    assert_eq!(names(&diagnostics), vec!["SpawnOutOfBounds", "SpawnOutOfBounds"]);
    for diagnostic in &diagnostics {
        assert!(diagnostic.get_tip().to_string().contains("coordinates range"));
    }
}
