//! Integration tests for the whole front end.
//!
//! These tests run source text through tokenizing, parsing and semantic
//! analysis, and check the canonical printer against the parser.

use pixelwall::{
    analyzer::analyzer::analyze,
    ast::ast::Stmt,
    check_source,
    errors::errors::{format_diagnostics, Phase},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

const SPIRAL: &str = r#"Spawn(10, 10)
Color("Blue")
Size(3)
n <- 1
step
DrawLine(1, 0, n)
DrawLine(0, 1, n)
n <- n + 1
Color("Red")
DrawCircle(-1, 1, n * 2)
GoTo[step](n <= 20 && GetActualX() < GetCanvasSize() - 5)
done
Fill()
"#;

#[test]
fn test_check_valid_program() {
    let (program, warnings) = check_source(SPIRAL, 256).unwrap();

    assert!(warnings.is_empty());
    assert_eq!(program.body.len(), 6);
    match &program.body[4] {
        Stmt::Label(label) => {
            assert_eq!(label.name, "step");
            assert_eq!(label.body.len(), 6);
        }
        other => panic!("expected a label, found {:?}", other),
    }
}

#[test]
fn test_check_reports_lexical_errors_only() {
    let errors = check_source("Spawn(0, 0)\nx <- 3 $ 4\nColor(\"Red", 256).unwrap_err();

    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|error| error.get_phase() == Phase::Lexical));
}

#[test]
fn test_check_reports_single_syntax_error() {
    let errors = check_source("Spawn(0, 0)\nDrawLine(1, 0 5)\nFill(", 256).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_phase(), Phase::Syntax);
    assert_eq!(errors[0].get_position().line, 2);
}

#[test]
fn test_check_accumulates_semantic_errors() {
    let source = "Spawn(0, 0)\nColor(\"Pink\")\nDrawLine(2, 0, 5)\nGoTo[\"missing\"](true)";
    let errors = check_source(source, 256).unwrap_err();

    assert_eq!(errors.len(), 3);
    assert!(errors.iter().all(|error| error.get_phase() == Phase::Semantic));

    let report = format_diagnostics(&errors);
    assert_eq!(report.lines().count(), 3);
    assert!(report.contains("line 2, column 7"));
    assert!(report.contains("line 3, column 10"));
    assert!(report.contains("'missing'"));
}

#[test]
fn test_check_requires_spawn_first() {
    let errors = check_source("Color(\"Red\")\nSpawn(0, 0)", 256).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "MissingSpawn");
}

#[test]
fn test_spawn_bounds_follow_canvas_size() {
    let (_, warnings) = check_source("Spawn(100, 0)", 256).unwrap();
    assert!(warnings.is_empty());

    let (_, warnings) = check_source("Spawn(100, 0)", 64).unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].get_error_name(), "SpawnOutOfBounds");
}

#[test]
fn test_print_round_trip() {
    let (tokens, _) = tokenize(SPIRAL);
    let program = parse(tokens).unwrap();
    let printed = program.to_string();

    let (tokens, errors) = tokenize(&printed);
    assert!(errors.is_empty());
    let reparsed = parse(tokens).unwrap();

    assert_eq!(reparsed.to_string(), printed);
    assert_eq!(printed.lines().count(), SPIRAL.trim_end().lines().count());
}

#[test]
fn test_print_canonical_spacing() {
    let (tokens, _) = tokenize("Spawn(0,0)\nn<-(1+2)*-3**2\nb<-(n==1)||false\nGoTo[\"a b\"](b)");
    let program = parse(tokens).unwrap();

    assert_eq!(
        program.to_string(),
        "Spawn(0, 0)\nn <- (1 + 2) * -3 ** 2\nb <- (n == 1) || false\nGoTo[\"a b\"](b)"
    );
}

#[test]
fn test_analysis_is_idempotent() {
    let (tokens, _) = tokenize("Spawn(0, 0)\nSize(x)\nloop\nloop\nDrawLine(0, 0, -1)");
    let program = parse(tokens).unwrap();

    let first = analyze(&program, 256);
    let second = analyze(&program, 256);

    assert!(!first.0);
    assert_eq!(first, second);
}

#[test]
fn test_accented_identifiers_and_hyphens() {
    let source = "Spawn(0, 0)\ntamaño <- 5\nSize(tamaño)\nfin-1\nGoTo[fin-1](tamaño > 10)";
    let (program, _) = check_source(source, 256).unwrap();

    assert_eq!(program.body.len(), 4);
}
