//! Property tests for the lexer, the parser and the canonical printer.

use lazy_static::lazy_static;
use pixelwall::{
    analyzer::analyzer::analyze,
    ast::ast::Program,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
};
use proptest::prelude::*;
use regex::Regex;

lazy_static! {
    static ref POSITION: Regex = Regex::new(r"Position \{ line: \d+, column: \d+ \}").unwrap();
}

/// The tree in debug form with every position blanked out.
fn shape(program: &Program) -> String {
    POSITION
        .replace_all(&format!("{:?}", program), "Position")
        .into_owned()
}

fn arithmetic() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        prop::sample::select(vec!["x", "y", "paso-2"]).prop_map(String::from),
        Just(String::from("GetActualX()")),
        (0u32..10).prop_map(|n| format!("IsBrushSize({})", n)),
    ];

    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop::sample::select(vec!["+", "-", "*", "/", "%", "**"]),
                inner.clone()
            )
                .prop_map(|(left, op, right)| format!("{} {} {}", left, op, right)),
            inner.clone().prop_map(|expr| format!("-{}", expr)),
            inner.prop_map(|expr| format!("({})", expr)),
        ]
    })
}

fn boolean() -> impl Strategy<Value = String> {
    let comparison = (
        arithmetic(),
        prop::sample::select(vec!["==", ">=", "<=", ">", "<"]),
        arithmetic(),
    )
        .prop_map(|(left, op, right)| format!("{} {} {}", left, op, right));

    let leaf = prop_oneof![
        Just(String::from("true")),
        Just(String::from("false")),
        comparison,
    ];

    leaf.prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            (
                inner.clone(),
                prop::sample::select(vec!["&&", "||"]),
                inner.clone()
            )
                .prop_map(|(left, op, right)| format!("{} {} {}", left, op, right)),
            inner.prop_map(|expr| format!("({})", expr)),
        ]
    })
}

fn statement() -> impl Strategy<Value = String> {
    prop_oneof![
        (prop::sample::select(vec!["x", "y"]), arithmetic())
            .prop_map(|(name, value)| format!("{} <- {}", name, value)),
        boolean().prop_map(|value| format!("flag <- {}", value)),
        (arithmetic(), arithmetic(), arithmetic())
            .prop_map(|(x, y, d)| format!("DrawLine({}, {}, {})", x, y, d)),
        prop::sample::select(vec!["Red", "Blue", "Pink"])
            .prop_map(|color| format!("Color(\"{}\")", color)),
        prop::sample::select(vec!["\"hi\"", "(\"hi\")", "((\"a b\"))"])
            .prop_map(|text| format!("s <- {}", text)),
        Just(String::from("Fill()")),
        (prop::sample::select(vec!["loop", "\"the end\""]), boolean())
            .prop_map(|(label, condition)| format!("GoTo[{}]({})", label, condition)),
        prop::sample::select(vec!["loop", "fin"]).prop_map(String::from),
        arithmetic().prop_map(|expr| format!("IsCanvasColor(\"White\", {}, 0)", expr)),
    ]
}

fn program() -> impl Strategy<Value = String> {
    prop::collection::vec(statement(), 0..12).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn printing_round_trips_the_tree(source in program()) {
        let (tokens, errors) = tokenize(&source);
        prop_assert!(errors.is_empty(), "{:?}", errors);

        let program = parse(tokens).unwrap();
        let printed = program.to_string();

        let (tokens, errors) = tokenize(&printed);
        prop_assert!(errors.is_empty(), "{:?}", errors);
        let reparsed = parse(tokens).unwrap();

        prop_assert_eq!(shape(&reparsed), shape(&program));
        prop_assert_eq!(reparsed.to_string(), printed);
    }

    #[test]
    fn analysis_is_deterministic(source in program()) {
        let (tokens, _) = tokenize(&format!("Spawn(0, 0)\n{}", source));
        let program = parse(tokens).unwrap();

        prop_assert_eq!(analyze(&program, 256), analyze(&program, 256));
    }

    #[test]
    fn tokenize_never_emits_invalid_tokens(source in "\\PC*") {
        let (tokens, _) = tokenize(&source);

        prop_assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));
        prop_assert_eq!(tokens.iter().filter(|token| token.kind == TokenKind::EOF).count(), 1);
        prop_assert!(tokens.iter().all(|token| token.kind != TokenKind::Invalid));
    }

    #[test]
    fn parse_never_panics(source in "[a-zA-Z0-9()\\[\\]<>=&|+*/%,\" \n-]{0,64}") {
        let (tokens, _) = tokenize(&source);
        let _ = parse(tokens);
    }
}
