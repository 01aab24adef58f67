//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! Statements are dispatched through a lookup table keyed by their leading
//! token, and expressions are parsed by recursive descent with one function
//! per precedence level. Operator precedence lives in a binding power table
//! so every level asks the same question: does the current token belong to
//! me?

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span, MK_TOKEN,
};

use super::{
    lookups::{create_token_lookups, BPLookup, BindingPower, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The list of tokens to parse, always ending with EOF
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for operator binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// For each token index, whether a `(` there opens a boolean group
    boolean_groups: Vec<bool>,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// A missing trailing EOF token is added so the cursor can never run off
    /// the end of the stream.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map_or(Position::new(1, 1), |token| token.span.end);
            tokens.push(MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span { start: end, end }
            ));
        }

        let boolean_groups = scan_boolean_groups(&tokens);

        Parser {
            tokens,
            pos: 0,
            stmt_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            boolean_groups,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.look_ahead(0)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the token `n` places ahead, or EOF past the end.
    pub fn look_ahead(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + n).min(last)]
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos.min(self.tokens.len() - 1);
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        if self.current_token_kind() == expected_kind {
            return Ok(self.advance().clone());
        }

        let token = self.current_token();
        match error {
            Some(error) => Err(error),
            None => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind.describe(),
                    found: token.value.clone(),
                },
                token.span.start,
            )),
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more statements to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Binding power of the current token, `Default` for non-operators.
    pub fn current_binding_power(&self) -> BindingPower {
        *self
            .binding_power_lookup
            .get(&self.current_token_kind())
            .unwrap_or(&BindingPower::Default)
    }

    /// Registers an operator at a precedence level.
    pub fn operator(&mut self, kind: TokenKind, binding_power: BindingPower) {
        self.binding_power_lookup.insert(kind, binding_power);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the current position in the source file.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start
    }

    /// Whether the `(` at the cursor opens a boolean group.
    pub fn is_boolean_group(&self) -> bool {
        self.boolean_groups.get(self.pos).copied().unwrap_or(false)
    }

    /// Whether the `(` at the cursor, after any further `(`, wraps a string.
    pub fn is_string_group(&self) -> bool {
        self.tokens[self.pos..]
            .iter()
            .find(|token| token.kind != TokenKind::OpenParen)
            .is_some_and(|token| token.kind == TokenKind::String)
    }
}

/// Marks every `(` whose group holds a comparison, a logical operator or a
/// boolean literal, in one pass over the tokens.
///
/// A marker counts for its innermost group and every enclosing group up to
/// the nearest function call, whose argument list hides it from the groups
/// around the call.
fn scan_boolean_groups(tokens: &[Token]) -> Vec<bool> {
    let mut groups = vec![false; tokens.len()];
    // (index of the `(`, whether it opens call arguments)
    let mut open: Vec<(usize, bool)> = vec![];

    for (index, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::OpenParen => {
                let call = index > 0 && tokens[index - 1].kind == TokenKind::Function;
                open.push((index, call));
            }
            TokenKind::CloseParen => {
                if let Some((start, call)) = open.pop() {
                    if groups[start] && !call {
                        if let Some((parent, _)) = open.last() {
                            groups[*parent] = true;
                        }
                    }
                }
            }
            TokenKind::Bool | TokenKind::And | TokenKind::Or => {
                if let Some((start, _)) = open.last() {
                    groups[*start] = true;
                }
            }
            kind if kind.is_comparison() => {
                if let Some((start, _)) = open.last() {
                    groups[*start] = true;
                }
            }
            _ => {}
        }
    }

    groups
}

/// Parses a stream of tokens into a Program.
///
/// Parsing stops at the first syntax error, which is returned as is. There is
/// no recovery.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let position = parser.get_position();
    let mut body = vec![];

    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
    }

    tracing::debug!("Parsed {} top level statements", body.len());

    Ok(Program { body, position })
}
