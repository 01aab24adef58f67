use std::collections::HashMap;

use crate::{ast::ast::Stmt, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

/// Precedence levels, lowest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    LogicalOr,
    LogicalAnd,
    Relational,
    Additive,
    Multiplicative,
    Power,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Logical
    parser.operator(TokenKind::Or, BindingPower::LogicalOr);
    parser.operator(TokenKind::And, BindingPower::LogicalAnd);

    // Relational
    parser.operator(TokenKind::Equals, BindingPower::Relational);
    parser.operator(TokenKind::Less, BindingPower::Relational);
    parser.operator(TokenKind::LessEquals, BindingPower::Relational);
    parser.operator(TokenKind::Greater, BindingPower::Relational);
    parser.operator(TokenKind::GreaterEquals, BindingPower::Relational);

    // Additive and multiplicative
    parser.operator(TokenKind::Plus, BindingPower::Additive);
    parser.operator(TokenKind::Dash, BindingPower::Additive);
    parser.operator(TokenKind::Star, BindingPower::Multiplicative);
    parser.operator(TokenKind::Slash, BindingPower::Multiplicative);
    parser.operator(TokenKind::Percent, BindingPower::Multiplicative);
    parser.operator(TokenKind::StarStar, BindingPower::Power);

    // Statements
    parser.stmt(TokenKind::Identifier, parse_identifier_stmt);
    parser.stmt(TokenKind::Instruction, parse_instruction_stmt);
    parser.stmt(TokenKind::Function, parse_function_call_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
