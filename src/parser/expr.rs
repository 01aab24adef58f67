use crate::{
    ast::{
        ast::Expr,
        expressions::{
            ArithmeticExpr, BinaryExpr, BoolExpr, BooleanExpr, CallExpr, ComparisonExpr,
            GroupingExpr, LogicalExpr, NumberExpr, PowerExpr, PrefixExpr, StringExpr, SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

type ArithmeticLevel = fn(&mut Parser) -> Result<ArithmeticExpr, Error>;
type BooleanLevel = fn(&mut Parser) -> Result<Expr, Error>;

/// Strips the surrounding quotes from a string lexeme.
pub fn unquote(lexeme: &str) -> String {
    lexeme
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(lexeme)
        .to_string()
}

/// Any expression: a string literal, a parenthesized string expression, or
/// the boolean descent which hands back a bare arithmetic operand when no
/// logical or comparison operator follows.
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::String => Ok(Expr::String(parse_string_expr(parser)?)),
        TokenKind::OpenParen if parser.is_string_group() => {
            let open = parser.expect(TokenKind::OpenParen)?;
            let inner = parse_expr(parser)?;
            parser.expect(TokenKind::CloseParen)?;

            Ok(Expr::Grouping(GroupingExpr {
                expr: Box::new(inner),
                position: open.span.start,
            }))
        }
        _ => parse_boolean_expr(parser),
    }
}

pub fn parse_string_expr(parser: &mut Parser) -> Result<StringExpr, Error> {
    let token = parser.expect(TokenKind::String)?;

    Ok(StringExpr {
        value: unquote(&token.value),
        position: token.span.start,
    })
}

/// `(Expression (',' Expression)*)?`, stopping before the closing `)`.
pub fn parse_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    let mut arguments = vec![];

    if parser.current_token_kind() == TokenKind::CloseParen {
        return Ok(arguments);
    }

    loop {
        arguments.push(parse_expr(parser)?);

        if parser.current_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();
    }

    Ok(arguments)
}

pub fn parse_call_expr(parser: &mut Parser) -> Result<CallExpr, Error> {
    let name = parser.expect(TokenKind::Function)?;
    parser.expect(TokenKind::OpenParen)?;
    let arguments = parse_arguments(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(CallExpr {
        name: name.value,
        arguments,
        position: name.span.start,
    })
}

// BOOLEAN

pub fn parse_boolean_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_or_expr(parser)
}

fn parse_logical_level(
    parser: &mut Parser,
    binding_power: BindingPower,
    next: BooleanLevel,
    build: fn(LogicalExpr) -> BooleanExpr,
) -> Result<Expr, Error> {
    let mut left = next(parser)?;

    while parser.current_binding_power() == binding_power {
        parser.advance();
        let right = next(parser)?;

        left = Expr::Boolean(build(LogicalExpr {
            position: left.get_position(),
            left: Box::new(left),
            right: Box::new(right),
        }));
    }

    Ok(left)
}

fn parse_or_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_logical_level(parser, BindingPower::LogicalOr, parse_and_expr, BooleanExpr::Or)
}

fn parse_and_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_logical_level(
        parser,
        BindingPower::LogicalAnd,
        parse_comparison_expr,
        BooleanExpr::And,
    )
}

/// One optional comparison. `a < b < c` is not accepted.
fn parse_comparison_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let left = parse_comparison_operand(parser)?;

    if parser.current_binding_power() != BindingPower::Relational {
        return Ok(left);
    }

    let operator = parser.advance().kind;
    let right = parse_comparison_operand(parser)?;

    Ok(Expr::Boolean(BooleanExpr::Comparison(ComparisonExpr {
        position: left.get_position(),
        left: Box::new(left),
        operator,
        right: Box::new(right),
    })))
}

fn parse_comparison_operand(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Bool => {
            let token = parser.advance();
            Ok(Expr::Boolean(BooleanExpr::Literal(BoolExpr {
                value: token.value == "true",
                position: token.span.start,
            })))
        }
        TokenKind::OpenParen if parser.is_boolean_group() => {
            let open = parser.expect(TokenKind::OpenParen)?;
            let inner = parse_boolean_expr(parser)?;
            parser.expect(TokenKind::CloseParen)?;

            Ok(Expr::Boolean(BooleanExpr::Grouping(GroupingExpr {
                expr: Box::new(inner),
                position: open.span.start,
            })))
        }
        _ => Ok(Expr::Arithmetic(parse_arithmetic_expr(parser)?)),
    }
}

// ARITHMETIC

pub fn parse_arithmetic_expr(parser: &mut Parser) -> Result<ArithmeticExpr, Error> {
    parse_additive_expr(parser)
}

/// Left associative: `a - b - c` is `(a - b) - c`.
fn parse_binary_level(
    parser: &mut Parser,
    binding_power: BindingPower,
    next: ArithmeticLevel,
    build: fn(BinaryExpr) -> ArithmeticExpr,
) -> Result<ArithmeticExpr, Error> {
    let mut left = next(parser)?;

    while parser.current_binding_power() == binding_power {
        let operator = parser.advance().kind;
        let right = next(parser)?;

        left = build(BinaryExpr {
            position: left.get_position(),
            left: Box::new(left),
            operator,
            right: Box::new(right),
        });
    }

    Ok(left)
}

fn parse_additive_expr(parser: &mut Parser) -> Result<ArithmeticExpr, Error> {
    parse_binary_level(
        parser,
        BindingPower::Additive,
        parse_multiplicative_expr,
        ArithmeticExpr::Additive,
    )
}

fn parse_multiplicative_expr(parser: &mut Parser) -> Result<ArithmeticExpr, Error> {
    parse_binary_level(
        parser,
        BindingPower::Multiplicative,
        parse_power_expr,
        ArithmeticExpr::Multiplicative,
    )
}

/// Right associative: `a ** b ** c` is `a ** (b ** c)`.
fn parse_power_expr(parser: &mut Parser) -> Result<ArithmeticExpr, Error> {
    let base = parse_prefix_expr(parser)?;

    if parser.current_binding_power() != BindingPower::Power {
        return Ok(base);
    }

    parser.advance();
    let exponent = parse_power_expr(parser)?;

    Ok(ArithmeticExpr::Power(PowerExpr {
        position: base.get_position(),
        base: Box::new(base),
        exponent: Box::new(exponent),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<ArithmeticExpr, Error> {
    let position = parser.get_position();
    let mut signs = 0;

    while parser.current_token_kind() == TokenKind::Dash {
        parser.advance();
        signs += 1;
    }

    let right_expr = parse_primary_expr(parser)?;
    if signs == 0 {
        return Ok(right_expr);
    }

    Ok(ArithmeticExpr::Prefix(PrefixExpr {
        negated: signs % 2 == 1,
        right_expr: Box::new(right_expr),
        position,
    }))
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<ArithmeticExpr, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Number => {
            let value = token.value.parse::<i64>().map_err(|_| {
                Error::new(
                    ErrorImpl::NumberParseError {
                        token: token.value.clone(),
                    },
                    token.span.start,
                )
            })?;
            parser.advance();

            Ok(ArithmeticExpr::Number(NumberExpr {
                value,
                position: token.span.start,
            }))
        }
        TokenKind::Identifier => {
            parser.advance();
            Ok(ArithmeticExpr::Symbol(SymbolExpr {
                value: token.value,
                position: token.span.start,
            }))
        }
        TokenKind::Function => Ok(ArithmeticExpr::Call(parse_call_expr(parser)?)),
        TokenKind::OpenParen => {
            parser.advance();
            let inner = parse_arithmetic_expr(parser)?;
            parser.expect(TokenKind::CloseParen)?;

            Ok(ArithmeticExpr::Grouping(GroupingExpr {
                expr: Box::new(inner),
                position: token.span.start,
            }))
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedExpression { found: token.value },
            token.span.start,
        )),
    }
}
