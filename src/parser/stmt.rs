use crate::{
    ast::{
        ast::{Expr, Program, Stmt},
        expressions::StringExpr,
        statements::{AssignmentStmt, FunctionCallStmt, InstructionStmt, LabelStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_arguments, parse_boolean_expr, parse_call_expr, parse_expr, unquote},
    parser::Parser,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let kind = parser.current_token_kind();

    match parser.get_stmt_lookup().get(&kind).copied() {
        Some(handler) => handler(parser),
        None => Err(Error::new(
            ErrorImpl::UnexpectedStatement {
                found: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

/// An identifier followed by `<-` is an assignment, any other starts a label.
pub fn parse_identifier_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if parser.look_ahead(1).kind == TokenKind::Assignment {
        parse_assignment_stmt(parser)
    } else {
        parse_label_stmt(parser)
    }
}

fn starts_label(parser: &Parser) -> bool {
    parser.current_token_kind() == TokenKind::Identifier
        && parser.look_ahead(1).kind != TokenKind::Assignment
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let identifier = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;

    let value = parse_expr(parser)?;

    Ok(Stmt::Assignment(AssignmentStmt {
        identifier: identifier.value,
        value,
        position: identifier.span.start,
    }))
}

/// A label owns every following statement until the next label or EOF.
pub fn parse_label_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let name = parser.expect(TokenKind::Identifier)?;
    let body_position = parser.get_position();

    let mut body = vec![];
    while parser.has_tokens() && !starts_label(parser) {
        body.push(parse_stmt(parser)?);
    }

    Ok(Stmt::Label(LabelStmt {
        name: name.value,
        body: Program {
            body,
            position: body_position,
        },
        position: name.span.start,
    }))
}

pub fn parse_instruction_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let instruction = parser.expect(TokenKind::Instruction)?;

    let arguments = if instruction.value == "GoTo" {
        parse_goto_arguments(parser)?
    } else {
        parser.expect(TokenKind::OpenParen)?;
        let arguments = parse_arguments(parser)?;
        parser.expect(TokenKind::CloseParen)?;
        arguments
    };

    Ok(Stmt::Instruction(InstructionStmt {
        name: instruction.value,
        arguments,
        position: instruction.span.start,
    }))
}

/// `[label](condition)`, returned as `[label as string, condition]`.
fn parse_goto_arguments(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    parser.expect(TokenKind::OpenBracket)?;

    let label = if parser.current_token_kind() == TokenKind::String {
        parser.advance().clone()
    } else {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from("a label name"),
                found: parser.current_token().value.clone(),
            },
            parser.get_position(),
        );
        parser.expect_error(TokenKind::Identifier, Some(error))?
    };

    parser.expect(TokenKind::CloseBracket)?;
    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_boolean_expr(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let label = StringExpr {
        value: unquote(&label.value),
        position: label.span.start,
    };

    Ok(vec![Expr::String(label), condition])
}

pub fn parse_function_call_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let call = parse_call_expr(parser)?;

    Ok(Stmt::FunctionCall(FunctionCallStmt {
        position: call.position,
        call,
    }))
}
