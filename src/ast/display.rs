//! Canonical source printing.
//!
//! Every node prints back as `.pw` source with single spaces around binary
//! operators. Parsing the printed text yields a tree that prints the same.

use std::fmt::{Display, Formatter, Result};

use crate::lexer::lexer::is_identifier;

use super::{
    ast::{Expr, Program, Stmt},
    expressions::{ArithmeticExpr, BooleanExpr, CallExpr, StringExpr},
    statements::{InstructionStmt, LabelStmt},
};

fn write_arguments(f: &mut Formatter<'_>, arguments: &[Expr]) -> Result {
    for (index, argument) in arguments.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", argument)?;
    }
    Ok(())
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (index, stmt) in self.body.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Stmt::Assignment(stmt) => write!(f, "{} <- {}", stmt.identifier, stmt.value),
            Stmt::Label(stmt) => write!(f, "{}", stmt),
            Stmt::Instruction(stmt) => write!(f, "{}", stmt),
            Stmt::FunctionCall(stmt) => write!(f, "{}", stmt.call),
        }
    }
}

impl Display for LabelStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.name)?;
        if !self.body.is_empty() {
            write!(f, "\n{}", self.body)?;
        }
        Ok(())
    }
}

impl Display for InstructionStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if let (
            "GoTo",
            [Expr::String(StringExpr { value: label, .. }), condition],
        ) = (self.name.as_str(), self.arguments.as_slice())
        {
            return if is_identifier(label) {
                write!(f, "GoTo[{}]({})", label, condition)
            } else {
                write!(f, "GoTo[\"{}\"]({})", label, condition)
            };
        }

        write!(f, "{}(", self.name)?;
        write_arguments(f, &self.arguments)?;
        write!(f, ")")
    }
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}(", self.name)?;
        write_arguments(f, &self.arguments)?;
        write!(f, ")")
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expr::Arithmetic(expr) => write!(f, "{}", expr),
            Expr::Boolean(expr) => write!(f, "{}", expr),
            Expr::String(expr) => write!(f, "\"{}\"", expr.value),
            Expr::Grouping(expr) => write!(f, "({})", expr.expr),
        }
    }
}

impl Display for ArithmeticExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ArithmeticExpr::Number(expr) => write!(f, "{}", expr.value),
            ArithmeticExpr::Symbol(expr) => write!(f, "{}", expr.value),
            ArithmeticExpr::Call(expr) => write!(f, "{}", expr),
            ArithmeticExpr::Additive(expr) | ArithmeticExpr::Multiplicative(expr) => write!(
                f,
                "{} {} {}",
                expr.left,
                expr.operator.symbol().unwrap_or("?"),
                expr.right
            ),
            ArithmeticExpr::Power(expr) => write!(f, "{} ** {}", expr.base, expr.exponent),
            ArithmeticExpr::Prefix(expr) => {
                let signs = if expr.negated { "-" } else { "--" };
                write!(f, "{}{}", signs, expr.right_expr)
            }
            ArithmeticExpr::Grouping(expr) => write!(f, "({})", expr.expr),
        }
    }
}

impl Display for BooleanExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            BooleanExpr::Or(expr) => write!(f, "{} || {}", expr.left, expr.right),
            BooleanExpr::And(expr) => write!(f, "{} && {}", expr.left, expr.right),
            BooleanExpr::Comparison(expr) => write!(
                f,
                "{} {} {}",
                expr.left,
                expr.operator.symbol().unwrap_or("?"),
                expr.right
            ),
            BooleanExpr::Literal(expr) => write!(f, "{}", expr.value),
            BooleanExpr::Grouping(expr) => write!(f, "({})", expr.expr),
        }
    }
}
