use crate::{lexer::tokens::TokenKind, Position};

use super::ast::Expr;

// ARITHMETIC

#[derive(Debug, Clone, PartialEq)]
pub enum ArithmeticExpr {
    Number(NumberExpr),
    Symbol(SymbolExpr),
    Call(CallExpr),
    /// `+` and `-`
    Additive(BinaryExpr),
    /// `*`, `/` and `%`
    Multiplicative(BinaryExpr),
    Power(PowerExpr),
    Prefix(PrefixExpr),
    Grouping(GroupingExpr<ArithmeticExpr>),
}

impl ArithmeticExpr {
    pub fn get_position(&self) -> Position {
        match self {
            ArithmeticExpr::Number(expr) => expr.position,
            ArithmeticExpr::Symbol(expr) => expr.position,
            ArithmeticExpr::Call(expr) => expr.position,
            ArithmeticExpr::Additive(expr) | ArithmeticExpr::Multiplicative(expr) => expr.position,
            ArithmeticExpr::Power(expr) => expr.position,
            ArithmeticExpr::Prefix(expr) => expr.position,
            ArithmeticExpr::Grouping(expr) => expr.position,
        }
    }
}

/// Number Expression
/// An integer literal.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: i64,
    pub position: Position,
}

/// Symbol Expression
/// A variable reference.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
    pub position: Position,
}

/// Call Expression
/// A built-in function call, e.g. `GetActualX()`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub name: String,
    pub arguments: Vec<Expr>,
    pub position: Position,
}

/// Binary Expression
/// Left operand, operator and right operand at one precedence level.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<ArithmeticExpr>,
    pub operator: TokenKind,
    pub right: Box<ArithmeticExpr>,
    pub position: Position,
}

/// Power Expression
/// `base ** exponent`, binding to the right.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerExpr {
    pub base: Box<ArithmeticExpr>,
    pub exponent: Box<ArithmeticExpr>,
    pub position: Position,
}

/// Prefix Expression
/// A run of unary minus signs. An even run leaves `negated` false.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub negated: bool,
    pub right_expr: Box<ArithmeticExpr>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupingExpr<T> {
    pub expr: Box<T>,
    pub position: Position,
}

// BOOLEAN

#[derive(Debug, Clone, PartialEq)]
pub enum BooleanExpr {
    Or(LogicalExpr),
    And(LogicalExpr),
    Comparison(ComparisonExpr),
    Literal(BoolExpr),
    Grouping(GroupingExpr<Expr>),
}

impl BooleanExpr {
    pub fn get_position(&self) -> Position {
        match self {
            BooleanExpr::Or(expr) | BooleanExpr::And(expr) => expr.position,
            BooleanExpr::Comparison(expr) => expr.position,
            BooleanExpr::Literal(expr) => expr.position,
            BooleanExpr::Grouping(expr) => expr.position,
        }
    }
}

/// Logical Expression
/// Both sides of an `&&` or `||`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpr {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub position: Position,
}

/// Comparison Expression
/// `left op right` where op is one of `==`, `>=`, `<=`, `>`, `<`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonExpr {
    pub left: Box<Expr>,
    pub operator: TokenKind,
    pub right: Box<Expr>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoolExpr {
    pub value: bool,
    pub position: Position,
}

// STRING

/// String Expression
/// A quoted literal. `value` holds the text between the quotes.
#[derive(Debug, Clone, PartialEq)]
pub struct StringExpr {
    pub value: String,
    pub position: Position,
}
