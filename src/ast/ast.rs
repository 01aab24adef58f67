use std::fmt::Display;

use crate::Position;

use super::{
    expressions::{ArithmeticExpr, BooleanExpr, GroupingExpr, StringExpr},
    statements::{AssignmentStmt, FunctionCallStmt, InstructionStmt, LabelStmt},
};

/// A sequence of statements.
///
/// Used for the whole source file and for the body owned by each label.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<Stmt>,
    pub position: Position,
}

impl Program {
    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Stmt;
    type IntoIter = std::slice::Iter<'a, Stmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.body.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assignment(AssignmentStmt),
    Label(LabelStmt),
    Instruction(InstructionStmt),
    FunctionCall(FunctionCallStmt),
}

impl Stmt {
    pub fn get_position(&self) -> Position {
        match self {
            Stmt::Assignment(stmt) => stmt.position,
            Stmt::Label(stmt) => stmt.position,
            Stmt::Instruction(stmt) => stmt.position,
            Stmt::FunctionCall(stmt) => stmt.position,
        }
    }
}

/// Any expression, split by the category it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Arithmetic(ArithmeticExpr),
    Boolean(BooleanExpr),
    String(StringExpr),
    /// A parenthesized string expression, e.g. `("Red")`.
    Grouping(GroupingExpr<Expr>),
}

impl Expr {
    /// The syntactic category of the node.
    ///
    /// A variable reference is arithmetic here, the analyzer resolves what
    /// it really holds from the symbol table.
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Arithmetic(_) => ExprType::Arithmetic,
            Expr::Boolean(_) => ExprType::Boolean,
            Expr::String(_) => ExprType::String,
            Expr::Grouping(expr) => expr.expr.get_expr_type(),
        }
    }

    pub fn get_position(&self) -> Position {
        match self {
            Expr::Arithmetic(expr) => expr.get_position(),
            Expr::Boolean(expr) => expr.get_position(),
            Expr::String(expr) => expr.position,
            Expr::Grouping(expr) => expr.position,
        }
    }

    /// The expression with any enclosing parentheses removed.
    pub fn ungrouped(&self) -> &Expr {
        match self {
            Expr::Grouping(expr) => expr.expr.ungrouped(),
            expr => expr,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprType {
    Arithmetic,
    Boolean,
    String,
}

impl Display for ExprType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExprType::Arithmetic => write!(f, "arithmetic"),
            ExprType::Boolean => write!(f, "boolean"),
            ExprType::String => write!(f, "string"),
        }
    }
}
