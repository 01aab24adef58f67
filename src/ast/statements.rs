use crate::Position;

use super::{
    ast::{Expr, Program},
    expressions::CallExpr,
};

/// Assignment Statement
/// `name <- value`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStmt {
    pub identifier: String,
    pub value: Expr,
    pub position: Position,
}

/// Label Statement
/// A jump target. Owns every statement that follows it up to the next label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStmt {
    pub name: String,
    pub body: Program,
    pub position: Position,
}

/// Instruction Statement
/// `Name(arguments)`. For `GoTo[label](condition)` the arguments are the
/// label name as a string literal followed by the condition.
#[derive(Debug, Clone, PartialEq)]
pub struct InstructionStmt {
    pub name: String,
    pub arguments: Vec<Expr>,
    pub position: Position,
}

/// Function Call Statement
/// A built-in function call used on its own line.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCallStmt {
    pub call: CallExpr,
    pub position: Position,
}
