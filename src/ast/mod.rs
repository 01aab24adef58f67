/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program, statement and expression sum types
/// - expressions: Arithmetic, boolean and string expression nodes
/// - statements: Assignment, label, instruction and call statements
/// - display: Printing a tree back as source
pub mod ast;
pub mod display;
pub mod expressions;
pub mod statements;
