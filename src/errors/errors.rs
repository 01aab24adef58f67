use std::fmt::Display;

use thiserror::Error;

use crate::{analyzer::rules::VALID_COLORS, ast::ast::ExprType, Position};

/// A single diagnostic produced by any stage of the front end.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    severity: Severity,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            severity: Severity::Error,
        }
    }

    pub fn warning(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
            severity: Severity::Warning,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_severity(&self) -> Severity {
        self.severity
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn get_phase(&self) -> Phase {
        match &self.internal_error {
            ErrorImpl::InvalidToken { .. } | ErrorImpl::UnterminatedString { .. } => Phase::Lexical,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedStatement { .. }
            | ErrorImpl::UnexpectedExpression { .. }
            | ErrorImpl::NumberParseError { .. } => Phase::Syntax,
            _ => Phase::Semantic,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidToken { .. } => "InvalidToken",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedStatement { .. } => "UnexpectedStatement",
            ErrorImpl::UnexpectedExpression { .. } => "UnexpectedExpression",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::MissingSpawn => "MissingSpawn",
            ErrorImpl::MisplacedSpawn => "MisplacedSpawn",
            ErrorImpl::DuplicateLabel { .. } => "DuplicateLabel",
            ErrorImpl::UndefinedLabel { .. } => "UndefinedLabel",
            ErrorImpl::UndefinedVariable { .. } => "UndefinedVariable",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::ArgumentCountMismatch { .. } => "ArgumentCountMismatch",
            ErrorImpl::InvalidColor { .. } => "InvalidColor",
            ErrorImpl::ExpectedColorLiteral { .. } => "ExpectedColorLiteral",
            ErrorImpl::ExpectedLabelName => "ExpectedLabelName",
            ErrorImpl::InvalidDirection { .. } => "InvalidDirection",
            ErrorImpl::ZeroDirection { .. } => "ZeroDirection",
            ErrorImpl::NonPositiveArgument { .. } => "NonPositiveArgument",
            ErrorImpl::UnknownInstruction { .. } => "UnknownInstruction",
            ErrorImpl::UnknownFunction { .. } => "UnknownFunction",
            ErrorImpl::SpawnOutOfBounds { .. } => "SpawnOutOfBounds",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidToken { .. } => ErrorTip::Suggestion(String::from(
                "names start with a letter and may contain letters, digits and '-'",
            )),
            ErrorImpl::UnterminatedString { .. } => ErrorTip::Suggestion(String::from(
                "add a closing '\"' before the end of the line",
            )),
            ErrorImpl::UnexpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("expected {} here, found `{}`", expected, found))
            }
            ErrorImpl::UnexpectedStatement { .. } => ErrorTip::Suggestion(String::from(
                "a line holds an instruction, a function call, an assignment or a label",
            )),
            ErrorImpl::UnexpectedExpression { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::MissingSpawn | ErrorImpl::MisplacedSpawn => ErrorTip::Suggestion(
                String::from("write Spawn(x, y) once, as the first line of the program"),
            ),
            ErrorImpl::DuplicateLabel { label, line } => ErrorTip::Suggestion(format!(
                "rename one of them, `{}` was first declared on line {}",
                label, line
            )),
            ErrorImpl::UndefinedLabel { label } => {
                ErrorTip::Suggestion(format!("declare a line with the label `{}`", label))
            }
            ErrorImpl::UndefinedVariable { variable } => ErrorTip::Suggestion(format!(
                "assign it first with `{} <- ...`",
                variable
            )),
            ErrorImpl::TypeMatchError { expected, received } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::ArgumentCountMismatch { expected, received, .. } => ErrorTip::Suggestion(
                format!("Expected {} arguments, received {}", expected, received),
            ),
            ErrorImpl::InvalidColor { .. } | ErrorImpl::ExpectedColorLiteral { .. } => {
                ErrorTip::Suggestion(format!("valid colors are {}", VALID_COLORS.join(", ")))
            }
            ErrorImpl::ExpectedLabelName => ErrorTip::None,
            ErrorImpl::InvalidDirection { .. } => ErrorTip::None,
            ErrorImpl::ZeroDirection { .. } => {
                ErrorTip::Suggestion(String::from("one of the two directions must be -1 or 1"))
            }
            ErrorImpl::NonPositiveArgument { .. } => ErrorTip::None,
            ErrorImpl::UnknownInstruction { .. } | ErrorImpl::UnknownFunction { .. } => {
                ErrorTip::None
            }
            ErrorImpl::SpawnOutOfBounds { canvas_size, .. } => ErrorTip::Suggestion(format!(
                "coordinates range from 0 to {}",
                canvas_size.saturating_sub(1)
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} at {}: {}",
            self.get_phase(),
            self.severity,
            self.position,
            self.internal_error
        )
    }
}

impl std::error::Error for Error {}

/// Renders one diagnostic per line.
pub fn format_diagnostics(errors: &[Error]) -> String {
    errors
        .iter()
        .map(|error| error.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn title(&self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// The stage that produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Lexical,
    Syntax,
    Semantic,
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Lexical => write!(f, "lexical"),
            Phase::Syntax => write!(f, "syntax"),
            Phase::Semantic => write!(f, "semantic"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Lexical
    #[error("invalid token '{lexeme}'")]
    InvalidToken { lexeme: String },
    #[error("missing closing quote for string {lexeme}")]
    UnterminatedString { lexeme: String },

    // Syntax
    #[error("expected {expected}, found '{found}'")]
    UnexpectedToken { expected: String, found: String },
    #[error("unexpected '{found}' at the start of a statement")]
    UnexpectedStatement { found: String },
    #[error("expected an expression, found '{found}'")]
    UnexpectedExpression { found: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },

    // Semantic
    #[error("the program must begin with a Spawn instruction")]
    MissingSpawn,
    #[error("Spawn can only be used as the first instruction")]
    MisplacedSpawn,
    #[error("label '{label}' is already declared at line {line}")]
    DuplicateLabel { label: String, line: usize },
    #[error("label '{label}' is not declared")]
    UndefinedLabel { label: String },
    #[error("variable '{variable}' is not declared")]
    UndefinedVariable { variable: String },
    #[error("types do not match: expected {expected}, received {received}")]
    TypeMatchError { expected: ExprType, received: ExprType },
    #[error("{callee} must have exactly {expected} argument(s), received {received}")]
    ArgumentCountMismatch {
        callee: String,
        expected: usize,
        received: usize,
    },
    #[error("'{color}' is not a valid color")]
    InvalidColor { color: String },
    #[error("{callee} expects a color name as a string literal")]
    ExpectedColorLiteral { callee: String },
    #[error("GoTo expects a label name between brackets")]
    ExpectedLabelName,
    #[error("{callee} direction must be -1, 0 or 1, found {value}")]
    InvalidDirection { callee: String, value: i64 },
    #[error("{callee} direction cannot be (0, 0)")]
    ZeroDirection { callee: String },
    #[error("{callee} {argument} must be positive, found {value}")]
    NonPositiveArgument {
        callee: String,
        argument: String,
        value: i64,
    },
    #[error("unknown instruction '{name}'")]
    UnknownInstruction { name: String },
    #[error("unknown function '{name}'")]
    UnknownFunction { name: String },

    // Warnings
    #[error("Spawn coordinate {coordinate} lies outside the {canvas_size}x{canvas_size} canvas")]
    SpawnOutOfBounds { coordinate: i64, canvas_size: i64 },
}
