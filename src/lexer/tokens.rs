use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Words that are lexed as something other than a plain identifier.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("true", TokenKind::Bool);
        map.insert("false", TokenKind::Bool);
        map
    };

    pub static ref SYMBOL_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("(", TokenKind::OpenParen);
        map.insert(")", TokenKind::CloseParen);
        map.insert("[", TokenKind::OpenBracket);
        map.insert("]", TokenKind::CloseBracket);
        map.insert("<-", TokenKind::Assignment);
        map.insert("==", TokenKind::Equals);
        map.insert(">=", TokenKind::GreaterEquals);
        map.insert("<=", TokenKind::LessEquals);
        map.insert(">", TokenKind::Greater);
        map.insert("<", TokenKind::Less);
        map.insert("&&", TokenKind::And);
        map.insert("||", TokenKind::Or);
        map.insert("+", TokenKind::Plus);
        map.insert("-", TokenKind::Dash);
        map.insert("**", TokenKind::StarStar);
        map.insert("*", TokenKind::Star);
        map.insert("/", TokenKind::Slash);
        map.insert("%", TokenKind::Percent);
        map.insert(",", TokenKind::Comma);
        map
    };
}

pub const INSTRUCTIONS: [&str; 8] = [
    "Spawn",
    "GoTo",
    "Fill",
    "DrawLine",
    "DrawCircle",
    "DrawRectangle",
    "Size",
    "Color",
];

pub const FUNCTIONS: [&str; 7] = [
    "GetActualX",
    "GetActualY",
    "GetCanvasSize",
    "IsBrushColor",
    "IsBrushSize",
    "IsCanvasColor",
    "GetColorCount",
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Identifier,
    Bool,

    Instruction,
    Function,

    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
    Comma,

    Assignment, // <-

    Equals, // ==
    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Plus,
    Dash,
    Star,
    StarStar,
    Slash,
    Percent,

    Invalid,
}

impl TokenKind {
    /// Source text of operator and punctuation kinds.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            TokenKind::OpenBracket => Some("["),
            TokenKind::CloseBracket => Some("]"),
            TokenKind::OpenParen => Some("("),
            TokenKind::CloseParen => Some(")"),
            TokenKind::Comma => Some(","),
            TokenKind::Assignment => Some("<-"),
            TokenKind::Equals => Some("=="),
            TokenKind::Less => Some("<"),
            TokenKind::LessEquals => Some("<="),
            TokenKind::Greater => Some(">"),
            TokenKind::GreaterEquals => Some(">="),
            TokenKind::Or => Some("||"),
            TokenKind::And => Some("&&"),
            TokenKind::Plus => Some("+"),
            TokenKind::Dash => Some("-"),
            TokenKind::Star => Some("*"),
            TokenKind::StarStar => Some("**"),
            TokenKind::Slash => Some("/"),
            TokenKind::Percent => Some("%"),
            _ => None,
        }
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            TokenKind::Equals
                | TokenKind::Less
                | TokenKind::LessEquals
                | TokenKind::Greater
                | TokenKind::GreaterEquals
        )
    }

    /// Name used in "expected ..." messages.
    pub fn describe(&self) -> String {
        match self.symbol() {
            Some(symbol) => format!("'{}'", symbol),
            None => match self {
                TokenKind::EOF => String::from("end of file"),
                TokenKind::Number => String::from("a number"),
                TokenKind::String => String::from("a string"),
                TokenKind::Identifier => String::from("an identifier"),
                TokenKind::Bool => String::from("a boolean"),
                TokenKind::Instruction => String::from("an instruction"),
                TokenKind::Function => String::from("a function"),
                _ => format!("{:?}", self),
            },
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} {}",
            self.span.start.line,
            self.span.start.column,
            self.debug()
        )
    }
}

impl Token {
    pub fn line(&self) -> usize {
        self.span.start.line
    }

    pub fn column(&self) -> usize {
        self.span.start.column
    }

    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::Bool,
            TokenKind::Instruction,
            TokenKind::Function,
        ]) {
            format!("{} ({})", self.kind, self.value)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
