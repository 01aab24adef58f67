use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, FUNCTIONS, INSTRUCTIONS, RESERVED_LOOKUP, SYMBOL_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

const LETTERS: &str = "a-zA-ZáéíóúÁÉÍÓÚüÜñÑ";

lazy_static! {
    /// Recognizers in priority order. Every pattern is anchored at the
    /// current position, the first one to match wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[()\[\]]").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^<-").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^(==|>=|<=|>|<)").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^(&&|\|\|)").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^(\*\*|\+|-|\*|/|%)").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+\b").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"^,").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r#"^"[^"]*""#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r#"^".*"#).unwrap(), handler: unterminated_string_handler },
        RegexPattern { regex: keyword_regex(&INSTRUCTIONS), handler: instruction_handler },
        RegexPattern { regex: keyword_regex(&FUNCTIONS), handler: function_handler },
        RegexPattern {
            regex: Regex::new(&format!("^[{0}][{0}0-9\\-]*", LETTERS)).unwrap(),
            handler: identifier_handler,
        },
    ];

    /// Characters that end an unrecognized lexeme.
    static ref INVALID_END: Regex =
        Regex::new(r"\s|\(|\)|\[|\]|<-|==|>=|<=|>|<|&&|\|\||\+|-|\*\*|\*|%|/").unwrap();
}

fn keyword_regex(keywords: &[&str]) -> Regex {
    Regex::new(&format!(r"^({})\b", keywords.join("|"))).unwrap()
}

/// Lexer state for a single source line.
pub struct Lexer<'a> {
    tokens: Vec<Token>,
    errors: Vec<Error>,
    line: &'a str,
    pos: usize,
    line_number: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(line: &'a str, line_number: usize) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            errors: vec![],
            line,
            pos: 0,
            line_number,
            column: 1,
        }
    }

    /// Consumes `lexeme`, which must sit at the current position.
    pub fn advance(&mut self, lexeme: &str) {
        self.pos += lexeme.len();
        self.column += lexeme.chars().count();
    }

    pub fn push(&mut self, kind: TokenKind, lexeme: &str) {
        let span = self.span_of(lexeme);
        self.tokens.push(MK_TOKEN!(kind, String::from(lexeme), span));
        self.advance(lexeme);
    }

    pub fn error(&mut self, error_impl: ErrorImpl) {
        self.errors.push(Error::new(error_impl, self.position()));
    }

    pub fn remainder(&self) -> &'a str {
        &self.line[self.pos..]
    }

    pub fn at_eol(&self) -> bool {
        self.pos >= self.line.len()
    }

    pub fn position(&self) -> Position {
        Position::new(self.line_number, self.column)
    }

    fn span_of(&self, lexeme: &str) -> Span {
        Span {
            start: self.position(),
            end: Position::new(self.line_number, self.column + lexeme.chars().count()),
        }
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance(matched);
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    match SYMBOL_LOOKUP.get(matched) {
        Some(kind) => lexer.push(*kind, matched),
        None => invalid_handler(lexer, matched),
    }
}

fn number_handler(lexer: &mut Lexer, matched: &str) {
    lexer.push(TokenKind::Number, matched);
}

fn string_handler(lexer: &mut Lexer, matched: &str) {
    lexer.push(TokenKind::String, matched);
}

fn unterminated_string_handler(lexer: &mut Lexer, matched: &str) {
    let lexeme = matched.trim_end();
    lexer.error(ErrorImpl::UnterminatedString {
        lexeme: String::from(lexeme),
    });
    lexer.advance(matched);
}

fn instruction_handler(lexer: &mut Lexer, matched: &str) {
    lexer.push(TokenKind::Instruction, matched);
}

fn function_handler(lexer: &mut Lexer, matched: &str) {
    lexer.push(TokenKind::Function, matched);
}

fn identifier_handler(lexer: &mut Lexer, matched: &str) {
    if let Some(kind) = RESERVED_LOOKUP.get(matched) {
        lexer.push(*kind, matched);
    } else {
        lexer.push(TokenKind::Identifier, matched);
    }
}

/// Skips up to the next character that could start a valid token.
fn invalid_handler(lexer: &mut Lexer, rest: &str) {
    let first_len = rest.chars().next().map_or(0, char::len_utf8);
    let end = INVALID_END
        .find(&rest[first_len..])
        .map_or(rest.len(), |found| first_len + found.start());
    let lexeme = &rest[..end];

    lexer.error(ErrorImpl::InvalidToken {
        lexeme: String::from(lexeme),
    });
    lexer.advance(lexeme);
}

/// Splits `source` into tokens, line by line.
///
/// Invalid lexemes and unterminated strings never reach the token stream,
/// they are reported in the returned diagnostics instead. The stream always
/// ends with a single EOF token placed after the last character of the
/// source.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<Error>) {
    let mut tokens = vec![];
    let mut errors = vec![];
    let mut end = Position::new(1, 1);

    for (index, line) in source.split('\n').enumerate() {
        let mut lex = Lexer::new(line, index + 1);

        while !lex.at_eol() {
            let rest = lex.remainder();
            let mut matched = false;

            for pattern in PATTERNS.iter() {
                if let Some(found) = pattern.regex.find(rest) {
                    (pattern.handler)(&mut lex, found.as_str());
                    matched = true;
                    break;
                }
            }

            if !matched {
                invalid_handler(&mut lex, rest);
            }
        }

        end = lex.position();
        tokens.append(&mut lex.tokens);
        errors.append(&mut lex.errors);
    }

    tokens.push(MK_TOKEN!(
        TokenKind::EOF,
        String::from("EOF"),
        Span { start: end, end }
    ));

    tracing::debug!(
        "Lexed {} tokens with {} diagnostics",
        tokens.len(),
        errors.len()
    );

    (tokens, errors)
}

/// Whether `text` lexes as exactly one identifier.
pub fn is_identifier(text: &str) -> bool {
    let (tokens, errors) = tokenize(text);

    errors.is_empty()
        && tokens.len() == 2
        && tokens[0].kind == TokenKind::Identifier
        && tokens[0].value == text
}
