// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Token definitions for the tokenizer.

use regex::Regex;
use std::fmt;

/// A span in the source code, representing a range of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A compiled regular-expression literal such as `/ab+c/i`.
#[derive(Debug, Clone)]
pub struct RegexLiteral {
    /// The text between the slashes
    pub pattern: String,
    /// Trailing flag letters (`g`, `i`, `m`, `y`)
    pub flags: String,
    /// The compiled matcher
    pub regex: Regex,
}

impl PartialEq for RegexLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.flags == other.flags
    }
}

/// The decoded value carried by a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// Raw text, or string content with the quotes stripped
    Text(String),
    /// Decoded numeric literal
    Number(f64),
    /// Compiled regular-expression literal
    Pattern(RegexLiteral),
    /// No value (end of input)
    None,
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The decoded value
    pub value: TokenValue,
    /// The exact source text that was matched
    pub lexeme: String,
    /// The span in the source code
    pub span: Span,
    /// 1-based line on which the token starts
    pub line: usize,
}

impl Token {
    /// Creates a new token.
    pub fn new(
        kind: TokenKind,
        value: TokenValue,
        lexeme: impl Into<String>,
        span: Span,
        line: usize,
    ) -> Self {
        Self {
            kind,
            value,
            lexeme: lexeme.into(),
            span,
            line,
        }
    }

    /// Creates the end-of-input sentinel.
    pub fn eof(line: usize, offset: usize) -> Self {
        Self::new(
            TokenKind::Eof,
            TokenValue::None,
            "",
            Span::new(offset, offset),
            line,
        )
    }

    /// Returns true if this is the end-of-input sentinel.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// The literal text used when reporting this token in an error.
    pub fn text(&self) -> &str {
        if self.is_eof() { "EOF" } else { &self.lexeme }
    }

    /// Returns the decoded number, if this is a numeric literal.
    pub fn as_number(&self) -> Option<f64> {
        match self.value {
            TokenValue::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>4}  {:<24} {}", self.line, format!("{:?}", self.kind), self.text())
    }
}

/// The different kinds of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Debugger,
    Default,
    Delete,
    Do,
    Else,
    Export,
    Extends,
    Finally,
    For,
    Function,
    If,
    Import,
    In,
    Instanceof,
    New,
    Return,
    Super,
    Switch,
    This,
    Throw,
    Try,
    Typeof,
    Var,
    Void,
    While,
    With,
    Yield,
    Null,
    True,
    False,

    // Literals
    /// String literal
    String,
    /// Numeric literal
    Number,
    /// Identifier
    Identifier,
    /// Regular expression literal
    RegExp,

    // Punctuation
    /// {
    LeftBrace,
    /// }
    RightBrace,
    /// (
    LeftParen,
    /// )
    RightParen,
    /// [
    LeftBracket,
    /// ]
    RightBracket,
    /// .
    Dot,
    /// ...
    Ellipsis,
    /// ;
    Semicolon,
    /// ,
    Comma,
    /// :
    Colon,
    /// ?
    Question,
    /// <
    LessThan,
    /// >
    GreaterThan,
    /// <=
    LessThanEqual,
    /// >=
    GreaterThanEqual,
    /// ==
    EqualEqual,
    /// !=
    NotEqual,
    /// ===
    StrictEqual,
    /// !==
    StrictNotEqual,
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// ++
    PlusPlus,
    /// --
    MinusMinus,
    /// <<
    LeftShift,
    /// >>
    RightShift,
    /// >>>
    UnsignedRightShift,
    /// &
    Ampersand,
    /// |
    Pipe,
    /// ^
    Caret,
    /// !
    Bang,
    /// &&
    AmpersandAmpersand,
    /// ||
    PipePipe,
    /// =
    Equal,
    /// +=
    PlusEqual,
    /// -=
    MinusEqual,
    /// *=
    StarEqual,
    /// /=
    SlashEqual,
    /// %=
    PercentEqual,
    /// <<=
    LeftShiftEqual,
    /// >>=
    RightShiftEqual,
    /// >>>=
    UnsignedRightShiftEqual,
    /// &=
    AmpersandEqual,
    /// |=
    PipeEqual,
    /// ^=
    CaretEqual,
    /// =>
    Arrow,
    /// @
    At,
    /// `
    Backquote,

    // Special
    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns true if this token is a reserved word.
    pub fn is_keyword(&self) -> bool {
        super::rules::KEYWORDS.iter().any(|(_, kind)| kind == self)
    }

    /// Returns true if this token is an operator or delimiter.
    pub fn is_punctuator(&self) -> bool {
        super::rules::PUNCTUATORS.iter().any(|(_, kind)| kind == self)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = super::rules::KEYWORDS
            .iter()
            .chain(super::rules::PUNCTUATORS)
            .find(|(_, kind)| kind == self)
            .map(|(text, _)| *text);

        match (text, self) {
            (Some(text), _) => f.write_str(text),
            (None, TokenKind::String) => f.write_str("string"),
            (None, TokenKind::Number) => f.write_str("number"),
            (None, TokenKind::Identifier) => f.write_str("identifier"),
            (None, TokenKind::RegExp) => f.write_str("regular expression"),
            (None, _) => f.write_str("end of input"),
        }
    }
}
