// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for tokenizing and parsing.

use thiserror::Error;

use crate::lexer::Token;

/// Result type for front-end operations
pub type Result<T> = std::result::Result<T, Error>;

/// No rule matched at the current scan position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Line {line}: {message}")]
pub struct LexError {
    /// 1-based line of the scan position
    pub line: usize,
    /// What went wrong
    pub message: String,
}

impl LexError {
    /// Creates a new lexical error.
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// A production's structural expectation was not met.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token cannot start or continue the current production
    #[error("Unexpected token: {token}")]
    UnexpectedToken {
        /// Literal text of the offending token
        token: String,
        /// Line of the offending token
        line: usize,
    },

    /// A specific token was required
    #[error("Expected \"{expected}\": {token}")]
    Expected {
        /// The required token text
        expected: &'static str,
        /// Literal text of the offending token
        token: String,
        /// Line of the offending token
        line: usize,
    },
}

impl ParseError {
    /// Error for a token that no production accepts here.
    pub fn unexpected(token: &Token) -> Self {
        ParseError::UnexpectedToken {
            token: token.text().to_string(),
            line: token.line,
        }
    }

    /// Error for a missing required token.
    pub fn expected(expected: &'static str, found: &Token) -> Self {
        ParseError::Expected {
            expected,
            token: found.text().to_string(),
            line: found.line,
        }
    }

    /// Literal text of the offending token.
    pub fn token(&self) -> &str {
        match self {
            ParseError::UnexpectedToken { token, .. } | ParseError::Expected { token, .. } => token,
        }
    }

    /// Line of the offending token.
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { line, .. } | ParseError::Expected { line, .. } => *line,
        }
    }
}

/// Errors surfaced by the front-end.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Tokenization failed
    #[error("LexError: {0}")]
    Lex(#[from] LexError),

    /// Parsing failed
    #[error("ParseError: {0}")]
    Parse(#[from] ParseError),

    /// Source could not be read
    #[error("IOError: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Span, TokenKind, TokenValue};

    fn plus(line: usize) -> Token {
        Token::new(
            TokenKind::Plus,
            TokenValue::Text("+".into()),
            "+",
            Span::new(0, 1),
            line,
        )
    }

    #[test]
    fn test_lex_error_display() {
        let err = LexError::new(3, "Unexpected character '#'");
        assert_eq!(err.to_string(), "Line 3: Unexpected character '#'");
    }

    #[test]
    fn test_parse_error_display() {
        assert_eq!(
            ParseError::unexpected(&plus(1)).to_string(),
            "Unexpected token: +"
        );
        assert_eq!(
            ParseError::expected("=", &plus(2)).to_string(),
            "Expected \"=\": +"
        );
    }

    #[test]
    fn test_parse_error_accessors() {
        let err = ParseError::expected(")", &Token::eof(7, 0));
        assert_eq!(err.token(), "EOF");
        assert_eq!(err.line(), 7);
    }

    #[test]
    fn test_error_conversion_and_prefix() {
        let err: Error = LexError::new(1, "bad").into();
        assert_eq!(err.to_string(), "LexError: Line 1: bad");

        let err: Error = ParseError::unexpected(&plus(1)).into();
        assert!(matches!(err, Error::Parse(_)));
        assert_eq!(err.to_string(), "ParseError: Unexpected token: +");
    }
}
