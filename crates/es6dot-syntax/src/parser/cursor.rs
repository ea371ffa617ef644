// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The three-token lookahead window over a token vector.

use crate::lexer::Token;

/// A forward-only window (`previous`, `current`, `next`) over tokens.
///
/// Positions past the last token read as the EOF sentinel.
#[derive(Debug, Clone)]
pub struct Cursor {
    tokens: Vec<Token>,
    index: usize,
    eof: Token,
}

impl Cursor {
    /// Creates a cursor positioned on the first token.
    pub fn new(tokens: Vec<Token>) -> Self {
        let eof = match tokens.last() {
            Some(last) => Token::eof(last.line, last.span.end),
            None => Token::eof(1, 0),
        };
        Self {
            tokens,
            index: 0,
            eof,
        }
    }

    /// The token under the cursor.
    pub fn current(&self) -> &Token {
        self.tokens.get(self.index).unwrap_or(&self.eof)
    }

    /// The token after the current one.
    pub fn next(&self) -> &Token {
        self.tokens.get(self.index + 1).unwrap_or(&self.eof)
    }

    /// The token before the current one; `None` before the first advance.
    pub fn previous(&self) -> Option<&Token> {
        let index = self.index.checked_sub(1)?;
        Some(self.tokens.get(index).unwrap_or(&self.eof))
    }

    /// Moves the window forward by one token. Stops on the EOF position.
    pub fn advance(&mut self) {
        if self.index < self.tokens.len() {
            self.index += 1;
        }
    }
}
