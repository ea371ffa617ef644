// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The tokenizer that turns source text into tokens.

use regex::RegexBuilder;
use tracing::{debug, trace};

use super::rules::{Action, RuleTable};
use super::{RegexLiteral, Span, Token, TokenKind, TokenValue};
use crate::error::LexError;

/// Tokenizes `source` with a freshly built rule table.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new().tokenize(source)
}

/// A tokenizer driven by an ordered [`RuleTable`].
#[derive(Debug, Clone, Default)]
pub struct Lexer {
    rules: RuleTable,
}

impl Lexer {
    /// Creates a lexer with the standard rule table.
    pub fn new() -> Self {
        Self {
            rules: RuleTable::new(),
        }
    }

    /// Scans the whole of `source`, left to right.
    ///
    /// Fails on the first position where no rule matches.
    pub fn tokenize(&self, source: &str) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        let mut pos = 0;
        let mut line = 1;

        while pos < source.len() {
            let rest = &source[pos..];
            let Some((action, len)) = self.rules.first_match(rest) else {
                let found = rest.chars().next().unwrap_or_default();
                return Err(LexError::new(
                    line,
                    format!("Unexpected character {found:?}"),
                ));
            };

            let text = &rest[..len];
            let start_line = line;
            line += text.matches('\n').count();
            let span = Span::new(pos, pos + len);
            pos += len;

            let Action::Emit(kind) = action else {
                continue;
            };

            let value = decode(kind, text, start_line)?;
            trace!(line = start_line, ?kind, text, "token");
            tokens.push(Token::new(kind, value, text, span, start_line));
        }

        debug!(tokens = tokens.len(), lines = line, "tokenized source");
        Ok(tokens)
    }
}

fn decode(kind: TokenKind, text: &str, line: usize) -> Result<TokenValue, LexError> {
    match kind {
        // Quotes are ASCII, so byte slicing is safe. Escapes stay verbatim.
        TokenKind::String => Ok(TokenValue::Text(text[1..text.len() - 1].to_string())),
        TokenKind::Number => text
            .parse::<f64>()
            .map(TokenValue::Number)
            .map_err(|e| LexError::new(line, format!("Invalid number {text:?}: {e}"))),
        TokenKind::RegExp => compile_regex(text, line).map(TokenValue::Pattern),
        _ => Ok(TokenValue::Text(text.to_string())),
    }
}

fn compile_regex(text: &str, line: usize) -> Result<RegexLiteral, LexError> {
    // The rule guarantees a leading slash and a closing slash before the flags.
    let close = text.rfind('/').unwrap_or(0);
    let pattern = &text[1..close.max(1)];
    let flags = &text[close + 1..];

    let regex = RegexBuilder::new(pattern)
        .case_insensitive(flags.contains('i'))
        .multi_line(flags.contains('m'))
        .build()
        .map_err(|e| LexError::new(line, format!("Invalid regular expression {text}: {e}")))?;

    Ok(RegexLiteral {
        pattern: pattern.to_string(),
        flags: flags.to_string(),
        regex,
    })
}
