// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Lexical analysis (tokenization) for source text.
//!
//! The lexer transforms source text into an ordered vector of tokens that
//! the parser walks with its lookahead window.
//!
//! ## Structure
//!
//! - `rules.rs` - The ordered rule table (first match wins)
//! - `tokenizer.rs` - `Lexer` and the `tokenize` entry point
//! - `token.rs` - `Token`, `TokenKind` and `TokenValue` definitions
//!
//! ## Usage
//!
//! ```rust
//! use es6dot_syntax::lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("var x = 42").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Var);
//! assert_eq!(tokens[3].as_number(), Some(42.0));
//! ```

pub mod rules;
mod token;
mod tokenizer;

pub use rules::{KEYWORDS, PUNCTUATORS, RuleTable};
pub use token::{RegexLiteral, Span, Token, TokenKind, TokenValue};
pub use tokenizer::{Lexer, tokenize};
