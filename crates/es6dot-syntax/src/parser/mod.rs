// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Parser for tokenized source.
//!
//! Transforms a token vector into a program (a vector of statements).
//!
//! ## Structure
//!
//! - `cursor` - The `previous` / `current` / `next` lookahead window
//! - `parser` - Recursive descent, one method per production
//!
//! ## Grammar
//!
//! ```text
//! Program     : Statement*
//! Statement   : 'var' IDENT ('=' Expression)?
//!             | IDENT '=' Expression
//!             | 'function' IDENT '(' (IDENT ','?)* ')' '{' Statement* '}'
//!             | 'return' Expression
//!             | '+' Expression          (left operand: the preceding token)
//! Expression  : IDENT
//!             | NUMBER
//!             | IDENT '+' Expression
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use es6dot_syntax::lexer::tokenize;
//! use es6dot_syntax::parser::Parser;
//!
//! let tokens = tokenize("var x = 1").unwrap();
//! let program = Parser::new(tokens).parse_program().expect("Should parse");
//! assert_eq!(program.len(), 1);
//! ```

mod cursor;
mod parser;

pub use cursor::Cursor;
pub use parser::Parser;
