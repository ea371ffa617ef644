// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # es6dot-syntax
//!
//! Tokenizer and recursive-descent parser for a small subset of
//! ECMAScript 2015.
//!
//! ## Overview
//!
//! Source text goes through two stages:
//! - the [`lexer`] scans it once into tokens using an ordered rule table
//! - the [`parser`] walks the tokens with a three-token window and builds
//!   [`ast`] nodes
//!
//! No semantic analysis happens here. The first malformed construct stops
//! the pipeline with an [`Error`].
//!
//! ## Quick Start
//!
//! ```rust
//! use es6dot_syntax::ast::{Expression, Statement};
//!
//! let program = es6dot_syntax::parse("x = 5").unwrap();
//! let Statement::Assignment(assign) = &program[0] else { panic!() };
//! assert_eq!(assign.value, Expression::Number(5.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod error;
pub mod lexer;
#[cfg(feature = "async")]
pub mod loader;
pub mod parser;

pub use ast::Program;
pub use error::{Error, LexError, ParseError, Result};
pub use lexer::tokenize;

use parser::Parser;

/// Tokenizes and parses `source` into a program.
pub fn parse(source: &str) -> Result<Program> {
    let tokens = tokenize(source)?;
    let program = Parser::new(tokens).parse_program()?;
    Ok(program)
}

/// Parses many independent sources, keeping input order in the results.
///
/// Runs on the rayon thread pool when the `parallel` feature is enabled.
pub fn parse_all<S>(sources: &[S]) -> Vec<Result<Program>>
where
    S: AsRef<str> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        sources.par_iter().map(|s| parse(s.as_ref())).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        sources.iter().map(|s| parse(s.as_ref())).collect()
    }
}
