// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Asynchronous source loading.
//!
//! Files are read with tokio's async I/O; tokenizing and parsing stay
//! synchronous.
//!
//! # Example
//!
//! ```ignore
//! use es6dot_syntax::loader;
//!
//! #[tokio::main]
//! async fn main() {
//!     let program = loader::parse_file("script.js").await.unwrap();
//!     println!("{} statements", program.len());
//! }
//! ```

use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::{Error, Program, Result, parse};

/// Reads a file asynchronously.
pub async fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .await
        .map_err(|e| Error::Io(format!("Failed to read {}: {}", path.display(), e)))
}

/// Reads and parses a file.
pub async fn parse_file(path: impl AsRef<Path>) -> Result<Program> {
    let path = path.as_ref();
    let source = read_source(path).await?;
    debug!(path = %path.display(), bytes = source.len(), "loaded source");
    parse(&source)
}

/// Reads and parses several files concurrently.
///
/// Results are returned in the order of `paths`.
pub async fn parse_files(paths: &[impl AsRef<Path>]) -> Vec<Result<Program>> {
    let futures: Vec<_> = paths.iter().map(parse_file).collect();

    futures::future::join_all(futures).await
}
