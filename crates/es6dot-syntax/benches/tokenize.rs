// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

use criterion::{Criterion, criterion_group, criterion_main};
use es6dot_syntax::lexer::Lexer;
use es6dot_syntax::{parse, tokenize};
use std::hint::black_box;

fn sample_source() -> String {
    (0..200)
        .map(|i| format!("var v{i} = {i}\nfunction f{i}(a, b) {{ return a + b }}\nv{i} = x + {i}.5\n"))
        .collect()
}

// ---------------------------------------------------------------------------
// Tokenizer
// ---------------------------------------------------------------------------

fn bench_tokenize(c: &mut Criterion) {
    let source = sample_source();

    c.bench_function("tokenize_fresh_rules", |b| {
        b.iter(|| tokenize(black_box(&source)));
    });

    c.bench_function("tokenize_reused_lexer", |b| {
        let lexer = Lexer::new();
        b.iter(|| lexer.tokenize(black_box(&source)));
    });
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

fn bench_parse(c: &mut Criterion) {
    let source = sample_source();

    c.bench_function("parse_program", |b| {
        b.iter(|| parse(black_box(&source)));
    });
}

criterion_group!(benches, bench_tokenize, bench_parse);
criterion_main!(benches);
