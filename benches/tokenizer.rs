//! Tokenizer strategy benchmarks
//!
//! Compares the four strategies on plain, quoted and escaped lines, and
//! measures batch parsing of a generated file.
//!
//! Run with: cargo bench --bench tokenizer

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rowparse::{ColumnSchema, CsvParser, ParseOptions, Tokenizer, TokenizerStrategy};

const LINES: [(&str, &str); 3] = [
    ("plain", "Alice,23,London,engineer,2024-01-01,true"),
    ("quoted", r#""Smith, Alice",23,"London, UK",engineer,"2024-01-01",true"#),
    ("escaped", r#""Bob ""The Guy""",30,"said ""hi""",,"x",false,"#),
];

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for (name, line) in LINES {
        group.throughput(Throughput::Bytes(line.len() as u64));
        for strategy in TokenizerStrategy::ALL {
            let tokenizer = Tokenizer::new(strategy);
            group.bench_with_input(BenchmarkId::new(strategy.name(), name), line, |b, line| {
                b.iter(|| tokenizer.tokenize(black_box(line)))
            });
        }
    }

    group.finish();
}

fn people(rows: usize) -> String {
    let mut text = String::from("name,age,city\n");
    for i in 0..rows {
        text.push_str(&format!("\"Person {i:06}\",{},\"Town, {}\"\n", 18 + i % 60, i % 97));
    }
    text
}

fn bench_batch_parse(c: &mut Criterion) {
    let text = people(10_000);
    let schema: ColumnSchema = "name:text,age:integer,city:text".parse().unwrap();
    let raw = CsvParser::new(ParseOptions::new()).unwrap();
    let typed = CsvParser::new(ParseOptions::new().with_schema(schema)).unwrap();

    let mut group = c.benchmark_group("parse_str");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("passthrough", |b| b.iter(|| raw.parse_str(black_box(&text))));
    group.bench_function("columns", |b| b.iter(|| typed.parse_str(black_box(&text))));
    group.finish();
}

criterion_group!(benches, bench_strategies, bench_batch_parse);
criterion_main!(benches);
