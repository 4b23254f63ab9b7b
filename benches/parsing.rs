//! Benchmarks for fichepack parsing, ingestion and lookup.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- blocks`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use fichepack::config::FicheConfig;
use fichepack::core::output::{to_blocks, to_csv};
use fichepack::core::{FicheStore, OutputConfig, ingest, lookup};
use fichepack::parser::{InputKind, Parser, RawUnit};
use fichepack::parsers::{JsonLinesParser, TextParser};
use fichepack::phone::canonicalize;

// =============================================================================
// Test Data Generators
// =============================================================================

fn phone(i: usize) -> String {
    let rest = format!("{:08}", i % 100_000_000);
    match i % 4 {
        0 => format!("06{rest}"),
        1 => format!("07 {} {} {} {}", &rest[0..2], &rest[2..4], &rest[4..6], &rest[6..8]),
        2 => format!("+33 6 {} {} {} {}", &rest[0..2], &rest[2..4], &rest[4..6], &rest[6..8]),
        _ => format!("00336{rest}"),
    }
}

fn generate_blocks(count: usize) -> String {
    let mut out = String::with_capacity(count * 80);
    for i in 0..count {
        out.push_str(&format!(
            "Nom: dupont{i}\nPrénom: jean\nMobile: {}\nVille: paris\n-----\n",
            phone(i)
        ));
    }
    out
}

fn generate_lines(count: usize) -> String {
    (0..count)
        .map(|i| match i % 3 {
            0 => format!("Dupont{i};Jean;{}\n", phone(i)),
            1 => format!("Martin{i} Luc: {}\n", phone(i).replace(' ', "")),
            _ => format!("Durand{i} Anne|{}\n", phone(i).replace(' ', "")),
        })
        .collect()
}

fn generate_jsonl(count: usize) -> String {
    (0..count)
        .map(|i| {
            format!(
                "{{\"nom\": \"Dupont{i}\", \"prenom\": \"Jean\", \"telephone\": \"{}\"}}\n",
                phone(i)
            )
        })
        .collect()
}

fn filled_store(count: usize) -> FicheStore {
    let mut store = FicheStore::new();
    let units = [RawUnit::new("bench.txt", InputKind::Text, generate_blocks(count))];
    ingest(&mut store, &units, &FicheConfig::default());
    store
}

// =============================================================================
// Phone Benchmarks
// =============================================================================

fn bench_canonicalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonicalize");
    let inputs: Vec<String> = (0..1_000).map(phone).collect();

    group.throughput(Throughput::Elements(inputs.len() as u64));
    group.bench_function("mixed_shapes", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(canonicalize(black_box(input)));
            }
        });
    });
    group.finish();
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_blocks_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("blocks_parsing");
    let parser = TextParser::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let content = generate_blocks(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| black_box(parser.parse_str(black_box(content))));
        });
    }
    group.finish();
}

fn bench_lines_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines_parsing");
    let parser = TextParser::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let content = generate_lines(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| black_box(parser.parse_str(black_box(content))));
        });
    }
    group.finish();
}

fn bench_jsonl_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("jsonl_parsing");
    let parser = JsonLinesParser::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let content = generate_jsonl(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| black_box(parser.parse_str(black_box(content))));
        });
    }
    group.finish();
}

// =============================================================================
// Lookup Benchmarks
// =============================================================================

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    for size in [1_000_usize, 10_000, 100_000] {
        let store = filled_store(size);
        let query = phone(size / 2);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| black_box(lookup(store, black_box(&query), 10)));
        });
    }
    group.finish();
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output_csv(c: &mut Criterion) {
    let mut group = c.benchmark_group("output_csv");
    let config = OutputConfig::default();

    for size in [100_usize, 1_000, 10_000] {
        let store = filled_store(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| black_box(to_csv(black_box(store.head(size)), &config).unwrap()));
        });
    }
    group.finish();
}

fn bench_output_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("output_blocks");

    for size in [100_usize, 1_000, 10_000] {
        let store = filled_store(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| black_box(to_blocks(black_box(store.head(size)))));
        });
    }
    group.finish();
}

// =============================================================================
// End-to-End Pipeline Benchmark
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let config = FicheConfig::default();
    let output_config = OutputConfig::default();

    for size in [1_000_usize, 10_000] {
        let units = vec![
            RawUnit::new("blocks.txt", InputKind::Text, generate_blocks(size)),
            RawUnit::new("lines.txt", InputKind::Text, generate_lines(size)),
            RawUnit::new("contacts.jsonl", InputKind::JsonLines, generate_jsonl(size)),
        ];
        group.throughput(Throughput::Elements(3 * size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &units, |b, units| {
            b.iter(|| {
                // ingest -> lookup -> export
                let mut store = FicheStore::new();
                ingest(&mut store, black_box(units), &config);
                black_box(lookup(&store, "0612345678", config.lookup_limit));
                let csv = to_csv(store.head(config.export_size), &output_config).unwrap();
                black_box(csv)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_canonicalize,
    bench_blocks_parsing,
    bench_lines_parsing,
    bench_jsonl_parsing,
    bench_lookup,
    bench_output_csv,
    bench_output_blocks,
    bench_full_pipeline,
);

criterion_main!(benches);
