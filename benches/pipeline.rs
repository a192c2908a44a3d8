//! Benchmarks for the type document pipeline.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ennea::parser::{extract_frontmatter, parse_type_document, segment_sections};
use ennea::{MemorySource, TypeDigit, TypeRegistry};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("content")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

/// The type 9 fixture relabelled as each of the nine types.
fn nine_documents(template: &str) -> MemorySource {
    TypeDigit::all()
        .map(|digit| {
            let source = template.replace("typeNumber: 9", &format!("typeNumber: {}", digit));
            (digit, source)
        })
        .collect()
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    let source = load_fixture("type-9.md");
    let nine = TypeDigit::MAX;

    group.bench_function("extract_frontmatter", |b| {
        b.iter(|| extract_frontmatter(black_box(&source)).unwrap())
    });

    group.bench_function("segment_sections", |b| {
        let body = extract_frontmatter(&source).unwrap().body(&source).to_string();
        b.iter(|| segment_sections(black_box(&body)))
    });

    group.bench_function("parse_type_document", |b| {
        b.iter(|| parse_type_document(nine, black_box(&source)).unwrap())
    });

    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");
    let template = load_fixture("type-9.md");

    group.bench_function("get_all_cold", |b| {
        b.iter_batched(
            || TypeRegistry::new(nine_documents(&template)),
            |registry| registry.get_all(),
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("get_cached", |b| {
        let registry = TypeRegistry::new(nine_documents(&template));
        registry.get_all();
        b.iter(|| registry.get(black_box(TypeDigit::MAX)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_registry);
criterion_main!(benches);
