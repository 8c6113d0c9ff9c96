use criterion::{black_box, criterion_group, criterion_main, Criterion};
use typetable::{from_str, infer, table_from_str};

/// A wide, flat document: many keys, no nesting.
fn wide_document(fields: usize) -> String {
    let entries: Vec<String> = (0..fields)
        .map(|i| format!(r#""field_{}": {}"#, i, i))
        .collect();
    format!("{{{}}}", entries.join(","))
}

/// A deeply nested document: one key per level.
fn deep_document(depth: usize) -> String {
    let mut doc = r#"{"leaf": 1}"#.to_string();
    for i in 0..depth {
        doc = format!(r#"{{"level_{}": {}}}"#, i, doc);
    }
    doc
}

/// A realistic mixed document with object arrays and primitives.
fn mixed_document() -> String {
    r#"{
        "id": 42,
        "name": "inventory",
        "active": true,
        "tags": ["warehouse", "eu-west"],
        "location": {
            "address": {"street": "Main St", "number": 7},
            "coordinates": [52.3, 4.9]
        },
        "items": [
            {"sku": "A-1", "price": 9.99, "stock": {"count": 3, "reserved": 1}},
            {"sku": "B-2", "price": 19.99, "stock": {"count": 0, "reserved": 0}}
        ]
    }"#
    .to_string()
}

fn benchmark_infer_wide(c: &mut Criterion) {
    let doc = wide_document(500);
    let value = from_str(&doc).unwrap();

    c.bench_function("infer_wide_500_fields", |b| {
        b.iter(|| infer(black_box(&value)).unwrap());
    });
}

fn benchmark_infer_deep(c: &mut Criterion) {
    let doc = deep_document(100);
    let value = from_str(&doc).unwrap();

    c.bench_function("infer_deep_100_levels", |b| {
        b.iter(|| infer(black_box(&value)).unwrap());
    });
}

fn benchmark_flatten_deep(c: &mut Criterion) {
    let doc = deep_document(100);
    let tree = infer(&from_str(&doc).unwrap()).unwrap();

    c.bench_function("flatten_deep_100_levels", |b| {
        b.iter(|| black_box(&tree).flatten());
    });
}

fn benchmark_full_pipeline(c: &mut Criterion) {
    let doc = mixed_document();

    c.bench_function("table_from_str_mixed", |b| {
        b.iter(|| table_from_str(black_box(&doc)).unwrap());
    });
}

criterion_group!(
    benches,
    benchmark_infer_wide,
    benchmark_infer_deep,
    benchmark_flatten_deep,
    benchmark_full_pipeline
);
criterion_main!(benches);
