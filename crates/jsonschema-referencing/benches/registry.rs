use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use referencing::Registry;
use serde_json::{json, Value};

fn nested_schema(depth: usize) -> Value {
    let mut schema = json!({"type": "string", "$anchor": "leaf"});
    for level in 0..depth {
        schema = json!({
            "$id": format!("level-{level}.json"),
            "properties": {"child": schema},
            "$defs": {"ref": {"$ref": "#/properties/child"}}
        });
    }
    schema
}

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    for depth in [1, 8, 32] {
        let schema = nested_schema(depth);
        group.bench_with_input(BenchmarkId::new("insert", depth), &schema, |b, schema| {
            b.iter_batched(
                || schema.clone(),
                |schema| Registry::new().with_document("http://example.com/root.json", schema),
                BatchSize::SmallInput,
            );
        });

        let registry = Registry::new().with_document("http://example.com/root.json", schema);
        let resolver = registry.resolver("http://example.com/root.json");
        group.bench_with_input(BenchmarkId::new("lookup", depth), &resolver, |b, resolver| {
            b.iter(|| resolver.lookup("level-0.json#leaf").expect("Lookup failed"));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_registry);
criterion_main!(benches);
