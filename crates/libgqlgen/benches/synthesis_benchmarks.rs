use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgqlgen::operation::DocumentBuilder;
use libgqlgen::operation::SelectionSetSynthesizer;
use libgqlgen::operation::SynthesisOptions;
use libgqlgen::schema::SchemaBuilder;

/// A schema of `num_types` object types where each type references the next
/// (wrapping around), plus a self-reference and a list of the first type.
fn ring_schema(num_types: usize) -> String {
    let mut schema = String::new();
    for idx in 0..num_types {
        let next = (idx + 1) % num_types;
        schema.push_str(&format!(
            "type Type{idx} {{\n  id: ID!\n  label: String\n  next: Type{next}\n  \
            again: Type{idx}\n  firsts: [Type0!]!\n}}\n",
        ));
    }
    schema
}

// ─── Group 1: Schema Loading ─────────────────────────────

fn schema_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_load");

    for num_types in [10, 100, 500] {
        let schema = ring_schema(num_types);
        group.throughput(Throughput::Bytes(schema.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_types),
            &schema,
            |b, schema| {
                b.iter(|| {
                    let graph = SchemaBuilder::new()
                        .load_str(None, schema)
                        .map(|builder| builder.build());
                    black_box(graph)
                })
            },
        );
    }

    group.finish();
}

// ─── Group 2: Selection Set Synthesis ────────────────────

fn selection_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection_set");

    for num_types in [3, 6, 9] {
        let Ok(graph) = SchemaBuilder::new()
            .load_str(None, &ring_schema(num_types))
            .map(|builder| builder.build()) else {
            panic!("ring schema of {num_types} types failed to build");
        };
        let options = SynthesisOptions::new();

        group.bench_function(BenchmarkId::new("ring", num_types), |b| {
            b.iter(|| {
                let synthesizer = SelectionSetSynthesizer::new(&graph, &options);
                black_box(synthesizer.synthesize(&"Type0".into()))
            })
        });
    }

    group.finish();
}

// ─── Group 3: Full Documents ─────────────────────────────

fn document(c: &mut Criterion) {
    let mut group = c.benchmark_group("document");

    let Ok(graph) = SchemaBuilder::new()
        .load_str(None, &ring_schema(5))
        .map(|builder| builder.build()) else {
        panic!("ring schema failed to build");
    };

    group.bench_function("query_with_arguments", |b| {
        b.iter(|| {
            let document = DocumentBuilder::query(&graph)
                .root_field("type0")
                .argument("id", "abc")
                .argument("tags", vec!["a", "b\nc"])
                .selection("Type0")
                .build();
            black_box(document.map(|doc| doc.to_transport_json()))
        })
    });

    group.finish();
}

// ─── Criterion Entrypoint ────────────────────────────────

criterion_group!(benches, schema_load, selection_set, document);
criterion_main!(benches);
