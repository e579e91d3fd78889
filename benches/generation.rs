//! Benchmarks for the evolution generation step.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use lexevo::{
    evolve::EvolutionEngine,
    schema::{EvolutionConfig, InputRow},
};

/// Build a synthetic two-language corpus with `rows` samples per language.
fn synthetic_rows(rows: usize) -> Vec<InputRow> {
    let mut out = Vec::with_capacity(rows * 2);
    for i in 0..rows {
        out.push(InputRow::new(
            vec![
                "de".to_string(),
                format!("woord{}", i % 50),
                "huis".to_string(),
            ],
            "Dutch",
        ));
        out.push(InputRow::new(
            vec![
                "the".to_string(),
                format!("word{}", i % 50),
                "house".to_string(),
            ],
            "English",
        ));
    }
    out
}

fn bench_next_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_generation");

    for rows in [10, 100, 1000] {
        let config = EvolutionConfig {
            random_seed: Some(42),
            ..Default::default()
        };

        let mut engine =
            EvolutionEngine::new(synthetic_rows(rows), "Dutch", "English", config).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}rows", rows * 2)),
            &rows,
            |b, _| {
                b.iter(|| {
                    engine.next_generation().unwrap();
                });
            },
        );
    }

    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    c.bench_function("run_50_generations", |b| {
        b.iter(|| {
            let config = EvolutionConfig {
                random_seed: Some(42),
                ..Default::default()
            };
            let mut engine =
                EvolutionEngine::new(synthetic_rows(50), "Dutch", "English", config).unwrap();
            engine.run().unwrap();
        });
    });
}

criterion_group!(benches, bench_next_generation, bench_full_run);
criterion_main!(benches);
