//! Generation benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tailor_codegen::{CodeGenerator, CodegenOptions};
use tailor_core::{ComponentConfig, ComponentKind};

fn generate_button(c: &mut Criterion) {
    let generator = CodeGenerator::new(CodegenOptions::default()).expect("templates register");
    let config = ComponentConfig::default();
    c.bench_function("generate_button", |b| {
        b.iter(|| generator.generate(black_box(ComponentKind::Button), black_box(&config)))
    });
}

fn generate_catalog(c: &mut Criterion) {
    let generator = CodeGenerator::new(CodegenOptions::default()).expect("templates register");
    let config = ComponentConfig::default();
    c.bench_function("generate_catalog", |b| {
        b.iter(|| {
            for kind in ComponentKind::CATALOG {
                black_box(generator.generate(kind, &config));
            }
        })
    });
}

criterion_group!(benches, generate_button, generate_catalog);
criterion_main!(benches);
