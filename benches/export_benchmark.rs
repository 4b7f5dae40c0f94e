//! Benchmarks for cvforge export performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks render synthetic CVs of increasing length.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cvforge::{Cv, CvData, Experience, ExportFormat, SkillGroup};

/// Creates a synthetic CV with the given number of experience entries.
fn create_test_cv(entries: usize) -> Cv {
    let mut data = CvData::default();
    data.personal.first_name = "Bench".into();
    data.personal.last_name = "Mark".into();
    data.personal.email = "bench@example.com".into();
    data.summary = "Engineer focused on measurable, repeatable performance work.".into();
    data.skills = vec![SkillGroup {
        category: "Languages".into(),
        items: vec!["Rust".into(), "C".into(), "Zig".into()],
    }];
    data.experience = (0..entries)
        .map(|i| Experience {
            company: format!("Company {}", i),
            title: "Senior Engineer".into(),
            location: "Remote".into(),
            start_date: "2019-04".into(),
            end_date: "2023-11".into(),
            description: "• Cut p99 latency by 40%\n• Led a team of five\n• Shipped the v2 storage engine"
                .into(),
            ..Default::default()
        })
        .collect();
    Cv::new("Benchmark CV", data)
}

/// Benchmark PDF rendering at various lengths.
fn bench_pdf_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("pdf_export");

    for entries in [1, 10, 50].iter() {
        let cv = create_test_cv(*entries);

        group.bench_function(format!("{}_entries", entries), |b| {
            b.iter(|| cvforge::generate_pdf(black_box(&cv)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark DOCX rendering at various lengths.
fn bench_docx_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("docx_export");

    for entries in [1, 10, 50].iter() {
        let cv = create_test_cv(*entries);

        group.bench_function(format!("{}_entries", entries), |b| {
            b.iter(|| cvforge::generate_docx(black_box(&cv)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark rendering every format in parallel.
fn bench_export_all(c: &mut Criterion) {
    let cv = create_test_cv(10);
    let forge = cvforge::CvForge::new();

    c.bench_function("export_all_formats", |b| {
        b.iter(|| forge.export_all(black_box(&cv), &ExportFormat::ALL).unwrap());
    });
}

criterion_group!(benches, bench_pdf_export, bench_docx_export, bench_export_all);
criterion_main!(benches);
