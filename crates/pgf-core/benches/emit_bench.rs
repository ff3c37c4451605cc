use criterion::{criterion_group, criterion_main, Criterion, black_box};
use pgf_core::markup::{axis_open, PlotCommand};
use pgf_core::{AxisOptions, Dataset};

fn gen_dataset(series: usize, samples: usize) -> Dataset {
    let x: Vec<f64> = (0..samples).map(|i| i as f64 * 0.01).collect();
    let mut ys = Vec::with_capacity(series);
    for s in 0..series {
        let phase = s as f64 * 0.5;
        ys.push(x.iter().map(|t| (t + phase).sin()).collect());
    }
    Dataset::from_series(x, ys).expect("rectangular rows")
}

fn bench_markup(c: &mut Criterion) {
    let mut group = c.benchmark_group("markup_fragments");
    for &series in &[4usize, 16, 64] {
        let headers: Vec<String> = (1..=series).map(|i| format!("y{i}")).collect();
        let options = AxisOptions::new();
        group.bench_function(format!("series_{series}"), |b| {
            b.iter(|| {
                let mut doc = axis_open(&options);
                for name in &headers {
                    doc.push_str(&PlotCommand::line("x", name.as_str(), "bench.csv").render());
                }
                black_box(doc);
            });
        });
    }
    group.finish();
}

fn bench_csv(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_delimited");
    for &samples in &[1_000usize, 10_000usize] {
        let data = gen_dataset(3, samples);
        let headers = data.headers();
        group.bench_function(format!("samples_{samples}"), |b| {
            b.iter(|| {
                let mut buf = Vec::with_capacity(samples * 32);
                data.write_delimited(&headers, &mut buf).expect("in-memory write");
                black_box(buf);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_markup, bench_csv);
criterion_main!(benches);
