use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_complex::Complex;
use tlcalc::line::RlgcLine;
use tlcalc::sweep::{logspace_hz, sweep_line};
use tlcalc::twoport::TwoPort;

fn bench_line_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_sweep");
    let line = RlgcLine::default();
    let freqs = logspace_hz(1.0e6, 1.0e9, 10_000);
    let z_load = Complex::new(73.0, 42.5);

    group.bench_function(BenchmarkId::new("zin", freqs.len()), |b| {
        b.iter(|| sweep_line(&line, freqs.iter().copied(), black_box(30.0), z_load))
    });

    group.bench_function(BenchmarkId::new("abcd_cascade", freqs.len()), |b| {
        b.iter(|| {
            freqs
                .iter()
                .map(|&f| {
                    let section = line.abcd(f, 10.0);
                    section
                        .cascade(&TwoPort::shunt_admittance(Complex::new(0.0, 0.01)))
                        .cascade(&section)
                        .input_impedance(z_load)
                })
                .collect::<Vec<_>>()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_line_sweep);
criterion_main!(benches);
