use criterion::{criterion_group, criterion_main, Criterion};
use cribforge::config::SolverConfig;
use cribforge::key::SubstitutionKey;
use cribforge::solver::{complete_mapping, find_alignments, Solver};
use std::hint::black_box;

const PLAINTEXT: &str = "It was the best of times, it was the worst of times, it was the age of \
wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of \
incredulity, it was the season of Light, it was the season of Darkness, it was the spring \
of hope, it was the winter of despair, we had everything before us, we had nothing before us.";

fn setup_cipher() -> String {
    let key = SubstitutionKey::random(&mut fastrand::Rng::with_seed(1859));
    key.encipher(PLAINTEXT)
}

fn bench_solver(c: &mut Criterion) {
    let cipher = setup_cipher();
    let solver = Solver::new(SolverConfig::default()).expect("default config");

    c.bench_function("find_alignments", |b| {
        b.iter(|| find_alignments(black_box(&cipher), black_box("times")))
    });

    let alignments = find_alignments(&cipher, "times");
    c.bench_function("complete_mapping", |b| {
        b.iter(|| complete_mapping(black_box(&alignments[0].mapping), black_box(&cipher)))
    });

    c.bench_function("solve", |b| {
        b.iter(|| solver.solve(black_box(&cipher), black_box("the")))
    });

    c.bench_function("survey", |b| {
        b.iter(|| solver.survey(black_box(&cipher), black_box("the")))
    });
}

criterion_group!(benches, bench_solver);
criterion_main!(benches);
