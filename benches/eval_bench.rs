use criterion::{criterion_group, criterion_main, Criterion, black_box};
use abbot::board::cozy::Position;
use abbot::search::eval::{evaluate, evaluate_positional};

fn bench_eval(c: &mut Criterion) {
    let pos = Position::startpos();
    c.bench_function("evaluate_startpos", |ben| {
        ben.iter(|| black_box(evaluate(black_box(&pos))))
    });
    c.bench_function("evaluate_positional_startpos", |ben| {
        ben.iter(|| black_box(evaluate_positional(black_box(&pos))))
    });
}

criterion_group!(benches, bench_eval);
criterion_main!(benches);
