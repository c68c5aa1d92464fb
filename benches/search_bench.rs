use criterion::{criterion_group, criterion_main, Criterion, black_box};
use abbot::board::cozy::Position;
use abbot::search::alphabeta::{SearchParams, Searcher};
use abbot::search::eval::EvalMode;
use abbot::Side;

fn bench_search(c: &mut Criterion) {
    for (name, eval) in [("material", EvalMode::Material), ("positional", EvalMode::Positional)] {
        c.bench_function(&format!("search_depth_3_startpos_{name}"), |ben| {
            ben.iter(|| {
                let mut pos = Position::startpos();
                let mut s = Searcher::new(SearchParams { depth: 3, eval });
                let r = s.search(black_box(&mut pos), Side::White);
                black_box(r.nodes)
            })
        });
    }
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
