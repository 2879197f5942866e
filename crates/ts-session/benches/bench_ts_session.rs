use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ts_core::SimplifyResponse;
use ts_session::ViewModel;

fn response_with_removed(count: usize) -> SimplifyResponse {
    let removed: Vec<String> = (0..count).map(|i| format!("Removed sentence {i}, kept for the audit list.")).collect();
    SimplifyResponse::new("Simplified output text.", count as u64 * 40, 24, removed)
}

fn bench_apply_response(c: &mut Criterion) {
    for &count in &[0usize, 100, 10_000] {
        let resp = response_with_removed(count);
        c.bench_function(&format!("apply_response_{count}_removed"), |b| {
            let mut view = ViewModel::default();
            b.iter(|| {
                view.apply_response(black_box(&resp));
                black_box(view.removed.len())
            })
        });
    }
}

fn bench_clear(c: &mut Criterion) {
    let resp = response_with_removed(1_000);
    c.bench_function("apply_then_clear_1000", |b| {
        let mut view = ViewModel::default();
        b.iter(|| {
            view.apply_response(&resp);
            view.clear();
            black_box(view.removed.len())
        })
    });
}

criterion_group!(benches, bench_apply_response, bench_clear);
criterion_main!(benches);
