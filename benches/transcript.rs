// benches/transcript.rs
//
// The console transcript is never trimmed; make sure appending and
// re-rendering a long session stays cheap.
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use jd_panel::{
    api::LatestFile,
    commands::{self, Intent, Outcome},
    config::state::PanelState,
    core::{Transcript, format_size},
    view::PanelView,
};

fn long_transcript(n: usize) -> Transcript {
    let mut t = Transcript::new();
    for i in 0..n {
        t.push(format!("采集完成! 共找到 {i} 个订单 ({} 商品)。", i * 3));
    }
    t
}

fn bench_transcript(c: &mut Criterion) {
    c.bench_function("transcript_push_10k", |b| {
        b.iter(|| black_box(long_transcript(10_000).len()))
    });

    let t = long_transcript(10_000);
    c.bench_function("transcript_render_10k", |b| {
        b.iter(|| black_box(t.render().len()))
    });
}

fn bench_projection(c: &mut Criterion) {
    let mut state = PanelState::new();
    commands::begin(&mut state, Intent::Init { current_year: 2026 });
    commands::apply(&mut state, Outcome::LatestFile(Ok(LatestFile {
        name: Some("orders.xlsx".into()),
        size: Some(3_456_789),
        path: Some("/downloads/orders.xlsx".into()),
        ..Default::default()
    })));

    c.bench_function("panel_view_project", |b| {
        b.iter(|| black_box(PanelView::project(black_box(&state))))
    });

    c.bench_function("format_size", |b| {
        b.iter(|| black_box(format_size(black_box(Some(9_876_543_210)))))
    });
}

criterion_group!(benches, bench_transcript, bench_projection);
criterion_main!(benches);
