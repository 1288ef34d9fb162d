use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use balloon_placement::{
    compute_placement, notched_outline, path_data, DockPriorities, Point, Rect, Side, Size,
};
use std::hint::black_box;

struct Scenario {
    name: &'static str,
    own: Size,
    flow: Rect,
    area: Rect,
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "fits_first_try",
        own: Size {
            width: 180.0,
            height: 64.0,
        },
        flow: Rect {
            x: 400.0,
            y: 300.0,
            width: 40.0,
            height: 24.0,
        },
        area: Rect {
            x: 0.0,
            y: 0.0,
            width: 1920.0,
            height: 1080.0,
        },
    },
    Scenario {
        name: "needs_correction",
        own: Size {
            width: 180.0,
            height: 64.0,
        },
        flow: Rect {
            x: 1850.0,
            y: 40.0,
            width: 60.0,
            height: 24.0,
        },
        area: Rect {
            x: 0.0,
            y: 0.0,
            width: 1920.0,
            height: 1080.0,
        },
    },
    Scenario {
        name: "nothing_fits",
        own: Size {
            width: 900.0,
            height: 700.0,
        },
        flow: Rect {
            x: 100.0,
            y: 100.0,
            width: 100.0,
            height: 100.0,
        },
        area: Rect {
            x: 0.0,
            y: 0.0,
            width: 640.0,
            height: 480.0,
        },
    },
];

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");
    let priorities = DockPriorities::default();
    for scenario in SCENARIOS {
        group.bench_with_input(
            BenchmarkId::from_parameter(scenario.name),
            scenario,
            |b, s| {
                b.iter(|| {
                    let placement = compute_placement(
                        black_box(s.own),
                        Size::default(),
                        black_box(s.flow),
                        black_box(s.area),
                        &priorities,
                        12.0,
                    );
                    black_box(placement);
                });
            },
        );
    }
    group.finish();
}

fn bench_outline(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline");
    let body = Rect::new(12.0, 12.0, 180.0, 64.0);
    let apex = Point::new(100.0, 0.0);
    for side in [Side::Top, Side::Bottom, Side::Left, Side::Right] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{side:?}")),
            &side,
            |b, &side| {
                b.iter(|| {
                    let commands = notched_outline(black_box(body), side, black_box(apex), 12.0);
                    let data = path_data(&commands);
                    black_box(data.len());
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_placement, bench_outline
);
criterion_main!(benches);
