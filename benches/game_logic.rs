use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{GameConfig, GameSession, OccupancyMap, Snake, Spawner};
use tui_snake::types::{Command, Direction, Point};

fn bench_step(c: &mut Criterion) {
    let base = GameSession::new(&GameConfig::default().with_seed(12345));

    c.bench_function("session_step", |b| {
        b.iter_batched(
            || {
                let mut s = base.clone();
                s.set_obstacles(Vec::new());
                s.set_fruit(Point::new(1, 1));
                s.apply_command(Command::MoveRight);
                s
            },
            |mut s| {
                for _ in 0..10 {
                    black_box(s.step());
                }
                s
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_spawn(c: &mut Criterion) {
    let field = GameConfig::default().field();
    let mut spawner = Spawner::new(12345);
    let snake = Snake::new(field.center());
    let obstacles: Vec<Point> = spawner.obstacles(field, 5);

    c.bench_function("spawn_pickup", |b| {
        b.iter(|| black_box(spawner.spawn(field, &snake, &obstacles)))
    });
}

fn bench_spawn_crowded(c: &mut Criterion) {
    let field = GameConfig::default().field();
    let mut spawner = Spawner::new(12345);
    // Fill all but the last interior row with the snake.
    let (x0, x1) = field.interior_x();
    let (y0, y1) = field.interior_y();
    let body: Vec<Point> = (y0..y1)
        .flat_map(|y| (x0..=x1).map(move |x| Point::new(x, y)))
        .collect();
    let snake = Snake::from_segments(body, Direction::Left).unwrap_or_else(|| Snake::new(field.center()));

    c.bench_function("spawn_pickup_crowded", |b| {
        b.iter(|| black_box(spawner.spawn(field, &snake, &[])))
    });
}

fn bench_occupancy_rebuild(c: &mut Criterion) {
    let session = GameSession::new(&GameConfig::default().with_seed(12345));
    let mut map = OccupancyMap::new(session.field());

    c.bench_function("occupancy_rebuild", |b| {
        b.iter(|| {
            map.rebuild(black_box(&session));
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_spawn,
    bench_spawn_crowded,
    bench_occupancy_rebuild
);
criterion_main!(benches);
