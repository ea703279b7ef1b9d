//! Benchmarks for the snake cube solver.

use std::io;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use snakecube::grid::format_path;
use snakecube::listing::parse_line;
use snakecube::puzzle::{SnakePuzzle, CLASSIC_PUZZLE};
use snakecube::report::{Reporter, Stats};
use snakecube::solution::{Solution, SolutionRecord};
use snakecube::solver::Solver;

/// The first ten runs of the 4x4x4 snake.
const SNAKE_PREFIX_4X4X4: SnakePuzzle<4, 64, 10> = SnakePuzzle::new([2, 3, 3, 3, 1, 3, 1, 3, 1, 1]);

/// Discards everything.
struct Sink;

impl Reporter for Sink {
    fn report_progress(&mut self, _stats: &Stats) -> io::Result<()> {
        Ok(())
    }

    fn report_solution(&mut self, solution: &Solution<'_>) -> io::Result<()> {
        black_box(solution);
        Ok(())
    }
}

/// Keeps the first solution and drops the rest.
#[derive(Default)]
struct First(Option<SolutionRecord>);

impl Reporter for First {
    fn report_progress(&mut self, _stats: &Stats) -> io::Result<()> {
        Ok(())
    }

    fn report_solution(&mut self, solution: &Solution<'_>) -> io::Result<()> {
        self.0.get_or_insert_with(|| SolutionRecord {
            start: solution.start,
            moves: solution.moves.to_vec(),
        });
        Ok(())
    }
}

/// A real 3x3x3 folding, found by solving the classic snake once.
fn classic_sample() -> SolutionRecord {
    let mut solver = Solver::new(&CLASSIC_PUZZLE, First::default()).with_progress_interval(0);
    solver.solve_all().unwrap();
    solver.into_reporter().0.expect("the classic snake has solutions")
}

/// Benchmark the complete 3x3x3 search over every starting cell.
fn bench_solve_classic(c: &mut Criterion) {
    c.bench_function("solve_classic_3x3x3", |b| {
        b.iter(|| {
            let mut solver = Solver::new(black_box(&CLASSIC_PUZZLE), Sink).with_progress_interval(0);
            solver.solve_all().unwrap()
        })
    });
}

/// Benchmark a partial 4x4x4 snake from one corner.
fn bench_solve_4x4x4_corner(c: &mut Criterion) {
    let mut group = c.benchmark_group("snake_4x4x4");
    group.sample_size(10);
    group.bench_function("prefix_from_corner", |b| {
        b.iter(|| {
            let mut solver = Solver::new(&SNAKE_PREFIX_4X4X4, Sink).with_progress_interval(0);
            solver.search_from(black_box(0)).unwrap();
            solver.attempts()
        })
    });
    group.finish();
}

/// Benchmark parsing one listing line.
fn bench_parse_line(c: &mut Criterion) {
    let line = classic_sample().as_solution().to_string();

    c.bench_function("parse_line", |b| b.iter(|| parse_line(black_box(&line))));
}

/// Benchmark replaying a complete folding.
fn bench_replay(c: &mut Criterion) {
    let record = classic_sample();
    assert!(record.as_solution().replay::<3>(&CLASSIC_PUZZLE.moves).is_ok());

    c.bench_function("replay", |b| {
        b.iter(|| {
            black_box(&record)
                .as_solution()
                .replay::<3>(&CLASSIC_PUZZLE.moves)
        })
    });
}

/// Benchmark formatting a folding for display.
fn bench_format_path(c: &mut Criterion) {
    let record = classic_sample();

    c.bench_function("format_path", |b| {
        b.iter(|| format_path::<3, 27>(black_box(&record.as_solution())))
    });
}

criterion_group!(
    benches,
    bench_solve_classic,
    bench_solve_4x4x4_corner,
    bench_parse_line,
    bench_replay,
    bench_format_path
);
criterion_main!(benches);
