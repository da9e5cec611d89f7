use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use gambit_chess::engines::engine_negamax::NegamaxEngine;
use gambit_chess::engines::engine_trait::Engine;
use gambit_chess::pieces::piece_team::PieceTeam;
use gambit_chess::utils::fen_parser::{game_from_fen, STARTING_POSITION_FEN};
use gambit_chess::utils::perft::perft;

struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const PERFT_CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTING_POSITION_FEN,
        expected_nodes: &[20, 400],
    },
    BenchCase {
        name: "rook_endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_nodes: &[14, 191],
    },
];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in PERFT_CASES {
        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u32;
            let mut game = game_from_fen(case.fen).expect("benchmark FEN should parse");

            // Correctness guard before benchmarking.
            let warmup = perft(&mut game, depth).expect("perft should run");
            assert_eq!(
                warmup, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);
            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(black_box(&mut game), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(count, *expected);
                        black_box(count)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_negamax(c: &mut Criterion) {
    let mut group = c.benchmark_group("negamax_search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(8));
    group.sample_size(10);

    // Few pieces keep the exhaustive tree small enough to sample.
    let fen = "7k/6pp/8/8/8/8/8/R6K w - - 0 1";
    for depth in [1u32, 2] {
        let mut game = game_from_fen(fen).expect("benchmark FEN should parse");
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("mate_in_one_d{depth}")),
            &depth,
            |b, &depth| {
                b.iter(|| {
                    let mut engine = NegamaxEngine::with_depth(PieceTeam::Light, depth);
                    let chosen = engine
                        .choose_move(black_box(&mut game))
                        .expect("search should find a move");
                    black_box(chosen)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(search_benches, bench_perft, bench_negamax);
criterion_main!(search_benches);
