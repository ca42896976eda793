use amazons::core::GameState;
use amazons::play::{Match, MatchConfig};
use amazons::rules::RulesEngine;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Positions reached after `turns` random turns from the start.
fn corpus(turns: &[u32]) -> Vec<(u32, GameState)> {
    turns
        .iter()
        .map(|&n| {
            let mut game = Match::new(MatchConfig::default().with_seed(42));
            let mut state = GameState::new_game();
            for _ in 0..n {
                if state.is_over() || game.play_turn(&mut state).is_err() {
                    break;
                }
            }
            (n, state)
        })
        .collect()
}

fn bench_legal_moves(c: &mut Criterion) {
    let rules = RulesEngine::new();
    let mut g = c.benchmark_group("legal_moves");
    for (turns, state) in corpus(&[0, 10, 30, 50]) {
        let side = state.side_to_move();
        g.bench_with_input(BenchmarkId::new("count", turns), &state, |b, s| {
            b.iter(|| black_box(rules.legal_moves(black_box(s), side).count()))
        });
        g.bench_with_input(BenchmarkId::new("any", turns), &state, |b, s| {
            b.iter(|| black_box(rules.has_legal_move(black_box(s), side)))
        });
    }
    g.finish();
}

fn bench_random_playout(c: &mut Criterion) {
    c.bench_function("playout/uniform_random", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            let mut state = GameState::new_game();
            let result = Match::new(MatchConfig::default().with_seed(seed)).play(&mut state);
            black_box(result.map(|r| r.turns).unwrap_or(0))
        })
    });
}

criterion_group!(benches, bench_legal_moves, bench_random_playout);
criterion_main!(benches);
