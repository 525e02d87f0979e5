use criterion::{criterion_group, criterion_main, Criterion};

use tucants_agent::board::{Board, Color, Position, Tile};
use tucants_agent::evaluator::evaluate;
use tucants_agent::state::GameState;

fn bench_evaluation(c: &mut Criterion) {
    let mut midgame_board = Board::starting();
    midgame_board.set(2, 1, Tile::Empty);
    midgame_board.set(5, 0, Tile::White);
    midgame_board.set(9, 0, Tile::Empty);
    midgame_board.set(6, 1, Tile::Black);

    let states = vec![
        ("startpos", GameState::starting(Color::White)),
        (
            "midgame",
            GameState::new(
                Position { board: midgame_board, score: [1, 2], turn: Color::White },
                Color::White,
            ),
        ),
        (
            "endgame",
            GameState::new(
                Position { board: Board::empty(), score: [6, 5], turn: Color::White },
                Color::White,
            ),
        ),
    ];

    for (name, state) in &states {
        c.bench_function(&format!("eval_{name}"), |b| b.iter(|| evaluate(state)));
    }
}

criterion_group!(benches, bench_evaluation);
criterion_main!(benches);
