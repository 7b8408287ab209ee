use std::env;

use anyhow::{Context, Result};
use rand::seq::IteratorRandom;

use chess_rules::{Game, MatchInterface, Square};

/** Plays random pseudo-legal half-moves from the starting position and
 * dumps the final board plus the move log. King safety is not consulted
 * anywhere, so expect games that no arbiter would recognize. */
fn main() -> Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let args: Vec<String> = env::args().collect();
    let half_moves: usize = match args.get(1) {
        Some(raw) => raw.parse().context("half-move count must be a number")?,
        None => 40,
    };

    let mut game = Game::default();
    let mut rng = rand::thread_rng();
    for _ in 0..half_moves {
        let chosen = Square::all()
            .filter(|&square| game.may_select(square))
            .flat_map(|from| {
                game.possible_moves(from)
                    .into_iter()
                    .map(move |to| (from, to))
            })
            .choose(&mut rng);
        match chosen {
            Some((from, to)) => game.execute_move(from, to)?,
            None => {
                println!("{} has no moves left", game.current_player());
                break;
            }
        }
    }

    println!("{}", game.board());
    println!("--- {} half-moves, {} to move ---", game.move_history().len(), game.current_player());
    for record in game.move_history() {
        println!("{record}");
    }
    Ok(())
}
