//! Self-play demo: the negamax engine against the random mover, rendered to
//! the terminal.

use gambit_chess::chess_errors::ChessErrors;
use gambit_chess::engines::engine_negamax::NegamaxEngine;
use gambit_chess::engines::engine_random::RandomEngine;
use gambit_chess::engines::engine_trait::Engine;
use gambit_chess::game::chess_game::ChessGame;
use gambit_chess::pieces::piece_team::PieceTeam;
use gambit_chess::utils::render_game_state::render_game_state;

const MAX_PLIES: usize = 120;

fn main() {
    if let Err(error) = run() {
        eprintln!("game aborted: {:?}", error);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ChessErrors> {
    let mut game = ChessGame::new("negamax", "random")?;
    let mut light = NegamaxEngine::new(PieceTeam::Light);
    let mut dark = RandomEngine::new(PieceTeam::Dark);

    println!("{} vs {}", light.name(), dark.name());
    println!("{}\n", render_game_state(&game));

    for ply in 1..=MAX_PLIES {
        if game.is_game_over()? {
            break;
        }
        let played = match game.current_turn() {
            PieceTeam::Light => {
                let chosen = light.play_one_move(&mut game)?;
                let stats = light.stats();
                println!(
                    "{:3}. light {} ({} moves calculated in {:?})",
                    ply,
                    chosen.to_long_algebraic(),
                    stats.moves_calculated,
                    stats.elapsed
                );
                chosen
            }
            PieceTeam::Dark => {
                let chosen = dark.play_one_move(&mut game)?;
                println!("{:3}. dark  {}", ply, chosen.to_long_algebraic());
                chosen
            }
        };
        if played.captures_piece() {
            println!("{}\n", render_game_state(&game));
        }
    }

    println!("{}\n", render_game_state(&game));
    match game.winner()? {
        Some(team) => println!("winner: {:?}", team),
        None if game.is_game_over()? => println!("drawn by stalemate"),
        None => println!("ply limit reached, no result"),
    }
    Ok(())
}
