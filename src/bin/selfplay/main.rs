mod cli;
mod config;

use std::path::PathBuf;

use chess_core::{Game, GameStatus, Move};
use clap::Parser;
use env_logger::Env;
use log::info;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().filter_or("CHESS_LOG", "info")).init();

    let cli = cli::Cli::parse();
    let cfg_path = cli
        .config
        .or_else(|| std::env::var_os("CHESS_CONFIG_PATH").map(PathBuf::from));
    let cfg = config::Config::load(cfg_path.as_deref())?;

    let seed = cli.seed.or(cfg.seed).unwrap_or_else(rand::random);
    let max_plies = cli.max_plies.unwrap_or(cfg.max_plies);
    info!("seed={seed} max_plies={max_plies}");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::with_config(cfg.game);

    let mut ply = 0u32;
    let status = loop {
        let status = game.status();
        if status.is_over() || ply >= max_plies {
            break status;
        }

        let turn = game.team_turn();
        let mut moves: Vec<Move> = game
            .board()
            .pieces_of(turn)
            .filter_map(|(pos, _)| game.legal_moves(pos))
            .flatten()
            .collect();
        // Hash-set order is not something to seed against.
        moves.sort_unstable();

        let Some(&mv) = moves.choose(&mut rng) else {
            break status;
        };
        game.make_move(mv)?;
        ply += 1;
        info!("ply {ply}: {turn} {mv}\n{}", game.board());
    };

    match status {
        GameStatus::Checkmate(loser) => {
            info!("checkmate after {ply} plies, {} wins", loser.other())
        }
        GameStatus::Stalemate(team) => info!("stalemate after {ply} plies, {team} cannot move"),
        GameStatus::Check(_) | GameStatus::InProgress => info!("stopped after {ply} plies"),
    }
    Ok(())
}
