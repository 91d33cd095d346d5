use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "selfplay", version, about = "Play random legal moves from the starting position")]
pub struct Cli {
    /// YAML config file (falls back to $CHESS_CONFIG_PATH).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// RNG seed; overrides the config file.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many plies; overrides the config file.
    #[arg(long)]
    pub max_plies: Option<u32>,
}
