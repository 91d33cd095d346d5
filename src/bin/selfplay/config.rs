use std::fs;
use std::path::Path;

use anyhow::Context;
use chess_core::GameConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub max_plies: u32,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            max_plies: 200,
            seed: None,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(p) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(p)
            .with_context(|| format!("reading config {}", p.display()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).with_context(|| format!("parsing config {}", p.display()))
    }
}
