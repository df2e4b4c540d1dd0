use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "roulette_config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Fixed seed for replayable runs; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub spins: usize,
    pub straight_bets: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            seed: None,
            spins: 10,
            straight_bets: true,
        }
    }
}

impl SimConfig {
    /// Reads `path` if it exists, defaults otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let config = serde_json::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))?;
            info!("loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(SimConfig::default())
        }
    }

    /// File config with `ROULETTE_SEED` / `ROULETTE_SPINS` applied on top.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::load(CONFIG_FILE)?;
        config.apply_overrides(
            std::env::var("ROULETTE_SEED").ok(),
            std::env::var("ROULETTE_SPINS").ok(),
        )?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, seed: Option<String>, spins: Option<String>) -> Result<()> {
        if let Some(seed) = seed {
            self.seed = Some(
                seed.trim()
                    .parse()
                    .with_context(|| format!("ROULETTE_SEED must be a u64, got {:?}", seed))?,
            );
        }
        if let Some(spins) = spins {
            self.spins = spins
                .trim()
                .parse()
                .with_context(|| format!("ROULETTE_SPINS must be a count, got {:?}", spins))?;
        }
        Ok(())
    }
}
