use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use clash_battle::BattleConfig;
use clash_client::{ClientConfig, DEFAULT_BASE_URL};

/// Creature battle tool server speaking line-delimited JSON on stdin/stdout
#[derive(Parser, Debug, Clone)]
#[command(name = "clash-server")]
#[command(about = "Creature lookup, battle simulation and type matchup tools", long_about = None)]
#[command(version)]
pub struct ServerConfig {
    /// Battle level used in the damage formula
    #[arg(long, env = "CLASH_LEVEL", default_value_t = 50)]
    pub level: u8,

    /// Turn cap for each battle
    #[arg(long, env = "CLASH_MAX_TURNS", default_value_t = 100)]
    pub max_turns: u32,

    /// Seed used when a request does not carry one
    #[arg(long, env = "CLASH_SEED")]
    pub seed: Option<u64>,

    /// PokeAPI root
    #[arg(long, env = "CLASH_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// HTTP timeout in seconds
    #[arg(long, env = "CLASH_TIMEOUT_SECS", default_value_t = 15)]
    pub timeout_secs: u64,

    /// Maximum concurrent HTTP requests
    #[arg(long, env = "CLASH_MAX_CONCURRENT", default_value_t = 8)]
    pub max_concurrent: usize,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, env = "CLASH_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn battle_config(&self) -> Result<BattleConfig> {
        let config = BattleConfig::default()
            .with_level(self.level)
            .with_max_turns(self.max_turns);
        config.validate().context("Invalid battle settings")?;
        Ok(config)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_base_url(self.base_url.as_str())
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_max_concurrent_requests(self.max_concurrent)
    }
}
