use clap::Parser;

use crate::models::config::ShieldConfig;
use crate::models::constants::{DEFAULT_SHIP_ENERGY, MAX_STRENGTH};

/// Starship shield control console
#[derive(Parser, Debug)]
#[command(name = "shields")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Initial ship energy reserve
    #[arg(short, long, env = "SHIELDS_SHIP_ENERGY", default_value_t = DEFAULT_SHIP_ENERGY)]
    pub energy: i64,

    /// Maximum shield strength
    #[arg(short, long, env = "SHIELDS_MAX_STRENGTH", default_value_t = MAX_STRENGTH)]
    pub max_strength: i64,

    /// Seed for the drill random number generator
    #[arg(short, long, default_value_t = 0)]
    pub seed: u64,

    /// Print `status` as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn shield_config(&self) -> ShieldConfig {
        ShieldConfig {
            max_strength: self.max_strength,
            initial_ship_energy: self.energy,
        }
    }
}
