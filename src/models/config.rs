//! Shield configuration
//!
//! Limits are carried per controller rather than read from globals, so
//! several controllers with different ceilings can coexist.

use serde::{Deserialize, Serialize};

use super::constants::{DEFAULT_SHIP_ENERGY, MAX_STRENGTH, MIN_STRENGTH};
use super::errors::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShieldConfig {
    /// Ceiling applied by energy transfers.
    pub max_strength: i64,
    /// Ship reserve at construction time.
    pub initial_ship_energy: i64,
}

impl Default for ShieldConfig {
    fn default() -> Self {
        ShieldConfig {
            max_strength: MAX_STRENGTH,
            initial_ship_energy: DEFAULT_SHIP_ENERGY,
        }
    }
}

impl ShieldConfig {
    /// Builds a config with the default ceiling and the given reserve.
    pub fn with_ship_energy(initial_ship_energy: i64) -> Self {
        ShieldConfig {
            initial_ship_energy,
            ..Self::default()
        }
    }

    /// Rejects configurations that would break the controller's bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_strength < MIN_STRENGTH {
            return Err(ConfigError::MaxStrengthBelowFloor {
                max_strength: self.max_strength,
                floor: MIN_STRENGTH,
            });
        }
        if self.initial_ship_energy < 0 {
            return Err(ConfigError::NegativeShipEnergy(self.initial_ship_energy));
        }
        Ok(())
    }
}
