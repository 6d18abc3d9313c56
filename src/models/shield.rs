//! Shield controller
//!
//! A bounded energy buffer fed from the ship's reserve. Strength stays within
//! `[MIN_STRENGTH, max_strength]` for every transfer, and transfers never
//! create or destroy energy.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::config::ShieldConfig;
use super::constants::MIN_STRENGTH;

/// Snapshot of everything an outside reporter can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShieldStatus {
    pub up: bool,
    pub strength: i64,
    pub max_strength: i64,
    pub ship_energy: i64,
}

/// The ship's deflector shield and the reserve that powers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShieldController {
    up: bool,
    strength: i64,
    ship_energy: i64,
    max_strength: i64,
}

impl Default for ShieldController {
    fn default() -> Self {
        Self::with_config(ShieldConfig::default())
    }
}

impl ShieldController {
    /// Creates a lowered, empty shield backed by `initial_ship_energy`.
    pub fn new(initial_ship_energy: i64) -> Self {
        Self::with_config(ShieldConfig::with_ship_energy(initial_ship_energy))
    }

    /// Creates a lowered, empty shield from an explicit configuration.
    ///
    /// Out-of-range values are pulled back into bounds: a negative reserve
    /// becomes zero and a ceiling below the floor becomes the floor.
    pub fn with_config(config: ShieldConfig) -> Self {
        if let Err(err) = config.validate() {
            warn!(%err, "clamping shield configuration");
        }
        ShieldController {
            up: false,
            strength: MIN_STRENGTH,
            ship_energy: config.initial_ship_energy.max(0),
            max_strength: config.max_strength.max(MIN_STRENGTH),
        }
    }

    pub fn raise_shield(&mut self) {
        trace!("shield raised");
        self.up = true;
    }

    pub fn lower_shield(&mut self) {
        trace!("shield lowered");
        self.up = false;
    }

    pub fn is_raised(&self) -> bool {
        self.up
    }

    pub fn strength(&self) -> i64 {
        self.strength
    }

    pub fn ship_energy(&self) -> i64 {
        self.ship_energy
    }

    pub fn max_strength(&self) -> i64 {
        self.max_strength
    }

    /// Moves energy from the ship reserve into the shield.
    ///
    /// Non-positive amounts and amounts larger than the reserve are ignored
    /// outright; there is no partial transfer. When the shield would overflow
    /// its ceiling, only the headroom `max_strength - strength` is drawn. A
    /// shield already above its ceiling (after negative damage) is pulled back
    /// down and the excess returns to the reserve.
    pub fn transfer_energy(&mut self, amount: i64) {
        if amount <= 0 {
            debug!(amount, "ignoring non-positive shield transfer");
            return;
        }
        if amount > self.ship_energy {
            debug!(
                amount,
                available = self.ship_energy,
                "ignoring shield transfer beyond ship reserve"
            );
            return;
        }

        let candidate = self.strength.saturating_add(amount);
        if candidate > self.max_strength {
            // Cost comes from the pre-transfer strength, not the request.
            let drawn = self.max_strength - self.strength;
            debug!(amount, drawn, "shield transfer clamped at maximum");
            self.ship_energy = self.ship_energy.saturating_sub(drawn);
            self.strength = self.max_strength;
        } else {
            trace!(amount, "shield transfer");
            self.ship_energy -= amount;
            self.strength = candidate;
        }
    }

    /// Absorbs `damage` into the shield, never dropping below the floor.
    ///
    /// The sign is not checked, so negative damage adds strength.
    pub fn apply_damage(&mut self, damage: i64) {
        self.strength = self.strength.saturating_sub(damage).max(MIN_STRENGTH);
        trace!(damage, remaining = self.strength, "shield absorbed damage");
    }

    pub fn status(&self) -> ShieldStatus {
        ShieldStatus {
            up: self.up,
            strength: self.strength,
            max_strength: self.max_strength,
            ship_energy: self.ship_energy,
        }
    }
}
