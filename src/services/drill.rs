use rand::Rng;
use tracing::info;

use crate::io::OutputWriter;
use crate::models::constants::{MAX_VOLLEYS, MIN_STRENGTH};
use crate::models::shield::ShieldController;
use crate::ui::presenters::ShieldPresenter;

/// Outcome of a damage drill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrillReport {
    pub volleys_fired: u32,
    /// Sum of every hit rolled.
    pub total_damage: i64,
    /// Strength actually destroyed. Hits past the floor are not absorbed.
    pub absorbed: i64,
    pub depleted: bool,
}

/// Fires up to `volleys` random hits of `0..=max_hit` at the shield.
/// Stops early once the shield is at its floor. At most `MAX_VOLLEYS` are
/// fired per drill.
pub fn fire_volleys<R: Rng>(
    shield: &mut ShieldController,
    rng: &mut R,
    volleys: u32,
    max_hit: i64,
    output: &mut dyn OutputWriter,
) -> DrillReport {
    let max_hit = max_hit.max(0);
    let volleys = volleys.min(MAX_VOLLEYS);
    let mut report = DrillReport::default();

    for _ in 0..volleys {
        if shield.strength() <= MIN_STRENGTH {
            break;
        }
        let hit = rng.gen_range(0..=max_hit);
        let before = shield.strength();
        shield.apply_damage(hit);

        report.volleys_fired += 1;
        report.total_damage = report.total_damage.saturating_add(hit);
        report.absorbed = report.absorbed.saturating_add(before - shield.strength());
        ShieldPresenter::show_hit(hit, shield.strength(), output);
    }

    report.depleted = shield.strength() <= MIN_STRENGTH;
    if report.depleted {
        ShieldPresenter::show_depleted(output);
    }

    info!(
        volleys = report.volleys_fired,
        total_damage = report.total_damage,
        absorbed = report.absorbed,
        depleted = report.depleted,
        "damage drill complete"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::test_utils::MockOutput;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn charged(strength: i64) -> ShieldController {
        let mut shield = ShieldController::default();
        shield.transfer_energy(strength);
        shield
    }

    #[test]
    fn absorbed_matches_strength_lost() {
        let mut shield = charged(10_000);
        let mut rng = StdRng::seed_from_u64(7);
        let mut output = MockOutput::new();

        let report = fire_volleys(&mut shield, &mut rng, 5, 1000, &mut output);

        assert_eq!(report.volleys_fired, 5);
        assert_eq!(report.absorbed, 10_000 - shield.strength());
        assert_eq!(report.total_damage, report.absorbed);
        assert!(!report.depleted);
        assert_eq!(output.messages.len(), 10);
    }

    #[test]
    fn stops_when_shield_is_depleted() {
        let mut shield = charged(50);
        let mut rng = StdRng::seed_from_u64(1);
        let mut output = MockOutput::new();

        let report = fire_volleys(&mut shield, &mut rng, 1000, 500, &mut output);

        assert!(report.depleted);
        assert_eq!(shield.strength(), 0);
        assert!(report.volleys_fired < 1000);
        assert_eq!(report.absorbed, 50);
        assert!(report.total_damage >= report.absorbed);
        assert!(output.contains("SHIELDS DEPLETED"));
    }

    #[test]
    fn empty_shield_fires_nothing() {
        let mut shield = ShieldController::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut output = MockOutput::new();

        let report = fire_volleys(&mut shield, &mut rng, 3, 500, &mut output);

        assert_eq!(report.volleys_fired, 0);
        assert!(report.depleted);
    }

    #[test]
    fn negative_max_hit_fires_zero_hits() {
        let mut shield = charged(100);
        let mut rng = StdRng::seed_from_u64(3);
        let mut output = MockOutput::new();

        let report = fire_volleys(&mut shield, &mut rng, 4, -10, &mut output);

        assert_eq!(report.volleys_fired, 4);
        assert_eq!(report.total_damage, 0);
        assert_eq!(shield.strength(), 100);
    }

    #[test]
    fn volley_count_is_capped() {
        let mut shield = charged(100);
        let mut rng = StdRng::seed_from_u64(3);
        let mut output = MockOutput::new();

        let report = fire_volleys(&mut shield, &mut rng, 4_000_000_000, 0, &mut output);

        assert_eq!(report.volleys_fired, MAX_VOLLEYS);
        assert_eq!(output.messages.len(), 2 * MAX_VOLLEYS as usize);
    }

    #[test]
    fn huge_hits_on_overcharged_shield_saturate_totals() {
        let mut shield = ShieldController::default();
        shield.apply_damage(i64::MIN);
        let mut rng = StdRng::seed_from_u64(11);
        let mut output = MockOutput::new();

        let report = fire_volleys(&mut shield, &mut rng, 3, i64::MAX, &mut output);

        assert!(report.total_damage >= report.absorbed);
        assert_eq!(report.absorbed, i64::MAX - shield.strength());
        assert!(report.volleys_fired <= 3);
    }

    #[test]
    fn same_seed_same_volleys() {
        let run = |seed| {
            let mut shield = charged(10_000);
            let mut rng = StdRng::seed_from_u64(seed);
            let mut output = MockOutput::new();
            fire_volleys(&mut shield, &mut rng, 8, 1500, &mut output);
            output.messages
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn drill_does_not_touch_reserve() {
        let mut shield = charged(2000);
        let reserve = shield.ship_energy();
        let mut rng = StdRng::seed_from_u64(9);
        let mut output = MockOutput::new();

        fire_volleys(&mut shield, &mut rng, 10, 800, &mut output);

        assert_eq!(shield.ship_energy(), reserve);
    }
}
