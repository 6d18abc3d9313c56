use crate::io::OutputWriter;
use crate::models::shield::ShieldStatus;

pub struct ShieldPresenter;

impl ShieldPresenter {
    pub fn show_status(status: &ShieldStatus, output: &mut dyn OutputWriter) {
        let state = if status.up { "UP" } else { "DOWN" };
        output.writeln(&format!("{:<16}{}", "SHIELDS", state));
        output.writeln(&format!(
            "{:<16}{} / {}",
            "STRENGTH", status.strength, status.max_strength
        ));
        output.writeln(&format!("{:<16}{}", "SHIP ENERGY", status.ship_energy));
    }

    pub fn show_hit(hit: i64, remaining: i64, output: &mut dyn OutputWriter) {
        output.writeln(&format!("{} UNIT HIT ON SHIELDS", hit));
        output.writeln(&format!("   ({} LEFT)", remaining));
    }

    pub fn show_depleted(output: &mut dyn OutputWriter) {
        output.writeln("*** SHIELDS DEPLETED ***");
    }
}
