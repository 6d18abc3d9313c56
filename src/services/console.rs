//! Shield operator console
//!
//! Reads one command per line and dispatches it to the shield controller.
//! Bad input is reported and the loop carries on; only I/O failures end it.

use std::cmp::Ordering;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::io::{InputReader, OutputWriter};
use crate::models::constants::DEFAULT_MAX_HIT;
use crate::models::errors::{ConsoleError, ConsoleResult};
use crate::models::shield::ShieldController;
use crate::services::drill::fire_volleys;
use crate::ui::presenters::ShieldPresenter;

/// A parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    Transfer(i64),
    Damage(i64),
    Status,
    Json,
    Drill { volleys: u32, max_hit: i64 },
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ConsoleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default().to_ascii_lowercase();

        let command = match name.as_str() {
            "up" => Command::Up,
            "down" => Command::Down,
            "transfer" => Command::Transfer(required(words.next(), "transfer")?.parse()?),
            "damage" => Command::Damage(required(words.next(), "damage")?.parse()?),
            "status" => Command::Status,
            "json" => Command::Json,
            "drill" => {
                let volleys = required(words.next(), "drill")?.parse()?;
                let max_hit = match words.next() {
                    Some(word) => word.parse()?,
                    None => DEFAULT_MAX_HIT,
                };
                Command::Drill { volleys, max_hit }
            }
            "help" | "?" => Command::Help,
            "q" | "quit" => Command::Quit,
            _ => return Err(ConsoleError::UnknownCommand(line.trim().to_string())),
        };
        Ok(command)
    }
}

fn required<'a>(word: Option<&'a str>, command: &'static str) -> ConsoleResult<&'a str> {
    word.ok_or(ConsoleError::MissingArgument { command })
}

/// Interactive front end owning one shield and the drill RNG.
pub struct Console {
    shield: ShieldController,
    rng: StdRng,
    json_status: bool,
}

impl Console {
    pub fn new(shield: ShieldController, seed: u64) -> Self {
        Console {
            shield,
            rng: StdRng::seed_from_u64(seed),
            json_status: false,
        }
    }

    /// Makes `status` print the JSON snapshot instead of the text report.
    pub fn with_json_status(mut self, json_status: bool) -> Self {
        self.json_status = json_status;
        self
    }

    pub fn shield(&self) -> &ShieldController {
        &self.shield
    }

    /// Runs commands until `q` or end of input.
    pub fn run(
        &mut self,
        io: &mut dyn InputReader,
        output: &mut dyn OutputWriter,
    ) -> ConsoleResult<()> {
        while let Some(line) = io.read_line("COMMAND")? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let result = match line.parse::<Command>() {
                Ok(Command::Quit) => {
                    output.writeln("SHIELD CONTROL OFFLINE");
                    break;
                }
                Ok(command) => self.execute(command, output),
                Err(e) => Err(e),
            };

            // Report and keep going, as with any operator typo
            if let Err(e) = result {
                debug!(%e, line, "console command failed");
                output.writeln(&format!("Error: {}", e));
            }
        }
        Ok(())
    }

    /// Applies one command to the shield and reports the outcome.
    pub fn execute(&mut self, command: Command, output: &mut dyn OutputWriter) -> ConsoleResult<()> {
        match command {
            Command::Up => {
                self.shield.raise_shield();
                output.writeln("SHIELDS UP");
            }
            Command::Down => {
                self.shield.lower_shield();
                output.writeln("SHIELDS DOWN");
            }
            Command::Transfer(amount) => {
                let before = self.shield.ship_energy();
                self.shield.transfer_energy(amount);
                let drawn = before - self.shield.ship_energy();
                match drawn.cmp(&0) {
                    Ordering::Equal => output.writeln("NO ENERGY TRANSFERRED"),
                    Ordering::Greater => {
                        output.writeln(&format!("{} UNITS TRANSFERRED TO SHIELDS", drawn))
                    }
                    Ordering::Less => output.writeln(&format!(
                        "{} UNITS RETURNED TO SHIP RESERVE",
                        drawn.unsigned_abs()
                    )),
                }
            }
            Command::Damage(damage) => {
                self.shield.apply_damage(damage);
                ShieldPresenter::show_hit(damage, self.shield.strength(), output);
            }
            Command::Status if !self.json_status => {
                ShieldPresenter::show_status(&self.shield.status(), output);
            }
            Command::Status | Command::Json => {
                output.writeln(&serde_json::to_string(&self.shield.status())?);
            }
            Command::Drill { volleys, max_hit } => {
                fire_volleys(&mut self.shield, &mut self.rng, volleys, max_hit, output);
            }
            Command::Help => Self::print_command_menu(output),
            Command::Quit => {}
        }
        Ok(())
    }

    fn print_command_menu(output: &mut dyn OutputWriter) {
        output.writeln("   UP              = RAISE SHIELDS");
        output.writeln("   DOWN            = LOWER SHIELDS");
        output.writeln("   TRANSFER <N>    = MOVE N UNITS FROM SHIP TO SHIELDS");
        output.writeln("   DAMAGE <N>      = APPLY N UNITS OF DAMAGE");
        output.writeln("   STATUS          = SHIELD STATUS REPORT");
        output.writeln("   JSON            = SHIELD STATUS AS JSON");
        output.writeln("   DRILL <V> [MAX] = FIRE V RANDOM VOLLEYS");
        output.writeln("   Q               = QUIT");
    }
}
