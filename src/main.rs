use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use starship_shields::cli::args::Args;
use starship_shields::io::TerminalIO;
use starship_shields::services::console::Console;
use starship_shields::ShieldController;

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = args.shield_config();
    config.validate().context("invalid shield configuration")?;

    println!("*** SHIELD CONTROL ***");
    println!("TYPE HELP FOR COMMANDS");
    println!();

    let mut console =
        Console::new(ShieldController::with_config(config), args.seed).with_json_status(args.json);
    let mut io = TerminalIO;
    let mut output = TerminalIO;
    console
        .run(&mut io, &mut output)
        .context("shield console terminated")?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
