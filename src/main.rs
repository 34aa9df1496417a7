mod config;
mod console;
mod setup;

use config::ConsoleConfig;
use setup::set_up_tracing;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = ConsoleConfig::from_env();
    set_up_tracing(&config)?;
    tracing::info!("login console started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    console::run(stdin.lock(), stdout.lock(), &config)?;

    tracing::info!("login console closed");
    Ok(())
}
