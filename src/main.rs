use std::process;
use clap::Parser;

use newsportal::cli::Cli;

fn main() {
    // An optional .env supplies NEWSPORTAL_* overrides.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        tracing::debug!(code = e.error_code(), "Command failed");
        eprintln!("Error: {}", e);
        process::exit(if e.is_user_error() { 2 } else { 1 });
    }
}
