mod actions;
mod args;
mod config;
mod db;
mod error;
#[cfg(test)]
mod tests;

use std::process;

use args::parser::CliArgs;
use clap::Parser;
use config::Settings;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli_args = CliArgs::parse();
    init_logging(cli_args.verbose);

    let settings = match Settings::load_from_current_dir() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error reading config file, {}", e);
            process::exit(1);
        }
    };
    tracing::debug!(url = %settings.database.redacted_url(), "using database");

    let db_url = settings.database.connection_url();
    if let Err(e) = actions::handler::handle_commands(&db_url, cli_args).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("usercrud={}", level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
