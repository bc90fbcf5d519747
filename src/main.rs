use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use hrexport::{Cli, ConfigError, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::from(Cli::parse());
    init_logging(settings.verbose);

    if let Err(e) = hrexport::run(&settings).await {
        eprintln!("\n{} {:#}\n", "Error:".red().bold(), e);

        match e.downcast_ref::<ConfigError>() {
            Some(ConfigError::Read { .. }) => {
                eprintln!("{}", "💡 Config file not found:".yellow());
                eprintln!("   - Check the path passed with --config");
                eprintln!("   - Paths are relative to the current directory");
            }
            Some(ConfigError::MissingEnv(_)) => {
                eprintln!("{}", "💡 Missing credentials:".yellow());
                eprintln!("   - Set API_KEY, ACCOUNT_NAME and SANDBOX_NAME");
                eprintln!("   - Or put them in a .env file in the current directory");
            }
            Some(ConfigError::MissingKey(_)) => {
                eprintln!("{}", "💡 Incomplete config:".yellow());
                eprintln!("   - Each entity needs <entity>_api_url_end and <entity>_params");
            }
            _ => {}
        }
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "warn,hrexport=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
