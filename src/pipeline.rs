use anyhow::{Context, Result};
use colored::Colorize;
use log::{error, info};
use std::io::{self, BufRead, Write};

use crate::cli::Settings;
use crate::client::build_client;
use crate::config::{ApiConfig, Credentials};
use crate::entity::EntityType;
use crate::export::{export_csv, ExportOutcome};
use crate::fetch::{fetch, Fetched};
use crate::flatten::{flatten, Table};
use crate::menu::{prompt_choice, MenuChoice};
use crate::request::RequestSpec;

/// One invocation: pick an entity, then fetch, flatten and export it.
pub async fn run(settings: &Settings) -> Result<()> {
    run_with_menu(settings, io::stdin().lock(), io::stdout()).await
}

/// Same as [`run`], with the menu reading from `input` and writing to `output`.
/// Quitting returns before the config file or credentials are touched.
pub async fn run_with_menu<R: BufRead, W: Write>(
    settings: &Settings,
    input: R,
    output: W,
) -> Result<()> {
    let entity = match settings.entity {
        Some(entity) => entity,
        None => match prompt_choice(input, output)? {
            MenuChoice::Export(entity) => entity,
            MenuChoice::Quit => return Ok(()),
        },
    };

    let config = ApiConfig::load(&settings.config_path)?;
    let credentials = Credentials::from_env()?;

    export_entity(settings, &config, &credentials, entity).await?;
    Ok(())
}

pub async fn export_entity(
    settings: &Settings,
    config: &ApiConfig,
    credentials: &Credentials,
    entity: EntityType,
) -> Result<ExportOutcome> {
    let spec = RequestSpec::new(config, credentials, entity)?;
    let client = build_client(settings)?;

    let table = match fetch(&client, &spec, settings.verbose).await {
        Ok(Fetched::Data(raw)) => flatten(entity, Some(&raw)),
        Ok(Fetched::Empty) => {
            println!("{}", format!("No {} data returned by the API.", entity).yellow());
            Table::default()
        }
        Err(e) => {
            error!("Fetching {} failed: {}", entity, e);
            eprintln!("{} {}", "Request failed:".red().bold(), e);
            Table::default()
        }
    };

    let path = settings.output_path(entity);
    let outcome = export_csv(&table, &path)
        .with_context(|| format!("Failed to export {} to {}", entity, path.display()))?;

    match &outcome {
        ExportOutcome::Written { path, rows } => {
            info!("Exported {} {} rows", rows, entity);
            println!(
                "{}",
                format!("Data exported successfully to {}", path.display()).green()
            );
        }
        ExportOutcome::NothingToExport => println!("{}", "No data to export.".yellow()),
    }
    Ok(outcome)
}

// ============================================================================
// Tests
// ============================================================================
