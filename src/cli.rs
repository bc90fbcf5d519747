use clap::Parser;
use std::path::PathBuf;

use crate::entity::EntityType;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";

/// Export HR records (contracts, departments, employees) from the API to CSV
///
/// Credentials are read from API_KEY, ACCOUNT_NAME and SANDBOX_NAME, either
/// in the environment or in a `.env` file in the working directory.
///
/// Examples:
///   # Interactive menu
///   hrexport
///
///   # Export employees without the menu
///   hrexport --entity employees
///
///   # Custom config and output directory, print the request
///   hrexport --config prod.json --output-dir /tmp/hr -v
#[derive(Parser, Debug, Clone)]
#[clap(version)]
pub struct Cli {
    /// Path to the JSON file holding URL fragments and field lists
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Directory the CSV file is written to
    #[arg(short = 'o', long = "output-dir", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Export this entity type directly instead of showing the menu
    #[arg(short = 'e', long = "entity", value_enum)]
    pub entity: Option<EntityType>,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long = "timeout")]
    pub timeout: Option<u64>,

    /// Verbose mode: print request details and debug logs
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Run-wide settings, built once at startup and passed to whoever needs them.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub config_path: PathBuf,
    pub output_dir: PathBuf,
    pub entity: Option<EntityType>,
    pub timeout: Option<u64>,
    pub verbose: bool,
}

impl Settings {
    pub fn output_path(&self, entity: EntityType) -> PathBuf {
        self.output_dir.join(entity.csv_file_name())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            entity: None,
            timeout: None,
            verbose: false,
        }
    }
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        Self {
            config_path: cli.config,
            output_dir: cli.output_dir,
            entity: cli.entity,
            timeout: cli.timeout,
            verbose: cli.verbose,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_layout() {
        let cli = Cli::try_parse_from(["hrexport"]).unwrap();
        let settings = Settings::from(cli);
        assert_eq!(settings, Settings::default());
        assert_eq!(
            settings.output_path(EntityType::Employees),
            PathBuf::from("outputs/employees.csv")
        );
    }

    #[test]
    fn parse_all_flags() {
        let cli = Cli::try_parse_from([
            "hrexport",
            "--config",
            "prod.json",
            "-o",
            "/tmp/hr",
            "--entity",
            "departments",
            "--timeout",
            "10",
            "-v",
        ])
        .unwrap();
        let settings = Settings::from(cli);

        assert_eq!(settings.config_path, PathBuf::from("prod.json"));
        assert_eq!(settings.entity, Some(EntityType::Departments));
        assert_eq!(settings.timeout, Some(10));
        assert!(settings.verbose);
        assert_eq!(
            settings.output_path(EntityType::Departments),
            PathBuf::from("/tmp/hr/departments.csv")
        );
    }

    #[test]
    fn reject_unknown_entity() {
        assert!(Cli::try_parse_from(["hrexport", "--entity", "payroll"]).is_err());
    }
}
