pub mod cli;
pub mod toml_config;

use crate::core::{ClientSeedSettings, StylesheetSettings};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::{ClientsSection, StylesheetSection};

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

pub const DEFAULT_THEME_PATH: &str = "temp_untitled_ui/react-main/styles/theme.css";
pub const DEFAULT_DESIGN_SYSTEM_PATH: &str = "src/styles/design-system.css";
pub const DEFAULT_STYLESHEET_OUTPUT: &str = "src/styles/globals.css";
pub const DEFAULT_CLIENTS_OUTPUT: &str = "src/infrastructure/database/seeds/clients_data.json";
pub const DEFAULT_DELIMITER: &str = ",";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "theme-etl")]
#[command(about = "Merge themed stylesheets and build client seed data")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    /// Run extract and transform only, write nothing
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Merge theme.css and design-system.css into one layered stylesheet
    MergeCss {
        #[arg(long)]
        theme: Option<String>,
        #[arg(long)]
        design_system: Option<String>,
        #[arg(long)]
        output: Option<String>,
    },
    /// Convert a client spreadsheet export (CSV) into a JSON seed file
    SeedClients {
        #[arg(long)]
        input: Option<String>,
        #[arg(long)]
        output: Option<String>,
        #[arg(long)]
        delimiter: Option<String>,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_toml(&self) -> Result<toml_config::TomlConfig> {
        match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path);
                toml_config::TomlConfig::from_file(path)
            }
            None => Ok(toml_config::TomlConfig::default()),
        }
    }
}

/// 優先順序: 命令列 > TOML > 預設值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetJob {
    pub theme_path: String,
    pub design_system_path: String,
    pub output_path: String,
}

impl StylesheetJob {
    pub fn resolve(cli: StylesheetSection, file: StylesheetSection) -> Self {
        Self {
            theme_path: pick(cli.theme_path, file.theme_path, DEFAULT_THEME_PATH),
            design_system_path: pick(
                cli.design_system_path,
                file.design_system_path,
                DEFAULT_DESIGN_SYSTEM_PATH,
            ),
            output_path: pick(cli.output_path, file.output_path, DEFAULT_STYLESHEET_OUTPUT),
        }
    }
}

impl StylesheetSettings for StylesheetJob {
    fn theme_path(&self) -> &str {
        &self.theme_path
    }

    fn design_system_path(&self) -> &str {
        &self.design_system_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for StylesheetJob {
    fn validate(&self) -> Result<()> {
        validation::validate_path("stylesheet.theme_path", &self.theme_path)?;
        validation::validate_path("stylesheet.design_system_path", &self.design_system_path)?;
        validation::validate_path("stylesheet.output_path", &self.output_path)?;
        validation::validate_distinct_paths(
            "stylesheet.output_path",
            &self.theme_path,
            &self.output_path,
        )?;
        validation::validate_distinct_paths(
            "stylesheet.output_path",
            &self.design_system_path,
            &self.output_path,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSeedJob {
    pub input_path: String,
    pub output_path: String,
    pub delimiter: u8,
}

impl ClientSeedJob {
    pub fn resolve(cli: ClientsSection, file: ClientsSection) -> Result<Self> {
        let input_path = cli.input_path.or(file.input_path);
        let input_path = validation::validate_required_field("clients.input_path", &input_path)?;
        let delimiter = pick(cli.delimiter, file.delimiter, DEFAULT_DELIMITER);

        Ok(Self {
            input_path: input_path.clone(),
            output_path: pick(cli.output_path, file.output_path, DEFAULT_CLIENTS_OUTPUT),
            delimiter: validation::parse_delimiter("clients.delimiter", &delimiter)?,
        })
    }
}

impl ClientSeedSettings for ClientSeedJob {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn delimiter(&self) -> u8 {
        self.delimiter
    }
}

impl Validate for ClientSeedJob {
    fn validate(&self) -> Result<()> {
        validation::validate_path("clients.input_path", &self.input_path)?;
        validation::validate_path("clients.output_path", &self.output_path)?;
        validation::validate_distinct_paths("clients.output_path", &self.input_path, &self.output_path)
    }
}

fn pick(cli: Option<String>, file: Option<String>, default: &str) -> String {
    cli.or(file).unwrap_or_else(|| default.to_string())
}
