pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::env;
use std::path::PathBuf;
use std::process::exit;
use tracing_subscriber::EnvFilter;

use crate::application::services::config_service::ConfigService;
use crate::domain::entities::cloudbuild_config::CloudBuildConfig;
use crate::domain::entities::generator_settings::DEFAULT_SETTINGS_FILE;
use crate::infrastructure::filesystem::settings_store;

use self::commands::{
    resolve_configs, GenerateCommand, ListCommand, RemoveCommand, SaveCommand, SyncCommand,
    VerifyCommand,
};

/// Output format options for list command
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    Text,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

/// cloudbuild-gen - Generate CloudBuild configs for Kubernetes solutions
#[derive(Parser)]
#[command(name = "cloudbuild-gen")]
#[command(about = "Generate and verify CloudBuild configs for Kubernetes solutions")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Working directory (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<String>,

    /// Settings file (defaults to .cloudbuild-gen.yaml if present)
    #[arg(long, global = true, env = "CLOUDBUILD_GEN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the rendered config of a solution
    Generate {
        /// Solution name
        solution: String,

        /// Template file to render instead of the configured one
        #[arg(short, long)]
        template: Option<PathBuf>,
    },

    /// Write the rendered configs to disk
    Save {
        /// Solution names
        #[arg(required = true)]
        solutions: Vec<String>,

        /// Template file to render instead of the configured one
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Write to this file instead of the default location (single solution only)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that configs on disk match the rendered output
    Verify {
        /// Solution names
        #[arg(required = true)]
        solutions: Vec<String>,

        /// Template file to render instead of the configured one
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Compare against this file instead of the default location (single solution only)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete generated configs
    Remove {
        /// Solution names
        #[arg(required = true)]
        solutions: Vec<String>,

        /// Delete this file instead of the default location (single solution only)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the default config path of a solution
    Path {
        /// Solution name
        solution: String,
    },

    /// List discovered solutions and the state of their configs
    List {
        /// Output format (text, json, yaml)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Generate, or verify, the configs of every solution under k8s/
    Sync {
        /// Only verify; fail if any config is out of date
        #[arg(long)]
        verify_only: bool,
    },
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn run(self) -> anyhow::Result<()> {
        self.init_logging();

        // Set up colored output
        colored::control::set_override(!self.cli.no_color);

        // Change directory if specified
        if let Some(ref dir) = self.cli.directory {
            env::set_current_dir(dir)?;
        }

        // Handle the command
        match self.handle_command() {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    fn init_logging(&self) {
        let default_level = if self.cli.verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    fn handle_command(&self) -> anyhow::Result<()> {
        match &self.cli.command {
            Commands::Generate { solution, template } => {
                let service = self.config_service(template.as_ref())?;
                GenerateCommand::new(service, solution.clone()).execute()
            }
            Commands::Save {
                solutions,
                template,
                output,
            } => {
                let service = self.config_service(template.as_ref())?;
                let configs = resolve_configs(&service, solutions, output.as_ref())?;
                SaveCommand::new(configs).execute()
            }
            Commands::Verify {
                solutions,
                template,
                output,
            } => {
                let service = self.config_service(template.as_ref())?;
                let configs = resolve_configs(&service, solutions, output.as_ref())?;
                VerifyCommand::new(configs).execute()
            }
            Commands::Remove { solutions, output } => {
                let service = self.config_service(None)?;
                let configs = resolve_configs(&service, solutions, output.as_ref())?;
                RemoveCommand::new(configs, self.cli.verbose).execute()
            }
            Commands::Path { solution } => {
                println!("{}", CloudBuildConfig::default_path(solution).display());
                Ok(())
            }
            Commands::List { format } => {
                let service = self.config_service(None)?;
                ListCommand::new(service, format.clone()).execute()
            }
            Commands::Sync { verify_only } => {
                let service = self.config_service(None)?;
                SyncCommand::new(service, *verify_only, self.cli.verbose).execute()
            }
        }
    }

    /// Load settings and build the config service for the working directory
    fn config_service(&self, template: Option<&PathBuf>) -> anyhow::Result<ConfigService> {
        let loaded = match &self.cli.config {
            Some(path) => settings_store::load(path)?,
            None => settings_store::load_or_default(&PathBuf::from(DEFAULT_SETTINGS_FILE))?,
        };

        let service = ConfigService::from_settings(PathBuf::new(), loaded)?;
        match template {
            Some(path) => Ok(service.with_template_file(path)?),
            None => Ok(service),
        }
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}
