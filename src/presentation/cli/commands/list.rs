use anyhow::Result;
use colored::Colorize;

use crate::application::services::config_service::ConfigService;
use crate::application::use_cases::status_check::{ConfigState, ConfigStatus, StatusCheckUseCase};
use crate::presentation::cli::OutputFormat;

/// Handler for the list command
pub struct ListCommand {
    pub service: ConfigService,
    pub output_format: OutputFormat,
}

impl ListCommand {
    pub fn new(service: ConfigService, output_format: OutputFormat) -> Self {
        Self {
            service,
            output_format,
        }
    }

    pub fn execute(&self) -> Result<()> {
        let statuses = StatusCheckUseCase::new().execute(&self.service)?;

        match self.output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&statuses)?),
            OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&statuses)?),
            OutputFormat::Text => self.print_text(&statuses),
        }
        Ok(())
    }

    fn print_text(&self, statuses: &[ConfigStatus]) {
        for status in statuses {
            let state_text = match status.state {
                ConfigState::Current => "current".green(),
                ConfigState::Stale => "stale".yellow(),
                ConfigState::Missing => "missing".red(),
                ConfigState::Skipped => "skipped".dimmed(),
            };
            println!(
                "{}: {} ({})",
                status.solution.bold(),
                state_text,
                status.path.display()
            );
        }
    }
}
