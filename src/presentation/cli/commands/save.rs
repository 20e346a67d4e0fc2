use anyhow::Result;
use colored::Colorize;

use crate::domain::entities::cloudbuild_config::CloudBuildConfig;

/// Handler for the save command
pub struct SaveCommand {
    pub configs: Vec<CloudBuildConfig>,
}

impl SaveCommand {
    pub fn new(configs: Vec<CloudBuildConfig>) -> Self {
        Self { configs }
    }

    pub fn execute(&self) -> Result<()> {
        for config in &self.configs {
            config.save()?;
            println!(
                "{} Saved {} to {}",
                "✓".green().bold(),
                config.solution().bold(),
                config.path().display()
            );
        }
        Ok(())
    }
}
