use anyhow::Result;
use colored::Colorize;

use crate::domain::entities::cloudbuild_config::CloudBuildConfig;

/// Handler for the remove command
pub struct RemoveCommand {
    pub configs: Vec<CloudBuildConfig>,
    pub verbose: bool,
}

impl RemoveCommand {
    pub fn new(configs: Vec<CloudBuildConfig>, verbose: bool) -> Self {
        Self { configs, verbose }
    }

    pub fn execute(&self) -> Result<()> {
        for config in &self.configs {
            let existed = config.exists();
            config.remove()?;

            if existed {
                println!(
                    "{} Removed {}",
                    "✓".green().bold(),
                    config.path().display()
                );
            } else if self.verbose {
                println!(
                    "  {} Nothing to remove at {}",
                    "->".blue(),
                    config.path().display()
                );
            }
        }
        Ok(())
    }
}
