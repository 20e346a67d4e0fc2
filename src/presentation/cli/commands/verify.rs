use anyhow::Result;
use colored::Colorize;

use crate::domain::entities::cloudbuild_config::CloudBuildConfig;

/// Handler for the verify command
pub struct VerifyCommand {
    pub configs: Vec<CloudBuildConfig>,
}

impl VerifyCommand {
    pub fn new(configs: Vec<CloudBuildConfig>) -> Self {
        Self { configs }
    }

    /// Fails when any config is missing or out of date
    pub fn execute(&self) -> Result<()> {
        let mut mismatched = 0;

        for config in &self.configs {
            if config.verify()? {
                println!(
                    "{} {} is up to date",
                    "✓".green().bold(),
                    config.solution().bold()
                );
            } else {
                mismatched += 1;
                let reason = if config.exists() {
                    "is out of date"
                } else {
                    "does not exist"
                };
                println!(
                    "{} {}: {} {}",
                    "✗".red().bold(),
                    config.solution().bold(),
                    config.path().display(),
                    reason
                );
            }
        }

        if mismatched > 0 {
            return Err(anyhow::anyhow!(
                "{} of {} configs failed verification. Run `cloudbuild-gen save` to regenerate them.",
                mismatched,
                self.configs.len()
            ));
        }
        Ok(())
    }
}
