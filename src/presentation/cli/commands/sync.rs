use anyhow::Result;
use colored::Colorize;

use crate::application::services::config_service::ConfigService;
use crate::application::use_cases::sync_configs::{SyncConfigsConfig, SyncConfigsUseCase};

/// Handler for the sync command
pub struct SyncCommand {
    pub service: ConfigService,
    pub verify_only: bool,
    pub verbose: bool,
}

impl SyncCommand {
    pub fn new(service: ConfigService, verify_only: bool, verbose: bool) -> Self {
        Self {
            service,
            verify_only,
            verbose,
        }
    }

    pub fn execute(&self) -> Result<()> {
        let use_case = SyncConfigsUseCase::new(SyncConfigsConfig {
            verify_only: self.verify_only,
        });

        if self.verify_only {
            println!("{} Verifying CloudBuild configs...", "::".blue().bold());
        } else {
            println!("{} Generating CloudBuild configs...", "::".blue().bold());
        }

        let report = use_case.execute(&self.service)?;

        if self.verbose {
            for solution in &report.saved {
                println!("  {} saved {}", "->".blue(), solution);
            }
            for solution in &report.verified {
                println!("  {} verified {}", "->".blue(), solution);
            }
        }
        for solution in &report.removed {
            println!("  {} removed {} (skipped)", "->".blue(), solution);
        }

        if !report.is_clean() {
            println!("{} Out of date configs:", "⚠".yellow().bold());
            for solution in &report.mismatched {
                println!("  {}", solution.red());
            }
            return Err(anyhow::anyhow!(
                "{} configs are out of date. Run `cloudbuild-gen sync` to regenerate them.",
                report.mismatched.len()
            ));
        }

        println!(
            "{} Done: {} saved, {} verified, {} removed",
            "✓".green().bold(),
            report.saved.len(),
            report.verified.len(),
            report.removed.len()
        );
        Ok(())
    }
}
