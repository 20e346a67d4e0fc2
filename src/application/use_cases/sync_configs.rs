use serde::Serialize;
use tracing::{info, warn};

use crate::application::services::config_service::ConfigService;
use crate::common::result::CloudBuildResult;
use crate::domain::entities::cloudbuild_config::CLOUDBUILD_DIR;
use crate::infrastructure::filesystem::config_file;

/// Sync configuration
#[derive(Debug, Clone, Default)]
pub struct SyncConfigsConfig {
    /// Only compare configs instead of rewriting them
    pub verify_only: bool,
}

/// Outcome of a sync run, solution names in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub saved: Vec<String>,
    pub verified: Vec<String>,
    pub removed: Vec<String>,
    pub mismatched: Vec<String>,
}

impl SyncReport {
    /// Whether every config checked in verify-only mode matched
    pub fn is_clean(&self) -> bool {
        self.mismatched.is_empty()
    }
}

/// Brings the configs of every discovered solution in line with the settings
///
/// Skipped solutions lose their config; all others get theirs saved. With
/// `verify_only` nothing is written: configs are verified, and a leftover
/// config of a skipped solution counts as a mismatch. Stops at the first error.
pub struct SyncConfigsUseCase {
    config: SyncConfigsConfig,
}

impl SyncConfigsUseCase {
    pub fn new(config: SyncConfigsConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, service: &ConfigService) -> CloudBuildResult<SyncReport> {
        let solutions = service.discover_solutions()?;
        let mut report = SyncReport::default();

        if !self.config.verify_only {
            config_file::ensure_dir(&service.root().join(CLOUDBUILD_DIR))?;
        }

        for solution in solutions {
            let cloudbuild = service.config_for(&solution);

            if service.settings().is_skipped(&solution) {
                if !cloudbuild.exists() {
                    continue;
                }
                if self.config.verify_only {
                    warn!(
                        "Config for skipped solution {} should not exist: {}",
                        solution,
                        cloudbuild.path().display()
                    );
                    report.mismatched.push(solution);
                } else {
                    cloudbuild.remove()?;
                    report.removed.push(solution);
                }
                continue;
            }

            if self.config.verify_only {
                if cloudbuild.verify()? {
                    report.verified.push(solution);
                } else {
                    warn!(
                        "Config for {} is out of date: {}",
                        solution,
                        cloudbuild.path().display()
                    );
                    report.mismatched.push(solution);
                }
            } else {
                cloudbuild.save()?;
                report.saved.push(solution);
            }
        }

        info!(
            "Sync finished: {} saved, {} verified, {} removed, {} mismatched",
            report.saved.len(),
            report.verified.len(),
            report.removed.len(),
            report.mismatched.len()
        );
        Ok(report)
    }
}
