use serde::Serialize;
use std::path::PathBuf;

use crate::application::services::config_service::ConfigService;
use crate::common::result::CloudBuildResult;

/// State of a solution's generated config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigState {
    /// File matches the rendered config
    Current,
    /// File exists but differs, or belongs to a skipped solution
    Stale,
    /// No file yet
    Missing,
    /// On the skip list, with no config left behind
    Skipped,
}

/// Status of a single solution
#[derive(Debug, Clone, Serialize)]
pub struct ConfigStatus {
    pub solution: String,
    pub path: PathBuf,
    pub state: ConfigState,
}

/// Checks every discovered solution without modifying anything
pub struct StatusCheckUseCase;

impl StatusCheckUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, service: &ConfigService) -> CloudBuildResult<Vec<ConfigStatus>> {
        service
            .discover_solutions()?
            .into_iter()
            .map(|solution| -> CloudBuildResult<ConfigStatus> {
                let cloudbuild = service.config_for(&solution);
                let state = if service.settings().is_skipped(&solution) {
                    // A leftover config is what `sync` would remove
                    if cloudbuild.exists() {
                        ConfigState::Stale
                    } else {
                        ConfigState::Skipped
                    }
                } else if !cloudbuild.exists() {
                    ConfigState::Missing
                } else if cloudbuild.verify()? {
                    ConfigState::Current
                } else {
                    ConfigState::Stale
                };
                Ok(ConfigStatus {
                    path: cloudbuild.path().to_path_buf(),
                    solution,
                    state,
                })
            })
            .collect()
    }
}

impl Default for StatusCheckUseCase {
    fn default() -> Self {
        Self::new()
    }
}
