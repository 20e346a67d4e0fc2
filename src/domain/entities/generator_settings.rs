use super::extra_config::ExtraConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Default settings file name, looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = ".cloudbuild-gen.yaml";

/// Contents of the `.cloudbuild-gen.yaml` settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Template overriding the packaged one, relative to the settings file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,

    /// Solutions that must not have a config
    #[serde(default)]
    pub skip: Vec<String>,

    /// Extra verify steps per solution
    #[serde(default)]
    pub extra_configs: BTreeMap<String, Vec<ExtraConfig>>,
}

impl GeneratorSettings {
    /// Extra verify steps configured for `solution`
    pub fn extra_configs_for(&self, solution: &str) -> Vec<ExtraConfig> {
        self.extra_configs
            .get(solution)
            .cloned()
            .unwrap_or_default()
    }

    /// Whether `solution` is on the skip list
    pub fn is_skipped(&self, solution: &str) -> bool {
        self.skip.iter().any(|s| s == solution)
    }
}
