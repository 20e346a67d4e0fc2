use std::path::{Path, PathBuf};

use tracing::debug;

use crate::common::result::CloudBuildResult;
use crate::domain::entities::cloudbuild_config::CloudBuildConfig;
use crate::domain::entities::generator_settings::GeneratorSettings;
use crate::infrastructure::filesystem::settings_store::{self, LoadedSettings};
use crate::infrastructure::filesystem::solution_catalog::{self, K8S_DIR};

/// Builds [`CloudBuildConfig`]s for solutions of one repository checkout
///
/// Applies the settings file (extra configs, template override) and an
/// optional command-line template override, which wins over the settings.
#[derive(Debug, Clone, Default)]
pub struct ConfigService {
    /// Repository root; empty means the working directory
    root: PathBuf,

    settings: GeneratorSettings,

    template: Option<String>,
}

impl ConfigService {
    /// Create a service rooted at `root` with default settings
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Create a service from loaded settings, reading their template override
    pub fn from_settings(root: impl Into<PathBuf>, loaded: LoadedSettings) -> CloudBuildResult<Self> {
        let template = loaded.template_contents()?;
        Ok(Self {
            root: root.into(),
            settings: loaded.settings,
            template,
        })
    }

    /// Use the template stored at `path` instead of any configured one
    pub fn with_template_file(mut self, path: &Path) -> CloudBuildResult<Self> {
        debug!("Using template override {}", path.display());
        self.template = Some(settings_store::read_template(path)?);
        Ok(self)
    }

    /// Use `template` instead of any configured one
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Config of `solution` at its default location under the root
    pub fn config_for(&self, solution: &str) -> CloudBuildConfig {
        let mut config = CloudBuildConfig::new(solution)
            .with_path(self.root.join(CloudBuildConfig::default_path(solution)))
            .with_extra_configs(self.settings.extra_configs_for(solution));
        if let Some(template) = &self.template {
            config.set_template(template.clone());
        }
        config
    }

    /// Solutions found under `<root>/k8s`
    pub fn discover_solutions(&self) -> CloudBuildResult<Vec<String>> {
        solution_catalog::discover(&self.root.join(K8S_DIR))
    }
}
