use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::extra_config::ExtraConfig;
use crate::common::result::CloudBuildResult;
use crate::common::templates::{get_cloudbuild_template, TemplateRenderer};
use crate::infrastructure::filesystem::config_file;

/// Directory holding the generated configs, relative to the repository root
pub const CLOUDBUILD_DIR: &str = "k8s/.cloudbuild";

/// Values exposed to the template
#[derive(Serialize)]
struct RenderContext<'a> {
    solution: &'a str,
    extra_configs: &'a [ExtraConfig],
}

/// CloudBuild config of a single solution
///
/// Holds everything needed to render the config and to compare it with, or
/// write it to, the file at [`CloudBuildConfig::path`]. Rendering is pure;
/// only [`exists`](Self::exists), [`verify`](Self::verify),
/// [`save`](Self::save) and [`remove`](Self::remove) touch the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudBuildConfig {
    solution: String,
    path: PathBuf,
    /// `None` falls back to the packaged template
    template: Option<String>,
    extra_configs: Vec<ExtraConfig>,
}

impl CloudBuildConfig {
    /// Create the config for `solution` at its default location
    pub fn new(solution: impl Into<String>) -> Self {
        let solution = solution.into();
        let path = Self::default_path(&solution);
        Self {
            solution,
            path,
            template: None,
            extra_configs: Vec::new(),
        }
    }

    /// `k8s/.cloudbuild/<solution>.yaml`
    pub fn default_path(solution: &str) -> PathBuf {
        PathBuf::from(format!("{}/{}.yaml", CLOUDBUILD_DIR, solution))
    }

    /// Override the file location
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Override the template source
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Set the extra verify steps
    pub fn with_extra_configs(mut self, extra_configs: Vec<ExtraConfig>) -> Self {
        self.extra_configs = extra_configs;
        self
    }

    pub fn solution(&self) -> &str {
        &self.solution
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }

    /// Template source in effect, the packaged one unless overridden
    pub fn template(&self) -> &str {
        match &self.template {
            Some(template) => template.as_str(),
            None => get_cloudbuild_template(),
        }
    }

    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = Some(template.into());
    }

    pub fn extra_configs(&self) -> &[ExtraConfig] {
        &self.extra_configs
    }

    pub fn set_extra_configs(&mut self, extra_configs: Vec<ExtraConfig>) {
        self.extra_configs = extra_configs;
    }

    pub fn add_extra_config(&mut self, extra_config: ExtraConfig) {
        self.extra_configs.push(extra_config);
    }

    /// Whether a file is present at the config path.
    /// Like [`Path::exists`], a path that cannot be inspected (permission
    /// denied, for instance) reports `false` rather than an error.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Render the config text
    pub fn generate(&self) -> CloudBuildResult<String> {
        let context = RenderContext {
            solution: &self.solution,
            extra_configs: &self.extra_configs,
        };
        TemplateRenderer::new().render(self.template(), context)
    }

    /// Whether the file on disk matches the rendered config byte for byte.
    /// A missing file is reported as `false`.
    pub fn verify(&self) -> CloudBuildResult<bool> {
        let on_disk = match config_file::read_if_exists(&self.path)? {
            Some(contents) => contents,
            None => return Ok(false),
        };

        let verified = on_disk == self.generate()?.into_bytes();
        debug!(
            "Verified {} against {}: {}",
            self.solution,
            self.path.display(),
            verified
        );
        Ok(verified)
    }

    /// Write the rendered config, replacing any previous content
    pub fn save(&self) -> CloudBuildResult<()> {
        let contents = self.generate()?;
        config_file::write(&self.path, &contents)?;
        info!("Saved {} config to {}", self.solution, self.path.display());
        Ok(())
    }

    /// Delete the config file if present
    pub fn remove(&self) -> CloudBuildResult<()> {
        if config_file::remove_if_exists(&self.path)? {
            info!("Removed {} config at {}", self.solution, self.path.display());
        }
        Ok(())
    }
}
