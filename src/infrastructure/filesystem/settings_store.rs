use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::common::error::CloudBuildError;
use crate::common::result::{CloudBuildResult, ResultExt};
use crate::domain::entities::generator_settings::GeneratorSettings;

/// Settings loaded together with the location they came from
#[derive(Debug, Clone, Default)]
pub struct LoadedSettings {
    pub settings: GeneratorSettings,

    /// Directory used to resolve relative paths inside the settings
    pub base_dir: PathBuf,
}

impl LoadedSettings {
    /// Read the template override, if the settings name one
    pub fn template_contents(&self) -> CloudBuildResult<Option<String>> {
        match &self.settings.template {
            Some(template) => read_template(&self.base_dir.join(template)).map(Some),
            None => Ok(None),
        }
    }
}

/// Load settings from `path`; the file must exist
pub fn load(path: &Path) -> CloudBuildResult<LoadedSettings> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CloudBuildError::config_error(
            format!("Settings file not found: {}", path.display()),
            Some(path.to_path_buf()),
        ),
        _ => CloudBuildError::filesystem_error_with_source(
            format!("Failed to read settings file {}", path.display()),
            Some(path.to_path_buf()),
            e,
        ),
    })?;

    let settings: GeneratorSettings = serde_yaml::from_str(&content).with_config_error(
        format!("Invalid settings file {}", path.display()),
        Some(path.to_path_buf()),
    )?;
    debug!(
        "Loaded settings from {}: {} skipped, {} with extra configs",
        path.display(),
        settings.skip.len(),
        settings.extra_configs.len()
    );

    Ok(LoadedSettings {
        settings,
        base_dir: base_dir_of(path),
    })
}

/// Load settings from `path`, or fall back to defaults when it is absent
pub fn load_or_default(path: &Path) -> CloudBuildResult<LoadedSettings> {
    if path.exists() {
        load(path)
    } else {
        debug!("No settings file at {}, using defaults", path.display());
        Ok(LoadedSettings {
            settings: GeneratorSettings::default(),
            base_dir: base_dir_of(path),
        })
    }
}

/// Read a template file
pub fn read_template(path: &Path) -> CloudBuildResult<String> {
    fs::read_to_string(path).with_filesystem_error(
        format!("Failed to read template {}", path.display()),
        Some(path.to_path_buf()),
    )
}

fn base_dir_of(path: &Path) -> PathBuf {
    path.parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}
