pub mod generate;
pub mod list;
pub mod remove;
pub mod save;
pub mod sync;
pub mod verify;

pub use generate::*;
pub use list::*;
pub use remove::*;
pub use save::*;
pub use sync::*;
pub use verify::*;

use std::path::PathBuf;

use crate::application::services::config_service::ConfigService;
use crate::common::result::{CloudBuildResult, OptionExt};
use crate::domain::entities::cloudbuild_config::CloudBuildConfig;

/// Build the configs for `solutions`, honoring an `--output` override
///
/// `--output` names a single file, so it is rejected unless exactly one
/// solution was given.
pub fn resolve_configs(
    service: &ConfigService,
    solutions: &[String],
    output: Option<&PathBuf>,
) -> CloudBuildResult<Vec<CloudBuildConfig>> {
    match output {
        Some(output) => {
            let solution = (solutions.len() == 1)
                .then(|| &solutions[0])
                .ok_or_validation_error("output", "--output requires exactly one solution")?;
            Ok(vec![service.config_for(solution).with_path(output)])
        }
        None => Ok(solutions.iter().map(|s| service.config_for(s)).collect()),
    }
}
