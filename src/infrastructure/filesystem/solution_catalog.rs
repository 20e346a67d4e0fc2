use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::common::error::CloudBuildError;
use crate::common::result::CloudBuildResult;

/// Directory containing one subdirectory per solution
pub const K8S_DIR: &str = "k8s";

/// List the solutions under `k8s_dir`, sorted by name.
///
/// Every non-hidden immediate subdirectory is a solution; hidden ones such
/// as `.cloudbuild` are skipped.
pub fn discover(k8s_dir: &Path) -> CloudBuildResult<Vec<String>> {
    if !k8s_dir.is_dir() {
        return Err(CloudBuildError::filesystem_error(
            format!("Solutions directory not found: {}", k8s_dir.display()),
            Some(k8s_dir.to_path_buf()),
        ));
    }

    let mut solutions = Vec::new();
    for entry in WalkDir::new(k8s_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().map(Path::to_path_buf);
            let message = format!("Failed to list {}: {}", k8s_dir.display(), e);
            match e.into_io_error() {
                Some(io_error) => {
                    CloudBuildError::filesystem_error_with_source(message, path, io_error)
                }
                None => CloudBuildError::filesystem_error(message, path),
            }
        })?;

        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') {
            continue;
        }
        solutions.push(name.into_owned());
    }

    debug!(
        "Discovered {} solutions in {}",
        solutions.len(),
        k8s_dir.display()
    );
    Ok(solutions)
}
