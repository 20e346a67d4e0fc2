//! Test fixtures for creating repository layouts
//!
//! A `RepoFixture` is a temporary checkout with a `k8s/` directory holding
//! one directory per solution, plus optional settings and template files.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Template rendering the base build step and one step per extra config
pub const SIMPLE_TEMPLATE: &str = concat!(
    "steps:\n",
    "- id: Build {{ solution }}\n",
    "  name: gcr.io/cloud-builders/docker\n",
    "  dir: k8s\n",
    "{%- for extra_config in extra_configs %}\n",
    "- id: Verify {{ solution }} ({{ extra_config.name }})\n",
    "  env:\n",
    "  {%- for env_var in extra_config.env_vars %}\n",
    "  - '{{ env_var }}'\n",
    "  {%- endfor %}\n",
    "{%- endfor %}\n",
);

/// Temporary repository checkout
pub struct RepoFixture {
    pub temp_dir: TempDir,
}

impl RepoFixture {
    /// Create a checkout containing the given solution directories
    pub fn with_solutions(solutions: &[&str]) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("k8s")).expect("Failed to create k8s dir");
        for solution in solutions {
            fs::create_dir_all(temp_dir.path().join("k8s").join(solution))
                .expect("Failed to create solution dir");
        }
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the generated config of `solution`
    pub fn config_path(&self, solution: &str) -> PathBuf {
        self.path()
            .join("k8s")
            .join(".cloudbuild")
            .join(format!("{}.yaml", solution))
    }

    /// Write `relative` under the checkout, creating parent directories
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Write `.cloudbuild-gen.yaml`
    pub fn write_settings(&self, content: &str) -> PathBuf {
        self.write_file(".cloudbuild-gen.yaml", content)
    }

    pub fn read_config(&self, solution: &str) -> String {
        fs::read_to_string(self.config_path(solution)).expect("Failed to read config")
    }
}
