//! CloudBuildConfig integration tests
//!
//! Exercise path resolution, rendering and the file operations against real
//! temporary files.

mod common;

use std::fs;
use std::io::Write;
use std::path::Path;

use cloudbuild_gen::{CloudBuildConfig, CloudBuildError, ExtraConfig};
use common::test_fixtures::SIMPLE_TEMPLATE;
use pretty_assertions::assert_eq;
use tempfile::{NamedTempFile, TempDir};

const CLOUDBUILD_CONFIG: &str = concat!(
    "\n",
    "    steps:\n",
    "    - id: Build unknown\n",
    "      name: gcr.io/cloud-builders/docker\n",
    "      dir: k8s\n",
    "    ",
);

const CLOUDBUILD_TEMPLATE: &str = concat!(
    "\n",
    "    steps:\n",
    "    - id: Build {{ solution }}\n",
    "      name: gcr.io/cloud-builders/docker\n",
    "      dir: k8s\n",
    "    ",
);

const EXTRA_STEPS_TEMPLATE: &str = concat!(
    "steps:\n",
    "    - id: Build {{ solution }}\n",
    "      name: gcr.io/cloud-builders/docker\n",
    "      dir: k8s\n",
    "\n",
    "    {%- for extra_config in extra_configs %}\n",
    "\n",
    "    - id: Verify {{ solution }} ({{ extra_config['name'] }})\n",
    "      name: gcr.io/cloud-builders/docker\n",
    "      dir: k8s\n",
    "      env:\n",
    "      {%- for env_var in extra_config['env_vars'] %}\n",
    "      - '{{ env_var }}'\n",
    "      {%- endfor %}\n",
    "\n",
    "    {%- endfor %}",
);

fn public_service_and_ingress() -> ExtraConfig {
    ExtraConfig::new("Public service and ingress")
        .with_env_var("PUBLIC_SERVICE_AND_INGRESS_ENABLED=true")
}

#[test]
fn test_path() {
    let cloudbuild = CloudBuildConfig::new("wordpress");
    assert_eq!(cloudbuild.path(), Path::new("k8s/.cloudbuild/wordpress.yaml"));

    for solution in ["mariadb", "elastic-gke-logging", "x"] {
        let cloudbuild = CloudBuildConfig::new(solution);
        assert_eq!(
            cloudbuild.path().to_str().unwrap(),
            format!("k8s/.cloudbuild/{}.yaml", solution)
        );
    }
}

#[test]
fn test_exists() {
    let file = NamedTempFile::new().unwrap();

    let mut cloudbuild = CloudBuildConfig::new("unknown");
    assert!(!cloudbuild.exists());

    cloudbuild.set_path(file.path());
    assert!(cloudbuild.exists());
}

#[test]
fn test_verify() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CLOUDBUILD_CONFIG.as_bytes()).unwrap();
    file.flush().unwrap();

    let mut cloudbuild = CloudBuildConfig::new("unknown");
    cloudbuild.set_path(file.path());
    assert!(!cloudbuild.verify().unwrap());

    cloudbuild.set_template(CLOUDBUILD_TEMPLATE);
    assert!(cloudbuild.verify().unwrap());
}

#[test]
fn test_verify_detects_different_solution() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CLOUDBUILD_CONFIG.as_bytes()).unwrap();
    file.flush().unwrap();

    let cloudbuild = CloudBuildConfig::new("wordpress")
        .with_path(file.path())
        .with_template(CLOUDBUILD_TEMPLATE);
    assert!(!cloudbuild.verify().unwrap());
}

#[test]
fn test_verify_missing_file_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let cloudbuild = CloudBuildConfig::new("wordpress")
        .with_path(temp_dir.path().join("missing.yaml"))
        .with_template(CLOUDBUILD_TEMPLATE);

    assert!(!cloudbuild.verify().unwrap());
}

#[test]
fn test_verify_unreadable_path_is_filesystem_error() {
    let temp_dir = TempDir::new().unwrap();
    let cloudbuild = CloudBuildConfig::new("wordpress").with_path(temp_dir.path());

    let result = cloudbuild.verify();
    assert!(matches!(result, Err(CloudBuildError::FileSystemError { .. })));
}

#[test]
fn test_remove_directory_is_filesystem_error() {
    let temp_dir = TempDir::new().unwrap();
    let cloudbuild = CloudBuildConfig::new("wordpress").with_path(temp_dir.path());

    let error = cloudbuild.remove().unwrap_err();
    assert!(matches!(error, CloudBuildError::FileSystemError { .. }));
    assert_eq!(error.path().map(|p| p.as_path()), Some(temp_dir.path()));
    assert!(temp_dir.path().is_dir());
}

#[test]
fn test_generate() {
    let cloudbuild = CloudBuildConfig::new("wordpress");
    assert!(!cloudbuild.generate().unwrap().is_empty());

    let mut cloudbuild = CloudBuildConfig::new("wordpress");
    cloudbuild.set_extra_configs(vec![]);
    assert!(!cloudbuild.generate().unwrap().is_empty());

    let cloudbuild = CloudBuildConfig::new("wordpress").with_template(EXTRA_STEPS_TEMPLATE);
    assert_eq!(
        cloudbuild.generate().unwrap(),
        concat!(
            "steps:\n",
            "    - id: Build wordpress\n",
            "      name: gcr.io/cloud-builders/docker\n",
            "      dir: k8s",
        )
    );

    let mut cloudbuild = CloudBuildConfig::new("wordpress");
    cloudbuild.set_extra_configs(vec![public_service_and_ingress()]);
    cloudbuild.set_template(EXTRA_STEPS_TEMPLATE);
    assert_eq!(
        cloudbuild.generate().unwrap(),
        concat!(
            "steps:\n",
            "    - id: Build wordpress\n",
            "      name: gcr.io/cloud-builders/docker\n",
            "      dir: k8s\n",
            "\n",
            "    - id: Verify wordpress (Public service and ingress)\n",
            "      name: gcr.io/cloud-builders/docker\n",
            "      dir: k8s\n",
            "      env:\n",
            "      - 'PUBLIC_SERVICE_AND_INGRESS_ENABLED=true'",
        )
    );
}

#[test]
fn test_generate_keeps_extra_config_order() {
    let mut cloudbuild = CloudBuildConfig::new("wordpress").with_template(SIMPLE_TEMPLATE);
    cloudbuild.add_extra_config(ExtraConfig::new("First").with_env_var("A=1"));
    cloudbuild.add_extra_config(
        ExtraConfig::new("Second")
            .with_env_var("B=2")
            .with_env_var("C=3"),
    );

    assert_eq!(
        cloudbuild.generate().unwrap(),
        concat!(
            "steps:\n",
            "- id: Build wordpress\n",
            "  name: gcr.io/cloud-builders/docker\n",
            "  dir: k8s\n",
            "- id: Verify wordpress (First)\n",
            "  env:\n",
            "  - 'A=1'\n",
            "- id: Verify wordpress (Second)\n",
            "  env:\n",
            "  - 'B=2'\n",
            "  - 'C=3'",
        )
    );
}

#[test]
fn test_generate_is_idempotent() {
    let cloudbuild = CloudBuildConfig::new("wordpress")
        .with_extra_configs(vec![public_service_and_ingress()]);

    assert_eq!(cloudbuild.generate().unwrap(), cloudbuild.generate().unwrap());
}

#[test]
fn test_generate_undefined_variable_is_template_error() {
    let cloudbuild = CloudBuildConfig::new("wordpress").with_template("- id: {{ release }}");

    let result = cloudbuild.generate();
    assert!(matches!(result, Err(CloudBuildError::TemplateError { .. })));
}

#[test]
fn test_generate_undefined_field_is_template_error() {
    let cloudbuild = CloudBuildConfig::new("wordpress")
        .with_extra_configs(vec![public_service_and_ingress()])
        .with_template("{% for c in extra_configs %}{{ c.image }}{% endfor %}");

    assert!(matches!(
        cloudbuild.generate(),
        Err(CloudBuildError::TemplateError { .. })
    ));
}

#[test]
fn test_save() {
    let file = NamedTempFile::new().unwrap();

    let cloudbuild = CloudBuildConfig::new("wordpress")
        .with_template(CLOUDBUILD_CONFIG)
        .with_path(file.path());
    cloudbuild.save().unwrap();

    assert_eq!(fs::read_to_string(file.path()).unwrap(), CLOUDBUILD_CONFIG);
}

#[test]
fn test_save_overwrites_and_verifies() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all("stale content that is longer than the new one".repeat(20).as_bytes())
        .unwrap();
    file.flush().unwrap();

    let cloudbuild = CloudBuildConfig::new("wordpress")
        .with_extra_configs(vec![public_service_and_ingress()])
        .with_path(file.path());
    assert!(!cloudbuild.verify().unwrap());

    cloudbuild.save().unwrap();
    assert_eq!(
        fs::read_to_string(file.path()).unwrap(),
        cloudbuild.generate().unwrap()
    );
    assert!(cloudbuild.verify().unwrap());
}

#[test]
fn test_save_without_parent_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("k8s").join(".cloudbuild").join("wordpress.yaml");

    let cloudbuild = CloudBuildConfig::new("wordpress").with_path(&path);
    let error = cloudbuild.save().unwrap_err();

    assert!(matches!(error, CloudBuildError::FileSystemError { .. }));
    assert!(!path.exists());
}

#[test]
fn test_remove() {
    let file = NamedTempFile::new().unwrap();

    let cloudbuild = CloudBuildConfig::new("wordpress").with_path(file.path());
    assert!(cloudbuild.exists());

    cloudbuild.remove().unwrap();
    assert!(!cloudbuild.exists());
}

#[test]
fn test_remove_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let cloudbuild =
        CloudBuildConfig::new("wordpress").with_path(temp_dir.path().join("missing.yaml"));

    cloudbuild.remove().unwrap();
    cloudbuild.remove().unwrap();
    assert!(!cloudbuild.exists());
}
