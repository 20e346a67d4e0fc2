//! # cloudbuild-gen - CloudBuild Config Generator
//!
//! `cloudbuild-gen` renders the CloudBuild config of a Kubernetes solution from
//! a Jinja-style template, and keeps the generated files under
//! `k8s/.cloudbuild/` in sync with that template.
//!
//! ## Features
//!
//! - **Rendering**: `{{ solution }}` substitution and loops over extra verify steps
//! - **Verification**: byte-for-byte comparison of generated and committed configs
//! - **Batch sync**: regenerate or verify every solution found under `k8s/`
//! - **Settings file**: per-solution extra steps, skip list and template override
//!
//! ## Quick Start
//!
//! 1. Optionally describe extra verify steps in `.cloudbuild-gen.yaml`:
//!
//! ```yaml
//! skip: [legacy-app]
//! extra_configs:
//!   wordpress:
//!     - name: Public service and ingress
//!       env_vars:
//!         - PUBLIC_SERVICE_AND_INGRESS_ENABLED=true
//! ```
//!
//! 2. Generate the configs:
//!
//! ```bash
//! cloudbuild-gen sync
//! ```
//!
//! 3. Check them in CI:
//!
//! ```bash
//! cloudbuild-gen sync --verify-only
//! ```
//!
//! ## Architecture
//!
//! - [`domain`]: the [`CloudBuildConfig`] entity, extra configs and settings
//! - [`application`]: the config service and the sync/status use cases
//! - [`infrastructure`]: file, settings and solution-directory access
//! - [`presentation`]: CLI interface
//! - [`common`]: errors, result helpers and the template renderer
//!
//! ## Using the Library
//!
//! ```rust,no_run
//! use cloudbuild_gen::domain::entities::extra_config::ExtraConfig;
//! use cloudbuild_gen::CloudBuildConfig;
//!
//! # fn example() -> cloudbuild_gen::Result<()> {
//! let config = CloudBuildConfig::new("wordpress").with_extra_configs(vec![
//!     ExtraConfig::new("Public service and ingress")
//!         .with_env_var("PUBLIC_SERVICE_AND_INGRESS_ENABLED=true"),
//! ]);
//!
//! if !config.verify()? {
//!     config.save()?;
//! }
//! # Ok(())
//! # }
//! ```

// Documentation attributes
#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::CloudBuildError;
pub use crate::common::result::CloudBuildResult as Result;
pub use crate::domain::entities::cloudbuild_config::CloudBuildConfig;
pub use crate::domain::entities::extra_config::ExtraConfig;
