//! Templates module for the embedded CloudBuild template and its renderer
//! The default template is embedded at compile time using include_str! macro

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

use crate::common::error::CloudBuildError;
use crate::common::result::CloudBuildResult;

/// Get the default CloudBuild template content
pub fn get_cloudbuild_template() -> &'static str {
    include_str!("../../templates/cloudbuild.yaml.j2")
}

/// Renders Jinja-style templates into CloudBuild configs
///
/// Undefined variables are errors, and output is never escaped since the
/// result is YAML rather than markup.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    /// Create a new template renderer
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }

    /// Render `template` with the given serializable context
    pub fn render<S: Serialize>(&self, template: &str, context: S) -> CloudBuildResult<String> {
        self.env.render_str(template, context).map_err(|e| {
            tracing::debug!("Template rendering failed: {:#}", e);
            CloudBuildError::template_error_with_source(
                format!("Failed to render template: {}", e),
                e,
            )
        })
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
