use serde::{Deserialize, Serialize};

/// An additional verify step appended after the base build step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraConfig {
    /// Step name, rendered as `Verify <solution> (<name>)`
    pub name: String,

    /// Environment variables passed to the step, in order
    #[serde(default)]
    pub env_vars: Vec<String>,
}

impl ExtraConfig {
    /// Create a new ExtraConfig with no environment variables
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            env_vars: Vec::new(),
        }
    }

    /// Append an environment variable (`KEY=value`)
    pub fn with_env_var(mut self, env_var: impl Into<String>) -> Self {
        self.env_vars.push(env_var.into());
        self
    }
}
