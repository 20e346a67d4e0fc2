use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CloudBuildError {
    #[error("File system operation failed: {message}")]
    FileSystemError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Template error: {message}")]
    TemplateError {
        message: String,
        #[source]
        source: Option<minijinja::Error>,
    },

    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        file_path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {field} - {message}")]
    ValidationError {
        field: String,
        message: String,
        value: Option<String>,
    },

    #[error("Serialization error: {message}")]
    SerializationError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl CloudBuildError {
    pub fn filesystem_error(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: None,
        }
    }

    pub fn filesystem_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    pub fn template_error_with_source(message: impl Into<String>, source: minijinja::Error) -> Self {
        Self::TemplateError {
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn config_error(message: impl Into<String>, file_path: Option<PathBuf>) -> Self {
        Self::ConfigError {
            message: message.into(),
            file_path,
            source: None,
        }
    }

    pub fn config_error_with_source(
        message: impl Into<String>,
        file_path: Option<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ConfigError {
            message: message.into(),
            file_path,
            source: Some(Box::new(source)),
        }
    }

    pub fn validation_error(
        field: impl Into<String>,
        message: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
            value,
        }
    }

    pub fn serialization_error_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::SerializationError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Path the error refers to, when one is known
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::FileSystemError { path, .. } => path.as_ref(),
            Self::ConfigError { file_path, .. } => file_path.as_ref(),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CloudBuildError {
    fn from(error: std::io::Error) -> Self {
        Self::filesystem_error_with_source("File system operation failed", None, error)
    }
}

impl From<minijinja::Error> for CloudBuildError {
    fn from(error: minijinja::Error) -> Self {
        Self::template_error_with_source(error.to_string(), error)
    }
}

impl From<serde_yaml::Error> for CloudBuildError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::serialization_error_with_source("YAML serialization failed", error)
    }
}

impl From<serde_json::Error> for CloudBuildError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization_error_with_source("JSON serialization failed", error)
    }
}
