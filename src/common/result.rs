use crate::common::error::CloudBuildError;

/// Result alias used across the crate
///
/// # Examples
///
/// ```
/// use cloudbuild_gen::common::result::CloudBuildResult;
/// use cloudbuild_gen::common::error::CloudBuildError;
///
/// fn example_function() -> CloudBuildResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> CloudBuildResult<()> {
///     Err(CloudBuildError::validation_error("solution", "must not be empty", None))
/// }
/// ```
pub type CloudBuildResult<T> = Result<T, CloudBuildError>;

/// Conversion helpers from `Option` to `CloudBuildResult`
pub trait OptionExt<T> {
    /// Turn `None` into a `ValidationError`
    ///
    /// # Examples
    ///
    /// ```
    /// use cloudbuild_gen::common::result::{CloudBuildResult, OptionExt};
    ///
    /// let none_value: Option<String> = None;
    /// let result: CloudBuildResult<String> = none_value.ok_or_validation_error("solution", "required");
    /// assert!(result.is_err());
    /// ```
    fn ok_or_validation_error(
        self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> CloudBuildResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_validation_error(
        self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> CloudBuildResult<T> {
        self.ok_or_else(|| CloudBuildError::validation_error(field, message, None))
    }
}

/// Conversion helpers from foreign results to `CloudBuildResult`
pub trait ResultExt<T, E> {
    /// Convert an I/O failure into a `FileSystemError` carrying the path
    ///
    /// # Examples
    ///
    /// ```
    /// use cloudbuild_gen::common::result::{CloudBuildResult, ResultExt};
    /// use std::path::PathBuf;
    ///
    /// let result: Result<String, std::io::Error> = Err(std::io::Error::new(
    ///     std::io::ErrorKind::PermissionDenied, "denied"
    /// ));
    /// let converted: CloudBuildResult<String> =
    ///     result.with_filesystem_error("Failed to read", Some(PathBuf::from("a.yaml")));
    /// assert!(converted.is_err());
    /// ```
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> CloudBuildResult<T>
    where
        E: Into<std::io::Error>;

    /// Convert a parse failure into a `ConfigError` carrying the file path
    fn with_config_error(
        self,
        message: impl Into<String>,
        file_path: Option<std::path::PathBuf>,
    ) -> CloudBuildResult<T>
    where
        E: std::error::Error + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn with_filesystem_error(
        self,
        message: impl Into<String>,
        path: Option<std::path::PathBuf>,
    ) -> CloudBuildResult<T>
    where
        E: Into<std::io::Error>,
    {
        self.map_err(|e| CloudBuildError::filesystem_error_with_source(message, path, e.into()))
    }

    fn with_config_error(
        self,
        message: impl Into<String>,
        file_path: Option<std::path::PathBuf>,
    ) -> CloudBuildResult<T>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.map_err(|e| CloudBuildError::config_error_with_source(message, file_path, e))
    }
}
