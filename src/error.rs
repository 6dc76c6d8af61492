//! Error types for module models and option generation
//!
//! This module defines the error types used throughout the unicorn-options
//! library. All fallible public functions return [`Result<T, Error>`].
//!
//! Skipping an empty simple property is not an error: it simply produces no
//! line in the generated document.

/// Errors that can occur while building, merging or generating module options
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `generate` was called on a model that does not provide one
    #[error("generate is not implemented for module '{module}'")]
    NotImplemented { module: String },

    /// No model is registered under this name
    #[error("Unknown module '{0}'")]
    UnknownModule(String),

    /// A model with this name is already registered
    #[error("Module '{0}' is already registered")]
    DuplicateModule(String),

    /// An edit names a property the module does not define
    #[error("Unknown property '{key}' for module '{module}'")]
    UnknownProperty { module: String, key: String },

    /// A `key=value` assignment could not be parsed
    #[error("Invalid assignment '{0}', expected key=value")]
    InvalidAssignment(String),

    /// An edit value has a shape that cannot become a property value
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Invalid glob pattern in query
    #[error("Invalid glob pattern: {0}")]
    InvalidGlobPattern(String),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for convenience
///
/// # Example
///
/// ```rust
/// use unicorn_options::{ButtonsModel, ModuleModel, Result};
///
/// fn body_for_defaults() -> Result<String> {
///     let model = ButtonsModel;
///     let document = model.generate(&model.defaults())?;
///     Ok(document.body)
/// }
/// # body_for_defaults().unwrap();
/// ```
pub type Result<T> = std::result::Result<T, Error>;
