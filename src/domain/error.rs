use std::io;

use thiserror::Error;

/// Library-wide error type for readme-install operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Required credential is unset or empty.
    #[error("Environment variable {0} is not set. Export your API key before running.")]
    MissingCredential(String),

    /// Interactive (or preset) input was empty after trimming.
    #[error("No {0} provided")]
    EmptyInput(String),

    /// Reading from the terminal failed.
    #[error("Failed to read {what}: {details}")]
    Prompt { what: String, details: String },

    /// The version-control client failed to clone.
    #[error("Failed to clone '{url}': {details}")]
    Clone { url: String, details: String },

    /// The expected local checkout is missing after cloning.
    #[error("Repository directory '{0}' not found after cloning")]
    RepositoryNotFound(String),

    /// No README-like file exists in the checkout.
    #[error("No README found in '{0}'")]
    ReadmeNotFound(String),

    /// The HTTP request could not be completed.
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The model reply carried no usable completion text.
    #[error("No content generated by the model. Raw response:\n{raw}")]
    EmptyCompletion { raw: String },

    /// A value could not be encoded.
    #[error("Failed to encode {what}: {details}")]
    Serialization { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
