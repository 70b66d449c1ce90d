//! API credential read once at startup.

use super::AppError;

/// Opaque bearer token for the chat-completion service.
///
/// Never printed: `Debug` redacts the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    value: String,
}

impl Credential {
    /// Wrap a raw secret, rejecting an empty value.
    ///
    /// `source` names where the value came from and is used in the error.
    pub fn new(value: impl Into<String>, source: &str) -> Result<Self, AppError> {
        let value = value.into();
        if value.is_empty() {
            return Err(AppError::MissingCredential(source.to_string()));
        }
        Ok(Self { value })
    }

    /// Read the credential from the named environment variable.
    pub fn from_env(var: &str) -> Result<Self, AppError> {
        let value = std::env::var(var).unwrap_or_default();
        Self::new(value, var)
    }

    pub fn expose(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential").field("value", &"[REDACTED]").finish()
    }
}
