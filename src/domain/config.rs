//! Configuration models.

use serde::Deserialize;

/// Settings loaded from an optional TOML file, then overridden by CLI flags.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallConfig {
    /// Chat-completion API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Install-script execution settings.
    #[serde(default)]
    pub script: ScriptConfig,
}

/// Chat-completion API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Chat-completion endpoint URL.
    #[serde(default = "default_api_url")]
    pub url: String,
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the bearer token.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Request timeout in seconds. Unset means wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: None,
        }
    }
}

fn default_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

/// How the generated install script is executed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptConfig {
    /// Interpreter the script path is handed to.
    #[serde(default = "default_shell")]
    pub shell: String,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self { shell: default_shell() }
    }
}

fn default_shell() -> String {
    "bash".to_string()
}
