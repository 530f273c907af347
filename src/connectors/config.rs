use serde::{Deserialize, Serialize};

/// Storefront API connector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Base URL of the storefront API (e.g., http://localhost:3000/api)
    #[serde(default = "StorefrontConfig::default_base_url")]
    pub base_url: String,
    /// HTTP request timeout in seconds
    #[serde(default = "StorefrontConfig::default_timeout_secs")]
    pub timeout_secs: u64,
    /// Key convention expected by the deployed API when creating suggestions
    #[serde(default)]
    pub field_mapping: RemoteSchema,
}

/// Naming convention of a storefront deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteSchema {
    /// `name`, `title`, `message`, `rating`
    #[default]
    English,
    /// `nombre`, `titulo`, `mensaje`, `importancia`
    Spanish,
}

impl StorefrontConfig {
    fn default_base_url() -> String {
        "http://localhost:3000/api".to_string()
    }

    const fn default_timeout_secs() -> u64 {
        10
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout_secs: Self::default_timeout_secs(),
            field_mapping: RemoteSchema::default(),
        }
    }
}
