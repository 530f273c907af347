use crate::connectors::StorefrontConfig;
use serde;
use std::path::PathBuf;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_port: u16,
    pub app_host: String,
    #[serde(default)]
    pub storefront: StorefrontConfig,
    #[serde(default)]
    pub sync: SyncSettings,
}

/// Subset of [`Settings`] needed by clients of the storefront API.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ClientSettings {
    #[serde(default)]
    pub storefront: StorefrontConfig,
    #[serde(default)]
    pub sync: SyncSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
}

/// Decides where suggestions are read from and written to.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SyncSettings {
    /// Route operations to the remote API first, falling back to local storage
    #[serde(default = "SyncSettings::default_use_backend")]
    pub use_backend: bool,
    /// Directory holding the local JSON collections
    #[serde(default = "SyncSettings::default_storage_dir")]
    pub storage_dir: PathBuf,
}

impl SyncSettings {
    const fn default_use_backend() -> bool {
        true
    }

    fn default_storage_dir() -> PathBuf {
        PathBuf::from(".buzon")
    }
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            use_backend: Self::default_use_backend(),
            storage_dir: Self::default_storage_dir(),
        }
    }
}

impl DatabaseSettings {
    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }

    pub fn connection_string_without_db(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port,
        )
    }
}

fn load() -> Result<config::Config, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // configuration.yaml is optional for clients, every client field has a default.
    // APP_SYNC__USE_BACKEND=false overrides sync.use_backend
    config::Config::builder()
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    load()?.try_deserialize()
}

pub fn get_client_configuration() -> Result<ClientSettings, config::ConfigError> {
    load()?.try_deserialize()
}
