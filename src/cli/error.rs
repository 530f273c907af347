use crate::connectors::ConnectorError;
use crate::services::SyncError;

/// Everything a `buzon` subcommand can fail with.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Failed to read configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to create async runtime: {0}")]
    Runtime(std::io::Error),

    #[error(transparent)]
    Connector(#[from] ConnectorError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
