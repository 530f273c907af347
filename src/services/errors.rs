use crate::connectors::ConnectorError;
use crate::storage::StorageError;

/// Failures surfaced by the synchronization layer.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// Transport or HTTP failure. Suggestion reads and writes recover from
    /// it locally, only remote-only operations return it.
    #[error("storefront unavailable: {0}")]
    RemoteUnavailable(ConnectorError),
    /// Input rejected before any store was touched
    #[error("validation failed: {0}")]
    ValidationFailed(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SyncError {
    pub(crate) fn backend_disabled() -> Self {
        SyncError::RemoteUnavailable(ConnectorError::ServiceUnavailable(
            "remote backend is disabled by configuration".to_string(),
        ))
    }
}

impl From<ConnectorError> for SyncError {
    fn from(err: ConnectorError) -> Self {
        match err {
            ConnectorError::NotFound(details) => SyncError::NotFound(details),
            other => SyncError::RemoteUnavailable(other),
        }
    }
}
