/// Errors that can occur while talking to the storefront API
#[derive(Debug, thiserror::Error)]
pub enum ConnectorError {
    /// Non-success HTTP status
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// Service unreachable or timeout
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
    /// Body was not the JSON shape the endpoint promises
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// Not found (404)
    #[error("Not found: {0}")]
    NotFound(String),
    /// Connector could not be built
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::ServiceUnavailable(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::ServiceUnavailable(format!("Connection failed: {}", err))
        } else {
            Self::HttpError(err.to_string())
        }
    }
}
