use std::sync::Arc;

use crate::connectors::config::StorefrontConfig;
use crate::connectors::errors::ConnectorError;
use crate::connectors::storefront::{StorefrontClient, StorefrontConnector};

/// Build the storefront connector from settings.
///
/// # Example
/// ```ignore
/// let settings = configuration::get_client_configuration()?;
/// let connector = connectors::storefront::init(&settings.storefront)?;
/// ```
pub fn init(config: &StorefrontConfig) -> Result<Arc<dyn StorefrontConnector>, ConnectorError> {
    tracing::info!(
        base_url = %config.base_url,
        timeout_secs = config.timeout_secs,
        "Initializing storefront connector"
    );
    let client = StorefrontClient::new(config)?;

    Ok(Arc::new(client))
}
