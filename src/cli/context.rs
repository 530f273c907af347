use crate::cli::CliError;
use crate::configuration::{get_client_configuration, ClientSettings};
use crate::connectors::storefront;
use crate::services::{CatalogService, SuggestionService};

/// Settings shared by every subcommand of one invocation.
pub struct Context {
    settings: ClientSettings,
}

impl Context {
    pub fn load() -> Result<Self, CliError> {
        let settings = get_client_configuration()?;
        tracing::debug!(
            use_backend = settings.sync.use_backend,
            storage_dir = %settings.sync.storage_dir.display(),
            base_url = %settings.storefront.base_url,
            "Loaded client configuration"
        );

        Ok(Self { settings })
    }

    pub fn suggestions(&self) -> Result<SuggestionService, CliError> {
        let remote = storefront::init(&self.settings.storefront)?;
        Ok(SuggestionService::from_settings(
            &self.settings.sync,
            &self.settings.storefront,
            remote,
        ))
    }

    pub fn catalog(&self) -> Result<CatalogService, CliError> {
        let remote = storefront::init(&self.settings.storefront)?;
        Ok(CatalogService::from_settings(&self.settings.sync, remote))
    }
}

pub fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)
}
