use serde_valid::Validate;
use std::sync::Arc;

use crate::configuration::SyncSettings;
use crate::connectors::StorefrontConnector;
use crate::forms::{Historia, ProductForm};
use crate::models::{Product, RecordId};
use crate::storage::{LocalStore, PRODUCTS_KEY};

use super::{normalize, SyncError};

/// Products and the "historia" text.
///
/// Every successful product listing is kept locally as the last-known copy and
/// served in its place when the API cannot be read. Writes only make sense
/// against the API and fail when it is unusable.
pub struct CatalogService {
    use_backend: bool,
    remote: Arc<dyn StorefrontConnector>,
    local: LocalStore<Product>,
}

impl CatalogService {
    pub fn new(
        use_backend: bool,
        remote: Arc<dyn StorefrontConnector>,
        local: LocalStore<Product>,
    ) -> Self {
        Self {
            use_backend,
            remote,
            local,
        }
    }

    pub fn from_settings(sync: &SyncSettings, remote: Arc<dyn StorefrontConnector>) -> Self {
        Self::new(
            sync.use_backend,
            remote,
            LocalStore::new(&sync.storage_dir, PRODUCTS_KEY),
        )
    }

    fn remote(&self) -> Result<&dyn StorefrontConnector, SyncError> {
        if self.use_backend {
            Ok(self.remote.as_ref())
        } else {
            Err(SyncError::backend_disabled())
        }
    }

    #[tracing::instrument(name = "Get products.", skip(self))]
    pub async fn products(&self) -> Vec<Product> {
        if !self.use_backend {
            return self.local.get_all();
        }

        match self.remote.get_products().await {
            Ok(rows) => {
                let products: Vec<Product> =
                    rows.iter().map(normalize::product_from_row).collect();
                if let Err(err) = self.local.save_all(&products) {
                    tracing::warn!("Failed to keep a local copy of the product listing: {}", err);
                }
                products
            }
            Err(err) => {
                tracing::warn!(
                    "Failed to fetch products from storefront, serving local copy: {}",
                    err
                );
                self.local.get_all()
            }
        }
    }

    #[tracing::instrument(name = "Add product.", skip(self, form))]
    pub async fn add_product(&self, form: ProductForm) -> Result<Product, SyncError> {
        let form = form.trimmed();
        form.validate()
            .map_err(|errors| SyncError::ValidationFailed(errors.to_string()))?;

        let payload = serde_json::to_value(&form)
            .map_err(|err| SyncError::ValidationFailed(err.to_string()))?;
        let body = self.remote()?.create_product(payload).await?;

        Ok(Product {
            id: normalize::acknowledged_id(&body),
            name: form.name,
            description: form.description,
            price: form.price,
            image: form.image,
            stock: form.stock,
        })
    }

    /// Editing is delete-then-add, there is no update in place.
    #[tracing::instrument(name = "Delete product.", skip(self))]
    pub async fn delete_product(&self, id: &RecordId) -> Result<(), SyncError> {
        if !id.is_assigned() {
            return Err(SyncError::ValidationFailed(
                "product has no known id, list products to find it".to_string(),
            ));
        }

        self.remote()?.delete_product(id).await?;
        Ok(())
    }

    #[tracing::instrument(name = "Get historia.", skip(self))]
    pub async fn historia(&self) -> Result<String, SyncError> {
        let body = self.remote()?.get_historia().await?;

        Ok(body
            .get("valor")
            .and_then(|valor| valor.as_str())
            .unwrap_or_default()
            .to_string())
    }

    /// Replaces the text wholesale.
    #[tracing::instrument(name = "Update historia.", skip(self, text))]
    pub async fn update_historia(&self, text: &str) -> Result<(), SyncError> {
        let form = Historia {
            valor: text.to_string(),
        };
        form.validate()
            .map_err(|errors| SyncError::ValidationFailed(errors.to_string()))?;

        self.remote()?.update_historia(&form.valor).await?;
        Ok(())
    }
}
