use serde_json::Value;

use crate::connectors::errors::ConnectorError;
use crate::models::RecordId;

/// Trait for the storefront REST API
///
/// Thin transport: payloads go out as given and rows come back raw, field
/// names are never interpreted here.
#[async_trait::async_trait]
pub trait StorefrontConnector: Send + Sync {
    /// GET /sugerencias
    async fn get_suggestions(&self) -> Result<Vec<Value>, ConnectorError>;

    /// POST /sugerencias with a caller-built payload
    async fn create_suggestion(&self, payload: Value) -> Result<Value, ConnectorError>;

    /// DELETE /sugerencias/{id}
    async fn delete_suggestion(&self, id: &RecordId) -> Result<Value, ConnectorError>;

    /// GET /productos
    async fn get_products(&self) -> Result<Vec<Value>, ConnectorError>;

    /// POST /productos
    async fn create_product(&self, payload: Value) -> Result<Value, ConnectorError>;

    /// DELETE /productos/{id}
    async fn delete_product(&self, id: &RecordId) -> Result<Value, ConnectorError>;

    /// GET /config, returns `{"valor": ...}`
    async fn get_historia(&self) -> Result<Value, ConnectorError>;

    /// PUT /config, replaces the text wholesale
    async fn update_historia(&self, valor: &str) -> Result<Value, ConnectorError>;
}
