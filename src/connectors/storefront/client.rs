use crate::connectors::config::StorefrontConfig;
use crate::connectors::errors::ConnectorError;
use crate::models::RecordId;

use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::Instrument;

use super::connector::StorefrontConnector;

/// HTTP-based storefront client
pub struct StorefrontClient {
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
}

impl StorefrontClient {
    /// Create new storefront client
    pub fn new(config: &StorefrontConfig) -> Result<Self, ConnectorError> {
        let timeout = std::time::Duration::from_secs(config.timeout_secs);
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConnectorError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send the request and parse the body as JSON.
    ///
    /// Any non-2xx status is an error. An empty 2xx body is `Value::Null`.
    async fn execute(&self, req: reqwest::RequestBuilder) -> Result<Value, ConnectorError> {
        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(ConnectorError::NotFound(error_message(&text)));
        }
        if !status.is_success() {
            return Err(ConnectorError::HttpError(format!(
                "{}: {}",
                status,
                error_message(&text)
            )));
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str::<Value>(&text).map_err(|_| ConnectorError::InvalidResponse(text))
    }

    fn expect_rows(body: Value) -> Result<Vec<Value>, ConnectorError> {
        match body {
            Value::Array(rows) => Ok(rows),
            other => Err(ConnectorError::InvalidResponse(format!(
                "expected a JSON array, got {}",
                other
            ))),
        }
    }
}

/// `error` field of a JSON error body, or the raw body.
fn error_message(text: &str) -> String {
    serde_json::from_str::<Value>(text)
        .ok()
        .and_then(|body| body.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| text.to_string())
}

#[async_trait::async_trait]
impl StorefrontConnector for StorefrontClient {
    async fn get_suggestions(&self) -> Result<Vec<Value>, ConnectorError> {
        let span = tracing::info_span!("storefront_get_suggestions");
        let req = self.http_client.get(self.url("sugerencias"));

        self.execute(req)
            .instrument(span)
            .await
            .and_then(Self::expect_rows)
    }

    async fn create_suggestion(&self, payload: Value) -> Result<Value, ConnectorError> {
        let span = tracing::info_span!("storefront_create_suggestion");
        let req = self.http_client.post(self.url("sugerencias")).json(&payload);

        self.execute(req).instrument(span).await
    }

    async fn delete_suggestion(&self, id: &RecordId) -> Result<Value, ConnectorError> {
        let span = tracing::info_span!("storefront_delete_suggestion", id = %id);
        let req = self
            .http_client
            .delete(self.url(&format!("sugerencias/{}", id)));

        self.execute(req).instrument(span).await
    }

    async fn get_products(&self) -> Result<Vec<Value>, ConnectorError> {
        let span = tracing::info_span!("storefront_get_products");
        let req = self.http_client.get(self.url("productos"));

        self.execute(req)
            .instrument(span)
            .await
            .and_then(Self::expect_rows)
    }

    async fn create_product(&self, payload: Value) -> Result<Value, ConnectorError> {
        let span = tracing::info_span!("storefront_create_product");
        let req = self.http_client.post(self.url("productos")).json(&payload);

        self.execute(req).instrument(span).await
    }

    async fn delete_product(&self, id: &RecordId) -> Result<Value, ConnectorError> {
        let span = tracing::info_span!("storefront_delete_product", id = %id);
        let req = self.http_client.delete(self.url(&format!("productos/{}", id)));

        self.execute(req).instrument(span).await
    }

    async fn get_historia(&self) -> Result<Value, ConnectorError> {
        let span = tracing::info_span!("storefront_get_historia");
        let req = self.http_client.get(self.url("config"));

        self.execute(req).instrument(span).await
    }

    async fn update_historia(&self, valor: &str) -> Result<Value, ConnectorError> {
        let span = tracing::info_span!("storefront_update_historia");
        let req = self
            .http_client
            .put(self.url("config"))
            .json(&json!({ "valor": valor }));

        self.execute(req).instrument(span).await
    }
}
