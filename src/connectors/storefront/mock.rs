use serde_json::{json, Value};
use std::sync::{Mutex, MutexGuard};

use crate::connectors::errors::ConnectorError;
use crate::models::RecordId;

use super::StorefrontConnector;

/// In-memory storefront for testing.
///
/// Behaves like the real API: rows get auto-increment ids and creates answer
/// `{"success": true, "id": N}`. Built with [`MockStorefrontConnector::unavailable`]
/// every call fails as if the API were down.
#[derive(Default)]
pub struct MockStorefrontConnector {
    unavailable: bool,
    omit_ids: bool,
    state: Mutex<MockState>,
}

#[derive(Default)]
struct MockState {
    next_id: i64,
    suggestions: Vec<Value>,
    products: Vec<Value>,
    historia: String,
    calls: usize,
}

impl MockStorefrontConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Creates are acknowledged with `{"success": true}` and no id.
    pub fn without_ids() -> Self {
        Self {
            omit_ids: true,
            ..Self::default()
        }
    }

    pub fn with_suggestions(rows: Vec<Value>) -> Self {
        let mock = Self::default();
        {
            let mut state = mock.lock();
            state.next_id = max_id(&rows);
            state.suggestions = rows;
        }
        mock
    }

    pub fn with_products(rows: Vec<Value>) -> Self {
        let mock = Self::default();
        {
            let mut state = mock.lock();
            state.next_id = max_id(&rows);
            state.products = rows;
        }
        mock
    }

    /// Rows currently held, including created ones.
    pub fn suggestions(&self) -> Vec<Value> {
        self.lock().suggestions.clone()
    }

    pub fn products(&self) -> Vec<Value> {
        self.lock().products.clone()
    }

    /// Number of calls received, failed ones included.
    pub fn calls(&self) -> usize {
        self.lock().calls
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn enter(&self) -> Result<MutexGuard<'_, MockState>, ConnectorError> {
        let mut state = self.lock();
        state.calls += 1;
        if self.unavailable {
            return Err(ConnectorError::ServiceUnavailable(
                "Connection failed: mock storefront is down".to_string(),
            ));
        }
        Ok(state)
    }
}

impl MockState {
    fn insert(rows: &mut Vec<Value>, next_id: &mut i64, mut payload: Value) -> i64 {
        *next_id += 1;
        if let Value::Object(fields) = &mut payload {
            fields.insert("id".to_string(), json!(*next_id));
        }
        rows.push(payload);
        *next_id
    }

    fn remove(rows: &mut Vec<Value>, id: &RecordId) -> Result<Value, ConnectorError> {
        let before = rows.len();
        rows.retain(|row| row_id(row).as_ref() != Some(id));
        if rows.len() == before {
            return Err(ConnectorError::NotFound(format!("{} not found", id)));
        }
        Ok(json!({ "success": true }))
    }
}

fn row_id(row: &Value) -> Option<RecordId> {
    match row.get("id")? {
        Value::Number(n) => n.as_i64().map(RecordId::Remote),
        Value::String(s) => Some(RecordId::from(s.as_str())),
        _ => None,
    }
}

fn max_id(rows: &[Value]) -> i64 {
    rows.iter()
        .filter_map(|row| match row_id(row) {
            Some(RecordId::Remote(id)) => Some(id),
            _ => None,
        })
        .max()
        .unwrap_or(0)
}

#[async_trait::async_trait]
impl StorefrontConnector for MockStorefrontConnector {
    async fn get_suggestions(&self) -> Result<Vec<Value>, ConnectorError> {
        Ok(self.enter()?.suggestions.clone())
    }

    async fn create_suggestion(&self, payload: Value) -> Result<Value, ConnectorError> {
        let mut state = self.enter()?;
        let state = &mut *state;
        let id = MockState::insert(&mut state.suggestions, &mut state.next_id, payload);
        if self.omit_ids {
            return Ok(json!({ "success": true, "message": "Sugerencia guardada correctamente" }));
        }
        Ok(json!({ "success": true, "message": "Sugerencia guardada correctamente", "id": id }))
    }

    async fn delete_suggestion(&self, id: &RecordId) -> Result<Value, ConnectorError> {
        MockState::remove(&mut self.enter()?.suggestions, id)
    }

    async fn get_products(&self) -> Result<Vec<Value>, ConnectorError> {
        Ok(self.enter()?.products.clone())
    }

    async fn create_product(&self, payload: Value) -> Result<Value, ConnectorError> {
        let mut state = self.enter()?;
        let state = &mut *state;
        let id = MockState::insert(&mut state.products, &mut state.next_id, payload);
        if self.omit_ids {
            return Ok(json!({ "success": true }));
        }
        Ok(json!({ "success": true, "id": id }))
    }

    async fn delete_product(&self, id: &RecordId) -> Result<Value, ConnectorError> {
        MockState::remove(&mut self.enter()?.products, id)
    }

    async fn get_historia(&self) -> Result<Value, ConnectorError> {
        Ok(json!({ "valor": self.enter()?.historia.clone() }))
    }

    async fn update_historia(&self, valor: &str) -> Result<Value, ConnectorError> {
        self.enter()?.historia = valor.to_string();
        Ok(json!({ "success": true }))
    }
}
