use crate::models::RecordId;
use serde::{Deserialize, Serialize};

/// Canonical product as shown on the storefront.
///
/// Products are created and deleted, never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image: String,
    pub stock: i64,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ProductRow {
    pub id: i32,
    pub nombre: String,
    pub descripcion: String,
    pub precio: i64,
    pub imagen: String,
    pub stock: i32,
}
