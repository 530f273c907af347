use crate::models::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder author for suggestions submitted without a name.
pub const ANONYMOUS_NAME: &str = "Anónimo";

/// Highest star rating a suggestion can carry.
pub const MAX_RATING: u8 = 5;

/// Canonical suggestion, independent of the store that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: RecordId,
    pub name: String,
    pub title: String,
    pub message: String,
    pub rating: u8,
    pub created_at: DateTime<Utc>,
}

impl Suggestion {
    pub fn has_rating(&self, rating: u8) -> bool {
        self.rating == rating
    }
}

/// Row of the `sugerencias` table, serialized with the column names the
/// storefront API has always exposed.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SuggestionRow {
    pub id: i32,
    pub nombre: String,
    pub mensaje: String,
    pub titulo: Option<String>,
    pub rating: Option<i16>,
    pub fecha: DateTime<Utc>,
}
