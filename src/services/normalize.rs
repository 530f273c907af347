//! Mapping of raw storefront rows onto canonical records.
//!
//! Deployments disagree on column names, so every canonical field lists its
//! accepted keys in precedence order: the English key first, then the Spanish
//! one. A key only counts when it holds a usable value (not null, not a blank
//! string, coercible to the field type); otherwise the next key is tried and
//! finally the field default applies.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

use crate::models::{Product, RecordId, Suggestion, ANONYMOUS_NAME, MAX_RATING};

const ID_KEYS: &[&str] = &["id", "ID"];
const NAME_KEYS: &[&str] = &["name", "nombre"];
const TITLE_KEYS: &[&str] = &["title", "titulo"];
const MESSAGE_KEYS: &[&str] = &["message", "mensaje"];
const RATING_KEYS: &[&str] = &["rating", "importancia"];
const CREATED_AT_KEYS: &[&str] = &["createdAt", "created_at", "fecha"];

const DESCRIPTION_KEYS: &[&str] = &["description", "descripcion"];
const PRICE_KEYS: &[&str] = &["price", "precio"];
const IMAGE_KEYS: &[&str] = &["image", "imagen"];
const STOCK_KEYS: &[&str] = &["stock"];

pub fn suggestion_from_row(raw: &Value) -> Suggestion {
    Suggestion {
        id: record_id(raw),
        name: first(raw, NAME_KEYS, as_text).unwrap_or_else(|| ANONYMOUS_NAME.to_string()),
        title: first(raw, TITLE_KEYS, as_text).unwrap_or_default(),
        message: first(raw, MESSAGE_KEYS, as_text).unwrap_or_default(),
        rating: first(raw, RATING_KEYS, as_integer)
            .map(|rating| rating.clamp(0, MAX_RATING as i64) as u8)
            .unwrap_or(0),
        created_at: first(raw, CREATED_AT_KEYS, as_timestamp).unwrap_or_else(Utc::now),
    }
}

pub fn product_from_row(raw: &Value) -> Product {
    Product {
        id: record_id(raw),
        name: first(raw, NAME_KEYS, as_text).unwrap_or_default(),
        description: first(raw, DESCRIPTION_KEYS, as_text).unwrap_or_default(),
        price: first(raw, PRICE_KEYS, as_integer).unwrap_or(0).max(0),
        image: first(raw, IMAGE_KEYS, as_text).unwrap_or_default(),
        stock: first(raw, STOCK_KEYS, as_integer).unwrap_or(0).max(0),
    }
}

/// Id carried by `raw`, or a fresh local token.
pub fn record_id(raw: &Value) -> RecordId {
    reported_id(raw).unwrap_or_else(RecordId::generate)
}

/// Id carried by a create acknowledgement. The API already stored the record,
/// so a missing id stays [`RecordId::Unassigned`] rather than a local token.
pub fn acknowledged_id(body: &Value) -> RecordId {
    reported_id(body).unwrap_or(RecordId::Unassigned)
}

fn reported_id(raw: &Value) -> Option<RecordId> {
    first(raw, ID_KEYS, |value| match value {
        Value::Number(n) => n
            .as_i64()
            .map(RecordId::Remote)
            .or_else(|| Some(RecordId::Local(n.to_string()))),
        Value::String(s) => Some(RecordId::from(s.trim())),
        _ => None,
    })
}

/// Whether a create response is the stored row rather than an acknowledgement
/// such as `{"success": true, "message": "...", "id": 3}`.
pub fn is_suggestion_row(raw: &Value) -> bool {
    raw.is_object()
        && raw.get("success").is_none()
        && MESSAGE_KEYS.iter().any(|key| raw.get(*key).map_or(false, is_present))
}

fn first<T>(raw: &Value, keys: &[&str], coerce: impl Fn(&Value) -> Option<T>) -> Option<T> {
    keys.iter()
        .filter_map(|key| raw.get(*key))
        .filter(|value| is_present(value))
        .find_map(coerce)
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn as_integer(value: &Value) -> Option<i64> {
    let from_float = |f: f64| f.is_finite().then(|| f.round() as i64);

    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(from_float)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(from_float))
        }
        Value::Bool(b) => Some(*b as i64),
        _ => None,
    }
}

fn as_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
                .or_else(|| {
                    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
                        .iter()
                        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
                        .map(|naive| naive.and_utc())
                })
        }
        // Milliseconds since the epoch, as browsers stamp them.
        Value::Number(n) => n.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    }
}
