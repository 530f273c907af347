use serde_json::{Map, Value};

use crate::connectors::config::RemoteSchema;
use crate::forms::SuggestionDraft;

/// Remote key names used when sending a suggestion.
///
/// The storefront schema has shifted between deployments, so the caller
/// decides the mapping instead of the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMapping {
    pub name: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub rating: &'static str,
}

impl FieldMapping {
    pub const fn english() -> Self {
        Self {
            name: "name",
            title: "title",
            message: "message",
            rating: "rating",
        }
    }

    pub const fn spanish() -> Self {
        Self {
            name: "nombre",
            title: "titulo",
            message: "mensaje",
            rating: "importancia",
        }
    }

    /// Create payload for `draft`. Omitted name, title and rating are sent
    /// with their canonical defaults.
    pub fn payload(&self, draft: &SuggestionDraft) -> Value {
        let mut body = Map::new();
        body.insert(self.name.to_string(), Value::from(draft.author()));
        body.insert(
            self.title.to_string(),
            Value::from(draft.title.clone().unwrap_or_default()),
        );
        body.insert(self.message.to_string(), Value::from(draft.message.clone()));
        body.insert(self.rating.to_string(), Value::from(draft.rating.unwrap_or(0)));
        Value::Object(body)
    }
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self::english()
    }
}

impl From<RemoteSchema> for FieldMapping {
    fn from(schema: RemoteSchema) -> Self {
        match schema {
            RemoteSchema::English => Self::english(),
            RemoteSchema::Spanish => Self::spanish(),
        }
    }
}
