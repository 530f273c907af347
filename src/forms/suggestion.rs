use crate::models::{self, RecordId, ANONYMOUS_NAME};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Suggestion as typed into the storefront form, before any store assigns an
/// id or a timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct SuggestionDraft {
    #[validate(max_length = 255)]
    pub name: Option<String>,
    #[validate(max_length = 255)]
    pub title: Option<String>,
    #[validate(min_length = 1)]
    #[validate(max_length = 5000)]
    pub message: String,
    #[validate(maximum = 5)]
    pub rating: Option<u8>,
}

impl SuggestionDraft {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Trims every text field. A blank name or title counts as omitted.
    pub fn trimmed(self) -> Self {
        let non_blank = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            name: non_blank(self.name),
            title: non_blank(self.title),
            message: self.message.trim().to_string(),
            rating: self.rating,
        }
    }

    pub fn author(&self) -> &str {
        self.name.as_deref().unwrap_or(ANONYMOUS_NAME)
    }

    pub fn into_suggestion(self, id: RecordId, created_at: DateTime<Utc>) -> models::Suggestion {
        models::Suggestion {
            id,
            name: self.author().to_string(),
            title: self.title.unwrap_or_default(),
            message: self.message,
            rating: self.rating.unwrap_or(0),
            created_at,
        }
    }
}

/// Body of `POST /api/sugerencias`.
///
/// Both key conventions are accepted since deployed clients disagree on them.
#[derive(Debug, Deserialize, Validate)]
pub struct AddSuggestion {
    #[serde(alias = "nombre")]
    #[validate(max_length = 255)]
    pub name: Option<String>,
    #[serde(alias = "mensaje")]
    #[validate(max_length = 5000)]
    pub message: Option<String>,
    #[serde(alias = "titulo")]
    #[validate(max_length = 255)]
    pub title: Option<String>,
    #[serde(alias = "importancia")]
    #[validate(minimum = 0)]
    #[validate(maximum = 5)]
    pub rating: Option<i16>,
}

impl AddSuggestion {
    /// Trimmed name and message, `None` when either one is blank.
    pub fn required_fields(&self) -> Option<(&str, &str)> {
        let name = self.name.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let message = self
            .message
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())?;
        Some((name, message))
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}
