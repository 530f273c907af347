use chrono::Utc;
use serde_json::Value;
use serde_valid::Validate;
use std::sync::Arc;

use crate::configuration::SyncSettings;
use crate::connectors::{FieldMapping, StorefrontConfig, StorefrontConnector};
use crate::forms::SuggestionDraft;
use crate::models::{RecordId, Suggestion};
use crate::storage::{LocalStore, SUGGESTIONS_KEY};

use super::{normalize, SyncError};

/// Single seam deciding whether suggestions live in the storefront API or in
/// the local store.
///
/// With `use_backend` the remote API is the record of truth and the local
/// store only receives what the API refused to take. Reads never merge the
/// two: a failed remote read returns the local collection instead.
pub struct SuggestionService {
    use_backend: bool,
    remote: Arc<dyn StorefrontConnector>,
    local: LocalStore<Suggestion>,
    mapping: FieldMapping,
}

impl SuggestionService {
    pub fn new(
        use_backend: bool,
        remote: Arc<dyn StorefrontConnector>,
        local: LocalStore<Suggestion>,
    ) -> Self {
        Self {
            use_backend,
            remote,
            local,
            mapping: FieldMapping::default(),
        }
    }

    pub fn from_settings(
        sync: &SyncSettings,
        storefront: &StorefrontConfig,
        remote: Arc<dyn StorefrontConnector>,
    ) -> Self {
        Self::new(
            sync.use_backend,
            remote,
            LocalStore::new(&sync.storage_dir, SUGGESTIONS_KEY),
        )
        .with_mapping(storefront.field_mapping.into())
    }

    /// Key set used for the remote create payload.
    pub fn with_mapping(mut self, mapping: FieldMapping) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn uses_backend(&self) -> bool {
        self.use_backend
    }

    pub fn local(&self) -> &LocalStore<Suggestion> {
        &self.local
    }

    /// Every suggestion from the current record of truth.
    ///
    /// Remote rows keep the API order (newest first for our server), local
    /// records keep insertion order.
    #[tracing::instrument(name = "Get all suggestions.", skip(self))]
    pub async fn get_all(&self) -> Vec<Suggestion> {
        if !self.use_backend {
            return self.local.get_all();
        }

        match self.remote.get_suggestions().await {
            Ok(rows) => rows.iter().map(normalize::suggestion_from_row).collect(),
            Err(err) => {
                tracing::warn!(
                    "Failed to fetch suggestions from storefront, serving local copy: {}",
                    err
                );
                self.local.get_all()
            }
        }
    }

    /// Suggestions with exactly `rating` stars, in [`Self::get_all`] order.
    /// `None` keeps everything.
    pub async fn by_rating(&self, rating: Option<u8>) -> Vec<Suggestion> {
        let all = self.get_all().await;
        match rating {
            Some(rating) => all.into_iter().filter(|s| s.has_rating(rating)).collect(),
            None => all,
        }
    }

    /// Validate and persist a new suggestion.
    ///
    /// A remote failure is logged and the suggestion is stored locally
    /// instead, so input is never lost. A remote success is not copied to the
    /// local store.
    #[tracing::instrument(name = "Create suggestion.", skip(self, draft))]
    pub async fn create(&self, draft: SuggestionDraft) -> Result<Suggestion, SyncError> {
        let draft = draft.trimmed();
        draft
            .validate()
            .map_err(|errors| SyncError::ValidationFailed(errors.to_string()))?;

        if self.use_backend {
            let payload = self.mapping.payload(&draft);
            match self.remote.create_suggestion(payload).await {
                Ok(body) => {
                    let suggestion = created_from_response(&body, draft);
                    tracing::info!(id = %suggestion.id, "Suggestion saved to storefront");
                    return Ok(suggestion);
                }
                Err(err) => {
                    tracing::warn!("Failed to send suggestion to storefront, saving locally: {}", err);
                }
            }
        }

        let suggestion = draft.into_suggestion(RecordId::generate(), Utc::now());
        let suggestion = self.local.add(suggestion)?;
        tracing::info!(id = %suggestion.id, "Suggestion saved locally");

        Ok(suggestion)
    }

    /// Moderation: drop one suggestion from whichever store holds it.
    ///
    /// Local tokens are only ever known to the local store; remote ids go to
    /// the API when the backend is enabled.
    #[tracing::instrument(name = "Delete suggestion.", skip(self))]
    pub async fn delete(&self, id: &RecordId) -> Result<(), SyncError> {
        if !id.is_assigned() {
            return Err(SyncError::ValidationFailed(
                "suggestion has no known id, list suggestions to find it".to_string(),
            ));
        }

        if self.use_backend && !id.is_local() {
            self.remote.delete_suggestion(id).await?;
            return Ok(());
        }

        let mut items = self.local.get_all();
        let before = items.len();
        items.retain(|s| &s.id != id);
        if items.len() == before {
            return Err(SyncError::NotFound(format!("suggestion {}", id)));
        }

        self.local.save_all(&items)?;
        Ok(())
    }
}

/// The API answers either with the stored row or with an acknowledgement
/// carrying at most the new id.
fn created_from_response(body: &Value, draft: SuggestionDraft) -> Suggestion {
    if normalize::is_suggestion_row(body) {
        return normalize::suggestion_from_row(body);
    }

    draft.into_suggestion(normalize::acknowledged_id(body), Utc::now())
}
