use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Body of `GET`/`PUT /api/config`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Historia {
    #[serde(default)]
    #[validate(max_length = 20000)]
    pub valor: String,
}
