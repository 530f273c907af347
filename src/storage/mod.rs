//! Local persistence for the offline fallback.
//!
//! Each collection is a JSON array stored in its own file under the configured
//! storage directory. One writer per directory is assumed.

mod errors;
mod local;

pub use errors::StorageError;
pub use local::LocalStore;

/// Collection holding suggestions created while the remote API was unusable.
pub const SUGGESTIONS_KEY: &str = "suggestions";

/// Last product listing read from the API, served when the next read fails.
pub const PRODUCTS_KEY: &str = "products";
