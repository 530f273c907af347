//! Synchronization layer between the presentation and the two stores.

mod catalog;
mod errors;
pub mod normalize;
mod suggestion;

pub use catalog::CatalogService;
pub use errors::SyncError;
pub use suggestion::SuggestionService;

#[cfg(test)]
mod tests;
