//! Storefront API connector
//!
//! Everything that leaves the process over HTTP goes through
//! [`StorefrontConnector`]. Services hold an `Arc<dyn StorefrontConnector>`, so
//! tests swap in [`storefront::MockStorefrontConnector`] or point the real
//! client at a wiremock server.

pub mod config;
pub mod errors;
pub mod storefront;

pub use config::{RemoteSchema, StorefrontConfig};
pub use errors::ConnectorError;
pub use storefront::{
    FieldMapping, MockStorefrontConnector, StorefrontClient, StorefrontConnector,
};
