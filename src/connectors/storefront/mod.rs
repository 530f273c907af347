pub mod client;
pub mod connector;
pub mod init;
pub mod mapping;
pub mod mock;

pub use client::StorefrontClient;
pub use connector::StorefrontConnector;
pub use init::init;
pub use mapping::FieldMapping;
pub use mock::MockStorefrontConnector;
