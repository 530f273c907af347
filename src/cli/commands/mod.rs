mod callable;
pub mod historia;
pub mod products;
pub mod suggestions;

pub use callable::*;
