pub mod health_checks;
pub(crate) mod historia;
pub(crate) mod product;
pub(crate) mod suggestion;
pub(crate) mod test;

pub use health_checks::*;
