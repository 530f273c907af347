pub mod historia;
pub mod product;
pub mod suggestion;
