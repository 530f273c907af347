mod historia;
mod product;
mod record_id;
mod suggestion;

pub use historia::*;
pub use product::*;
pub use record_id::*;
pub use suggestion::*;
