pub mod historia;
pub mod product;
pub mod suggestion;

pub use historia::Historia;
pub use product::ProductForm;
pub use suggestion::{AddSuggestion, SuggestionDraft};
