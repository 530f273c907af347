use crate::cli::context::{runtime, Context};
use crate::cli::{render, CliError};
use crate::forms::SuggestionDraft;
use crate::models::{RecordId, MAX_RATING};

use super::CallableTrait;

fn check_rating(rating: Option<u8>) -> Result<Option<u8>, CliError> {
    match rating {
        Some(rating) if rating > MAX_RATING => Err(CliError::InvalidArgument(format!(
            "rating must be between 0 and {}",
            MAX_RATING
        ))),
        other => Ok(other),
    }
}

/// `buzon suggestions list [--rating N] [--json]`
pub struct ListSuggestionsCommand {
    pub rating: Option<u8>,
    pub json: bool,
}

impl ListSuggestionsCommand {
    pub fn new(rating: Option<u8>, json: bool) -> Self {
        Self { rating, json }
    }
}

impl CallableTrait for ListSuggestionsCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let rating = check_rating(self.rating)?;
        let service = Context::load()?.suggestions()?;

        let suggestions = runtime()?.block_on(service.by_rating(rating));

        if self.json {
            println!("{}", serde_json::to_string_pretty(&suggestions)?);
            return Ok(());
        }
        if suggestions.is_empty() {
            eprintln!("No suggestions yet.");
            return Ok(());
        }

        for suggestion in &suggestions {
            println!("{}\n", render::suggestion(suggestion));
        }
        eprintln!("{} suggestion(s) total.", suggestions.len());

        Ok(())
    }
}

/// `buzon suggestions add --message TEXT [--name] [--title] [--rating N]`
pub struct AddSuggestionCommand {
    pub draft: SuggestionDraft,
}

impl AddSuggestionCommand {
    pub fn new(
        message: String,
        name: Option<String>,
        title: Option<String>,
        rating: Option<u8>,
    ) -> Self {
        Self {
            draft: SuggestionDraft {
                name,
                title,
                message,
                rating,
            },
        }
    }
}

impl CallableTrait for AddSuggestionCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        check_rating(self.draft.rating)?;
        let service = Context::load()?.suggestions()?;

        let suggestion = runtime()?
            .block_on(service.create(self.draft.clone()))
            .map_err(CliError::from)?;

        match &suggestion.id {
            RecordId::Local(token) => println!("Suggestion {} saved locally.", token),
            RecordId::Unassigned => println!("Suggestion sent to the storefront."),
            id => println!("Suggestion {} sent to the storefront.", id),
        }

        Ok(())
    }
}

/// `buzon suggestions delete ID`
pub struct DeleteSuggestionCommand {
    pub id: RecordId,
}

impl DeleteSuggestionCommand {
    pub fn new(id: &str) -> Self {
        Self {
            id: RecordId::from(id.trim()),
        }
    }
}

impl CallableTrait for DeleteSuggestionCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let service = Context::load()?.suggestions()?;

        runtime()?
            .block_on(service.delete(&self.id))
            .map_err(CliError::from)?;
        println!("Suggestion {} deleted.", self.id);

        Ok(())
    }
}

/// `buzon suggestions clear-local`
///
/// Drops suggestions that never reached the storefront.
pub struct ClearLocalCommand;

impl CallableTrait for ClearLocalCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let service = Context::load()?.suggestions()?;
        let dropped = service.local().len();

        service.local().clear().map_err(|err| CliError::Sync(err.into()))?;
        println!("Removed {} local suggestion(s).", dropped);

        Ok(())
    }
}
