use crate::cli::context::{runtime, Context};
use crate::cli::CliError;

use super::CallableTrait;

/// `buzon historia show`
pub struct ShowHistoriaCommand;

impl CallableTrait for ShowHistoriaCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let catalog = Context::load()?.catalog()?;
        let text = runtime()?
            .block_on(catalog.historia())
            .map_err(CliError::from)?;

        if text.is_empty() {
            eprintln!("No historia has been written yet.");
        } else {
            println!("{}", text);
        }

        Ok(())
    }
}

/// `buzon historia set TEXT`
pub struct SetHistoriaCommand {
    pub text: String,
}

impl SetHistoriaCommand {
    pub fn new(text: String) -> Self {
        Self { text }
    }
}

impl CallableTrait for SetHistoriaCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let catalog = Context::load()?.catalog()?;

        runtime()?
            .block_on(catalog.update_historia(&self.text))
            .map_err(CliError::from)?;
        println!("Historia updated.");

        Ok(())
    }
}
