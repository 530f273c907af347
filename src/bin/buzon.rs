//! `buzon` CLI binary.
//!
//! Reads and writes the storefront data through the same synchronization
//! layer the web page uses:
//!
//! ```text
//! buzon suggestions list --rating 5
//! buzon suggestions add --message "Abrir los domingos" --rating 4
//! buzon products list --json
//! buzon historia set "Somos una tienda familiar"
//! ```
//!
//! Configuration comes from `configuration.yaml` and `APP_*` variables, e.g.
//! `APP_SYNC__USE_BACKEND=false` keeps everything in the local store.

use buzon::cli::commands::{historia, products, suggestions, CallableTrait};
use buzon::telemetry::{get_subscriber, init_subscriber};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "buzon",
    version,
    about = "Suggestion box and catalog of the storefront",
    long_about = "Buzón CLI: list and submit storefront suggestions, manage products\n\
        and the \"historia\" text. Suggestions fall back to a local JSON store\n\
        whenever the storefront API cannot be reached."
)]
struct Cli {
    #[command(subcommand)]
    command: BuzonCommands,
}

#[derive(Debug, Subcommand)]
enum BuzonCommands {
    /// Read and submit suggestions
    Suggestions {
        #[command(subcommand)]
        command: SuggestionCommands,
    },
    /// Manage the product catalog
    Products {
        #[command(subcommand)]
        command: ProductCommands,
    },
    /// Show or replace the "historia" text
    Historia {
        #[command(subcommand)]
        command: HistoriaCommands,
    },
}

#[derive(Debug, Subcommand)]
enum SuggestionCommands {
    /// List suggestions, newest first when served by the API
    List {
        /// Only suggestions with exactly this many stars (0-5)
        #[arg(long)]
        rating: Option<u8>,
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Submit a new suggestion
    Add {
        #[arg(long)]
        message: String,
        /// Author, "Anónimo" when omitted
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        title: Option<String>,
        /// Stars from 0 to 5
        #[arg(long)]
        rating: Option<u8>,
    },
    /// Delete a suggestion by id
    Delete { id: String },
    /// Drop every suggestion held in the local store
    #[command(name = "clear-local")]
    ClearLocal,
}

#[derive(Debug, Subcommand)]
enum ProductCommands {
    List {
        #[arg(long)]
        json: bool,
    },
    Add {
        #[arg(long)]
        name: String,
        /// Price in whole pesos
        #[arg(long)]
        price: i64,
        #[arg(long)]
        stock: i64,
        #[arg(long)]
        description: Option<String>,
        /// Image URL
        #[arg(long)]
        image: Option<String>,
    },
    Delete { id: String },
}

#[derive(Debug, Subcommand)]
enum HistoriaCommands {
    Show,
    Set { text: String },
}

fn main() {
    let subscriber = get_subscriber("buzon".into(), "warn".into(), std::io::stderr);
    init_subscriber(subscriber);

    let cli = Cli::parse();
    if let Err(err) = get_command(cli).call() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn get_command(cli: Cli) -> Box<dyn CallableTrait> {
    match cli.command {
        BuzonCommands::Suggestions { command } => match command {
            SuggestionCommands::List { rating, json } => {
                Box::new(suggestions::ListSuggestionsCommand::new(rating, json))
            }
            SuggestionCommands::Add {
                message,
                name,
                title,
                rating,
            } => Box::new(suggestions::AddSuggestionCommand::new(
                message, name, title, rating,
            )),
            SuggestionCommands::Delete { id } => {
                Box::new(suggestions::DeleteSuggestionCommand::new(&id))
            }
            SuggestionCommands::ClearLocal => Box::new(suggestions::ClearLocalCommand),
        },
        BuzonCommands::Products { command } => match command {
            ProductCommands::List { json } => Box::new(products::ListProductsCommand::new(json)),
            ProductCommands::Add {
                name,
                price,
                stock,
                description,
                image,
            } => Box::new(products::AddProductCommand::new(
                name,
                price,
                stock,
                description,
                image,
            )),
            ProductCommands::Delete { id } => Box::new(products::DeleteProductCommand::new(&id)),
        },
        BuzonCommands::Historia { command } => match command {
            HistoriaCommands::Show => Box::new(historia::ShowHistoriaCommand),
            HistoriaCommands::Set { text } => Box::new(historia::SetHistoriaCommand::new(text)),
        },
    }
}
