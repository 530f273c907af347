//! Terminal front-end over the synchronization services.
//!
//! Every subcommand of the `buzon` binary is a [`commands::CallableTrait`]
//! object. Commands load [`crate::configuration::ClientSettings`], build the
//! services through [`context::Context`] and block on them with a
//! current-thread runtime.

pub mod commands;
pub mod context;
pub mod error;
pub mod render;

pub use error::CliError;
