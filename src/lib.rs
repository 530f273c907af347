pub mod cli;
pub mod configuration;
pub mod connectors;
pub mod db;
pub mod forms;
pub(crate) mod helpers;
pub mod models;
pub mod routes;
pub mod services;
pub mod startup;
pub mod storage;
pub mod telemetry;
