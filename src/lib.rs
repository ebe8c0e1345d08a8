// Library entry point for the Hanum charge workflow.
// The chat frontend (command registration, modal rendering, the bot event
// loop) lives elsewhere and consumes these modules.

pub mod clients;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod services;
pub mod utility;

pub use config::AppConfig;
pub use error::{ChargeError, LedgerError};
pub use models::AppState;
