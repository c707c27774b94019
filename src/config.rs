//! Application configuration management.
//!
//! Configuration is loaded from environment variables and deserialized into a
//! type-safe struct with the `envy` crate.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,
}

/// Default port if SERVER_PORT is not set.
fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is loaded first if one exists, then the environment is
    /// deserialized into a [Config]. Field names map to upper-case variable
    /// names, e.g. `database_url` reads `DATABASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value cannot
    /// be parsed into the expected type.
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        envy::from_env::<Config>()
    }
}
