//! Layered service configuration.
//!
//! Sources, later ones winning: built-in defaults, the optional file
//! `stringscope.toml` (or whichever file `STRINGSCOPE_CONFIG` names),
//! `STRINGSCOPE_*` environment variables and finally a plain `PORT`.

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;

pub const ENV_PREFIX: &str = "STRINGSCOPE";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let file = std::env::var("STRINGSCOPE_CONFIG").unwrap_or_else(|_| "stringscope".into());
        Self::layered(&file, Environment::with_prefix(ENV_PREFIX), std::env::var("PORT").ok())
    }

    /// Builds settings from explicit sources. `file` may be missing.
    pub fn layered(file: &str, environment: Environment, port: Option<String>) -> Result<Self> {
        let builder = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .set_default("log_level", "info")?
            .add_source(File::with_name(file).required(false))
            .add_source(environment)
            .set_override_option("port", port)?;
        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
