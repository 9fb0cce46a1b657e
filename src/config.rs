//! Builder configuration.
//!
//! Applications pick a dialect from `config/config.toml` (section
//! `[sqlbuilder]`) or from environment variables such as
//! `SQLCOLUMNS__SQLBUILDER__DIALECT=postgres`, using `BuilderConfig::load()`.

use crate::dialect::SqlDialect;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

const CONFIG_FILE: &str = "config/config.toml";
const ENV_PREFIX: &str = "SQLCOLUMNS";
const SECTION: &str = "sqlbuilder";

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct BuilderConfig {
    #[serde(default)]
    pub dialect: SqlDialect,
}

impl BuilderConfig {
    /// Load the builder configuration from `config/config.toml`, falling back to env vars.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        let settings = match builder.build() {
            Ok(cfg) => cfg,
            Err(err) => {
                // File existed but could not be read or parsed; retry with env only
                if std::path::Path::new(CONFIG_FILE).exists() {
                    log::warn!(
                        "failed to load {}, falling back to env. Error: {}",
                        CONFIG_FILE,
                        err
                    );
                }
                Config::builder()
                    .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
                    .build()
                    .map_err(|env_err| {
                        ConfigError::Message(format!(
                            "Failed to load configuration from file and env: {}, then env-only error: {}",
                            err, env_err
                        ))
                    })?
            }
        };

        Self::from_settings(&settings)
    }

    /// Parse the configuration from TOML text.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Self::from_settings(&settings)
    }

    fn from_settings(settings: &Config) -> Result<Self, ConfigError> {
        match settings.get::<BuilderConfig>(SECTION) {
            Ok(cfg) => Ok(cfg),
            Err(ConfigError::NotFound(_)) => {
                log::debug!("no [{}] configuration, using defaults", SECTION);
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::Message(format!(
                "Builder configuration could not be loaded: {}",
                e
            ))),
        }
    }

    /// Dialect used when serializing columns
    pub fn dialect(&self) -> SqlDialect {
        self.dialect
    }
}
