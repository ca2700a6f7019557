use config::{Config, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;

use super::constants::{CONFIG_FILE, env, prod};

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSettings {
    pub application: ApplicationSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    /// Socket address the standalone server binds to
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// Fallback `EnvFilter` directive when `RUST_LOG` is not set
    pub filter: String,
}

impl ServiceSettings {
    /// Load settings from, in increasing priority: built-in defaults, the
    /// optional `config/base.json` file, and `ONBOARD__*` environment variables
    /// (a `.env` file is read first if present).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::builder()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator(env::ENV_SEPARATOR)
                    .separator(env::ENV_SEPARATOR),
            )
            .build()?
            .try_deserialize()
    }

    /// Config builder holding only the defaults.
    pub fn builder() -> Result<config::ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("application.address", prod::APP_ADDRESS)?
            .set_default("log.filter", prod::LOG_FILTER)
    }
}
