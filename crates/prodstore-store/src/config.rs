//! Store configuration
//!
//! Read from `PRODSTORE_*` environment variables:
//!
//! | variable | default |
//! |---|---|
//! | `PRODSTORE_DATABASE_PATH` | `prodstore.db` |
//! | `PRODSTORE_LOG_PROFILE` | `development` |

use std::path::PathBuf;

use config::{Config, Environment};
use prodstore_core::logging_facility::{self, Profile};
use serde::Deserialize;

use crate::errors::{config_error, Result};

const ENV_PREFIX: &str = "PRODSTORE";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    #[serde(default)]
    pub log_profile: Profile,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("prodstore.db")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            log_profile: Profile::default(),
        }
    }
}

impl StoreConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::load(Environment::with_prefix(ENV_PREFIX))
    }

    /// Load from an explicit variable map instead of the process environment
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: config::Map<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::load(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn load(source: Environment) -> Result<Self> {
        Config::builder()
            .add_source(source)
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error)
    }

    /// Install the logging subscriber for this configuration's profile
    pub fn init_logging(&self) {
        logging_facility::init(self.log_profile);
    }
}
