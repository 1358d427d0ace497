//! Logging initialization

use std::str::FromStr;
use std::sync::Once;

use serde::Deserialize;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

use crate::errors::{ExError, ExErrorKind};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Profile {
    /// Human-readable output, debug level
    #[default]
    Development,
    /// JSON lines, info level
    Production,
    /// No output; tests install the capture layer instead
    Test,
}

impl FromStr for Profile {
    type Err = ExError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            other => Err(ExError::new(ExErrorKind::Config)
                .with_op("parse_log_profile")
                .with_message(format!("unknown log profile '{}'", other))),
        }
    }
}

impl TryFrom<String> for Profile {
    type Error = ExError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Only the first call installs a subscriber; later calls are no-ops.
/// `RUST_LOG` overrides the profile's default filter.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("prodstore=debug")),
                )
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("prodstore=info")),
                )
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}
