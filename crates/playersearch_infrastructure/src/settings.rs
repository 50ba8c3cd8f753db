use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::fmt;

use playersearch_interface::players::model::SearchMode;

const ENV_PREFIX: &str = "PLAYERSEARCH";

#[derive(Debug, Clone, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
    // Address of the player-data service, without the trailing `/players`.
    pub base_url: String,

    // No timeout is applied when absent.
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Search {
    #[serde(default)]
    pub default_mode: SearchMode,

    // When set, a response that resolves after a newer search was triggered is dropped.
    #[serde(default)]
    pub discard_stale_responses: bool,

    // When set, a failed search says so instead of showing the empty placeholder.
    #[serde(default)]
    pub show_fetch_errors: bool,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Render {
    // Adds the jersey, college and draft lines to every card.
    #[serde(default)]
    pub show_details: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub environment: String,
    pub logger: Logger,
    pub service: Service,
    #[serde(default)]
    pub search: Search,
    #[serde(default)]
    pub render: Render,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        };

        Self::from_file(&format!("config/{config}"))
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        // i.g., PLAYERSEARCH__SERVICE__BASE_URL=http://localhost:8080
        Self::load(path, ENV_PREFIX)
    }

    fn load(path: &str, env_prefix: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name(path))
            .add_source(Environment::with_prefix(env_prefix).separator("__"));

        builder
            .build()?
            // Deserialize (and thus freeze) the entire configuration.
            .try_deserialize()
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/players", self.base_url.trim_end_matches('/'))
    }
}
