//! Search configuration.

use crate::error::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Options for [`Solver`](crate::Solver).
///
/// None of these change which action is chosen; they only trade memory or
/// threads for speed, or bound wall time.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Cache exact values by board within one search.
    memoize: bool,

    /// Evaluate each root action on its own thread.
    parallel_root: bool,

    /// Abort with a timeout error after this many milliseconds.
    deadline_ms: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            memoize: true,
            parallel_root: false,
            deadline_ms: None,
        }
    }
}

impl SearchConfig {
    /// Full unpruned, unmemoized, sequential traversal.
    pub fn reference() -> Self {
        Self {
            memoize: false,
            parallel_root: false,
            deadline_ms: None,
        }
    }

    /// Sets whether values are memoized.
    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    /// Sets whether root actions are searched in parallel.
    pub fn with_parallel_root(mut self, parallel_root: bool) -> Self {
        self.parallel_root = parallel_root;
        self
    }

    /// Sets the wall-time budget.
    pub fn with_deadline_ms(mut self, deadline_ms: Option<u64>) -> Self {
        self.deadline_ms = deadline_ms;
        self
    }

    /// Deadline as a [`Duration`].
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_ms.map(Duration::from_millis)
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        debug!(?config, "Parsed search config");
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        info!(
            memoize = config.memoize,
            parallel_root = config.parallel_root,
            deadline_ms = ?config.deadline_ms,
            "Config loaded successfully"
        );
        Ok(config)
    }
}
