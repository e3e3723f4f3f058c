//! Planner settings loaded from a TOML file. Every field has a default, so an
//! empty file is a valid configuration.
//!
//! ```toml
//! [search]
//! heuristic = "farthest-goal"
//! visit-order = "any"
//! time-limit = "30s"
//! memory-limit-mb = 2048
//! expansion-limit = 1000000
//!
//! [costs]
//! floor = 1.0
//! mud = 3.0
//! ```

use crate::search::{CellCosts, HeuristicName, SearchLimits, VisitOrder};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PlannerConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub costs: CellCosts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SearchConfig {
    #[serde(default)]
    pub heuristic: HeuristicName,
    #[serde(default)]
    pub visit_order: VisitOrder,
    #[serde(default, deserialize_with = "deserialize_duration")]
    pub time_limit: Option<Duration>,
    #[serde(default)]
    pub memory_limit_mb: Option<usize>,
    #[serde(default)]
    pub expansion_limit: Option<usize>,
}

impl PlannerConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&contents)
    }

    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            time_limit: self.search.time_limit,
            memory_limit_mb: self.search.memory_limit_mb,
            expansion_limit: self.search.expansion_limit,
        }
    }
}

/// Durations are written the way people write them, e.g. `"1m 30s"`.
fn deserialize_duration<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    humantime::parse_duration(&text)
        .map(Some)
        .map_err(serde::de::Error::custom)
}
