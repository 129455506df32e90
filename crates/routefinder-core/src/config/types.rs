//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::search::Strategy;

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "routefinder.toml";

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Map file layout
    #[serde(default)]
    pub map: MapConfig,

    /// Search defaults
    #[serde(default)]
    pub search: SearchConfig,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            map: MapConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

/// Layout of village map files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Column separator; must be a single character
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Whether the first line holds the number of villages
    #[serde(default = "default_count_header")]
    pub count_header: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            count_header: default_count_header(),
        }
    }
}

/// Defaults for the `search` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default, with = "strategy_name")]
    pub strategy: Strategy,

    /// Print every intermediate snapshot, not only the result
    #[serde(default = "default_show_steps")]
    pub show_steps: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            show_steps: default_show_steps(),
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_delimiter() -> String {
    "\t".to_string()
}

fn default_count_header() -> bool {
    true
}

fn default_show_steps() -> bool {
    true
}

/// Strategy names accept the same aliases as the command line
mod strategy_name {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::search::Strategy;

    pub fn serialize<S: Serializer>(strategy: &Strategy, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(strategy)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Strategy, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
