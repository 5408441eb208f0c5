use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::hours::DayAliases;

const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the pipeline writes NDJSON dumps into
    pub output_dir: String,
    /// Directory holding the searchable-points CSV grids
    pub points_dir: String,
    /// Per-spider overrides, keyed by api name
    pub spiders: BTreeMap<String, SpiderConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SpiderConfig {
    /// Extra day-label substitutions applied before day resolution,
    /// e.g. `"Boxing Day" = "Sat"`
    pub day_aliases: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: "output".to_string(),
            points_dir: "data".to_string(),
            spiders: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load `config.toml` from the working directory, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        if !Path::new(CONFIG_PATH).exists() {
            debug!("no {} found, using default configuration", CONFIG_PATH);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(CONFIG_PATH)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Day-alias table for one spider: the built-in defaults plus any
    /// configured overrides, applied in configuration order.
    pub fn day_aliases_for(&self, api_name: &str) -> DayAliases {
        let mut aliases = DayAliases::default();
        if let Some(spider) = self.spiders.get(api_name) {
            for (from, to) in &spider.day_aliases {
                aliases = aliases.with_alias(from, to);
            }
        }
        aliases
    }
}
