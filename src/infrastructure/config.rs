use crate::domain::category::GraphCategory;
use crate::error::Result;
use serde::Deserialize;
use std::collections::BTreeMap;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct GraphConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub categories: BTreeMap<String, GraphCategory>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

pub fn load_graph_config() -> Result<GraphConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/graph"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Parse a graph configuration from an in-memory TOML document
pub fn parse_graph_config(source: &str) -> Result<GraphConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::from_str(source, config::FileFormat::Toml))
        .build()?;

    Ok(settings.try_deserialize()?)
}
