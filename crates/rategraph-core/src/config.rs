//! Engine configuration for rategraph
//!
//! Configuration is read from TOML (or YAML for `.yaml`/`.yml` files).
//! Every section is optional and falls back to built-in defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphError, Result};
use crate::graph::weights::COST_SCALE;

pub use types::{CacheConfig, CostModelConfig, EngineConfig, LimitsConfig, NodesConfig};

const CONFIG_DIR: &str = "rategraph";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_PATH_ENV_VAR: &str = "RATEGRAPH_CONFIG";

impl EngineConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GraphError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );

        let config: EngineConfig = if is_yaml {
            serde_yaml::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Resolve configuration: explicit path, then `RATEGRAPH_CONFIG`,
    /// then the user config directory, then defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_PATH_ENV_VAR) {
            return Self::load(Path::new(&env_path));
        }

        if let Some(path) = Self::user_config_path() {
            if path.exists() {
                return Self::load(&path);
            }
        }

        Ok(Self::default())
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<()> {
        let cost = &self.cost_model;
        if cost.base_cost < 0.0 || cost.extra_cost < 0.0 {
            crate::bail_validation!(
                "cost_model costs must be non-negative (base_cost={}, extra_cost={})",
                cost.base_cost,
                cost.extra_cost
            );
        }
        if cost.total_cost() >= COST_SCALE {
            crate::bail_validation!(
                "cost_model total cost {} must be below {}",
                cost.total_cost(),
                COST_SCALE
            );
        }
        if self.cache.max_size == 0 {
            crate::bail_validation!("cache.max_size must be at least 1");
        }
        if !self.nodes.default_list.is_empty()
            && !self.nodes.default_list.contains(&self.nodes.anchor_node)
        {
            crate::bail_validation!(
                "anchor node {} is not part of nodes.default_list",
                self.nodes.anchor_node
            );
        }
        Ok(())
    }
}
