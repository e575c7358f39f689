//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Transaction cost model applied to every generated edge
    #[serde(default)]
    pub cost_model: CostModelConfig,

    /// Node lists and anchor
    #[serde(default)]
    pub nodes: NodesConfig,

    /// Snapshot cache sizing
    #[serde(default)]
    pub cache: CacheConfig,

    /// Request limits
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Cost model, in units per 10k
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostModelConfig {
    #[serde(default = "default_base_cost")]
    pub base_cost: f64,

    #[serde(default = "default_extra_cost")]
    pub extra_cost: f64,
}

impl CostModelConfig {
    pub fn total_cost(&self) -> f64 {
        self.base_cost + self.extra_cost
    }
}

impl Default for CostModelConfig {
    fn default() -> Self {
        Self {
            base_cost: default_base_cost(),
            extra_cost: default_extra_cost(),
        }
    }
}

fn default_base_cost() -> f64 {
    10.0
}

fn default_extra_cost() -> f64 {
    5.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodesConfig {
    /// Nodes used for custom datasets when the request names none
    #[serde(default = "default_node_list")]
    pub default_list: Vec<String>,

    /// Anchor node, always valued at 1.0
    #[serde(default = "default_anchor_node")]
    pub anchor_node: String,

    /// Nodes advertised to callers
    #[serde(default = "default_available_nodes")]
    pub available: Vec<String>,
}

impl Default for NodesConfig {
    fn default() -> Self {
        Self {
            default_list: default_node_list(),
            anchor_node: default_anchor_node(),
            available: default_available_nodes(),
        }
    }
}

fn default_node_list() -> Vec<String> {
    ["USD", "EUR", "GBP", "JPY", "CHF", "CAD"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_anchor_node() -> String {
    "USD".to_string()
}

fn default_available_nodes() -> Vec<String> {
    crate::generation::scenarios::BASE_VALUES
        .iter()
        .map(|(id, _)| id.to_string())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_cache_size")]
    pub max_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: default_cache_size(),
        }
    }
}

fn default_cache_size() -> usize {
    50
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Largest node list accepted for a custom dataset
    #[serde(default = "default_max_custom_nodes")]
    pub max_custom_nodes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_custom_nodes: default_max_custom_nodes(),
        }
    }
}

fn default_max_custom_nodes() -> usize {
    200
}
