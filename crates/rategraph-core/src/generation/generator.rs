use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::error::{GraphError, Result};

/// Anchor value in every generated dataset
pub const ANCHOR_VALUE: f64 = 1.0;

pub const DEFAULT_VALUE_MIN: f64 = 0.5;
pub const DEFAULT_VALUE_MAX: f64 = 2.0;

/// How a dataset's node values were produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetType {
    Scenario,
    Custom,
    Random,
}

impl DatasetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetType::Scenario => "scenario",
            DatasetType::Custom => "custom",
            DatasetType::Random => "random",
        }
    }
}

impl fmt::Display for DatasetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spread of the multiplicative noise applied to random values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variance {
    Low,
    #[default]
    Medium,
    High,
}

impl Variance {
    /// Half-width of the noise factor around 1.0
    pub fn spread(&self) -> f64 {
        match self {
            Variance::Low => 0.1,
            Variance::Medium => 0.2,
            Variance::High => 0.4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variance::Low => "low",
            Variance::Medium => "medium",
            Variance::High => "high",
        }
    }
}

impl FromStr for Variance {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Variance::Low),
            "medium" => Ok(Variance::Medium),
            "high" => Ok(Variance::High),
            other => Err(GraphError::UsageError(format!(
                "unknown variance '{}' (expected low, medium or high)",
                other
            ))),
        }
    }
}

/// Parameters for [`DatasetGenerator::random`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomParams {
    pub value_min: f64,
    pub value_max: f64,
    pub variance: Variance,
}

impl Default for RandomParams {
    fn default() -> Self {
        Self {
            value_min: DEFAULT_VALUE_MIN,
            value_max: DEFAULT_VALUE_MAX,
            variance: Variance::default(),
        }
    }
}

/// Node values plus provenance, ready for the graph builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedDataset {
    pub dataset_type: DatasetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario_id: Option<String>,
    #[serde(default)]
    pub generation_params: BTreeMap<String, Value>,
    pub node_values: BTreeMap<String, f64>,
    pub timestamp: DateTime<Utc>,
    pub nodes: Vec<String>,
    pub anchor_node: String,
}

impl GeneratedDataset {
    /// `<%Y-%m-%dT%H-%M-%SZ>_<scenario id or dataset type>_<anchor>`
    pub fn snapshot_id(&self) -> String {
        let source = self
            .scenario_id
            .as_deref()
            .unwrap_or(self.dataset_type.as_str());
        format!(
            "{}_{}_{}",
            self.timestamp.format("%Y-%m-%dT%H-%M-%SZ"),
            source,
            self.anchor_node
        )
    }
}

fn check_positive(values: &BTreeMap<String, f64>) -> Result<()> {
    for (node, value) in values {
        if !value.is_finite() || *value <= 0.0 {
            crate::bail_validation!("value for {} must be positive, got {}", node, value);
        }
    }
    Ok(())
}

/// Produces node-value datasets from presets, caller values or a seeded RNG
#[derive(Debug, Clone)]
pub struct DatasetGenerator {
    rng: Pcg64Mcg,
    seed: Option<u64>,
}

impl Default for DatasetGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}

impl DatasetGenerator {
    /// Seeded generators are reproducible; unseeded ones draw from the thread RNG
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => Pcg64Mcg::seed_from_u64(seed),
            None => Pcg64Mcg::from_rng(&mut rand::rng()),
        };
        Self { rng, seed }
    }

    pub fn from_scenario(
        &self,
        scenario_id: &str,
        values: BTreeMap<String, f64>,
        anchor_node: &str,
        nodes: Vec<String>,
    ) -> Result<GeneratedDataset> {
        check_positive(&values)?;
        Ok(GeneratedDataset {
            dataset_type: DatasetType::Scenario,
            scenario_id: Some(scenario_id.to_string()),
            generation_params: BTreeMap::from([("scenario".to_string(), json!(scenario_id))]),
            node_values: values,
            timestamp: Utc::now(),
            nodes,
            anchor_node: anchor_node.to_string(),
        })
    }

    /// Caller-supplied values; the anchor defaults to 1.0 when absent
    pub fn from_custom(
        &self,
        values: &BTreeMap<String, f64>,
        anchor_node: &str,
        nodes: Vec<String>,
    ) -> Result<GeneratedDataset> {
        let mut node_values = values.clone();
        node_values
            .entry(anchor_node.to_string())
            .or_insert(ANCHOR_VALUE);
        check_positive(&node_values)?;

        Ok(GeneratedDataset {
            dataset_type: DatasetType::Custom,
            scenario_id: None,
            generation_params: BTreeMap::from([("custom".to_string(), json!(true))]),
            node_values,
            timestamp: Utc::now(),
            nodes,
            anchor_node: anchor_node.to_string(),
        })
    }

    /// Random values: anchor fixed at 1.0, every other node
    /// `uniform(min, max) * uniform(1 - v, 1 + v)`
    pub fn random(
        &mut self,
        anchor_node: &str,
        nodes: Vec<String>,
        params: RandomParams,
    ) -> Result<GeneratedDataset> {
        let RandomParams {
            value_min,
            value_max,
            variance,
        } = params;
        if !value_min.is_finite()
            || !value_max.is_finite()
            || value_min <= 0.0
            || value_min > value_max
        {
            crate::bail_validation!(
                "random values need 0 < value_min <= value_max (got {}..{})",
                value_min,
                value_max
            );
        }

        let spread = variance.spread();
        let mut node_values = BTreeMap::new();
        for node in &nodes {
            let value = if node == anchor_node {
                ANCHOR_VALUE
            } else {
                let base = self.rng.random_range(value_min..=value_max);
                let noise = self.rng.random_range((1.0 - spread)..=(1.0 + spread));
                base * noise
            };
            node_values.insert(node.clone(), value);
        }
        node_values
            .entry(anchor_node.to_string())
            .or_insert(ANCHOR_VALUE);

        debug!(
            nodes = node_values.len(),
            variance = variance.as_str(),
            seed = ?self.seed,
            "random_values"
        );

        let mut generation_params = BTreeMap::from([
            ("value_min".to_string(), json!(value_min)),
            ("value_max".to_string(), json!(value_max)),
            ("variance".to_string(), json!(variance.as_str())),
        ]);
        if let Some(seed) = self.seed {
            generation_params.insert("seed".to_string(), json!(seed));
        }

        Ok(GeneratedDataset {
            dataset_type: DatasetType::Random,
            scenario_id: None,
            generation_params,
            node_values,
            timestamp: Utc::now(),
            nodes,
            anchor_node: anchor_node.to_string(),
        })
    }
}
