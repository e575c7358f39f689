//! Preset graph scenarios
//!
//! Each scenario fixes a node list and an explicit pair list, valued from
//! [`BASE_VALUES`].

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{GraphError, Result};

/// Reference value per node, relative to the `USD` anchor
pub const BASE_VALUES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 0.92),
    ("GBP", 0.78),
    ("JPY", 1.45),
    ("CHF", 0.96),
    ("CAD", 1.32),
    ("AUD", 1.48),
    ("NZD", 1.62),
    ("SEK", 1.12),
    ("NOK", 1.08),
    ("SGD", 1.36),
    ("HKD", 1.29),
    ("MXN", 1.55),
    ("BRL", 1.72),
    ("INR", 1.2),
    ("CNY", 1.14),
    ("KRW", 1.31),
    ("ZAR", 1.58),
    ("PLN", 1.05),
    ("CZK", 1.03),
    ("TRY", 1.67),
    ("AED", 0.98),
    ("SAR", 0.99),
    ("THB", 1.25),
    ("MYR", 1.22),
    ("IDR", 1.4),
    ("PHP", 1.18),
];

pub const DEFAULT_SCENARIO_ID: &str = "negative_cycle";

const SCENARIO_IDS: &[&str] = &[
    "negative_cycle",
    "sparse_graph",
    "dense_graph",
    "hub_and_spoke",
    "disconnected_components",
    "balanced_tree",
    "linear_chain",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioInfo {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub nodes: Vec<String>,
    pub pairs: Vec<(String, String)>,
}

impl ScenarioInfo {
    fn new(
        id: &str,
        display_name: &str,
        description: &str,
        nodes: &[&str],
        pairs: Vec<(String, String)>,
    ) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            description: description.to_string(),
            nodes: nodes.iter().map(|n| n.to_string()).collect(),
            pairs,
        }
    }

    /// Base value for every scenario node
    pub fn values(&self) -> BTreeMap<String, f64> {
        self.nodes
            .iter()
            .filter_map(|n| base_value(n).map(|v| (n.clone(), v)))
            .collect()
    }
}

pub fn base_value(id: &str) -> Option<f64> {
    BASE_VALUES
        .iter()
        .find(|(node, _)| *node == id)
        .map(|(_, value)| *value)
}

fn both_ways(pairs: &mut Vec<(String, String)>, a: &str, b: &str) {
    pairs.push((a.to_string(), b.to_string()));
    pairs.push((b.to_string(), a.to_string()));
}

fn full_bidirectional(nodes: &[&str]) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            both_ways(&mut pairs, a, b);
        }
    }
    pairs
}

fn chain(nodes: &[&str]) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for w in nodes.windows(2) {
        both_ways(&mut pairs, w[0], w[1]);
    }
    pairs
}

fn ring(nodes: &[&str], pairs: &mut Vec<(String, String)>) {
    for (i, a) in nodes.iter().enumerate() {
        both_ways(pairs, a, nodes[(i + 1) % nodes.len()]);
    }
}

/// First `n` nodes of the base table, in table order
fn leading(n: usize) -> Vec<&'static str> {
    BASE_VALUES.iter().take(n).map(|(id, _)| *id).collect()
}

fn negative_cycle() -> ScenarioInfo {
    let core = ["USD", "EUR", "GBP", "JPY", "CHF", "CAD"];
    let extra = ["AUD", "NZD", "SEK", "NOK", "SGD"];

    let mut pairs = full_bidirectional(&core);
    for node in extra {
        both_ways(&mut pairs, "USD", node);
        both_ways(&mut pairs, "EUR", node);
    }

    let nodes: Vec<&str> = core.iter().chain(extra.iter()).copied().collect();
    ScenarioInfo::new(
        "negative_cycle",
        "Negative Cycle",
        "Dense loop structure for testing cycle detection and path costs.",
        &nodes,
        pairs,
    )
}

fn sparse_graph() -> ScenarioInfo {
    let nodes = leading(13);
    ScenarioInfo::new(
        "sparse_graph",
        "Sparse Graph (Chain)",
        "Minimal connections in a linear chain.",
        &nodes,
        chain(&nodes),
    )
}

fn dense_graph() -> ScenarioInfo {
    let nodes = leading(12);
    ScenarioInfo::new(
        "dense_graph",
        "Dense Graph",
        "High density with most node pairs available.",
        &nodes,
        full_bidirectional(&nodes),
    )
}

fn hub_and_spoke() -> ScenarioInfo {
    let nodes = leading(14);
    let mut pairs = Vec::new();
    for node in nodes.iter().filter(|n| **n != "USD") {
        both_ways(&mut pairs, "USD", node);
    }
    ScenarioInfo::new(
        "hub_and_spoke",
        "Hub & Spoke",
        "Star topology centered on a single node.",
        &nodes,
        pairs,
    )
}

fn disconnected_components() -> ScenarioInfo {
    let group_one = ["USD", "EUR", "GBP", "JPY", "CHF", "CAD"];
    let group_two = ["AUD", "NZD", "SEK", "NOK", "SGD", "HKD"];

    let mut pairs = Vec::new();
    ring(&group_one, &mut pairs);
    ring(&group_two, &mut pairs);

    let nodes: Vec<&str> = group_one.iter().chain(group_two.iter()).copied().collect();
    ScenarioInfo::new(
        "disconnected_components",
        "Disconnected Components",
        "Two clusters with no edges between them.",
        &nodes,
        pairs,
    )
}

fn balanced_tree() -> ScenarioInfo {
    let nodes = leading(13);
    let links = [
        ("USD", "EUR"),
        ("USD", "GBP"),
        ("EUR", "JPY"),
        ("EUR", "CHF"),
        ("GBP", "CAD"),
        ("GBP", "AUD"),
        ("JPY", "NZD"),
        ("JPY", "SEK"),
        ("CHF", "NOK"),
        ("CHF", "SGD"),
        ("CAD", "HKD"),
        ("AUD", "MXN"),
    ];

    let mut pairs = Vec::new();
    for (parent, child) in links {
        both_ways(&mut pairs, parent, child);
    }
    ScenarioInfo::new(
        "balanced_tree",
        "Balanced Tree",
        "Hierarchical tree structure for traversal tests.",
        &nodes,
        pairs,
    )
}

fn linear_chain() -> ScenarioInfo {
    let nodes = leading(11);
    ScenarioInfo::new(
        "linear_chain",
        "Linear Chain",
        "Single-path topology for shortest-path tests.",
        &nodes,
        chain(&nodes),
    )
}

/// All presets, in display order
pub fn available_scenarios() -> Vec<ScenarioInfo> {
    vec![
        negative_cycle(),
        sparse_graph(),
        dense_graph(),
        hub_and_spoke(),
        disconnected_components(),
        balanced_tree(),
        linear_chain(),
    ]
}

/// Look up a preset by id
pub fn get_scenario(id: &str) -> Result<ScenarioInfo> {
    let scenario = match id {
        "negative_cycle" => negative_cycle(),
        "sparse_graph" => sparse_graph(),
        "dense_graph" => dense_graph(),
        "hub_and_spoke" => hub_and_spoke(),
        "disconnected_components" => disconnected_components(),
        "balanced_tree" => balanced_tree(),
        "linear_chain" => linear_chain(),
        _ => {
            return Err(GraphError::not_found(
                "scenario",
                format!("{}. Available: {}", id, SCENARIO_IDS.join(", ")),
            ))
        }
    };
    Ok(scenario)
}
