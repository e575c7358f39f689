//! Value parsers for CLI arguments

use rategraph_core::generation::Variance;
use rategraph_core::graph::WeightKind;

/// Parse a directed pair written as `SOURCE:TARGET`
pub fn parse_pair(s: &str) -> Result<(String, String), String> {
    match s.split_once(':') {
        Some((source, target)) if !source.trim().is_empty() && !target.trim().is_empty() => {
            Ok((source.trim().to_string(), target.trim().to_string()))
        }
        _ => Err(format!("invalid pair '{}' (expected SOURCE:TARGET)", s)),
    }
}

pub fn parse_weight_kind(s: &str) -> Result<WeightKind, String> {
    s.parse::<WeightKind>().map_err(|e| e.to_string())
}

pub fn parse_variance(s: &str) -> Result<Variance, String> {
    s.parse::<Variance>().map_err(|e| e.to_string())
}
