//! Edge weight derivation
//!
//! Every edge carries two weights derived from the same total cost:
//! - `weight_cost`: the additive cost itself
//! - `weight_neglog`: `-ln(effective_value)`, where the effective value is the
//!   raw ratio scaled down by the cost. Summing neglog weights along a path
//!   multiplies the underlying ratios, so a negative cycle is a profitable loop.

use crate::error::Result;

/// Costs are expressed in units per `COST_SCALE` (basis points)
pub const COST_SCALE: f64 = 10_000.0;

/// All quantities derived for one edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeWeights {
    pub total_cost: f64,
    pub effective_value: f64,
    pub weight_cost: f64,
    pub weight_neglog: f64,
}

/// Scale a raw ratio down by its cost: `raw_value * (1 - total_cost / 10000)`
pub fn effective_value(raw_value: f64, total_cost: f64) -> Result<f64> {
    if total_cost >= COST_SCALE {
        crate::bail_domain!(
            "total cost {} per {} units would make value non-positive",
            total_cost,
            COST_SCALE
        );
    }
    if raw_value <= 0.0 {
        crate::bail_domain!("raw value must be positive, got {}", raw_value);
    }
    Ok(raw_value * (1.0 - total_cost / COST_SCALE))
}

/// The cost weight is the total cost itself
pub fn weight_cost(total_cost: f64) -> Result<f64> {
    if total_cost < 0.0 {
        crate::bail_domain!("total cost must be non-negative, got {}", total_cost);
    }
    Ok(total_cost)
}

pub fn weight_neglog(effective_value: f64) -> Result<f64> {
    if effective_value <= 0.0 {
        crate::bail_domain!("effective value must be positive, got {}", effective_value);
    }
    Ok(-effective_value.ln())
}

/// Derive both edge weights from a raw ratio and a cost pair
pub fn all_weights(raw_value: f64, base_cost: f64, extra_cost: f64) -> Result<EdgeWeights> {
    let total_cost = base_cost + extra_cost;
    let effective_value = effective_value(raw_value, total_cost)?;
    let weight_cost = weight_cost(total_cost)?;
    let weight_neglog = weight_neglog(effective_value)?;

    Ok(EdgeWeights {
        total_cost,
        effective_value,
        weight_cost,
        weight_neglog,
    })
}
