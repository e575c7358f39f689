//! Dataset generation
//!
//! - `scenarios`: preset node lists and pair lists
//! - `generator`: turns scenarios, caller values or random draws into datasets

pub mod generator;
pub mod scenarios;

pub use generator::{
    DatasetGenerator, DatasetType, GeneratedDataset, RandomParams, Variance, ANCHOR_VALUE,
};
pub use scenarios::{
    available_scenarios, base_value, get_scenario, ScenarioInfo, BASE_VALUES, DEFAULT_SCENARIO_ID,
};
