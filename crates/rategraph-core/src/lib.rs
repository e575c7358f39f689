//! Rategraph Core Library
//!
//! Graph algorithm engine for weighted value-ratio graphs: edge-weight
//! derivation, graph construction, traversal, shortest paths, all-pairs
//! distances and minimum spanning forests.

pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod generation;
pub mod graph;
pub mod logging;
pub mod models;
