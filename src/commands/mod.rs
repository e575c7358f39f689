//! CLI commands for rategraph

pub mod algorithms;
pub mod batch;
pub mod catalog;
pub mod dispatch;
pub mod format;
pub mod generate;
pub mod graph_input;
