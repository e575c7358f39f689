//! Integration tests for the rategraph CLI
//!
//! These tests run the rategraph binary end to end.

mod algorithms;
mod batch;
mod errors;
mod generate;
mod logging;
mod misc;
mod support;
