//! Shared output helpers for commands

use serde::Serialize;

use rategraph_core::error::Result;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Render a distance, or `unreachable` when there is none
pub fn format_distance(distance: Option<f64>) -> String {
    match distance {
        Some(d) => format!("{:.4}", d),
        None => "unreachable".to_string(),
    }
}

pub fn format_path(path: &[String]) -> String {
    if path.is_empty() {
        "-".to_string()
    } else {
        path.join(" -> ")
    }
}
