//! Macros for command timing

/// Trace command execution at debug level
///
/// Usage:
/// ```ignore
/// trace_command!(ctx.start, "engine_ready");
/// ```
macro_rules! trace_command {
    ($start:expr, $label:expr) => {
        ::tracing::debug!(elapsed = ?$start.elapsed(), $label);
    };
}

pub(crate) use trace_command;
