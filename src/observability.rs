//! Logging infrastructure for gamestate.
//!
//! gamestate uses `tracing` for structured logging. All events use target
//! "gamestate" and include `component` and `event` fields for filtering.
//!
//! ## Library Integration
//!
//! The library never initializes a global subscriber. Applications configure
//! tracing via `tracing_subscriber` or similar; `gamestate-cli` honours
//! `RUST_LOG`.
//!
//! ## Conventions
//!
//! - `event`: snake_case event name (required)
//! - `component`: module/subsystem (e.g., "loader", "eval")
//! - Use `%` for Display, `?` for Debug formatting

/// Target for all gamestate log events.
pub(crate) const GAMESTATE_TARGET: &str = "gamestate";

/// Macro for info-level log events.
///
/// # Example
/// ```ignore
/// log_info!(
///     component = "loader",
///     event = "table_loaded",
///     path = %path.display(),
///     rows = table.num_rows(),
/// );
/// ```
macro_rules! log_info {
    ($($field:tt)*) => {
        ::tracing::info!(target: $crate::observability::GAMESTATE_TARGET, $($field)*)
    };
}

/// Macro for debug-level log events.
macro_rules! log_debug {
    ($($field:tt)*) => {
        ::tracing::debug!(target: $crate::observability::GAMESTATE_TARGET, $($field)*)
    };
}

/// Macro for warn-level log events.
macro_rules! log_warn {
    ($($field:tt)*) => {
        ::tracing::warn!(target: $crate::observability::GAMESTATE_TARGET, $($field)*)
    };
}

pub(crate) use log_debug;
pub(crate) use log_info;
pub(crate) use log_warn;
