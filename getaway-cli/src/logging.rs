//! Logger setup for the `getaway` binary.

use std::env;

/// Environment variable holding log filters.
pub(crate) const LOG_ENV: &str = "RUST_LOG";
/// Level applied to workspace crates when [`LOG_ENV`] is unset.
pub(crate) const DEFAULT_LEVEL: &str = "info";
/// Level applied to every other crate.
const DEPENDENCY_LEVEL: &str = "warn";
/// Log targets owned by this workspace.
const WORKSPACE_TARGETS: [&str; 5] = [
    "getaway",
    "getaway_cli",
    "getaway_core",
    "getaway_data",
    "getaway_scorer",
];

/// Install the `sensible-env-logger` backend.
///
/// A bare level in `RUST_LOG` (for example `debug`) applies to the workspace
/// crates only; a value containing `=` is used verbatim as `env_logger`
/// filters. Without `RUST_LOG` the workspace logs at `info`.
pub fn init_logging() {
    let requested = env::var(LOG_ENV).ok();
    let filters = log_filters(requested.as_deref());
    let mut builder = sensible_env_logger::pretty::formatted_builder();
    builder.parse_filters(&filters);
    if let Err(err) = builder.try_init() {
        log::warn!("logger already initialised: {err}");
    }
}

/// Build `env_logger` filter directives from an optional `RUST_LOG` value.
pub(crate) fn log_filters(requested: Option<&str>) -> String {
    match requested.map(str::trim).filter(|value| !value.is_empty()) {
        Some(filters) if filters.contains('=') => filters.to_owned(),
        bare_level => {
            let level = bare_level.unwrap_or(DEFAULT_LEVEL);
            std::iter::once(DEPENDENCY_LEVEL.to_owned())
                .chain(
                    WORKSPACE_TARGETS
                        .iter()
                        .map(|target| format!("{target}={level}")),
                )
                .collect::<Vec<_>>()
                .join(",")
        }
    }
}
