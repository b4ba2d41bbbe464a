/// Milliseconds in one day. Elapsed time is measured in fractional days.
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Placeholder substituted with the contact's name when rendering a nudge.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILENAME: &str = "kith.toml";

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "KITH_LOG";
