//! Host and path constants for the Lotkeeper API.

/// Host used when nothing else is configured.
pub const DEFAULT_HOST: &str = "http://localhost:8000";

/// Versioned REST prefix appended to the host.
pub const API_PREFIX: &str = "/api/v1";

/// Environment variable holding the API host.
pub const HOST_ENV_VAR: &str = "LOT_HOST";

/// Fallback variable name used by the web client's build.
pub const PUBLIC_HOST_ENV_VAR: &str = "PUBLIC_LOT_HOST";
