//! Centralized constants for the securelog console workspace.

// =============================================================================
// Connection
// =============================================================================

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Name of the session cookie issued by securelog-server after login.
pub const SESSION_COOKIE_NAME: &str = "id";

// =============================================================================
// Environment variables
// =============================================================================

pub const ENV_BASE_URL: &str = "SECURELOG_BASE_URL";
pub const ENV_USERNAME: &str = "SECURELOG_USERNAME";
pub const ENV_PASSWORD: &str = "SECURELOG_PASSWORD";
pub const ENV_SESSION_COOKIE: &str = "SECURELOG_SESSION_COOKIE";
pub const ENV_SKIP_VERIFY: &str = "SECURELOG_SKIP_VERIFY";
pub const ENV_TIMEOUT: &str = "SECURELOG_TIMEOUT";

/// Setting this to `1` or `true` prevents `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
