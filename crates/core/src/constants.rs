/// Route unauthenticated users are sent to
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Day-precision ISO date format used by entry forms and records
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default timeout for price provider requests, in seconds
pub const DEFAULT_PRICE_TIMEOUT_SECS: u64 = 30;
