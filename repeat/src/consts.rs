use std::time::Duration;

/// The `User-Agent` header to send when issuing HTTP requests.
pub const HTTP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The duration before a HTTP request times out.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the API key for the repeater database.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Default base URL of the aprs.fi API.
pub const APRS_FI_BASE_URL: &str = "https://api.aprs.fi/api";

/// Maximum number of characters in the text of a single APRS message.
pub const MAX_MESSAGE_LEN: usize = 67;

/// Prefix for environment variables that override the configuration file.
pub const ENV_VAR_PREFIX: &str = "REPEAT_";

/// The configuration file read when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "repeat.toml";
