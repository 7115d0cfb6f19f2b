use crate::Config;

/// Shared context for plugin invocations.
pub struct Context {
    /// The bot configuration.
    pub config: Config,
    /// HTTP client shared between plugins.
    pub http: reqwest::Client,
}

impl Context {
    /// Creates a new context.
    #[must_use]
    pub const fn new(config: Config, http: reqwest::Client) -> Self {
        Self { config, http }
    }
}
