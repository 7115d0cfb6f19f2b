//! Configuration loaded from a TOML file and `REPEAT_*` environment variables.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::{Deserialize, Serialize};

use crate::consts;

/// The complete bot configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Credentials and endpoints for remote services
    #[serde(default)]
    pub services: ServicesConfig,
    /// Tracing configuration
    #[serde(default)]
    pub tracing: TracingConfig,
}

/// Remote services the plugins talk to.
///
/// A missing section is not an error at load time; the plugins that need it reply with a
/// configuration error instead.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ServicesConfig {
    /// aprs.fi, used to look up the last position of a callsign
    pub aprs_fi: Option<AprsFiConfig>,
    /// haminfo, the repeater database
    pub haminfo: Option<HaminfoConfig>,
}

/// aprs.fi API access.
///
/// Keys are optional so that a partially filled in section still loads.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AprsFiConfig {
    /// The aprs.fi API key
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL of the API
    #[serde(default = "default_aprs_fi_base_url")]
    pub base_url: String,
}

/// haminfo API access.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct HaminfoConfig {
    /// The API key sent in the `X-Api-Key` header
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL of the API, without the trailing `/nearest`
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Tracing configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct TracingConfig {
    /// Export spans over OTLP
    #[serde(default)]
    pub enabled: bool,
}

impl Config {
    /// Loads the configuration from the TOML file at `path`, with environment variables
    /// prefixed by `REPEAT_` taking precedence. Nested keys are separated by `__`, e.g.
    /// `REPEAT_SERVICES__HAMINFO__API_KEY`.
    ///
    /// A missing file is treated as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged configuration cannot be deserialized.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, figment::Error> {
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed(consts::ENV_VAR_PREFIX).split("__"))
            .extract()
    }
}

/// The public aprs.fi API.
#[must_use]
pub fn default_aprs_fi_base_url() -> String {
    consts::APRS_FI_BASE_URL.to_string()
}
