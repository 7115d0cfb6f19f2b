//! Finds the repeaters nearest to the sender's last beacon.
//!
//! The sender's position comes from aprs.fi and the repeaters from haminfo. Two commands are
//! provided: `n` replies with one line per repeater and `o` replies with an APRS object for the
//! nearest one, which capable radios can tune to directly.

use thiserror::Error;
use tracing::{error, info, instrument, warn};

use super::prelude::*;
use crate::config::{AprsFiConfig, HaminfoConfig, ServicesConfig};
use crate::format::{self, NONE_FOUND};
use crate::repeater::RepeaterRecord;
use crate::request::{self, USAGE};
use crate::{aprs_fi, haminfo};

/// Reasons a lookup ends without results.
///
/// Every variant maps to a fixed reply for the sender.
#[derive(Debug, Error)]
pub enum Error {
    /// The request had a parameter we don't understand.
    #[error(transparent)]
    Usage(#[from] request::UsageError),
    /// No aprs.fi API key is configured.
    #[error("aprs.fi api key is not configured")]
    MissingAprsFiKey,
    /// The sender's position could not be looked up.
    #[error("could not fetch location")]
    Location(#[source] aprs_fi::Error),
    /// No haminfo API key is configured.
    #[error("haminfo api key is not configured")]
    MissingHaminfoKey,
    /// The haminfo API key is configured but its base URL isn't.
    #[error("haminfo base url is not configured")]
    MissingHaminfoUrl,
    /// The repeater database could not be queried.
    #[error("could not fetch nearest repeaters")]
    Lookup(#[source] haminfo::Error),
}

impl Error {
    /// The reply to send back instead of results.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Error::Usage(_) => USAGE,
            Error::MissingAprsFiKey => "No aprs.fi apikey found",
            Error::Location(_) => "Failed to fetch aprs.fi location",
            Error::MissingHaminfoKey => "No haminfo apikey found",
            Error::MissingHaminfoUrl => "No haminfo base_url found",
            Error::Lookup(_) => NONE_FOUND,
        }
    }
}

/// The remote services a lookup needs, as far as they are configured.
struct Lookup {
    http: reqwest::Client,
    services: ServicesConfig,
}

impl Lookup {
    fn new(ctx: &Context) -> Lookup {
        Lookup {
            http: ctx.http.clone(),
            services: ctx.config.services.clone(),
        }
    }

    fn aprs_fi(&self) -> Result<aprs_fi::Client, Error> {
        match &self.services.aprs_fi {
            Some(AprsFiConfig {
                api_key: Some(api_key),
                base_url,
            }) => Ok(aprs_fi::Client::new(self.http.clone(), base_url, api_key)),
            _ => {
                error!("failed to find config aprs_fi.api_key");
                Err(Error::MissingAprsFiKey)
            }
        }
    }

    fn haminfo(&self) -> Result<haminfo::Client, Error> {
        match &self.services.haminfo {
            Some(HaminfoConfig {
                api_key: Some(api_key),
                base_url: Some(base_url),
            }) => Ok(haminfo::Client::new(self.http.clone(), base_url, api_key)),
            Some(HaminfoConfig {
                api_key: Some(_),
                base_url: None,
            }) => {
                error!("failed to find config haminfo.base_url");
                Err(Error::MissingHaminfoUrl)
            }
            _ => {
                error!("failed to find config haminfo.api_key");
                Err(Error::MissingHaminfoKey)
            }
        }
    }

    /// Parses the request in `packet` and fetches the matching repeaters around the sender.
    async fn fetch(&self, packet: &Packet) -> Result<Vec<RepeaterRecord>, Error> {
        let request = request::parse(&packet.message_text)?;

        let location = self
            .aprs_fi()?
            .location(&packet.from)
            .await
            .map_err(Error::Location)?;

        self.haminfo()?
            .nearest(&location, &request)
            .await
            .map_err(Error::Lookup)
    }
}

/// Logs a failed lookup and turns it into the reply for the sender.
fn failure_reply(err: &Error) -> Reply {
    warn!(error = ?err, "nearest lookup failed");

    Reply::from(err.user_message())
}

/// Plugin answering `n [count] [band] [+filter]...` with a list of repeaters.
pub struct Nearest {
    command: RepeatCommand,
    lookup: Lookup,
}

#[async_trait]
impl Plugin<Context> for Nearest {
    fn new(ctx: &Context) -> Self {
        Self {
            command: RepeatCommand::new("^[nN]"),
            lookup: Lookup::new(ctx),
        }
    }

    fn name() -> Name {
        Name::from("nearest")
    }

    fn author() -> Author {
        Author::from(env!("CARGO_PKG_AUTHORS"))
    }

    fn version() -> Version {
        Version::from("1.0")
    }

    fn command_name(&self) -> &'static str {
        "nearest"
    }

    fn handles(&self, message_text: &str) -> bool {
        self.command.matches(message_text)
    }

    fn help(&self) -> Vec<String> {
        vec![
            "nearest: Return nearest repeaters to your last beacon.".to_string(),
            "nearest: Send 'n [count] [band] [+filter]'".to_string(),
            "nearest: band: example: 2m, 70cm".to_string(),
            "nearest: filter: ex: +echo or +irlp".to_string(),
        ]
    }

    #[instrument(skip_all, fields(from = %packet.from))]
    async fn process(&self, _ctx: &Context, packet: &Packet) -> Result<Reply, PluginError> {
        info!(message = %packet.message_text, "nearest requested");

        Ok(match self.lookup.fetch(packet).await {
            Ok(records) => format::format_list(&records),
            Err(err) => failure_reply(&err),
        })
    }
}

/// Plugin answering `o [count] [band] [+filter]...` with an APRS object for the nearest repeater.
pub struct NearestObject {
    command: RepeatCommand,
    lookup: Lookup,
}

#[async_trait]
impl Plugin<Context> for NearestObject {
    fn new(ctx: &Context) -> Self {
        Self {
            command: RepeatCommand::new("^[oO]"),
            lookup: Lookup::new(ctx),
        }
    }

    fn name() -> Name {
        Name::from("nearest_object")
    }

    fn author() -> Author {
        Author::from(env!("CARGO_PKG_AUTHORS"))
    }

    fn version() -> Version {
        Version::from("1.0")
    }

    fn command_name(&self) -> &'static str {
        "nearest_object"
    }

    fn handles(&self, message_text: &str) -> bool {
        self.command.matches(message_text)
    }

    fn help(&self) -> Vec<String> {
        vec!["nearest_object: Send 'o [count] [band] [+filter]' for an object of the nearest repeater".to_string()]
    }

    #[instrument(skip_all, fields(from = %packet.from))]
    async fn process(&self, _ctx: &Context, packet: &Packet) -> Result<Reply, PluginError> {
        info!(message = %packet.message_text, "nearest object requested");

        Ok(match self.lookup.fetch(packet).await {
            Ok(records) => format::format_object(&records),
            Err(err) => failure_reply(&err),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use crate::config::{AprsFiConfig, HaminfoConfig};

    fn context_with(aprs_fi: Option<AprsFiConfig>, haminfo: Option<HaminfoConfig>) -> Context {
        let mut config = Config::default();
        config.services.aprs_fi = aprs_fi;
        config.services.haminfo = haminfo;

        Context::new(config, reqwest::Client::new())
    }

    #[tokio::test]
    async fn usage_error_comes_before_configuration() {
        let ctx = Context::new(Config::default(), reqwest::Client::new());
        let plugin = Nearest::new(&ctx);

        let reply = plugin
            .process(&ctx, &Packet::new("N0CALL", "n 3 please"))
            .await
            .unwrap();

        assert_eq!(reply, Reply::from(USAGE));
    }

    #[tokio::test]
    async fn missing_aprs_fi_key_is_reported() {
        let ctx = Context::new(Config::default(), reqwest::Client::new());
        let plugin = NearestObject::new(&ctx);

        let reply = plugin
            .process(&ctx, &Packet::new("N0CALL", "o 70cm"))
            .await
            .unwrap();

        assert_eq!(reply, Reply::from("No aprs.fi apikey found"));
    }

    #[tokio::test]
    async fn aprs_fi_section_without_key_is_reported() {
        let ctx = context_with(
            Some(AprsFiConfig {
                api_key: None,
                base_url: "http://127.0.0.1:1/api".to_string(),
            }),
            None,
        );
        let plugin = Nearest::new(&ctx);

        let reply = plugin
            .process(&ctx, &Packet::new("N0CALL", "n 2"))
            .await
            .unwrap();

        assert_eq!(reply, Reply::from("No aprs.fi apikey found"));
    }

    #[test]
    fn haminfo_settings_are_required() {
        let without_key = Lookup::new(&context_with(
            None,
            Some(HaminfoConfig {
                api_key: None,
                base_url: Some("https://haminfo.example.com".to_string()),
            }),
        ));
        let without_url = Lookup::new(&context_with(
            None,
            Some(HaminfoConfig {
                api_key: Some("key".to_string()),
                base_url: None,
            }),
        ));

        assert!(matches!(without_key.haminfo(), Err(Error::MissingHaminfoKey)));
        assert!(matches!(without_url.haminfo(), Err(Error::MissingHaminfoUrl)));
        assert!(matches!(without_key.aprs_fi(), Err(Error::MissingAprsFiKey)));
    }

    #[test]
    fn object_help_mentions_count() {
        let ctx = Context::new(Config::default(), reqwest::Client::new());
        let help = NearestObject::new(&ctx).help();

        assert_eq!(
            help,
            vec!["nearest_object: Send 'o [count] [band] [+filter]' for an object of the nearest repeater"]
        );
    }

    #[test]
    fn commands_are_distinct() {
        let ctx = Context::new(Config::default(), reqwest::Client::new());
        let nearest = Nearest::new(&ctx);
        let object = NearestObject::new(&ctx);

        assert!(nearest.handles("nearest 2"));
        assert!(!nearest.handles("o 2"));
        assert!(object.handles("O"));
        assert!(!object.handles("n"));
    }
}
