//! Replies with the version of the bot.

use tracing::{info, instrument};

use super::prelude::*;

/// Plugin answering `v`/`version` with the package version.
pub struct PackageVersion {
    command: RepeatCommand,
}

#[async_trait]
impl Plugin<Context> for PackageVersion {
    fn new(_ctx: &Context) -> Self {
        Self {
            command: RepeatCommand::new("^[vV]"),
        }
    }

    fn name() -> Name {
        Name::from("version")
    }

    fn author() -> Author {
        Author::from(env!("CARGO_PKG_AUTHORS"))
    }

    fn version() -> Version {
        Version::from("1.0")
    }

    fn command_name(&self) -> &'static str {
        "version"
    }

    fn handles(&self, message_text: &str) -> bool {
        self.command.matches(message_text)
    }

    #[instrument(skip_all, fields(from = %packet.from))]
    async fn process(&self, _ctx: &Context, packet: &Packet) -> Result<Reply, PluginError> {
        info!("version requested");

        Ok(Reply::from(env!("CARGO_PKG_VERSION")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replies_with_package_version() {
        let ctx = Context::new(crate::Config::default(), reqwest::Client::new());
        let plugin = PackageVersion::new(&ctx);

        assert!(plugin.handles("V"));
        assert!(!plugin.handles("n"));

        let reply = plugin
            .process(&ctx, &Packet::new("N0CALL", "v"))
            .await
            .unwrap();

        assert_eq!(reply, Reply::Text(env!("CARGO_PKG_VERSION").to_string()));
    }
}
