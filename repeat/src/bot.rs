//! Feeds incoming messages through the plugins.
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use crate::Error;
use crate::Registry;
use crate::config::Config;
use crate::context::Context;
use crate::http;
use repeat_plugin::Packet;

/// Owns the plugin registry and the context shared by the plugins.
pub struct Bot {
    /// The plugin registry
    registry: Registry,
    /// The shared context for plugins
    context: Arc<Context>,
}

impl Bot {
    /// Creates a new bot from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpClient`] if the shared HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, Error> {
        let http = http::build_client()?;

        Ok(Self::with_context(Context::new(config, http)))
    }

    /// Creates a new bot around an existing context.
    #[must_use]
    pub fn with_context(context: Context) -> Self {
        let context = Arc::new(context);
        let registry = Registry::preloaded(&context);

        Bot { registry, context }
    }

    /// Processes a single message and returns the replies to send back.
    pub async fn handle(&self, packet: &Packet) -> Vec<String> {
        debug!(?packet, "processing packet");

        self.registry.dispatch(&self.context, packet).await
    }

    /// Returns the help lines of all plugins.
    #[must_use]
    pub fn help(&self) -> Vec<String> {
        self.registry.help()
    }

    /// Treats every non-empty line of `input` as a message from `from` and calls `on_reply` with
    /// each reply, until `input` is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Stdin`] if reading from `input` fails.
    pub async fn run<R, F>(&self, from: &str, input: R, mut on_reply: F) -> Result<(), Error>
    where
        R: AsyncBufRead + Unpin,
        F: FnMut(&str),
    {
        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await.map_err(Error::Stdin)? {
            let message = line.trim();

            if message.is_empty() {
                continue;
            }

            for reply in self.handle(&Packet::new(from, message)).await {
                on_reply(&reply);
            }
        }

        info!("input exhausted");

        Ok(())
    }
}
