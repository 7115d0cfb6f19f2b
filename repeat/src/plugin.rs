use repeat_plugin::{Packet, Plugin};
use tracing::{debug, warn};

use crate::consts::MAX_MESSAGE_LEN;
use crate::context::Context;
use crate::utils::Truncatable;

/// Nearest repeater lookups
#[cfg(feature = "plugin-nearest")]
pub mod nearest;
/// Package version report
#[cfg(feature = "plugin-version")]
pub mod version;

/// Common includes used in plugins.
#[allow(unused)]
mod prelude {
    pub use crate::command::Command as RepeatCommand;
    pub use crate::context::Context;
    pub use async_trait::async_trait;
    pub use repeat_plugin::{
        Author, Error as PluginError, Name, Packet, Plugin, Reply, Version,
    };
}

/// Plugin registry.
#[derive(Default)]
pub struct Registry {
    /// List of loaded plugins.
    pub plugins: Vec<Box<dyn Plugin<Context>>>,
}

impl Registry {
    /// Constructs and returns a new, empty plugin registry.
    #[must_use]
    pub fn new() -> Registry {
        Registry { plugins: vec![] }
    }

    /// Constructs and returns a new plugin registry with initialized plugins.
    #[must_use]
    pub fn preloaded(ctx: &Context) -> Registry {
        let mut registry = Self::new();
        debug!("registering plugins");

        #[cfg(feature = "plugin-version")]
        registry.register::<version::PackageVersion>(ctx);
        #[cfg(feature = "plugin-nearest")]
        registry.register::<nearest::Nearest>(ctx);
        #[cfg(feature = "plugin-nearest")]
        registry.register::<nearest::NearestObject>(ctx);

        let num_plugins = registry.plugins.len();
        debug!(%num_plugins, "finished registering plugins");

        registry
    }

    /// Registers a new plugin based on its type.
    pub fn register<P: Plugin<Context> + 'static>(&mut self, ctx: &Context) {
        debug!(
            name = %P::name(),
            author = %P::author(),
            version = %P::version(),
            "registering plugin"
        );

        self.plugins.push(Box::new(P::new(ctx)));
    }

    /// Passes the packet to every plugin that handles its message, in registration order, and
    /// returns the messages to send back.
    ///
    /// Each message is cut to the APRS message length. A failing plugin is logged and skipped so
    /// the remaining plugins still get to answer.
    pub async fn dispatch(&self, ctx: &Context, packet: &Packet) -> Vec<String> {
        let mut replies = vec![];

        for plugin in &self.plugins {
            if !plugin.handles(&packet.message_text) {
                continue;
            }

            debug!(command = plugin.command_name(), from = %packet.from, "dispatching packet");

            match plugin.process(ctx, packet).await {
                Ok(reply) => replies.extend(
                    reply
                        .into_lines()
                        .into_iter()
                        .map(|line| line.truncate_with_suffix(MAX_MESSAGE_LEN, "").into_owned()),
                ),
                Err(err) => {
                    warn!(command = plugin.command_name(), error = ?err, "plugin failed");
                }
            }
        }

        replies
    }

    /// Collects the help lines of all registered plugins.
    #[must_use]
    pub fn help(&self) -> Vec<String> {
        self.plugins.iter().flat_map(|plugin| plugin.help()).collect()
    }
}
