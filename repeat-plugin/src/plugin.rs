use async_trait::async_trait;

use crate::{Author, Error, Name, Packet, Reply, Version};

/// The base trait that all plugins must implement.
///
/// `C` is the shared context handed to every plugin, typically holding the configuration and
/// HTTP client.
#[async_trait]
pub trait Plugin<C: Sync = ()>: Send + Sync {
    /// The constructor for a new plugin.
    fn new(ctx: &C) -> Self
    where
        Self: Sized;

    /// Returns the name of the plugin.
    fn name() -> Name
    where
        Self: Sized;

    /// Returns the author of the plugin.
    fn author() -> Author
    where
        Self: Sized;

    /// Returns the version of the plugin.
    fn version() -> Version
    where
        Self: Sized;

    /// The command word this plugin answers to, used in logs.
    fn command_name(&self) -> &'static str;

    /// Returns true if the plugin wants to process a message with the given text.
    fn handles(&self, message_text: &str) -> bool;

    /// Usage lines shown to users asking for help.
    fn help(&self) -> Vec<String> {
        vec![]
    }

    /// Processes a packet that [`Plugin::handles`] accepted.
    async fn process(&self, ctx: &C, packet: &Packet) -> Result<Reply, Error>;
}
