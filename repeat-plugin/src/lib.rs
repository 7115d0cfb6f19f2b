//! Plugin interface for the repeat message bot.

mod error;
mod packet;
mod plugin;
mod types;

pub use error::Error;
pub use packet::{Packet, Reply};
pub use plugin::Plugin;
pub use types::{Author, Name, Version};
