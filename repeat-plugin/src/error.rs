use std::error::Error as StdError;

use thiserror::Error;

/// An error that occurred while a plugin processed a packet.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Plugin error: {0}")]
    Plugin(Box<dyn StdError + Sync + Send>),
}

impl Error {
    /// Wraps an arbitrary error as a plugin error.
    pub fn plugin(err: impl Into<Box<dyn StdError + Sync + Send>>) -> Self {
        Self::Plugin(err.into())
    }
}
