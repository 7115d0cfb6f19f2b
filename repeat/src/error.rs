//! Error types

use miette::Diagnostic;
use thiserror::Error;

/// Errors that stop the bot from starting or processing messages.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The configuration could not be loaded.
    #[error("Could not load configuration")]
    #[diagnostic(
        code(repeat::config),
        help("check the config file and the REPEAT_* environment variables")
    )]
    Config(#[source] Box<figment::Error>),
    /// The shared HTTP client could not be built.
    #[error("Could not build HTTP client")]
    HttpClient(#[source] reqwest::Error),
    /// Reading messages from standard input failed.
    #[error("Could not read message from stdin")]
    Stdin(#[source] std::io::Error),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}
