//! Amateur radio repeater lookups for an APRS message bot.

pub mod aprs_fi;
pub mod band;
mod bot;
pub mod command;
pub mod config;
pub mod consts;
mod context;
mod error;
pub mod format;
pub mod haminfo;
pub mod http;
pub mod plugin;
pub mod repeater;
pub mod request;
pub mod tracing;
mod utils;

pub use bot::Bot;
pub use config::Config;
pub use context::Context;
pub use error::Error;
pub use plugin::Registry;
pub use repeat_plugin::{Packet, Reply};
