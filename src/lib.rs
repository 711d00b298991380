// lib.rs

pub use chrono::{DateTime, FixedOffset, Utc};
pub use log::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod state;
pub use state::*;

mod clock;
pub use clock::*;

mod led;
pub use led::*;

mod measure;
pub use measure::*;

mod dht;
pub use dht::*;

mod wifi;
pub use wifi::*;

mod report;
pub use report::*;

mod station;
pub use station::*;

#[cfg(target_os = "espidf")]
mod esp;
#[cfg(target_os = "espidf")]
pub use esp::*;

#[cfg(test)]
mod testutil;

pub const FW_VERSION: &str = env!("CARGO_PKG_VERSION");

// EOF
