//! # cbyge_lights
//!
//! Exposes C by GE smart bulbs as home-automation light entities.
//!
//! The vendor library (login, mesh networking, command transport) is
//! reached through the [`Account`], [`Network`] and [`Bulb`] traits. The
//! host sees each bulb as a [`GeLight`], which implements [`LightEntity`]
//! and converts between the two sides' scales:
//!
//! | Host                     | Bulb                          |
//! |--------------------------|-------------------------------|
//! | brightness 0-255         | brightness 0-100              |
//! | hue/saturation           | raw RGB channels              |
//! | color temperature, mired | temperature 0-100 (2000-7000K) |
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use cbyge_lights::{PlatformConfig, setup_platform};
//!
//! async fn start(host: Arc<MyScheduler>) -> Result<(), cbyge_lights::Error> {
//!     let config = PlatformConfig::from_json(r#"{"name": "me@example.com", "password": "pw"}"#)?;
//!     setup_platform::<LaurelAccount, _>(&config, |lights| {
//!         for light in lights {
//!             light.attach(host.clone());
//!             host.register(light);
//!         }
//!     })
//!     .await?;
//!     Ok(())
//! }
//! ```
//!
//! Every command sent to a bulb is followed by a fixed 100ms pause so the
//! device can settle before the next one.
//!
//! ## Feature Flags
//!
//! - `runtime-tokio` (default): Use the tokio async runtime
//! - `runtime-async-std`: Use the async-std runtime
//! - `runtime-smol`: Use the smol runtime

mod config;
mod device;
mod entity;
mod errors;
mod features;
mod history;
mod light;
mod platform;
pub mod runtime;
#[cfg(test)]
mod testing;
mod types;

// Re-export public API
pub use config::PlatformConfig;
pub use device::{Account, Bulb, Network, StateCallback};
pub use entity::{LightAttributes, LightEntity, PowerState, TurnOnParams, UpdateScheduler};
pub use errors::{Error, VendorError};
pub use features::{LightFeature, SupportedFeatures};
pub use history::{Command, CommandHistory, HistoryEntry, HistorySummary};
pub use light::GeLight;
pub use platform::setup_platform;
pub use types::{Brightness, Color, HueSaturation, Kelvin, Mired};
