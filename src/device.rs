//! Traits a C by GE vendor binding implements.
//!
//! The vendor library owns login, mesh networking and command transport.
//! This crate only reads the bulb state it caches and forwards commands
//! through these traits.

use std::future::Future;

use crate::errors::Error;
use crate::types::Color;

type Result<T> = std::result::Result<T, Error>;

/// Invoked by the vendor library whenever a bulb reports a state change.
pub type StateCallback = Box<dyn Fn() + Send + Sync + 'static>;

/// A single bulb handle from the vendor library.
///
/// Getters return the library's last known state and never touch the
/// network. Setters send a command to the device.
pub trait Bulb: Send + Sync {
    /// Human readable device name.
    fn name(&self) -> &str;

    /// Brightness percentage, 0-100. Zero means the bulb is off.
    fn brightness(&self) -> u8;

    /// Whether the bulb is currently showing an RGB color rather than white.
    fn rgb(&self) -> bool;

    fn red(&self) -> u8;

    fn green(&self) -> u8;

    fn blue(&self) -> u8;

    /// White temperature percentage, 0 (2000K) to 100 (7000K).
    fn temperature(&self) -> u8;

    fn supports_rgb(&self) -> bool;

    fn supports_temperature(&self) -> bool;

    fn set_power(&self, on: bool) -> impl Future<Output = Result<()>> + Send;

    fn set_brightness(&self, percent: u8) -> impl Future<Output = Result<()>> + Send;

    fn set_rgb(&self, red: u8, green: u8, blue: u8) -> impl Future<Output = Result<()>> + Send;

    fn set_temperature(&self, percent: u8) -> impl Future<Output = Result<()>> + Send;

    /// Register the state change callback, replacing any previous one.
    fn set_callback(&mut self, callback: StateCallback);

    /// Current RGB channels.
    fn color(&self) -> Color {
        Color::rgb(self.red(), self.green(), self.blue())
    }
}

/// A mesh network of bulbs belonging to an account.
pub trait Network: Send {
    fn name(&self) -> &str;

    /// Open the connection that carries commands and state updates.
    fn connect(&mut self) -> impl Future<Output = Result<()>> + Send;
}

/// A logged in vendor account.
pub trait Account: Sized + Send {
    type Network: Network;
    type Bulb: Bulb;

    /// Log in with the account name and password.
    fn login(name: &str, password: &str) -> impl Future<Output = Result<Self>> + Send;

    fn networks_mut(&mut self) -> &mut [Self::Network];

    /// Consume the account, handing out every bulb it owns.
    fn into_devices(self) -> Vec<Self::Bulb>;
}
