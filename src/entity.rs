//! The host's light entity contract.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::features::SupportedFeatures;
use crate::types::{Brightness, HueSaturation, Kelvin, Mired};

type Result<T> = std::result::Result<T, Error>;

/// Hook into the host's scheduler.
pub trait UpdateScheduler: Send + Sync {
    /// Ask the host to re-read the named entity's state soon.
    fn schedule_update_state(&self, entity: &str);
}

/// Optional arguments of [`LightEntity::turn_on`].
///
/// # Examples
///
/// ```
/// use cbyge_lights::{Brightness, Mired, TurnOnParams};
///
/// let params = TurnOnParams::new()
///     .brightness(Brightness::new(128))
///     .color_temp(Mired::create(250).unwrap());
/// assert!(params.hs_color.is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TurnOnParams {
    pub brightness: Option<Brightness>,
    pub hs_color: Option<HueSaturation>,
    pub color_temp: Option<Mired>,
}

impl TurnOnParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brightness(mut self, brightness: Brightness) -> Self {
        self.brightness = Some(brightness);
        self
    }

    pub fn hs_color(mut self, hs_color: HueSaturation) -> Self {
        self.hs_color = Some(hs_color);
        self
    }

    pub fn color_temp(mut self, color_temp: Mired) -> Self {
        self.color_temp = Some(color_temp);
        self
    }
}

/// On/off state as exported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    On,
    Off,
}

/// Snapshot of a light's state attributes.
///
/// Color and brightness are only exported while the light is on.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightAttributes {
    pub state: PowerState,
    pub brightness: Option<Brightness>,
    pub hs_color: Option<HueSaturation>,
    pub color_temp: Option<Mired>,
    pub min_mireds: Mired,
    pub max_mireds: Mired,
    pub supported_features: SupportedFeatures,
}

/// A light as the host sees it.
pub trait LightEntity: Send + Sync {
    fn name(&self) -> &str;

    fn is_on(&self) -> bool;

    /// Brightness on the host's 0-255 scale.
    fn brightness(&self) -> Option<Brightness>;

    fn hs_color(&self) -> Option<HueSaturation>;

    fn color_temp(&self) -> Option<Mired>;

    /// Coolest supported color temperature.
    fn min_mireds(&self) -> Mired {
        Kelvin { kelvin: 6535 }.to_mired()
    }

    /// Warmest supported color temperature.
    fn max_mireds(&self) -> Mired {
        Mired { mired: 500 }
    }

    fn supported_features(&self) -> SupportedFeatures;

    /// Whether the host has to poll for state. Push-driven entities return false.
    fn should_poll(&self) -> bool {
        true
    }

    fn turn_on(&self, params: TurnOnParams) -> impl Future<Output = Result<()>> + Send;

    fn turn_off(&self) -> impl Future<Output = Result<()>> + Send;

    fn state_attributes(&self) -> LightAttributes {
        let on = self.is_on();
        LightAttributes {
            state: if on { PowerState::On } else { PowerState::Off },
            brightness: self.brightness().filter(|_| on),
            hs_color: self.hs_color().filter(|_| on),
            color_temp: self.color_temp().filter(|_| on),
            min_mireds: self.min_mireds(),
            max_mireds: self.max_mireds(),
            supported_features: self.supported_features(),
        }
    }
}
