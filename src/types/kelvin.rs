//! Color temperature in Kelvin and mireds.
//!
//! The host speaks mireds, the bulb speaks a 0-100 percentage spread
//! linearly over 2000K-7000K. Both reciprocal conversions floor, matching
//! the host's own helpers.

use serde::{Deserialize, Serialize};

const MIRED_SCALE: u32 = 1_000_000;

/// Color temperature in Kelvin.
///
/// Lower values produce warmer (more yellow/orange) light, while higher
/// values produce cooler (more blue) light.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Kelvin {
    pub(crate) kelvin: u16,
}

impl Kelvin {
    /// Warmest temperature a C by GE bulb can show.
    pub const WARMEST: Kelvin = Kelvin { kelvin: 2000 };
    /// Coolest temperature a C by GE bulb can show.
    pub const COOLEST: Kelvin = Kelvin { kelvin: 7000 };

    const STEP: u16 = 50;
    const PERCENT_MAX: u16 = 100;

    /// Create a new Kelvin with the given value.
    ///
    /// Returns `None` for zero, which has no mired equivalent.
    ///
    /// # Examples
    ///
    /// ```
    /// use cbyge_lights::Kelvin;
    ///
    /// assert!(Kelvin::create(0).is_none());
    /// assert_eq!(Kelvin::create(2700).unwrap().kelvin(), 2700);
    /// ```
    pub fn create(kelvin: u16) -> Option<Self> {
        (kelvin > 0).then_some(Kelvin { kelvin })
    }

    /// Get the kelvin value.
    pub fn kelvin(&self) -> u16 {
        self.kelvin
    }

    /// Map a bulb temperature percentage onto 2000K-7000K.
    ///
    /// Percentages above 100 are clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use cbyge_lights::Kelvin;
    ///
    /// assert_eq!(Kelvin::from_temperature_percent(0).kelvin(), 2000);
    /// assert_eq!(Kelvin::from_temperature_percent(50).kelvin(), 4500);
    /// assert_eq!(Kelvin::from_temperature_percent(100).kelvin(), 7000);
    /// ```
    pub fn from_temperature_percent(percent: u8) -> Self {
        let percent = u16::from(percent).min(Self::PERCENT_MAX);
        Kelvin {
            kelvin: Self::WARMEST.kelvin + percent * Self::STEP,
        }
    }

    /// Map onto the bulb's temperature percentage, truncating.
    ///
    /// Temperatures outside 2000K-7000K are clamped to the ends of the scale.
    ///
    /// # Examples
    ///
    /// ```
    /// use cbyge_lights::Kelvin;
    ///
    /// assert_eq!(Kelvin::create(4549).unwrap().to_temperature_percent(), 50);
    /// assert_eq!(Kelvin::create(1500).unwrap().to_temperature_percent(), 0);
    /// assert_eq!(Kelvin::create(9000).unwrap().to_temperature_percent(), 100);
    /// ```
    pub fn to_temperature_percent(&self) -> u8 {
        let clamped = self
            .kelvin
            .clamp(Self::WARMEST.kelvin, Self::COOLEST.kelvin);
        ((clamped - Self::WARMEST.kelvin) / Self::STEP) as u8
    }

    /// Convert to mireds, flooring.
    ///
    /// # Examples
    ///
    /// ```
    /// use cbyge_lights::Kelvin;
    ///
    /// assert_eq!(Kelvin::COOLEST.to_mired().value(), 142);
    /// assert_eq!(Kelvin::WARMEST.to_mired().value(), 500);
    /// ```
    pub fn to_mired(&self) -> Mired {
        Mired {
            mired: (MIRED_SCALE / u32::from(self.kelvin)) as u16,
        }
    }
}

/// Reciprocal color temperature, 1,000,000 / Kelvin.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Mired {
    pub(crate) mired: u16,
}

impl Mired {
    /// Create a new Mired with the given value.
    ///
    /// Returns `None` for zero, which has no Kelvin equivalent.
    pub fn create(mired: u16) -> Option<Self> {
        (mired > 0).then_some(Mired { mired })
    }

    pub fn value(&self) -> u16 {
        self.mired
    }

    /// Convert to Kelvin, flooring.
    ///
    /// Values below 16 mireds would exceed the `u16` Kelvin range and
    /// saturate at `u16::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cbyge_lights::Mired;
    ///
    /// assert_eq!(Mired::create(250).unwrap().to_kelvin().kelvin(), 4000);
    /// assert_eq!(Mired::create(370).unwrap().to_kelvin().kelvin(), 2702);
    /// ```
    pub fn to_kelvin(&self) -> Kelvin {
        let kelvin = MIRED_SCALE / u32::from(self.mired);
        Kelvin {
            kelvin: u16::try_from(kelvin).unwrap_or(u16::MAX),
        }
    }
}
