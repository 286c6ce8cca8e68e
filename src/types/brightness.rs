//! Brightness on the host scale.

use serde::{Deserialize, Serialize};

/// Host brightness level from 0 to 255.
///
/// C by GE bulbs report brightness as a percentage. One percent is
/// 2.55 host steps, so a host value sent to the bulb and read back may
/// come back up to two steps lower, and a bulb percentage read and sent
/// back may drop by one.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Brightness {
    pub(crate) value: u8,
}

impl Default for Brightness {
    fn default() -> Self {
        Self::MAX
    }
}

impl Brightness {
    pub const MAX: Brightness = Brightness { value: 255 };
    const PERCENT_MAX: u8 = 100;

    pub fn new(value: u8) -> Self {
        Brightness { value }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Convert a bulb percentage into host brightness.
    ///
    /// Rounds `percent * 2.55` half up. Percentages above 100 are clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use cbyge_lights::Brightness;
    ///
    /// assert_eq!(Brightness::from_percent(100).value(), 255);
    /// assert_eq!(Brightness::from_percent(50).value(), 128);
    /// assert_eq!(Brightness::from_percent(2).value(), 5);
    /// assert_eq!(Brightness::from_percent(0).value(), 0);
    /// assert_eq!(Brightness::from_percent(150).value(), 255);
    /// ```
    pub fn from_percent(percent: u8) -> Self {
        let percent = u16::from(percent.min(Self::PERCENT_MAX));
        let value = (percent * 255 + 50) / 100;
        Brightness { value: value as u8 }
    }

    /// Convert into the bulb's percentage scale, truncating.
    ///
    /// # Examples
    ///
    /// ```
    /// use cbyge_lights::Brightness;
    ///
    /// assert_eq!(Brightness::new(255).to_percent(), 100);
    /// assert_eq!(Brightness::new(128).to_percent(), 50);
    /// assert_eq!(Brightness::new(2).to_percent(), 0);
    /// ```
    pub fn to_percent(&self) -> u8 {
        (u16::from(self.value) * 100 / 255) as u8
    }
}

impl From<u8> for Brightness {
    fn from(value: u8) -> Self {
        Brightness::new(value)
    }
}
