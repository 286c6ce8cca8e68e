//! Host light feature flags.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

use crate::device::Bulb;

/// A single light capability understood by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum LightFeature {
    Brightness,
    ColorTemp,
    Color,
}

impl LightFeature {
    /// Snake case name, e.g. `color_temp`.
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    /// The host's bit for this feature.
    pub fn bit(&self) -> u32 {
        match self {
            LightFeature::Brightness => 1,
            LightFeature::ColorTemp => 2,
            LightFeature::Color => 16,
        }
    }
}

/// Bitmask of [`LightFeature`]s, laid out the way the host expects.
///
/// # Examples
///
/// ```
/// use cbyge_lights::SupportedFeatures;
///
/// let features = SupportedFeatures::BRIGHTNESS | SupportedFeatures::COLOR;
/// assert_eq!(features.bits(), 17);
/// assert!(features.contains(SupportedFeatures::COLOR));
/// assert!(!features.contains(SupportedFeatures::COLOR_TEMP));
/// assert_eq!(features.to_string(), "brightness|color");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupportedFeatures(u32);

impl SupportedFeatures {
    pub const BRIGHTNESS: SupportedFeatures = SupportedFeatures(1);
    pub const COLOR_TEMP: SupportedFeatures = SupportedFeatures(2);
    pub const COLOR: SupportedFeatures = SupportedFeatures(16);

    pub fn empty() -> Self {
        SupportedFeatures(0)
    }

    /// Features for a bulb with the given capabilities.
    ///
    /// Brightness is always supported.
    pub fn from_capabilities(rgb: bool, temperature: bool) -> Self {
        let mut features = SupportedFeatures::BRIGHTNESS;
        if rgb {
            features |= SupportedFeatures::COLOR;
        }
        if temperature {
            features |= SupportedFeatures::COLOR_TEMP;
        }
        features
    }

    /// Features reported by a vendor bulb.
    pub fn for_bulb<B: Bulb>(bulb: &B) -> Self {
        Self::from_capabilities(bulb.supports_rgb(), bulb.supports_temperature())
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn contains(&self, other: SupportedFeatures) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate over the features present in this mask.
    pub fn iter(&self) -> impl Iterator<Item = LightFeature> + '_ {
        LightFeature::iter().filter(|feature| self.0 & feature.bit() != 0)
    }
}

impl From<LightFeature> for SupportedFeatures {
    fn from(feature: LightFeature) -> Self {
        SupportedFeatures(feature.bit())
    }
}

impl BitOr for SupportedFeatures {
    type Output = SupportedFeatures;

    fn bitor(self, rhs: Self) -> Self::Output {
        SupportedFeatures(self.0 | rhs.0)
    }
}

impl BitOrAssign for SupportedFeatures {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for SupportedFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(|feature| feature.name()).collect();
        write!(f, "{}", names.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_map_exactly() {
        let cases = [
            (false, false, 1),
            (true, false, 17),
            (false, true, 3),
            (true, true, 19),
        ];
        for (rgb, temperature, bits) in cases {
            let features = SupportedFeatures::from_capabilities(rgb, temperature);
            assert_eq!(features.bits(), bits, "rgb={rgb} temperature={temperature}");
            assert_eq!(features.contains(SupportedFeatures::COLOR), rgb);
            assert_eq!(features.contains(SupportedFeatures::COLOR_TEMP), temperature);
            assert!(features.contains(SupportedFeatures::BRIGHTNESS));
        }
    }

    #[test]
    fn test_iter_and_display() {
        let all = SupportedFeatures::from_capabilities(true, true);
        assert_eq!(
            all.iter().collect::<Vec<_>>(),
            vec![
                LightFeature::Brightness,
                LightFeature::ColorTemp,
                LightFeature::Color
            ]
        );
        assert_eq!(all.to_string(), "brightness|color_temp|color");
        assert_eq!(SupportedFeatures::empty().to_string(), "");
    }

    #[test]
    fn test_feature_bits_match_constants() {
        assert_eq!(
            SupportedFeatures::from(LightFeature::ColorTemp),
            SupportedFeatures::COLOR_TEMP
        );
        assert_eq!(
            SupportedFeatures::from(LightFeature::Color),
            SupportedFeatures::COLOR
        );
    }
}
