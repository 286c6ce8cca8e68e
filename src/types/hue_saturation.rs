//! Hue and Saturation color representation.

use serde::{Deserialize, Serialize};

use super::Color;

/// Hue and Saturation color representation used by the host.
///
/// - Hue: The color angle on the color wheel (0-360 degrees)
/// - Saturation: The intensity of the color (0-100 percent)
///
/// Value (brightness) is carried separately by the host, so conversions
/// to RGB always assume full value. Only full-value colors can survive a
/// round trip, and pastel mixes may still lose a step to truncation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHueSaturation")]
pub struct HueSaturation {
    hue: f32,
    saturation: f32,
}

/// Unchecked wire form, validated through [`HueSaturation::create`].
#[derive(Deserialize)]
struct RawHueSaturation {
    hue: f32,
    saturation: f32,
}

impl TryFrom<RawHueSaturation> for HueSaturation {
    type Error = String;

    fn try_from(raw: RawHueSaturation) -> Result<Self, Self::Error> {
        HueSaturation::create(raw.hue, raw.saturation).ok_or_else(|| {
            format!(
                "hue {} or saturation {} out of range",
                raw.hue, raw.saturation
            )
        })
    }
}

impl HueSaturation {
    /// Create a new HueSaturation with the given values.
    ///
    /// Returns `None` if values are outside valid ranges or not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use cbyge_lights::HueSaturation;
    ///
    /// assert!(HueSaturation::create(0.0, 100.0).is_some());
    /// assert!(HueSaturation::create(120.5, 50.25).is_some());
    /// assert!(HueSaturation::create(361.0, 50.0).is_none());
    /// assert!(HueSaturation::create(180.0, 101.0).is_none());
    /// assert!(HueSaturation::create(f32::NAN, 50.0).is_none());
    /// ```
    pub fn create(hue: f32, saturation: f32) -> Option<Self> {
        if (0.0..=360.0).contains(&hue) && (0.0..=100.0).contains(&saturation) {
            Some(HueSaturation { hue, saturation })
        } else {
            None
        }
    }

    /// Get the hue value.
    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Get the saturation value.
    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    /// Convert raw RGB channels to hue and saturation.
    ///
    /// Both components are rounded to three decimals. Greys map to (0, 0).
    ///
    /// # Examples
    ///
    /// ```
    /// use cbyge_lights::{Color, HueSaturation};
    ///
    /// let hs = HueSaturation::from_color(&Color::rgb(0, 0, 255));
    /// assert_eq!(hs.hue(), 240.0);
    /// assert_eq!(hs.saturation(), 100.0);
    /// ```
    pub fn from_color(color: &Color) -> Self {
        let r = f64::from(color.red) / 255.0;
        let g = f64::from(color.green) / 255.0;
        let b = f64::from(color.blue) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        if max == min {
            return HueSaturation::default();
        }

        let delta = max - min;
        let saturation = delta / max;
        let rc = (max - r) / delta;
        let gc = (max - g) / delta;
        let bc = (max - b) / delta;

        let h = if r == max {
            bc - gc
        } else if g == max {
            2.0 + rc - bc
        } else {
            4.0 + gc - rc
        };
        let hue = (h / 6.0).rem_euclid(1.0);

        HueSaturation {
            hue: round3(hue * 360.0) as f32,
            saturation: round3(saturation * 100.0) as f32,
        }
    }

    /// Convert to RGB Color at full value, truncating each channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use cbyge_lights::HueSaturation;
    ///
    /// let hs = HueSaturation::create(0.0, 100.0).unwrap();
    /// let color = hs.to_color();
    /// assert_eq!(color.red(), 255);
    /// assert_eq!(color.green(), 0);
    /// assert_eq!(color.blue(), 0);
    /// ```
    pub fn to_color(&self) -> Color {
        let h = f64::from(self.hue) / 360.0;
        let s = f64::from(self.saturation) / 100.0;
        let v = 1.0;

        if s == 0.0 {
            return channels(v, v, v);
        }

        let sector = (h * 6.0).floor();
        let f = h * 6.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match (sector as i64).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        channels(r, g, b)
    }
}

impl From<&HueSaturation> for Color {
    fn from(hs: &HueSaturation) -> Self {
        hs.to_color()
    }
}

impl From<&Color> for HueSaturation {
    fn from(color: &Color) -> Self {
        HueSaturation::from_color(color)
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn channels(r: f64, g: f64, b: f64) -> Color {
    Color::rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}
