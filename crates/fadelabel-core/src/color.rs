//! 32-bit ARGB colors as used by label styles
//!
//! Colors are stored as `0xAARRGGBB`. Fade-in scales only the alpha byte;
//! dimming masks the whole value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    pub const BLACK: Argb = Argb(0xFF00_0000);

    #[inline]
    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub fn rgb(self) -> (u8, u8, u8) {
        let [_, r, g, b] = self.0.to_be_bytes();
        (r, g, b)
    }

    /// Replace the alpha channel, keeping the color bits
    #[inline]
    pub fn with_alpha(self, alpha: u8) -> Self {
        Self(((alpha as u32) << 24) | (self.0 & 0x00FF_FFFF))
    }

    /// Scale alpha by `num / den` using integer math.
    ///
    /// `num` is saturated at `den`, so a fade that overshoots its last frame
    /// never brightens past the configured alpha.
    pub fn scale_alpha(self, num: u32, den: u32) -> Self {
        if den == 0 {
            return self;
        }
        let num = num.min(den);
        let alpha = (self.alpha() as u32 * num) / den;
        self.with_alpha(alpha as u8)
    }

    /// Apply a dim mask (bitwise AND over all channels)
    #[inline]
    pub fn dimmed(self, mask: Argb) -> Self {
        Self(self.0 & mask.0)
    }

    /// Parse `#AARRGGBB`, `#RRGGBB` (opaque) or `0xAARRGGBB`
    pub fn parse(s: &str) -> Result<Self> {
        let hex = s.trim();
        let hex = hex
            .strip_prefix('#')
            .or_else(|| hex.strip_prefix("0x"))
            .or_else(|| hex.strip_prefix("0X"))
            .unwrap_or(hex);

        let value = u32::from_str_radix(hex, 16).map_err(|_| Error::InvalidColor(s.to_string()))?;
        match hex.len() {
            8 => Ok(Self(value)),
            6 => Ok(Self(0xFF00_0000 | value)),
            _ => Err(Error::InvalidColor(s.to_string())),
        }
    }
}

impl Default for Argb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Argb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// Colors are written as hex strings in config files
impl Serialize for Argb {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Argb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Argb::parse(&s).map_err(serde::de::Error::custom)
    }
}
