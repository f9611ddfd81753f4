use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Axis-aligned rectangle in host units (pixels for graphics hosts)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// True when no coordinate is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// Measured size of a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl FromStr for HAlign {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(HAlign::Left),
            "center" | "centre" => Ok(HAlign::Center),
            "right" => Ok(HAlign::Right),
            _ => Err(Error::InvalidAlignment(s.to_string())),
        }
    }
}

impl FromStr for VAlign {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" => Ok(VAlign::Top),
            "middle" | "center" => Ok(VAlign::Middle),
            "bottom" => Ok(VAlign::Bottom),
            _ => Err(Error::InvalidAlignment(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_finite() {
        assert!(Rect::new(0.0, -10.0, 5.0, 5.0).is_finite());
        assert!(!Rect::new(f32::NAN, 0.0, 5.0, 5.0).is_finite());
        assert!(!Rect::new(0.0, 0.0, f32::INFINITY, 5.0).is_finite());
    }

    #[test]
    fn test_parse_alignment() {
        assert_eq!("Right".parse::<HAlign>().unwrap(), HAlign::Right);
        assert_eq!("centre".parse::<HAlign>().unwrap(), HAlign::Center);
        assert_eq!("bottom".parse::<VAlign>().unwrap(), VAlign::Bottom);
        assert!("diagonal".parse::<HAlign>().is_err());
    }
}
