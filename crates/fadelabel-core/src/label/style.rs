//! L4 Atomic Layer: style values set by the host

use crate::color::Argb;
use crate::geometry::{HAlign, VAlign};
use crate::host::Shadow;

/// Fonts named like this have no metrics
const NO_FONT: &str = "-";

/// Immutable-per-render style of a label
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    pub font: String,
    pub text_color: Argb,
    pub shadow_color: Argb,
    pub shadow_angle: i32,
    pub shadow_distance: i32,
    pub align: HAlign,
    pub valign: VAlign,
    /// User wrap string: all but the last char join the tail to the head,
    /// the last char pads the line
    pub wrap_string: String,
    pub scroll_start_delay_secs: u32,
    pub allow_fade_in: bool,
    pub allow_scrolling: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font: String::new(),
            text_color: Argb::WHITE,
            shadow_color: Argb::BLACK,
            shadow_angle: 0,
            shadow_distance: 0,
            align: HAlign::Left,
            valign: VAlign::Top,
            wrap_string: String::new(),
            scroll_start_delay_secs: 1,
            allow_fade_in: true,
            allow_scrolling: true,
        }
    }
}

impl StyleConfig {
    /// Font to measure with, `None` for an empty or "-" font name
    pub fn font(&self) -> Option<&str> {
        match self.font.as_str() {
            "" | NO_FONT => None,
            font => Some(font),
        }
    }

    pub fn shadow(&self) -> Shadow {
        Shadow {
            color: self.shadow_color,
            angle: self.shadow_angle,
            distance: self.shadow_distance,
        }
    }

    pub fn wrap(&self) -> WrapString {
        WrapString::from_user(&self.wrap_string)
    }
}

/// The two halves of a user wrap string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapString {
    /// Appended to a scrolling line; empty means no wrap-around
    pub join: String,
    /// Padding unit repeated until the line is wider than its box
    pub tail: String,
}

impl Default for WrapString {
    fn default() -> Self {
        Self {
            join: String::new(),
            tail: " ".to_string(),
        }
    }
}

impl WrapString {
    pub fn from_user(wrap_string: &str) -> Self {
        let mut chars = wrap_string.chars();
        match chars.next_back() {
            Some(last) => Self {
                join: chars.as_str().to_string(),
                tail: last.to_string(),
            },
            None => Self::default(),
        }
    }

    #[inline]
    pub fn wraps_around(&self) -> bool {
        !self.join.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_string_split() {
        let wrap = WrapString::from_user(" | ");
        assert_eq!(wrap.join, " |");
        assert_eq!(wrap.tail, " ");
        assert!(wrap.wraps_around());
    }

    #[test]
    fn test_single_char_wrap_only_pads() {
        let wrap = WrapString::from_user("~");
        assert_eq!(wrap.tail, "~");
        assert!(!wrap.wraps_around());
    }

    #[test]
    fn test_empty_wrap() {
        assert_eq!(WrapString::from_user(""), WrapString::default());
    }

    #[test]
    fn test_font_absent() {
        let mut style = StyleConfig::default();
        assert_eq!(style.font(), None);
        style.font = "-".to_string();
        assert_eq!(style.font(), None);
        style.font = "font13".to_string();
        assert_eq!(style.font(), Some("font13"));
    }
}
