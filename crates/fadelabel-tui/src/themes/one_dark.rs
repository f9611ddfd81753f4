//! One Dark, https://github.com/atom/atom/tree/master/packages/one-dark-syntax

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x28, 0x2c, 0x34),
        surface: Color::Rgb(0x21, 0x25, 0x2b),
        text: Color::Rgb(0xab, 0xb2, 0xbf),
        muted: Color::Rgb(0x5c, 0x63, 0x70),
        border: Color::Rgb(0x3e, 0x44, 0x51),
        selected: Color::Rgb(0x61, 0xaf, 0xef),
        phase_still: Color::Rgb(0x56, 0xb6, 0xc2),
        phase_waiting: Color::Rgb(0xe5, 0xc0, 0x7b),
        phase_moving: Color::Rgb(0xd1, 0x9a, 0x66),
    }
}
