use fadelabel_core::LabelPhase;
use ratatui::style::Color;

/// Colors of the label demo
#[derive(Debug, Clone)]
pub struct Theme {
    /// Panel background, also what translucent label text blends into
    pub background: Color,
    /// Status bar background
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    /// Border of the label receiving per-label keys
    pub selected: Color,

    // Phase indicator in each box title
    pub phase_still: Color,
    pub phase_waiting: Color,
    pub phase_moving: Color,
}

impl Theme {
    /// Title color for a render outcome
    pub fn phase_color(&self, phase: LabelPhase) -> Color {
        match phase {
            LabelPhase::Static => self.phase_still,
            LabelPhase::FadeIn | LabelPhase::SteadyStatic => self.phase_waiting,
            LabelPhase::SteadyScrolling => self.phase_moving,
            LabelPhase::Hidden | LabelPhase::Idle | LabelPhase::Clipped => self.muted,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            background: Color::Rgb(0x28, 0x28, 0x28),
            surface: Color::Rgb(0x45, 0x40, 0x3d),
            text: Color::Rgb(0xd4, 0xbe, 0x98),
            muted: Color::Rgb(0x92, 0x83, 0x74),
            border: Color::Rgb(0x5a, 0x52, 0x4c),
            selected: Color::Rgb(0x89, 0xb4, 0x82),
            phase_still: Color::Rgb(0x7d, 0xae, 0xa3),
            phase_waiting: Color::Rgb(0xd8, 0xa6, 0x57),
            phase_moving: Color::Rgb(0xe7, 0x8a, 0x4e),
        }
    }
}
