use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::color::Argb;
use crate::geometry::{HAlign, VAlign};
use crate::label::StyleConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default = "default_labels")]
    pub labels: Vec<LabelConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
            labels: default_labels(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Frame interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Upper bound of the frame pacing counter
    #[serde(default = "default_max_fps")]
    pub max_fps: u32,
    /// Horizontal scroll speed, 0 (slowest) to 6 (fastest)
    #[serde(default = "default_scroll_speed")]
    pub scroll_speed: u8,
    /// Virtual pixels per terminal cell, controls scroll smoothness
    #[serde(default = "default_cell_px")]
    pub cell_px: f32,
    /// Theme name (e.g., "gruvbox-dark", "nord")
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            max_fps: default_max_fps(),
            scroll_speed: default_scroll_speed(),
            cell_px: default_cell_px(),
            theme: default_theme_name(),
        }
    }
}

/// Skin values for one label, supplied once at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Identifier shown in the demo
    #[serde(default)]
    pub id: String,
    /// Label text, `\r` or newline separate lines, `#name` marks a property
    #[serde(default)]
    pub text: String,
    /// Font name; empty or "-" disables measuring
    #[serde(default = "default_font")]
    pub font: String,
    #[serde(default = "default_text_color")]
    pub text_color: Argb,
    #[serde(default = "default_shadow_color")]
    pub shadow_color: Argb,
    #[serde(default)]
    pub shadow_angle: i32,
    #[serde(default)]
    pub shadow_distance: i32,
    #[serde(default)]
    pub align: HAlign,
    #[serde(default)]
    pub valign: VAlign,
    /// Join string for wrapping labels; the last character pads the line
    #[serde(default)]
    pub wrap_string: String,
    /// Seconds to wait before a line starts scrolling
    #[serde(default = "default_scroll_start_delay")]
    pub scroll_start_delay_secs: u32,
    #[serde(default = "default_true")]
    pub allow_fade_in: bool,
    #[serde(default = "default_true")]
    pub allow_scrolling: bool,
    /// Height in terminal rows
    #[serde(default = "default_label_height")]
    pub height: u16,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            text: String::new(),
            font: default_font(),
            text_color: default_text_color(),
            shadow_color: default_shadow_color(),
            shadow_angle: 0,
            shadow_distance: 0,
            align: HAlign::default(),
            valign: VAlign::default(),
            wrap_string: String::new(),
            scroll_start_delay_secs: default_scroll_start_delay(),
            allow_fade_in: default_true(),
            allow_scrolling: default_true(),
            height: default_label_height(),
        }
    }
}

impl LabelConfig {
    pub fn style(&self) -> StyleConfig {
        StyleConfig {
            font: self.font.clone(),
            text_color: self.text_color,
            shadow_color: self.shadow_color,
            shadow_angle: self.shadow_angle,
            shadow_distance: self.shadow_distance,
            align: self.align,
            valign: self.valign,
            wrap_string: self.wrap_string.clone(),
            scroll_start_delay_secs: self.scroll_start_delay_secs,
            allow_fade_in: self.allow_fade_in,
            allow_scrolling: self.allow_scrolling,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    33 // ~30fps
}

fn default_max_fps() -> u32 {
    30
}

fn default_scroll_speed() -> u8 {
    4
}

fn default_cell_px() -> f32 {
    8.0
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

fn default_font() -> String {
    "default".to_string()
}

fn default_text_color() -> Argb {
    Argb::WHITE
}

fn default_shadow_color() -> Argb {
    Argb::BLACK
}

fn default_scroll_start_delay() -> u32 {
    1
}

fn default_label_height() -> u16 {
    1
}

fn default_labels() -> Vec<LabelConfig> {
    vec![
        LabelConfig {
            id: "clock".to_string(),
            text: "#date  #time".to_string(),
            align: HAlign::Center,
            allow_fade_in: false,
            ..Default::default()
        },
        LabelConfig {
            id: "ticker".to_string(),
            text: "Breaking: the evening schedule has changed, the late film now starts \
                   at 23:15 after the extended news bulletin"
                .to_string(),
            text_color: Argb(0xFFEB_CB8B),
            wrap_string: " \u{2022} ".to_string(),
            ..Default::default()
        },
        LabelConfig {
            id: "upcoming".to_string(),
            text: "Upcoming on #channel: #program\rRecording scheduled for #program, \
                   starts in five minutes\rNo conflicts found"
                .to_string(),
            align: HAlign::Right,
            ..Default::default()
        },
        LabelConfig {
            id: "status".to_string(),
            text: "Ready".to_string(),
            ..Default::default()
        },
    ]
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/fadelabel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("fadelabel")
            .join("config.toml")
    }
}
