use serde::{Deserialize, Serialize};

use crate::color::rules::{default_color_rules, ColorRule, DEFAULT_HUE};
use crate::error::Result;

/// Which coloring strategy paints the gutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorStyle {
    /// Hue from the commit subject, lightness from file-relative recency.
    #[default]
    CategoryHue,
    /// Background interpolated between `oldColor` and `newColor`.
    FileRelative,
    /// Foreground interpolated between `recentColor` and `staleColor` by age.
    AgeFade,
}

/// How the commit date prefixes the author in the gutter text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateFormat {
    /// `YY/MM/DD`
    #[default]
    Short,
    Locale,
    #[serde(rename = "none")]
    Hidden,
}

/// Extension settings as delivered by the host, in camelCase JSON.
///
/// Every field has a default, so `{}` is a valid configuration. A
/// configuration change replaces the whole struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub style: ColorStyle,
    pub color_configs: Vec<ColorRule>,
    pub default_hue: f64,
    pub saturation: f64,
    pub lightness_min: f64,
    pub lightness_span: f64,
    pub old_color: String,
    pub new_color: String,
    pub recent_color: String,
    pub stale_color: String,
    pub stale_after_days: f64,
    pub date_format: DateFormat,
    pub width: String,
    pub margin: String,
}

pub const DEFAULT_OLD_COLOR: &str = "#1e3a5f";
pub const DEFAULT_NEW_COLOR: &str = "#a8d8ff";
pub const DEFAULT_RECENT_COLOR: &str = "#ffd866";
pub const DEFAULT_STALE_COLOR: &str = "#5c6370";
pub const DEFAULT_STALE_AFTER_DAYS: f64 = 365.0;

impl Default for Settings {
    fn default() -> Self {
        Self {
            style: ColorStyle::default(),
            color_configs: default_color_rules(),
            default_hue: DEFAULT_HUE,
            saturation: 0.7,
            lightness_min: 0.3,
            lightness_span: 0.6,
            old_color: DEFAULT_OLD_COLOR.to_string(),
            new_color: DEFAULT_NEW_COLOR.to_string(),
            recent_color: DEFAULT_RECENT_COLOR.to_string(),
            stale_color: DEFAULT_STALE_COLOR.to_string(),
            stale_after_days: DEFAULT_STALE_AFTER_DAYS,
            date_format: DateFormat::default(),
            width: "250px".to_string(),
            margin: "0 8px 0 0".to_string(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
