pub mod rgb;
pub mod hsl;
pub mod range;
pub mod rules;
pub mod strategy;
pub mod mapper;

pub use rgb::{text_color_for, Rgb};
pub use hsl::hsl_to_rgb;
pub use range::TimestampRange;
pub use rules::{default_color_rules, ColorRule, HueRules, DEFAULT_HUE};
pub use strategy::{AgeFade, CategoryHue, ColoringStrategy, FileRelative, LineColors, PaintContext};
pub use mapper::ColorMapper;
