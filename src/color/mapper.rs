use std::iter;

use tracing::warn;

use crate::blame::{BlameMap, BlameRecord};
use crate::error::Error;
use crate::settings::{
    ColorStyle, Settings, DEFAULT_NEW_COLOR, DEFAULT_OLD_COLOR, DEFAULT_RECENT_COLOR,
    DEFAULT_STALE_AFTER_DAYS, DEFAULT_STALE_COLOR,
};

use super::range::TimestampRange;
use super::rgb::Rgb;
use super::rules::HueRules;
use super::strategy::{AgeFade, CategoryHue, ColoringStrategy, FileRelative, LineColors, PaintContext};

/// Turns blame records into gutter colors using the configured strategy.
#[derive(Debug)]
pub struct ColorMapper {
    strategy: Box<dyn ColoringStrategy>,
}

impl ColorMapper {
    pub fn new(strategy: Box<dyn ColoringStrategy>) -> Self {
        Self { strategy }
    }

    /// Build the strategy named by `settings.style`. Problems are logged and
    /// the affected piece falls back to its default.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::from_settings_with_warnings(settings).0
    }

    /// Like [`ColorMapper::from_settings`], also returning every rule or
    /// color that had to be skipped.
    pub fn from_settings_with_warnings(settings: &Settings) -> (Self, Vec<Error>) {
        let mut warnings = Vec::new();

        let strategy: Box<dyn ColoringStrategy> = match settings.style {
            ColorStyle::CategoryHue => {
                let (rules, skipped) = HueRules::compile(&settings.color_configs, settings.default_hue);
                warnings.extend(skipped);
                Box::new(CategoryHue {
                    rules,
                    saturation: settings.saturation,
                    lightness_min: settings.lightness_min,
                    lightness_span: settings.lightness_span,
                })
            }
            ColorStyle::FileRelative => Box::new(FileRelative {
                old: anchor(&settings.old_color, DEFAULT_OLD_COLOR, &mut warnings),
                new: anchor(&settings.new_color, DEFAULT_NEW_COLOR, &mut warnings),
            }),
            ColorStyle::AgeFade => {
                let stale_after_days = if settings.stale_after_days > 0.0 {
                    settings.stale_after_days
                } else {
                    warn!(
                        "staleAfterDays must be positive, got {}; using {}",
                        settings.stale_after_days, DEFAULT_STALE_AFTER_DAYS
                    );
                    DEFAULT_STALE_AFTER_DAYS
                };
                Box::new(AgeFade {
                    recent: anchor(&settings.recent_color, DEFAULT_RECENT_COLOR, &mut warnings),
                    stale: anchor(&settings.stale_color, DEFAULT_STALE_COLOR, &mut warnings),
                    stale_after_days,
                })
            }
        };

        (Self::new(strategy), warnings)
    }

    /// Timestamp bounds for one file, or `None` when nothing was blamed.
    pub fn range(records: &BlameMap) -> Option<TimestampRange> {
        TimestampRange::from_records(records.values())
    }

    /// Colors for `record`, normalized against every record of its file.
    ///
    /// `record` is included in the range so a record outside `records`
    /// still normalizes into `[0, 1]`.
    pub fn color(&self, records: &BlameMap, record: &BlameRecord, now: i64) -> LineColors {
        let timestamps = records.values().map(|r| r.timestamp).chain(iter::once(record.timestamp));
        let range = TimestampRange::from_timestamps(timestamps)
            .unwrap_or_else(|| TimestampRange::new(record.timestamp, record.timestamp));
        self.paint(record, &PaintContext { range, now })
    }

    /// Colors for `record` with a range computed once per file.
    pub fn paint(&self, record: &BlameRecord, ctx: &PaintContext) -> LineColors {
        self.strategy.paint(record, ctx)
    }
}

impl Default for ColorMapper {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

fn anchor(hex: &str, fallback: &str, warnings: &mut Vec<Error>) -> Rgb {
    Rgb::from_hex(hex).unwrap_or_else(|e| {
        warn!("{}; using {}", e, fallback);
        warnings.push(e);
        Rgb::from_hex(fallback).unwrap_or(Rgb::BLACK)
    })
}
