use std::fmt;

use crate::blame::BlameRecord;

use super::hsl::hsl_to_rgb;
use super::range::{TimestampRange, ONE_DAY_SECS};
use super::rgb::{text_color_for, Rgb};
use super::rules::HueRules;

/// Colors for one gutter annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineColors {
    /// Text color only; the gutter keeps the editor background.
    Foreground(Rgb),
    Background { background: Rgb, text: Rgb },
}

impl LineColors {
    /// Pair a background with its contrasting text color.
    pub fn on_background(background: Rgb) -> Self {
        LineColors::Background {
            background,
            text: text_color_for(background),
        }
    }

    pub fn background(&self) -> Option<Rgb> {
        match *self {
            LineColors::Foreground(_) => None,
            LineColors::Background { background, .. } => Some(background),
        }
    }

    pub fn text(&self) -> Rgb {
        match *self {
            LineColors::Foreground(text) | LineColors::Background { text, .. } => text,
        }
    }
}

/// Per-file inputs shared by every line of one decoration pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintContext {
    pub range: TimestampRange,
    /// Current time in unix seconds.
    pub now: i64,
}

/// Maps one blame record to its gutter colors.
pub trait ColoringStrategy: fmt::Debug + Send + Sync {
    fn paint(&self, record: &BlameRecord, ctx: &PaintContext) -> LineColors;
}

/// Hue picked from the commit subject; newer lines are lighter.
#[derive(Debug, Clone)]
pub struct CategoryHue {
    pub rules: HueRules,
    pub saturation: f64,
    pub lightness_min: f64,
    pub lightness_span: f64,
}

impl CategoryHue {
    pub fn new(rules: HueRules) -> Self {
        Self {
            rules,
            saturation: 0.7,
            lightness_min: 0.3,
            lightness_span: 0.6,
        }
    }
}

impl ColoringStrategy for CategoryHue {
    fn paint(&self, record: &BlameRecord, ctx: &PaintContext) -> LineColors {
        let t = ctx.range.normalize(record.timestamp);
        let hue = self.rules.hue_for(&record.subject);
        let lightness = self.lightness_min + t * self.lightness_span;
        LineColors::on_background(hsl_to_rgb(hue, self.saturation, lightness))
    }
}

/// Background blended from `old` (oldest line in the file) to `new`
/// (newest line).
#[derive(Debug, Clone, Copy)]
pub struct FileRelative {
    pub old: Rgb,
    pub new: Rgb,
}

impl ColoringStrategy for FileRelative {
    fn paint(&self, record: &BlameRecord, ctx: &PaintContext) -> LineColors {
        let t = ctx.range.normalize(record.timestamp);
        LineColors::on_background(self.old.lerp(self.new, t))
    }
}

/// Author text fading from `recent` to `stale` over `stale_after_days`,
/// independent of the rest of the file.
#[derive(Debug, Clone, Copy)]
pub struct AgeFade {
    pub recent: Rgb,
    pub stale: Rgb,
    pub stale_after_days: f64,
}

impl AgeFade {
    fn factor(&self, timestamp: i64, now: i64) -> f64 {
        let days = now.saturating_sub(timestamp) as f64 / ONE_DAY_SECS as f64;
        (days / self.stale_after_days).clamp(0.0, 1.0)
    }
}

impl ColoringStrategy for AgeFade {
    fn paint(&self, record: &BlameRecord, ctx: &PaintContext) -> LineColors {
        let factor = self.factor(record.timestamp, ctx.now);
        LineColors::Foreground(self.recent.lerp(self.stale, factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rules::{ColorRule, DEFAULT_HUE};

    fn record(timestamp: i64, subject: &str) -> BlameRecord {
        BlameRecord {
            author: "Alice".to_string(),
            commit: String::new(),
            timestamp,
            date: String::new(),
            short_date: String::new(),
            subject: subject.to_string(),
        }
    }

    fn ctx(min: i64, max: i64) -> PaintContext {
        PaintContext {
            range: TimestampRange::new(min, max),
            now: max,
        }
    }

    #[test]
    fn test_category_hue_oldest_and_newest() {
        let strategy = CategoryHue::new(HueRules::default());
        let ctx = ctx(1_000_000_000, 1_000_086_400);

        let old = strategy.paint(&record(1_000_000_000, "fix: bug"), &ctx);
        assert_eq!(old.background(), Some(Rgb::from_hex("#821717").unwrap()));
        assert_eq!(old.text(), Rgb::WHITE);

        let new = strategy.paint(&record(1_000_086_400, "feat: new"), &ctx);
        assert_eq!(new.background(), Some(Rgb::from_hex("#d4d7f7").unwrap()));
        assert_eq!(new.text(), Rgb::BLACK);
    }

    #[test]
    fn test_category_hue_unmatched_is_blue() {
        let strategy = CategoryHue::new(HueRules::default());
        let colors = strategy.paint(&record(50, "chore: cleanup"), &ctx(0, 100));
        assert_eq!(colors.background(), Some(hsl_to_rgb(DEFAULT_HUE, 0.7, 0.6)));
    }

    #[test]
    fn test_category_hue_custom_lightness() {
        let (rules, _) = HueRules::compile(&[ColorRule::new(".", 120.0)], DEFAULT_HUE);
        let strategy = CategoryHue {
            rules,
            saturation: 1.0,
            lightness_min: 0.5,
            lightness_span: 0.0,
        };
        let colors = strategy.paint(&record(100, "x"), &ctx(0, 100));
        assert_eq!(colors.background(), Some(Rgb::new(0, 255, 0)));
    }

    #[test]
    fn test_file_relative_endpoints() {
        let strategy = FileRelative {
            old: Rgb::new(0, 0, 0),
            new: Rgb::new(200, 100, 50),
        };
        let ctx = ctx(1000, 2000);
        assert_eq!(strategy.paint(&record(1000, ""), &ctx).background(), Some(Rgb::new(0, 0, 0)));
        assert_eq!(
            strategy.paint(&record(2000, ""), &ctx).background(),
            Some(Rgb::new(200, 100, 50))
        );
        assert_eq!(
            strategy.paint(&record(1500, ""), &ctx).background(),
            Some(Rgb::new(100, 50, 25))
        );
    }

    #[test]
    fn test_file_relative_text_contrast() {
        let strategy = FileRelative {
            old: Rgb::BLACK,
            new: Rgb::WHITE,
        };
        let ctx = ctx(0, 100);
        assert_eq!(strategy.paint(&record(0, ""), &ctx).text(), Rgb::WHITE);
        assert_eq!(strategy.paint(&record(100, ""), &ctx).text(), Rgb::BLACK);
    }

    #[test]
    fn test_age_fade_is_foreground_only() {
        let strategy = AgeFade {
            recent: Rgb::new(255, 255, 255),
            stale: Rgb::new(55, 55, 55),
            stale_after_days: 365.0,
        };
        let now = 1_700_000_000;
        let ctx = PaintContext {
            range: TimestampRange::new(0, now),
            now,
        };

        let fresh = strategy.paint(&record(now, ""), &ctx);
        assert_eq!(fresh, LineColors::Foreground(Rgb::new(255, 255, 255)));
        assert_eq!(fresh.background(), None);

        let half = strategy.paint(&record(now - 365 * ONE_DAY_SECS / 2, ""), &ctx);
        assert_eq!(half, LineColors::Foreground(Rgb::new(155, 155, 155)));

        let ancient = strategy.paint(&record(now - 3000 * ONE_DAY_SECS, ""), &ctx);
        assert_eq!(ancient, LineColors::Foreground(Rgb::new(55, 55, 55)));
    }

    #[test]
    fn test_age_fade_future_commit_is_recent() {
        let strategy = AgeFade {
            recent: Rgb::WHITE,
            stale: Rgb::BLACK,
            stale_after_days: 365.0,
        };
        let ctx = PaintContext {
            range: TimestampRange::new(0, 10),
            now: 0,
        };
        assert_eq!(strategy.paint(&record(ONE_DAY_SECS, ""), &ctx).text(), Rgb::WHITE);
    }
}
