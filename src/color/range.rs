use crate::blame::BlameRecord;

pub const ONE_DAY_SECS: i64 = 86_400;

/// Oldest and newest commit time seen in one file, with `max > min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampRange {
    min: i64,
    max: i64,
}

impl TimestampRange {
    /// Build a range from two bounds. A zero-width range is widened one day
    /// into the past so that normalization never divides by zero.
    pub fn new(min: i64, max: i64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        if min == max {
            Self {
                min: max.saturating_sub(ONE_DAY_SECS),
                max,
            }
        } else {
            Self { min, max }
        }
    }

    pub fn from_timestamps(timestamps: impl IntoIterator<Item = i64>) -> Option<Self> {
        let mut iter = timestamps.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), ts| (lo.min(ts), hi.max(ts)));
        Some(Self::new(min, max))
    }

    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a BlameRecord>) -> Option<Self> {
        Self::from_timestamps(records.into_iter().map(|r| r.timestamp))
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Position of `timestamp` in the range: 0 is the oldest line, 1 the
    /// newest. Values outside the range are clamped.
    pub fn normalize(&self, timestamp: i64) -> f64 {
        let span = self.max as f64 - self.min as f64;
        ((timestamp as f64 - self.min as f64) / span).clamp(0.0, 1.0)
    }
}
