use crate::core::types::TimestampMs;
use crate::core::view_range::ViewRange;

/// Maps timestamps to normalized horizontal positions inside a view range.
///
/// Fractions are unclamped: markers outside the window project
/// to values outside `[0, 1]` and the renderer clips them visually instead
/// of the engine dropping them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionScale {
    min: f64,
    span: f64,
}

impl FractionScale {
    #[must_use]
    pub fn new(range: ViewRange) -> Self {
        Self {
            min: range.min as f64,
            // A controller-owned range always has a positive span; the floor
            // here only shields direct callers feeding a raw degenerate range.
            span: range.span_ms().max(1) as f64,
        }
    }

    #[must_use]
    pub fn to_fraction(self, t: TimestampMs) -> f64 {
        (t as f64 - self.min) / self.span
    }

    #[must_use]
    pub fn to_percent(self, t: TimestampMs) -> f64 {
        self.to_fraction(t) * 100.0
    }

    /// Inverse of [`Self::to_fraction`], rounded to the nearest millisecond.
    /// Round-trips `to_fraction` exactly for in-range timestamps.
    #[must_use]
    pub fn to_timestamp(self, fraction: f64) -> TimestampMs {
        (self.min + fraction * self.span).round() as TimestampMs
    }
}
