use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::extent::TimeExtent;
use crate::core::types::TimestampMs;
use crate::error::{TimelineError, TimelineResult};

/// Currently visible time window, distinct from the full data extent.
///
/// Invariants maintained by [`ViewRangeController`]: `min < max`, the span
/// never drops below the configured floor, and the window stays inside
/// `[extent.min - extent_span, extent.max + extent_span]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRange {
    pub min: TimestampMs,
    pub max: TimestampMs,
}

impl ViewRange {
    #[must_use]
    pub fn span_ms(self) -> i64 {
        self.max - self.min
    }
}

/// Tuning for interactive zoom/pan behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTuning {
    /// Fraction of the current span removed (zoom in) or added (zoom out)
    /// per discrete zoom step.
    pub zoom_factor: f64,
    /// Hard floor for the visible span.
    pub min_view_span_ms: i64,
}

impl Default for ViewTuning {
    fn default() -> Self {
        Self {
            zoom_factor: 0.15,
            min_view_span_ms: 300_000,
        }
    }
}

impl ViewTuning {
    pub(crate) fn validate(self) -> TimelineResult<Self> {
        if !self.zoom_factor.is_finite() || self.zoom_factor <= 0.0 || self.zoom_factor >= 1.0 {
            return Err(TimelineError::InvalidData(
                "zoom factor must be finite and in (0, 1)".to_owned(),
            ));
        }
        if self.min_view_span_ms <= 0 {
            return Err(TimelineError::InvalidData(
                "minimum view span must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Maps a wheel delta to a zoom direction (`sign(-delta_y)` convention:
    /// wheel up zooms in). Zero or non-finite deltas map to no direction.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if !delta_y.is_finite() || delta_y == 0.0 {
            return None;
        }
        if delta_y < 0.0 { Some(Self::In) } else { Some(Self::Out) }
    }
}

/// Owns the visible window for one interaction session.
///
/// Every operation is total: invalid input (NaN fractions, degenerate spans)
/// is absorbed as a no-op instead of surfacing an error. These run on the
/// pointer-event hot path and must never interrupt an interactive view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewRangeController {
    extent: TimeExtent,
    view: ViewRange,
    tuning: ViewTuning,
}

impl ViewRangeController {
    #[must_use]
    pub fn new(extent: TimeExtent, tuning: ViewTuning) -> Self {
        let mut controller = Self {
            extent,
            view: ViewRange {
                min: extent.min,
                max: extent.max,
            },
            tuning,
        };
        controller.reset();
        controller
    }

    #[must_use]
    pub fn view(&self) -> ViewRange {
        self.view
    }

    #[must_use]
    pub fn extent(&self) -> TimeExtent {
        self.extent
    }

    #[must_use]
    pub fn tuning(&self) -> ViewTuning {
        self.tuning
    }

    /// Resets the view to the home range (the full extent, widened to the
    /// span floor when the extent itself is shorter than it).
    pub fn reset(&mut self) {
        self.view = self.home_range();
    }

    /// Replaces the session extent and resets the view; called whenever the
    /// upstream event set changes.
    pub fn set_extent(&mut self, extent: TimeExtent) {
        self.extent = extent;
        self.reset();
    }

    /// Whether the view differs from the home range, i.e. a "reset zoom"
    /// affordance should be enabled.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.view != self.home_range()
    }

    /// Zooms by one step, holding the point at `fraction` of the current
    /// view fixed.
    ///
    /// The resulting span is clamped to exactly the span floor rather than
    /// rejected, so repeated zoom-in converges to a bit-stable fixed point;
    /// zooming in once already at the floor is a true no-op.
    pub fn zoom_at(&mut self, fraction: f64, direction: ZoomDirection) {
        if !fraction.is_finite() {
            return;
        }
        let fraction = fraction.clamp(0.0, 1.0);

        let span = self.view.span_ms();
        let signed = match direction {
            ZoomDirection::In => 1.0,
            ZoomDirection::Out => -1.0,
        };
        let (lo, hi) = self.window();
        let target_span = ((span as f64) * (1.0 - signed * self.tuning.zoom_factor))
            .round() as i64;
        let target_span = target_span.clamp(self.tuning.min_view_span_ms, hi - lo);

        let anchor = self.view.min as f64 + fraction * span as f64;
        let min = (anchor - fraction * target_span as f64).round() as TimestampMs;
        self.view = self.clamp_shifting(ViewRange {
            min,
            max: min + target_span,
        });
        trace!(?direction, fraction, span_ms = self.view.span_ms(), "zoom step");
    }

    /// Pans by a fraction of the current span (positive drags the content
    /// right, revealing earlier times).
    pub fn pan_by(&mut self, fraction_delta: f64) {
        self.pan_from(self.view, fraction_delta);
    }

    /// Pans relative to an explicit origin range.
    ///
    /// Drag gestures call this with the pointer-down snapshot so successive
    /// moves do not compound rounding drift.
    pub fn pan_from(&mut self, origin: ViewRange, fraction_delta: f64) {
        if !fraction_delta.is_finite() || origin.max <= origin.min {
            return;
        }
        let span = origin.span_ms();
        let shift = (-fraction_delta * span as f64).round() as i64;
        let (lo, hi) = self.window();
        if span >= hi - lo {
            self.view = ViewRange { min: lo, max: hi };
            return;
        }
        let shift = shift.clamp(lo - origin.min, hi - origin.max);
        self.view = ViewRange {
            min: origin.min + shift,
            max: origin.max + shift,
        };
    }

    /// Allowed window: the extent may be overshot by at most one full extent
    /// span on either side, so margin panning works but drift is bounded.
    /// Always wide enough to contain the home range, which matters for
    /// near-zero extents under custom padding tunings.
    fn window(&self) -> (TimestampMs, TimestampMs) {
        let extent_span = self.extent.span_ms();
        let home = self.home_range();
        (
            (self.extent.min - extent_span).min(home.min),
            (self.extent.max + extent_span).max(home.max),
        )
    }

    fn home_range(&self) -> ViewRange {
        let floor = self.tuning.min_view_span_ms;
        if self.extent.span_ms() >= floor {
            return ViewRange {
                min: self.extent.min,
                max: self.extent.max,
            };
        }
        // Degenerate extent: widen around its midpoint up to the span floor.
        let mid = self.extent.min + self.extent.span_ms() / 2;
        ViewRange {
            min: mid - floor / 2,
            max: mid - floor / 2 + floor,
        }
    }

    /// Clamps into the allowed window by shifting, preserving the span; a
    /// span wider than the whole window becomes the window itself.
    fn clamp_shifting(&self, range: ViewRange) -> ViewRange {
        let (lo, hi) = self.window();
        let span = range.span_ms();
        if span >= hi - lo {
            return ViewRange { min: lo, max: hi };
        }
        if range.min < lo {
            ViewRange {
                min: lo,
                max: lo + span,
            }
        } else if range.max > hi {
            ViewRange {
                min: hi - span,
                max: hi,
            }
        } else {
            range
        }
    }
}
