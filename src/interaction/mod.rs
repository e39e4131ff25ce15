use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::view_range::{ViewRange, ViewRangeController, ZoomDirection};

/// Pan gesture state.
///
/// `Panning` carries the pointer-down snapshot: moves are resolved against
/// the gesture origin instead of compounding per-move deltas, which would
/// accumulate rounding drift over a long drag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerState {
    #[default]
    Idle,
    Panning {
        start_x_px: f64,
        origin: ViewRange,
    },
}

/// Outcome of a wheel event as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelResponse {
    /// The event was claimed as a zoom gesture; the host must suppress its
    /// default scroll handling for this event only.
    Consumed,
    /// No modifier key was held; ordinary scrolling proceeds untouched.
    Ignored,
}

/// Translates raw pointer/wheel input into view-range operations.
///
/// Drag-to-pan runs through the two-state machine above; modifier+wheel
/// zoom is handled independently of it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerController {
    state: PointerState,
}

impl PointerController {
    #[must_use]
    pub fn state(self) -> PointerState {
        self.state
    }

    #[must_use]
    pub fn is_panning(self) -> bool {
        matches!(self.state, PointerState::Panning { .. })
    }

    /// Primary-button press on the track: arm a pan gesture.
    pub fn on_pointer_down(&mut self, x_px: f64, views: &ViewRangeController) {
        if !x_px.is_finite() {
            return;
        }
        self.state = PointerState::Panning {
            start_x_px: x_px,
            origin: views.view(),
        };
        trace!(x_px, "pan gesture armed");
    }

    /// Pointer move while panning: pan by the pointer displacement as a
    /// fraction of the track width, relative to the gesture origin.
    pub fn on_pointer_move(
        &mut self,
        x_px: f64,
        track_width_px: f64,
        views: &mut ViewRangeController,
    ) {
        let PointerState::Panning { start_x_px, origin } = self.state else {
            return;
        };
        if !x_px.is_finite() || !track_width_px.is_finite() || track_width_px <= 0.0 {
            return;
        }
        let fraction_delta = (x_px - start_x_px) / track_width_px;
        views.pan_from(origin, fraction_delta);
    }

    pub fn on_pointer_up(&mut self) {
        self.state = PointerState::Idle;
    }

    pub fn on_pointer_leave(&mut self) {
        self.state = PointerState::Idle;
    }

    /// Wheel dispatch, independent of the pan state machine.
    ///
    /// Without a modifier key the event is not ours: the host keeps its
    /// default page/element scrolling. With one, zoom at the cursor position
    /// with direction `sign(-delta_y)`; a zero delta still consumes the
    /// event (the gesture was addressed at the timeline) but moves nothing.
    pub fn on_wheel(
        &mut self,
        delta_y: f64,
        cursor_x_px: f64,
        track_width_px: f64,
        modifier_held: bool,
        views: &mut ViewRangeController,
    ) -> WheelResponse {
        if !modifier_held {
            return WheelResponse::Ignored;
        }
        let Some(direction) = ZoomDirection::from_wheel_delta(delta_y) else {
            return WheelResponse::Consumed;
        };
        if !cursor_x_px.is_finite() || !track_width_px.is_finite() || track_width_px <= 0.0 {
            return WheelResponse::Consumed;
        }
        let fraction = (cursor_x_px / track_width_px).clamp(0.0, 1.0);
        views.zoom_at(fraction, direction);
        WheelResponse::Consumed
    }
}
