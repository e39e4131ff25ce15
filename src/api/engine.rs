use indexmap::IndexSet;
use tracing::debug;

use crate::core::{
    EventRecord, MarkerCluster, TimeExtent, TimelineEvent, TimestampMs, ViewRange,
    ViewRangeController, ZoomDirection, cluster_lane, generate_ticks, parse_events,
};
use crate::error::TimelineResult;
use crate::interaction::{PointerController, WheelResponse};

use super::{LaneFrame, TimelineEngineConfig, TimelineFrame};

/// Facade owning one timeline interaction session: the parsed event set, its
/// extent, the visible window and the pointer gesture state.
///
/// Single-threaded; every operation completes synchronously within one UI
/// event-handling turn, and the view range is only ever written through the
/// controller it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEngine {
    config: TimelineEngineConfig,
    events: Vec<TimelineEvent>,
    views: ViewRangeController,
    pointer: PointerController,
}

impl TimelineEngine {
    pub fn new(config: TimelineEngineConfig) -> TimelineResult<Self> {
        let config = config.validate()?;
        let extent = TimeExtent::from_events(&[], config.extent);
        Ok(Self {
            config,
            events: Vec::new(),
            views: ViewRangeController::new(extent, config.view),
            pointer: PointerController::default(),
        })
    }

    /// Replaces the event set from raw backend records, refits the extent
    /// and resets the view and any in-flight gesture.
    ///
    /// Records with malformed timestamps are skipped, not fatal.
    pub fn set_events(&mut self, records: &[EventRecord]) {
        self.set_event_data(parse_events(records));
    }

    /// Same as [`Self::set_events`] for already-parsed events.
    pub fn set_event_data(&mut self, events: Vec<TimelineEvent>) {
        self.events = events;
        let extent = TimeExtent::from_events(&self.events, self.config.extent);
        debug!(
            events = self.events.len(),
            extent_min = extent.min,
            extent_max = extent.max,
            "fitting timeline to event set"
        );
        self.views.set_extent(extent);
        self.pointer = PointerController::default();
    }

    #[must_use]
    pub fn events(&self) -> &[TimelineEvent] {
        &self.events
    }

    #[must_use]
    pub fn config(&self) -> TimelineEngineConfig {
        self.config
    }

    #[must_use]
    pub fn view_range(&self) -> ViewRange {
        self.views.view()
    }

    #[must_use]
    pub fn extent(&self) -> TimeExtent {
        self.views.extent()
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.views.is_zoomed()
    }

    /// Lane keys in first-appearance order of the event set.
    #[must_use]
    pub fn lane_keys(&self) -> Vec<String> {
        let mut seen: IndexSet<&str> = IndexSet::new();
        for event in &self.events {
            seen.insert(event.lane_key.as_str());
        }
        seen.into_iter().map(str::to_owned).collect()
    }

    // Discrete zoom buttons operate on the view center.

    pub fn zoom_in(&mut self) {
        self.views.zoom_at(0.5, ZoomDirection::In);
    }

    pub fn zoom_out(&mut self) {
        self.views.zoom_at(0.5, ZoomDirection::Out);
    }

    pub fn reset_view(&mut self) {
        self.views.reset();
    }

    // Pointer forwarding from the host's event handlers.

    pub fn pointer_down(&mut self, x_px: f64) {
        self.pointer.on_pointer_down(x_px, &self.views);
    }

    pub fn pointer_move(&mut self, x_px: f64, track_width_px: f64) {
        self.pointer
            .on_pointer_move(x_px, track_width_px, &mut self.views);
    }

    pub fn pointer_up(&mut self) {
        self.pointer.on_pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.on_pointer_leave();
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pointer.is_panning()
    }

    pub fn wheel(
        &mut self,
        delta_y: f64,
        cursor_x_px: f64,
        track_width_px: f64,
        modifier_held: bool,
    ) -> WheelResponse {
        self.pointer.on_wheel(
            delta_y,
            cursor_x_px,
            track_width_px,
            modifier_held,
            &mut self.views,
        )
    }

    // Per-frame outputs.

    #[must_use]
    pub fn ticks(&self) -> Vec<TimestampMs> {
        generate_ticks(self.views.view(), self.config.max_ticks)
    }

    #[must_use]
    pub fn clusters_for_lane(&self, lane_key: &str) -> Vec<MarkerCluster> {
        cluster_lane(&self.events, self.views.view(), lane_key, self.config.clusters)
    }

    /// Assembles the full per-frame payload for the rendering layer.
    #[must_use]
    pub fn build_frame(&self) -> TimelineFrame {
        let view = self.views.view();
        TimelineFrame {
            view,
            ticks: self.ticks(),
            lanes: self
                .lane_keys()
                .into_iter()
                .map(|lane_key| {
                    let clusters =
                        cluster_lane(&self.events, view, &lane_key, self.config.clusters);
                    LaneFrame { lane_key, clusters }
                })
                .collect(),
        }
    }
}
