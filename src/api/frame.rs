use serde::{Deserialize, Serialize};

use crate::core::{MarkerCluster, TimestampMs, ViewRange};

/// One lane's clustered markers for a rendering pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneFrame {
    pub lane_key: String,
    pub clusters: Vec<MarkerCluster>,
}

/// Everything the rendering layer needs for one frame of the timeline.
///
/// A plain value owned by the caller; the engine keeps no reference to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineFrame {
    pub view: ViewRange,
    pub ticks: Vec<TimestampMs>,
    /// Lanes in first-appearance order of the input event set.
    pub lanes: Vec<LaneFrame>,
}
