pub mod clusters;
pub mod extent;
pub mod scale;
pub mod ticks;
pub mod types;
pub mod view_range;

pub use clusters::{ClusterMember, ClusterTuning, MarkerCluster, cluster_lane};
pub use extent::{ExtentTuning, TimeExtent};
pub use scale::FractionScale;
pub use ticks::{TICK_STEP_LADDER_MS, generate_ticks};
pub use types::{
    EventKind, EventRecord, TimelineEvent, TimestampMs, parse_events, parse_timestamp_ms,
};
pub use view_range::{ViewRange, ViewRangeController, ViewTuning, ZoomDirection};
