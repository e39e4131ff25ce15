mod engine;
mod engine_config;
mod frame;
mod json_contract;

pub use engine::TimelineEngine;
pub use engine_config::TimelineEngineConfig;
pub use frame::{LaneFrame, TimelineFrame};
pub use json_contract::{TIMELINE_FRAME_JSON_SCHEMA_V1, TimelineFrameJsonContractV1};
