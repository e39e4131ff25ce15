//! passline: pan/zoom timeline view engine for satellite pass windows.
//!
//! This crate owns the interactive geometry of a mission-planning timeline:
//! data extents, the visible time window with clamped zoom/pan, nice-step
//! axis ticks, overlap-aware marker clustering, and the pointer gesture
//! state machine. Rendering, API clients and persistence live in the host
//! application; the contract here is event records in, placed geometry out.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{TimelineEngine, TimelineEngineConfig};
pub use error::{TimelineError, TimelineResult};
