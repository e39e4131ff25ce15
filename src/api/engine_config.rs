use serde::{Deserialize, Serialize};

use crate::core::{ClusterTuning, ExtentTuning, ViewTuning};
use crate::error::{TimelineError, TimelineResult};

/// Aggregate engine configuration; every tuning constant is overridable here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineEngineConfig {
    pub extent: ExtentTuning,
    pub view: ViewTuning,
    pub clusters: ClusterTuning,
    /// Upper bound on generated axis ticks.
    pub max_ticks: usize,
}

impl Default for TimelineEngineConfig {
    fn default() -> Self {
        Self {
            extent: ExtentTuning::default(),
            view: ViewTuning::default(),
            clusters: ClusterTuning::default(),
            max_ticks: 8,
        }
    }
}

impl TimelineEngineConfig {
    #[must_use]
    pub fn with_extent_tuning(mut self, extent: ExtentTuning) -> Self {
        self.extent = extent;
        self
    }

    #[must_use]
    pub fn with_view_tuning(mut self, view: ViewTuning) -> Self {
        self.view = view;
        self
    }

    #[must_use]
    pub fn with_cluster_tuning(mut self, clusters: ClusterTuning) -> Self {
        self.clusters = clusters;
        self
    }

    #[must_use]
    pub fn with_max_ticks(mut self, max_ticks: usize) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    pub(crate) fn validate(self) -> TimelineResult<Self> {
        self.extent.validate()?;
        self.view.validate()?;
        self.clusters.validate()?;
        if self.max_ticks == 0 {
            return Err(TimelineError::InvalidData(
                "max ticks must be >= 1".to_owned(),
            ));
        }
        Ok(self)
    }
}
