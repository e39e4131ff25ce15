use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::scale::FractionScale;
use crate::core::types::TimelineEvent;
use crate::core::view_range::ViewRange;
use crate::error::{TimelineError, TimelineResult};

/// Tuning for overlap-aware marker clustering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterTuning {
    /// Chained-proximity threshold as a percentage of the visible width.
    pub threshold_pct: f64,
    /// Stack anchors are clamped this far away from both track edges so
    /// fanned stacks near the edges stay fully visible.
    pub edge_margin_pct: f64,
}

impl Default for ClusterTuning {
    fn default() -> Self {
        Self {
            threshold_pct: 4.0,
            edge_margin_pct: 2.0,
        }
    }
}

impl ClusterTuning {
    pub(crate) fn validate(self) -> TimelineResult<Self> {
        if !self.threshold_pct.is_finite() || self.threshold_pct <= 0.0 {
            return Err(TimelineError::InvalidData(
                "cluster threshold must be finite and > 0".to_owned(),
            ));
        }
        if !self.edge_margin_pct.is_finite()
            || self.edge_margin_pct < 0.0
            || self.edge_margin_pct >= 50.0
        {
            return Err(TimelineError::InvalidData(
                "cluster edge margin must be finite and in [0, 50)".to_owned(),
            ));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterMember {
    pub event: TimelineEvent,
    /// Projected start position as a percentage of the visible width;
    /// unclamped, off-screen members are clipped by the renderer.
    pub position_pct: f64,
}

/// Ordered group of markers too close to render individually.
///
/// A single-member cluster renders as a plain dot and label; a multi-member
/// one renders as a fanned stack anchored at `anchor_pct`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerCluster {
    pub members: Vec<ClusterMember>,
    /// Mean member position, clamped into the edge margin.
    pub anchor_pct: f64,
}

impl MarkerCluster {
    #[must_use]
    pub fn is_stack(&self) -> bool {
        self.members.len() > 1
    }
}

/// Clusters one lane's events by chained projected proximity.
///
/// Events are projected on `start_time`, sorted ascending (original index
/// breaks ties, keeping the sweep deterministic) and grouped in a single
/// left-to-right pass: an event joins the open cluster when it lies within
/// the threshold of the *previously accepted member*, so a chain of mutually
/// adjacent markers forms one cluster even when its ends are farther apart
/// than the threshold. Clusters partition the lane's events exactly and come
/// out in ascending position order.
///
/// A lane with no events yields an empty vec. A non-finite or non-positive
/// threshold degrades to singleton clusters.
#[must_use]
pub fn cluster_lane(
    events: &[TimelineEvent],
    range: ViewRange,
    lane_key: &str,
    tuning: ClusterTuning,
) -> Vec<MarkerCluster> {
    let scale = FractionScale::new(range);
    let mut projected: SmallVec<[(usize, f64); 16]> = events
        .iter()
        .enumerate()
        .filter(|(_, event)| event.lane_key == lane_key)
        .map(|(index, event)| (index, scale.to_percent(event.start_time)))
        .collect();
    if projected.is_empty() {
        return Vec::new();
    }

    projected.sort_by(|a, b| {
        OrderedFloat(a.1)
            .cmp(&OrderedFloat(b.1))
            .then_with(|| a.0.cmp(&b.0))
    });

    let threshold = if tuning.threshold_pct.is_finite() {
        tuning.threshold_pct.max(0.0)
    } else {
        0.0
    };

    let mut clusters = Vec::new();
    let mut current: Vec<ClusterMember> = Vec::new();
    let mut last_position = 0.0_f64;
    for (index, position) in projected {
        let member = ClusterMember {
            event: events[index].clone(),
            position_pct: position,
        };
        if current.is_empty() || position - last_position < threshold {
            current.push(member);
        } else {
            clusters.push(seal_cluster(current, tuning));
            current = vec![member];
        }
        last_position = position;
    }
    clusters.push(seal_cluster(current, tuning));
    clusters
}

fn seal_cluster(members: Vec<ClusterMember>, tuning: ClusterTuning) -> MarkerCluster {
    let mean = members.iter().map(|m| m.position_pct).sum::<f64>() / members.len() as f64;
    let margin = if tuning.edge_margin_pct.is_finite() {
        tuning.edge_margin_pct.clamp(0.0, 50.0)
    } else {
        0.0
    };
    MarkerCluster {
        anchor_pct: mean.clamp(margin, 100.0 - margin),
        members,
    }
}
