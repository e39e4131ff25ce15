use passline::core::{
    ClusterTuning, EventKind, TimelineEvent, ViewRange, cluster_lane,
};

fn event(id: &str, lane: &str, start_ms: i64) -> TimelineEvent {
    TimelineEvent {
        id: id.to_owned(),
        start_time: start_ms,
        end_time: start_ms + 60_000,
        lane_key: lane.to_owned(),
        kind: EventKind::Opportunity,
    }
}

/// 100s view: 1_000 ms of start time == 1% of track width.
const RANGE: ViewRange = ViewRange { min: 0, max: 100_000 };

#[test]
fn nearby_markers_cluster_distant_one_stands_alone() {
    // Positions 10%, 12%, 40% with a 4% threshold.
    let events = vec![
        event("e1", "target-1", 10_000),
        event("e2", "target-1", 12_000),
        event("e3", "target-1", 40_000),
    ];

    let clusters = cluster_lane(&events, RANGE, "target-1", ClusterTuning::default());
    assert_eq!(clusters.len(), 2);
    let ids: Vec<&str> = clusters[0].members.iter().map(|m| m.event.id.as_str()).collect();
    assert_eq!(ids, vec!["e1", "e2"]);
    assert!(clusters[0].is_stack());
    assert_eq!(clusters[1].members.len(), 1);
    assert_eq!(clusters[1].members[0].event.id, "e3");
}

#[test]
fn chained_proximity_spans_more_than_one_threshold() {
    // 10%, 13%, 16%: ends are 6% apart but each neighbor gap is under 4%,
    // so the chain is one cluster.
    let events = vec![
        event("e1", "target-1", 10_000),
        event("e2", "target-1", 13_000),
        event("e3", "target-1", 16_000),
    ];

    let clusters = cluster_lane(&events, RANGE, "target-1", ClusterTuning::default());
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].members.len(), 3);
}

#[test]
fn exact_threshold_gap_starts_a_new_cluster() {
    // The proximity test is strict: a gap of exactly the threshold splits.
    let events = vec![
        event("e1", "target-1", 10_000),
        event("e2", "target-1", 14_000),
    ];

    let clusters = cluster_lane(&events, RANGE, "target-1", ClusterTuning::default());
    assert_eq!(clusters.len(), 2);
}

#[test]
fn other_lanes_are_filtered_out() {
    let events = vec![
        event("e1", "target-1", 10_000),
        event("e2", "target-2", 10_500),
        event("e3", "target-1", 11_000),
    ];

    let clusters = cluster_lane(&events, RANGE, "target-1", ClusterTuning::default());
    let total: usize = clusters.iter().map(|c| c.members.len()).sum();
    assert_eq!(total, 2);
    for cluster in &clusters {
        for member in &cluster.members {
            assert_eq!(member.event.lane_key, "target-1");
        }
    }
}

#[test]
fn empty_lane_yields_empty_result() {
    let events = vec![event("e1", "target-1", 10_000)];
    assert!(cluster_lane(&events, RANGE, "target-9", ClusterTuning::default()).is_empty());
    assert!(cluster_lane(&[], RANGE, "target-1", ClusterTuning::default()).is_empty());
}

#[test]
fn clusters_partition_the_lane_in_ascending_order() {
    let events: Vec<TimelineEvent> = (0..20)
        .map(|i| event(&format!("e{i}"), "target-1", (i * 7_919) % 100_000))
        .collect();

    let clusters = cluster_lane(&events, RANGE, "target-1", ClusterTuning::default());
    let total: usize = clusters.iter().map(|c| c.members.len()).sum();
    assert_eq!(total, events.len());

    let mut last = f64::NEG_INFINITY;
    for cluster in &clusters {
        assert!(!cluster.members.is_empty());
        assert!(cluster.members[0].position_pct >= last);
        last = cluster.members[0].position_pct;
        for window in cluster.members.windows(2) {
            assert!(window[0].position_pct <= window[1].position_pct);
        }
    }
}

#[test]
fn stack_anchor_is_clamped_into_the_visible_margin() {
    let near_left = vec![
        event("e1", "target-1", 0),
        event("e2", "target-1", 500),
    ];
    let clusters = cluster_lane(&near_left, RANGE, "target-1", ClusterTuning::default());
    assert_eq!(clusters.len(), 1);
    assert!(clusters[0].anchor_pct >= 2.0);

    let near_right = vec![
        event("e3", "target-1", 99_500),
        event("e4", "target-1", 100_000),
    ];
    let clusters = cluster_lane(&near_right, RANGE, "target-1", ClusterTuning::default());
    assert_eq!(clusters.len(), 1);
    assert!(clusters[0].anchor_pct <= 98.0);
}

#[test]
fn coincident_events_keep_input_order() {
    let events = vec![
        event("first", "target-1", 50_000),
        event("second", "target-1", 50_000),
    ];

    let clusters = cluster_lane(&events, RANGE, "target-1", ClusterTuning::default());
    assert_eq!(clusters.len(), 1);
    let ids: Vec<&str> = clusters[0].members.iter().map(|m| m.event.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second"]);
}

#[test]
fn off_screen_events_still_cluster_with_unclamped_positions() {
    let events = vec![
        event("e1", "target-1", -10_000),
        event("e2", "target-1", -9_000),
    ];

    let clusters = cluster_lane(&events, RANGE, "target-1", ClusterTuning::default());
    assert_eq!(clusters.len(), 1);
    assert!(clusters[0].members[0].position_pct < 0.0);
    // Anchor clamps into the margin even though members are off screen.
    assert!(clusters[0].anchor_pct >= 2.0);
}
