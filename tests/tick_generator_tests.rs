use passline::core::{TICK_STEP_LADDER_MS, ViewRange, generate_ticks, parse_timestamp_ms};

const MINUTE: i64 = 60_000;
const HOUR: i64 = 3_600_000;
const DAY: i64 = 86_400_000;

#[test]
fn degenerate_range_yields_single_tick_at_min() {
    let range = ViewRange { min: 1_000, max: 1_000 };
    assert_eq!(generate_ticks(range, 8), vec![1_000]);

    let inverted = ViewRange { min: 2_000, max: 1_000 };
    assert_eq!(generate_ticks(inverted, 8), vec![2_000]);
}

#[test]
fn ticks_are_strictly_ascending_and_in_range() {
    let min = parse_timestamp_ms("2024-03-10T06:17:00Z").expect("min");
    let max = parse_timestamp_ms("2024-03-10T19:42:00Z").expect("max");
    let range = ViewRange { min, max };

    let ticks = generate_ticks(range, 8);
    assert!(!ticks.is_empty());
    for window in ticks.windows(2) {
        assert!(window[0] < window[1]);
    }
    for tick in &ticks {
        assert!(*tick >= min && *tick <= max);
    }
    assert!(ticks.len() <= 8 + 1);
}

#[test]
fn ticks_align_to_step_boundaries_not_to_range_min() {
    // ~13.4h visible: the 2h step qualifies at max_ticks = 8.
    let min = parse_timestamp_ms("2024-03-10T06:17:00Z").expect("min");
    let max = parse_timestamp_ms("2024-03-10T19:42:00Z").expect("max");
    let ticks = generate_ticks(ViewRange { min, max }, 8);

    let first = parse_timestamp_ms("2024-03-10T08:00:00Z").expect("first");
    assert_eq!(ticks[0], first);
    for tick in &ticks {
        assert_eq!(tick % (2 * HOUR), 0);
    }
}

#[test]
fn tick_positions_are_stable_across_pans() {
    // Panning the window must not move the tick instants it still covers.
    let base = ViewRange { min: 0, max: 6 * HOUR };
    let panned = ViewRange {
        min: 37 * MINUTE,
        max: 6 * HOUR + 37 * MINUTE,
    };

    let base_ticks = generate_ticks(base, 8);
    let panned_ticks = generate_ticks(panned, 8);
    for tick in &panned_ticks {
        if *tick <= 6 * HOUR {
            assert!(base_ticks.contains(tick));
        }
    }
}

#[test]
fn zero_max_ticks_is_clamped_to_one() {
    let range = ViewRange { min: 0, max: 4 * MINUTE };
    let ticks = generate_ticks(range, 0);
    assert!(!ticks.is_empty());
}

#[test]
fn oversized_span_falls_back_to_largest_step() {
    let range = ViewRange { min: 0, max: 30 * DAY };
    let ticks = generate_ticks(range, 8);

    assert_eq!(ticks[1] - ticks[0], DAY);
    assert_eq!(ticks.len(), 31);
}

#[test]
fn range_without_a_step_boundary_falls_back_to_min() {
    // Two minutes strictly between 5m multiples.
    let range = ViewRange {
        min: MINUTE,
        max: 3 * MINUTE,
    };
    assert_eq!(generate_ticks(range, 8), vec![MINUTE]);
}

#[test]
fn ladder_is_ascending() {
    for window in TICK_STEP_LADDER_MS.windows(2) {
        assert!(window[0] < window[1]);
    }
}
