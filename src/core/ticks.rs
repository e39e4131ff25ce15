use crate::core::types::{MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, TimestampMs};
use crate::core::view_range::ViewRange;

/// Nice-step ladder for axis ticks, ascending.
pub const TICK_STEP_LADDER_MS: [i64; 9] = [
    5 * MILLIS_PER_MINUTE,
    15 * MILLIS_PER_MINUTE,
    30 * MILLIS_PER_MINUTE,
    MILLIS_PER_HOUR,
    2 * MILLIS_PER_HOUR,
    4 * MILLIS_PER_HOUR,
    6 * MILLIS_PER_HOUR,
    12 * MILLIS_PER_HOUR,
    MILLIS_PER_DAY,
];

/// Produces human-legible axis ticks for the visible range.
///
/// Picks the smallest ladder step whose implied tick count stays within
/// `max_ticks` (falling back to the largest step), then emits every step
/// multiple inside the range. Aligning the first tick to a step boundary
/// rather than to `range.min` keeps labels on round instants (on the hour)
/// while panning.
///
/// Always returns at least one tick; `max_ticks` below 1 is clamped to 1.
#[must_use]
pub fn generate_ticks(range: ViewRange, max_ticks: usize) -> Vec<TimestampMs> {
    if range.max <= range.min {
        return vec![range.min];
    }
    let max_ticks = max_ticks.max(1) as i64;
    let span = range.max - range.min;

    let step = select_step(span, max_ticks);

    let mut first = range.min.div_euclid(step) * step;
    if first < range.min {
        first += step;
    }

    let mut ticks = Vec::new();
    let mut tick = first;
    while tick <= range.max {
        ticks.push(tick);
        tick += step;
    }
    if ticks.is_empty() {
        // Range narrower than one step with no boundary inside it.
        ticks.push(range.min);
    }
    ticks
}

fn select_step(span: i64, max_ticks: i64) -> i64 {
    TICK_STEP_LADDER_MS
        .iter()
        .copied()
        .find(|step| step.saturating_mul(max_ticks) >= span)
        .unwrap_or(TICK_STEP_LADDER_MS[TICK_STEP_LADDER_MS.len() - 1])
}
