//! Scoring module - line-clear points, leveling and gravity speed
//!
//! Classic rules: a clear of `n` rows is worth `LINE_SCORES[n] × level`, a new
//! level is reached every 10 lines, and each level shaves two frames off the
//! fall delay down to one frame per row.

use crate::types::{
    BASE_FALL_DELAY, FALL_DELAY_STEP, LINES_PER_LEVEL, LINE_SCORES, MIN_FALL_DELAY,
};

/// Points for clearing `lines` rows at `level`.
///
/// Counts outside 1..=4 are worth nothing.
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    match lines {
        1..=4 => LINE_SCORES[lines].saturating_mul(level),
        _ => 0,
    }
}

/// Level earned by a cumulative line count
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Frames between automatic drops at `level`
pub fn fall_delay_for_level(level: u32) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(FALL_DELAY_STEP);
    BASE_FALL_DELAY
        .saturating_sub(reduction)
        .max(MIN_FALL_DELAY)
}
