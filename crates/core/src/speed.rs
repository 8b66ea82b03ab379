//! Scoring and speed module
//!
//! Each removed row is worth a flat [`POINTS_PER_ROW`]. Gravity is a step
//! function of the score: the interval belongs to the highest tier whose
//! threshold the score has reached, so a multi-row clear that jumps past
//! several thresholds at once still lands on the right tier.

use crate::types::{MAX_SECONDS_PER_TICK, MIN_SECONDS_PER_TICK, POINTS_PER_ROW, SPEED_TIERS};

/// Points for removing `rows` rows in one go.
pub fn row_clear_score(rows: usize) -> u32 {
    (rows as u32).saturating_mul(POINTS_PER_ROW)
}

/// Seconds per downward step at the given score.
pub fn seconds_per_tick(score: u32) -> f64 {
    let secs = SPEED_TIERS
        .iter()
        .rev()
        .find(|&&(threshold, _)| score >= threshold)
        .map_or(MAX_SECONDS_PER_TICK, |&(_, secs)| secs);
    secs.clamp(MIN_SECONDS_PER_TICK, MAX_SECONDS_PER_TICK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_clear_score() {
        assert_eq!(row_clear_score(0), 0);
        assert_eq!(row_clear_score(1), 100);
        assert_eq!(row_clear_score(4), 400);
    }

    #[test]
    fn test_starts_at_slowest() {
        assert_eq!(seconds_per_tick(0), MAX_SECONDS_PER_TICK);
        assert_eq!(seconds_per_tick(199), MAX_SECONDS_PER_TICK);
    }

    #[test]
    fn test_exact_thresholds() {
        assert_eq!(seconds_per_tick(200), 0.75);
        assert_eq!(seconds_per_tick(300), 0.65);
        assert_eq!(seconds_per_tick(400), 0.55);
        assert_eq!(seconds_per_tick(500), 0.45);
        assert_eq!(seconds_per_tick(600), 0.35);
    }

    #[test]
    fn test_between_and_past_thresholds() {
        assert_eq!(seconds_per_tick(350), 0.65);
        assert_eq!(seconds_per_tick(599), 0.45);
        assert_eq!(seconds_per_tick(10_000), 0.35);
    }

    #[test]
    fn test_never_speeds_down() {
        let mut last = seconds_per_tick(0);
        for score in (0..2000).step_by(100) {
            let secs = seconds_per_tick(score);
            assert!(secs <= last);
            assert!(secs >= MIN_SECONDS_PER_TICK);
            last = secs;
        }
    }
}
