//! Time calculation utilities for the settle animation.

use std::time::{Duration, Instant};

/// Animation progress in [0, 1] for a given start time and duration.
/// A zero duration is already complete.
#[inline]
pub fn progress(start: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = start.elapsed();
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if an animation started at `start` has run its full duration
#[inline]
pub fn is_complete(start: Instant, duration: Duration) -> bool {
    start.elapsed() >= duration
}

/// Linear interpolation between two offsets
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
        assert!((lerp(200.0, -200.0, 0.25) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress(start, Duration::ZERO) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_is_complete_zero_duration() {
        assert!(is_complete(Instant::now(), Duration::ZERO));
    }
}
