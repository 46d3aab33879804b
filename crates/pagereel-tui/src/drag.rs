//! Mouse drag tracking and release-velocity estimation.
//!
//! While the button is held the deck offset follows the pointer 1:1. Offset
//! samples from the last ~100 ms are kept; on release the velocity is taken
//! from the first and last sample in that window, so a drag that stops moving
//! before release reads as (near) zero velocity even if it was fast earlier.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Only samples this recent count toward the release velocity.
const SAMPLE_WINDOW: Duration = Duration::from_millis(100);

/// Velocity below the measurable resolution reads as zero.
const MIN_SAMPLE_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug)]
struct ActiveDrag {
    /// Pointer column where the drag began
    anchor_column: u16,
    /// Deck offset when the drag began
    anchor_offset: f64,
    /// Recent (offset, time) samples, oldest first
    samples: VecDeque<(f64, Instant)>,
}

/// Tracks one horizontal drag gesture at a time.
#[derive(Debug, Default)]
pub struct DragTracker {
    drag: Option<ActiveDrag>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.drag.is_some()
    }

    /// Start tracking at the given pointer column and current deck offset.
    pub fn begin(&mut self, column: u16, offset: f64, now: Instant) {
        let mut samples = VecDeque::new();
        samples.push_back((offset, now));
        self.drag = Some(ActiveDrag {
            anchor_column: column,
            anchor_offset: offset,
            samples,
        });
    }

    /// Update with a new pointer column and return the offset the deck
    /// should show. Dragging the pointer left scrolls the deck forward.
    pub fn drag(&mut self, column: u16, now: Instant) -> Option<f64> {
        let drag = self.drag.as_mut()?;
        let moved = column as f64 - drag.anchor_column as f64;
        let offset = drag.anchor_offset - moved;

        while let Some(&(_, time)) = drag.samples.front() {
            if now.duration_since(time) > SAMPLE_WINDOW {
                drag.samples.pop_front();
            } else {
                break;
            }
        }
        drag.samples.push_back((offset, now));

        Some(offset)
    }

    /// End the drag and return the release velocity in offset cells per
    /// millisecond, signed in the direction the offset was moving.
    /// Returns `None` if no drag was active.
    pub fn release(&mut self, now: Instant) -> Option<f64> {
        let drag = self.drag.take()?;

        let recent: Vec<&(f64, Instant)> = drag
            .samples
            .iter()
            .filter(|(_, time)| now.duration_since(*time) <= SAMPLE_WINDOW)
            .collect();

        let (first_offset, first_time) = match recent.first() {
            Some(sample) => **sample,
            None => return Some(0.0),
        };
        let (last_offset, last_time) = match recent.last() {
            Some(sample) => **sample,
            None => return Some(0.0),
        };

        let dt = last_time.duration_since(first_time);
        if dt < MIN_SAMPLE_INTERVAL {
            return Some(0.0);
        }

        Some((last_offset - first_offset) / dt.as_millis() as f64)
    }

    /// Abandon the drag without producing a velocity.
    pub fn cancel(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_moves_offset_against_pointer() {
        let start = Instant::now();
        let mut tracker = DragTracker::new();
        tracker.begin(50, 100.0, start);

        // Pointer moves right 10 columns: deck scrolls back
        let offset = tracker.drag(60, start + Duration::from_millis(20)).unwrap();
        assert!((offset - 90.0).abs() < 1e-9);

        // Pointer moves left of the anchor: deck scrolls forward
        let offset = tracker.drag(30, start + Duration::from_millis(40)).unwrap();
        assert!((offset - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_release_velocity_from_recent_samples() {
        let start = Instant::now();
        let mut tracker = DragTracker::new();
        tracker.begin(100, 0.0, start);

        // 40 cells forward over 50ms -> 0.8 cells/ms
        tracker.drag(80, start + Duration::from_millis(25));
        tracker.drag(60, start + Duration::from_millis(50));
        let velocity = tracker.release(start + Duration::from_millis(50)).unwrap();
        assert!((velocity - 0.8).abs() < 0.01, "velocity={}", velocity);
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_backward_drag_has_negative_velocity() {
        let start = Instant::now();
        let mut tracker = DragTracker::new();
        tracker.begin(10, 200.0, start);

        tracker.drag(40, start + Duration::from_millis(30));
        let velocity = tracker.release(start + Duration::from_millis(30)).unwrap();
        assert!(velocity < 0.0, "velocity={}", velocity);
    }

    #[test]
    fn test_stale_samples_fall_out_of_the_window() {
        let start = Instant::now();
        let mut tracker = DragTracker::new();
        tracker.begin(100, 0.0, start);

        // Fast early movement, then holding still past the window
        tracker.drag(40, start + Duration::from_millis(30));
        tracker.drag(40, start + Duration::from_millis(250));
        tracker.drag(40, start + Duration::from_millis(300));
        let velocity = tracker.release(start + Duration::from_millis(300)).unwrap();
        assert!(velocity.abs() < 1e-9, "velocity={}", velocity);
    }

    #[test]
    fn test_instant_release_reads_zero() {
        let start = Instant::now();
        let mut tracker = DragTracker::new();
        tracker.begin(100, 0.0, start);
        let velocity = tracker.release(start).unwrap();
        assert!(velocity.abs() < 1e-9);
    }

    #[test]
    fn test_release_without_drag_is_none() {
        let mut tracker = DragTracker::new();
        assert!(tracker.release(Instant::now()).is_none());
    }

    #[test]
    fn test_cancel_discards_state() {
        let start = Instant::now();
        let mut tracker = DragTracker::new();
        tracker.begin(10, 0.0, start);
        tracker.cancel();
        assert!(!tracker.is_active());
        assert!(tracker.release(start).is_none());
    }
}
