//! Settle animation controller.
//!
//! Owns the visible horizontal offset of the deck. While a drag is in
//! progress the offset tracks the pointer directly via [`SettleAnimator::drag_to`];
//! after release (or a key action) [`SettleAnimator::settle_to`] eases the
//! offset toward the chosen page boundary.

use std::time::{Duration, Instant};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

/// Active settle animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    /// Animation start time
    start: Instant,
    /// Starting offset
    from: f64,
    /// Target offset
    to: f64,
    /// Animation duration
    duration: Duration,
    /// Easing function
    easing: EasingType,
}

/// Animates the deck offset toward a settle target.
///
/// Call `settle_to()` with the decided target, then `update()` each frame to
/// advance the interpolated offset.
#[derive(Debug, Clone)]
pub struct SettleAnimator {
    /// Current active animation (if any)
    animation: Option<ActiveAnimation>,
    /// Configuration
    config: ScrollConfig,
    /// Current visible offset (always up-to-date)
    current_offset: f64,
}

impl Default for SettleAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl SettleAnimator {
    /// Create a new animator with configuration
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current_offset: 0.0,
        }
    }

    /// Get current configuration
    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Check if an animation is currently active
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Get the final offset after any active animation
    pub fn target_offset(&self) -> f64 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current_offset)
    }

    /// Get the current interpolated offset
    #[inline]
    pub fn current_offset(&self) -> f64 {
        self.current_offset
    }

    /// Set the offset immediately, cancelling any animation
    pub fn jump_to(&mut self, offset: f64) {
        self.animation = None;
        self.current_offset = offset;
    }

    /// Track a pointer position during a drag. The offset follows directly;
    /// any pending settle animation is cancelled.
    pub fn drag_to(&mut self, offset: f64) {
        self.jump_to(offset);
    }

    /// Begin easing toward a settle target.
    ///
    /// Jumps immediately when smooth settling is disabled or the offset is
    /// already at the target. A settle issued mid-animation restarts from the
    /// current visible offset, so chained flicks stay continuous.
    pub fn settle_to(&mut self, target: f64) {
        if !self.config.is_smooth() {
            self.jump_to(target);
            return;
        }

        let from = self.current_offset;
        if (from - target).abs() < f64::EPSILON {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: Instant::now(),
            from,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Advance the animation and return the current offset.
    /// Call this every frame.
    pub fn update(&mut self) -> f64 {
        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, anim.duration) {
                self.current_offset = anim.to;
                self.animation = None;
            } else {
                let t = progress(anim.start, anim.duration);
                let eased_t = anim.easing.apply(t);
                self.current_offset = lerp(anim.from, anim.to, eased_t);
            }
        }

        self.current_offset
    }

    /// Cancel any active animation and stop at the current offset
    pub fn cancel(&mut self) {
        self.animation = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_when_smooth_disabled() {
        let config = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut animator = SettleAnimator::new(config);

        animator.settle_to(164.0);
        assert!((animator.current_offset() - 164.0).abs() < 1e-9);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_settle_starts_animation() {
        let config = ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: 100,
            ..Default::default()
        };
        let mut animator = SettleAnimator::new(config);

        animator.settle_to(164.0);
        assert!(animator.is_animating());
        assert!((animator.target_offset() - 164.0).abs() < 1e-9);
        // Offset has not moved yet
        assert!(animator.current_offset().abs() < 1e-9);
    }

    #[test]
    fn test_settle_to_current_offset_is_a_no_op() {
        let mut animator = SettleAnimator::default();
        animator.jump_to(82.0);
        animator.settle_to(82.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_drag_cancels_animation() {
        let mut animator = SettleAnimator::new(ScrollConfig {
            animation_duration_ms: 1000,
            ..Default::default()
        });
        animator.settle_to(100.0);
        assert!(animator.is_animating());

        animator.drag_to(37.5);
        assert!(!animator.is_animating());
        assert!((animator.current_offset() - 37.5).abs() < 1e-9);
        assert!((animator.target_offset() - 37.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_completes_on_first_update() {
        let mut animator = SettleAnimator::new(ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: 0,
            ..Default::default()
        });
        // Zero duration is not smooth, so this jumps
        animator.settle_to(50.0);
        assert!((animator.update() - 50.0).abs() < 1e-9);
        assert!(!animator.is_animating());
    }
}
