//! Settle animation for the paged deck.
//!
//! After a release the paging decision picks a target offset; this module
//! moves the visible offset there over a short eased animation instead of
//! jumping. Split into pure atoms (`easing`, `timing`, `config`) and the
//! stateful controller (`animation`).
//!
//! ```ignore
//! use pagereel_tui::scroll::{SettleAnimator, ScrollConfig};
//!
//! let mut animator = SettleAnimator::new(ScrollConfig::default());
//! animator.settle_to(164.0);
//!
//! // In the main loop, advance each frame and read the current offset
//! let offset = animator.update();
//! ```

pub mod animation;
pub mod config;
pub mod easing;
pub mod timing;

pub use animation::SettleAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
