//! Paging decision: where the deck settles after a gesture release.
//!
//! Pure functions; the hosting view calls [`target_content_offset`] exactly
//! once per release event and animates to the returned offset. Slow releases
//! snap to the adjacent page boundary in the direction of travel, fast flicks
//! skip roughly one extra page per unit of velocity.

use crate::geometry::PageGeometry;

/// A content offset in scroll coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Release velocity of a gesture, signed. The unit is chosen so that a
/// magnitude of `v` skips roughly `v` extra pages; magnitudes that round to
/// at most 1 are treated as "stopped".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn horizontal(x: f64) -> Self {
        Self { x, y: 0.0 }
    }
}

/// Compute the offset the deck should settle on after a release.
///
/// `current_x` is the horizontal offset at release time and `proposed` is the
/// offset the default deceleration would land on. The vertical component of
/// `proposed` is always passed through untouched; there is no vertical paging.
///
/// Ties at exact half-page positions round half away from zero (`f64::round`).
///
/// Total over all inputs: when the geometry is degenerate (page width not
/// finite and positive, e.g. before the first layout pass) the proposed
/// offset is returned unchanged and default scrolling behavior applies.
pub fn target_content_offset(
    geometry: &PageGeometry,
    current_x: f64,
    proposed: Offset,
    velocity: Velocity,
) -> Offset {
    if !geometry.is_valid() {
        return proposed;
    }

    let page_width = geometry.page_width();
    let offset_in_pages = current_x / page_width;
    let round_page = round_page(offset_in_pages, velocity.x);
    let passed_pages = passed_pages(velocity.x);

    Offset {
        x: (round_page + passed_pages) * page_width - geometry.left_inset,
        y: proposed.y,
    }
}

/// Nearest whole-page boundary, chosen by direction of travel: backward
/// releases settle at or before the current fractional position, forward
/// releases at or after it.
fn round_page(offset_in_pages: f64, velocity_x: f64) -> f64 {
    if velocity_x == 0.0 {
        offset_in_pages.round()
    } else if velocity_x < 0.0 {
        offset_in_pages.floor()
    } else {
        offset_in_pages.ceil()
    }
}

/// Extra whole pages a flick skips. Velocities rounding to magnitude <= 1
/// fall in the deadband and contribute nothing.
fn passed_pages(velocity_x: f64) -> f64 {
    let rounded = velocity_x.round();
    if rounded.abs() <= 1.0 {
        0.0
    } else {
        rounded
    }
}
