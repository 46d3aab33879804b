use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use pagereel_core::{target_content_offset, AppConfig, Offset, PageGeometry, Velocity};
use tracing::debug;

use crate::deck::{DeckSource, DemoDeck};
use crate::drag::DragTracker;
use crate::scroll::SettleAnimator;
use crate::theme::Theme;

/// Velocity used for key-driven flicks, in page-skip units. Past the
/// deadband, so a flick skips this many extra pages.
const FLICK_VELOCITY: f64 = 3.0;

/// Cells scrolled per wheel notch
const WHEEL_STEP: f64 = 3.0;

/// Wheel scrolling snaps to a page boundary after this much quiet time
const WHEEL_SNAP_IDLE: Duration = Duration::from_millis(150);

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Help overlay
    Help,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: AppConfig,
    /// Deck content source
    pub deck: Box<dyn DeckSource>,
    /// Color theme
    pub theme: Theme,
    /// Page geometry, recomputed on every resize
    pub geometry: PageGeometry,
    /// Card height in rows, derived from the viewport like the width
    pub card_height: u16,
    /// Last known terminal size
    pub viewport: (u16, u16),
    /// Settle animation controller (owns the visible offset)
    pub animator: SettleAnimator,
    /// Mouse drag tracker
    pub drag: DragTracker,
    /// Current application mode
    pub mode: Mode,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Last wheel event time, for idle snapping
    last_wheel: Option<Instant>,
}

impl App {
    pub fn new(config: AppConfig, deck: Box<dyn DeckSource>, theme: Theme) -> Self {
        let animator = SettleAnimator::new(config.ui.scroll.clone());
        let left_inset = deck.insets().left;
        Self {
            config,
            deck,
            theme,
            // Degenerate until the first resize; paging falls back to
            // proposed offsets until then
            geometry: PageGeometry::new(0.0, 0.0, left_inset),
            card_height: 0,
            viewport: (0, 0),
            animator,
            drag: DragTracker::new(),
            mode: Mode::Normal,
            status_message: None,
            should_quit: false,
            last_wheel: None,
        }
    }

    /// Convenience constructor hosting the built-in demo deck
    pub fn with_demo_deck(config: AppConfig) -> Self {
        let deck = DemoDeck::new(&config.deck);
        Self::new(config, Box::new(deck), Theme::default())
    }

    /// Recompute page geometry from the terminal size. Cards are sized as
    /// viewport fractions (width/1.5, height/2 by default), so a resize
    /// changes every page boundary; the deck realigns on the nearest one.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);

        let item_width = (width as f64 / self.config.deck.item_width_divisor).floor();
        self.card_height = ((height as f64 / self.config.deck.item_height_divisor).floor()
            as u16)
            .max(3);
        self.geometry = PageGeometry::new(
            item_width,
            self.config.deck.item_spacing,
            self.deck.insets().left,
        );

        if !self.drag.is_active() && self.geometry.is_valid() {
            let page = self.current_page();
            self.animator.jump_to(self.clamp_offset(self.geometry.page_origin(page)));
        }
    }

    /// Number of cards in the deck
    pub fn page_count(&self) -> usize {
        self.deck.item_count()
    }

    /// Smallest applicable offset: page 0 resting against the left inset
    pub fn min_offset(&self) -> f64 {
        -self.geometry.left_inset
    }

    /// Largest applicable offset: the last page's resting point
    pub fn max_offset(&self) -> f64 {
        self.geometry
            .page_origin(self.page_count().saturating_sub(1))
            .max(self.min_offset())
    }

    /// Bound an offset to the deck's content range. The paging decision
    /// itself never clamps; this applies at the hosting-view seam.
    pub fn clamp_offset(&self, offset: f64) -> f64 {
        offset.clamp(self.min_offset(), self.max_offset())
    }

    /// The offset currently on screen
    pub fn current_offset(&self) -> f64 {
        self.animator.current_offset()
    }

    /// Page the deck is on, or will be once the settle animation finishes
    pub fn current_page(&self) -> usize {
        self.geometry
            .page_index_for(self.animator.target_offset())
            .min(self.page_count().saturating_sub(1))
    }

    /// Run the paging decision for a release at the given velocity and
    /// animate to the result. Called exactly once per release event.
    pub fn settle_after_release(&mut self, velocity_x: f64) {
        let current_x = self.current_offset();
        let proposed = Offset::new(self.clamp_offset(current_x), 0.0);
        let target = target_content_offset(
            &self.geometry,
            current_x,
            proposed,
            Velocity::horizontal(velocity_x),
        );
        let applied = self.clamp_offset(target.x);
        debug!(
            velocity_x,
            current_x,
            target_x = target.x,
            applied,
            "settling after release"
        );
        self.animator.settle_to(applied);
    }

    /// Settle on a specific page
    pub fn select_page(&mut self, index: usize) {
        if self.page_count() == 0 || !self.geometry.is_valid() {
            return;
        }
        let index = index.min(self.page_count() - 1);
        let target = self.clamp_offset(self.geometry.page_origin(index));
        self.animator.settle_to(target);
    }

    pub fn next_page(&mut self) {
        self.select_page(self.current_page().saturating_add(1));
    }

    pub fn prev_page(&mut self) {
        self.select_page(self.current_page().saturating_sub(1));
    }

    /// Key-driven flick: a synthetic fast release in the given direction
    /// (+1 forward, -1 backward) that skips several pages.
    pub fn flick(&mut self, direction: f64) {
        self.settle_after_release(direction * FLICK_VELOCITY);
    }

    pub fn first_page(&mut self) {
        self.select_page(0);
    }

    pub fn last_page(&mut self) {
        self.select_page(self.page_count().saturating_sub(1));
    }

    /// Route a mouse event: left-button drags move the deck and settle on
    /// release, the wheel nudges the deck and snaps after going idle.
    pub fn handle_mouse(&mut self, event: MouseEvent, now: Instant) {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.animator.cancel();
                self.drag.begin(event.column, self.current_offset(), now);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(offset) = self.drag.drag(event.column, now) {
                    let clamped = self.clamp_offset(offset);
                    self.animator.drag_to(clamped);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(cells_per_ms) = self.drag.release(now) {
                    let velocity_x = cells_per_ms * self.config.ui.flick_sensitivity;
                    self.settle_after_release(velocity_x);
                }
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
                self.wheel(WHEEL_STEP, now);
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
                self.wheel(-WHEEL_STEP, now);
            }
            _ => {}
        }
    }

    fn wheel(&mut self, delta: f64, now: Instant) {
        let offset = self.clamp_offset(self.current_offset() + delta);
        self.animator.drag_to(offset);
        self.last_wheel = Some(now);
    }

    /// Advance animations and pending wheel snaps. Call once per loop
    /// iteration before drawing.
    pub fn update(&mut self, now: Instant) {
        self.animator.update();

        if let Some(last) = self.last_wheel {
            if now.duration_since(last) >= WHEEL_SNAP_IDLE && !self.drag.is_active() {
                self.last_wheel = None;
                self.settle_after_release(0.0);
            }
        }
    }

    /// True while something needs frame-rate updates
    pub fn needs_fast_update(&self) -> bool {
        self.animator.is_animating() || self.drag.is_active() || self.last_wheel.is_some()
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            Mode::Normal => Mode::Help,
            Mode::Help => Mode::Normal,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use pagereel_core::ScrollConfig;

    fn instant_app() -> App {
        // Smooth settling off so targets apply immediately
        let mut config = AppConfig::default();
        config.ui.scroll = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut app = App::with_demo_deck(config);
        app.handle_resize(120, 40);
        app
    }

    fn mouse(kind: MouseEventKind, column: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row: 10,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_resize_derives_geometry_from_viewport() {
        let app = instant_app();
        // 120 / 1.5 = 80 wide, 40 / 2 = 20 tall
        assert!((app.geometry.item_width - 80.0).abs() < 1e-9);
        assert_eq!(app.card_height, 20);
        assert!((app.geometry.page_width() - 82.0).abs() < 1e-9);
        assert!((app.geometry.left_inset - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_initial_offset_rests_on_page_zero() {
        let app = instant_app();
        assert!((app.current_offset() - app.min_offset()).abs() < 1e-9);
        assert_eq!(app.current_page(), 0);
    }

    #[test]
    fn test_next_and_prev_page() {
        let mut app = instant_app();
        app.next_page();
        assert_eq!(app.current_page(), 1);
        assert!((app.current_offset() - app.geometry.page_origin(1)).abs() < 1e-9);
        app.prev_page();
        assert_eq!(app.current_page(), 0);
    }

    #[test]
    fn test_prev_page_at_start_stays_put() {
        let mut app = instant_app();
        app.prev_page();
        assert_eq!(app.current_page(), 0);
    }

    #[test]
    fn test_flick_skips_multiple_pages() {
        let mut app = instant_app();
        // ceil(offset in pages) is 0 at rest, plus 3 passed pages
        app.flick(1.0);
        assert_eq!(app.current_page(), 3);
        app.flick(-1.0);
        assert_eq!(app.current_page(), 0);
    }

    #[test]
    fn test_settle_clamps_to_deck_range() {
        let mut app = instant_app();
        app.settle_after_release(-5.0);
        assert!((app.current_offset() - app.min_offset()).abs() < 1e-9);

        app.last_page();
        app.settle_after_release(5.0);
        assert!((app.current_offset() - app.max_offset()).abs() < 1e-9);
        assert_eq!(app.current_page(), app.page_count() - 1);
    }

    #[test]
    fn test_settle_without_layout_is_harmless() {
        let mut config = AppConfig::default();
        config.ui.scroll.smooth_enabled = false;
        let mut app = App::with_demo_deck(config);
        // No resize yet: geometry degenerate, decision falls back
        app.settle_after_release(3.0);
        assert_eq!(app.current_page(), 0);
    }

    #[test]
    fn test_drag_release_settles_on_page_boundary() {
        let mut app = instant_app();
        let start = Instant::now();

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 100), start);
        assert!(app.drag.is_active());
        app.handle_mouse(
            mouse(MouseEventKind::Drag(MouseButton::Left), 60),
            start + Duration::from_millis(30),
        );
        // Deck followed the pointer
        assert!((app.current_offset() - 36.0).abs() < 1e-9);

        app.handle_mouse(
            mouse(MouseEventKind::Up(MouseButton::Left), 60),
            start + Duration::from_millis(30),
        );
        assert!(!app.drag.is_active());
        // Settled on some page origin
        let page = app.current_page();
        assert!((app.current_offset() - app.geometry.page_origin(page)).abs() < 1e-9);
    }

    #[test]
    fn test_wheel_snaps_after_idle() {
        let mut app = instant_app();
        let start = Instant::now();

        app.handle_mouse(mouse(MouseEventKind::ScrollDown, 0), start);
        assert!(app.needs_fast_update());
        let nudged = app.current_offset();
        assert!(nudged > app.min_offset());

        // Not yet idle: no snap
        app.update(start + Duration::from_millis(50));
        assert!((app.current_offset() - nudged).abs() < 1e-9);

        // Idle: snaps back to the nearest boundary (page 0)
        app.update(start + Duration::from_millis(200));
        assert!((app.current_offset() - app.min_offset()).abs() < 1e-9);
        assert!(!app.needs_fast_update());
    }

    #[test]
    fn test_resize_realigns_to_page_boundary() {
        let mut app = instant_app();
        app.select_page(2);
        app.handle_resize(90, 30);
        let page = app.current_page();
        assert!((app.current_offset() - app.geometry.page_origin(page)).abs() < 1e-9);
    }
}
