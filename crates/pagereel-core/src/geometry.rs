//! Page geometry for the horizontal card deck.
//!
//! One "page" is one card plus the spacing that follows it. The hosting view
//! recomputes the geometry from its viewport size on every resize; nothing
//! here persists between calls.

/// Layout parameters of the paged deck, in content coordinates (terminal
/// cells for the TUI host).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Width of one card.
    pub item_width: f64,
    /// Spacing between adjacent cards.
    pub item_spacing: f64,
    /// Inset before the first card. An offset of `-left_inset` shows page 0
    /// flush against the inset edge.
    pub left_inset: f64,
}

impl PageGeometry {
    pub fn new(item_width: f64, item_spacing: f64, left_inset: f64) -> Self {
        Self {
            item_width,
            item_spacing,
            left_inset,
        }
    }

    /// Width of one scroll increment: item plus inter-item spacing.
    #[inline]
    pub fn page_width(&self) -> f64 {
        self.item_width + self.item_spacing
    }

    /// A geometry is usable once the page width is finite and positive.
    /// Before the first layout pass (zero-sized viewport) it is not.
    #[inline]
    pub fn is_valid(&self) -> bool {
        let width = self.page_width();
        width.is_finite() && width > 0.0
    }

    /// Content offset at which page `index` rests against the left inset.
    pub fn page_origin(&self, index: usize) -> f64 {
        index as f64 * self.page_width() - self.left_inset
    }

    /// Index of the page boundary nearest to `offset_x`, never negative.
    pub fn page_index_for(&self, offset_x: f64) -> usize {
        if !self.is_valid() {
            return 0;
        }
        let page = ((offset_x + self.left_inset) / self.page_width()).round();
        if page.is_finite() && page > 0.0 {
            page as usize
        } else {
            0
        }
    }
}
