//! Carousel index controller - the authoritative `current_index` and its bounds.
//!
//! All operations are total: an empty carousel has `max_index() == 0`,
//! `items_per_view` below 1 is treated as 1, and out-of-range targets clamp.

use std::ops::Range;

use lissnify_core::StepPolicy;

/// Bounded index over a sequence of `item_count` items viewed `items_per_view` at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselIndex {
    current: usize,
    item_count: usize,
    items_per_view: usize,
    policy: StepPolicy,
}

impl CarouselIndex {
    pub fn new(policy: StepPolicy) -> Self {
        Self {
            current: 0,
            item_count: 0,
            items_per_view: 1,
            policy,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    pub fn policy(&self) -> StepPolicy {
        self.policy
    }

    /// Highest reachable index for the current item count and page size
    pub fn max_index(&self) -> usize {
        if self.item_count == 0 {
            return 0;
        }
        match self.policy {
            StepPolicy::Page => self.item_count.div_ceil(self.items_per_view) - 1,
            StepPolicy::Item => self.item_count.saturating_sub(self.items_per_view),
        }
    }

    /// Number of discrete stops (dot indicators)
    pub fn stop_count(&self) -> usize {
        self.max_index() + 1
    }

    /// Whether prev/next can move at all
    pub fn can_navigate(&self) -> bool {
        self.max_index() > 0
    }

    /// Advance one step, wrapping to 0 after the last stop
    pub fn next(&mut self) -> usize {
        self.current = if self.current >= self.max_index() {
            0
        } else {
            self.current + 1
        };
        self.current
    }

    /// Go back one step, wrapping to the last stop from 0
    pub fn prev(&mut self) -> usize {
        self.current = if self.current == 0 {
            self.max_index()
        } else {
            self.current - 1
        };
        self.current
    }

    /// Jump to `index`, clamped to `[0, max_index]`
    pub fn go_to(&mut self, index: usize) -> usize {
        self.current = index.min(self.max_index());
        self.current
    }

    /// Update the page size. Returns `true` if it changed.
    ///
    /// The current index is clamped down when the new bounds no longer contain it.
    pub fn set_items_per_view(&mut self, items_per_view: usize) -> bool {
        let items_per_view = items_per_view.max(1);
        if items_per_view == self.items_per_view {
            return false;
        }
        self.items_per_view = items_per_view;
        self.clamp();
        true
    }

    /// Update the number of items, clamping the current index
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.clamp();
    }

    /// Index into the item sequence of the leftmost visible card
    pub fn first_visible_item(&self) -> usize {
        match self.policy {
            StepPolicy::Page => self.current * self.items_per_view,
            StepPolicy::Item => self.current,
        }
    }

    /// Range of item indices currently on screen
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.first_visible_item().min(self.item_count);
        let end = (start + self.items_per_view).min(self.item_count);
        start..end
    }

    /// Horizontal track translation, as a percentage of the viewport width
    pub fn track_offset_percent(&self) -> f64 {
        -(self.first_visible_item() as f64 * 100.0 / self.items_per_view as f64)
    }

    fn clamp(&mut self) {
        let max = self.max_index();
        if self.current > max {
            tracing::debug!("Clamping carousel index {} -> {}", self.current, max);
            self.current = max;
        }
    }
}
