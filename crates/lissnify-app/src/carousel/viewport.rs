//! Viewport width observation.
//!
//! [`ViewportProvider`] is the injected source of the current width (the
//! terminal in production, a fixed value in tests). [`ViewportWidthObserver`]
//! turns widths into items-per-view through a [`BreakpointTable`] and only
//! reacts to resize events while attached.

use lissnify_core::BreakpointTable;

/// Source of the current viewport width, in terminal columns
pub trait ViewportProvider {
    fn width(&self) -> u16;
}

/// A viewport with a constant width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedViewport(pub u16);

impl ViewportProvider for FixedViewport {
    fn width(&self) -> u16 {
        self.0
    }
}

/// Derives items-per-view from resize events
#[derive(Debug, Clone)]
pub struct ViewportWidthObserver {
    table: BreakpointTable,
    items_per_view: usize,
    attached: bool,
}

impl ViewportWidthObserver {
    pub fn new(table: BreakpointTable) -> Self {
        let items_per_view = table.fallback().max(1);
        Self {
            table,
            items_per_view,
            attached: false,
        }
    }

    /// Start listening and take an initial reading from `viewport`
    pub fn attach(&mut self, viewport: &dyn ViewportProvider) -> usize {
        self.attached = true;
        self.items_per_view = self.table.items_per_view(viewport.width());
        self.items_per_view
    }

    /// Stop listening. Later resize events are ignored.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    pub fn table(&self) -> &BreakpointTable {
        &self.table
    }

    /// Handle a resize. Returns the new items-per-view only when it changed.
    pub fn on_resize(&mut self, width: u16) -> Option<usize> {
        if !self.attached {
            return None;
        }
        let items_per_view = self.table.items_per_view(width);
        if items_per_view == self.items_per_view {
            return None;
        }
        tracing::debug!(
            "Viewport width {} -> {} items per view (was {})",
            width,
            items_per_view,
            self.items_per_view
        );
        self.items_per_view = items_per_view;
        Some(items_per_view)
    }
}
