//! Screen layout definitions for the TUI
//!
//! Header on top, the four carousels stacked with equal height, and an
//! optional one-row status bar at the bottom.

use lissnify_core::CarouselId;
use ratatui::layout::{Constraint, Layout, Rect};

const HEADER_HEIGHT: u16 = 3;
const STATUS_BAR_HEIGHT: u16 = 2;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, content source and loading state
    pub header: Rect,

    /// One area per carousel, in `CarouselId::ALL` order
    pub carousels: [Rect; 4],

    /// Zero-height when the status bar is hidden
    pub status: Rect,
}

impl ScreenAreas {
    pub fn carousel(&self, id: CarouselId) -> Rect {
        let pos = CarouselId::ALL
            .iter()
            .position(|c| *c == id)
            .unwrap_or_default();
        self.carousels[pos]
    }
}

/// Create the main screen layout
pub fn create(area: Rect, show_status_bar: bool) -> ScreenAreas {
    let status_height = if show_status_bar { STATUS_BAR_HEIGHT } else { 0 };

    let [header, body, status] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(status_height),
    ])
    .areas(area);

    let carousels = Layout::vertical([Constraint::Fill(1); 4]).areas(body);

    ScreenAreas {
        header,
        carousels,
        status,
    }
}
